use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::Result;

pub trait RawImageReader {
    fn read_raw(&self, data: &[u8]) -> Result<PixelBuffer>;
}
