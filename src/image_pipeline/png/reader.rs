use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::Result;

pub trait PngImageReader {
    fn read_png(&self, data: &[u8]) -> Result<PixelBuffer>;
}
