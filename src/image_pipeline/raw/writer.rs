use std::io::Write;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::Result;

pub trait RawImageWriter {
    fn write_raw(&self, image: &PixelBuffer, output: &mut dyn Write) -> Result<()>;
}
