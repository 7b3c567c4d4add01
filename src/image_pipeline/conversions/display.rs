use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::Result;

/// The display surface the pipeline hands normalized images to.
///
/// Implementations receive an 8-bit buffer in display channel order together
/// with the configured bounds, and may resample however suits the surface.
/// The call blocks until the image has been presented.
pub trait ImageDisplay {
    fn show(&self, image: &PixelBuffer, max_width: u16, max_height: u16) -> Result<()>;
}
