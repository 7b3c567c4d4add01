use std::io::Write;

use crate::image_pipeline::buffer::{ChannelOrder, PixelBuffer};
use crate::image_pipeline::common::Result;

pub trait PngImageWriter {
    /// Encodes `image` as PNG. `order` names the component ordering the
    /// samples currently use; implementations convert to the interchange
    /// order themselves rather than assume it.
    fn write_png(
        &self,
        image: &PixelBuffer,
        order: ChannelOrder,
        output: &mut dyn Write,
    ) -> Result<()>;
}
