use std::io::Write;

use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::{ConversionError, Result};

pub struct GrayRawWriter;

impl super::writer::RawImageWriter for GrayRawWriter {
    /// Encodes a single-channel buffer as the raw grayscale format, the exact
    /// inverse of [`GrayRawReader`](super::GrayRawReader). Samples are always
    /// written as big-endian `u16`, so 8-bit buffers are widened.
    fn write_raw(&self, image: &PixelBuffer, output: &mut dyn Write) -> Result<()> {
        if image.channels != 1 {
            return Err(ConversionError::UnsupportedChannelCount(image.channels));
        }

        debug!("Encoding raw grayscale image: {}x{}", image.width, image.height);

        let mut buffer = Vec::with_capacity(4 + image.samples.len() * 2);
        buffer.extend_from_slice(&image.height.to_be_bytes());
        buffer.extend_from_slice(&image.width.to_be_bytes());
        for &sample in &image.samples {
            buffer.extend_from_slice(&sample.to_be_bytes());
        }

        output.write_all(&buffer)?;

        debug!("Raw encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
