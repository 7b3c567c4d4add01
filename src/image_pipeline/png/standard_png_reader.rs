//! PNG reader implementation using the `png` library.
//!
//! Decodes grayscale, RGB, and RGBA images at 8 or 16 bits per channel.
//! Whatever the source depth, samples land in the pipeline's `u16` storage
//! with the depth recorded, so the normalizer can rescale without guessing.

use std::io::Cursor;

use tracing::debug;

use crate::image_pipeline::buffer::{PixelBuffer, SampleDepth};
use crate::image_pipeline::common::{ConversionError, Result};
use crate::image_pipeline::png::reader::PngImageReader;

pub struct StandardPngReader;

impl PngImageReader for StandardPngReader {
    /// Reads and decodes a PNG from a byte array.
    ///
    /// Channel count follows the source color type: grayscale stays single
    /// channel, RGB decodes to 3 channels, RGBA to 4. Samples keep the
    /// library's R-first interchange order; callers that want a display
    /// ordering convert explicitly afterwards. Grayscale-with-alpha and
    /// palette images are reported as decode failures, and images wider or
    /// taller than `u16::MAX` do not fit the pixel buffer and are rejected.
    fn read_png(&self, data: &[u8]) -> Result<PixelBuffer> {
        debug!("Decoding PNG image, {} bytes", data.len());

        let decoder = png::Decoder::new(Cursor::new(data));
        let mut reader = decoder
            .read_info()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let info = reader.info();
        let source_width = info.width;
        let source_height = info.height;
        let color_type = info.color_type;
        let bit_depth = info.bit_depth;

        let buffer_size = reader.output_buffer_size().ok_or_else(|| {
            ConversionError::DecodeError("failed to determine PNG buffer size".to_string())
        })?;
        let mut buf = vec![0u8; buffer_size];
        let frame_info = reader
            .next_frame(&mut buf)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
        let bytes = &buf[..frame_info.buffer_size()];

        let width: u16 = source_width
            .try_into()
            .map_err(|_| ConversionError::InvalidDimensions(source_width, source_height))?;
        let height: u16 = source_height
            .try_into()
            .map_err(|_| ConversionError::InvalidDimensions(source_width, source_height))?;

        let (channels, depth) = match (color_type, bit_depth) {
            (png::ColorType::Grayscale, png::BitDepth::Eight) => (1, SampleDepth::Eight),
            (png::ColorType::Grayscale, png::BitDepth::Sixteen) => (1, SampleDepth::Sixteen),
            (png::ColorType::Rgb, png::BitDepth::Eight) => (3, SampleDepth::Eight),
            (png::ColorType::Rgb, png::BitDepth::Sixteen) => (3, SampleDepth::Sixteen),
            (png::ColorType::Rgba, png::BitDepth::Eight) => (4, SampleDepth::Eight),
            (png::ColorType::Rgba, png::BitDepth::Sixteen) => (4, SampleDepth::Sixteen),
            (png::ColorType::GrayscaleAlpha, _) => {
                return Err(ConversionError::DecodeError(
                    "grayscale+alpha PNG is not supported".to_string(),
                ));
            }
            (png::ColorType::Indexed, _) => {
                return Err(ConversionError::DecodeError(
                    "indexed PNG is not supported".to_string(),
                ));
            }
            (color, depth) => {
                return Err(ConversionError::DecodeError(format!(
                    "unsupported PNG format: {:?} with bit depth {:?}",
                    color, depth
                )));
            }
        };

        // PNG stores 16-bit samples big-endian.
        let samples: Vec<u16> = match depth {
            SampleDepth::Eight => bytes.iter().map(|&b| b as u16).collect(),
            SampleDepth::Sixteen => bytes
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect(),
        };

        debug!(
            "Decoded PNG image: {}x{}, {} channels, {:?}",
            width, height, channels, depth
        );

        PixelBuffer::new(width, height, channels, depth, samples)
    }
}
