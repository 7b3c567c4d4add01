//! Decoder for the custom uncompressed grayscale format.

use tracing::{debug, warn};

use crate::image_pipeline::buffer::{PixelBuffer, SampleDepth};
use crate::image_pipeline::common::{ConversionError, Result};

/// Header length in bytes: height then width, each a big-endian `u16`.
const HEADER_LEN: usize = 4;

pub struct GrayRawReader;

impl super::reader::RawImageReader for GrayRawReader {
    /// Decodes a raw grayscale file into a single-channel 16-bit buffer.
    ///
    /// The header declares height before width; that order is a format
    /// contract, not a convention. Zero dimensions are rejected rather than
    /// passed through, and a payload shorter than the header declares is
    /// reported as truncated instead of being silently cut short.
    fn read_raw(&self, data: &[u8]) -> Result<PixelBuffer> {
        debug!("Decoding raw grayscale image, {} bytes", data.len());

        if data.len() < HEADER_LEN {
            return Err(ConversionError::TruncatedData {
                expected: HEADER_LEN,
                actual: data.len(),
            });
        }

        let height = u16::from_be_bytes([data[0], data[1]]);
        let width = u16::from_be_bytes([data[2], data[3]]);

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(
                width as u32,
                height as u32,
            ));
        }

        let sample_count = width as usize * height as usize;
        let expected = HEADER_LEN + 2 * sample_count;
        if data.len() < expected {
            return Err(ConversionError::TruncatedData {
                expected,
                actual: data.len(),
            });
        }
        if data.len() > expected {
            warn!(
                "Raw image carries {} bytes past the declared payload, ignoring them",
                data.len() - expected
            );
        }

        let samples: Vec<u16> = data[HEADER_LEN..expected]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();

        debug!("Decoded raw image: {}x{}", width, height);

        PixelBuffer::new(width, height, 1, SampleDepth::Sixteen, samples)
    }
}
