//! The unified in-memory image representation.
//!
//! Every codec decodes into a [`PixelBuffer`] and every conversion and encode
//! path consumes one. A buffer is created by a decode operation, owned by a
//! single pipeline action, and discarded when that action completes.

use crate::image_pipeline::common::{ConversionError, Result};

/// Bit depth of the samples held by a [`PixelBuffer`].
///
/// Samples are always stored as `u16`; `Eight` means every sample fits the
/// 8-bit display range `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleDepth {
    Eight,
    Sixteen,
}

/// Per-pixel component ordering for 3- and 4-channel buffers.
///
/// `Rgb` is the interchange order used by the PNG codec, `Bgr` the display
/// order used while a buffer is being viewed. The fourth (alpha) channel,
/// when present, is unaffected by the ordering. This is a tag passed into
/// conversion calls, not a property stored in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

/// Decoded image data.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Width of the image in pixels
    pub width: u16,
    /// Height of the image in pixels
    pub height: u16,
    /// Samples per pixel: 1 (grayscale), 3 (color) or 4 (color with alpha)
    pub channels: u8,
    /// Bit depth of the stored samples
    pub depth: SampleDepth,
    /// Row-major, channel-interleaved samples, length = width * height * channels
    pub samples: Vec<u16>,
}

impl PixelBuffer {
    /// Builds a buffer after validating the dimension invariant:
    /// `width, height > 0`, `channels` one of {1, 3, 4}, and
    /// `samples.len() == width * height * channels`.
    pub fn new(
        width: u16,
        height: u16,
        channels: u8,
        depth: SampleDepth,
        samples: Vec<u16>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(
                width as u32,
                height as u32,
            ));
        }
        if !matches!(channels, 1 | 3 | 4) {
            return Err(ConversionError::UnsupportedChannelCount(channels));
        }

        let expected = width as usize * height as usize * channels as usize;
        if samples.len() != expected {
            return Err(ConversionError::TruncatedData {
                expected: expected * 2,
                actual: samples.len() * 2,
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            depth,
            samples,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_matching_sample_length() {
        let buffer = PixelBuffer::new(2, 3, 1, SampleDepth::Sixteen, vec![0; 6]).unwrap();
        assert_eq!(buffer.pixel_count(), 6);
        assert_eq!(buffer.samples.len(), 6);
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        let result = PixelBuffer::new(0, 3, 1, SampleDepth::Eight, vec![]);
        assert!(matches!(
            result.unwrap_err(),
            ConversionError::InvalidDimensions(0, 3)
        ));
    }

    #[test]
    fn new_rejects_two_channels() {
        let result = PixelBuffer::new(1, 1, 2, SampleDepth::Eight, vec![0, 0]);
        assert!(matches!(
            result.unwrap_err(),
            ConversionError::UnsupportedChannelCount(2)
        ));
    }

    #[test]
    fn new_rejects_sample_length_mismatch() {
        let result = PixelBuffer::new(2, 2, 3, SampleDepth::Eight, vec![0; 11]);
        assert!(matches!(
            result.unwrap_err(),
            ConversionError::TruncatedData { .. }
        ));
    }
}
