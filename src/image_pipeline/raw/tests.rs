use crate::image_pipeline::buffer::{PixelBuffer, SampleDepth};
use crate::image_pipeline::common::ConversionError;
use crate::image_pipeline::raw::{GrayRawReader, GrayRawWriter, RawImageReader, RawImageWriter};

fn raw_bytes(height: u16, width: u16, samples: &[u16]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    for &sample in samples {
        data.extend_from_slice(&sample.to_be_bytes());
    }
    data
}

#[test]
fn decode_reads_height_before_width() {
    let data = raw_bytes(2, 3, &[1, 2, 3, 4, 5, 6]);

    let image = GrayRawReader.read_raw(&data).unwrap();

    assert_eq!(image.width, 3);
    assert_eq!(image.height, 2);
    assert_eq!(image.channels, 1);
    assert_eq!(image.depth, SampleDepth::Sixteen);
}

#[test]
fn decode_two_by_two_preserves_exact_samples() {
    let data = raw_bytes(2, 2, &[0, 65535, 32767, 10]);

    let image = GrayRawReader.read_raw(&data).unwrap();

    assert_eq!(image.width, 2);
    assert_eq!(image.height, 2);
    assert_eq!(image.samples, vec![0, 65535, 32767, 10]);
}

#[test]
fn round_trip_preserves_dimensions_and_samples() {
    let original = PixelBuffer::new(
        3,
        2,
        1,
        SampleDepth::Sixteen,
        vec![0, 1, 256, 65535, 32768, 7],
    )
    .unwrap();

    let mut encoded = Vec::new();
    GrayRawWriter.write_raw(&original, &mut encoded).unwrap();
    let decoded = GrayRawReader.read_raw(&encoded).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn decode_rejects_truncated_header() {
    let result = GrayRawReader.read_raw(&[0, 2, 0]);

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::TruncatedData {
            expected: 4,
            actual: 3
        }
    ));
}

#[test]
fn decode_rejects_payload_shorter_than_header_declares() {
    // Header declares 2x2 but only three samples follow.
    let data = raw_bytes(2, 2, &[1, 2, 3]);

    let result = GrayRawReader.read_raw(&data);

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::TruncatedData {
            expected: 12,
            actual: 10
        }
    ));
}

#[test]
fn decode_rejects_zero_dimensions() {
    let data = raw_bytes(0, 2, &[]);

    let result = GrayRawReader.read_raw(&data);

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::InvalidDimensions(2, 0)
    ));
}

#[test]
fn decode_ignores_trailing_bytes() {
    let mut data = raw_bytes(1, 2, &[5, 6]);
    data.extend_from_slice(&[0xAA, 0xBB, 0xCC]);

    let image = GrayRawReader.read_raw(&data).unwrap();

    assert_eq!(image.samples, vec![5, 6]);
}

#[test]
fn encode_rejects_multi_channel_buffers() {
    let color = PixelBuffer::new(1, 1, 3, SampleDepth::Eight, vec![10, 20, 30]).unwrap();

    let mut output = Vec::new();
    let result = GrayRawWriter.write_raw(&color, &mut output);

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::UnsupportedChannelCount(3)
    ));
    assert!(output.is_empty());
}

#[test]
fn encode_widens_eight_bit_samples() {
    let image = PixelBuffer::new(2, 1, 1, SampleDepth::Eight, vec![0, 255]).unwrap();

    let mut encoded = Vec::new();
    GrayRawWriter.write_raw(&image, &mut encoded).unwrap();

    assert_eq!(encoded, vec![0, 1, 0, 2, 0, 0, 0, 255]);
}
