use tracing::debug;

use crate::image_pipeline::buffer::{PixelBuffer, SampleDepth};

/// Linearly maps the buffer's observed sample range onto the 8-bit display
/// range `[0, 255]`.
///
/// The mapping uses the buffer's own minimum and maximum, not a fixed-depth
/// assumption, so a dark 16-bit image still spreads across the full display
/// range. Arithmetic truncates: the midpoint of a full 16-bit range maps to
/// 127. A flat image (min == max) maps every sample to 0.
pub fn rescale_to_display(image: &PixelBuffer) -> PixelBuffer {
    let min = image.samples.iter().copied().min().unwrap_or(0);
    let max = image.samples.iter().copied().max().unwrap_or(0);

    debug!(
        "Rescaling {}x{} image to display range, observed [{}, {}]",
        image.width, image.height, min, max
    );

    let range = (max - min) as u32;
    let samples = if range == 0 {
        vec![0u16; image.samples.len()]
    } else {
        image
            .samples
            .iter()
            .map(|&sample| ((sample - min) as u32 * 255 / range) as u16)
            .collect()
    };

    PixelBuffer {
        width: image.width,
        height: image.height,
        channels: image.channels,
        depth: SampleDepth::Eight,
        samples,
    }
}
