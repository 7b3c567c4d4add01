use crate::image_pipeline::buffer::{ChannelOrder, PixelBuffer};
use crate::image_pipeline::common::{ConversionError, Result};

/// Converts a buffer between the two component orderings by swapping the
/// first and third channel of each pixel. The alpha channel of a 4-channel
/// buffer stays in place. Single-channel buffers have no ordering, so the
/// call is a no-op, as is a conversion where `from == to`.
pub fn convert_channel_order(
    image: &PixelBuffer,
    from: ChannelOrder,
    to: ChannelOrder,
) -> Result<PixelBuffer> {
    match image.channels {
        1 => Ok(image.clone()),
        3 | 4 => {
            if from == to {
                return Ok(image.clone());
            }

            let mut samples = image.samples.clone();
            for pixel in samples.chunks_exact_mut(image.channels as usize) {
                pixel.swap(0, 2);
            }

            Ok(PixelBuffer {
                width: image.width,
                height: image.height,
                channels: image.channels,
                depth: image.depth,
                samples,
            })
        }
        count => Err(ConversionError::UnsupportedChannelCount(count)),
    }
}
