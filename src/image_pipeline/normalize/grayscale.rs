use crate::image_pipeline::buffer::{ChannelOrder, PixelBuffer};
use crate::image_pipeline::common::{ConversionError, Result};

/// Reduces a color buffer to a single luma channel using integer Rec. 601
/// weights. `order` names the component ordering of the input so the weights
/// land on the right channels. Single-channel buffers pass through unchanged.
pub fn to_grayscale(image: &PixelBuffer, order: ChannelOrder) -> Result<PixelBuffer> {
    match image.channels {
        1 => Ok(image.clone()),
        3 | 4 => {
            let (red_index, blue_index) = match order {
                ChannelOrder::Rgb => (0, 2),
                ChannelOrder::Bgr => (2, 0),
            };

            let samples = image
                .samples
                .chunks_exact(image.channels as usize)
                .map(|pixel| {
                    let red = pixel[red_index] as u32;
                    let green = pixel[1] as u32;
                    let blue = pixel[blue_index] as u32;
                    ((299 * red + 587 * green + 114 * blue) / 1000) as u16
                })
                .collect();

            Ok(PixelBuffer {
                width: image.width,
                height: image.height,
                channels: 1,
                depth: image.depth,
                samples,
            })
        }
        count => Err(ConversionError::UnsupportedChannelCount(count)),
    }
}
