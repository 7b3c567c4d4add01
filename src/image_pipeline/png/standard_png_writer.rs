use std::io::Write;

use tracing::debug;

use crate::image_pipeline::buffer::{ChannelOrder, PixelBuffer, SampleDepth};
use crate::image_pipeline::common::{ConversionError, Result};
use crate::image_pipeline::normalize;
use crate::image_pipeline::png::writer::PngImageWriter;

pub struct StandardPngWriter;

impl PngImageWriter for StandardPngWriter {
    /// Encodes an 8-bit buffer as PNG.
    ///
    /// Single-channel buffers are promoted to 3-channel RGB so the encode
    /// path stays uniform. Color buffers handed over in display order are
    /// converted back to the interchange order first; the emitted layout is
    /// always RGB or RGBA.
    fn write_png(
        &self,
        image: &PixelBuffer,
        order: ChannelOrder,
        output: &mut dyn Write,
    ) -> Result<()> {
        if image.depth != SampleDepth::Eight {
            return Err(ConversionError::EncodeError(
                "PNG export expects 8-bit samples; rescale to display range first".to_string(),
            ));
        }

        debug!(
            "Encoding PNG image: {}x{}, {} channels",
            image.width, image.height, image.channels
        );

        let (color_type, samples) = match image.channels {
            1 => {
                let rgb: Vec<u8> = image
                    .samples
                    .iter()
                    .flat_map(|&v| [v as u8, v as u8, v as u8])
                    .collect();
                (png::ColorType::Rgb, rgb)
            }
            3 | 4 => {
                let interchange = normalize::convert_channel_order(image, order, ChannelOrder::Rgb)?;
                let color_type = if image.channels == 3 {
                    png::ColorType::Rgb
                } else {
                    png::ColorType::Rgba
                };
                let bytes = interchange.samples.iter().map(|&v| v as u8).collect();
                (color_type, bytes)
            }
            count => return Err(ConversionError::UnsupportedChannelCount(count)),
        };

        let mut buffer = Vec::new();
        {
            let mut encoder =
                png::Encoder::new(&mut buffer, image.width as u32, image.height as u32);
            encoder.set_color(color_type);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
            writer
                .write_image_data(&samples)
                .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
