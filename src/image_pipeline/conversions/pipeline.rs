use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::image_pipeline::{
    buffer::{ChannelOrder, PixelBuffer},
    common::{ConversionError, Result},
    conversions::{
        display::ImageDisplay,
        types::{PipelineAction, PipelineConfig, SourceFormat},
    },
    normalize,
    png::{PngImageReader, PngImageWriter, StandardPngReader, StandardPngWriter},
    raw::{GrayRawReader, GrayRawWriter, RawImageReader, RawImageWriter},
};

/// Orchestrates one user action: decode → channel-order fix-up → range
/// rescale → (display | encode). Nothing is retained between actions; a
/// failed action reports its error and leaves the pipeline ready for the
/// next one.
pub struct ImagePipeline<PR, PW, RR, RW> {
    png_reader: PR,
    png_writer: PW,
    raw_reader: RR,
    raw_writer: RW,
    config: PipelineConfig,
}

impl ImagePipeline<StandardPngReader, StandardPngWriter, GrayRawReader, GrayRawWriter> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            png_reader: StandardPngReader,
            png_writer: StandardPngWriter,
            raw_reader: GrayRawReader,
            raw_writer: GrayRawWriter,
            config,
        }
    }
}

impl<PR, PW, RR, RW> ImagePipeline<PR, PW, RR, RW>
where
    PR: PngImageReader,
    PW: PngImageWriter,
    RR: RawImageReader,
    RW: RawImageWriter,
{
    pub fn with_custom(
        png_reader: PR,
        png_writer: PW,
        raw_reader: RR,
        raw_writer: RW,
        config: PipelineConfig,
    ) -> Self {
        Self {
            png_reader,
            png_writer,
            raw_reader,
            raw_writer,
            config,
        }
    }

    fn decode(&self, data: &[u8], format: SourceFormat) -> Result<PixelBuffer> {
        match format {
            SourceFormat::Png => self.png_reader.read_png(data),
            SourceFormat::GrayRaw => self.raw_reader.read_raw(data),
        }
    }

    /// Decodes `data` and normalizes the result for display: color buffers
    /// are converted from the interchange order to display order, then every
    /// buffer is rescaled to the 8-bit display range.
    pub fn load_normalized(&self, data: &[u8], format: SourceFormat) -> Result<PixelBuffer> {
        let image = {
            let _span = tracing::info_span!("decode", ?format).entered();
            self.decode(data, format)?
        };

        let _span = tracing::info_span!(
            "normalize",
            width = image.width,
            height = image.height,
            channels = image.channels
        )
        .entered();

        let image = match image.channels {
            1 => image,
            3 | 4 => normalize::convert_channel_order(&image, ChannelOrder::Rgb, ChannelOrder::Bgr)?,
            count => return Err(ConversionError::UnsupportedChannelCount(count)),
        };

        Ok(normalize::rescale_to_display(&image))
    }

    /// Normalizes `data` and encodes it as PNG into `output`.
    #[instrument(skip(self, data, output), fields(input_size = data.len()))]
    pub fn convert_to_png(
        &self,
        data: &[u8],
        format: SourceFormat,
        output: &mut dyn Write,
    ) -> Result<()> {
        let image = self.load_normalized(data, format)?;

        let _span = tracing::info_span!("encode_png").entered();
        self.png_writer.write_png(&image, ChannelOrder::Bgr, output)
    }

    /// Normalizes `data`, reduces color buffers to grayscale, and encodes the
    /// result in the raw grayscale format into `output`.
    #[instrument(skip(self, data, output), fields(input_size = data.len()))]
    pub fn convert_to_raw(
        &self,
        data: &[u8],
        format: SourceFormat,
        output: &mut dyn Write,
    ) -> Result<()> {
        let image = self.load_normalized(data, format)?;
        let gray = normalize::to_grayscale(&image, ChannelOrder::Bgr)?;

        let _span = tracing::info_span!("encode_raw").entered();
        self.raw_writer.write_raw(&gray, output)
    }

    /// Normalizes `data` and hands it to the display collaborator together
    /// with the configured display bounds.
    pub fn display(
        &self,
        data: &[u8],
        format: SourceFormat,
        sink: &dyn ImageDisplay,
    ) -> Result<()> {
        let image = self.load_normalized(data, format)?;

        let _span = tracing::info_span!("display").entered();
        sink.show(&image, self.config.display_width, self.config.display_height)
    }

    /// Runs one action against the file at `input_path`.
    ///
    /// The source format is picked from the file extension. Exports encode
    /// fully in memory and are persisted atomically: the bytes land in a
    /// sibling temporary file that is renamed into place, so a failure never
    /// leaves a partial output behind. Returns the written path for exports,
    /// `None` for display.
    #[instrument(skip(self, input_path, sink))]
    pub fn run_file(
        &self,
        action: PipelineAction,
        input_path: &Path,
        sink: &dyn ImageDisplay,
    ) -> Result<Option<PathBuf>> {
        let format = SourceFormat::from_path(input_path);

        info!(
            input = %input_path.display(),
            ?format,
            ?action,
            "Processing file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        match action {
            PipelineAction::Display => {
                self.display(&input_data, format, sink)?;
                Ok(None)
            }
            PipelineAction::ExportPng => {
                let output_path = self.output_path(input_path, Some("png"));
                let mut encoded = Vec::new();
                self.convert_to_png(&input_data, format, &mut encoded)?;
                self.persist_atomically(&output_path, &encoded)?;
                info!(output = %output_path.display(), "Conversion complete");
                Ok(Some(output_path))
            }
            PipelineAction::ExportRaw => {
                let output_path = self.output_path(input_path, None);
                let mut encoded = Vec::new();
                self.convert_to_raw(&input_data, format, &mut encoded)?;
                self.persist_atomically(&output_path, &encoded)?;
                info!(output = %output_path.display(), "Conversion complete");
                Ok(Some(output_path))
            }
        }
    }

    /// Derives the export path: input stem + configured suffix + target
    /// extension. Raw exports carry no extension.
    fn output_path(&self, input: &Path, extension: Option<&str>) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let file_name = match extension {
            Some(ext) => format!("{}{}.{}", stem, self.config.output_suffix, ext),
            None => format!("{}{}", stem, self.config.output_suffix),
        };

        input.with_file_name(file_name)
    }

    fn persist_atomically(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let mut tmp_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "output".into());
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);

        std::fs::write(&tmp_path, bytes).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", tmp_path.display(), e))
        })?;

        std::fs::rename(&tmp_path, path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp_path);
            ConversionError::OutputWriteError(format!("{}: {}", path.display(), e))
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}
