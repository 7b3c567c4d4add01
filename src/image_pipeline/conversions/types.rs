use std::path::Path;

/// The two on-disk representations the pipeline ingests.
///
/// Detection is by file extension only: `.png` (any case) is PNG, everything
/// else is treated as the raw grayscale format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    GrayRaw,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("png") => SourceFormat::Png,
            _ => SourceFormat::GrayRaw,
        }
    }
}

/// What to do with a loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineAction {
    /// Show the normalized image on the display collaborator
    Display,
    /// Write the normalized image next to the input as PNG
    ExportPng,
    /// Write the normalized image next to the input in the raw grayscale format
    ExportRaw,
}

/// Configuration for the conversion pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum width handed to the display collaborator
    pub display_width: u16,
    /// Maximum height handed to the display collaborator
    pub display_height: u16,
    /// Suffix appended to the input file stem when deriving export paths
    pub output_suffix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            display_width: 500,
            display_height: 500,
            output_suffix: "_converted".to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    display_width: Option<u16>,
    display_height: Option<u16>,
    output_suffix: Option<String>,
}

impl PipelineConfigBuilder {
    pub fn display_width(mut self, width: u16) -> Self {
        self.display_width = Some(width);
        self
    }

    pub fn display_height(mut self, height: u16) -> Self {
        self.display_height = Some(height);
        self
    }

    pub fn output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = Some(suffix.into());
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            display_width: self.display_width.unwrap_or(default.display_width),
            display_height: self.display_height.unwrap_or(default.display_height),
            output_suffix: self.output_suffix.unwrap_or(default.output_suffix),
        }
    }
}
