//! Image ingestion and conversion pipeline
//!
//! This module normalizes two on-disk image representations (PNG and a
//! custom uncompressed 16-bit grayscale format) into a single in-memory
//! pixel buffer, and re-exports the buffer for display or as one of the two
//! formats. Reading, writing, and displaying happen behind traits so the
//! orchestration can be exercised without touching real files or a screen.

pub mod buffer;
pub mod common;
pub mod conversions;
pub mod normalize;
pub mod png;
pub mod raw;

pub use common::{
    ConversionError,
    Result,
};

pub use buffer::{
    ChannelOrder,
    PixelBuffer,
    SampleDepth,
};

pub use raw::{
    GrayRawReader,
    GrayRawWriter,
    RawImageReader,
    RawImageWriter,
};

pub use png::{
    PngImageReader,
    PngImageWriter,
    StandardPngReader,
    StandardPngWriter,
};

pub use conversions::{
    ImageDisplay,
    ImagePipeline,
    PipelineAction,
    PipelineConfig,
    PipelineConfigBuilder,
    SourceFormat,
};
