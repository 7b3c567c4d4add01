//! Shared infrastructure for the image pipeline.

pub mod error;

pub use error::{ConversionError, Result};
