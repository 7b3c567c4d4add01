//! Custom uncompressed grayscale format
//!
//! On-disk layout: a 4-byte header holding height then width as big-endian
//! `u16` (the field order is part of the format), followed by
//! `width * height` row-major big-endian 16-bit single-channel samples.
//! No magic number, no version field, no compression.

mod gray_raw_reader;
mod gray_raw_writer;
mod reader;
mod writer;

#[cfg(test)]
mod tests;

pub use gray_raw_reader::GrayRawReader;
pub use gray_raw_writer::GrayRawWriter;
pub use reader::RawImageReader;
pub use writer::RawImageWriter;
