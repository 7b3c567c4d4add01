//! PNG reading and writing module
//!
//! Adapter over the `png` crate. The rest of the pipeline only relies on the
//! contract expressed by the two traits here: decode yields channel-interleaved
//! row-major samples in the library's R-first order, encode expects 8-bit
//! samples and always emits RGB or RGBA, never a display ordering.

mod reader;
mod standard_png_reader;
mod standard_png_writer;
mod writer;


pub use reader::PngImageReader;
pub use standard_png_reader::StandardPngReader;
pub use standard_png_writer::StandardPngWriter;
pub use writer::PngImageWriter;
