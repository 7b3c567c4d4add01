//! Sample-range and channel-order conversions
//!
//! The two axes are independent: channel-order conversion permutes components
//! within a pixel, range rescaling maps sample magnitudes. The pipeline still
//! applies them in one fixed order for reproducibility:
//! decode → channel-order fix-up → range rescale → (display | encode).

mod channel_order;
mod grayscale;
mod rescale;


pub use channel_order::convert_channel_order;
pub use grayscale::to_grayscale;
pub use rescale::rescale_to_display;
