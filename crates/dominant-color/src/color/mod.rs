//! Color model: representations and perceptual metrics.
//!
//! [`Rgb`] is the canonical type; [`Hsl`] and [`Cmyk`] are derived views
//! obtained through `From` conversions. Contrast and luminance metrics follow
//! the WCAG formulas so downstream accessibility checks stay bit-exact.

mod cmyk;
mod contrast;
mod error;
mod hsl;
mod rgb;
mod shades;

pub use cmyk::Cmyk;
pub use contrast::{contrast_ratio, readable_text_color, wcag_level, WcagLevel};
pub use error::ParseColorError;
pub use hsl::Hsl;
pub use rgb::Rgb;
pub use shades::{tints_and_shades, TintsShades};
