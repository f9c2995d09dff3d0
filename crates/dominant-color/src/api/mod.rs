//! Public API: the [`PaletteExtractor`] builder and the unified
//! [`ExtractError`] type.

mod error;
mod extractor;

pub use error::ExtractError;
pub use extractor::{PaletteExtractor, DEFAULT_COLOR_COUNT, DEFAULT_MAX_ITERATIONS};
