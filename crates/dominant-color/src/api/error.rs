//! Unified error type for the extraction pipeline.

use thiserror::Error;

/// Everything that can go wrong while extracting a palette.
///
/// All variants are terminal for the request: the pipeline performs no
/// retries and no partial-result recovery. Sampling and clustering are total
/// and never produce errors of their own; a fully transparent image yields an
/// empty palette, not an `ExtractError`.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The image file could not be read.
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    /// The input bytes could not be parsed as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The image decoded but its pixel data is not readable as RGBA.
    #[error("unable to access image pixels: {0}")]
    PixelAccess(String),
}
