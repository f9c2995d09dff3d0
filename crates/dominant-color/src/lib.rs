//! dominant-color: palette extraction from images
//!
//! This library reduces an image's pixel population to a small, representative
//! palette of colors via stride sampling and k-means clustering in RGB space.
//! It also provides the supporting color model: hex/RGB/HSL/CMYK conversions
//! and WCAG luminance/contrast metrics.
//!
//! # Quick Start
//!
//! The [`PaletteExtractor`] builder is the primary entry point:
//!
//! ```
//! use dominant_color::{PaletteExtractor, PixelBuffer};
//!
//! // A 2x1 buffer of opaque red pixels (RGBA8).
//! let data = vec![255, 0, 0, 255, 255, 0, 0, 255];
//! let buffer = PixelBuffer::from_rgba8(2, 1, data).unwrap();
//!
//! let palette = PaletteExtractor::new().count(1).extract_buffer(&buffer);
//! assert_eq!(palette[0].to_hex(), "#FF0000");
//! ```
//!
//! For files, use the async [`PaletteExtractor::extract_path`]; for raw
//! encoded bytes, [`PaletteExtractor::extract_bytes`].
//!
//! # Pipeline Overview
//!
//! ```text
//! image bytes
//!     |
//!     v
//! PixelBuffer             (decode boundary -- the only fallible stage)
//!     |
//!     v
//! sample_pixels()          (stride grid, alpha filter)
//!     |
//!     v
//! cluster()                (k-means over RGB, injectable random seeding)
//!     |
//!     v
//! Vec<Rgb>                 (sorted by descending luminance, rounded)
//! ```
//!
//! Sampling and clustering are total: they never fail, and an image whose
//! every sampled pixel is transparent yields a valid empty palette. All
//! failures originate at the decode boundary and surface as [`ExtractError`].
//!
//! # Determinism
//!
//! Centroid seeding draws from an injected [`rand::Rng`], so results vary
//! across calls by default. Given a fixed seed
//! ([`PaletteExtractor::extract_buffer_with`]), the whole pipeline is
//! deterministic.

pub mod api;
pub mod cluster;
pub mod color;
pub mod decode;
pub mod sample;


pub use api::{ExtractError, PaletteExtractor, DEFAULT_COLOR_COUNT, DEFAULT_MAX_ITERATIONS};
pub use cluster::{cluster, Centroid};
pub use color::{
    contrast_ratio, readable_text_color, tints_and_shades, wcag_level, Cmyk, Hsl, ParseColorError,
    Rgb, TintsShades, WcagLevel,
};
pub use decode::PixelBuffer;
pub use sample::{sample_pixels, SampleOptions, DEFAULT_ALPHA_CUTOFF};
