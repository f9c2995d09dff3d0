//! PaletteExtractor builder -- the primary entry point for the crate.
//!
//! Wraps the extraction pipeline (decode, stride sampling, k-means,
//! luminance ordering) behind a fluent builder with sensible defaults.

use std::path::Path;

use rand::Rng;
use tracing::debug;

use crate::cluster::{cluster, Centroid};
use crate::color::Rgb;
use crate::decode::PixelBuffer;
use crate::sample::{sample_pixels, SampleOptions, DEFAULT_ALPHA_CUTOFF};

use super::error::ExtractError;

/// Default number of colors to extract.
pub const DEFAULT_COLOR_COUNT: usize = 5;

/// Default iteration cap for the clustering loop.
pub const DEFAULT_MAX_ITERATIONS: usize = 14;

/// Long-edge length the stride policy aims for. Sampling cost on large
/// images stays roughly that of a 250-pixel-long-edge grid regardless of
/// actual resolution.
const TARGET_GRID_EDGE: u32 = 250;

/// Stride for a given image size: `max(1, floor(max(w, h) / 250))`.
fn stride_for(width: u32, height: u32) -> usize {
    (width.max(height) / TARGET_GRID_EDGE).max(1) as usize
}

/// High-level palette extraction builder.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder
///   pattern)
/// - Extraction methods take `&self`, so the builder is **reusable** across
///   images
/// - The extractor owns no state between calls; concurrent extractions do
///   not interfere
///
/// # Example
///
/// ```
/// use dominant_color::{PaletteExtractor, PixelBuffer};
///
/// let data = vec![[0u8, 0, 0, 255]; 9].concat();
/// let buffer = PixelBuffer::from_rgba8(3, 3, data).unwrap();
///
/// let extractor = PaletteExtractor::new().count(2);
/// let palette = extractor.extract_buffer(&buffer);
/// assert!(palette.iter().all(|c| c.to_hex() == "#000000"));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteExtractor {
    count: usize,
    max_iterations: usize,
    alpha_cutoff: u8,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self {
            count: DEFAULT_COLOR_COUNT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            alpha_cutoff: DEFAULT_ALPHA_CUTOFF,
        }
    }
}

impl PaletteExtractor {
    /// Create an extractor with the default configuration
    /// (5 colors, 14 iterations, alpha cutoff 125).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of colors to extract. 1 to 12 is the recommended
    /// range; the effective count is clamped to the number of sampled
    /// pixels.
    #[inline]
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the iteration cap for the clustering loop.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the alpha threshold below which pixels count as transparent.
    #[inline]
    pub fn alpha_cutoff(mut self, cutoff: u8) -> Self {
        self.alpha_cutoff = cutoff;
        self
    }

    /// Extract a palette from an image file.
    ///
    /// Reads the file asynchronously; decoding and clustering are
    /// synchronous CPU-bound work. Colors come back ordered by descending
    /// perceptual luminance.
    ///
    /// # Errors
    ///
    /// [`ExtractError::Io`] if the file cannot be read, otherwise as
    /// [`extract_bytes`](Self::extract_bytes).
    pub async fn extract_path(&self, path: impl AsRef<Path>) -> Result<Vec<Rgb>, ExtractError> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        self.extract_bytes(&bytes)
    }

    /// As [`extract_path`](Self::extract_path), formatting each color as an
    /// uppercase `#RRGGBB` string.
    pub async fn extract_path_hex(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<String>, ExtractError> {
        let palette = self.extract_path(path).await?;
        Ok(palette.iter().map(|color| color.to_hex()).collect())
    }

    /// Extract a palette from encoded image bytes (PNG, JPEG, GIF, ...).
    ///
    /// # Errors
    ///
    /// [`ExtractError::Decode`] if the bytes are not a readable image;
    /// [`ExtractError::PixelAccess`] if the decoded pixel data cannot be
    /// viewed as RGBA.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<Vec<Rgb>, ExtractError> {
        let buffer = PixelBuffer::decode(bytes)?;
        Ok(self.extract_buffer(&buffer))
    }

    /// Extract a palette from a decoded pixel buffer.
    ///
    /// Total: never fails. An image whose every sampled pixel is transparent
    /// yields an empty palette.
    pub fn extract_buffer(&self, buffer: &PixelBuffer) -> Vec<Rgb> {
        self.extract_buffer_with(buffer, &mut rand::thread_rng())
    }

    /// As [`extract_buffer`](Self::extract_buffer), with an injected random
    /// source for centroid seeding. With a fixed seed the whole pipeline is
    /// deterministic.
    pub fn extract_buffer_with<R: Rng + ?Sized>(
        &self,
        buffer: &PixelBuffer,
        rng: &mut R,
    ) -> Vec<Rgb> {
        let step = stride_for(buffer.width(), buffer.height());
        let options = SampleOptions::new()
            .step(step)
            .alpha_cutoff(self.alpha_cutoff);
        let samples = sample_pixels(buffer, &options);
        debug!(
            width = buffer.width(),
            height = buffer.height(),
            step,
            samples = samples.len(),
            "sampled image"
        );
        if samples.is_empty() {
            return Vec::new();
        }

        let mut centroids = cluster(&samples, self.count, self.max_iterations, rng);
        centroids.sort_by(|a, b| b.luminance().total_cmp(&a.luminance()));
        debug!(colors = centroids.len(), "extracted palette");
        centroids.iter().map(Centroid::round).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn solid_buffer(width: u32, height: u32, rgba: [u8; 4]) -> PixelBuffer {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        PixelBuffer::from_rgba8(width, height, data).unwrap()
    }

    #[test]
    fn test_stride_policy() {
        assert_eq!(stride_for(100, 100), 1);
        assert_eq!(stride_for(250, 250), 1);
        assert_eq!(stride_for(499, 10), 1);
        assert_eq!(stride_for(500, 10), 2);
        assert_eq!(stride_for(10, 1000), 4);
        assert_eq!(stride_for(4000, 3000), 16);
    }

    #[test]
    fn test_defaults() {
        let extractor = PaletteExtractor::new();
        assert_eq!(extractor.count, DEFAULT_COLOR_COUNT);
        assert_eq!(extractor.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(extractor.alpha_cutoff, DEFAULT_ALPHA_CUTOFF);
    }

    #[test]
    fn test_builder_chaining() {
        let extractor = PaletteExtractor::new()
            .count(8)
            .max_iterations(20)
            .alpha_cutoff(10);
        assert_eq!(extractor.count, 8);
        assert_eq!(extractor.max_iterations, 20);
        assert_eq!(extractor.alpha_cutoff, 10);
    }

    #[test]
    fn test_transparent_buffer_yields_empty_palette() {
        let buffer = solid_buffer(10, 10, [50, 60, 70, 0]);
        let palette = PaletteExtractor::new().extract_buffer(&buffer);
        assert!(palette.is_empty());
    }

    #[test]
    fn test_single_color_image_collapses() {
        let buffer = solid_buffer(100, 100, [13, 148, 136, 255]);
        let palette = PaletteExtractor::new().count(3).extract_buffer(&buffer);
        assert_eq!(palette.len(), 3);
        for color in palette {
            assert_eq!(color, Rgb::new(13, 148, 136));
        }
    }

    #[test]
    fn test_count_clamped_to_sample_count() {
        // A 2x2 buffer has 4 samples; asking for 9 colors yields 4.
        let buffer = solid_buffer(2, 2, [1, 2, 3, 255]);
        let palette = PaletteExtractor::new().count(9).extract_buffer(&buffer);
        assert_eq!(palette.len(), 4);
    }

    #[test]
    fn test_palette_sorted_by_descending_luminance() {
        // Half near-black, half near-white pixels.
        let mut data = Vec::new();
        for i in 0..100 {
            if i % 2 == 0 {
                data.extend_from_slice(&[245, 245, 245, 255]);
            } else {
                data.extend_from_slice(&[10, 10, 10, 255]);
            }
        }
        let buffer = PixelBuffer::from_rgba8(10, 10, data).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let palette = PaletteExtractor::new()
            .count(2)
            .extract_buffer_with(&buffer, &mut rng);
        assert_eq!(palette, vec![Rgb::new(245, 245, 245), Rgb::new(10, 10, 10)]);
    }

    #[test]
    fn test_reusable_across_calls_with_same_seed() {
        let buffer = solid_buffer(20, 20, [200, 100, 50, 255]);
        let extractor = PaletteExtractor::new().count(2);
        let a = extractor.extract_buffer_with(&buffer, &mut StdRng::seed_from_u64(11));
        let b = extractor.extract_buffer_with(&buffer, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_count_zero_yields_empty_palette() {
        let buffer = solid_buffer(4, 4, [9, 9, 9, 255]);
        let palette = PaletteExtractor::new().count(0).extract_buffer(&buffer);
        assert!(palette.is_empty());
    }
}
