//! Sampling options.

/// Alpha threshold below which a pixel counts as mostly transparent.
pub const DEFAULT_ALPHA_CUTOFF: u8 = 125;

/// Configuration for pixel sampling.
///
/// # Example
///
/// ```
/// use dominant_color::SampleOptions;
///
/// // Default options (every pixel, alpha cutoff 125)
/// let options = SampleOptions::new();
///
/// // Customize with builder pattern
/// let options = SampleOptions::new().step(4).alpha_cutoff(200);
/// ```
#[derive(Debug, Clone)]
pub struct SampleOptions {
    /// Grid stride in pixels; 1 visits every pixel.
    pub step: usize,

    /// Pixels with alpha below this value are discarded.
    pub alpha_cutoff: u8,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            step: 1,
            alpha_cutoff: DEFAULT_ALPHA_CUTOFF,
        }
    }
}

impl SampleOptions {
    /// Create new sampling options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid stride. Values below 1 are clamped to 1.
    #[inline]
    pub fn step(mut self, step: usize) -> Self {
        self.step = step.max(1);
        self
    }

    /// Set the transparency cutoff.
    #[inline]
    pub fn alpha_cutoff(mut self, cutoff: u8) -> Self {
        self.alpha_cutoff = cutoff;
        self
    }
}
