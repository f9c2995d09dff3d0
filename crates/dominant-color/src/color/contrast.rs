//! WCAG luminance and contrast metrics.
//!
//! These are exact implementations of the WCAG 2.x formulas; exported ratios
//! and pass/fail flags are bit-sensitive to the rounding rules, so the math
//! here must not be approximated.

use super::rgb::Rgb;

/// Contrast threshold for WCAG AA normal text.
const AA_THRESHOLD: f64 = 4.5;
/// Contrast threshold for WCAG AA large text.
const AA_LARGE_THRESHOLD: f64 = 3.0;
/// Contrast threshold for WCAG AAA normal text.
const AAA_THRESHOLD: f64 = 7.0;

/// Raw-channel luminance above which dark label text is more legible.
const READABLE_LUMINANCE_THRESHOLD: f64 = 0.55;
/// Fixed dark reference color for label text (slate-900).
const READABLE_DARK: Rgb = Rgb::new(0x0F, 0x17, 0x2A);
/// Fixed light reference color for label text.
const READABLE_LIGHT: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Decode one gamma-compressed sRGB channel (given in `0.0..=1.0`) to linear.
fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

impl Rgb {
    /// WCAG relative luminance.
    ///
    /// Channels are scaled to `0.0..=1.0`, linearized through the piecewise
    /// sRGB transfer curve, and combined with the 0.2126/0.7152/0.0722
    /// weights.
    pub fn relative_luminance(self) -> f64 {
        let r = srgb_to_linear(self.r as f64 / 255.0);
        let g = srgb_to_linear(self.g as f64 / 255.0);
        let b = srgb_to_linear(self.b as f64 / 255.0);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

/// WCAG contrast ratio between two colors, rounded to 2 decimal places.
///
/// Symmetric in its arguments; ranges from 1.0 (identical) to 21.0
/// (black on white).
///
/// # Example
///
/// ```
/// use dominant_color::{contrast_ratio, Rgb};
///
/// let black = Rgb::new(0, 0, 0);
/// let white = Rgb::new(255, 255, 255);
/// assert_eq!(contrast_ratio(black, white), 21.0);
/// ```
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let lighter = la.max(lb);
    let darker = la.min(lb);
    let ratio = (lighter + 0.05) / (darker + 0.05);
    (ratio * 100.0).round() / 100.0
}

/// WCAG conformance flags derived from a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WcagLevel {
    /// Contrast ratio, rounded to 2 decimal places.
    pub ratio: f64,
    /// Passes AA for normal text (ratio >= 4.5).
    pub aa: bool,
    /// Passes AA for large text (ratio >= 3.0).
    pub aa_large: bool,
    /// Passes AAA for normal text (ratio >= 7.0).
    pub aaa: bool,
}

/// Evaluate a color pair against the fixed WCAG thresholds.
pub fn wcag_level(a: Rgb, b: Rgb) -> WcagLevel {
    let ratio = contrast_ratio(a, b);
    WcagLevel {
        ratio,
        aa: ratio >= AA_THRESHOLD,
        aa_large: ratio >= AA_LARGE_THRESHOLD,
        aaa: ratio >= AAA_THRESHOLD,
    }
}

/// Pick a legible label color for the given background.
///
/// Uses raw-channel luminance (no gamma correction) against a 0.55 threshold
/// and returns one of two fixed reference colors. This chooses UI label
/// colors; it is not a clustering input.
pub fn readable_text_color(background: Rgb) -> Rgb {
    if background.luminance() > READABLE_LUMINANCE_THRESHOLD {
        READABLE_DARK
    } else {
        READABLE_LIGHT
    }
}
