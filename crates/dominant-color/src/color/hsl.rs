//! HSL color representation.
//!
//! Conversions use the standard max/min decomposition (RGB -> HSL) and the
//! chroma/intermediate C, X, m construction over six 60-degree hue sectors
//! (HSL -> RGB). Components are stored as integers: hue in degrees, saturation
//! and lightness as percentages.

use super::rgb::Rgb;

/// A color in HSL form.
///
/// Derived from [`Rgb`] via `From`; never stored independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees (0..360)
    pub h: u16,
    /// Saturation percentage (0..=100)
    pub s: u8,
    /// Lightness percentage (0..=100)
    pub l: u8,
}

impl Hsl {
    /// Create an HSL value. Hue is wrapped into `0..360`.
    #[inline]
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h: h % 360, s, l }
    }
}

impl From<Rgb> for Hsl {
    fn from(color: Rgb) -> Self {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h * 60.0, s)
        };

        // Rounding can land exactly on 360; wrap to stay inside [0, 360).
        Self {
            h: (h.round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(color: Hsl) -> Self {
        let h = color.h as f64;
        let s = color.s as f64 / 100.0;
        let l = color.l as f64 / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: ((r + m) * 255.0).round() as u8,
            g: ((g + m) * 255.0).round() as u8,
            b: ((b + m) * 255.0).round() as u8,
        }
    }
}
