//! CMYK color representation.

use super::rgb::Rgb;

/// A color in CMYK form, each component an integer percentage.
///
/// Derived from [`Rgb`] via the naive subtractive conversion. Pure black
/// (key = 100) yields c = m = y = 0 rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cmyk {
    /// Cyan percentage (0..=100)
    pub c: u8,
    /// Magenta percentage (0..=100)
    pub m: u8,
    /// Yellow percentage (0..=100)
    pub y: u8,
    /// Key (black) percentage (0..=100)
    pub k: u8,
}

impl From<Rgb> for Cmyk {
    fn from(color: Rgb) -> Self {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;

        let k = 1.0 - r.max(g).max(b);
        let (c, m, y) = if k < 1.0 {
            (
                (1.0 - r - k) / (1.0 - k),
                (1.0 - g - k) / (1.0 - k),
                (1.0 - b - k) / (1.0 - k),
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        Self {
            c: (c * 100.0).round() as u8,
            m: (m * 100.0).round() as u8,
            y: (y * 100.0).round() as u8,
            k: (k * 100.0).round() as u8,
        }
    }
}
