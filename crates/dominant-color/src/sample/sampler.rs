//! Stride sampling over a decoded pixel buffer.

use crate::color::Rgb;
use crate::decode::PixelBuffer;

use super::options::SampleOptions;

/// Sample a pixel buffer on a regular grid, filtering out transparency.
///
/// Visits `(x, y)` for `x` in `0, step, 2*step, ..` bounded by the width and
/// `y` likewise bounded by the height, in row-major order. Pixels with alpha
/// below `options.alpha_cutoff` are discarded; the rest contribute their RGB
/// channels. Alpha is consumed here as a filter and never retained.
///
/// A fully transparent buffer yields an empty set. That is a valid result,
/// not an error; the pipeline maps it to an empty palette.
pub fn sample_pixels(buffer: &PixelBuffer, options: &SampleOptions) -> Vec<Rgb> {
    let step = options.step.max(1);
    let mut pixels = Vec::new();

    for y in (0..buffer.height()).step_by(step) {
        for x in (0..buffer.width()).step_by(step) {
            let [r, g, b, a] = buffer.rgba(x, y);
            if a < options.alpha_cutoff {
                continue;
            }
            pixels.push(Rgb::new(r, g, b));
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::super::options::DEFAULT_ALPHA_CUTOFF;
    use super::*;
    use pretty_assertions::assert_eq;

    /// Build a width x height buffer where every pixel is `rgba`.
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
    fn test_step_one_visits_every_pixel() {
        let buffer = solid_buffer(10, 7, [5, 6, 7, 255]);
        let pixels = sample_pixels(&buffer, &SampleOptions::new());
        assert_eq!(pixels.len(), 70);
        assert!(pixels.iter().all(|&p| p == Rgb::new(5, 6, 7)));
    }

    #[test]
    fn test_stride_bounds() {
        // With step 3 over a 10x7 buffer the grid is x in {0,3,6,9}, y in {0,3,6}.
        let buffer = solid_buffer(10, 7, [0, 0, 0, 255]);
        let pixels = sample_pixels(&buffer, &SampleOptions::new().step(3));
        assert_eq!(pixels.len(), 4 * 3);
    }

    #[test]
    fn test_transparent_pixels_are_filtered() {
        let buffer = solid_buffer(4, 4, [9, 9, 9, 0]);
        let pixels = sample_pixels(&buffer, &SampleOptions::new());
        assert!(pixels.is_empty());
    }

    #[test]
    fn test_alpha_cutoff_boundary() {
        // alpha == cutoff passes; alpha == cutoff - 1 is discarded.
        let at_cutoff = solid_buffer(2, 2, [1, 2, 3, DEFAULT_ALPHA_CUTOFF]);
        assert_eq!(sample_pixels(&at_cutoff, &SampleOptions::new()).len(), 4);

        let below_cutoff = solid_buffer(2, 2, [1, 2, 3, DEFAULT_ALPHA_CUTOFF - 1]);
        assert!(sample_pixels(&below_cutoff, &SampleOptions::new()).is_empty());
    }

    #[test]
    fn test_row_major_visiting_order() {
        #[rustfmt::skip]
        let data = vec![
            10, 0, 0, 255,   20, 0, 0, 255,
            30, 0, 0, 255,   40, 0, 0, 255,
        ];
        let buffer = PixelBuffer::from_rgba8(2, 2, data).unwrap();
        let pixels = sample_pixels(&buffer, &SampleOptions::new());
        let reds: Vec<u8> = pixels.iter().map(|p| p.r).collect();
        assert_eq!(reds, vec![10, 20, 30, 40]);
    }
}
