//! Decode boundary: encoded image bytes to an RGBA pixel buffer.
//!
//! This is the only fallible stage of the pipeline. Everything downstream
//! (sampling, clustering, formatting) is total over its input domain, so all
//! failures a caller can observe originate here.

use crate::api::ExtractError;

/// A decoded image as a tightly-packed RGBA8 buffer.
///
/// Produced by [`PixelBuffer::decode`] or assembled directly from raw
/// channel data with [`PixelBuffer::from_rgba8`].
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Decode encoded image bytes (PNG, JPEG, GIF, ...) into a pixel buffer.
    ///
    /// # Errors
    ///
    /// [`ExtractError::Decode`] if the bytes cannot be parsed as an image;
    /// [`ExtractError::PixelAccess`] if the decoded image does not expose a
    /// readable tightly-packed RGBA view.
    pub fn decode(bytes: &[u8]) -> Result<Self, ExtractError> {
        let image = image::load_from_memory(bytes)?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Build a pixel buffer from raw RGBA8 data.
    ///
    /// # Errors
    ///
    /// [`ExtractError::PixelAccess`] if `data` is not exactly
    /// `width * height * 4` bytes.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ExtractError> {
        let expected = width as u64 * height as u64 * 4;
        if data.len() as u64 != expected {
            return Err(ExtractError::PixelAccess(format!(
                "expected {expected} bytes of RGBA data for a {width}x{height} image, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA channels of the pixel at `(x, y)`.
    ///
    /// Coordinates must be inside the buffer; row-major addressing.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}
