//! End-to-end extraction tests over encoded image bytes.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use pretty_assertions::assert_eq;

use dominant_color::{ExtractError, PaletteExtractor, Rgb};

/// Encode an RGBA image as PNG bytes.
fn png_bytes(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("in-memory PNG encode");
    bytes
}

#[test]
fn extract_bytes_single_color_image() {
    let image = RgbaImage::from_pixel(100, 100, Rgba([13, 148, 136, 255]));
    let palette = PaletteExtractor::new()
        .count(3)
        .extract_bytes(&png_bytes(&image))
        .unwrap();

    assert_eq!(palette.len(), 3);
    for color in palette {
        assert_eq!(color, Rgb::new(13, 148, 136));
    }
}

#[test]
fn extract_bytes_fully_transparent_image() {
    let image = RgbaImage::from_pixel(10, 10, Rgba([200, 200, 200, 0]));
    let palette = PaletteExtractor::new()
        .extract_bytes(&png_bytes(&image))
        .unwrap();

    assert_eq!(palette, Vec::<Rgb>::new());
}

#[test]
fn extract_bytes_two_tone_image_orders_by_luminance() {
    // Left half dark, right half light.
    let image = RgbaImage::from_fn(100, 100, |x, _| {
        if x < 50 {
            Rgba([20, 20, 20, 255])
        } else {
            Rgba([235, 235, 235, 255])
        }
    });
    let palette = PaletteExtractor::new()
        .count(2)
        .extract_bytes(&png_bytes(&image))
        .unwrap();

    assert_eq!(palette, vec![Rgb::new(235, 235, 235), Rgb::new(20, 20, 20)]);
}

#[test]
fn extract_bytes_count_exceeding_samples_is_clamped() {
    let image = RgbaImage::from_pixel(2, 2, Rgba([50, 100, 150, 255]));
    let palette = PaletteExtractor::new()
        .count(12)
        .extract_bytes(&png_bytes(&image))
        .unwrap();

    assert_eq!(palette.len(), 4);
}

#[test]
fn extract_bytes_rejects_non_image_input() {
    let result = PaletteExtractor::new().extract_bytes(b"not an image at all");
    assert!(matches!(result, Err(ExtractError::Decode(_))));
}

#[test]
fn alpha_cutoff_is_configurable() {
    // Alpha 140 passes the default cutoff of 125 but not a cutoff of 200.
    let image = RgbaImage::from_pixel(10, 10, Rgba([90, 90, 90, 140]));
    let bytes = png_bytes(&image);

    let default_cutoff = PaletteExtractor::new().count(1);
    assert_eq!(
        default_cutoff.extract_bytes(&bytes).unwrap(),
        vec![Rgb::new(90, 90, 90)]
    );

    let strict_cutoff = PaletteExtractor::new().count(1).alpha_cutoff(200);
    assert_eq!(strict_cutoff.extract_bytes(&bytes).unwrap(), Vec::new());
}

#[tokio::test]
async fn extract_path_reads_image_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("solid.png");
    let image = RgbaImage::from_pixel(50, 50, Rgba([200, 50, 50, 255]));
    image.save(&path).expect("write test image");

    let palette = PaletteExtractor::new()
        .count(2)
        .extract_path(&path)
        .await
        .unwrap();
    assert_eq!(palette, vec![Rgb::new(200, 50, 50), Rgb::new(200, 50, 50)]);

    let hex = PaletteExtractor::new()
        .count(1)
        .extract_path_hex(&path)
        .await
        .unwrap();
    assert_eq!(hex, vec!["#C83232".to_string()]);
}

#[tokio::test]
async fn extract_path_missing_file_is_io_error() {
    let result = PaletteExtractor::new()
        .extract_path("/definitely/not/here.png")
        .await;
    assert!(matches!(result, Err(ExtractError::Io(_))));
}
