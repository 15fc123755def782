//! Conversions from rendered pixmaps to exportable images.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{Pixmap, PixmapPaint, Transform};

use crate::color::Rgba;
use crate::error::{LogoError, Result};

// ============================================================================
// Pixmap → Image
// ============================================================================

/// Copies a pixmap into a straight-alpha RGBA image.
pub fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let mut img = RgbaImage::new(width, pixmap.height());

    // tiny-skia stores premultiplied pixels in row-major order.
    for (i, pixel) in pixmap.pixels().iter().enumerate() {
        let c = pixel.demultiply();
        let (x, y) = (i as u32 % width, i as u32 / width);
        img.put_pixel(x, y, image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
    }

    img
}

// ============================================================================
// Compositing
// ============================================================================

/// Returns a copy of `pixmap` composited over a solid `background`.
pub fn flatten_onto(pixmap: &Pixmap, background: Rgba) -> Result<Pixmap> {
    let mut flat = Pixmap::new(pixmap.width(), pixmap.height()).ok_or(LogoError::Surface {
        width: pixmap.width(),
        height: pixmap.height(),
    })?;
    flat.fill(background.to_skia());
    flat.draw_pixmap(
        0,
        0,
        pixmap.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
    Ok(flat)
}

// ============================================================================
// Export
// ============================================================================

/// Writes `pixmap` to `path` as a PNG.
pub fn encode_png(pixmap: &Pixmap, path: impl AsRef<Path>) -> Result<()> {
    to_rgba_image(pixmap).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use resvg::tiny_skia::Color;

    #[test]
    fn image_is_demultiplied() {
        let mut pixmap = Pixmap::new(3, 2).unwrap();
        pixmap.fill(Color::from_rgba8(255, 0, 0, 128));

        let img = to_rgba_image(&pixmap);
        assert_eq!(img.dimensions(), (3, 2));
        let p = img.get_pixel(2, 1);
        assert_eq!(p[0], 255);
        assert_eq!(p[3], 128);
    }

    #[test]
    fn transparent_pixels_stay_transparent() {
        let pixmap = Pixmap::new(2, 2).unwrap();
        let img = to_rgba_image(&pixmap);
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn flatten_fills_transparent_areas() {
        let mut pixmap = Pixmap::new(4, 4).unwrap();
        pixmap.fill_rect(
            resvg::tiny_skia::Rect::from_xywh(0.0, 0.0, 2.0, 4.0).unwrap(),
            &{
                let mut paint = resvg::tiny_skia::Paint::default();
                paint.set_color(Color::BLACK);
                paint
            },
            Transform::identity(),
            None,
        );

        let flat = flatten_onto(&pixmap, Rgba::WHITE).unwrap();
        let img = to_rgba_image(&flat);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(3, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn png_roundtrip_through_disk() {
        let mut pixmap = Pixmap::new(8, 8).unwrap();
        pixmap.fill(Color::from_rgba8(0, 160, 227, 255));

        let path = std::env::temp_dir().join(format!("gr-logo-raster-{}.png", std::process::id()));
        encode_png(&pixmap, &path).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).ok();

        assert_eq!(decoded.get_pixel(4, 4).0, [0, 160, 227, 255]);
    }
}
