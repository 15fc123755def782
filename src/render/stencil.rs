//! Outward-only strokes.
//!
//! A stroke straddles its path, so half of it lands inside the shape. To get
//! an outline that survives a transparent fill, the path is stroked at twice
//! the requested width on a separate layer and the shape's own area is erased
//! from that layer before it is composited.

use resvg::tiny_skia::{
    BlendMode, Color, FillRule, Paint, Path, Pixmap, PixmapPaint, Shader, Stroke, Transform,
};

use crate::geometry::SizePx;

/// An off-screen surface holding one finished region, ready to be composited.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterLayer {
    pixmap: Pixmap,
}

impl RasterLayer {
    /// Allocates a transparent layer. Returns `None` for an empty size.
    pub fn new(size: SizePx) -> Option<Self> {
        Pixmap::new(size.width, size.height).map(|pixmap| Self { pixmap })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn size(&self) -> SizePx {
        SizePx::new(self.pixmap.width(), self.pixmap.height())
    }

    /// Draws this layer over `target` with source-over blending, anchored at
    /// the top-left corner.
    pub fn composite_onto(&self, target: &mut Pixmap) {
        target.draw_pixmap(
            0,
            0,
            self.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}

/// Strokes `path` with `shader` so that `width` design units of stroke show
/// outside the shape and nothing shows inside it.
///
/// `transform` maps design units to pixels and applies to both the path and
/// the shader. Each call renders into a fresh layer of `size`, so repeated
/// calls never see each other's pixels.
pub fn stroke_with_transparent_interior(
    path: &Path,
    width: f32,
    shader: Shader<'static>,
    transform: Transform,
    size: SizePx,
) -> Option<RasterLayer> {
    let mut layer = RasterLayer::new(size)?;

    let stroke_paint = Paint {
        shader,
        anti_alias: true,
        ..Paint::default()
    };
    let stroke = Stroke {
        width: width * 2.0,
        miter_limit: 10.0,
        ..Stroke::default()
    };
    layer
        .pixmap
        .stroke_path(path, &stroke_paint, &stroke, transform, None);

    let mut erase = Paint::default();
    erase.set_color(Color::BLACK);
    erase.anti_alias = true;
    erase.blend_mode = BlendMode::DestinationOut;
    layer
        .pixmap
        .fill_path(path, &erase, FillRule::Winding, transform, None);

    Some(layer)
}
