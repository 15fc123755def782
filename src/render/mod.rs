//! Render engine.
//!
//! [`Renderer::render`] clears a pixmap and paints every region of the logo
//! in a fixed order:
//!
//! 1. base, then the theme's optional overlay
//! 2. the primary glyph, preceded by its outline layer when the theme has one
//! 3. the secondary glyph
//! 4. the bar, once the governing dimension reaches the bar gate
//! 5. the text, once it reaches the text gate
//!
//! All paths are in design units. [`Layout`] derives the uniform scale and
//! the offsets that map them onto the pixmap.

pub mod gradient;
pub mod stencil;

use resvg::tiny_skia::{Color, FillRule, Paint, Path, Pixmap, Transform};
use tracing::{debug, error, trace};

use crate::geometry::{Axis, BAR_HEIGHT, CORNER_RADIUS, DESIGN_SIZE, REGIONS, RegionGeometry, SizePx};
use crate::paths::{PathCatalog, PathId, rounded_bar, rounded_rect};
use crate::theme::{FillStyle, ThemeDefinition, ThemeName};

pub use gradient::StopPolicy;
pub use stencil::{RasterLayer, stroke_with_transparent_interior};

/// Placement of the design space on a pixmap of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub size: SizePx,
    /// Whether the background stretches to the full pixmap.
    pub fill: bool,
    /// `min(width, height)` in pixels. Drives both the scale and the size gates.
    pub governing: f32,
    /// Pixels per design unit.
    pub scale: f32,
    /// Horizontal pixel offset that centers the glyphs in a landscape fill.
    pub glyph_offset: f32,
    /// Pixmap width in design units.
    pub fill_width: f32,
    /// Pixmap height in design units.
    pub fill_height: f32,
}

impl Layout {
    pub fn compute(size: SizePx, fill: bool) -> Self {
        let governing = size.min_side() as f32;
        let scale = governing / DESIGN_SIZE;
        let (width, height) = (size.width as f32, size.height as f32);

        let glyph_offset = if fill && width > height {
            (width - DESIGN_SIZE * scale) / 2.0
        } else {
            0.0
        };
        let (fill_width, fill_height) = if scale > 0.0 {
            (width / scale, height / scale)
        } else {
            (0.0, 0.0)
        };

        Self {
            size,
            fill,
            governing,
            scale,
            glyph_offset,
            fill_width,
            fill_height,
        }
    }

    /// Nothing can be drawn: the pixmap has no area.
    pub fn is_degenerate(&self) -> bool {
        self.scale <= 0.0
    }

    /// Design units to pixels, anchored at the top-left corner.
    pub fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    /// Design units to pixels for the glyphs.
    pub fn glyph_transform(&self) -> Transform {
        Transform::from_row(self.scale, 0.0, 0.0, self.scale, self.glyph_offset, 0.0)
    }

    /// Design units to pixels for the text. In fill mode the text stays
    /// centered horizontally and pinned to the bottom edge.
    pub fn text_transform(&self) -> Transform {
        if self.fill {
            self.transform().pre_translate(
                self.fill_width / 2.0 - DESIGN_SIZE / 2.0,
                self.fill_height - DESIGN_SIZE,
            )
        } else {
            self.transform()
        }
    }
}

/// Draws themes using a path catalog and region table.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    catalog: &'a PathCatalog,
    regions: RegionGeometry,
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new(PathCatalog::get(), REGIONS)
    }
}

impl<'a> Renderer<'a> {
    pub fn new(catalog: &'a PathCatalog, regions: RegionGeometry) -> Self {
        Self { catalog, regions }
    }

    /// Clears `pixmap` and paints `theme` over it.
    ///
    /// `fill` is ignored when the theme does not allow fill mode. A theme that
    /// fails validation is replaced by the default theme.
    pub fn render(&self, pixmap: &mut Pixmap, theme: &ThemeDefinition, fill: bool) {
        pixmap.fill(Color::TRANSPARENT);

        let theme = match theme.validate() {
            Ok(()) => theme,
            Err(err) => {
                error!(%err, "refusing to draw invalid theme, using default");
                ThemeName::default().definition()
            }
        };

        let layout = Layout::compute(
            SizePx::new(pixmap.width(), pixmap.height()),
            fill && theme.fill_mode_allowed,
        );
        if layout.is_degenerate() {
            trace!(size = ?layout.size, "nothing to draw");
            return;
        }
        debug!(
            width = layout.size.width,
            height = layout.size.height,
            scale = layout.scale,
            fill = layout.fill,
            "rendering logo"
        );

        self.draw_base(pixmap, theme, &layout);
        self.draw_glyphs(pixmap, theme, &layout);

        if self.regions.shows_bar(layout.governing) {
            self.draw_bar(pixmap, theme, &layout);
        } else {
            trace!(governing = layout.governing, "bar below size gate");
        }

        if self.regions.shows_text(layout.governing) {
            let text = self.catalog.path(PathId::Text).as_path();
            fill_region(
                pixmap,
                text,
                &theme.text,
                self.regions.text.horizontal_axis(),
                StopPolicy::Soft,
                layout.text_transform(),
            );
        } else {
            trace!(governing = layout.governing, "text below size gate");
        }
    }

    fn draw_base(&self, pixmap: &mut Pixmap, theme: &ThemeDefinition, layout: &Layout) {
        let ts = layout.transform();
        let axis = self.regions.base_visible.vertical_axis();

        if layout.fill {
            match rounded_rect(layout.fill_width, layout.fill_height, CORNER_RADIUS) {
                Some(base) => {
                    let axis = Axis::new(0.0, 0.0, 0.0, layout.fill_height - BAR_HEIGHT);
                    fill_region(pixmap, &base, &theme.base, axis, StopPolicy::Hard, ts);
                }
                None => trace!("fill-mode base collapsed"),
            }
        } else {
            let base = self.catalog.path(PathId::Base).as_path();
            fill_region(pixmap, base, &theme.base, axis, StopPolicy::Hard, ts);
        }

        if let Some(overlay) = &theme.base_overlay {
            let path = self.catalog.path(overlay.path).as_path();
            fill_region(pixmap, path, &overlay.style, axis, StopPolicy::Hard, ts);
        }
    }

    fn draw_glyphs(&self, pixmap: &mut Pixmap, theme: &ThemeDefinition, layout: &Layout) {
        let ts = layout.glyph_transform();
        let primary = self.catalog.path(PathId::GlyphPrimary).as_path();
        let primary_axis = self.regions.glyph_primary_visible.vertical_axis();

        if let Some(outline) = &theme.glyph_primary_outline {
            let shader = gradient::shader(&outline.style, primary_axis, StopPolicy::Hard);
            match stroke_with_transparent_interior(primary, outline.width, shader, ts, layout.size)
            {
                Some(layer) => layer.composite_onto(pixmap),
                None => trace!("no outline layer for empty surface"),
            }
        }
        fill_region(
            pixmap,
            primary,
            &theme.glyph_primary,
            primary_axis,
            StopPolicy::Hard,
            ts,
        );

        let secondary = self.catalog.path(PathId::GlyphSecondary).as_path();
        fill_region(
            pixmap,
            secondary,
            &theme.glyph_secondary,
            self.regions.glyph_secondary.vertical_axis(),
            StopPolicy::Hard,
            ts,
        );
    }

    fn draw_bar(&self, pixmap: &mut Pixmap, theme: &ThemeDefinition, layout: &Layout) {
        let ts = layout.transform();
        if layout.fill {
            match rounded_bar(layout.fill_width, layout.fill_height) {
                Some(bar) => {
                    let axis = Axis::new(0.0, 0.0, layout.fill_width, 0.0);
                    fill_region(pixmap, &bar, &theme.bar, axis, StopPolicy::Hard, ts);
                }
                None => trace!("fill-mode bar collapsed"),
            }
        } else {
            let id = theme.bar_path.unwrap_or(PathId::Bar);
            let bar = self.catalog.path(id).as_path();
            let axis = self.regions.bar.horizontal_axis();
            fill_region(pixmap, bar, &theme.bar, axis, StopPolicy::Hard, ts);
        }
    }
}

/// Renders with the process-wide catalog and the standard region table.
pub fn render(pixmap: &mut Pixmap, theme: &ThemeDefinition, fill: bool) {
    Renderer::default().render(pixmap, theme, fill);
}

fn fill_region(
    pixmap: &mut Pixmap,
    path: &Path,
    style: &FillStyle,
    axis: Axis,
    policy: StopPolicy,
    transform: Transform,
) {
    if let FillStyle::Solid(color) = style {
        if color.is_transparent() {
            return;
        }
    }
    let paint = Paint {
        shader: gradient::shader(style, axis, policy),
        anti_alias: true,
        ..Paint::default()
    };
    pixmap.fill_path(path, &paint, FillRule::Winding, transform, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::theme::Outline;

    fn rgba_at(pixmap: &Pixmap, x: u32, y: u32) -> Rgba {
        let c = pixmap.pixel(x, y).unwrap().demultiply();
        Rgba::new(c.red(), c.green(), c.blue(), c.alpha())
    }

    fn draw(theme: ThemeName, size: SizePx, fill: bool) -> Pixmap {
        let mut pixmap = Pixmap::new(size.width, size.height).unwrap();
        render(&mut pixmap, theme.definition(), fill);
        pixmap
    }

    /// A point inside the bar, away from the text and the rounded corners.
    fn bar_sample_point(side: u32) -> (u32, u32) {
        let scale = side as f32 / DESIGN_SIZE;
        ((4.0 * scale) as u32 + 1, (228.0 * scale) as u32)
    }

    #[test]
    fn layout_uses_short_side() {
        let layout = Layout::compute(SizePx::new(512, 256), true);
        assert_eq!(layout.governing, 256.0);
        assert_eq!(layout.scale, 1.0);
        assert_eq!(layout.glyph_offset, 128.0);
        assert_eq!((layout.fill_width, layout.fill_height), (512.0, 256.0));

        let portrait = Layout::compute(SizePx::new(128, 512), false);
        assert_eq!(portrait.scale, 0.5);
        assert_eq!(portrait.glyph_offset, 0.0);
        assert_eq!(portrait.fill_height, 1024.0);
    }

    #[test]
    fn fill_text_is_centered_and_pinned() {
        let layout = Layout::compute(SizePx::new(512, 256), true);
        let ts = layout.text_transform();
        assert_eq!((ts.tx, ts.ty), (128.0, 0.0));

        let tall = Layout::compute(SizePx::new(256, 512), true);
        let ts = tall.text_transform();
        assert_eq!((ts.tx, ts.ty), (0.0, 256.0));
    }

    #[test]
    fn original_theme_end_to_end() {
        let pixmap = draw(ThemeName::Original, SizePx::square(256), false);

        // Base, outside both glyphs.
        assert_eq!(rgba_at(&pixmap, 8, 128), Rgba::hex(0xB40000));
        // R: upper-right stem, G: left arc.
        assert_eq!(rgba_at(&pixmap, 216, 150), Rgba::WHITE);
        assert_eq!(rgba_at(&pixmap, 40, 112), Rgba::BLACK);
        // Bar away from the text.
        assert_eq!(rgba_at(&pixmap, 4, 240), Rgba::BLACK);
        // Text: the vertical stroke of the final G at x ≈ 236.
        let text_pixels = (226..254)
            .flat_map(|y| (20..236).map(move |x| (x, y)))
            .filter(|&(x, y)| rgba_at(&pixmap, x, y) == Rgba::WHITE)
            .count();
        assert!(text_pixels > 200, "only {text_pixels} text pixels");
    }

    #[test]
    fn size_gates_are_step_functions() {
        // Rows below the R's leg, where only the text can be white.
        let count_white_in_bar = |pixmap: &Pixmap, side: u32| {
            let scale = side as f32 / DESIGN_SIZE;
            let top = (240.0 * scale).ceil() as u32;
            let bottom = (250.0 * scale) as u32;
            (top..bottom)
                .flat_map(|y| (0..side).map(move |x| (x, y)))
                .filter(|&(x, y)| {
                    let c = pixmap.pixel(x, y).unwrap().demultiply();
                    c.alpha() == 255 && c.red() > 240 && c.green() > 240
                })
                .count()
        };

        for (side, bar, text) in [(64, false, false), (65, true, false), (159, true, false), (160, true, true)] {
            let pixmap = draw(ThemeName::Original, SizePx::square(side), false);
            let (x, y) = bar_sample_point(side);
            let c = rgba_at(&pixmap, x, y);
            if bar {
                assert_eq!(c, Rgba::BLACK, "bar missing at {side}");
            } else {
                assert_eq!(c, Rgba::hex(0xB40000), "bar drawn at {side}");
            }
            assert_eq!(count_white_in_bar(&pixmap, side) > 0, text, "text gate at {side}");
        }
    }

    #[test]
    fn rendering_twice_is_pixel_identical() {
        for theme in [ThemeName::Classy, ThemeName::Test, ThemeName::Intersex] {
            let mut pixmap = Pixmap::new(300, 200).unwrap();
            render(&mut pixmap, theme.definition(), true);
            let first = pixmap.data().to_vec();
            render(&mut pixmap, theme.definition(), true);
            assert_eq!(first, pixmap.data(), "{theme}");
        }
    }

    #[test]
    fn outline_shows_around_transparent_glyph() {
        let mut theme = *ThemeName::Gr.definition();
        theme.glyph_primary = FillStyle::Solid(Rgba::TRANSPARENT);
        theme.glyph_secondary = FillStyle::Solid(Rgba::TRANSPARENT);
        theme.glyph_primary_outline = Some(Outline {
            width: 8.0,
            style: FillStyle::Solid(Rgba::BLACK),
        });
        let mut pixmap = Pixmap::new(256, 256).unwrap();
        render(&mut pixmap, &theme, false);

        // Inside the R stem: erased. Just right of it: outline.
        assert_eq!(rgba_at(&pixmap, 216, 150).a, 0);
        assert_eq!(rgba_at(&pixmap, 228, 150), Rgba::BLACK);
        assert_eq!(rgba_at(&pixmap, 240, 150).a, 0);
    }

    #[test]
    fn refused_fill_matches_square_output() {
        let size = SizePx::new(300, 200);
        let filled = draw(ThemeName::BlackWhite, size, true);
        let square = draw(ThemeName::BlackWhite, size, false);
        assert_eq!(filled.data(), square.data());

        let original_fill = draw(ThemeName::Original, size, true);
        let original_square = draw(ThemeName::Original, size, false);
        assert_ne!(original_fill.data(), original_square.data());
    }

    #[test]
    fn fill_mode_stretches_base() {
        let pixmap = draw(ThemeName::Original, SizePx::new(400, 200), true);
        // Far right of a landscape box only has background in fill mode.
        assert_eq!(rgba_at(&pixmap, 390, 100), Rgba::hex(0xB40000));
        let square = draw(ThemeName::Original, SizePx::new(400, 200), false);
        assert_eq!(rgba_at(&square, 390, 100).a, 0);
    }

    #[test]
    fn diagonal_overlay_covers_upper_right() {
        let pixmap = draw(ThemeName::Other, SizePx::square(256), false);
        assert_eq!(rgba_at(&pixmap, 245, 20), Rgba::hex(0xF9B2DB));
        assert_eq!(rgba_at(&pixmap, 10, 200), Rgba::hex(0x6BD6F7));
    }

    #[test]
    fn pill_bar_has_rounded_ends() {
        let pixmap = draw(ThemeName::BlackWhite, SizePx::square(256), false);
        assert_eq!(rgba_at(&pixmap, 1, 225).a, 0);
        assert_eq!(rgba_at(&pixmap, 4, 240), Rgba::BLACK);
    }

    #[test]
    fn landscape_fill_centers_glyphs() {
        let pixmap = draw(ThemeName::Original, SizePx::new(512, 256), true);
        // The G's left arc, shifted right by half the spare width.
        assert_eq!(rgba_at(&pixmap, 168, 112), Rgba::BLACK);
        assert_eq!(rgba_at(&pixmap, 40, 112), Rgba::hex(0xB40000));
    }

    #[test]
    fn degenerate_sizes_are_not_errors() {
        let layout = Layout::compute(SizePx::new(0, 300), false);
        assert!(layout.is_degenerate());
        let mut pixmap = Pixmap::new(1, 1).unwrap();
        render(&mut pixmap, ThemeName::Original.definition(), false);
    }

    #[test]
    fn invalid_theme_falls_back_to_default() {
        let mut theme = *ThemeName::Rainbow.definition();
        theme.base = FillStyle::Gradient(&[]);
        let mut pixmap = Pixmap::new(64, 64).unwrap();
        render(&mut pixmap, &theme, false);
        assert_eq!(rgba_at(&pixmap, 2, 32), Rgba::hex(0xB40000));
    }
}
