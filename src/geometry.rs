//! Geometry shared by the path catalog, the renderer, and the component.
//!
//! All logo paths are authored in a fixed 256×256 design-unit space. The
//! [`REGIONS`] table records where each named region sits in that space; the
//! renderer uses it to place gradient axes and to decide which regions are
//! large enough to draw.

/// Width and height of the design-unit coordinate space.
pub const DESIGN_SIZE: f32 = 256.0;

/// Corner radius of the base and bar shapes, in design units.
pub const CORNER_RADIUS: f32 = 16.0;

/// Height of the bar at the bottom of the logo, in design units.
pub const BAR_HEIGHT: f32 = 32.0;

/// An axis-aligned box in design units, stored as its two corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Left edge.
    pub x0: f32,
    /// Top edge.
    pub y0: f32,
    /// Right edge.
    pub x1: f32,
    /// Bottom edge.
    pub y1: f32,
}

impl BoundingBox {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Top-to-bottom axis along the left edge.
    pub fn vertical_axis(&self) -> Axis {
        Axis::new(self.x0, self.y0, self.x0, self.y1)
    }

    /// Left-to-right axis along the top edge.
    pub fn horizontal_axis(&self) -> Axis {
        Axis::new(self.x0, self.y0, self.x1, self.y0)
    }
}

/// Start and end points of a linear gradient, in design units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Axis {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// Bounding boxes of every named region plus the size gates for the bar and
/// text.
///
/// The gates are absolute: they are compared against the governing dimension
/// in pixels, so small renders drop detail instead of shrinking it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionGeometry {
    /// Background above the bar.
    pub base_visible: BoundingBox,
    /// The reversed R, above the bar.
    pub glyph_primary_visible: BoundingBox,
    /// The G.
    pub glyph_secondary: BoundingBox,
    pub bar: BoundingBox,
    pub text: BoundingBox,
    /// Smallest governing dimension at which the bar is drawn.
    pub min_bar_size: f32,
    /// Smallest governing dimension at which the text is drawn.
    pub min_text_size: f32,
}

pub const REGIONS: RegionGeometry = RegionGeometry {
    base_visible: BoundingBox::new(0.0, 0.0, 256.0, 224.0),
    glyph_primary_visible: BoundingBox::new(59.0, 64.0, 224.0, 224.0),
    glyph_secondary: BoundingBox::new(32.0, 32.0, 192.0, 192.0),
    bar: BoundingBox::new(0.0, 224.0, 256.0, 256.0),
    text: BoundingBox::new(21.0, 234.0, 235.0, 246.0),
    min_bar_size: 65.0,
    min_text_size: 160.0,
};

impl RegionGeometry {
    pub fn shows_bar(&self, governing: f32) -> bool {
        governing >= self.min_bar_size
    }

    pub fn shows_text(&self, governing: f32) -> bool {
        governing >= self.min_text_size
    }
}

impl Default for RegionGeometry {
    fn default() -> Self {
        REGIONS
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A `side × side` size.
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Returns true if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }

    pub fn max_side(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn as_array(&self) -> [u32; 2] {
        [self.width, self.height]
    }
}

/// Margin the logo styleguide requires around a logo in a `width × height`
/// box: an eighth of the smaller side.
pub fn padding_for(width: u32, height: u32) -> f32 {
    width.min(height) as f32 / 8.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_axes() {
        let rv = REGIONS.glyph_primary_visible;
        assert_eq!(rv.vertical_axis(), Axis::new(59.0, 64.0, 59.0, 224.0));
        assert_eq!(REGIONS.bar.horizontal_axis(), Axis::new(0.0, 224.0, 256.0, 224.0));
        assert_eq!(rv.width(), 165.0);
        assert_eq!(rv.height(), 160.0);
    }

    #[test]
    fn size_gates_are_step_functions() {
        assert!(!REGIONS.shows_bar(64.0));
        assert!(REGIONS.shows_bar(65.0));
        assert!(!REGIONS.shows_text(159.0));
        assert!(REGIONS.shows_text(160.0));
    }

    #[test]
    fn size_px_helpers() {
        let size = SizePx::new(300, 200);
        assert!(!size.is_square());
        assert_eq!(size.min_side(), 200);
        assert_eq!(size.max_side(), 300);
        assert!(SizePx::square(64).is_square());
        assert!(SizePx::new(0, 10).is_empty());
    }

    #[test]
    fn padding_is_an_eighth_of_the_short_side() {
        assert_eq!(padding_for(800, 400), 50.0);
        assert_eq!(padding_for(0, 400), 0.0);
    }
}
