//! The fixed set of vector paths that make up the logo.
//!
//! Paths are authored as SVG path data in the 256×256 design space and parsed
//! once, through usvg, into tiny-skia paths. The catalog is immutable after
//! initialization and shared by every render call.
//!
//! Fill mode needs background shapes sized to the host box rather than the
//! fixed square, so [`rounded_rect`] and [`rounded_bar`] build those on demand.

use std::sync::LazyLock;

use resvg::tiny_skia::{Path, PathBuilder, Rect};
use resvg::usvg::{self, Group, Node, Options, Tree};

use crate::error::{LogoError, Result};
use crate::geometry::{BAR_HEIGHT, CORNER_RADIUS, DESIGN_SIZE};

// Bezier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

const BASE_DATA: &str =
    "M0,16a16 16 0 0 1 16-16h224a16 16 0 0 1 16 16V240a16 16 0 0 1-16 16H16a16 16 0 0 1-16-16Z";

const GLYPH_PRIMARY_DATA: &str = concat!(
    "M64,80a16 16 0 0 1 16-16h128a16 16 0 0 1 16 16v128a16 16 0 0 1-16 16h-16v-112",
    "a16 16 0 0 0-16-16h-64a 16 16 0 0 0-16 16v16h64v16a16 16 0 0 1-4.686 11.314",
    "l-80 80-11.3137085-11.3137085a16 16 0 0 1 0-22.627L105.37259 160H80a16 16 0 0 1-16-16Z",
);

const GLYPH_SECONDARY_DATA: &str = concat!(
    "M32,48a16 16 0 0 1 16-16h128a16 16 0 0 1 16 16v16h-112a16 16 0 0 0-16 16v64",
    "a16 16 0 0 0 16 16h64a16 16 0 0 0 16-16v-16h-64v-16a16 16 0 0 1 16-16h64",
    "a16 16 0 0 1 16 16v64a16 16 0 0 1-16 16h-128a16 16 0 0 1-16-16Z",
);

const BAR_DATA: &str = "M0,224h256v16a16 16 0 0 1-16 16h-224a16 16 0 0 1-16-16Z";

const DIAGONAL_BASE_DATA: &str = "M251.31371,4.68629A16 16 0 0 1 256 16V224H0Z";

const PILL_BAR_DATA: &str = "M16,256a16 16 0 0 1 0-32h224a16 16 0 0 1 0 32Z";

const TEXT_DATA: &str = concat!(
    "m 245.67967,249.8 -4.396,-6.3 c 2.548,-1.092 4.032,-3.248 4.032,-6.188 0,-4.396 -3.276,-7.112 -8.512,-7.112 h -8.484 v 19.6 h 4.536 v -5.46 h 3.948 0.224 l 3.78,5.46 z ",
    "m -4.956,-12.488 c 0,2.128 -1.4,3.416 -4.172,3.416 h -3.696 v -6.832 h 3.696 c 2.772,0 4.172,1.26 4.172,3.416 z ",
    "m -29.01232,8.848 v -4.536 h 9.1 v -3.528 h -9.1 v -4.256 h 10.304 v -3.64 h -14.812 v 19.6 h 15.176 v -3.64 z ",
    "m -20.08028,3.64 h 4.536 v -15.904 h 6.272 V 230.2 h -17.08 v 3.696 h 6.272 z ",
    "m -19.91221,0 h 4.536 v -15.904 h 6.272 V 230.2 h -17.08 v 3.696 h 6.272 z ",
    "m -15.57232,0 h 4.536 v -19.6 h -4.536 z ",
    "m -5.54829,0 -4.396,-6.3 c 2.548,-1.092 4.032,-3.248 4.032,-6.188 0,-4.396 -3.276,-7.112 -8.512,-7.112 h -8.484 v 19.6 h 4.536 v -5.46 h 3.948 0.224 l 3.78,5.46 z ",
    "m -4.956,-12.488 c 0,2.128 -1.4,3.416 -4.172,3.416 h -3.696 v -6.832 h 3.696 c 2.772,0 4.172,1.26 4.172,3.416 z ",
    "m -28.06463,-3.472 v -3.64 h -14.812 v 19.6 h 4.536 v -7.14 h 9.072 v -3.64 h -9.072 v -5.18 z ",
    "m -20.220328,0 v -3.64 h -14.812 v 19.6 h 4.536 v -7.14 h 9.072 v -3.64 h -9.072 v -5.18 z ",
    "m -31.280327,16.296 c 6.16,0 10.724,-4.284 10.724,-10.136 0,-5.852 -4.564,-10.136 -10.724,-10.136 -6.188,0 -10.724,4.312 -10.724,10.136 0,5.824 4.536,10.136 10.724,10.136 z ",
    "m 0,-3.864 c -3.5,0 -6.132,-2.548 -6.132,-6.272 0,-3.724 2.632,-6.272 6.132,-6.272 3.5,0 6.132,2.548 6.132,6.272 0,3.724 -2.632,6.272 -6.132,6.272 z ",
    "M 39.976647,246.16 v -4.536 h 9.1 v -3.528 h -9.1 v -4.256 h 10.304 v -3.64 h -14.812 v 19.6 h 15.176 v -3.64 z ",
    "m -15.180328,-0.728 c -1.148,0.616 -2.296,0.84 -3.528,0.84 -3.752,0 -6.356,-2.604 -6.356,-6.272 0,-3.724 2.604,-6.272 6.412,-6.272 1.988,0 3.64,0.7 5.068,2.212 l 2.912,-2.688 c -1.904,-2.212 -4.76,-3.388 -8.204,-3.388 -6.244,0 -10.78,4.228 -10.78,10.136 0,5.908 4.536,10.136 10.696,10.136 2.8,0 5.768,-0.868 7.924,-2.492 v -7.952 h -4.144 z",
);

/// Identifies a path in the [`PathCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathId {
    /// Rounded square background.
    Base,
    /// The reversed R.
    GlyphPrimary,
    /// The G.
    GlyphSecondary,
    /// Bar along the bottom edge.
    Bar,
    /// The wordmark drawn on the bar.
    Text,
    /// Triangle over the upper-right half of the background.
    DiagonalBase,
    /// Bar with fully rounded ends.
    PillBar,
}

impl PathId {
    pub const ALL: [PathId; 7] = [
        PathId::Base,
        PathId::GlyphPrimary,
        PathId::GlyphSecondary,
        PathId::Bar,
        PathId::Text,
        PathId::DiagonalBase,
        PathId::PillBar,
    ];

    fn data(self) -> &'static str {
        match self {
            PathId::Base => BASE_DATA,
            PathId::GlyphPrimary => GLYPH_PRIMARY_DATA,
            PathId::GlyphSecondary => GLYPH_SECONDARY_DATA,
            PathId::Bar => BAR_DATA,
            PathId::Text => TEXT_DATA,
            PathId::DiagonalBase => DIAGONAL_BASE_DATA,
            PathId::PillBar => PILL_BAR_DATA,
        }
    }
}

/// An immutable path in design units.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPath {
    path: Path,
}

impl VectorPath {
    /// Parses SVG path data (the contents of a `d` attribute) authored in the
    /// design space.
    pub fn parse(data: &str) -> Result<Self> {
        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}"><path d="{data}"/></svg>"#,
            size = DESIGN_SIZE,
        );
        let tree = Tree::from_str(&svg, &Options::default())
            .map_err(|e| LogoError::PathData(e.to_string()))?;

        first_path(tree.root())
            .map(|path| Self {
                path: path.data().clone(),
            })
            .ok_or_else(|| LogoError::PathData(format!("no drawable path in `{data}`")))
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Tight bounds of the path's control points.
    pub fn bounds(&self) -> Rect {
        self.path.bounds()
    }
}

fn first_path(group: &Group) -> Option<&usvg::Path> {
    group.children().iter().find_map(|node| match node {
        Node::Path(path) => Some(path.as_ref()),
        Node::Group(group) => first_path(group),
        _ => None,
    })
}

/// Every built-in path, parsed once.
#[derive(Debug)]
pub struct PathCatalog {
    paths: Vec<VectorPath>,
}

static CATALOG: LazyLock<PathCatalog> = LazyLock::new(|| {
    PathCatalog::parse_builtin().expect("built-in logo path data must parse")
});

impl PathCatalog {
    /// The process-wide catalog.
    pub fn get() -> &'static PathCatalog {
        &CATALOG
    }

    /// Parses every built-in path. Only fails if the embedded data is broken.
    pub fn parse_builtin() -> Result<Self> {
        let paths = PathId::ALL
            .iter()
            .map(|id| VectorPath::parse(id.data()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { paths })
    }

    pub fn path(&self, id: PathId) -> &VectorPath {
        // Declaration order of PathId matches PathId::ALL.
        &self.paths[id as usize]
    }
}

/// A `width × height` rectangle at the origin with every corner rounded by
/// `radius`.
pub fn rounded_rect(width: f32, height: f32, radius: f32) -> Option<Path> {
    let k = radius * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, radius);
    pb.cubic_to(0.0, radius - k, radius - k, 0.0, radius, 0.0);
    pb.line_to(width - radius, 0.0);
    pb.cubic_to(width - radius + k, 0.0, width, radius - k, width, radius);
    pb.line_to(width, height - radius);
    pb.cubic_to(
        width,
        height - radius + k,
        width - radius + k,
        height,
        width - radius,
        height,
    );
    pb.line_to(radius, height);
    pb.cubic_to(radius - k, height, 0.0, height - radius + k, 0.0, height - radius);
    pb.close();
    pb.finish()
}

/// The bar for a `width × height` background: square on top, bottom corners
/// rounded to match [`rounded_rect`].
pub fn rounded_bar(width: f32, height: f32) -> Option<Path> {
    let r = CORNER_RADIUS;
    let k = r * KAPPA;
    let top = height - BAR_HEIGHT;
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, top);
    pb.line_to(width, top);
    pb.line_to(width, height - r);
    pb.cubic_to(width, height - r + k, width - r + k, height, width - r, height);
    pb.line_to(r, height);
    pb.cubic_to(r - k, height, 0.0, height - r + k, 0.0, height - r);
    pb.close();
    pb.finish()
}
