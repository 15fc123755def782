//! Theme registry.
//!
//! A theme says how to paint each named region of the logo. The set of themes
//! is closed: [`ThemeName`] enumerates them and [`ThemeName::definition`]
//! returns the immutable [`ThemeDefinition`] for each. Requests coming from a
//! host (attribute strings, profiles, the command line) go through
//! [`resolve`], which never fails.

mod builtin;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::{debug, warn};

use crate::color::Rgba;
use crate::error::{LogoError, Result};
use crate::paths::PathId;

/// How a region is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillStyle {
    Solid(Rgba),
    /// Evenly spaced color bands along the region's gradient axis. Must hold
    /// at least one color.
    Gradient(&'static [Rgba]),
}

/// An outward stroke around the primary glyph. Width and style always come
/// together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    /// Visible stroke width in design units.
    pub width: f32,
    pub style: FillStyle,
}

/// An extra path painted over the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub path: PathId,
    pub style: FillStyle,
}

/// Everything needed to paint one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeDefinition {
    pub base: FillStyle,
    pub base_overlay: Option<Overlay>,
    /// The reversed R.
    pub glyph_primary: FillStyle,
    pub glyph_primary_outline: Option<Outline>,
    /// The G.
    pub glyph_secondary: FillStyle,
    pub bar: FillStyle,
    /// Replaces the catalog bar in square layout.
    pub bar_path: Option<PathId>,
    pub text: FillStyle,
    /// Whether the background may stretch to a non-square host box.
    pub fill_mode_allowed: bool,
}

impl ThemeDefinition {
    /// Checks the invariants the type system does not: gradients are
    /// non-empty and outline widths are positive.
    pub fn validate(&self) -> Result<()> {
        let fills = [
            ("base", Some(&self.base)),
            ("base overlay", self.base_overlay.as_ref().map(|o| &o.style)),
            ("primary glyph", Some(&self.glyph_primary)),
            (
                "primary glyph outline",
                self.glyph_primary_outline.as_ref().map(|o| &o.style),
            ),
            ("secondary glyph", Some(&self.glyph_secondary)),
            ("bar", Some(&self.bar)),
            ("text", Some(&self.text)),
        ];
        for (region, style) in fills {
            if let Some(FillStyle::Gradient(colors)) = style {
                if colors.is_empty() {
                    return Err(LogoError::InvalidTheme(format!(
                        "{region} gradient has no colors"
                    )));
                }
            }
        }
        if let Some(outline) = &self.glyph_primary_outline {
            if !outline.width.is_finite() || outline.width <= 0.0 {
                return Err(LogoError::InvalidTheme(format!(
                    "outline width {} is not positive",
                    outline.width
                )));
            }
        }
        Ok(())
    }
}

/// The registered themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    /// The original red, black, and white logo.
    #[default]
    Original,
    /// A playful coloring of the logo.
    Playfull,
    /// A classy styling of the text on the original logo.
    Classy,
    /// Pride flag background.
    Rainbow,
    /// Philadelphia pride flag inspired.
    Philadelphia,
    /// Transgender pride flag background.
    Transgender,
    /// Intersex pride flag inspired.
    Intersex,
    /// Other style background.
    Other,
    /// The GR on empty space.
    Gr,
    /// Black and white GR on a pill-shaped bar.
    BlackWhite,
    /// Exercises every feature at once. Never picked at random.
    Test,
}

impl ThemeName {
    pub const ALL: [ThemeName; 11] = [
        ThemeName::Original,
        ThemeName::Playfull,
        ThemeName::Classy,
        ThemeName::Rainbow,
        ThemeName::Philadelphia,
        ThemeName::Transgender,
        ThemeName::Intersex,
        ThemeName::Other,
        ThemeName::Gr,
        ThemeName::BlackWhite,
        ThemeName::Test,
    ];

    /// Themes eligible for random selection.
    pub const SELECTABLE: [ThemeName; 10] = [
        ThemeName::Original,
        ThemeName::Playfull,
        ThemeName::Classy,
        ThemeName::Rainbow,
        ThemeName::Philadelphia,
        ThemeName::Transgender,
        ThemeName::Intersex,
        ThemeName::Other,
        ThemeName::Gr,
        ThemeName::BlackWhite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Original => "original",
            ThemeName::Playfull => "playfull",
            ThemeName::Classy => "classy",
            ThemeName::Rainbow => "rainbow",
            ThemeName::Philadelphia => "philadelphia",
            ThemeName::Transgender => "transgender",
            ThemeName::Intersex => "intersex",
            ThemeName::Other => "other",
            ThemeName::Gr => "gr",
            ThemeName::BlackWhite => "blackwhite",
            ThemeName::Test => "test",
        }
    }

    pub fn is_selectable(&self) -> bool {
        *self != ThemeName::Test
    }

    pub fn definition(&self) -> &'static ThemeDefinition {
        builtin::definition(*self)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self> {
        ThemeName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| LogoError::UnknownTheme(s.to_string()))
    }
}

/// What a host asked for: a specific theme or a random one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeRequest {
    Named(ThemeName),
    Random,
}

impl ThemeRequest {
    pub const RANDOM: &'static str = "random";
}

impl FromStr for ThemeRequest {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self> {
        if s == Self::RANDOM {
            Ok(ThemeRequest::Random)
        } else {
            s.parse().map(ThemeRequest::Named)
        }
    }
}

impl From<ThemeName> for ThemeRequest {
    fn from(name: ThemeName) -> Self {
        ThemeRequest::Named(name)
    }
}

/// Resolves a theme request using the thread-local RNG for `"random"`.
///
/// See [`resolve_with`].
pub fn resolve(request: &str, previous: Option<ThemeName>) -> ThemeName {
    resolve_with(request, previous, &mut rand::thread_rng())
}

/// Resolves a theme request.
///
/// Unknown names fall back to `previous`, or to the default theme if no theme
/// was ever set. `"random"` draws uniformly from [`ThemeName::SELECTABLE`].
pub fn resolve_with<R: Rng + ?Sized>(
    request: &str,
    previous: Option<ThemeName>,
    rng: &mut R,
) -> ThemeName {
    match request.parse::<ThemeRequest>() {
        Ok(ThemeRequest::Named(name)) => name,
        Ok(ThemeRequest::Random) => {
            let name = random_theme(rng);
            debug!(theme = %name, "picked random theme");
            name
        }
        Err(_) => {
            let fallback = previous.unwrap_or_default();
            warn!(request, fallback = %fallback, "unknown theme, keeping fallback");
            fallback
        }
    }
}

/// Picks a theme uniformly from the selectable themes.
pub fn random_theme<R: Rng + ?Sized>(rng: &mut R) -> ThemeName {
    let candidates = &ThemeName::SELECTABLE;
    candidates[rng.gen_range(0..candidates.len())]
}
