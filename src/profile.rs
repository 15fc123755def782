//! Serializable logo settings.
//!
//! A [`LogoProfile`] captures what a host would otherwise set through
//! attributes: the theme request, the fill flag, and the box the logo lives
//! in. Profiles travel as JSON between a page and the CLI, or get stored next
//! to exported images.
//!
//! # Example
//!
//! ```
//! use gr_logo::LogoProfile;
//!
//! let profile = LogoProfile::new()
//!     .with_theme("rainbow")
//!     .with_size(512, 256)
//!     .with_fill(true);
//!
//! let json = profile.to_json().unwrap();
//! let restored = LogoProfile::from_json(&json).unwrap();
//! assert_eq!(restored.theme, "rainbow");
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::SizePx;

// ============================================================================
// Configurable Trait
// ============================================================================

/// Types that can be configured from a [`LogoProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    fn apply_profile(&mut self, profile: &LogoProfile);

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> LogoProfile;
}

// ============================================================================
// LogoProfile
// ============================================================================

/// Settings for one logo instance.
///
/// # JSON Format
///
/// ```json
/// {
///   "theme": "classy",
///   "fill": false,
///   "width": 256,
///   "height": 256,
///   "background": "#ffffff"
/// }
/// ```
///
/// Every field is optional when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct LogoProfile {
    /// A theme name or `"random"`. Unknown names keep the current theme.
    pub theme: String,

    /// Stretch the background to the box when the theme allows it.
    pub fill: bool,

    /// Width of the host box in pixels.
    pub width: u32,

    /// Height of the host box in pixels.
    pub height: u32,

    /// Color to flatten exported images onto. `None` keeps transparency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Default for LogoProfile {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            fill: false,
            width: DEFAULT_SIDE,
            height: DEFAULT_SIDE,
            background: None,
        }
    }
}

const DEFAULT_SIDE: u32 = 256;

fn default_theme() -> String {
    crate::theme::ThemeName::default().as_str().to_string()
}

impl LogoProfile {
    /// Creates a profile for the default theme in a 256×256 box.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn size(&self) -> SizePx {
        SizePx::new(self.width, self.height)
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serialization_roundtrip() {
        let profile = LogoProfile::new()
            .with_theme("transgender")
            .with_fill(true)
            .with_size(640, 480)
            .with_background("#ffffff");

        let json = profile.to_json().unwrap();
        let restored = LogoProfile::from_json(&json).unwrap();

        assert_eq!(restored, profile);
        assert_eq!(restored.size(), SizePx::new(640, 480));
    }

    #[test]
    fn profile_json_format() {
        let json = LogoProfile::new().to_json_pretty().unwrap();

        assert!(json.contains("\"theme\": \"original\""));
        assert!(json.contains("\"fill\": false"));
        assert!(json.contains("\"width\": 256"));
        // Unset background is omitted.
        assert!(!json.contains("background"));
    }

    #[test]
    fn empty_profile_deserializes() {
        let profile = LogoProfile::from_json("{}").unwrap();
        assert_eq!(profile, LogoProfile::default());
    }

    #[test]
    fn partial_profile_keeps_defaults() {
        let profile = LogoProfile::from_json(r#"{"theme":"random","height":64}"#).unwrap();
        assert_eq!(profile.theme, "random");
        assert_eq!(profile.width, 256);
        assert_eq!(profile.height, 64);
        assert!(!profile.fill);
    }

    #[test]
    fn malformed_profile_is_an_error() {
        assert!(LogoProfile::from_json(r#"{"width":"wide"}"#).is_err());
    }
}
