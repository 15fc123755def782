//! Error type shared by the logo renderer.

use thiserror::Error;

/// Errors raised while building themes, parsing path data, or exporting images.
///
/// None of these surface from attribute mutation or resizing: the component
/// falls back to a known-good theme instead of failing.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("invalid theme: {0}")]
    InvalidTheme(String),

    #[error("invalid path data: {0}")]
    PathData(String),

    #[error("cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = LogoError> = std::result::Result<T, E>;
