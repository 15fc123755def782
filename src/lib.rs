//! gr-logo: the GR logo as a themeable, resolution-independent raster
//! component.
//!
//! The logo is a fixed set of vector paths in a 256×256 design space. A
//! theme says how each region is painted, the renderer scales everything to
//! the target pixmap, and [`LogoComponent`] keeps a canvas sized to its host
//! box and redraws it when the theme, fill mode or box size changes.
//!
//! # Example
//!
//! ```
//! use gr_logo::{Component, LogoComponent, ThemeName};
//!
//! let mut logo = LogoComponent::new().with_theme("rainbow");
//! logo.on_attach(256, 256);
//!
//! let canvas = logo.canvas().unwrap();
//! assert_eq!((canvas.width(), canvas.height()), (256, 256));
//! assert_eq!(logo.theme(), ThemeName::Rainbow);
//! ```
//!
//! # Rendering Without a Component
//!
//! ```
//! use gr_logo::{ThemeName, render, tiny_skia::Pixmap};
//!
//! let mut pixmap = Pixmap::new(512, 256).unwrap();
//! render::render(&mut pixmap, ThemeName::Classy.definition(), true);
//! ```
//!
//! # Serializable Profiles
//!
//! Use [`LogoProfile`] with the [`Configurable`] trait to move settings
//! between a page, the CLI and stored files:
//!
//! ```
//! use gr_logo::{Configurable, LogoComponent, LogoProfile};
//!
//! let mut logo = LogoComponent::new();
//! logo.apply_profile(&LogoProfile::from_json(r#"{"theme":"other"}"#).unwrap());
//!
//! let json = logo.export_profile().to_json().unwrap();
//! assert!(json.contains("\"other\""));
//! ```

mod color;
mod component;
mod error;
mod geometry;
mod profile;

pub mod paths;
pub mod raster;
pub mod render;
pub mod scheduler;
pub mod theme;

#[cfg(feature = "canvas")]
mod canvas;

pub use resvg::tiny_skia;

#[cfg(feature = "canvas")]
pub use canvas::LogoCanvas;
pub use color::Rgba;
pub use component::{Component, LogoComponent, LogoComponentState, RESIZE_DEBOUNCE};
pub use error::{LogoError, Result};
pub use geometry::{
    Axis, BAR_HEIGHT, BoundingBox, CORNER_RADIUS, DESIGN_SIZE, REGIONS, RegionGeometry, SizePx,
    padding_for,
};
pub use paths::{PathCatalog, PathId, VectorPath};
pub use profile::{Configurable, LogoProfile};
pub use render::{Layout, RasterLayer, Renderer, StopPolicy};
pub use scheduler::{Clock, ManualClock, Scheduler, SystemClock, TaskKey, TimerScheduler};
pub use theme::{FillStyle, Outline, Overlay, ThemeDefinition, ThemeName, ThemeRequest};
