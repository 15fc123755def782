//! HTML Canvas rendering for WASM environments.
//!
//! [`LogoCanvas`] wraps a [`LogoComponent`] for use from a web page. The page
//! forwards attribute changes and `ResizeObserver` notifications, and drives
//! time by calling `tick` from `requestAnimationFrame` or a timer. Every
//! completed redraw is pushed to the attached `<canvas>` element.
//!
//! # Feature Flag
//!
//! This module is only available with the `canvas` feature enabled:
//!
//! ```toml
//! [dependencies]
//! gr-logo = { version = "0.1", features = ["canvas"] }
//! ```
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { LogoCanvas } from 'gr-logo';
//!
//! await init();
//!
//! const el = document.querySelector('canvas');
//! const logo = new LogoCanvas('random');
//! logo.attach(el, el.clientWidth, el.clientHeight);
//!
//! new ResizeObserver(() => logo.resize(el.clientWidth, el.clientHeight)).observe(el);
//! const frame = (now) => { logo.tick(now); requestAnimationFrame(frame); };
//! requestAnimationFrame(frame);
//! ```

use resvg::tiny_skia::Pixmap;
use wasm_bindgen::Clamped;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::component::{Component, LogoComponent};
use crate::profile::{Configurable, LogoProfile};
use crate::raster::to_rgba_image;
use crate::scheduler::{ManualClock, TimerScheduler};
use crate::theme::ThemeName;

// ============================================================================
// LogoCanvas
// ============================================================================

/// A logo component bound to an HTML canvas element.
#[wasm_bindgen]
pub struct LogoCanvas {
    component: LogoComponent<TimerScheduler<ManualClock>>,
    clock: ManualClock,
    element: Option<HtmlCanvasElement>,
}

#[wasm_bindgen]
impl LogoCanvas {
    /// Creates a detached logo. `theme` may be a theme name or `"random"`.
    #[wasm_bindgen(constructor)]
    pub fn new(theme: Option<String>) -> LogoCanvas {
        let clock = ManualClock::new();
        let mut component = LogoComponent::with_scheduler(TimerScheduler::new(clock.clone()));
        if let Some(theme) = theme {
            component.set_theme(&theme);
        }
        Self {
            component,
            clock,
            element: None,
        }
    }

    /// Names of every registered theme.
    pub fn themes() -> js_sys::Array {
        ThemeName::ALL
            .iter()
            .map(|name| JsValue::from_str(name.as_str()))
            .collect()
    }

    // ---- Lifecycle ----

    /// Binds the logo to `canvas` inside a `width × height` host box and
    /// draws it.
    pub fn attach(
        &mut self,
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<(), JsError> {
        self.element = Some(canvas);
        self.component.on_attach(width, height);
        self.present()
    }

    pub fn detach(&mut self) {
        self.component.on_detach();
        self.element = None;
    }

    /// Reports a new host box size. The redraw happens on a later `tick`.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.component.on_size_changed(width, height);
    }

    /// Advances time to `now_ms` (as passed to `requestAnimationFrame`) and
    /// runs any due resize. Returns whether the canvas was updated.
    pub fn tick(&mut self, now_ms: f64) -> Result<bool, JsError> {
        self.clock
            .set_millis(now_ms)
            .map_err(|e| JsError::new(&format!("Invalid timestamp {}: {}", now_ms, e)))?;
        let before = self.component.draw_count();
        self.component.poll();
        if self.component.draw_count() == before {
            return Ok(false);
        }
        self.present()?;
        Ok(true)
    }

    // ---- Attributes ----

    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.component.theme().as_str().to_string()
    }

    #[wasm_bindgen(js_name = "setTheme")]
    pub fn set_theme(&mut self, theme: &str) -> Result<(), JsError> {
        self.component.on_theme_changed(theme);
        self.present_unless_animating()
    }

    #[wasm_bindgen(getter)]
    pub fn fill(&self) -> bool {
        self.component.fill()
    }

    #[wasm_bindgen(js_name = "setFill")]
    pub fn set_fill(&mut self, fill: bool) -> Result<(), JsError> {
        self.component.on_fill_changed(fill);
        self.present_unless_animating()
    }

    /// Hands redraws to the caller, who then calls `draw` once per frame.
    #[wasm_bindgen(js_name = "setAnimating")]
    pub fn set_animating(&mut self, animating: bool) {
        self.component.set_animating(animating);
    }

    /// Styleguide margin for the current host box, in pixels.
    #[wasm_bindgen(getter)]
    pub fn padding(&self) -> f32 {
        self.component.padding()
    }

    /// Canvas size as `[width, height]`.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> Vec<u32> {
        self.component.size().to_vec()
    }

    // ---- Rendering ----

    /// Redraws the attached canvas now.
    pub fn draw(&mut self) -> Result<(), JsError> {
        self.component.draw();
        self.present()
    }

    /// Renders the current theme onto any canvas at `width × height`,
    /// independent of the attached one.
    #[wasm_bindgen(js_name = "renderToCanvas")]
    pub fn render_to_canvas(
        &self,
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<(), JsError> {
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| JsError::new(&format!("Cannot render at {}x{}", width, height)))?;
        self.component.draw_to(&mut pixmap);
        put_pixmap(canvas, &pixmap)
    }

    // ---- Profile Import/Export ----

    /// Exports the current settings as a JSON string.
    #[wasm_bindgen(js_name = "exportProfileJson")]
    pub fn export_profile_json(&self) -> Result<String, JsError> {
        self.component
            .export_profile()
            .to_json()
            .map_err(|e| JsError::new(&format!("Failed to serialize profile: {}", e)))
    }

    /// Applies settings from a JSON string and redraws.
    #[wasm_bindgen(js_name = "applyProfileJson")]
    pub fn apply_profile_json(&mut self, json: &str) -> Result<(), JsError> {
        let profile = LogoProfile::from_json(json)
            .map_err(|e| JsError::new(&format!("Failed to parse profile: {}", e)))?;
        self.component.apply_profile(&profile);
        self.present_unless_animating()
    }
}

impl LogoCanvas {
    /// Copies the component's canvas to the attached element, if both exist.
    fn present(&self) -> Result<(), JsError> {
        match (&self.element, self.component.canvas()) {
            (Some(element), Some(pixmap)) => put_pixmap(element, pixmap),
            _ => Ok(()),
        }
    }

    /// While animating the canvas may have been resized without a redraw, so
    /// the caller's next `draw` presents it instead.
    fn present_unless_animating(&self) -> Result<(), JsError> {
        if self.component.is_animating() {
            return Ok(());
        }
        self.present()
    }
}

fn put_pixmap(canvas: &HtmlCanvasElement, pixmap: &Pixmap) -> Result<(), JsError> {
    let width = pixmap.width();
    let height = pixmap.height();

    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| JsError::new("Failed to get 2d context"))?
        .ok_or_else(|| JsError::new("Canvas 2d context is null"))?
        .dyn_into()
        .map_err(|_| JsError::new("Failed to cast to CanvasRenderingContext2d"))?;

    let raw_pixels: Vec<u8> = to_rgba_image(pixmap).into_raw();
    let image_data =
        ImageData::new_with_u8_clamped_array_and_sh(Clamped(&raw_pixels), width, height)
            .map_err(|_| JsError::new("Failed to create ImageData"))?;

    ctx.put_image_data(&image_data, 0.0, 0.0)
        .map_err(|_| JsError::new("Failed to put image data"))?;

    Ok(())
}
