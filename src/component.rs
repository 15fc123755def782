//! The logo component: theme and fill state, canvas sizing, and redraw
//! policy.
//!
//! A host integration (a web page, a window, a test) owns a [`LogoComponent`]
//! and forwards its lifecycle events through the [`Component`] trait. The
//! component keeps its canvas sized to the host box and redraws it:
//!
//! - immediately on attach, theme changes and fill changes
//! - once per burst of size changes, [`RESIZE_DEBOUNCE`] after the last one
//! - never on its own while an external animation driver is active
//!
//! Debounced work only runs when the host calls [`LogoComponent::poll`].

use std::time::Duration;

use rand::Rng;
use resvg::tiny_skia::Pixmap;
use tracing::{debug, trace, warn};

use crate::geometry::{SizePx, padding_for};
use crate::profile::{Configurable, LogoProfile};
use crate::render::Renderer;
use crate::scheduler::{Scheduler, SystemClock, TaskKey, TimerScheduler};
use crate::theme::{self, ThemeDefinition, ThemeName};

/// How long size changes must settle before the canvas is resized.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

// ============================================================================
// Component Trait
// ============================================================================

/// Lifecycle notifications a host delivers to a component.
pub trait Component {
    /// The component was placed in a `width × height` box.
    fn on_attach(&mut self, width: u32, height: u32);

    /// The component was removed from its host.
    fn on_detach(&mut self);

    /// The host box changed size.
    fn on_size_changed(&mut self, width: u32, height: u32);

    /// The `theme` attribute changed.
    fn on_theme_changed(&mut self, theme: &str);

    /// The `fill` attribute changed.
    fn on_fill_changed(&mut self, fill: bool);
}

// ============================================================================
// LogoComponentState
// ============================================================================

/// Per-instance mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogoComponentState {
    pub theme: ThemeName,
    /// What the host asked for. See [`LogoComponentState::fill`].
    pub fill_requested: bool,
    /// Last observed host box, including changes still being debounced.
    pub host_size: SizePx,
    /// Size of the canvas as of the last completed resize.
    pub canvas_size: SizePx,
    /// An external driver owns the frame loop.
    pub animating: bool,
}

impl LogoComponentState {
    /// Fill mode in effect: requested and allowed by the theme.
    pub fn fill(&self) -> bool {
        self.fill_requested && self.theme.definition().fill_mode_allowed
    }

    /// Canvas size for the current host box. Without fill the canvas is the
    /// largest square that fits.
    pub fn target_canvas_size(&self) -> SizePx {
        if self.fill() {
            self.host_size
        } else {
            SizePx::square(self.host_size.min_side())
        }
    }
}

// ============================================================================
// LogoComponent
// ============================================================================

/// A themed logo drawn onto its own canvas.
///
/// # Example
///
/// ```
/// use gr_logo::{Component, LogoComponent};
///
/// let mut logo = LogoComponent::new().with_theme("playfull");
/// logo.on_attach(300, 200);
///
/// assert_eq!(logo.size(), [200, 200]);
/// assert_eq!(logo.padding(), 25.0);
/// assert!(logo.canvas().is_some());
/// ```
#[derive(Debug)]
pub struct LogoComponent<S = TimerScheduler<SystemClock>> {
    state: LogoComponentState,
    attached: bool,
    canvas: Option<Pixmap>,
    scheduler: S,
    renderer: Renderer<'static>,
    draw_count: u64,
}

impl LogoComponent {
    /// Creates a detached component with the default theme, debouncing on
    /// wall-clock time.
    pub fn new() -> Self {
        Self::with_scheduler(TimerScheduler::default())
    }
}

impl Default for LogoComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scheduler> LogoComponent<S> {
    /// Creates a detached component that defers resizes through `scheduler`.
    pub fn with_scheduler(scheduler: S) -> Self {
        Self {
            state: LogoComponentState::default(),
            attached: false,
            canvas: None,
            scheduler,
            renderer: Renderer::default(),
            draw_count: 0,
        }
    }

    /// Sets the initial theme request.
    pub fn with_theme(mut self, theme: &str) -> Self {
        self.set_theme(theme);
        self
    }

    pub fn state(&self) -> &LogoComponentState {
        &self.state
    }

    pub fn theme(&self) -> ThemeName {
        self.state.theme
    }

    pub fn theme_definition(&self) -> &'static ThemeDefinition {
        self.state.theme.definition()
    }

    /// Resolves and applies a theme request, then redraws.
    ///
    /// Unknown names keep the current theme. `"random"` uses the thread RNG.
    pub fn set_theme(&mut self, request: &str) {
        self.set_theme_with_rng(request, &mut rand::thread_rng());
    }

    pub fn set_theme_with_rng<R: Rng + ?Sized>(&mut self, request: &str, rng: &mut R) {
        let name = theme::resolve_with(request, Some(self.state.theme), rng);
        debug!(request, theme = %name, "theme changed");
        self.state.theme = name;
        if self.state.fill_requested && !self.state.fill() {
            warn!(theme = %name, "theme does not allow fill mode, drawing square");
        }
        self.refresh();
    }

    /// Whether fill mode is in effect.
    pub fn fill(&self) -> bool {
        self.state.fill()
    }

    /// Requests fill mode. The request is remembered across theme changes
    /// but only takes effect while the theme allows it.
    pub fn set_fill(&mut self, fill: bool) {
        self.state.fill_requested = fill;
        if fill && !self.state.fill() {
            warn!(theme = %self.state.theme, "theme does not allow fill mode, drawing square");
        }
        self.refresh();
    }

    /// String-level attribute bridge. `None` means the attribute was removed.
    ///
    /// `fill` is on when present with any value other than `"false"`.
    /// Removing `theme` keeps the current theme. Other names are ignored.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        match (name, value) {
            ("theme", Some(theme)) => self.set_theme(theme),
            ("theme", None) => trace!("theme attribute removed, keeping current theme"),
            ("fill", value) => self.set_fill(value.is_some_and(|v| v != "false")),
            _ => trace!(name, "ignoring unknown attribute"),
        }
    }

    /// Margin the logo needs around it in the current host box.
    pub fn padding(&self) -> f32 {
        padding_for(self.state.host_size.width, self.state.host_size.height)
    }

    /// Canvas dimensions as `[width, height]`.
    pub fn size(&self) -> [u32; 2] {
        self.state.canvas_size.as_array()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_animating(&self) -> bool {
        self.state.animating
    }

    /// Hands the frame loop to an external driver, which is then expected to
    /// call [`draw`](Self::draw) once per frame.
    pub fn set_animating(&mut self, animating: bool) {
        self.state.animating = animating;
    }

    /// The component's canvas. `None` while detached or when the host box has
    /// no area.
    pub fn canvas(&self) -> Option<&Pixmap> {
        self.canvas.as_ref()
    }

    /// Number of completed redraws of the component's own canvas.
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Redraws the component's canvas now, regardless of animation state.
    pub fn draw(&mut self) {
        let Some(canvas) = self.canvas.as_mut() else {
            trace!("no canvas to draw on");
            return;
        };
        self.renderer
            .render(canvas, self.state.theme.definition(), self.state.fill());
        self.draw_count += 1;
    }

    /// Draws the current theme onto a caller-supplied surface, laid out for
    /// that surface's own size.
    pub fn draw_to(&self, target: &mut Pixmap) {
        self.renderer
            .render(target, self.state.theme.definition(), self.state.fill());
    }

    /// Runs deferred work whose delay has passed. Returns the number of tasks
    /// run.
    pub fn poll(&mut self) -> usize {
        let due = self.scheduler.take_due();
        for key in &due {
            match key {
                TaskKey::Resize => self.resize(),
            }
        }
        due.len()
    }

    /// Resizes the canvas to the current host box and redraws unless
    /// animating.
    fn resize(&mut self) {
        let size = self.state.target_canvas_size();
        if self.canvas.is_none() || self.state.canvas_size != size {
            self.canvas = Pixmap::new(size.width, size.height);
        }
        self.state.canvas_size = size;
        debug!(width = size.width, height = size.height, fill = self.state.fill(), "canvas resized");

        if self.state.animating {
            trace!("animating, skipping redraw");
        } else {
            self.draw();
        }
    }

    /// Applies a state change that does not come from the host box.
    fn refresh(&mut self) {
        if self.attached {
            self.resize();
        }
    }
}

impl<S: Scheduler> Component for LogoComponent<S> {
    fn on_attach(&mut self, width: u32, height: u32) {
        self.attached = true;
        self.state.host_size = SizePx::new(width, height);
        debug!(width, height, "attached");
        self.resize();
    }

    fn on_detach(&mut self) {
        self.attached = false;
        self.scheduler.cancel(TaskKey::Resize);
        self.canvas = None;
        self.state.canvas_size = SizePx::default();
        debug!("detached");
    }

    fn on_size_changed(&mut self, width: u32, height: u32) {
        self.state.host_size = SizePx::new(width, height);
        if self.attached {
            trace!(width, height, "host resized, debouncing");
            self.scheduler
                .schedule_debounced(TaskKey::Resize, RESIZE_DEBOUNCE);
        }
    }

    fn on_theme_changed(&mut self, theme: &str) {
        self.set_theme(theme);
    }

    fn on_fill_changed(&mut self, fill: bool) {
        self.set_fill(fill);
    }
}

impl<S: Scheduler> Configurable for LogoComponent<S> {
    /// Applies theme, fill and box size, then redraws once.
    fn apply_profile(&mut self, profile: &LogoProfile) {
        self.state.theme = theme::resolve(&profile.theme, Some(self.state.theme));
        self.state.fill_requested = profile.fill;
        self.state.host_size = profile.size();
        self.refresh();
    }

    fn export_profile(&self) -> LogoProfile {
        LogoProfile::new()
            .with_theme(self.state.theme.as_str())
            .with_fill(self.state.fill_requested)
            .with_size(self.state.host_size.width, self.state.host_size.height)
    }
}

// ============================================================================
// Tests
// ============================================================================
