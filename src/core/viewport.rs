use serde::{Deserialize, Serialize};

use crate::core::types::{CanvasSize, ScreenPoint, WorldPoint};
use crate::error::{PlotError, PlotResult};

/// Smallest span either axis may shrink to.
pub const MIN_SPAN_ABSOLUTE: f64 = 1e-9;

/// Smallest span relative to the largest bound magnitude. Below this the
/// bounds stop being distinguishable in `f64` and the transform degenerates.
pub const MIN_SPAN_RELATIVE: f64 = 1e-12;

pub const DEFAULT_X_MIN: f64 = -10.0;
pub const DEFAULT_X_MAX: f64 = 10.0;
pub const DEFAULT_Y_MIN: f64 = -10.0;
pub const DEFAULT_Y_MAX: f64 = 10.0;

/// Visible world-space window plus the grid flag.
///
/// Bounds are private so every value in circulation satisfies
/// `x_min < x_max`, `y_min < y_max` with spans above the minimum floor.
/// Mutations are pure: `apply_pan`, `apply_zoom` and `reset` return a new
/// viewport and leave `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewportBounds", into = "ViewportBounds")]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    grid_enabled: bool,
}

/// Unchecked wire form of [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    #[serde(default = "default_grid_enabled")]
    pub grid_enabled: bool,
}

fn default_grid_enabled() -> bool {
    true
}

impl TryFrom<ViewportBounds> for Viewport {
    type Error = PlotError;

    fn try_from(bounds: ViewportBounds) -> PlotResult<Self> {
        Viewport::new(bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max)
            .map(|viewport| viewport.with_grid_enabled(bounds.grid_enabled))
    }
}

impl From<Viewport> for ViewportBounds {
    fn from(viewport: Viewport) -> Self {
        Self {
            x_min: viewport.x_min,
            x_max: viewport.x_max,
            y_min: viewport.y_min,
            y_max: viewport.y_max,
            grid_enabled: viewport.grid_enabled,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            y_min: DEFAULT_Y_MIN,
            y_max: DEFAULT_Y_MAX,
            grid_enabled: true,
        }
    }
}

fn span_is_valid(min: f64, max: f64) -> bool {
    if !min.is_finite() || !max.is_finite() {
        return false;
    }
    let span = max - min;
    let magnitude = min.abs().max(max.abs());
    span.is_finite() && span >= MIN_SPAN_ABSOLUTE && span >= magnitude * MIN_SPAN_RELATIVE
}

impl Viewport {
    /// Builds a viewport with the grid enabled.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> PlotResult<Self> {
        if !span_is_valid(x_min, x_max) || !span_is_valid(y_min, y_max) {
            return Err(PlotError::InvalidViewport {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            grid_enabled: true,
        })
    }

    #[must_use]
    pub fn with_grid_enabled(mut self, grid_enabled: bool) -> Self {
        self.grid_enabled = grid_enabled;
        self
    }

    #[must_use]
    pub fn x_min(self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn grid_enabled(self) -> bool {
        self.grid_enabled
    }

    #[must_use]
    pub fn x_span(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn y_span(self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Pairs this viewport with a validated canvas for repeated projection.
    pub fn transform(self, canvas: CanvasSize) -> PlotResult<ViewportTransform> {
        canvas.validate()?;
        Ok(ViewportTransform {
            viewport: self,
            canvas,
        })
    }

    pub fn world_to_screen(self, point: WorldPoint, canvas: CanvasSize) -> PlotResult<ScreenPoint> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(PlotError::InvalidData(
                "world point must be finite".to_owned(),
            ));
        }
        Ok(self.transform(canvas)?.world_to_screen(point))
    }

    pub fn screen_to_world(self, point: ScreenPoint, canvas: CanvasSize) -> PlotResult<WorldPoint> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(PlotError::InvalidData(
                "screen point must be finite".to_owned(),
            ));
        }
        Ok(self.transform(canvas)?.screen_to_world(point))
    }

    /// Translates the window by a pointer drag of `(delta_x_px, delta_y_px)`.
    ///
    /// Dragging right moves the visible world left; the y delta is inverted
    /// to match the flipped screen axis.
    pub fn apply_pan(self, delta_x_px: f64, delta_y_px: f64, canvas: CanvasSize) -> PlotResult<Self> {
        canvas.validate()?;
        if !delta_x_px.is_finite() || !delta_y_px.is_finite() {
            return Err(PlotError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }

        let world_dx = self.x_span() * (delta_x_px / canvas.width);
        let world_dy = self.y_span() * (-delta_y_px / canvas.height);

        Self::new(
            self.x_min - world_dx,
            self.x_max - world_dx,
            self.y_min - world_dy,
            self.y_max - world_dy,
        )
        .map(|next| next.with_grid_enabled(self.grid_enabled))
    }

    /// Scales all four bounds about `anchor` by `factor` (>1 zooms out).
    ///
    /// The anchor keeps its screen position. A factor that would collapse or
    /// overflow a span is rejected and `self` stays authoritative.
    pub fn apply_zoom(self, anchor: WorldPoint, factor: f64) -> PlotResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(PlotError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor.x.is_finite() || !anchor.y.is_finite() {
            return Err(PlotError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }

        let scale = |bound: f64, anchor: f64| anchor + (bound - anchor) * factor;
        Self::new(
            scale(self.x_min, anchor.x),
            scale(self.x_max, anchor.x),
            scale(self.y_min, anchor.y),
            scale(self.y_max, anchor.y),
        )
        .map(|next| next.with_grid_enabled(self.grid_enabled))
    }

    /// Zooms about the world point currently under `pointer`.
    pub fn apply_zoom_at_screen(
        self,
        pointer: ScreenPoint,
        factor: f64,
        canvas: CanvasSize,
    ) -> PlotResult<Self> {
        let anchor = self.screen_to_world(pointer, canvas)?;
        self.apply_zoom(anchor, factor)
    }

    /// Returns the documented default window; the grid comes back enabled.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }
}

/// A viewport bound to a validated canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    viewport: Viewport,
    canvas: CanvasSize,
}

impl ViewportTransform {
    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn canvas(self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn world_to_screen(self, point: WorldPoint) -> ScreenPoint {
        let vp = self.viewport;
        let x = (point.x - vp.x_min) / vp.x_span() * self.canvas.width;
        let y = (1.0 - (point.y - vp.y_min) / vp.y_span()) * self.canvas.height;
        ScreenPoint::new(x, y)
    }

    #[must_use]
    pub fn screen_to_world(self, point: ScreenPoint) -> WorldPoint {
        let vp = self.viewport;
        let x = vp.x_min + (point.x / self.canvas.width) * vp.x_span();
        let y = vp.y_min + (1.0 - point.y / self.canvas.height) * vp.y_span();
        WorldPoint::new(x, y)
    }

    #[must_use]
    pub fn x_to_screen(self, x: f64) -> f64 {
        (x - self.viewport.x_min) / self.viewport.x_span() * self.canvas.width
    }

    #[must_use]
    pub fn y_to_screen(self, y: f64) -> f64 {
        (1.0 - (y - self.viewport.y_min) / self.viewport.y_span()) * self.canvas.height
    }
}
