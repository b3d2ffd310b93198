use tracing::{debug, warn};

use crate::core::{CanvasSize, Coefficients, DerivedStats, SamplerConfig, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{InteractionMode, PanGesture};
use crate::render::{RenderFrame, Renderer};

use super::narration::NarrationStatus;
use super::render_frame_builder::{FrameInputs, build_render_frame};
use super::{PlotEngineConfig, PlotTheme};

/// Outcome of one draw request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Drawn,
    /// Nothing was drawn this time (no usable surface or canvas); the next
    /// triggering event retries.
    Skipped,
}

/// Effect of an input event on the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportChange {
    /// The event did not touch the viewport.
    Unchanged,
    /// The viewport changed; the host should redraw.
    Applied,
    /// The mutation would have produced invalid bounds and was refused.
    Rejected,
}

impl ViewportChange {
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `PlotEngine` owns the viewport and pan gesture, holds the host-provided
/// function and derived stats, and hands fully built frames to its renderer.
/// Event methods never return errors: a refused mutation leaves the previous
/// viewport in place and a failed draw is reported as `FrameStatus::Skipped`.
pub struct PlotEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) canvas: CanvasSize,
    pub(super) viewport: Viewport,
    pub(super) coefficients: Coefficients,
    pub(super) previous_coefficients: Option<Coefficients>,
    pub(super) stats: DerivedStats,
    pub(super) theme: PlotTheme,
    pub(super) sampler: SamplerConfig,
    pub(super) zoom_step_ratio: f64,
    pub(super) gesture: PanGesture,
    pub(super) narration: NarrationStatus,
}

impl<R: Renderer> PlotEngine<R> {
    pub fn new(renderer: R, config: PlotEngineConfig) -> PlotResult<Self> {
        config.validate()?;
        debug!(
            width = config.canvas.width,
            height = config.canvas.height,
            dpr = config.canvas.device_pixel_ratio,
            "plot engine init"
        );

        Ok(Self {
            renderer,
            canvas: config.canvas,
            viewport: config.initial_viewport,
            coefficients: config.initial_coefficients,
            previous_coefficients: None,
            stats: DerivedStats::from_coefficients(config.initial_coefficients),
            theme: config.theme,
            sampler: config.sampler(),
            zoom_step_ratio: config.zoom_step_ratio,
            gesture: PanGesture::default(),
            narration: NarrationStatus::default(),
        })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Coefficients in effect before the most recent change, if any.
    #[must_use]
    pub fn previous_coefficients(&self) -> Option<Coefficients> {
        self.previous_coefficients
    }

    #[must_use]
    pub fn stats(&self) -> &DerivedStats {
        &self.stats
    }

    #[must_use]
    pub fn theme(&self) -> PlotTheme {
        self.theme
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.gesture.mode()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Replaces the function and recomputes its stats with the built-in calculator.
    pub fn set_coefficients(&mut self, coefficients: Coefficients) -> PlotResult<()> {
        let stats = DerivedStats::from_coefficients(coefficients);
        self.set_function(coefficients, stats)
    }

    /// Replaces the function together with stats computed by the host.
    pub fn set_function(&mut self, coefficients: Coefficients, stats: DerivedStats) -> PlotResult<()> {
        coefficients.validate()?;
        debug!(
            a = coefficients.a,
            b = coefficients.b,
            c = coefficients.c,
            roots = stats.root_count(),
            "set function"
        );
        self.previous_coefficients = Some(self.coefficients);
        self.coefficients = coefficients;
        self.stats = stats;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: PlotTheme) -> PlotResult<()> {
        theme.validate()?;
        self.theme = theme;
        debug!("set theme");
        Ok(())
    }

    /// Adopts a viewport handed back by the host application state.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Records new logical canvas dimensions and device pixel ratio.
    ///
    /// Transform math always uses the latest size, so scale factors never go
    /// stale. A degenerate size (e.g. a hidden canvas) is kept; frames are
    /// skipped and input ignored until a usable size arrives.
    pub fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) -> bool {
        let canvas = CanvasSize::new(width, height).with_device_pixel_ratio(device_pixel_ratio);
        self.canvas = canvas;
        if canvas.is_valid() {
            let (backing_width, backing_height) = canvas.backing_size();
            debug!(width, height, backing_width, backing_height, "canvas resized");
            true
        } else {
            warn!(width, height, device_pixel_ratio, "canvas resized to unusable size");
            false
        }
    }

    /// Restores the default window with the grid enabled.
    pub fn reset_view(&mut self) -> ViewportChange {
        let reset = self.viewport.reset();
        debug!("reset view");
        self.replace_viewport(reset)
    }

    pub fn toggle_grid(&mut self) -> ViewportChange {
        self.set_grid_enabled(!self.viewport.grid_enabled())
    }

    pub fn set_grid_enabled(&mut self, grid_enabled: bool) -> ViewportChange {
        let next = self.viewport.with_grid_enabled(grid_enabled);
        self.replace_viewport(next)
    }

    pub(super) fn replace_viewport(&mut self, next: Viewport) -> ViewportChange {
        if next == self.viewport {
            return ViewportChange::Unchanged;
        }
        self.viewport = next;
        ViewportChange::Applied
    }

    #[must_use]
    pub fn narration_status(&self) -> &NarrationStatus {
        &self.narration
    }

    /// Records the state of the external narration/feedback request.
    /// Rendering never depends on it.
    pub fn set_narration_status(&mut self, status: NarrationStatus) {
        self.narration = status;
    }

    /// Builds the frame for the current state without drawing it.
    pub fn build_frame(&self) -> PlotResult<RenderFrame> {
        build_render_frame(FrameInputs {
            coefficients: self.coefficients,
            stats: &self.stats,
            viewport: self.viewport,
            canvas: self.canvas,
            theme: &self.theme,
            sampler: self.sampler,
        })
    }

    /// Builds and draws one frame. Failures skip this frame only.
    pub fn render(&mut self) -> FrameStatus {
        let Some(frame) = self.build_frame_or_skip() else {
            return FrameStatus::Skipped;
        };

        let result = self.renderer.render(&frame);
        frame_status(result)
    }

    pub(super) fn build_frame_or_skip(&self) -> Option<RenderFrame> {
        match self.build_frame() {
            Ok(frame) => Some(frame),
            Err(err) => {
                debug!(error = %err, "skipping frame: cannot build");
                None
            }
        }
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

pub(super) fn frame_status(result: PlotResult<()>) -> FrameStatus {
    match result {
        Ok(()) => FrameStatus::Drawn,
        Err(PlotError::SurfaceUnavailable(reason)) => {
            debug!(%reason, "skipping frame: surface unavailable");
            FrameStatus::Skipped
        }
        Err(err) => {
            warn!(error = %err, "skipping frame: renderer failed");
            FrameStatus::Skipped
        }
    }
}
