use tracing::{debug, trace};

use crate::core::ScreenPoint;
use crate::interaction::resolve_wheel_zoom_factor;
use crate::render::Renderer;

use super::{PlotEngine, ViewportChange};

/// Thin adapters from host pointer/wheel events to pure viewport mutations.
///
/// Coordinates are logical pixels relative to the canvas' top-left corner.
impl<R: Renderer> PlotEngine<R> {
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.gesture.on_pointer_down(x, y);
        trace!(x, y, "pan start");
    }

    /// Pans by the delta since the previous pointer position while dragging.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ViewportChange {
        if !x.is_finite() || !y.is_finite() {
            return ViewportChange::Unchanged;
        }
        let Some((delta_x, delta_y)) = self.gesture.on_pointer_move(x, y) else {
            return ViewportChange::Unchanged;
        };
        if delta_x == 0.0 && delta_y == 0.0 {
            return ViewportChange::Unchanged;
        }

        match self.viewport.apply_pan(delta_x, delta_y, self.canvas) {
            Ok(next) => {
                trace!(delta_x, delta_y, "pan");
                self.replace_viewport(next)
            }
            Err(err) => {
                debug!(error = %err, delta_x, delta_y, "pan rejected");
                ViewportChange::Rejected
            }
        }
    }

    pub fn pointer_up(&mut self) {
        if self.gesture.on_pointer_up() {
            trace!("pan end");
        }
    }

    /// Leaving the canvas cancels an active drag; there is nothing to undo.
    pub fn pointer_leave(&mut self) {
        if self.gesture.on_pointer_leave() {
            trace!("pan cancelled by pointer leave");
        }
    }

    /// Zooms about the world point under the pointer.
    ///
    /// Positive `delta_y` zooms out. Hosts must suppress native page scrolling
    /// for wheel events delivered here.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> ViewportChange {
        let factor = match resolve_wheel_zoom_factor(delta_y, self.zoom_step_ratio) {
            Ok(Some(factor)) => factor,
            Ok(None) => return ViewportChange::Unchanged,
            Err(err) => {
                debug!(error = %err, delta_y, "wheel ignored");
                return ViewportChange::Unchanged;
            }
        };

        match self
            .viewport
            .apply_zoom_at_screen(ScreenPoint::new(x, y), factor, self.canvas)
        {
            Ok(next) => {
                trace!(x, y, factor, "zoom");
                self.replace_viewport(next)
            }
            Err(err) => {
                debug!(error = %err, factor, "zoom rejected");
                ViewportChange::Rejected
            }
        }
    }
}
