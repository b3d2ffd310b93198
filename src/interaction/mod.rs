use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Default relative zoom per wheel notch (1.1 out, 1/1.1 in).
pub const DEFAULT_ZOOM_STEP_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Drag-to-pan gesture state.
///
/// The last pointer position only exists while panning, so a move event in
/// `Idle` has nothing to diff against and is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanGesture {
    #[default]
    Idle,
    Panning { last_x: f64, last_y: f64 },
}

impl PanGesture {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::Panning { .. } => InteractionMode::Panning,
        }
    }

    /// `Idle --pointerDown--> Panning`. A second press restarts from the new position.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        *self = Self::Panning {
            last_x: x,
            last_y: y,
        };
    }

    /// Returns the pixel delta since the last recorded position while panning.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        match *self {
            Self::Idle => None,
            Self::Panning { last_x, last_y } => {
                *self = Self::Panning {
                    last_x: x,
                    last_y: y,
                };
                Some((x - last_x, y - last_y))
            }
        }
    }

    /// `Panning --pointerUp--> Idle`. Returns whether a gesture was active.
    pub fn on_pointer_up(&mut self) -> bool {
        let was_panning = matches!(self, Self::Panning { .. });
        *self = Self::Idle;
        was_panning
    }

    /// Leaving the canvas cancels the gesture exactly like a release.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.on_pointer_up()
    }
}

/// Maps a wheel delta to a multiplicative zoom factor about the pointer.
///
/// Positive deltas (scrolling down) zoom out by `1 + step`, negative deltas
/// zoom in by its reciprocal so a notch in and a notch out cancel. A zero
/// delta yields `None`.
pub fn resolve_wheel_zoom_factor(wheel_delta_y: f64, zoom_step_ratio: f64) -> PlotResult<Option<f64>> {
    if !wheel_delta_y.is_finite() {
        return Err(PlotError::InvalidData(
            "wheel delta must be finite".to_owned(),
        ));
    }
    if !zoom_step_ratio.is_finite() || zoom_step_ratio <= 0.0 {
        return Err(PlotError::InvalidData(
            "zoom step ratio must be finite and > 0".to_owned(),
        ));
    }
    if wheel_delta_y == 0.0 {
        return Ok(None);
    }

    let zoom_out = 1.0 + zoom_step_ratio;
    Ok(Some(if wheel_delta_y > 0.0 {
        zoom_out
    } else {
        1.0 / zoom_out
    }))
}

#[cfg(test)]
mod tests {
    use super::{InteractionMode, PanGesture, resolve_wheel_zoom_factor};

    #[test]
    fn move_while_idle_is_a_noop() {
        let mut gesture = PanGesture::default();
        assert_eq!(gesture.on_pointer_move(10.0, 10.0), None);
        assert_eq!(gesture.mode(), InteractionMode::Idle);
    }

    #[test]
    fn moves_report_incremental_deltas() {
        let mut gesture = PanGesture::default();
        gesture.on_pointer_down(100.0, 50.0);
        assert_eq!(gesture.on_pointer_move(110.0, 45.0), Some((10.0, -5.0)));
        assert_eq!(gesture.on_pointer_move(115.0, 45.0), Some((5.0, 0.0)));
        assert_eq!(gesture.mode(), InteractionMode::Panning);
    }

    #[test]
    fn leave_cancels_like_release() {
        let mut gesture = PanGesture::default();
        gesture.on_pointer_down(0.0, 0.0);
        assert!(gesture.on_pointer_leave());
        assert_eq!(gesture, PanGesture::Idle);
        assert!(!gesture.on_pointer_up());
    }

    #[test]
    fn wheel_factor_direction_and_symmetry() {
        let out = resolve_wheel_zoom_factor(120.0, 0.1)
            .expect("factor")
            .expect("some");
        let zoom_in = resolve_wheel_zoom_factor(-3.0, 0.1)
            .expect("factor")
            .expect("some");
        assert!(out > 1.0);
        assert!(zoom_in < 1.0);
        assert!((out * zoom_in - 1.0).abs() <= 1e-12);
        assert!(resolve_wheel_zoom_factor(0.0, 0.1).expect("factor").is_none());
    }

    #[test]
    fn wheel_factor_rejects_invalid_inputs() {
        let err = resolve_wheel_zoom_factor(f64::NAN, 0.1).expect_err("nan delta");
        assert!(format!("{err}").contains("wheel delta"));
        assert!(resolve_wheel_zoom_factor(1.0, 0.0).is_err());
    }
}
