use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Logical (CSS-pixel) size of the drawing surface plus its device pixel ratio.
///
/// All transform math runs in logical pixels. The backing store is sized in
/// device pixels and is only needed by raster backends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, device_pixel_ratio: f64) -> Self {
        self.device_pixel_ratio = device_pixel_ratio;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.device_pixel_ratio.is_finite()
            && self.device_pixel_ratio > 0.0
    }

    pub fn validate(self) -> PlotResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(PlotError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Device-pixel dimensions of the backing store (`logical * dpr`, rounded).
    #[must_use]
    pub fn backing_size(self) -> (u32, u32) {
        let scale = |logical: f64| {
            let device = (logical * self.device_pixel_ratio).round();
            if device.is_finite() && device > 0.0 {
                device.min(f64::from(u32::MAX)) as u32
            } else {
                0
            }
        };
        (scale(self.width), scale(self.height))
    }
}

/// Point in logical screen pixels; origin top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point in the mathematical plane; y grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
