use serde::{Deserialize, Serialize};

use crate::core::sampler::{DEFAULT_CLIP_RATIO, DEFAULT_SAMPLE_STRIDE_PX};
use crate::core::{CanvasSize, Coefficients, SamplerConfig, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{DEFAULT_ZOOM_STEP_RATIO, resolve_wheel_zoom_factor};

use super::PlotTheme;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load plot setup
/// without inventing their own ad-hoc format. View state itself is not
/// persisted across sessions; `initial_viewport` only seeds a new engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotEngineConfig {
    pub canvas: CanvasSize,
    #[serde(default)]
    pub initial_viewport: Viewport,
    #[serde(default)]
    pub initial_coefficients: Coefficients,
    #[serde(default)]
    pub theme: PlotTheme,
    #[serde(default = "default_sample_stride_px")]
    pub sample_stride_px: f64,
    #[serde(default = "default_clip_ratio")]
    pub clip_ratio: f64,
    #[serde(default = "default_zoom_step_ratio")]
    pub zoom_step_ratio: f64,
}

impl PlotEngineConfig {
    /// Creates a config with the default window, coefficients and dark theme.
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            initial_viewport: Viewport::default(),
            initial_coefficients: Coefficients::default(),
            theme: PlotTheme::default(),
            sample_stride_px: default_sample_stride_px(),
            clip_ratio: default_clip_ratio(),
            zoom_step_ratio: default_zoom_step_ratio(),
        }
    }

    #[must_use]
    pub fn with_initial_viewport(mut self, viewport: Viewport) -> Self {
        self.initial_viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_initial_coefficients(mut self, coefficients: Coefficients) -> Self {
        self.initial_coefficients = coefficients;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: PlotTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the horizontal curve sampling stride in logical pixels.
    #[must_use]
    pub fn with_sample_stride_px(mut self, sample_stride_px: f64) -> Self {
        self.sample_stride_px = sample_stride_px;
        self
    }

    /// Sets the multiple of the largest y bound beyond which the curve is clipped.
    #[must_use]
    pub fn with_clip_ratio(mut self, clip_ratio: f64) -> Self {
        self.clip_ratio = clip_ratio;
        self
    }

    /// Sets the relative zoom applied per wheel notch.
    #[must_use]
    pub fn with_zoom_step_ratio(mut self, zoom_step_ratio: f64) -> Self {
        self.zoom_step_ratio = zoom_step_ratio;
        self
    }

    #[must_use]
    pub fn sampler(self) -> SamplerConfig {
        SamplerConfig {
            stride_px: self.sample_stride_px,
            clip_ratio: self.clip_ratio,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        self.canvas.validate()?;
        self.initial_coefficients.validate()?;
        self.theme.validate()?;
        self.sampler().validate()?;
        resolve_wheel_zoom_factor(0.0, self.zoom_step_ratio)?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse engine config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_sample_stride_px() -> f64 {
    DEFAULT_SAMPLE_STRIDE_PX
}

fn default_clip_ratio() -> f64 {
    DEFAULT_CLIP_RATIO
}

fn default_zoom_step_ratio() -> f64 {
    DEFAULT_ZOOM_STEP_RATIO
}
