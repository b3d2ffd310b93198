use crate::core::quadratic::Coefficients;
use crate::core::types::{CanvasSize, ScreenPoint, WorldPoint};
use crate::core::viewport::{Viewport, ViewportTransform};
use crate::error::{PlotError, PlotResult};

/// Samples whose `|y|` exceeds `clip_ratio * max(|y_min|, |y_max|)` break the curve.
pub const DEFAULT_CLIP_RATIO: f64 = 100.0;

/// Horizontal distance between samples in logical pixels.
pub const DEFAULT_SAMPLE_STRIDE_PX: f64 = 2.0;

/// Smallest accepted sampling stride in logical pixels.
pub const MIN_SAMPLE_STRIDE_PX: f64 = 1e-3;

/// Upper bound on samples per frame; wider canvases stretch the stride instead.
pub const MAX_CURVE_SAMPLES: usize = 100_000;

/// One connected run of screen-space samples.
pub type Polyline = Vec<ScreenPoint>;

/// Sampling knobs; both must be finite and positive, and the stride at least
/// `MIN_SAMPLE_STRIDE_PX`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    pub stride_px: f64,
    pub clip_ratio: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            stride_px: DEFAULT_SAMPLE_STRIDE_PX,
            clip_ratio: DEFAULT_CLIP_RATIO,
        }
    }
}

impl SamplerConfig {
    pub fn validate(self) -> PlotResult<()> {
        if !self.stride_px.is_finite() || self.stride_px < MIN_SAMPLE_STRIDE_PX {
            return Err(PlotError::InvalidData(format!(
                "sample stride must be finite and >= {MIN_SAMPLE_STRIDE_PX}"
            )));
        }
        if !self.clip_ratio.is_finite() || self.clip_ratio <= 0.0 {
            return Err(PlotError::InvalidData(
                "clip ratio must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// World-space `|y|` limit beyond which samples are treated as off-plot.
#[must_use]
pub fn clip_threshold(viewport: Viewport, clip_ratio: f64) -> f64 {
    viewport.y_min().abs().max(viewport.y_max().abs()) * clip_ratio
}

/// Lazily walks the canvas width and yields disconnected polylines of the curve.
///
/// A run ends at the first out-of-range (or non-finite) sample and the next
/// run starts at the following in-range one, so the two are never joined.
/// Runs with fewer than two points draw nothing and are dropped.
#[derive(Debug, Clone)]
pub struct CurveSegments {
    coefficients: Coefficients,
    transform: ViewportTransform,
    threshold: f64,
    stride_px: f64,
    next_sample: usize,
    sample_count: usize,
}

impl CurveSegments {
    fn sample_screen_x(&self, index: usize) -> f64 {
        let width = self.transform.canvas().width;
        (index as f64 * self.stride_px).min(width)
    }

    fn sample(&self, index: usize) -> Option<ScreenPoint> {
        let screen_x = self.sample_screen_x(index);
        let world_x = self
            .transform
            .screen_to_world(ScreenPoint::new(screen_x, 0.0))
            .x;
        let world_y = self.coefficients.evaluate(world_x);
        if !world_y.is_finite() || world_y.abs() > self.threshold {
            return None;
        }
        let screen = self.transform.world_to_screen(WorldPoint::new(world_x, world_y));
        // Keep the exact sample column; the round trip through world space can drift.
        Some(ScreenPoint::new(screen_x, screen.y))
    }
}

impl Iterator for CurveSegments {
    type Item = Polyline;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = Polyline::new();
        while self.next_sample < self.sample_count {
            let index = self.next_sample;
            self.next_sample += 1;
            match self.sample(index) {
                Some(point) => run.push(point),
                None if run.len() >= 2 => return Some(run),
                None => run.clear(),
            }
        }
        (run.len() >= 2).then_some(run)
    }
}

/// Starts sampling `y = ax² + bx + c` across the visible x-range.
///
/// At most `MAX_CURVE_SAMPLES` samples are taken; on very wide canvases the
/// effective stride grows to `width / MAX_CURVE_SAMPLES`.
pub fn sample_curve(
    coefficients: Coefficients,
    viewport: Viewport,
    canvas: CanvasSize,
    config: SamplerConfig,
) -> PlotResult<CurveSegments> {
    config.validate()?;
    let transform = viewport.transform(canvas)?;

    let stride_px = config
        .stride_px
        .max(canvas.width / MAX_CURVE_SAMPLES as f64);
    let full_steps = (canvas.width / stride_px)
        .floor()
        .min(MAX_CURVE_SAMPLES as f64) as usize;
    let reaches_edge = (full_steps as f64 * stride_px) >= canvas.width;
    let sample_count = full_steps.saturating_add(if reaches_edge { 1 } else { 2 });

    Ok(CurveSegments {
        coefficients,
        transform,
        threshold: clip_threshold(viewport, config.clip_ratio),
        stride_px,
        next_sample: 0,
        sample_count,
    })
}
