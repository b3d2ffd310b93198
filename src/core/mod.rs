pub mod quadratic;
pub mod sampler;
pub mod ticks;
pub mod types;
pub mod viewport;

pub use quadratic::{Coefficients, DerivedStats, Vertex};
pub use sampler::{
    CurveSegments, MAX_CURVE_SAMPLES, MIN_SAMPLE_STRIDE_PX, Polyline, SamplerConfig,
    clip_threshold, sample_curve,
};
pub use ticks::{axis_ticks, is_origin_tick, nice_step};
pub use types::{CanvasSize, ScreenPoint, WorldPoint};
pub use viewport::{Viewport, ViewportBounds, ViewportTransform};
