mod frame;
mod null_renderer;
mod primitives;

pub use frame::{AnnotationKind, CanvasLayerKind, LayerPrimitives, PointAnnotation, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PolylinePrimitive, RectPrimitive,
    TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from viewport math and interaction state. Returning
/// `PlotError::SurfaceUnavailable` means "no surface this time"; the engine
/// skips the frame and tries again on the next event.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
