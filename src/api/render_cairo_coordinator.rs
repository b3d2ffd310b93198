use crate::render::{CairoContextRenderer, Renderer};

use super::engine::frame_status;
use super::{FrameStatus, PlotEngine};

impl<R: Renderer + CairoContextRenderer> PlotEngine<R> {
    /// Draws the current frame onto a host-owned Cairo context, such as the
    /// one handed to a GTK draw callback. The context must already be in
    /// logical pixel units.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> FrameStatus {
        let Some(frame) = self.build_frame_or_skip() else {
            return FrameStatus::Skipped;
        };
        let result = self.renderer.render_on_cairo_context(context, &frame);
        frame_status(result)
    }
}
