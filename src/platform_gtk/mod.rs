//! GTK4 embedding: a `DrawingArea` wired to a shared [`PlotEngine`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::trace;

use crate::api::{FrameStatus, PlotEngine, ViewportChange};
use crate::core::CanvasSize;
use crate::render::{CairoRenderer, Renderer};

pub type SharedPlotEngine = Rc<RefCell<PlotEngine<CairoRenderer>>>;

pub struct GtkPlotAdapter {
    engine: SharedPlotEngine,
    area: gtk::DrawingArea,
}

impl GtkPlotAdapter {
    #[must_use]
    pub fn new(engine: PlotEngine<CairoRenderer>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let area = gtk::DrawingArea::new();
        area.set_hexpand(true);
        area.set_vexpand(true);

        install_draw_func(&area, &engine);
        install_drag(&area, &engine);
        install_pointer_tracking_and_scroll(&area, &engine);

        Self { engine, area }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Shared handle for host controls (sliders, grid toggle, reset).
    /// Call [`GtkPlotAdapter::queue_draw`] after mutating it.
    #[must_use]
    pub fn engine(&self) -> SharedPlotEngine {
        Rc::clone(&self.engine)
    }

    pub fn queue_draw(&self) {
        self.area.queue_draw();
    }
}

fn install_draw_func(area: &gtk::DrawingArea, engine: &SharedPlotEngine) {
    let engine = Rc::clone(engine);
    area.set_draw_func(move |area, context, width, height| {
        let mut engine = engine.borrow_mut();
        let canvas = CanvasSize::new(f64::from(width), f64::from(height))
            .with_device_pixel_ratio(f64::from(area.scale_factor()));
        if engine.canvas() != canvas {
            engine.resize(canvas.width, canvas.height, canvas.device_pixel_ratio);
        }
        if engine.render_on_cairo_context(context) == FrameStatus::Skipped {
            trace!(width, height, "gtk draw skipped");
        }
    });
}

fn install_drag(area: &gtk::DrawingArea, engine: &SharedPlotEngine) {
    let drag = gtk::GestureDrag::new();

    let begin_engine = Rc::clone(engine);
    drag.connect_drag_begin(move |_, x, y| {
        begin_engine.borrow_mut().pointer_down(x, y);
    });

    let update_engine = Rc::clone(engine);
    let weak_area = area.downgrade();
    drag.connect_drag_update(move |gesture, offset_x, offset_y| {
        let Some((start_x, start_y)) = gesture.start_point() else {
            return;
        };
        let change = update_engine
            .borrow_mut()
            .pointer_move(start_x + offset_x, start_y + offset_y);
        redraw_if_needed(&weak_area, change);
    });

    let end_engine = Rc::clone(engine);
    drag.connect_drag_end(move |_, _, _| {
        end_engine.borrow_mut().pointer_up();
    });

    area.add_controller(drag);
}

fn install_pointer_tracking_and_scroll(area: &gtk::DrawingArea, engine: &SharedPlotEngine) {
    // Scroll events carry no position; zoom anchors on the last hover point.
    let pointer: Rc<Cell<Option<(f64, f64)>>> = Rc::new(Cell::new(None));

    let motion = gtk::EventControllerMotion::new();
    let enter_pointer = Rc::clone(&pointer);
    motion.connect_enter(move |_, x, y| enter_pointer.set(Some((x, y))));
    let motion_pointer = Rc::clone(&pointer);
    motion.connect_motion(move |_, x, y| motion_pointer.set(Some((x, y))));
    let leave_pointer = Rc::clone(&pointer);
    let leave_engine = Rc::clone(engine);
    motion.connect_leave(move |_| {
        leave_pointer.set(None);
        leave_engine.borrow_mut().pointer_leave();
    });
    area.add_controller(motion);

    let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);
    let scroll_engine = Rc::clone(engine);
    let weak_area = area.downgrade();
    scroll.connect_scroll(move |_, _, delta_y| {
        let change = wheel_at_hover(&mut scroll_engine.borrow_mut(), pointer.get(), delta_y);
        redraw_if_needed(&weak_area, change);
        glib::Propagation::Stop
    });
    area.add_controller(scroll);
}

/// Zooms about the last known hover point; without one there is no anchor
/// and the notch is ignored.
fn wheel_at_hover<R: Renderer>(
    engine: &mut PlotEngine<R>,
    hover: Option<(f64, f64)>,
    delta_y: f64,
) -> ViewportChange {
    let Some((x, y)) = hover else {
        trace!(delta_y, "wheel ignored: pointer position unknown");
        return ViewportChange::Unchanged;
    };
    engine.wheel(x, y, delta_y)
}

fn redraw_if_needed(area: &glib::WeakRef<gtk::DrawingArea>, change: ViewportChange) {
    if !change.needs_redraw() {
        return;
    }
    if let Some(area) = area.upgrade() {
        area.queue_draw();
    }
}

#[cfg(test)]
mod tests {
    use super::wheel_at_hover;
    use crate::api::{PlotEngine, PlotEngineConfig, ViewportChange};
    use crate::core::{CanvasSize, Viewport};
    use crate::render::NullRenderer;

    fn engine() -> PlotEngine<NullRenderer> {
        let config = PlotEngineConfig::new(CanvasSize::new(800.0, 600.0));
        PlotEngine::new(NullRenderer::default(), config).expect("engine init")
    }

    #[test]
    fn scroll_before_any_hover_leaves_viewport_alone() {
        let mut engine = engine();
        assert_eq!(wheel_at_hover(&mut engine, None, 1.0), ViewportChange::Unchanged);
        assert_eq!(engine.viewport(), Viewport::default());
    }

    #[test]
    fn scroll_after_hover_zooms_about_pointer() {
        let mut engine = engine();
        let change = wheel_at_hover(&mut engine, Some((400.0, 300.0)), -1.0);
        assert_eq!(change, ViewportChange::Applied);
        let viewport = engine.viewport();
        assert!((viewport.x_min() + viewport.x_max()).abs() < 1e-9);
        assert!(viewport.x_span() < 20.0);
    }
}
