use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use parabola_rs::api::{PlotEngine, PlotEngineConfig};
use parabola_rs::core::{CanvasSize, Coefficients};
use parabola_rs::platform_gtk::{GtkPlotAdapter, SharedPlotEngine};
use parabola_rs::render::CairoRenderer;
use parabola_rs::{PlotResult, telemetry};

fn main() {
    let _ = telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.parabola.demos.quadratic_explorer")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_engine() -> PlotResult<PlotEngine<CairoRenderer>> {
    let renderer = CairoRenderer::new(960, 640)?;
    let config = PlotEngineConfig::new(CanvasSize::new(960.0, 640.0));
    PlotEngine::new(renderer, config)
}

fn build_ui(app: &gtk::Application) {
    let engine = match build_engine() {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to initialize plot engine: {err}");
            return;
        }
    };
    let adapter = Rc::new(GtkPlotAdapter::new(engine));

    let equation_label = gtk::Label::new(None);
    equation_label.set_xalign(0.0);
    let vertex_form_label = gtk::Label::new(None);
    vertex_form_label.set_xalign(0.0);

    let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    let defaults = Coefficients::default();
    let a_spin = coefficient_spin(defaults.a, -5.0, 5.0);
    let b_spin = coefficient_spin(defaults.b, -10.0, 10.0);
    let c_spin = coefficient_spin(defaults.c, -20.0, 20.0);
    for (name, spin) in [("a", &a_spin), ("b", &b_spin), ("c", &c_spin)] {
        controls.append(&gtk::Label::new(Some(name)));
        controls.append(spin);
    }

    let grid_toggle = gtk::ToggleButton::with_label("Grid");
    grid_toggle.set_active(true);
    controls.append(&grid_toggle);
    let reset_button = gtk::Button::with_label("Reset View");
    controls.append(&reset_button);

    let refresh_labels = {
        let engine = adapter.engine();
        let equation_label = equation_label.clone();
        let vertex_form_label = vertex_form_label.clone();
        move || update_labels(&engine, &equation_label, &vertex_form_label)
    };
    refresh_labels();

    for spin in [&a_spin, &b_spin, &c_spin] {
        let adapter = Rc::clone(&adapter);
        let (a_spin, b_spin, c_spin) = (a_spin.clone(), b_spin.clone(), c_spin.clone());
        let refresh_labels = refresh_labels.clone();
        spin.connect_value_changed(move |_| {
            let coefficients = Coefficients::new(a_spin.value(), b_spin.value(), c_spin.value());
            if let Err(err) = adapter.engine().borrow_mut().set_coefficients(coefficients) {
                eprintln!("rejected coefficients: {err}");
                return;
            }
            refresh_labels();
            adapter.queue_draw();
        });
    }

    grid_toggle.connect_toggled({
        let adapter = Rc::clone(&adapter);
        move |toggle| {
            let change = adapter
                .engine()
                .borrow_mut()
                .set_grid_enabled(toggle.is_active());
            if change.needs_redraw() {
                adapter.queue_draw();
            }
        }
    });

    reset_button.connect_clicked({
        let adapter = Rc::clone(&adapter);
        let grid_toggle = grid_toggle.clone();
        move |_| {
            adapter.engine().borrow_mut().reset_view();
            grid_toggle.set_active(true);
            adapter.queue_draw();
        }
    });

    let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
    root.append(&controls);
    root.append(&equation_label);
    root.append(&vertex_form_label);
    root.append(adapter.widget());

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("parabola-rs quadratic explorer")
        .default_width(960)
        .default_height(760)
        .child(&root)
        .build();
    window.present();
}

fn coefficient_spin(value: f64, min: f64, max: f64) -> gtk::SpinButton {
    let spin = gtk::SpinButton::with_range(min, max, 0.1);
    spin.set_digits(1);
    spin.set_value(value);
    spin
}

fn update_labels(engine: &SharedPlotEngine, equation: &gtk::Label, vertex_form: &gtk::Label) {
    let engine = engine.borrow();
    let coefficients = engine.coefficients();
    equation.set_text(&coefficients.equation());
    vertex_form.set_text(&engine.stats().vertex_form(coefficients.a));
}
