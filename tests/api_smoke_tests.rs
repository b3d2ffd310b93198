use parabola_rs::api::{FrameStatus, PlotEngine, PlotEngineConfig, PlotTheme};
use parabola_rs::core::{CanvasSize, Coefficients, DerivedStats, Viewport};
use parabola_rs::render::{AnnotationKind, NullRenderer};
use parabola_rs::{PlotError, ViewportChange};

fn build_engine() -> PlotEngine<NullRenderer> {
    let config = PlotEngineConfig::new(CanvasSize::new(800.0, 600.0));
    PlotEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn engine_starts_with_unit_parabola_in_default_window() {
    let engine = build_engine();
    assert_eq!(engine.coefficients(), Coefficients::new(1.0, 0.0, 0.0));
    assert_eq!(engine.viewport(), Viewport::default());
    assert!(engine.previous_coefficients().is_none());
    assert_eq!(engine.theme(), PlotTheme::dark());
}

#[test]
fn engine_init_rejects_invalid_canvas() {
    let config = PlotEngineConfig::new(CanvasSize::new(0.0, 600.0));
    let err = PlotEngine::new(NullRenderer::default(), config)
        .err()
        .expect("zero width must fail");
    assert!(matches!(err, PlotError::InvalidCanvas { .. }));
}

#[test]
fn render_records_frame_in_null_renderer() {
    let mut engine = build_engine();
    assert_eq!(engine.render(), FrameStatus::Drawn);

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_line_count >= 24);
    assert_eq!(renderer.last_text_count, 21);
}

#[test]
fn coefficient_changes_remember_previous_function() {
    let mut engine = build_engine();
    engine
        .set_coefficients(Coefficients::new(2.0, 1.0, -3.0))
        .expect("set coefficients");
    engine
        .set_coefficients(Coefficients::new(-1.0, 0.0, 9.0))
        .expect("set coefficients");

    assert_eq!(
        engine.previous_coefficients(),
        Some(Coefficients::new(2.0, 1.0, -3.0))
    );
    let roots = engine.stats().roots.clone().expect("roots");
    assert_eq!(roots.as_slice(), &[-3.0, 3.0]);
}

#[test]
fn non_finite_coefficients_are_rejected_and_state_kept() {
    let mut engine = build_engine();
    let err = engine
        .set_coefficients(Coefficients::new(f64::NAN, 0.0, 0.0))
        .expect_err("NaN must fail");
    assert!(format!("{err}").contains("coefficient `a`"));
    assert_eq!(engine.coefficients(), Coefficients::default());
    assert!(engine.previous_coefficients().is_none());
}

#[test]
fn host_supplied_stats_drive_annotations() {
    let mut engine = build_engine();
    let coefficients = Coefficients::new(1.0, 0.0, -1.0);
    let mut stats = DerivedStats::from_coefficients(coefficients);
    stats.roots = None;
    engine
        .set_function(coefficients, stats)
        .expect("set function");

    let frame = engine.build_frame().expect("frame");
    assert!(frame.annotations_of(AnnotationKind::Root).is_empty());
}

#[test]
fn grid_controls_report_changes() {
    let mut engine = build_engine();
    assert_eq!(engine.set_grid_enabled(true), ViewportChange::Unchanged);
    assert_eq!(engine.toggle_grid(), ViewportChange::Applied);
    assert!(!engine.viewport().grid_enabled());
    assert_eq!(engine.set_grid_enabled(false), ViewportChange::Unchanged);
}

#[test]
fn invalid_theme_is_rejected() {
    let mut engine = build_engine();
    let theme = PlotTheme {
        root_radius: -1.0,
        ..PlotTheme::dark()
    };
    assert!(engine.set_theme(theme).is_err());
    assert_eq!(engine.theme(), PlotTheme::dark());
}

#[test]
fn randomized_coefficients_render() {
    let mut engine = build_engine();
    for (ua, ub, uc) in [(0.0, 0.0, 0.0), (0.5, 0.5, 0.5), (0.99, 0.01, 0.73)] {
        engine
            .set_coefficients(Coefficients::from_unit_samples(ua, ub, uc))
            .expect("random coefficients");
        assert_ne!(engine.coefficients().a, 0.0);
        assert_eq!(engine.render(), FrameStatus::Drawn);
    }
}

#[test]
fn config_json_drives_engine_setup() {
    let json = r#"{
        "canvas": {"width": 500.0, "height": 400.0, "device_pixel_ratio": 2.0},
        "initial_viewport": {"x_min": -1.0, "x_max": 1.0, "y_min": -2.0, "y_max": 2.0, "grid_enabled": false},
        "initial_coefficients": {"a": 3.0, "b": 0.0, "c": -1.0}
    }"#;
    let config = PlotEngineConfig::from_json_str(json).expect("config");
    let engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");

    assert_eq!(engine.canvas().backing_size(), (1000, 800));
    assert!(!engine.viewport().grid_enabled());
    assert_eq!(engine.coefficients().a, 3.0);
}
