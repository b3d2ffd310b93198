use parabola_rs::api::{FrameStatus, PlotEngine, PlotEngineConfig};
use parabola_rs::core::{
    CanvasSize, Coefficients, MAX_CURVE_SAMPLES, SamplerConfig, Viewport, clip_threshold,
    sample_curve,
};
use parabola_rs::render::NullRenderer;

fn segments_for(coefficients: Coefficients) -> Vec<Vec<parabola_rs::core::ScreenPoint>> {
    sample_curve(
        coefficients,
        Viewport::default(),
        CanvasSize::new(800.0, 600.0),
        SamplerConfig::default(),
    )
    .expect("sampler")
    .collect()
}

fn world_y_for(screen_y: f64) -> f64 {
    // Inverse of the default window's y mapping on a 600px canvas.
    -10.0 + (1.0 - screen_y / 600.0) * 20.0
}

#[test]
fn unit_parabola_is_single_connected_run() {
    let segments = segments_for(Coefficients::default());
    assert_eq!(segments.len(), 1);
    // 0, 2, ..., 800 inclusive.
    assert_eq!(segments[0].len(), 401);
}

#[test]
fn samples_are_monotonic_in_screen_x() {
    for run in segments_for(Coefficients::new(0.3, -2.0, -7.0)) {
        assert!(run.windows(2).all(|pair| pair[0].x < pair[1].x));
    }
}

#[test]
fn steep_parabola_is_clipped_to_threshold() {
    let viewport = Viewport::default();
    let threshold = clip_threshold(viewport, 100.0);
    assert_eq!(threshold, 1_000.0);

    let segments = segments_for(Coefficients::new(1_000.0, 0.0, 0.0));
    assert!(!segments.is_empty());
    for run in &segments {
        for point in run {
            assert!(world_y_for(point.y).abs() <= threshold + 1e-6);
            // Only |x| <= 1 survives, i.e. screen x in [360, 440].
            assert!(point.x >= 360.0 && point.x <= 440.0);
        }
    }
}

#[test]
fn wide_dip_below_threshold_splits_into_two_arcs() {
    // |100x² - 2000| <= 1000 only for 3.16 <= |x| <= 5.48.
    let segments = segments_for(Coefficients::new(100.0, 0.0, -2_000.0));
    assert_eq!(segments.len(), 2);

    let (left, right) = (&segments[0], &segments[1]);
    assert!(left.iter().all(|point| point.x > 180.0 && point.x < 275.0));
    assert!(right.iter().all(|point| point.x > 525.0 && point.x < 620.0));
    assert!(left.len() >= 2 && right.len() >= 2);
}

#[test]
fn curve_entirely_out_of_range_draws_nothing() {
    let segments = segments_for(Coefficients::new(0.0, 0.0, 5_000.0));
    assert!(segments.is_empty());
}

#[test]
fn degenerate_linear_function_still_samples() {
    let segments = segments_for(Coefficients::new(0.0, 2.0, 1.0));
    assert_eq!(segments.len(), 1);
    let first = segments[0].first().expect("first point");
    // y(-10) = -19 projects below the canvas but stays in range.
    assert!(first.y > 600.0);
}

#[test]
fn stride_that_misses_right_edge_adds_final_sample() {
    let segments: Vec<_> = sample_curve(
        Coefficients::default(),
        Viewport::default(),
        CanvasSize::new(101.0, 100.0),
        SamplerConfig {
            stride_px: 3.0,
            ..SamplerConfig::default()
        },
    )
    .expect("sampler")
    .collect();

    let run = &segments[0];
    assert_eq!(run.last().map(|point| point.x), Some(101.0));
    assert_eq!(run[run.len() - 2].x, 99.0);
}

#[test]
fn invalid_canvas_is_rejected_before_sampling() {
    assert!(
        sample_curve(
            Coefficients::default(),
            Viewport::default(),
            CanvasSize::new(-1.0, 100.0),
            SamplerConfig::default(),
        )
        .is_err()
    );
}

#[test]
fn sub_minimum_stride_is_rejected_by_sampler_and_engine_config() {
    let config = SamplerConfig {
        stride_px: 1e-300,
        ..SamplerConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(
        sample_curve(
            Coefficients::default(),
            Viewport::default(),
            CanvasSize::new(800.0, 600.0),
            config,
        )
        .is_err()
    );

    let engine_config =
        PlotEngineConfig::new(CanvasSize::new(800.0, 600.0)).with_sample_stride_px(1e-300);
    assert!(PlotEngine::new(NullRenderer::default(), engine_config).is_err());
}

#[test]
fn huge_canvas_width_caps_sample_count() {
    let width = 1e19;
    let segments: Vec<_> = sample_curve(
        Coefficients::default(),
        Viewport::default(),
        CanvasSize::new(width, 600.0),
        SamplerConfig::default(),
    )
    .expect("sampler")
    .collect();

    assert_eq!(segments.len(), 1);
    let run = &segments[0];
    assert!(run.len() <= MAX_CURVE_SAMPLES + 2);
    assert_eq!(run.first().map(|point| point.x), Some(0.0));
    assert_eq!(run.last().map(|point| point.x), Some(width));
}

#[test]
fn engine_still_draws_after_resize_to_huge_width() {
    let config = PlotEngineConfig::new(CanvasSize::new(800.0, 600.0));
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    assert!(engine.resize(1e19, 600.0, 1.0));
    assert_eq!(engine.render(), FrameStatus::Drawn);
}
