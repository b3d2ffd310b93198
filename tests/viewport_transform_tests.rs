use approx::assert_abs_diff_eq;
use parabola_rs::PlotError;
use parabola_rs::core::{CanvasSize, ScreenPoint, Viewport, WorldPoint};

#[test]
fn default_window_maps_origin_to_canvas_center() {
    let canvas = CanvasSize::new(800.0, 600.0);
    let screen = Viewport::default()
        .world_to_screen(WorldPoint::new(0.0, 0.0), canvas)
        .expect("project origin");
    assert_eq!(screen, ScreenPoint::new(400.0, 300.0));
}

#[test]
fn screen_y_grows_downward() {
    let canvas = CanvasSize::new(800.0, 600.0);
    let viewport = Viewport::default();
    let top = viewport
        .world_to_screen(WorldPoint::new(0.0, 10.0), canvas)
        .expect("top");
    let bottom = viewport
        .world_to_screen(WorldPoint::new(0.0, -10.0), canvas)
        .expect("bottom");
    assert_eq!(top.y, 0.0);
    assert_eq!(bottom.y, 600.0);
}

#[test]
fn points_outside_window_project_outside_canvas() {
    let canvas = CanvasSize::new(200.0, 100.0);
    let screen = Viewport::default()
        .world_to_screen(WorldPoint::new(20.0, -30.0), canvas)
        .expect("project");
    assert_eq!(screen.x, 300.0);
    assert_eq!(screen.y, 200.0);
}

#[test]
fn asymmetric_window_round_trips() {
    let canvas = CanvasSize::new(640.0, 480.0);
    let viewport = Viewport::new(-3.5, 12.25, 100.0, 250.0).expect("viewport");
    let world = WorldPoint::new(4.2, 180.5);

    let screen = viewport.world_to_screen(world, canvas).expect("to screen");
    let back = viewport.screen_to_world(screen, canvas).expect("to world");

    assert_abs_diff_eq!(back.x, world.x, epsilon = 1e-9);
    assert_abs_diff_eq!(back.y, world.y, epsilon = 1e-9);
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let err = Viewport::default()
        .world_to_screen(WorldPoint::new(0.0, 0.0), CanvasSize::new(0.0, 600.0))
        .expect_err("empty canvas must fail");
    assert!(matches!(err, PlotError::InvalidCanvas { .. }));
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = Viewport::new(5.0, -5.0, -1.0, 1.0).expect_err("inverted x must fail");
    assert!(matches!(err, PlotError::InvalidViewport { .. }));
}

#[test]
fn pan_right_by_a_tenth_of_width_shifts_window_left() {
    let canvas = CanvasSize::new(800.0, 600.0);
    let panned = Viewport::default()
        .apply_pan(80.0, 0.0, canvas)
        .expect("pan");
    assert_abs_diff_eq!(panned.x_min(), -12.0, epsilon = 1e-12);
    assert_abs_diff_eq!(panned.x_max(), 8.0, epsilon = 1e-12);
    assert_eq!(panned.y_range(), (-10.0, 10.0));
}

#[test]
fn pan_down_moves_window_up() {
    let canvas = CanvasSize::new(800.0, 600.0);
    let panned = Viewport::default()
        .apply_pan(0.0, 60.0, canvas)
        .expect("pan");
    assert_abs_diff_eq!(panned.y_min(), -8.0, epsilon = 1e-12);
    assert_abs_diff_eq!(panned.y_max(), 12.0, epsilon = 1e-12);
}

#[test]
fn zoom_about_origin_scales_all_bounds() {
    let zoomed = Viewport::default()
        .apply_zoom(WorldPoint::new(0.0, 0.0), 1.1)
        .expect("zoom");
    assert_abs_diff_eq!(zoomed.x_min(), -11.0, epsilon = 1e-12);
    assert_abs_diff_eq!(zoomed.x_max(), 11.0, epsilon = 1e-12);
    assert_abs_diff_eq!(zoomed.y_min(), -11.0, epsilon = 1e-12);
    assert_abs_diff_eq!(zoomed.y_max(), 11.0, epsilon = 1e-12);
}

#[test]
fn zoom_at_screen_keeps_pointer_world_point_fixed() {
    let canvas = CanvasSize::new(800.0, 600.0);
    let viewport = Viewport::default();
    let pointer = ScreenPoint::new(200.0, 450.0);
    let before = viewport.screen_to_world(pointer, canvas).expect("before");

    let zoomed = viewport
        .apply_zoom_at_screen(pointer, 1.0 / 1.1, canvas)
        .expect("zoom");
    let after = zoomed.screen_to_world(pointer, canvas).expect("after");

    assert_abs_diff_eq!(after.x, before.x, epsilon = 1e-9);
    assert_abs_diff_eq!(after.y, before.y, epsilon = 1e-9);
    assert!(zoomed.x_span() < viewport.x_span());
}

#[test]
fn invalid_zoom_factors_are_rejected() {
    let viewport = Viewport::default();
    let anchor = WorldPoint::new(0.0, 0.0);
    assert!(viewport.apply_zoom(anchor, 0.0).is_err());
    assert!(viewport.apply_zoom(anchor, -2.0).is_err());
    assert!(viewport.apply_zoom(anchor, f64::NAN).is_err());
    assert!(viewport.apply_zoom(anchor, f64::INFINITY).is_err());
}

#[test]
fn overflowing_zoom_out_is_rejected() {
    let viewport = Viewport::new(-1e300, 1e300, -1.0, 1.0).expect("wide viewport");
    let err = viewport
        .apply_zoom(WorldPoint::new(0.0, 0.0), 1e10)
        .expect_err("overflow must fail");
    assert!(matches!(err, PlotError::InvalidViewport { .. }));
}

#[test]
fn reset_restores_default_window_with_grid() {
    let canvas = CanvasSize::new(800.0, 600.0);
    let moved = Viewport::default()
        .with_grid_enabled(false)
        .apply_pan(123.0, -45.0, canvas)
        .expect("pan")
        .apply_zoom(WorldPoint::new(3.0, 3.0), 0.5)
        .expect("zoom");

    let reset = moved.reset();
    assert_eq!(reset.x_range(), (-10.0, 10.0));
    assert_eq!(reset.y_range(), (-10.0, 10.0));
    assert!(reset.grid_enabled());
    assert_eq!(reset, Viewport::default());
}

#[test]
fn backing_store_scales_with_device_pixel_ratio() {
    let canvas = CanvasSize::new(400.0, 300.0).with_device_pixel_ratio(2.0);
    assert_eq!(canvas.backing_size(), (800, 600));
}
