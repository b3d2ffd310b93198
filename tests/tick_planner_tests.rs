use approx::assert_relative_eq;
use parabola_rs::api::format_axis_value;
use parabola_rs::core::{axis_ticks, is_origin_tick, nice_step};

#[test]
fn default_window_uses_step_two() {
    let step = nice_step(20.0).expect("step");
    assert_eq!(step, 2.0);
    let ticks = axis_ticks(-10.0, 10.0, step);
    assert_eq!(
        ticks,
        vec![-10.0, -8.0, -6.0, -4.0, -2.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
    );
}

#[test]
fn unit_window_labels_have_no_float_noise() {
    let step = nice_step(1.0).expect("step");
    assert_relative_eq!(step, 0.1, max_relative = 1e-12);

    let labels: Vec<String> = axis_ticks(0.0, 1.0, 0.1)
        .into_iter()
        .map(format_axis_value)
        .collect();
    assert_eq!(labels.len(), 11);
    assert_eq!(labels[3], "0.3");
    assert_eq!(labels[7], "0.7");
    assert_eq!(labels.last().map(String::as_str), Some("1"));
}

#[test]
fn large_windows_switch_labels_to_exponent_form() {
    let step = nice_step(200_000.0).expect("step");
    assert_eq!(step, 20_000.0);

    let labels: Vec<String> = axis_ticks(-100_000.0, 100_000.0, step)
        .into_iter()
        .map(format_axis_value)
        .collect();
    assert_eq!(labels.first().map(String::as_str), Some("-1.0e+5"));
    assert!(labels.contains(&"2.0e+4".to_owned()));
}

#[test]
fn window_without_origin_has_no_origin_ticks() {
    let step = nice_step(10.0).expect("step");
    let ticks = axis_ticks(100.0, 110.0, step);
    assert_eq!(ticks.len(), 11);
    assert!(ticks.iter().all(|tick| !is_origin_tick(*tick, step)));
}

#[test]
fn window_narrower_than_step_has_no_ticks() {
    assert!(axis_ticks(0.1, 0.9, 1.0).is_empty());
}

#[test]
fn tiny_spans_still_yield_positive_steps() {
    let step = nice_step(1e-9).expect("step");
    assert!(step > 0.0);
    assert!(step < 1e-9);
}

#[test]
fn invalid_tick_inputs_yield_no_ticks() {
    assert!(axis_ticks(1.0, -1.0, 0.5).is_empty());
    assert!(axis_ticks(-1.0, 1.0, 0.0).is_empty());
    assert!(axis_ticks(f64::NAN, 1.0, 0.5).is_empty());
}
