use crate::error::{PlotError, PlotResult};

/// Number of intervals `nice_step` aims for across one axis.
pub const TARGET_TICK_INTERVALS: f64 = 10.0;

/// Upper bound on ticks generated for a single axis.
pub const MAX_AXIS_TICKS: usize = 1_000;

/// Picks a 1/2/5 × 10ⁿ spacing yielding roughly ten intervals over `range`.
///
/// `range` must be finite and positive; anything else is a caller bug since
/// viewport spans are positive by construction.
pub fn nice_step(range: f64) -> PlotResult<f64> {
    if !range.is_finite() || range <= 0.0 {
        return Err(PlotError::InvalidData(
            "tick range must be finite and > 0".to_owned(),
        ));
    }

    let rough = range / TARGET_TICK_INTERVALS;
    let power = 10f64.powf(rough.log10().floor());
    let normalized = rough / power;
    let multiplier = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    let step = power * multiplier;
    if !step.is_finite() || step <= 0.0 {
        return Err(PlotError::InvalidData(
            "computed tick step must be finite and > 0".to_owned(),
        ));
    }
    Ok(step)
}

/// Multiples of `step` inside `[min, max]`, ascending.
///
/// Values are computed as `k * step` so zero lands exactly on `0.0`
/// instead of drifting through repeated addition.
#[must_use]
pub fn axis_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || !step.is_finite() || step <= 0.0 || min > max {
        return Vec::new();
    }

    let first = (min / step).ceil();
    let last = (max / step).floor();
    if !first.is_finite() || !last.is_finite() || last < first {
        return Vec::new();
    }

    let count = ((last - first) as usize).saturating_add(1).min(MAX_AXIS_TICKS);
    (0..count)
        .map(|offset| (first + offset as f64) * step)
        .filter(|value| *value <= max)
        .collect()
}

/// Whether `value` sits at the axis origin for the purpose of labeling.
#[must_use]
pub fn is_origin_tick(value: f64, step: f64) -> bool {
    value.abs() < step / 100.0
}
