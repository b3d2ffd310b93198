/// Magnitude from which axis labels switch to exponential notation.
pub const EXPONENTIAL_LABEL_THRESHOLD: f64 = 10_000.0;

/// Magnitude below which non-zero labels also switch to exponential notation,
/// so values near machine epsilon never print as long zero runs.
pub const SMALL_LABEL_THRESHOLD: f64 = 1e-6;

const LABEL_SIGNIFICANT_DIGITS: usize = 10;

/// Formats one tick value for an axis label.
///
/// `|value| >= 10000` prints with one fractional digit in exponential form
/// with a signed exponent (`1.5e+4`). Everything else is rounded to ten significant digits and
/// printed in its shortest decimal form, which trims trailing zeros and the
/// float noise of tick arithmetic (`0.30000000000000004` prints as `0.3`).
#[must_use]
pub fn format_axis_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }
    if value.abs() >= EXPONENTIAL_LABEL_THRESHOLD {
        return with_signed_exponent(format!("{value:.1e}"));
    }

    let rounded = round_to_significant_digits(value, LABEL_SIGNIFICANT_DIGITS);
    if rounded == 0.0 {
        return "0".to_owned();
    }
    if rounded.abs() < SMALL_LABEL_THRESHOLD {
        return format!("{rounded:e}");
    }
    format!("{rounded}")
}

// `{:e}` omits the `+` on positive exponents.
fn with_signed_exponent(text: String) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

fn round_to_significant_digits(value: f64, digits: usize) -> f64 {
    let precision = digits.saturating_sub(1);
    // Round-trip through scientific text: exact decimal rounding without
    // the overflow a `10^n` scale factor hits at extreme magnitudes.
    format!("{value:.precision$e}")
        .parse::<f64>()
        .unwrap_or(value)
}
