use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::{PlotError, PlotResult};

/// Stand-in for `a` when it is exactly zero so the closed forms stay finite.
pub const DEGENERATE_A: f64 = 1e-9;

/// Coefficients of `y = ax² + bx + c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
        }
    }
}

impl Coefficients {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn validate(self) -> PlotResult<()> {
        for (name, value) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !value.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "coefficient `{name}` must be finite"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn evaluate(self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Maps three `[0, 1)` samples onto the randomizer ranges
    /// `a ∈ [-5, 5)`, `b ∈ [-10, 10)`, `c ∈ [-20, 20)`, one decimal each.
    ///
    /// A zero `a` would flatten the parabola, so it becomes `0.1`.
    #[must_use]
    pub fn from_unit_samples(unit_a: f64, unit_b: f64, unit_c: f64) -> Self {
        let pick = |unit: f64, span: f64| round_to_tenth(unit.clamp(0.0, 1.0) * span - span / 2.0);
        let a = pick(unit_a, 10.0);
        Self {
            a: if a == 0.0 { 0.1 } else { a },
            b: pick(unit_b, 20.0),
            c: pick(unit_c, 40.0),
        }
    }

    /// Standard form for display, e.g. `y = 2x² - 3x + 0`.
    #[must_use]
    pub fn equation(self) -> String {
        let a = round_for_display(self.a);
        let leading = if a == 1.0 {
            "x²".to_owned()
        } else if a == -1.0 {
            "-x²".to_owned()
        } else {
            format!("{}x²", display_number(a))
        };
        format!(
            "y = {leading} {}x {}",
            signed_term(self.b),
            signed_term(self.c)
        )
    }
}

/// Extremum of the parabola.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub h: f64,
    pub k: f64,
}

/// Closed-form properties of a quadratic, consumed read-only by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub vertex: Vertex,
    /// Real roots in ascending order; `None` when the discriminant is negative.
    pub roots: Option<SmallVec<[f64; 2]>>,
    pub axis_of_symmetry: f64,
    pub y_intercept: f64,
    pub discriminant: f64,
}

impl DerivedStats {
    #[must_use]
    pub fn from_coefficients(coefficients: Coefficients) -> Self {
        let Coefficients { a, b, c } = coefficients;
        let a = if a == 0.0 { DEGENERATE_A } else { a };

        let discriminant = b * b - 4.0 * a * c;
        let h = -b / (2.0 * a);
        let k = a * h * h + b * h + c;

        let roots = if discriminant >= 0.0 {
            let sqrt_discriminant = discriminant.sqrt();
            let r1 = (-b + sqrt_discriminant) / (2.0 * a);
            let r2 = (-b - sqrt_discriminant) / (2.0 * a);
            if discriminant == 0.0 {
                Some(smallvec![r1])
            } else {
                Some(smallvec![r1.min(r2), r1.max(r2)])
            }
        } else {
            None
        };

        Self {
            vertex: Vertex { h, k },
            roots,
            axis_of_symmetry: h,
            y_intercept: c,
            discriminant,
        }
    }

    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.as_ref().map_or(0, |roots| roots.len())
    }

    /// Vertex form for display, e.g. `y = 1(x - 2)² - 3`.
    #[must_use]
    pub fn vertex_form(&self, a: f64) -> String {
        let h = round_for_display(self.vertex.h);
        let shift = if h < 0.0 {
            format!("x + {}", display_number(-h))
        } else {
            format!("x - {}", display_number(h))
        };
        format!(
            "y = {}({shift})² {}",
            display_number(round_for_display(a)),
            signed_term(self.vertex.k)
        )
    }
}

/// Two-decimal rounding used by every human-facing number outside the axes.
#[must_use]
pub fn round_for_display(value: f64) -> f64 {
    if value.abs() < 1e-9 {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Shortest decimal text for an already rounded value, without a `-0`.
#[must_use]
pub fn display_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else {
        format!("{value}")
    }
}

fn signed_term(value: f64) -> String {
    let rounded = round_for_display(value);
    if rounded >= 0.0 {
        format!("+ {}", display_number(rounded))
    } else {
        format!("- {}", display_number(rounded.abs()))
    }
}

fn round_to_tenth(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}
