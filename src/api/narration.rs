//! Text composed for the external narration and tutor services.
//!
//! The crate never performs the network call; hosts send these strings to
//! whatever service they use and report progress through [`NarrationStatus`].

use serde::{Deserialize, Serialize};

use crate::core::quadratic::{display_number, round_for_display};
use crate::core::{Coefficients, DerivedStats};

/// Message shown when the tutor request fails.
pub const FEEDBACK_FALLBACK_MESSAGE: &str = "Sorry, I couldn't generate feedback right now.";

/// Lifecycle of one outstanding narration or feedback request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NarrationStatus {
    #[default]
    Idle,
    Pending,
    Ready(String),
    Failed(String),
}

impl NarrationStatus {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Text to show the user, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Ready(text) | Self::Failed(text) => Some(text),
            Self::Idle | Self::Pending => None,
        }
    }
}

/// Spoken walkthrough of the current parabola.
#[must_use]
pub fn explanation_script(a: f64, stats: &DerivedStats) -> String {
    let mut script = format!(
        "Analyzing the parabola where the 'a' coefficient is {}. ",
        rounded(a)
    );
    if a > 0.0 {
        script.push_str("Since 'a' is positive, it opens upwards, forming a valley. ");
    } else {
        script.push_str("Since 'a' is negative, it opens downwards, like a hill. ");
    }
    script.push_str(&format!(
        "The vertex, which is the lowest or highest point, is located at x equals {} and y equals {}. ",
        rounded(stats.vertex.h),
        rounded(stats.vertex.k)
    ));

    match stats.roots.as_deref() {
        _ if stats.discriminant < 0.0 => script.push_str(
            "The parabola does not cross the x-axis, so there are no real roots. ",
        ),
        Some([root]) => script.push_str(&format!(
            "It touches the x-axis at a single point, a repeated root, at x equals {}. ",
            rounded(*root)
        )),
        Some([first, second, ..]) => script.push_str(&format!(
            "It crosses the x-axis at two points, which are the roots, located at approximately x equals {} and x equals {}. ",
            rounded(*first),
            rounded(*second)
        )),
        _ => {}
    }
    script
}

/// Tutor prompt describing the latest coefficient change and the resulting graph.
#[must_use]
pub fn feedback_prompt(
    previous: Option<Coefficients>,
    current: Coefficients,
    stats: &DerivedStats,
) -> String {
    let action = match previous {
        Some(previous) => format!(
            "The student changed the parameters of the quadratic function from {} to {}.",
            coefficient_tuple(previous),
            coefficient_tuple(current)
        ),
        None => {
            "The student has set the following initial parameters for a quadratic function."
                .to_owned()
        }
    };
    let roots = match &stats.roots {
        Some(roots) => roots
            .iter()
            .map(|root| rounded(*root))
            .collect::<Vec<_>>()
            .join(", "),
        None => "None".to_owned(),
    };

    [
        "You are a friendly and encouraging math tutor AI. A student is exploring quadratic \
         equations (y = ax^2 + bx + c) using an interactive tool. Provide concise, helpful \
         feedback based on the changes they made."
            .to_owned(),
        String::new(),
        format!("User's action: {action}"),
        String::new(),
        "Current graph properties:".to_owned(),
        format!(
            "- Vertex: ({}, {})",
            rounded(stats.vertex.h),
            rounded(stats.vertex.k)
        ),
        format!("- Roots: {roots}"),
        format!("- Y-intercept: {}", rounded(stats.y_intercept)),
        format!("- Discriminant: {}", rounded(stats.discriminant)),
        String::new(),
        "Your task: Analyze the change (or the initial state). Explain *why* the graph has its \
         current properties based on the coefficients. For example, if 'c' was changed, explain \
         its effect on the y-intercept. If 'a' was changed, talk about the parabola's width and \
         direction. If 'b' was changed, explain its complex effect on the vertex's position. \
         Keep the feedback encouraging and under 80 words. Address the student directly."
            .to_owned(),
    ]
    .join("\n")
}

fn rounded(value: f64) -> String {
    display_number(round_for_display(value))
}

fn coefficient_tuple(coefficients: Coefficients) -> String {
    format!(
        "(a:{}, b:{}, c:{})",
        rounded(coefficients.a),
        rounded(coefficients.b),
        rounded(coefficients.c)
    )
}
