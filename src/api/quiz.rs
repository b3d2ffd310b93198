use serde::{Deserialize, Serialize};

use crate::core::DerivedStats;
use crate::core::quadratic::{display_number, round_for_display};

/// Largest distance at which a target counts as hit.
pub const QUIZ_TOLERANCE: f64 = 0.5;

const QUIZ_IDLE_MESSAGE: &str = "Start a quiz to get feedback.";

/// A goal the student tries to reach by moving the coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizChallenge {
    Vertex { h: i32, k: i32 },
    RootAt { r: i32 },
}

impl QuizChallenge {
    /// Maps `[0, 1)` samples to a vertex target with integer coordinates in `[-6, 6]`.
    #[must_use]
    pub fn vertex_from_unit_samples(unit_h: f64, unit_k: f64) -> Self {
        Self::Vertex {
            h: unit_to_target(unit_h),
            k: unit_to_target(unit_k),
        }
    }

    /// Maps a `[0, 1)` sample to a root target in `[-6, 6]`.
    #[must_use]
    pub fn root_from_unit_sample(unit_r: f64) -> Self {
        Self::RootAt {
            r: unit_to_target(unit_r),
        }
    }

    #[must_use]
    pub fn goal_message(self) -> String {
        match self {
            Self::Vertex { h, k } => format!("Goal: Set vertex to ({h}, {k})"),
            Self::RootAt { r } => format!("Goal: Make a root at x = {r}"),
        }
    }

    #[must_use]
    pub fn hint(self) -> String {
        match self {
            Self::Vertex { .. } => {
                "Vertex x-coordinate is h = -b/(2a). Adjust 'a' and 'b' to change it.".to_owned()
            }
            Self::RootAt { r } => format!(
                "To make {r} a root, the equation a*r² + b*r + c must equal 0. Try adjusting 'c'."
            ),
        }
    }

    /// Whether the current function satisfies this challenge.
    #[must_use]
    pub fn is_met(self, stats: &DerivedStats) -> bool {
        match self {
            Self::Vertex { h, k } => {
                (stats.vertex.h - f64::from(h)).abs() < QUIZ_TOLERANCE
                    && (stats.vertex.k - f64::from(k)).abs() < QUIZ_TOLERANCE
            }
            Self::RootAt { r } => stats
                .roots
                .iter()
                .flatten()
                .any(|root| (root - f64::from(r)).abs() < QUIZ_TOLERANCE),
        }
    }
}

/// Quiz progress plus the message currently shown to the student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    challenge: Option<QuizChallenge>,
    message: String,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            challenge: None,
            message: QUIZ_IDLE_MESSAGE.to_owned(),
        }
    }
}

impl QuizState {
    #[must_use]
    pub fn challenge(&self) -> Option<QuizChallenge> {
        self.challenge
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn start(&mut self, challenge: QuizChallenge) {
        self.message = challenge.goal_message();
        self.challenge = Some(challenge);
    }

    pub fn start_vertex(&mut self, h: i32, k: i32) {
        self.start(QuizChallenge::Vertex { h, k });
    }

    pub fn start_root_at(&mut self, r: i32) {
        self.start(QuizChallenge::RootAt { r });
    }

    /// Grades the current function. Returns `None` when no quiz is running.
    pub fn check(&mut self, stats: &DerivedStats) -> Option<bool> {
        let challenge = self.challenge?;
        let passed = challenge.is_met(stats);
        self.message = match (challenge, passed) {
            (QuizChallenge::Vertex { .. }, true) => "Correct! Vertex is very close.".to_owned(),
            (QuizChallenge::Vertex { .. }, false) => format!(
                "Not quite. Current vertex is ({}, {}).",
                rounded(stats.vertex.h),
                rounded(stats.vertex.k)
            ),
            (QuizChallenge::RootAt { .. }, true) => {
                "Great! You created a root at the target.".to_owned()
            }
            (QuizChallenge::RootAt { r }, false) => {
                format!("No root near x={r}. Current roots: {}", root_list(stats))
            }
        };
        Some(passed)
    }

    /// Replaces the message with a hint for the running challenge.
    pub fn hint(&mut self) -> &str {
        let hint = self
            .challenge
            .map_or_else(|| "Start a quiz first!".to_owned(), QuizChallenge::hint);
        self.message = format!("Hint: {hint}");
        &self.message
    }
}

fn unit_to_target(unit: f64) -> i32 {
    // Clamped to [-6, 6] before the cast.
    (unit.clamp(0.0, 1.0) * 12.0 - 6.0).round() as i32
}

fn rounded(value: f64) -> String {
    display_number(round_for_display(value))
}

fn root_list(stats: &DerivedStats) -> String {
    match &stats.roots {
        Some(roots) => roots
            .iter()
            .map(|root| rounded(*root))
            .collect::<Vec<_>>()
            .join(", "),
        None => "none".to_owned(),
    }
}
