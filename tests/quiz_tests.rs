use parabola_rs::api::{QuizChallenge, QuizState};
use parabola_rs::core::{Coefficients, DerivedStats};

fn stats(a: f64, b: f64, c: f64) -> DerivedStats {
    DerivedStats::from_coefficients(Coefficients::new(a, b, c))
}

#[test]
fn starting_a_quiz_announces_goal() {
    let mut quiz = QuizState::default();
    quiz.start_vertex(2, -3);
    assert_eq!(quiz.message(), "Goal: Set vertex to (2, -3)");
    assert_eq!(quiz.challenge(), Some(QuizChallenge::Vertex { h: 2, k: -3 }));

    quiz.start_root_at(-4);
    assert_eq!(quiz.message(), "Goal: Make a root at x = -4");
}

#[test]
fn vertex_within_half_unit_passes() {
    let mut quiz = QuizState::default();
    quiz.start_vertex(2, -3);
    // y = x² - 4x + 1 has its vertex at (2, -3).
    assert_eq!(quiz.check(&stats(1.0, -4.0, 1.0)), Some(true));
    assert_eq!(quiz.message(), "Correct! Vertex is very close.");
}

#[test]
fn missed_vertex_reports_current_position() {
    let mut quiz = QuizState::default();
    quiz.start_vertex(0, 0);
    assert_eq!(quiz.check(&stats(1.0, -4.0, 1.0)), Some(false));
    assert_eq!(quiz.message(), "Not quite. Current vertex is (2, -3).");
}

#[test]
fn vertex_tolerance_is_strict() {
    let mut quiz = QuizState::default();
    quiz.start_vertex(0, 0);
    // Vertex at (0, 0.5) sits exactly on the tolerance and fails.
    assert_eq!(quiz.check(&stats(1.0, 0.0, 0.5)), Some(false));
    assert_eq!(quiz.check(&stats(1.0, 0.0, 0.4)), Some(true));
}

#[test]
fn any_root_near_target_passes() {
    let mut quiz = QuizState::default();
    quiz.start_root_at(2);
    assert_eq!(quiz.check(&stats(1.0, 0.0, -4.0)), Some(true));
    assert_eq!(quiz.message(), "Great! You created a root at the target.");
}

#[test]
fn missed_root_lists_current_roots() {
    let mut quiz = QuizState::default();
    quiz.start_root_at(5);
    assert_eq!(quiz.check(&stats(1.0, 0.0, -4.0)), Some(false));
    assert_eq!(quiz.message(), "No root near x=5. Current roots: -2, 2");

    assert_eq!(quiz.check(&stats(1.0, 0.0, 4.0)), Some(false));
    assert_eq!(quiz.message(), "No root near x=5. Current roots: none");
}

#[test]
fn check_without_quiz_keeps_message() {
    let mut quiz = QuizState::default();
    assert_eq!(quiz.check(&stats(1.0, 0.0, 0.0)), None);
    assert_eq!(quiz.message(), "Start a quiz to get feedback.");
}

#[test]
fn hints_depend_on_challenge() {
    let mut quiz = QuizState::default();
    assert_eq!(quiz.hint(), "Hint: Start a quiz first!");

    quiz.start_vertex(1, 1);
    assert!(quiz.hint().contains("h = -b/(2a)"));

    quiz.start_root_at(3);
    assert_eq!(
        quiz.hint(),
        "Hint: To make 3 a root, the equation a*r² + b*r + c must equal 0. Try adjusting 'c'."
    );
}

#[test]
fn unit_sample_targets_stay_in_range() {
    for step in 0..=100 {
        let unit = f64::from(step) / 100.0;
        match QuizChallenge::root_from_unit_sample(unit) {
            QuizChallenge::RootAt { r } => assert!((-6..=6).contains(&r)),
            QuizChallenge::Vertex { .. } => panic!("root sampler must yield a root challenge"),
        }
    }
}
