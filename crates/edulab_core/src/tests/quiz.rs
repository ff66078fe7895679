//! Tests for quiz scoring

use crate::quiz::{
    Answer, BASIC_CONVEXITY, BASIC_QUIZ, BASIC_WIDTH, QuestionId, QuizSession, STANDARD_VERTEX,
    Verdict, normalize,
};

fn text(s: &str) -> Answer {
    Answer::Text(s.to_string())
}

#[test]
fn test_normalize_strips_whitespace_and_case() {
    assert_eq!(normalize("Y = 3 x^2"), "y=3x^2");
    assert_eq!(normalize("\t3X^2\n"), "3x^2");
    assert_eq!(normalize(""), "");
}

#[test]
fn test_free_text_accepted_forms() {
    for answer in ["y=3x^2", "3x^2", "Y = 3 x^2", "  3x^2 "] {
        assert_eq!(BASIC_WIDTH.score(&text(answer)), Verdict::Correct, "{answer}");
    }
    for answer in ["y=0.5x^2", "3x2", "y=3x", "", "y = 3x^3"] {
        assert_eq!(BASIC_WIDTH.score(&text(answer)), Verdict::Incorrect, "{answer}");
    }
    assert_eq!(BASIC_WIDTH.score(&Answer::Choice(0)), Verdict::Incorrect);
}

#[test]
fn test_choice_by_index_and_by_text() {
    assert_eq!(BASIC_CONVEXITY.score(&Answer::Choice(1)), Verdict::Correct);
    assert_eq!(BASIC_CONVEXITY.score(&Answer::Choice(0)), Verdict::Incorrect);
    assert_eq!(BASIC_CONVEXITY.score(&Answer::Choice(9)), Verdict::Incorrect);

    assert_eq!(STANDARD_VERTEX.score(&text("(-3,-4)")), Verdict::Correct);
    assert_eq!(STANDARD_VERTEX.score(&text("(3, -4)")), Verdict::Incorrect);
}

#[test]
fn test_feedback_matches_verdict() {
    assert!(STANDARD_VERTEX.feedback(Verdict::Correct).starts_with("Correct"));
    assert!(STANDARD_VERTEX.feedback(Verdict::Incorrect).contains("x-(-3)"));
}

#[test]
fn test_session_tracks_latest_verdict() {
    let mut session = QuizSession::default();
    assert_eq!(session.verdict(QuestionId::BasicConvexity), None);
    assert!(!session.all_correct(BASIC_QUIZ));

    session.submit(&BASIC_CONVEXITY, &Answer::Choice(0));
    assert_eq!(
        session.verdict(QuestionId::BasicConvexity),
        Some(Verdict::Incorrect)
    );

    session.submit(&BASIC_CONVEXITY, &Answer::Choice(1));
    session.submit(&BASIC_WIDTH, &text("3x^2"));
    assert_eq!(session.answered(), 2);
    assert!(session.all_correct(BASIC_QUIZ));

    session.submit(&BASIC_WIDTH, &text("0.5x^2"));
    assert!(!session.all_correct(BASIC_QUIZ));

    session.reset();
    assert_eq!(session.answered(), 0);
}

#[test]
fn test_empty_quiz_is_never_complete() {
    assert!(!QuizSession::default().all_correct(&[]));
}
