//! Tests for the page render model

use crate::lotto::{DRAW_SIZE, Draw, WinningReference, match_count};
use crate::pages::{
    BasicFormInputs, BasicFormPage, LottoInputs, LottoPage, LottoSession, Page, STANDARD_VIEW,
    StandardFormInputs, StandardFormPage, Submission,
};
use crate::quadratic::{Convexity, Width};
use crate::quiz::{Answer, QuestionId, QuizSession, Verdict};
use crate::reward::{Reward, RewardAsset};

fn generate(page: &mut LottoPage, sets: usize) -> Vec<(Draw, usize)> {
    let inputs = LottoInputs {
        sets,
        generate: true,
    };
    let (output, _) = page.render(&inputs, LottoSession::default());
    output
        .report
        .expect("generating always produces a report")
        .rows
        .into_iter()
        .map(|row| (row.draw, row.matches))
        .collect()
}

#[test]
fn test_lotto_seeded_runs_match() {
    let reference = WinningReference::LATEST;
    assert_eq!(reference.numbers.numbers(), &[3, 15, 27, 33, 34, 36]);

    let first = generate(&mut LottoPage::new(reference, Some(42)), 5);
    let second = generate(&mut LottoPage::new(reference, Some(42)), 5);

    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
    for (draw, matches) in &first {
        assert_eq!(*matches, match_count(draw, &reference.numbers));
        assert!(*matches <= DRAW_SIZE);
    }
}

#[test]
fn test_lotto_session_keeps_last_report() {
    let mut page = LottoPage::new(WinningReference::LATEST, Some(1));
    let (initial, session) = page.render(
        &LottoInputs {
            sets: 3,
            generate: false,
        },
        LottoSession::default(),
    );
    assert!(initial.report.is_none());
    assert!(!initial.celebrate);

    let (generated, session) = page.render(
        &LottoInputs {
            sets: 3,
            generate: true,
        },
        session,
    );
    assert!(generated.celebrate);
    assert_eq!(generated.report.as_ref().map(|r| r.rows.len()), Some(3));

    // Changing the slider alone does not redraw
    let (rerendered, _) = page.render(
        &LottoInputs {
            sets: 7,
            generate: false,
        },
        session,
    );
    assert_eq!(rerendered.report, generated.report);
    assert_eq!(rerendered.sets, 7);
    assert!(!rerendered.celebrate);
}

#[test]
fn test_basic_form_default_view() {
    let mut page = BasicFormPage::default();
    let (output, _) = page.render(
        &BasicFormInputs {
            a: 1.0,
            submission: None,
        },
        QuizSession::default(),
    );

    assert!(output.warning.is_none());
    assert_eq!(output.formula, "y = x^2");
    assert_eq!(output.curve, output.baseline);
    assert_eq!(output.curve.len(), 400);
    assert_eq!(output.x_bounds, [-2.0, 2.0]);
    assert_eq!(output.y_bounds, [-10.0, 10.0]);
    assert_eq!(output.convexity, Convexity::OpensUpward);
    assert_eq!(output.width, Width::Baseline);
    assert_eq!(output.quiz.questions.len(), 2);
    assert!(output.quiz.reward.is_none());
}

#[test]
fn test_basic_form_zero_substitution_warns() {
    let mut page = BasicFormPage::default();
    let (output, _) = page.render(
        &BasicFormInputs {
            a: 0.0,
            submission: None,
        },
        QuizSession::default(),
    );

    assert!(output.a.substituted);
    assert_eq!(output.a.value, 0.0001);
    assert!(output.warning.as_deref().is_some_and(|w| w.contains("0.0001")));
    assert_eq!(output.convexity, Convexity::OpensUpward);
    assert_eq!(output.width, Width::Wider);
}

#[test]
fn test_basic_form_quiz_completion_triggers_reward() {
    let mut page = BasicFormPage::new(RewardAsset::new(None));
    let submit = |question, answer| BasicFormInputs {
        a: -0.5,
        submission: Some(Submission { question, answer }),
    };

    let (first, session) = page.render(
        &submit(QuestionId::BasicConvexity, Answer::Choice(1)),
        QuizSession::default(),
    );
    let feedback = first.quiz.feedback.expect("submission yields feedback");
    assert_eq!(feedback.verdict, Verdict::Correct);
    assert!(first.quiz.reward.is_none());
    assert!(!first.quiz.just_completed);

    let (second, session) = page.render(
        &submit(QuestionId::BasicWidth, Answer::Text("Y = 3 x^2".into())),
        session,
    );
    assert!(second.quiz.just_completed);
    assert!(matches!(second.quiz.reward, Some(Reward::Missing(_))));

    // Re-rendering keeps the reward without re-triggering the celebration
    let (third, _) = page.render(
        &BasicFormInputs {
            a: 2.0,
            submission: None,
        },
        session,
    );
    assert!(third.quiz.all_correct());
    assert!(!third.quiz.just_completed);
    assert!(third.quiz.feedback.is_none());
}

#[test]
fn test_submission_for_other_page_is_ignored() {
    let mut page = BasicFormPage::default();
    let (output, session) = page.render(
        &BasicFormInputs {
            a: 1.0,
            submission: Some(Submission {
                question: QuestionId::StandardVertex,
                answer: Answer::Choice(1),
            }),
        },
        QuizSession::default(),
    );
    assert!(output.quiz.feedback.is_none());
    assert_eq!(session.answered(), 0);
}

#[test]
fn test_reward_image_found() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_path_buf();
    let asset = RewardAsset::new(Some(path.clone()));
    assert_eq!(asset.check(), Reward::Image(path));

    drop(file);
    assert!(matches!(asset.check(), Reward::Missing(_)));
}

#[test]
fn test_standard_form_panels() {
    let mut page = StandardFormPage::default();
    let (output, _) = page.render(
        &StandardFormInputs {
            a: 1.0,
            shift_p: 2.0,
            shift_q: -1.5,
            full_p: 1.0,
            full_q: 1.0,
            submission: None,
        },
        QuizSession::default(),
    );

    assert!(output.warning.is_none());
    assert_eq!(output.shift_x.quadratic.vertex(), (2.0, 0.0));
    assert_eq!(output.shift_y.quadratic.vertex(), (0.0, -1.5));
    assert_eq!(output.full.quadratic.vertex(), (1.0, 1.0));
    assert_eq!(output.full.formula, "y = (x - 1)^2 + 1");
    assert!(output.shift_x.baseline.is_some());
    assert!(output.shift_y.baseline.is_some());
    assert!(output.full.baseline.is_none());
    assert!(output.full.notes.iter().any(|n| n == "Axis of symmetry: x = 1"));
    assert_eq!(STANDARD_VIEW, [-5.0, 5.0]);
    for panel in output.panels() {
        assert_eq!(panel.curve.len(), 400);
    }
}

#[test]
fn test_standard_form_zero_substitution() {
    let mut page = StandardFormPage::default();
    let (output, _) = page.render(
        &StandardFormInputs {
            a: 0.0,
            shift_p: 0.0,
            shift_q: 0.0,
            full_p: 0.0,
            full_q: 0.0,
            submission: None,
        },
        QuizSession::default(),
    );
    assert!(output.a.substituted);
    assert_eq!(output.a.value, 0.1);
    assert_eq!(output.full.formula, "y = 0.1x^2");
    assert!(output.warning.is_some());
}

#[test]
fn test_standard_form_vertex_quiz() {
    let mut page = StandardFormPage::default();
    let inputs = |answer| StandardFormInputs {
        a: 1.0,
        shift_p: 0.0,
        shift_q: 0.0,
        full_p: 1.0,
        full_q: 1.0,
        submission: Some(Submission {
            question: QuestionId::StandardVertex,
            answer,
        }),
    };

    let (wrong, session) = page.render(&inputs(Answer::Choice(0)), QuizSession::default());
    assert_eq!(
        wrong.quiz.feedback.as_ref().map(|f| f.verdict),
        Some(Verdict::Incorrect)
    );
    assert!(!wrong.quiz.all_correct());

    let (right, _) = page.render(&inputs(Answer::Choice(1)), session);
    assert!(right.quiz.all_correct());
    assert!(right.quiz.just_completed);
}
