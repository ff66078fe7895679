use edulab_core::pages::{QuizStatus, Submission};
use edulab_core::quiz::{
    Answer, AnswerKey, BASIC_QUIZ, Question, QuestionId, STANDARD_QUIZ, Verdict,
};
use edulab_core::reward::Reward;

use super::ActionResult;
use crate::state::{AppState, MessageModal, ModalAction, ModalState, PickerModal, TextInputModal};

/// Modal that asks `question`: a picker for multiple choice, a text box otherwise
pub fn question_modal(question: &Question) -> ModalState {
    let action = ModalAction::SubmitAnswer(question.id);
    match question.key {
        AnswerKey::Choice { options, .. } => ModalState::Picker(PickerModal::new(
            question.title,
            question.prompt,
            options.iter().map(|o| o.to_string()).collect(),
            action,
        )),
        AnswerKey::FreeText { placeholder, .. } => ModalState::TextInput(
            TextInputModal::new(question.title, question.prompt, "", action)
                .with_placeholder(placeholder),
        ),
    }
}

/// Map a confirmed modal value to an answer. Picked option text becomes its index.
pub fn parse_answer(question: &Question, value: &str) -> Answer {
    match question
        .options()
        .iter()
        .position(|option| *option == value)
    {
        Some(index) => Answer::Choice(index),
        None => Answer::Text(value.to_string()),
    }
}

fn find_question(id: QuestionId) -> Option<&'static Question> {
    BASIC_QUIZ
        .iter()
        .chain(STANDARD_QUIZ.iter())
        .find(|q| q.id == id)
}

pub fn handle_submit_answer(state: &mut AppState, id: QuestionId, value: &str) -> ActionResult {
    let Some(question) = find_question(id) else {
        return ActionResult::error(format!("Unknown question: {:?}", id));
    };

    let submission = Submission {
        question: id,
        answer: parse_answer(question, value),
    };

    let quiz = if BASIC_QUIZ.iter().any(|q| q.id == id) {
        state.basic.refresh(Some(submission));
        &state.basic.output.quiz
    } else {
        state.standard.refresh(Some(submission));
        &state.standard.output.quiz
    };

    let Some(feedback) = &quiz.feedback else {
        return ActionResult::error("Answer was not scored");
    };
    tracing::info!(question = ?id, verdict = ?feedback.verdict, "Quiz answer submitted");

    ActionResult::modal(ModalState::Message(feedback_modal(
        question.title,
        feedback.verdict,
        feedback.message,
        quiz,
    )))
}

fn feedback_modal(title: &str, verdict: Verdict, message: &str, quiz: &QuizStatus) -> MessageModal {
    if !quiz.just_completed {
        return match verdict {
            Verdict::Correct => MessageModal::success(title, message),
            Verdict::Incorrect => MessageModal::error(title, message),
        };
    }

    let reward = match &quiz.reward {
        Some(Reward::Image(path)) => format!("Your reward is waiting at {}", path.display()),
        Some(Reward::Missing(warning)) => warning.clone(),
        None => String::new(),
    };
    MessageModal::success(
        "All correct!",
        &format!("{message}\n\nYou answered every question on this page.\n{reward}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use edulab_core::quiz::{BASIC_CONVEXITY, BASIC_WIDTH, STANDARD_VERTEX};
    use std::path::Path;

    fn state() -> AppState {
        AppState::new(&AppConfig::default(), Path::new("/nonexistent"))
    }

    #[test]
    fn test_question_modal_kind() {
        assert!(matches!(
            question_modal(&BASIC_CONVEXITY),
            ModalState::Picker(_)
        ));
        match question_modal(&BASIC_WIDTH) {
            ModalState::TextInput(modal) => assert_eq!(modal.placeholder, "e.g. y=ax^2"),
            other => panic!("expected text input, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(
            parse_answer(&STANDARD_VERTEX, "(-3, -4)"),
            Answer::Choice(1)
        );
        assert_eq!(
            parse_answer(&BASIC_WIDTH, "3x^2"),
            Answer::Text("3x^2".to_string())
        );
    }

    #[test]
    fn test_submission_routes_to_owning_page() {
        let mut state = state();
        let result = handle_submit_answer(&mut state, QuestionId::StandardVertex, "(3, -4)");

        match result {
            ActionResult::Done(Some(ModalState::Message(modal))) => {
                assert_eq!(modal.kind, crate::state::MessageKind::Error)
            }
            _ => panic!("expected feedback message"),
        }
        assert_eq!(
            state.standard.output.quiz.questions[0].verdict,
            Some(Verdict::Incorrect)
        );
        assert!(state.basic.output.quiz.questions.iter().all(|q| q.verdict.is_none()));
    }

    #[test]
    fn test_completing_quiz_shows_reward_notice() {
        let mut state = state();
        handle_submit_answer(
            &mut state,
            QuestionId::BasicConvexity,
            BASIC_CONVEXITY.options()[1],
        );
        let result = handle_submit_answer(&mut state, QuestionId::BasicWidth, "y = 3x^2");

        match result {
            ActionResult::Done(Some(ModalState::Message(modal))) => {
                assert_eq!(modal.title, "All correct!");
                assert!(modal.message.contains("No reward image configured"));
            }
            _ => panic!("expected completion message"),
        }
        assert!(state.basic.output.quiz.all_correct());
    }
}
