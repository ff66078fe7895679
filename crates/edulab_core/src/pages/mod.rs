//! Page render model.
//!
//! Every page is a pure `render(inputs, session) -> (output, session)`
//! function. The caller owns the session between interactions and feeds it
//! back on the next render; nothing is kept in globals.

mod basic_form;
mod lotto;
mod standard_form;

pub use basic_form::{BasicFormInputs, BasicFormOutput, BasicFormPage};
pub use lotto::{LottoInputs, LottoOutput, LottoPage, LottoReport, LottoSession};
pub use standard_form::{
    Panel, STANDARD_VIEW, StandardFormInputs, StandardFormOutput, StandardFormPage,
};

use crate::quiz::{Answer, Question, QuestionId, QuizSession, Verdict};
use crate::reward::{Reward, RewardAsset};

pub trait Page {
    type Inputs;
    type Session: Default;
    type Output;

    fn render(
        &mut self,
        inputs: &Self::Inputs,
        session: Self::Session,
    ) -> (Self::Output, Self::Session);
}

/// An answer submitted during this interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub question: QuestionId,
    pub answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionStatus {
    pub question: Question,
    pub verdict: Option<Verdict>,
}

/// Result of the submission handled in this render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub question: QuestionId,
    pub verdict: Verdict,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizStatus {
    pub questions: Vec<QuestionStatus>,
    pub feedback: Option<Feedback>,
    /// Present once every question is correct
    pub reward: Option<Reward>,
    /// True only on the render that completed the quiz
    pub just_completed: bool,
}

impl QuizStatus {
    pub fn all_correct(&self) -> bool {
        self.reward.is_some()
    }
}

pub(crate) fn run_quiz(
    quiz: &[Question],
    submission: Option<&Submission>,
    mut session: QuizSession,
    reward: &RewardAsset,
) -> (QuizStatus, QuizSession) {
    let was_complete = session.all_correct(quiz);

    let feedback = submission.and_then(|submission| {
        let question = quiz.iter().find(|q| q.id == submission.question)?;
        let verdict = session.submit(question, &submission.answer);
        Some(Feedback {
            question: question.id,
            verdict,
            message: question.feedback(verdict),
        })
    });

    let complete = session.all_correct(quiz);
    let status = QuizStatus {
        questions: quiz
            .iter()
            .map(|q| QuestionStatus {
                question: *q,
                verdict: session.verdict(q.id),
            })
            .collect(),
        feedback,
        reward: complete.then(|| reward.check()),
        just_completed: complete && !was_complete,
    };
    (status, session)
}
