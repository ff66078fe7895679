/// Actions carried by a modal and dispatched when it is confirmed.
use edulab_core::quiz::QuestionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Score the entered or picked value as an answer to this question
    SubmitAnswer(QuestionId),
}
