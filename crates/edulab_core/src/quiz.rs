//! Quiz questions, answer scoring and per-session verdicts.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuestionId {
    BasicConvexity,
    BasicWidth,
    StandardVertex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKey {
    /// One of `options` is right
    Choice {
        options: &'static [&'static str],
        correct: usize,
    },
    /// Any of `accepted` matches after normalization
    FreeText {
        accepted: &'static [&'static str],
        placeholder: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Choice(usize),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn from_bool(correct: bool) -> Self {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub title: &'static str,
    pub prompt: &'static str,
    pub key: AnswerKey,
    pub on_correct: &'static str,
    pub on_incorrect: &'static str,
}

/// Strip every whitespace character and lowercase: `"Y = 3 x^2"` -> `"y=3x^2"`
pub fn normalize(answer: &str) -> String {
    answer
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Question {
    pub fn score(&self, answer: &Answer) -> Verdict {
        let correct = match (&self.key, answer) {
            (AnswerKey::Choice { correct, .. }, Answer::Choice(idx)) => idx == correct,
            (AnswerKey::Choice { options, correct }, Answer::Text(text)) => options
                .get(*correct)
                .is_some_and(|option| normalize(option) == normalize(text)),
            (AnswerKey::FreeText { accepted, .. }, Answer::Text(text)) => {
                let text = normalize(text);
                accepted.iter().any(|form| normalize(form) == text)
            }
            (AnswerKey::FreeText { .. }, Answer::Choice(_)) => false,
        };
        Verdict::from_bool(correct)
    }

    pub fn feedback(&self, verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Correct => self.on_correct,
            Verdict::Incorrect => self.on_incorrect,
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self.key {
            AnswerKey::Choice { options, .. } => options,
            AnswerKey::FreeText { .. } => &[],
        }
    }
}

pub const BASIC_CONVEXITY: Question = Question {
    id: QuestionId::BasicConvexity,
    title: "Q1. Direction",
    prompt: "Which way does the graph of y = -0.5x^2 open?",
    key: AnswerKey::Choice {
        options: &[
            "Opens upward (convex down)",
            "Opens downward (convex up)",
            "Opens sideways",
        ],
        correct: 1,
    },
    on_correct: "Correct! a = -0.5 is negative, so the graph opens downward.",
    on_incorrect: "Not quite. When a is negative the graph opens downward. Check the sign of a.",
};

pub const BASIC_WIDTH: Question = Question {
    id: QuestionId::BasicWidth,
    title: "Q2. Width",
    prompt: "Of y = 3x^2 and y = 0.5x^2, which graph is narrower? Answer with the equation.",
    key: AnswerKey::FreeText {
        accepted: &["y=3x^2", "3x^2"],
        placeholder: "e.g. y=ax^2",
    },
    on_correct: "Correct! |3| > |0.5|, and the larger |a| gives the narrower graph: y = 3x^2.",
    on_incorrect: "Not quite. The width depends on |a|: the larger |a|, the narrower the graph. Enter y=3x^2.",
};

pub const STANDARD_VERTEX: Question = Question {
    id: QuestionId::StandardVertex,
    title: "Vertex",
    prompt: "What is the vertex of the graph of y = -2(x+3)^2 - 4?",
    key: AnswerKey::Choice {
        options: &["(3, -4)", "(-3, -4)", "(3, 4)", "(-3, 4)"],
        correct: 1,
    },
    on_correct: "Correct! In y = a(x-p)^2 + q we have p = -3 and q = -4, so the vertex is (-3, -4).",
    on_incorrect: "Not quite. In the form y = a(x-p)^2 + q, read x+3 as x-(-3).",
};

pub const BASIC_QUIZ: &[Question] = &[BASIC_CONVEXITY, BASIC_WIDTH];
pub const STANDARD_QUIZ: &[Question] = &[STANDARD_VERTEX];

/// Verdicts recorded during one page session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    verdicts: FxHashMap<QuestionId, Verdict>,
}

impl QuizSession {
    /// Score `answer` and store the verdict, replacing any earlier one.
    pub fn submit(&mut self, question: &Question, answer: &Answer) -> Verdict {
        let verdict = question.score(answer);
        self.verdicts.insert(question.id, verdict);
        verdict
    }

    pub fn verdict(&self, id: QuestionId) -> Option<Verdict> {
        self.verdicts.get(&id).copied()
    }

    pub fn answered(&self) -> usize {
        self.verdicts.len()
    }

    /// True once every question in `quiz` has a correct verdict
    pub fn all_correct(&self, quiz: &[Question]) -> bool {
        !quiz.is_empty()
            && quiz
                .iter()
                .all(|q| self.verdict(q.id).is_some_and(|v| v.is_correct()))
    }

    pub fn reset(&mut self) {
        self.verdicts.clear();
    }
}
