use super::{Page, QuizStatus, Submission, run_quiz};
use crate::quadratic::{
    BASIC_GRID, BASIC_ZERO_SUBSTITUTE, Convexity, LeadingCoefficient, Quadratic, Width,
    basic_y_limit, format_number,
};
use crate::quiz::{BASIC_QUIZ, QuizSession};
use crate::reward::RewardAsset;

#[derive(Debug, Clone, PartialEq)]
pub struct BasicFormInputs {
    /// Raw slider value, may be 0
    pub a: f64,
    pub submission: Option<Submission>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasicFormOutput {
    pub a: LeadingCoefficient,
    pub warning: Option<String>,
    pub formula: String,
    pub curve: Vec<(f64, f64)>,
    /// `y = x^2` for comparison
    pub baseline: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub convexity: Convexity,
    pub width: Width,
    pub magnitude: f64,
    pub quiz: QuizStatus,
}

/// `y = ax^2`: how the sign and size of `a` shape the graph.
#[derive(Debug, Clone, Default)]
pub struct BasicFormPage {
    reward: RewardAsset,
}

impl BasicFormPage {
    pub fn new(reward: RewardAsset) -> Self {
        Self { reward }
    }
}

impl Page for BasicFormPage {
    type Inputs = BasicFormInputs;
    type Session = QuizSession;
    type Output = BasicFormOutput;

    fn render(
        &mut self,
        inputs: &BasicFormInputs,
        session: QuizSession,
    ) -> (BasicFormOutput, QuizSession) {
        let a = LeadingCoefficient::sanitize(inputs.a, BASIC_ZERO_SUBSTITUTE);
        let warning = a.substituted.then(|| {
            format!(
                "a cannot be 0 (y = 0 is a straight line). Plotting with a = {} instead.",
                format_number(a.value)
            )
        });

        let curve = Quadratic::basic(a);
        let baseline = Quadratic {
            a: 1.0,
            p: 0.0,
            q: 0.0,
        };
        let y_limit = basic_y_limit(a.value);

        let (quiz, session) =
            run_quiz(BASIC_QUIZ, inputs.submission.as_ref(), session, &self.reward);

        let output = BasicFormOutput {
            a,
            warning,
            formula: curve.formula(),
            curve: curve.sample(&BASIC_GRID),
            baseline: baseline.sample(&BASIC_GRID),
            x_bounds: [BASIC_GRID.start, BASIC_GRID.end],
            y_bounds: [-y_limit, y_limit],
            convexity: curve.convexity(),
            width: curve.width(),
            magnitude: a.value.abs(),
            quiz,
        };
        (output, session)
    }
}
