use super::{Page, QuizStatus, Submission, run_quiz};
use crate::quadratic::{
    LeadingCoefficient, Quadratic, STANDARD_GRID, STANDARD_ZERO_SUBSTITUTE, format_number,
};
use crate::quiz::{QuizSession, STANDARD_QUIZ};
use crate::reward::RewardAsset;

/// Both axes of every standard-form plot use this window
pub const STANDARD_VIEW: [f64; 2] = [-5.0, 5.0];

#[derive(Debug, Clone, PartialEq)]
pub struct StandardFormInputs {
    /// Raw slider value, may be 0
    pub a: f64,
    /// p for the x-shift section (q fixed at 0)
    pub shift_p: f64,
    /// q for the y-shift section (p fixed at 0)
    pub shift_q: f64,
    pub full_p: f64,
    pub full_q: f64,
    pub submission: Option<Submission>,
}

/// One plotted section
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: &'static str,
    pub quadratic: Quadratic,
    pub formula: String,
    pub curve: Vec<(f64, f64)>,
    /// `y = ax^2` before shifting
    pub baseline: Option<Vec<(f64, f64)>>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardFormOutput {
    pub a: LeadingCoefficient,
    pub warning: Option<String>,
    pub shift_x: Panel,
    pub shift_y: Panel,
    pub full: Panel,
    pub quiz: QuizStatus,
}

impl StandardFormOutput {
    pub fn panels(&self) -> [&Panel; 3] {
        [&self.shift_x, &self.shift_y, &self.full]
    }
}

/// `y = a(x-p)^2 + q`: translating the basic parabola.
#[derive(Debug, Clone, Default)]
pub struct StandardFormPage {
    reward: RewardAsset,
}

impl StandardFormPage {
    pub fn new(reward: RewardAsset) -> Self {
        Self { reward }
    }
}

fn panel(title: &'static str, quadratic: Quadratic, baseline: bool, notes: Vec<String>) -> Panel {
    let base = Quadratic {
        p: 0.0,
        q: 0.0,
        ..quadratic
    };
    Panel {
        title,
        quadratic,
        formula: quadratic.formula(),
        curve: quadratic.sample(&STANDARD_GRID),
        baseline: baseline.then(|| base.sample(&STANDARD_GRID)),
        notes,
    }
}

impl Page for StandardFormPage {
    type Inputs = StandardFormInputs;
    type Session = QuizSession;
    type Output = StandardFormOutput;

    fn render(
        &mut self,
        inputs: &StandardFormInputs,
        session: QuizSession,
    ) -> (StandardFormOutput, QuizSession) {
        let a = LeadingCoefficient::sanitize(inputs.a, STANDARD_ZERO_SUBSTITUTE);
        let warning = a.substituted.then(|| {
            format!(
                "a cannot be 0. Using a = {} instead.",
                format_number(a.value)
            )
        });
        let a_text = format_number(a.value);

        let shift_x = {
            let quad = Quadratic::standard(a, inputs.shift_p, 0.0);
            let p = format_number(quad.p);
            panel(
                "1. Shift along x: y = a(x-p)^2",
                quad,
                true,
                vec![
                    format!("Shift the graph of y = {a_text}x^2 by p = {p} along the x axis."),
                    format!("The vertex moves from (0, 0) to ({p}, 0)."),
                ],
            )
        };

        let shift_y = {
            let quad = Quadratic::standard(a, 0.0, inputs.shift_q);
            let q = format_number(quad.q);
            panel(
                "2. Shift along y: y = ax^2 + q",
                quad,
                true,
                vec![
                    format!("Shift the graph of y = {a_text}x^2 by q = {q} along the y axis."),
                    format!("The vertex moves from (0, 0) to (0, {q})."),
                ],
            )
        };

        let full = {
            let quad = Quadratic::standard(a, inputs.full_p, inputs.full_q);
            let (p, q) = (format_number(quad.p), format_number(quad.q));
            panel(
                "3. Standard form: y = a(x-p)^2 + q",
                quad,
                false,
                vec![
                    format!(
                        "The graph is y = {a_text}x^2 shifted by p = {p} along x and q = {q} along y."
                    ),
                    format!("Vertex: ({p}, {q})"),
                    format!("Axis of symmetry: x = {}", format_number(quad.axis())),
                ],
            )
        };

        let (quiz, session) =
            run_quiz(STANDARD_QUIZ, inputs.submission.as_ref(), session, &self.reward);

        let output = StandardFormOutput {
            a,
            warning,
            shift_x,
            shift_y,
            full,
            quiz,
        };
        (output, session)
    }
}
