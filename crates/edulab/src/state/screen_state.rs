//! Per-screen state: control values, page sessions and the last rendered output.
use edulab_core::controls::{
    BASIC_A, Counter, FULL_P, FULL_Q, LOTTO_SETS, SHIFT_P, SHIFT_Q, STANDARD_A, Slider,
};
use edulab_core::lotto::{DrawStatistics, WinningReference, stats};
use edulab_core::pages::{
    BasicFormInputs, BasicFormOutput, BasicFormPage, LottoInputs, LottoOutput, LottoPage,
    LottoSession, Page, StandardFormInputs, StandardFormOutput, StandardFormPage, Submission,
};
use edulab_core::quiz::{BASIC_QUIZ, Question, QuizSession, STANDARD_QUIZ};
use edulab_core::reward::RewardAsset;

use crate::config::AppConfig;

// ========== Lotto ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LottoView {
    #[default]
    Draws,
    Statistics,
}

#[derive(Debug)]
pub struct LottoState {
    page: LottoPage,
    session: LottoSession,
    pub sets: Counter,
    pub output: LottoOutput,
    pub view: LottoView,
    pub statistics: Option<DrawStatistics>,
    pub trials: usize,
    seed: Option<u64>,
}

impl LottoState {
    pub fn new(config: &AppConfig) -> Self {
        let mut page = LottoPage::new(config.reference, config.seed);
        let sets = Counter::with_value(LOTTO_SETS, config.lotto_sets);
        let inputs = LottoInputs {
            sets: sets.value(),
            generate: false,
        };
        let (output, session) = page.render(&inputs, LottoSession::default());

        Self {
            page,
            session,
            sets,
            output,
            view: LottoView::default(),
            statistics: None,
            trials: config.statistics_trials,
            seed: config.seed,
        }
    }

    pub fn reference(&self) -> WinningReference {
        self.page.reference()
    }

    /// Re-render the page, drawing a fresh batch when `generate` is set
    pub fn refresh(&mut self, generate: bool) {
        let inputs = LottoInputs {
            sets: self.sets.value(),
            generate,
        };
        let session = std::mem::take(&mut self.session);
        let (output, session) = self.page.render(&inputs, session);

        if let Some(report) = output.report.as_ref().filter(|_| generate) {
            tracing::info!(
                sets = report.rows.len(),
                best_match = report.best_match(),
                "Generated lotto sets"
            );
            for row in &report.rows {
                tracing::debug!(
                    set = row.set,
                    numbers = %row.draw.spaced(),
                    matches = row.matches,
                    "Lotto set"
                );
            }
        }

        self.output = output;
        self.session = session;
    }

    pub fn run_statistics(&mut self) {
        let seed = self.seed.unwrap_or_else(rand::random);
        let result = stats::simulate(self.reference(), self.trials, seed);
        tracing::info!(trials = result.trials, seed, "Draw statistics complete");
        self.statistics = Some(result);
        self.view = LottoView::Statistics;
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            LottoView::Draws => LottoView::Statistics,
            LottoView::Statistics => LottoView::Draws,
        };
    }

    /// Back to the default set count with no draws shown
    pub fn reset(&mut self) {
        self.sets.reset();
        self.session = LottoSession::default();
        self.statistics = None;
        self.view = LottoView::Draws;
        self.refresh(false);
    }
}

// ========== y = ax^2 ==========

#[derive(Debug)]
pub struct BasicFormState {
    page: BasicFormPage,
    session: QuizSession,
    pub a: Slider,
    pub output: BasicFormOutput,
    pub selected_question: usize,
}

impl BasicFormState {
    pub fn new(reward: RewardAsset) -> Self {
        let mut page = BasicFormPage::new(reward);
        let a = Slider::new(BASIC_A);
        let inputs = BasicFormInputs {
            a: a.value(),
            submission: None,
        };
        let (output, session) = page.render(&inputs, QuizSession::default());

        Self {
            page,
            session,
            a,
            output,
            selected_question: 0,
        }
    }

    pub fn refresh(&mut self, submission: Option<Submission>) {
        let inputs = BasicFormInputs {
            a: self.a.value(),
            submission,
        };
        let session = std::mem::take(&mut self.session);
        let (output, session) = self.page.render(&inputs, session);
        self.output = output;
        self.session = session;
    }

    pub fn selected(&self) -> Option<&'static Question> {
        BASIC_QUIZ.get(self.selected_question)
    }

    pub fn reset_quiz(&mut self) {
        self.session.reset();
        self.refresh(None);
    }
}

// ========== y = a(x-p)^2 + q ==========

/// The five standard-form controls, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StandardControl {
    #[default]
    A,
    ShiftP,
    ShiftQ,
    FullP,
    FullQ,
}

impl StandardControl {
    pub const ALL: [StandardControl; 5] = [
        StandardControl::A,
        StandardControl::ShiftP,
        StandardControl::ShiftQ,
        StandardControl::FullP,
        StandardControl::FullQ,
    ];

    pub fn index(&self) -> usize {
        match self {
            StandardControl::A => 0,
            StandardControl::ShiftP => 1,
            StandardControl::ShiftQ => 2,
            StandardControl::FullP => 3,
            StandardControl::FullQ => 4,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug)]
pub struct StandardFormState {
    page: StandardFormPage,
    session: QuizSession,
    pub sliders: [Slider; 5],
    pub focused: StandardControl,
    pub output: StandardFormOutput,
    pub selected_question: usize,
}

impl StandardFormState {
    pub fn new(reward: RewardAsset) -> Self {
        let sliders = [
            Slider::new(STANDARD_A),
            Slider::new(SHIFT_P),
            Slider::new(SHIFT_Q),
            Slider::new(FULL_P),
            Slider::new(FULL_Q),
        ];
        let mut page = StandardFormPage::new(reward);
        let (output, session) = page.render(&Self::inputs(&sliders, None), QuizSession::default());

        Self {
            page,
            session,
            sliders,
            focused: StandardControl::default(),
            output,
            selected_question: 0,
        }
    }

    fn inputs(sliders: &[Slider; 5], submission: Option<Submission>) -> StandardFormInputs {
        StandardFormInputs {
            a: sliders[StandardControl::A.index()].value(),
            shift_p: sliders[StandardControl::ShiftP.index()].value(),
            shift_q: sliders[StandardControl::ShiftQ.index()].value(),
            full_p: sliders[StandardControl::FullP.index()].value(),
            full_q: sliders[StandardControl::FullQ.index()].value(),
            submission,
        }
    }

    pub fn slider(&self, control: StandardControl) -> &Slider {
        &self.sliders[control.index()]
    }

    pub fn focused_slider_mut(&mut self) -> &mut Slider {
        &mut self.sliders[self.focused.index()]
    }

    pub fn refresh(&mut self, submission: Option<Submission>) {
        let inputs = Self::inputs(&self.sliders, submission);
        let session = std::mem::take(&mut self.session);
        let (output, session) = self.page.render(&inputs, session);
        self.output = output;
        self.session = session;
    }

    pub fn selected(&self) -> Option<&'static Question> {
        STANDARD_QUIZ.get(self.selected_question)
    }

    pub fn reset_controls(&mut self) {
        for slider in &mut self.sliders {
            slider.reset();
        }
        self.refresh(None);
    }

    pub fn reset_quiz(&mut self) {
        self.session.reset();
        self.refresh(None);
    }
}
