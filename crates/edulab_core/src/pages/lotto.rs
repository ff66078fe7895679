use rand::SeedableRng;
use rand::rngs::StdRng;

use super::Page;
use crate::lotto::{SetComparison, WinningReference, compare_sets, generate_draws};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LottoInputs {
    pub sets: usize,
    /// Generate a fresh batch on this render
    pub generate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LottoReport {
    pub reference: WinningReference,
    pub rows: Vec<SetComparison>,
}

impl LottoReport {
    pub fn best_match(&self) -> usize {
        self.rows.iter().map(|row| row.matches).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LottoSession {
    pub report: Option<LottoReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LottoOutput {
    pub sets: usize,
    pub reference: WinningReference,
    pub report: Option<LottoReport>,
    /// True on the render that produced new draws
    pub celebrate: bool,
}

/// Generates draws and compares them with a fixed winning reference.
#[derive(Debug, Clone)]
pub struct LottoPage {
    reference: WinningReference,
    rng: StdRng,
}

impl LottoPage {
    pub fn new(reference: WinningReference, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { reference, rng }
    }

    pub fn reference(&self) -> WinningReference {
        self.reference
    }
}

impl Page for LottoPage {
    type Inputs = LottoInputs;
    type Session = LottoSession;
    type Output = LottoOutput;

    fn render(
        &mut self,
        inputs: &LottoInputs,
        session: LottoSession,
    ) -> (LottoOutput, LottoSession) {
        let session = if inputs.generate {
            let draws = generate_draws(&mut self.rng, inputs.sets);
            LottoSession {
                report: Some(LottoReport {
                    reference: self.reference,
                    rows: compare_sets(&draws, &self.reference.numbers),
                }),
            }
        } else {
            session
        };

        let output = LottoOutput {
            sets: inputs.sets,
            reference: self.reference,
            report: session.report.clone(),
            celebrate: inputs.generate,
        };
        (output, session)
    }
}
