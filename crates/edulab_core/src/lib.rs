//! Educational math pages as a library
//!
//! This crate holds the computations behind the edulab pages:
//! - Lotto 6/45 draw generation, comparison with a winning reference and
//!   Monte Carlo draw statistics
//! - Quadratic functions `y = a(x-p)^2 + q` sampled over fixed grids, with
//!   vertex, axis, convexity and width derivations
//! - Quiz scoring with normalized free-text answers
//! - Typed control records (ranges, steps, defaults)
//! - A pure `render(inputs, session) -> (output, session)` model per page
//!
//! ```ignore
//! use edulab_core::pages::{LottoInputs, LottoPage, LottoSession, Page};
//! use edulab_core::lotto::WinningReference;
//!
//! let mut page = LottoPage::new(WinningReference::LATEST, Some(42));
//! let inputs = LottoInputs { sets: 5, generate: true };
//! let (output, session) = page.render(&inputs, LottoSession::default());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod controls;
pub mod error;
pub mod lotto;
pub mod quadratic;
pub mod quiz;
pub mod reward;

// ============================================================================
// Page render model
// ============================================================================

pub mod pages;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use lotto::{Draw, WinningReference};
pub use pages::Page;
pub use quadratic::{LeadingCoefficient, Quadratic};
pub use quiz::{Answer, QuestionId, QuizSession, Verdict};
