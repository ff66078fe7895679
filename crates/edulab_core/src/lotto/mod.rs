//! Lotto 6/45 draws, comparison against a winning reference, and draw statistics.

mod compare;
mod draw;
pub mod stats;

pub use compare::{SetComparison, compare_sets, match_count};
pub use draw::{DRAW_SIZE, Draw, MAX_NUMBER, MIN_NUMBER, WinningReference, generate_draws};
pub use stats::DrawStatistics;
