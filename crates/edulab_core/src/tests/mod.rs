//! Integration tests for the edulab computations
//!
//! Tests are organized by topic:
//! - `lotto` - Draw generation, comparison and draw statistics
//! - `quadratic` - Curve evaluation and derived properties
//! - `quiz` - Answer normalization and session verdicts
//! - `pages` - The render model end to end

mod lotto;
mod pages;
mod quiz;
