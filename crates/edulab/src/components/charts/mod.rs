//! Chart components for data visualization.

mod histogram;
mod quadratic;

pub use histogram::{render_match_histogram, render_number_frequency};
pub use quadratic::{QuadraticChart, render_quadratic_chart};
