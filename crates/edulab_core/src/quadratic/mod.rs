//! Quadratic functions in standard form `y = a(x - p)^2 + q`.
//!
//! The basic form `y = ax^2` is the special case `p = q = 0`. Everything here
//! is closed-form evaluation; the only policy decision is what happens when a
//! caller supplies `a = 0` (see [`LeadingCoefficient::sanitize`]).

mod formula;
mod grid;

pub use formula::format_number;
pub use grid::{BASIC_GRID, STANDARD_GRID, SampleGrid};

/// Substitute used by the basic-form page when `a` is 0
pub const BASIC_ZERO_SUBSTITUTE: f64 = 0.0001;
/// Substitute used by the standard-form page when `a` is 0
pub const STANDARD_ZERO_SUBSTITUTE: f64 = 0.1;

/// Leading coefficient after applying the zero substitution.
///
/// With `a = 0` the curve degenerates to the line `y = q`. The pages keep
/// plotting by swapping in a small nonzero value. This is a display
/// approximation only: `substituted` lets callers warn about it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadingCoefficient {
    pub value: f64,
    pub substituted: bool,
}

impl LeadingCoefficient {
    pub fn sanitize(raw: f64, substitute: f64) -> Self {
        debug_assert!(substitute != 0.0);
        if raw == 0.0 {
            Self {
                value: substitute,
                substituted: true,
            }
        } else {
            Self {
                value: raw,
                substituted: false,
            }
        }
    }
}

/// Direction the parabola opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convexity {
    /// `a > 0`: convex downward, minimum at the vertex
    OpensUpward,
    /// `a < 0`: convex upward, maximum at the vertex
    OpensDownward,
}

impl Convexity {
    pub fn of(a: f64) -> Self {
        if a > 0.0 {
            Convexity::OpensUpward
        } else {
            Convexity::OpensDownward
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Convexity::OpensUpward => "opens upward (convex down)",
            Convexity::OpensDownward => "opens downward (convex up)",
        }
    }
}

/// Width compared with the baseline `y = x^2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// `|a| > 1`: hugs the y axis
    Narrower,
    /// `|a| = 1`
    Baseline,
    /// `|a| < 1`: spreads toward the x axis
    Wider,
}

impl Width {
    pub fn of(a: f64) -> Self {
        let magnitude = a.abs();
        if magnitude > 1.0 {
            Width::Narrower
        } else if magnitude < 1.0 {
            Width::Wider
        } else {
            Width::Baseline
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Width::Narrower => "narrower than y = x^2",
            Width::Baseline => "same width as y = x^2",
            Width::Wider => "wider than y = x^2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub a: f64,
    pub p: f64,
    pub q: f64,
}

impl Quadratic {
    pub fn standard(a: LeadingCoefficient, p: f64, q: f64) -> Self {
        Self { a: a.value, p, q }
    }

    /// `y = ax^2`
    pub fn basic(a: LeadingCoefficient) -> Self {
        Self::standard(a, 0.0, 0.0)
    }

    pub fn eval(&self, x: f64) -> f64 {
        let dx = x - self.p;
        self.a * dx * dx + self.q
    }

    /// `(x, y)` pairs over the grid, in grid order
    pub fn sample(&self, grid: &SampleGrid) -> Vec<(f64, f64)> {
        grid.points().map(|x| (x, self.eval(x))).collect()
    }

    pub fn vertex(&self) -> (f64, f64) {
        (self.p, self.q)
    }

    /// The axis of symmetry is the vertical line `x = p`
    pub fn axis(&self) -> f64 {
        self.p
    }

    pub fn convexity(&self) -> Convexity {
        Convexity::of(self.a)
    }

    pub fn width(&self) -> Width {
        Width::of(self.a)
    }

    pub fn formula(&self) -> String {
        formula::format_standard(self.a, self.p, self.q)
    }
}

/// Symmetric y bound for the basic-form plot: `max(10, min(100, 4|a|))`
pub fn basic_y_limit(a: f64) -> f64 {
    (a.abs() * 4.0).clamp(10.0, 100.0)
}
