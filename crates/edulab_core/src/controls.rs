//! Typed control records for every input widget.
//!
//! Ranges, steps and defaults are enumerated here once so the pages and the
//! terminal front end never carry inline literals.

use crate::error::ControlError;

/// A bounded numeric slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub help: Option<&'static str>,
}

/// A bounded integer count input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSpec {
    pub label: &'static str,
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

pub const LOTTO_SETS: CountSpec = CountSpec {
    label: "Sets to generate",
    min: 1,
    max: 10,
    default: 5,
};

pub const BASIC_A: SliderSpec = SliderSpec {
    label: "a",
    min: -100.0,
    max: 100.0,
    step: 0.1,
    default: 1.0,
    help: Some("a must not be 0. Values between -5.0 and 5.0 show the width change best."),
};

pub const STANDARD_A: SliderSpec = SliderSpec {
    label: "a (shape)",
    min: -2.0,
    max: 2.0,
    step: 0.1,
    default: 1.0,
    help: None,
};

pub const SHIFT_P: SliderSpec = SliderSpec {
    label: "p",
    min: -3.0,
    max: 3.0,
    step: 0.1,
    default: 0.0,
    help: None,
};

pub const SHIFT_Q: SliderSpec = SliderSpec {
    label: "q",
    min: -3.0,
    max: 3.0,
    step: 0.1,
    default: 0.0,
    help: None,
};

pub const FULL_P: SliderSpec = SliderSpec {
    label: "p",
    min: -3.0,
    max: 3.0,
    step: 0.1,
    default: 1.0,
    help: None,
};

pub const FULL_Q: SliderSpec = SliderSpec {
    label: "q",
    min: -3.0,
    max: 3.0,
    step: 0.1,
    default: 1.0,
    help: None,
};

impl SliderSpec {
    /// Number of decimal places implied by the step (0.1 -> 1, 1.0 -> 0)
    pub fn decimals(&self) -> u32 {
        (-self.step.log10()).ceil().max(0.0) as u32
    }

    /// Number of steps between min and max
    pub fn step_count(&self) -> i64 {
        ((self.max - self.min) / self.step).round() as i64
    }

    /// Value at a given step index, rounded to the step's precision
    pub fn value_at(&self, index: i64) -> f64 {
        let index = index.clamp(0, self.step_count());
        self.round(self.min + index as f64 * self.step)
    }

    /// Step index closest to `value`, clamped to the range
    pub fn index_of(&self, value: f64) -> i64 {
        (((value - self.min) / self.step).round() as i64).clamp(0, self.step_count())
    }

    /// Snap an arbitrary value onto the step grid
    pub fn snap(&self, value: f64) -> f64 {
        self.value_at(self.index_of(value))
    }

    pub fn validate(&self, value: f64) -> Result<f64, ControlError> {
        if !value.is_finite() {
            return Err(ControlError::NotFinite {
                control: self.label,
            });
        }
        if value < self.min || value > self.max {
            return Err(ControlError::OutOfRange {
                control: self.label,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(self.snap(value))
    }

    fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals() as i32);
        let rounded = (value * scale).round() / scale;
        // Avoid reporting -0.0
        if rounded == 0.0 { 0.0 } else { rounded }
    }
}

impl CountSpec {
    pub fn clamp(&self, count: usize) -> usize {
        count.clamp(self.min, self.max)
    }

    pub fn validate(&self, count: usize) -> Result<usize, ControlError> {
        if count < self.min || count > self.max {
            return Err(ControlError::OutOfRange {
                control: self.label,
                value: count as f64,
                min: self.min as f64,
                max: self.max as f64,
            });
        }
        Ok(count)
    }
}

/// Slider position, stored as a step index so repeated nudges never drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    spec: SliderSpec,
    index: i64,
}

impl Slider {
    pub fn new(spec: SliderSpec) -> Self {
        Self {
            spec,
            index: spec.index_of(spec.default),
        }
    }

    pub fn spec(&self) -> &SliderSpec {
        &self.spec
    }

    pub fn value(&self) -> f64 {
        self.spec.value_at(self.index)
    }

    pub fn set(&mut self, value: f64) {
        self.index = self.spec.index_of(value);
    }

    pub fn nudge(&mut self, steps: i64) {
        self.index = (self.index + steps).clamp(0, self.spec.step_count());
    }

    pub fn increment(&mut self) {
        self.nudge(1);
    }

    pub fn decrement(&mut self) {
        self.nudge(-1);
    }

    pub fn reset(&mut self) {
        self.index = self.spec.index_of(self.spec.default);
    }

    /// Position within the range as a ratio in [0, 1]
    pub fn ratio(&self) -> f64 {
        let count = self.spec.step_count();
        if count == 0 {
            0.0
        } else {
            self.index as f64 / count as f64
        }
    }
}

/// Count input position with the same nudge semantics as [`Slider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    spec: CountSpec,
    value: usize,
}

impl Counter {
    pub fn new(spec: CountSpec) -> Self {
        Self {
            spec,
            value: spec.default,
        }
    }

    pub fn with_value(spec: CountSpec, value: usize) -> Self {
        Self {
            spec,
            value: spec.clamp(value),
        }
    }

    pub fn spec(&self) -> &CountSpec {
        &self.spec
    }

    pub fn value(&self) -> usize {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.spec.clamp(self.value.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.value = self.spec.clamp(self.value.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.value = self.spec.default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimals_from_step() {
        assert_eq!(BASIC_A.decimals(), 1);
        let whole = SliderSpec {
            step: 1.0,
            ..BASIC_A
        };
        assert_eq!(whole.decimals(), 0);
    }

    #[test]
    fn test_slider_starts_at_default() {
        assert_eq!(Slider::new(BASIC_A).value(), 1.0);
        assert_eq!(Slider::new(SHIFT_P).value(), 0.0);
        assert_eq!(Slider::new(FULL_Q).value(), 1.0);
    }

    #[test]
    fn test_slider_reaches_exact_zero() {
        let mut slider = Slider::new(STANDARD_A);
        for _ in 0..10 {
            slider.decrement();
        }
        assert_eq!(slider.value(), 0.0);
        assert!(slider.value().is_sign_positive());
    }

    #[test]
    fn test_slider_clamps_at_bounds() {
        let mut slider = Slider::new(STANDARD_A);
        slider.nudge(1_000);
        assert_eq!(slider.value(), 2.0);
        slider.nudge(-1_000);
        assert_eq!(slider.value(), -2.0);
        assert_eq!(slider.ratio(), 0.0);
    }

    #[test]
    fn test_snap_rounds_to_step() {
        assert_eq!(SHIFT_P.snap(1.234), 1.2);
        assert_eq!(SHIFT_P.snap(-7.0), -3.0);
        assert_eq!(BASIC_A.snap(0.04), 0.0);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(STANDARD_A.validate(2.5).is_err());
        assert!(STANDARD_A.validate(f64::NAN).is_err());
        assert_eq!(STANDARD_A.validate(-1.23), Ok(-1.2));
    }

    #[test]
    fn test_counter_bounds() {
        let mut counter = Counter::new(LOTTO_SETS);
        assert_eq!(counter.value(), 5);
        for _ in 0..20 {
            counter.increment();
        }
        assert_eq!(counter.value(), 10);
        assert_eq!(Counter::with_value(LOTTO_SETS, 0).value(), 1);
        assert!(LOTTO_SETS.validate(11).is_err());
        assert_eq!(LOTTO_SETS.validate(3), Ok(3));
    }
}
