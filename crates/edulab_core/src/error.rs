use std::fmt;

/// Errors raised when building a [`Draw`](crate::lotto::Draw) from external numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    WrongCount { expected: usize, actual: usize },
    OutOfRange { number: u8, min: u8, max: u8 },
    Duplicate(u8),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::WrongCount { expected, actual } => {
                write!(f, "a draw needs {expected} numbers, got {actual}")
            }
            DrawError::OutOfRange { number, min, max } => {
                write!(f, "number {number} is outside {min}..={max}")
            }
            DrawError::Duplicate(number) => write!(f, "number {number} appears more than once"),
        }
    }
}

impl std::error::Error for DrawError {}

/// Errors related to control input validation
#[derive(Debug, Clone, PartialEq)]
pub enum ControlError {
    OutOfRange {
        control: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    NotFinite {
        control: &'static str,
    },
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::OutOfRange {
                control,
                value,
                min,
                max,
            } => write!(f, "{control}: {value} is outside {min}..={max}"),
            ControlError::NotFinite { control } => write!(f, "{control}: value must be finite"),
        }
    }
}

impl std::error::Error for ControlError {}
