use std::fmt;

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::error::DrawError;

/// Smallest number that can be drawn
pub const MIN_NUMBER: u8 = 1;
/// Largest number that can be drawn
pub const MAX_NUMBER: u8 = 45;
/// Numbers per draw
pub const DRAW_SIZE: usize = 6;

/// Six distinct numbers from `MIN_NUMBER..=MAX_NUMBER`, sorted ascending.
///
/// Serializes as a plain list; deserializing validates the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Draw([u8; DRAW_SIZE]);

impl Draw {
    /// Sample a draw uniformly without replacement.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut numbers = [0u8; DRAW_SIZE];
        let picked = index::sample(rng, MAX_NUMBER as usize, DRAW_SIZE);
        for (slot, idx) in numbers.iter_mut().zip(picked) {
            *slot = idx as u8 + MIN_NUMBER;
        }
        numbers.sort_unstable();
        Self(numbers)
    }

    /// Validate and sort externally supplied numbers.
    pub fn try_from_numbers(numbers: impl IntoIterator<Item = u8>) -> Result<Self, DrawError> {
        let numbers: Vec<u8> = numbers.into_iter().collect();
        if numbers.len() != DRAW_SIZE {
            return Err(DrawError::WrongCount {
                expected: DRAW_SIZE,
                actual: numbers.len(),
            });
        }

        let mut sorted = [0u8; DRAW_SIZE];
        sorted.copy_from_slice(&numbers);
        sorted.sort_unstable();

        if let Some(&number) = sorted
            .iter()
            .find(|n| !(MIN_NUMBER..=MAX_NUMBER).contains(*n))
        {
            return Err(DrawError::OutOfRange {
                number,
                min: MIN_NUMBER,
                max: MAX_NUMBER,
            });
        }
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(DrawError::Duplicate(pair[0]));
        }

        Ok(Self(sorted))
    }

    pub(crate) const fn from_sorted(numbers: [u8; DRAW_SIZE]) -> Self {
        Self(numbers)
    }

    pub fn numbers(&self) -> &[u8; DRAW_SIZE] {
        &self.0
    }

    pub fn contains(&self, number: u8) -> bool {
        self.0.binary_search(&number).is_ok()
    }

    /// Space separated numbers, e.g. `3 15 27 33 34 36`
    pub fn spaced(&self) -> String {
        self.join(" ")
    }

    fn join(&self, sep: &str) -> String {
        self.0
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(", "))
    }
}

impl TryFrom<Vec<u8>> for Draw {
    type Error = DrawError;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from_numbers(numbers)
    }
}

impl From<Draw> for Vec<u8> {
    fn from(draw: Draw) -> Self {
        draw.0.to_vec()
    }
}

/// Generate `count` independent draws.
pub fn generate_draws<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Draw> {
    (0..count).map(|_| Draw::random(rng)).collect()
}

/// A published winning draw used as the comparison baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningReference {
    pub round: u32,
    pub numbers: Draw,
}

impl WinningReference {
    /// Round 1195 main numbers (bonus number not included)
    pub const LATEST: WinningReference = WinningReference {
        round: 1195,
        numbers: Draw::from_sorted([3, 15, 27, 33, 34, 36]),
    };
}

impl Default for WinningReference {
    fn default() -> Self {
        Self::LATEST
    }
}
