//! Monte Carlo statistics over many generated draws.
//!
//! Trials are split into fixed-size batches and every batch seeds its own RNG
//! from `(seed, batch index)`. Batch tallies are summed, so the result only
//! depends on the seed and trial count, never on thread scheduling.

use rand::SeedableRng;
use rand::rngs::SmallRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::compare::match_count;
use super::draw::{DRAW_SIZE, Draw, MAX_NUMBER, MIN_NUMBER, WinningReference};

const MAX_BATCH_SIZE: usize = 1_000;
const NUMBER_SLOTS: usize = MAX_NUMBER as usize + 1;

/// Aggregated outcome of a statistics run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawStatistics {
    pub reference: WinningReference,
    pub trials: usize,
    /// `match_histogram[k]` = number of draws with exactly `k` matches
    pub match_histogram: [u64; DRAW_SIZE + 1],
    /// `number_counts[n]` = occurrences of number `n` (index 0 unused)
    number_counts: [u64; NUMBER_SLOTS],
}

impl DrawStatistics {
    fn empty(reference: WinningReference, trials: usize) -> Self {
        Self {
            reference,
            trials,
            match_histogram: [0; DRAW_SIZE + 1],
            number_counts: [0; NUMBER_SLOTS],
        }
    }

    /// Fraction of draws with exactly `matches` hits
    pub fn match_rate(&self, matches: usize) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.match_histogram
            .get(matches)
            .map_or(0.0, |&count| count as f64 / self.trials as f64)
    }

    /// How often `number` appeared across all draws
    pub fn frequency(&self, number: u8) -> u64 {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&number) {
            self.number_counts[number as usize]
        } else {
            0
        }
    }

    /// Observed frequencies for 1..=45 in order
    pub fn frequencies(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (MIN_NUMBER..=MAX_NUMBER).map(|n| (n, self.number_counts[n as usize]))
    }

    /// Expected count of each number under a uniform draw
    pub fn expected_frequency(&self) -> f64 {
        self.trials as f64 * DRAW_SIZE as f64 / MAX_NUMBER as f64
    }

    fn record(&mut self, draw: &Draw) {
        self.match_histogram[match_count(draw, &self.reference.numbers)] += 1;
        for &n in draw.numbers() {
            self.number_counts[n as usize] += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        for (acc, v) in self.match_histogram.iter_mut().zip(other.match_histogram) {
            *acc += v;
        }
        for (acc, v) in self.number_counts.iter_mut().zip(other.number_counts) {
            *acc += v;
        }
        self
    }
}

fn batch_seed(seed: u64, batch: usize) -> u64 {
    // splitmix-style spread so neighbouring batches do not share streams
    seed ^ (batch as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn run_batch(reference: WinningReference, seed: u64, batch: usize, size: usize) -> DrawStatistics {
    let mut rng = SmallRng::seed_from_u64(batch_seed(seed, batch));
    let mut stats = DrawStatistics::empty(reference, size);
    for _ in 0..size {
        stats.record(&Draw::random(&mut rng));
    }
    stats
}

/// Draw `trials` random sets and tally matches against `reference`.
pub fn simulate(reference: WinningReference, trials: usize, seed: u64) -> DrawStatistics {
    let num_batches = trials.div_ceil(MAX_BATCH_SIZE);
    let batch_size = |i: usize| {
        if i == num_batches - 1 {
            trials - i * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        }
    };
    let empty = || DrawStatistics::empty(reference, 0);

    #[cfg(feature = "parallel")]
    let merged = (0..num_batches)
        .into_par_iter()
        .map(|i| run_batch(reference, seed, i, batch_size(i)))
        .reduce(empty, DrawStatistics::merge);

    #[cfg(not(feature = "parallel"))]
    let merged = (0..num_batches)
        .map(|i| run_batch(reference, seed, i, batch_size(i)))
        .fold(empty(), DrawStatistics::merge);

    DrawStatistics { trials, ..merged }
}
