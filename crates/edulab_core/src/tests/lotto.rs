//! Tests for lotto draws
//!
//! These tests verify that:
//! - Every generated draw has 6 distinct, sorted numbers in 1..=45
//! - Numbers are drawn with roughly equal frequency
//! - Match counts are symmetric intersections
//! - Seeded generation and statistics are reproducible

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::lotto::{
    DRAW_SIZE, Draw, MAX_NUMBER, MIN_NUMBER, WinningReference, compare_sets, generate_draws,
    match_count, stats,
};

fn assert_valid(draw: &Draw) {
    let numbers = draw.numbers();
    assert_eq!(numbers.len(), DRAW_SIZE);
    assert!(
        numbers.windows(2).all(|w| w[0] < w[1]),
        "not strictly ascending: {numbers:?}"
    );
    assert!(
        numbers
            .iter()
            .all(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n)),
        "out of range: {numbers:?}"
    );
}

#[test]
fn test_generates_requested_number_of_valid_draws() {
    let mut rng = StdRng::seed_from_u64(7);
    for count in 1..=20 {
        let draws = generate_draws(&mut rng, count);
        assert_eq!(draws.len(), count);
        draws.iter().for_each(assert_valid);
    }
}

#[test]
fn test_zero_sets_is_empty() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(generate_draws(&mut rng, 0).is_empty());
}

#[test]
fn test_numbers_are_roughly_uniform() {
    let mut rng = StdRng::seed_from_u64(2024);
    let trials = 20_000;
    let mut counts = [0u32; MAX_NUMBER as usize + 1];
    for draw in generate_draws(&mut rng, trials) {
        for &n in draw.numbers() {
            counts[n as usize] += 1;
        }
    }

    let expected = trials as f64 * DRAW_SIZE as f64 / MAX_NUMBER as f64;
    for n in MIN_NUMBER..=MAX_NUMBER {
        let observed = counts[n as usize] as f64;
        assert!(
            (observed - expected).abs() < expected * 0.15,
            "number {n} appeared {observed} times, expected about {expected:.0}"
        );
    }
}

#[test]
fn test_match_count_properties() {
    let reference = WinningReference::LATEST.numbers;
    assert_eq!(match_count(&reference, &reference), 6);

    let none = Draw::try_from_numbers([1, 2, 4, 5, 6, 7]).unwrap();
    assert_eq!(match_count(&none, &reference), 0);

    let three = Draw::try_from_numbers([3, 15, 27, 40, 41, 42]).unwrap();
    assert_eq!(match_count(&three, &reference), 3);
    assert_eq!(match_count(&reference, &three), 3);

    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let a = Draw::random(&mut rng);
        let b = Draw::random(&mut rng);
        let expected = a.numbers().iter().filter(|n| b.contains(**n)).count();
        assert_eq!(match_count(&a, &b), expected);
        assert_eq!(match_count(&a, &b), match_count(&b, &a));
        assert!(match_count(&a, &b) <= DRAW_SIZE);
    }
}

#[test]
fn test_compare_sets_rows() {
    let draws = vec![
        WinningReference::LATEST.numbers,
        Draw::try_from_numbers([3, 15, 20, 21, 22, 23]).unwrap(),
    ];
    let rows = compare_sets(&draws, &WinningReference::LATEST.numbers);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].set, 1);
    assert_eq!(rows[0].matches, 6);
    assert_eq!(rows[1].set, 2);
    assert_eq!(rows[1].matches, 2);
    assert_eq!(rows[1].note(), "2 matched");
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let first = generate_draws(&mut StdRng::seed_from_u64(42), 5);
    let second = generate_draws(&mut StdRng::seed_from_u64(42), 5);
    assert_eq!(first, second);
}

#[test]
fn test_statistics_totals() {
    let trials = 2_500;
    let result = stats::simulate(WinningReference::LATEST, trials, 9);

    assert_eq!(result.trials, trials);
    assert_eq!(result.match_histogram.iter().sum::<u64>(), trials as u64);
    assert_eq!(
        result.frequencies().map(|(_, c)| c).sum::<u64>(),
        (trials * DRAW_SIZE) as u64
    );
    let total_rate: f64 = (0..=DRAW_SIZE).map(|k| result.match_rate(k)).sum();
    assert!((total_rate - 1.0).abs() < 1e-9);
    assert_eq!(result.frequency(0), 0);
    assert_eq!(result.frequency(46), 0);
}

#[test]
fn test_statistics_reproducible() {
    let a = stats::simulate(WinningReference::LATEST, 3_001, 123);
    let b = stats::simulate(WinningReference::LATEST, 3_001, 123);
    assert_eq!(a, b);

    let c = stats::simulate(WinningReference::LATEST, 3_001, 124);
    assert_ne!(a.match_histogram, c.match_histogram);
}

#[test]
fn test_statistics_match_rates_are_plausible() {
    let result = stats::simulate(WinningReference::LATEST, 50_000, 5);
    // P(0 matches) = C(39,6)/C(45,6) ≈ 0.4006
    assert!((result.match_rate(0) - 0.4006).abs() < 0.02);
    // P(1 match) ≈ 0.4241
    assert!((result.match_rate(1) - 0.4241).abs() < 0.02);
    assert!(result.match_rate(6) < 0.001);
}

#[test]
fn test_statistics_with_no_trials() {
    let result = stats::simulate(WinningReference::LATEST, 0, 1);
    assert_eq!(result.trials, 0);
    assert_eq!(result.match_rate(0), 0.0);
    assert_eq!(result.expected_frequency(), 0.0);
}
