use puzzle_mc_shared::config::{CouponParams, HostKind, RainParams, RunConfig};
use puzzle_mc_shared::SimError;
use puzzle_mc_sim::coupon::CouponCollector;
use puzzle_mc_sim::engine::{outcomes, run_simulation};
use puzzle_mc_sim::monty_hall::MontyHall;
use puzzle_mc_sim::rain::ConditionalRain;
use puzzle_mc_sim::runner;
use puzzle_mc_sim::stick::StickTriangle;
use puzzle_mc_sim::Puzzle;

fn coupon(k: usize) -> CouponCollector {
    CouponCollector::new(CouponParams { coupon_types: k }).expect("valid coupon params")
}

fn default_rain() -> ConditionalRain {
    ConditionalRain::new(RainParams::default()).expect("valid rain params")
}

#[test]
fn test_coupon_mean_converges_to_harmonic_sum() {
    for k in [2, 3, 5, 10] {
        let gen = coupon(k);
        let harmonic: f64 = (1..=k).map(|i| 1.0 / i as f64).sum();
        let expected = k as f64 * harmonic;
        let est = run_simulation(&gen, &RunConfig::new(20_000, k as u64)).unwrap();
        assert!(
            (est.value - expected).abs() < 0.02 * expected,
            "k={} coupon mean {} vs {}",
            k,
            est.value,
            expected
        );
        assert!((est.closed_form - expected).abs() < 1e-9);
        assert_eq!(est.qualifying, 20_000);
    }
}

#[test]
fn test_coupon_single_type_every_trial_is_one() {
    let gen = coupon(1);
    assert!(outcomes(&gen, 0, 1_000).iter().all(|&n| n == 1));
    let est = run_simulation(&gen, &RunConfig::new(1_000, 0)).unwrap();
    assert_eq!(est.value, 1.0);
}

#[test]
fn test_monty_hall_sighted_switching_wins_two_thirds() {
    let game = MontyHall::new(HostKind::Sighted);
    let est = run_simulation(&game, &RunConfig::new(100_000, 123_456)).unwrap();
    assert!((est.value - 2.0 / 3.0).abs() < 0.01, "switch win ratio {}", est.value);
    assert_eq!(est.qualifying, 100_000);
}

#[test]
fn test_monty_hall_blind_switching_wins_half() {
    let game = MontyHall::new(HostKind::Blind);
    let est = run_simulation(&game, &RunConfig::new(100_000, 123_456)).unwrap();
    assert!((est.value - 0.5).abs() < 0.01, "blind switch win ratio {}", est.value);
    // car-revealing trials are dropped from the denominator
    assert!(est.qualifying < 70_000 && est.qualifying > 63_000, "qualifying {}", est.qualifying);
}

#[test]
fn test_rain_converges_to_bayes() {
    let est = run_simulation(&default_rain(), &RunConfig::new(500_000, 123_456)).unwrap();
    assert!((est.value - 8.0 / 11.0).abs() < 0.01, "rain posterior {}", est.value);
    assert!((est.closed_form - 8.0 / 11.0).abs() < 1e-12);
}

#[test]
fn test_stick_triangle_quarter() {
    let est = run_simulation(&StickTriangle, &RunConfig::new(100_000, 10_815_657)).unwrap();
    assert!((est.value - 0.25).abs() < 0.01, "triangle fraction {}", est.value);
}

#[test]
fn test_same_seed_is_bit_identical() {
    let config = RunConfig {
        trial_count: 2_000,
        seed: 77,
        record_series: true,
    };
    let puzzles = [
        Puzzle::Coupon(coupon(7)),
        Puzzle::MontyHall(MontyHall::new(HostKind::Sighted)),
        Puzzle::MontyHall(MontyHall::new(HostKind::Blind)),
        Puzzle::Rain(default_rain()),
        Puzzle::Stick(StickTriangle),
    ];
    for puzzle in &puzzles {
        let a = puzzle.run(&config).unwrap();
        let b = puzzle.run(&config).unwrap();
        assert_eq!(a.value.to_bits(), b.value.to_bits(), "{}", puzzle.name());
        assert_eq!(a.series, b.series, "{}", puzzle.name());
    }

    assert_eq!(outcomes(&coupon(7), 5, 300), outcomes(&coupon(7), 5, 300));
    assert_eq!(outcomes(&default_rain(), 5, 300), outcomes(&default_rain(), 5, 300));
}

#[test]
fn test_running_mean_matches_sum_over_count() {
    let gen = coupon(6);
    let draws = outcomes(&gen, 31, 5_000);
    let expected = draws.iter().sum::<u64>() as f64 / draws.len() as f64;
    let est = run_simulation(&gen, &RunConfig::new(5_000, 31)).unwrap();
    assert!((est.value - expected).abs() < 1e-9, "{} vs {}", est.value, expected);
}

#[test]
fn test_single_trial_ratio_is_zero_or_one() {
    let game = MontyHall::new(HostKind::Sighted);
    let first = outcomes(&game, 2, 1)[0].unwrap();
    let est = run_simulation(&game, &RunConfig::new(1, 2)).unwrap();
    assert_eq!(est.value, if first { 1.0 } else { 0.0 });
}

#[test]
fn test_rain_with_no_qualifying_trials_fails() {
    let rain = ConditionalRain::new(RainParams {
        rain_prob: 0.0,
        truthful_prob: 1.0,
        reports: 2,
    })
    .unwrap();
    let err = run_simulation(&rain, &RunConfig::new(1_000, 1)).unwrap_err();
    assert!(matches!(err, SimError::NoQualifyingTrials { .. }), "{err}");
}

#[test]
fn test_batch_runner() {
    let puzzle = Puzzle::Stick(StickTriangle);
    let base = RunConfig::new(2_000, 0);
    let result = runner::run_seeded_batch(&puzzle, &base, 4, 0, 1, Some(2)).unwrap();
    assert_eq!(result.n_runs(), 4);
    assert_eq!(result.total_trials, 8_000);
    let seeds: Vec<u64> = result.results.iter().map(|r| r.seed).collect();
    assert_eq!(seeds, vec![0, 1, 2, 3]);
}

#[test]
fn test_batch_independent_of_worker_count() {
    let puzzle = Puzzle::Coupon(coupon(4));
    let base = RunConfig::new(500, 0);
    let one = runner::run_seeded_batch(&puzzle, &base, 6, 10, 3, Some(1)).unwrap();
    let four = runner::run_seeded_batch(&puzzle, &base, 6, 10, 3, Some(4)).unwrap();
    assert_eq!(one.results, four.results);
}

#[test]
fn test_batch_propagates_errors() {
    let puzzle = Puzzle::Stick(StickTriangle);
    let configs = vec![RunConfig::new(10, 0), RunConfig::new(0, 1)];
    let err = runner::run_batch(&puzzle, configs, Some(2)).unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig { .. }));
}
