// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force search runs, bounded by the test budget.

mod common;

use std::time::Duration;

use common::{brute_config, quiet_config};
use mss_search::config::{ConfigError, SearchConfig};
use mss_search::finder::{brute_force_find, BruteForceFinder, FindOutcome, SquareFinder};
use mss_search::grid::Square;
use mss_search::state::Counters;
use mss_search::symmetry::candidates_per_base;

#[test]
fn test_budget_ends_with_not_found() {
    let report = brute_force_find(&brute_config(500)).unwrap();
    assert_eq!(report.outcome, FindOutcome::NotFound);
    assert_eq!(report.state.tests, 500);
    assert_eq!(report.state.step, 9);
    assert!(!report.is_found());
    assert!(report.render_solution().is_none());
}

#[test]
fn test_zero_budget_tests_nothing() {
    let report = brute_force_find(&brute_config(0)).unwrap();
    assert_eq!(report.outcome, FindOutcome::NotFound);
    assert_eq!(report.state.tests, 0);
    assert_eq!(report.statistics.get(Counters::Steps), 1);
}

#[test]
fn test_first_candidate_is_the_identity_layout() {
    let report = brute_force_find(&brute_config(1)).unwrap();
    assert_eq!(
        report.last_candidate,
        Square::new([0, 1, 2, 3, 4, 5, 6, 7, 8])
    );
}

#[test]
fn test_step_9_enumerates_25920_candidates() {
    assert_eq!(candidates_per_base(), 25920);

    // One more test than step 9 holds moves the search to step 10.
    let report = brute_force_find(&brute_config(25921)).unwrap();
    assert_eq!(report.outcome, FindOutcome::NotFound);
    assert_eq!(report.state.step, 10);
    assert_eq!(report.statistics.get(Counters::Steps), 2);
    assert_eq!(report.statistics.get(Counters::Combinations), 2);
    assert_eq!(report.statistics.get(Counters::AnchorPlacements), 13);
    assert_eq!(
        report.last_candidate,
        Square::new([0, 1, 2, 3, 4, 5, 6, 7, 9])
    );
}

#[test]
fn test_runs_are_deterministic() {
    let config = brute_config(3000);
    let first = brute_force_find(&config).unwrap();
    let second = brute_force_find(&config).unwrap();
    assert_eq!(first.state, second.state);
    assert_eq!(first.statistics, second.statistics);
    assert_eq!(first.last_candidate, second.last_candidate);
}

#[test]
fn test_logging_does_not_change_the_search() {
    let quiet = brute_force_find(&brute_config(3000)).unwrap();
    let chatty = SearchConfig {
        quiet: false,
        verbose: true,
        update: Duration::ZERO,
        ..brute_config(3000)
    };
    let chatty = brute_force_find(&chatty).unwrap();
    assert_eq!(quiet.outcome, chatty.outcome);
    assert_eq!(quiet.state, chatty.state);
    assert_eq!(quiet.statistics, chatty.statistics);
    assert_eq!(quiet.last_candidate, chatty.last_candidate);
}

#[test]
fn test_seeded_random_runs_are_reproducible() {
    let config = SearchConfig {
        random_combinations: true,
        seed: Some(2025),
        step: 10,
        ..brute_config(2000)
    };
    let first = brute_force_find(&config).unwrap();
    let second = brute_force_find(&config).unwrap();
    assert_eq!(first.state, second.state);
    assert_eq!(first.last_candidate, second.last_candidate);

    // Shuffling changes the order, not the candidates.
    let mut roots = first.last_candidate.roots().to_vec();
    roots.sort_unstable();
    roots.dedup();
    assert_eq!(roots.len(), 9);
    assert!(roots.iter().all(|&root| (0..=9).contains(&root)));
    assert!(roots.contains(&9));
}

#[test]
fn test_narrow_step_is_rejected() {
    let config = SearchConfig {
        step: 8,
        min_root: 2,
        ..quiet_config()
    };
    let error = brute_force_find(&config).unwrap_err();
    assert_eq!(
        error,
        ConfigError::StepTooSmall {
            step: 8,
            min_root: 2
        }
    );
    assert_eq!(
        error.to_string(),
        "--min-root must be no more than step-7: step is 8, min_root is 2"
    );
}

#[test]
fn test_min_root_below_one_is_rejected() {
    let config = SearchConfig {
        min_root: 0,
        ..quiet_config()
    };
    assert!(matches!(
        BruteForceFinder.find(&config),
        Err(ConfigError::MinRootTooSmall { min_root: 0 })
    ));
}

#[test]
fn test_step_without_bases_is_skipped() {
    // Roots 1..=7 are too few for a base at step 9.
    let config = SearchConfig {
        step: 9,
        min_root: 2,
        ..brute_config(1)
    };
    let report = brute_force_find(&config).unwrap();
    assert_eq!(report.state.step, 10);
    assert_eq!(report.statistics.get(Counters::Steps), 2);
    assert_eq!(report.statistics.get(Counters::Combinations), 1);
    assert_eq!(
        report.last_candidate,
        Square::new([1, 2, 3, 4, 5, 6, 7, 8, 9])
    );
}
