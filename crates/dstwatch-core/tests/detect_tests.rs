//! Tests for the change detector: scenario coverage, ordering determinism,
//! idempotence, and the silent first-observation policy.

use dstwatch_core::{detect, City, DstOracle, DstState, WatchError};
use std::collections::BTreeMap;

/// Oracle returning canned readings keyed by zonename. Zones not present in
/// the map fail lookup, like an unresolvable IANA identifier would.
struct FakeOracle {
    readings: BTreeMap<&'static str, bool>,
}

impl FakeOracle {
    fn new(readings: &[(&'static str, bool)]) -> Self {
        Self {
            readings: readings.iter().copied().collect(),
        }
    }
}

impl DstOracle for FakeOracle {
    fn is_dst_active(&self, zonename: &str) -> dstwatch_core::error::Result<bool> {
        self.readings
            .get(zonename)
            .copied()
            .ok_or_else(|| WatchError::UnknownTimezone(zonename.to_string()))
    }

    fn local_time(&self, zonename: &str) -> dstwatch_core::error::Result<String> {
        self.readings
            .get(zonename)
            .map(|_| "12:00".to_string())
            .ok_or_else(|| WatchError::UnknownTimezone(zonename.to_string()))
    }
}

const NYC: City = City::new("NYC", "New York City", "USA", "America/New_York");
const PAR: City = City::new("PAR", "Paris", "France", "Europe/Paris");
const LON: City = City::new("LON", "London", "United Kingdom", "Europe/London");
const TYO: City = City::new("TYO", "Tokyo", "Japan", "Asia/Tokyo");

fn state(entries: &[(&str, bool)]) -> DstState {
    entries
        .iter()
        .map(|&(code, active)| (code.to_string(), active))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenario coverage
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn flipped_city_is_reported_with_its_new_status() {
    // Scenario: PAR was recorded off, the oracle now sees it on.
    let prior = state(&[("PAR", false)]);
    let oracle = FakeOracle::new(&[("Europe/Paris", true)]);

    let (changed, next) = detect(&[PAR], &oracle, &prior).unwrap();

    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].city.code, "PAR");
    assert!(changed[0].dst_active);
    assert_eq!(next, state(&[("PAR", true)]));
}

#[test]
fn first_observation_seeds_state_without_reporting() {
    // Scenario: empty prior state, LON observed for the first time.
    let prior = DstState::new();
    let oracle = FakeOracle::new(&[("Europe/London", false)]);

    let (changed, next) = detect(&[LON], &oracle, &prior).unwrap();

    assert!(changed.is_empty());
    assert_eq!(next, state(&[("LON", false)]));
}

#[test]
fn unchanged_cities_leave_state_untouched() {
    // Scenario: NYC and TYO both read the same as last time.
    let prior = state(&[("NYC", true), ("TYO", false)]);
    let oracle = FakeOracle::new(&[("America/New_York", true), ("Asia/Tokyo", false)]);

    let (changed, next) = detect(&[NYC, TYO], &oracle, &prior).unwrap();

    assert!(changed.is_empty());
    assert_eq!(next, prior);
}

#[test]
fn mixed_cycle_reports_only_flips_and_records_everything() {
    // NYC flips, PAR is unchanged, TYO has never been seen.
    let prior = state(&[("NYC", false), ("PAR", true)]);
    let oracle = FakeOracle::new(&[
        ("America/New_York", true),
        ("Europe/Paris", true),
        ("Asia/Tokyo", false),
    ]);

    let (changed, next) = detect(&[NYC, PAR, TYO], &oracle, &prior).unwrap();

    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].city.code, "NYC");
    assert_eq!(
        next,
        state(&[("NYC", true), ("PAR", true), ("TYO", false)])
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Ordering and idempotence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn changes_are_listed_in_catalog_order() {
    // Catalog order deliberately differs from alphabetical code order: the
    // report must follow the catalog, not the state map's key order.
    let catalog = [TYO, NYC, PAR];
    let prior = state(&[("NYC", false), ("PAR", false), ("TYO", false)]);
    let oracle = FakeOracle::new(&[
        ("America/New_York", true),
        ("Europe/Paris", true),
        ("Asia/Tokyo", true),
    ]);

    let (changed, _) = detect(&catalog, &oracle, &prior).unwrap();

    let codes: Vec<&str> = changed.iter().map(|c| c.city.code).collect();
    assert_eq!(codes, ["TYO", "NYC", "PAR"]);
}

#[test]
fn detect_is_idempotent_once_its_state_is_fed_back() {
    let prior = state(&[("NYC", false), ("PAR", false)]);
    let oracle = FakeOracle::new(&[("America/New_York", true), ("Europe/Paris", true)]);
    let catalog = [NYC, PAR];

    let (first_changed, first_state) = detect(&catalog, &oracle, &prior).unwrap();
    assert_eq!(first_changed.len(), 2);

    // Same oracle snapshot, updated state: nothing left to report.
    let (second_changed, second_state) = detect(&catalog, &oracle, &first_state).unwrap();
    assert!(second_changed.is_empty());
    assert_eq!(second_state, first_state);
}

// ─────────────────────────────────────────────────────────────────────────────
// Failure propagation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_zone_fails_the_detection() {
    let prior = DstState::new();
    let oracle = FakeOracle::new(&[]);

    let err = detect(&[PAR], &oracle, &prior).unwrap_err();
    assert!(matches!(err, WatchError::UnknownTimezone(zone) if zone == "Europe/Paris"));
}
