//! Transaction reference allocation
//!
//! This module provides the `ReferenceAllocator`, the one mutable-shared-
//! state component of the engine. It owns per-company sequence counters
//! and the noon-boundary reset rule: counters live in a window running
//! from local noon to the next local noon, keyed by the window's starting
//! date. Crossing the boundary clears every company's counter atomically,
//! never per-company.
//!
//! All state is guarded by a single mutex so that each allocated id is
//! unique within its window; unguarded concurrent increments would be a
//! correctness bug, not a performance tradeoff.

use crate::types::{CompanyKey, DisplayReference, TransactionId};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

/// Counters wrap within 1..=999; zero never occurs
const COUNTER_MODULUS: u16 = 999;

/// Per-company counter state for one noon-to-noon window
///
/// All counters share one window date; a window change replaces the whole
/// map, never individual entries.
struct TxnCounterState {
    /// Date identifying the noon-to-noon window the counters belong to
    window: NaiveDate,

    /// Current counter value per company, each in [0, 999]
    counters: HashMap<CompanyKey, u16>,
}

/// Allocates time-windowed, per-company transaction identifiers
///
/// Process-wide: created once, mutated on every allocation, and never
/// explicitly destroyed. Safe to share behind a reference across threads;
/// every operation takes the internal lock for its full duration.
pub struct ReferenceAllocator {
    state: Mutex<TxnCounterState>,
}

impl ReferenceAllocator {
    /// Create an allocator with no counters in the current window
    pub fn new() -> Self {
        ReferenceAllocator {
            state: Mutex::new(TxnCounterState {
                window: window_date(Local::now().naive_local()),
                counters: HashMap::new(),
            }),
        }
    }

    /// Mint the next transaction identifier for a company
    ///
    /// Rolls the window first if local time has crossed noon since the
    /// last allocation (clearing all companies' counters), then advances
    /// this company's counter through the repeating 1..999 sequence.
    ///
    /// # Arguments
    ///
    /// * `company` - The company whose sequence to advance
    ///
    /// # Returns
    ///
    /// A transaction id of the form `prefix + zero-padded 3-digit counter`
    pub fn next_id(&self, company: &CompanyKey) -> TransactionId {
        self.next_id_at(company, Local::now().naive_local())
    }

    /// Clock-injected allocation used by `next_id` and by tests
    fn next_id_at(&self, company: &CompanyKey, now: NaiveDateTime) -> TransactionId {
        let mut state = self.state.lock();

        let window = window_date(now);
        if window != state.window {
            debug!(
                old_window = %state.window,
                new_window = %window,
                "noon boundary crossed, resetting all company counters"
            );
            state.counters.clear();
            state.window = window;
        }

        let counter = state.counters.entry(company.clone()).or_insert(0);
        *counter = (*counter % COUNTER_MODULUS) + 1;

        TransactionId::new(company.prefix(), *counter)
    }
}

impl Default for ReferenceAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Date identifying the noon-to-noon window containing `now`
///
/// Shifting the clock back 12 hours maps every instant in
/// `[noon, next noon)` onto one calendar date: before local noon the
/// window is keyed by the previous day, at or after noon by the current
/// day.
fn window_date(now: NaiveDateTime) -> NaiveDate {
    (now - Duration::hours(12)).date()
}

/// Compose the human-facing sale reference
///
/// # Arguments
///
/// * `txn_id` - The minted transaction identifier
/// * `operator` - The operator handling the sale
/// * `name` - The customer or table name
///
/// # Returns
///
/// `"{txn_id} - {operator} - {name}"` hard-truncated to 25 characters
pub fn build_reference(txn_id: &TransactionId, operator: &str, name: &str) -> DisplayReference {
    DisplayReference::new(&format!("{} - {} - {}", txn_id, operator, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn at(date: (i32, u32, u32), time: (u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, 0)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::just_before_noon(at((2026, 3, 14), (11, 59)), day(2026, 3, 13))]
    #[case::at_noon(at((2026, 3, 14), (12, 0)), day(2026, 3, 14))]
    #[case::just_after_noon(at((2026, 3, 14), (12, 1)), day(2026, 3, 14))]
    #[case::early_morning(at((2026, 3, 14), (0, 30)), day(2026, 3, 13))]
    #[case::late_evening(at((2026, 3, 14), (23, 59)), day(2026, 3, 14))]
    #[case::month_boundary(at((2026, 3, 1), (9, 0)), day(2026, 2, 28))]
    fn test_window_date(#[case] now: NaiveDateTime, #[case] expected: NaiveDate) {
        assert_eq!(window_date(now), expected);
    }

    #[test]
    fn test_sequence_starts_at_one() {
        let allocator = ReferenceAllocator::new();
        let lunar = CompanyKey::new("Lunar");
        let now = at((2026, 3, 14), (14, 0));

        assert_eq!(allocator.next_id_at(&lunar, now).as_str(), "L001");
        assert_eq!(allocator.next_id_at(&lunar, now).as_str(), "L002");
        assert_eq!(allocator.next_id_at(&lunar, now).as_str(), "L003");
    }

    #[test]
    fn test_companies_advance_independently() {
        let allocator = ReferenceAllocator::new();
        let now = at((2026, 3, 14), (14, 0));

        assert_eq!(
            allocator.next_id_at(&CompanyKey::new("Lunar"), now).as_str(),
            "L001"
        );
        assert_eq!(
            allocator.next_id_at(&CompanyKey::new("Lunar"), now).as_str(),
            "L002"
        );
        assert_eq!(
            allocator.next_id_at(&CompanyKey::new("Wave"), now).as_str(),
            "W001"
        );
        assert_eq!(
            allocator.next_id_at(&CompanyKey::new("101"), now).as_str(),
            "1001"
        );
        assert_eq!(
            allocator
                .next_id_at(&CompanyKey::new("Pop-Up Stall"), now)
                .as_str(),
            "X001"
        );
    }

    #[test]
    fn test_counter_wraps_to_one_never_zero() {
        let allocator = ReferenceAllocator::new();
        let ion = CompanyKey::new("Ion");
        let now = at((2026, 3, 14), (14, 0));

        for expected in 1..=999u16 {
            let id = allocator.next_id_at(&ion, now);
            assert_eq!(id.as_str(), format!("I{:03}", expected));
        }

        // the 1000th allocation wraps back to 1
        assert_eq!(allocator.next_id_at(&ion, now).as_str(), "I001");
    }

    #[test]
    fn test_noon_boundary_resets_all_companies() {
        let allocator = ReferenceAllocator::new();
        let lunar = CompanyKey::new("Lunar");
        let wave = CompanyKey::new("Wave");

        let morning = at((2026, 3, 14), (11, 30));
        allocator.next_id_at(&lunar, morning);
        allocator.next_id_at(&lunar, morning);
        allocator.next_id_at(&wave, morning);

        // Lunar crosses the boundary; Wave's counter must also be gone
        let afternoon = at((2026, 3, 14), (12, 30));
        assert_eq!(allocator.next_id_at(&lunar, afternoon).as_str(), "L001");
        assert_eq!(allocator.next_id_at(&wave, afternoon).as_str(), "W001");
    }

    #[test]
    fn test_same_window_spans_midnight() {
        let allocator = ReferenceAllocator::new();
        let lunar = CompanyKey::new("Lunar");

        let evening = at((2026, 3, 14), (23, 30));
        let next_morning = at((2026, 3, 15), (8, 0));

        assert_eq!(allocator.next_id_at(&lunar, evening).as_str(), "L001");
        // still before the next noon, so the sequence continues
        assert_eq!(allocator.next_id_at(&lunar, next_morning).as_str(), "L002");
    }

    #[rstest]
    #[case::short("L001", "alice", "Table 5", "L001 - alice - Table 5")]
    #[case::clipped(
        "W042",
        "bartholomew",
        "Private Dining Room 12",
        "W042 - bartholomew - Priv"
    )]
    #[case::empty_name("I007", "op", "", "I007 - op - ")]
    fn test_build_reference(
        #[case] id_text: &str,
        #[case] operator: &str,
        #[case] name: &str,
        #[case] expected: &str,
    ) {
        let (prefix, counter) = id_text.split_at(1);
        let txn_id = TransactionId::new(
            prefix.chars().next().unwrap(),
            counter.parse().unwrap(),
        );
        let reference = build_reference(&txn_id, operator, name);
        assert_eq!(reference.as_str(), expected);
        assert!(reference.len() <= 25);
    }
}
