//! Benchmark profiles and utilities for the plumb conformance harness.
//!
//! Provides shared fixture builders for the criterion benches:
//!
//! - [`calendar_values`]: the canonical valid month/day grid
//! - [`full_calendar_config`]: sweep configuration covering every valid
//!   month and day

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plumb_ord::{MonthDay, SweepConfig};

/// Every valid month/day combination, in lexicographic order.
pub fn calendar_values() -> Vec<MonthDay> {
    let mut values = Vec::with_capacity(12 * 31);
    for month in 1..=12 {
        for day in 1..=31 {
            values.push(MonthDay::new(month, day));
        }
    }
    values
}

/// Sweep configuration covering the full valid calendar ranges.
pub fn full_calendar_config() -> SweepConfig {
    SweepConfig {
        month_start: 1,
        month_end: 13,
        day_start: 1,
        day_end: 32,
        ..SweepConfig::default()
    }
}
