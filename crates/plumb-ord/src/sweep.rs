//! Exhaustive combinatorial verification over bounded field ranges.
//!
//! The lexicographic rule must hold for every pair of field values, not
//! just cherry-picked fixtures. [`sweep_months`] checks all pairs of
//! major values with the minor held fixed; [`sweep_days`] checks all
//! pairs of minor values with the major held fixed. Each pair's
//! expectation is computed from integer comparison of the swept field,
//! then run through the full relation checker in both argument orders.

use crate::month_day::MonthDay;
use crate::relation::{ComparisonFixture, OrderViolation};
use indexmap::IndexMap;
use std::fmt;

/// Field ranges for the exhaustive sweeps.
///
/// Ranges are half-open, matching the classic calendar sweep bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// First month value swept (inclusive).
    pub month_start: u8,
    /// End of the month sweep (exclusive).
    pub month_end: u8,
    /// First day value swept (inclusive).
    pub day_start: u8,
    /// End of the day sweep (exclusive).
    pub day_end: u8,
    /// Month held fixed while sweeping days.
    pub fixed_month: u8,
    /// Day held fixed while sweeping months.
    pub fixed_day: u8,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            month_start: 1,
            month_end: 12,
            day_start: 1,
            day_end: 31,
            fixed_month: 2,
            fixed_day: 1,
        }
    }
}

/// Outcome of a sweep: every violating pair, in encounter order.
#[derive(Clone, Debug, Default)]
pub struct SweepReport {
    violations: IndexMap<(MonthDay, MonthDay), OrderViolation>,
    pairs_checked: usize,
}

impl SweepReport {
    /// Whether the sweep found no violations.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violating pairs.
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Number of pairs the sweep checked.
    pub fn pairs_checked(&self) -> usize {
        self.pairs_checked
    }

    /// Iterate over the violating pairs in encounter order.
    pub fn violations(&self) -> impl Iterator<Item = (&(MonthDay, MonthDay), &OrderViolation)> {
        self.violations.iter()
    }

    fn record(&mut self, pair: (MonthDay, MonthDay), result: Result<(), OrderViolation>) {
        self.pairs_checked += 1;
        if let Err(violation) = result {
            self.violations.insert(pair, violation);
        }
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} of {} pairs violated the comparison contract",
            self.violations.len(),
            self.pairs_checked
        )?;
        for ((a, b), violation) in &self.violations {
            writeln!(f, "  {a} vs {b}: {violation}")?;
        }
        Ok(())
    }
}

/// Check every pair of major values in the configured range, minor held
/// fixed.
///
/// For each `(i, j)` pair the expectation is `equal = (i == j)`,
/// `less = (i < j)`.
pub fn sweep_months(config: &SweepConfig) -> SweepReport {
    let mut report = SweepReport::default();
    for i in config.month_start..config.month_end {
        for j in config.month_start..config.month_end {
            let a = MonthDay::new(i, config.fixed_day);
            let b = MonthDay::new(j, config.fixed_day);
            let fixture = ComparisonFixture::new(a, b, i == j, i < j);
            report.record((a, b), fixture.check());
        }
    }
    report
}

/// Check every pair of minor values in the configured range, major held
/// fixed.
///
/// For each `(i, j)` pair the expectation is `equal = (i == j)`,
/// `less = (i < j)`.
pub fn sweep_days(config: &SweepConfig) -> SweepReport {
    let mut report = SweepReport::default();
    for i in config.day_start..config.day_end {
        for j in config.day_start..config.day_end {
            let a = MonthDay::new(config.fixed_month, i);
            let b = MonthDay::new(config.fixed_month, j);
            let fixture = ComparisonFixture::new(a, b, i == j, i < j);
            report.record((a, b), fixture.check());
        }
    }
    report
}
