//! Integration test: the full lexicographic comparison contract.
//!
//! Runs the literal fixtures, both exhaustive sweeps, and the law-based
//! compliance pass end to end through the public API, the way an
//! external conformance driver would.

use plumb_ord::compliance::{
    assert_days_lexicographic, assert_months_lexicographic, assert_total_order_api,
    run_full_order_compliance,
};
use plumb_ord::{relations_hold, ComparisonFixture, MonthDay, SweepConfig};

// The three literal fixtures must also hold during compilation.
const _: () = assert!(relations_hold(
    MonthDay::new(1, 1),
    MonthDay::new(1, 1),
    true,
    false
));
const _: () = assert!(relations_hold(
    MonthDay::new(1, 1),
    MonthDay::new(1, 2),
    false,
    true
));
const _: () = assert!(relations_hold(
    MonthDay::new(1, 1),
    MonthDay::new(2, 1),
    false,
    true
));

#[test]
fn operator_api_is_complete() {
    assert_total_order_api::<MonthDay>();
}

#[test]
fn literal_fixtures_pass_at_run_time() {
    let fixtures = [
        ComparisonFixture::new(MonthDay::new(1, 1), MonthDay::new(1, 1), true, false),
        ComparisonFixture::new(MonthDay::new(1, 1), MonthDay::new(1, 2), false, true),
        ComparisonFixture::new(MonthDay::new(1, 1), MonthDay::new(2, 1), false, true),
    ];
    for fixture in fixtures {
        fixture.check().unwrap_or_else(|violation| {
            panic!("{} vs {}: {violation}", fixture.a, fixture.b);
        });
    }
}

#[test]
fn same_day_different_months() {
    assert_months_lexicographic(&SweepConfig::default());
}

#[test]
fn same_month_different_days() {
    assert_days_lexicographic(&SweepConfig::default());
}

#[test]
fn full_compliance_over_valid_calendar_values() {
    let mut values = Vec::new();
    for month in 1..=12u8 {
        for day in [1u8, 14, 28, 31] {
            values.push(MonthDay::new(month, day));
        }
    }
    run_full_order_compliance(&values, &SweepConfig::default());
}
