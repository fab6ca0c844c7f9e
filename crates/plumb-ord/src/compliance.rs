//! Total-order compliance test helpers.
//!
//! These functions verify that a comparable type's operator set satisfies
//! the laws a lexicographic total order must obey. Reused across the
//! month/day test modules and available to downstream crates checking
//! their own two-field types.

use crate::sweep::{sweep_days, sweep_months, SweepConfig};
use std::fmt::Debug;

/// Assert the full relational operator surface exists for `T`.
///
/// Instantiating this function is the check: `Ord + Copy` certifies
/// `==`, `!=`, `<`, `>`, `<=`, and `>=` all resolve and return `bool`.
pub fn assert_total_order_api<T: Ord + Copy>() {}

/// Assert that `a == a` for every element.
pub fn assert_eq_reflexive<T: PartialEq + Copy + Debug>(values: &[T]) {
    for a in values {
        assert!(*a == *a, "equality not reflexive for {a:?}");
    }
}

/// Assert that `!(a < a)` for every element.
pub fn assert_lt_irreflexive<T: PartialOrd + Copy + Debug>(values: &[T]) {
    for a in values {
        assert!(!(*a < *a), "strict order not irreflexive for {a:?}");
    }
}

/// Assert that `a < b` implies `!(b < a)` for every element pair.
pub fn assert_lt_asymmetric<T: PartialOrd + Copy + Debug>(values: &[T]) {
    for a in values {
        for b in values {
            if *a < *b {
                assert!(
                    !(*b < *a),
                    "strict order not asymmetric: {a:?} < {b:?} and {b:?} < {a:?}"
                );
            }
        }
    }
}

/// Assert that `a < b && b < c` implies `a < c` for every element triple.
pub fn assert_lt_transitive<T: PartialOrd + Copy + Debug>(values: &[T]) {
    for a in values {
        for b in values {
            for c in values {
                if *a < *b && *b < *c {
                    assert!(
                        *a < *c,
                        "strict order not transitive: {a:?} < {b:?} < {c:?} but !({a:?} < {c:?})"
                    );
                }
            }
        }
    }
}

/// Assert the derived-operator consistency laws for every element pair:
/// `a < b` iff `b > a`, `a <= b` iff `!(b < a)`, `a != b` iff
/// `!(a == b)`, and `a >= b` iff `!(a < b)`.
pub fn assert_derived_operators_consistent<T: PartialOrd + Copy + Debug>(values: &[T]) {
    for a in values {
        for b in values {
            assert_eq!(
                *a < *b,
                *b > *a,
                "{a:?} < {b:?} disagrees with {b:?} > {a:?}"
            );
            assert_eq!(
                *a <= *b,
                !(*b < *a),
                "{a:?} <= {b:?} disagrees with !({b:?} < {a:?})"
            );
            assert_eq!(
                *a != *b,
                !(*a == *b),
                "{a:?} != {b:?} disagrees with !({a:?} == {b:?})"
            );
            assert_eq!(
                *a >= *b,
                !(*a < *b),
                "{a:?} >= {b:?} disagrees with !({a:?} < {b:?})"
            );
        }
    }
}

/// Assert the month sweep is clean, panicking with the full report
/// otherwise.
pub fn assert_months_lexicographic(config: &SweepConfig) {
    let report = sweep_months(config);
    assert!(report.is_clean(), "month sweep failed:\n{report}");
}

/// Assert the day sweep is clean, panicking with the full report
/// otherwise.
pub fn assert_days_lexicographic(config: &SweepConfig) {
    let report = sweep_days(config);
    assert!(report.is_clean(), "day sweep failed:\n{report}");
}

/// Run all order-compliance checks on a set of values plus both sweeps
/// under the given configuration.
pub fn run_full_order_compliance<T: Ord + Copy + Debug>(values: &[T], config: &SweepConfig) {
    assert_total_order_api::<T>();
    assert_eq_reflexive(values);
    assert_lt_irreflexive(values);
    assert_lt_asymmetric(values);
    assert_lt_transitive(values);
    assert_derived_operators_consistent(values);
    assert_months_lexicographic(config);
    assert_days_lexicographic(config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month_day::MonthDay;

    /// All valid month/day combinations with days capped to keep the
    /// cubic transitivity check fast.
    fn canonical_values() -> Vec<MonthDay> {
        let mut values = Vec::new();
        for month in 1..=12 {
            for day in [1, 2, 15, 30, 31] {
                values.push(MonthDay::new(month, day));
            }
        }
        values
    }

    #[test]
    fn month_day_passes_full_compliance() {
        run_full_order_compliance(&canonical_values(), &SweepConfig::default());
    }

    #[test]
    fn laws_hold_on_plain_integers() {
        let values: Vec<u8> = (0..32).collect();
        assert_eq_reflexive(&values);
        assert_lt_irreflexive(&values);
        assert_lt_asymmetric(&values);
        assert_lt_transitive(&values);
        assert_derived_operators_consistent(&values);
    }

    #[test]
    #[should_panic(expected = "not asymmetric")]
    fn asymmetry_violation_is_reported() {
        // A wrapper whose `<` is "fields differ" in both directions.
        #[derive(Clone, Copy, Debug, PartialEq)]
        struct Tangled(u8);
        impl PartialOrd for Tangled {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                if self.0 == other.0 {
                    Some(std::cmp::Ordering::Equal)
                } else {
                    Some(std::cmp::Ordering::Less)
                }
            }
        }
        assert_lt_asymmetric(&[Tangled(0), Tangled(1)]);
    }
}
