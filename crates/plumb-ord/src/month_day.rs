//! The two-field calendar value type under contract.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A month–day pair ordered lexicographically.
///
/// The month is the major field and the day the minor: two values compare
/// by month first, and equal months fall back to the day. Equality is
/// field-wise. Both comparisons are `const fn`, total over the full
/// `u8 × u8` domain, and free of side effects — they never panic, even on
/// values outside the calendar bounds.
///
/// Immutable once created. Calendar validity (month 1–12, day 1–31) is a
/// separate query, [`is_valid`](MonthDay::is_valid); it does not gate
/// comparison.
#[derive(Clone, Copy, Debug)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Create a month–day pair. Values outside the calendar bounds are
    /// representable and compare normally; see
    /// [`is_valid`](MonthDay::is_valid).
    pub const fn new(month: u8, day: u8) -> Self {
        Self { month, day }
    }

    /// The major field.
    pub const fn month(self) -> u8 {
        self.month
    }

    /// The minor field.
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Field-wise equality: both fields pairwise equal.
    pub const fn same_fields(self, other: Self) -> bool {
        self.month == other.month && self.day == other.day
    }

    /// Lexicographic strict ordering: month first, day breaks ties.
    pub const fn precedes(self, other: Self) -> bool {
        if self.month != other.month {
            self.month < other.month
        } else {
            self.day < other.day
        }
    }

    /// Whether both fields are within calendar bounds
    /// (month 1–12, day 1–31).
    pub const fn is_valid(self) -> bool {
        self.month >= 1 && self.month <= 12 && self.day >= 1 && self.day <= 31
    }
}

impl PartialEq for MonthDay {
    fn eq(&self, other: &Self) -> bool {
        self.same_fields(*other)
    }
}

impl Eq for MonthDay {}

impl Ord for MonthDay {
    fn cmp(&self, other: &Self) -> Ordering {
        self.month
            .cmp(&other.month)
            .then(self.day.cmp(&other.day))
    }
}

impl PartialOrd for MonthDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for MonthDay {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.month.hash(state);
        self.day.hash(state);
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.day)
    }
}
