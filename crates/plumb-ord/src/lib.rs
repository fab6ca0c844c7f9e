//! Lexicographic comparison contract checking.
//!
//! Verifies that a two-field calendar value type's six relational
//! operators form a consistent total order: equality is field-wise,
//! ordering compares the major field first and breaks ties on the minor
//! field, and the four remaining relations are derived from `==` and `<`
//! alone. Checks run three ways:
//!
//! - per-fixture, through [`check_relations`] and [`ComparisonFixture`],
//!   reporting exactly which relations disagreed;
//! - at compile time, through the `const fn` [`relations_hold`];
//! - combinatorially, through [`sweep::sweep_months`] /
//!   [`sweep::sweep_days`] over bounded field ranges and the law
//!   assertions in [`compliance`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compliance;
pub mod month_day;
pub mod relation;
pub mod sweep;

// Public re-exports for the primary API surface.
pub use month_day::MonthDay;
pub use relation::{
    check_relations, expected_outcomes, observed_outcomes, relations_hold, ComparisonFixture,
    OrderViolation, Relation, RelationExpectation,
};
pub use sweep::{sweep_days, sweep_months, SweepConfig, SweepReport};
