//! Plumb: a conformance harness for value-semantics primitives.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all plumb sub-crates. For most users, adding `plumb` as a single
//! dependency is sufficient.
//!
//! The harness validates two contracts for value types:
//!
//! - **in-place construction** — building, reading, and destroying
//!   objects inside caller-supplied storage, with exact lifetime and
//!   liveness-count tracking;
//! - **comparison consistency** — verifying that a two-field value's six
//!   relational operators form a lexicographic total order, per fixture,
//!   combinatorially over bounded ranges, and at compile time.
//!
//! # Quick start
//!
//! ```rust
//! use plumb::prelude::*;
//!
//! // In-place construction: a slot is uninitialised storage, and
//! // `construct` begins a lifetime inside it.
//! let mut slot = Slot::<i32>::empty();
//! let value = slot.construct((42,));
//! assert_eq!(*value, 42);
//!
//! // Comparison contract: two calendar values, the two independent
//! // expected outcomes, all six relations checked in both orders.
//! let fixture = ComparisonFixture::new(
//!     MonthDay::new(1, 1),
//!     MonthDay::new(2, 1),
//!     false,
//!     true,
//! );
//! assert!(fixture.check().is_ok());
//!
//! // Combinatorial verification over the bounded calendar ranges.
//! let report = sweep_months(&SweepConfig::default());
//! assert!(report.is_clean());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plumb-core` | The `Emplace` trait and `LiveCount` |
//! | [`storage`] | `plumb-slot` | `Slot`, `DualSlot`, `SlotBlock` |
//! | [`ord`] | `plumb-ord` | `MonthDay`, relation checking, sweeps, compliance |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core traits and shared types (`plumb-core`).
///
/// The [`types::Emplace`] trait describes constructor shapes;
/// [`types::LiveCount`] is the shared liveness tally.
pub use plumb_core as types;

/// Storage slots and in-place construction (`plumb-slot`).
///
/// [`storage::Slot`] for single locations, [`storage::DualSlot`] for
/// union-semantics overlapping storage, [`storage::SlotBlock`] for
/// allocator-backed runs of slots.
pub use plumb_slot as storage;

/// Comparison contract checking (`plumb-ord`).
///
/// [`ord::MonthDay`] and the relation checker, exhaustive sweeps, and
/// the [`ord::compliance`] law assertions.
pub use plumb_ord as ord;

/// Common imports for typical plumb usage.
///
/// ```rust
/// use plumb::prelude::*;
/// ```
pub mod prelude {
    pub use plumb_core::{Emplace, LiveCount};
    pub use plumb_ord::{
        check_relations, relations_hold, sweep_days, sweep_months, ComparisonFixture, MonthDay,
        OrderViolation, Relation, RelationExpectation, SweepConfig, SweepReport,
    };
    pub use plumb_slot::{DualSlot, Slot, SlotBlock};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use plumb_test_utils::Counted;

    #[test]
    fn facade_exposes_both_harness_halves() {
        let count = LiveCount::new();
        let mut slot = Slot::<Counted<'_>>::empty();
        slot.construct((&count,));
        assert_eq!(count.get(), 1);
        // Dropping the slot abandons the value without a destructor call.
        drop(slot);
        assert_eq!(count.get(), 1);

        assert!(sweep_days(&SweepConfig::default()).is_clean());
    }
}
