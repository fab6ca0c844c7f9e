//! Test fixtures for plumb development.
//!
//! Reusable constructed-value types exercised by the slot and facade test
//! suites. Not published.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{Counted, MoveOnly, Triple};
