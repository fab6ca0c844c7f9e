//! Core traits and shared types for the plumb conformance harness.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! two abstractions every other plumb crate builds on: the [`Emplace`]
//! trait, which describes the constructor shapes a value type supports,
//! and [`LiveCount`], the shared liveness tally used to verify exact
//! construction/destruction pairing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod count;
pub mod emplace;

// Public re-exports for the primary API surface.
pub use count::LiveCount;
pub use emplace::Emplace;
