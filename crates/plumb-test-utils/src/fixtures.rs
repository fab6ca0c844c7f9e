//! Reusable constructed-value fixtures.
//!
//! Three standard value types for probing construction semantics:
//!
//! - [`Counted`] — pairs every constructor call (including clones) with a
//!   destructor call on a shared [`LiveCount`].
//! - [`Triple`] — a three-field aggregate with zero-arg, three-arg, and
//!   side-effect-tally constructor shapes.
//! - [`MoveOnly`] — a non-`Clone`, non-`Default` value; constructing it in
//!   place must move it, never clone or assign.

use plumb_core::{Emplace, LiveCount};
use std::cell::Cell;

/// Increments the shared tally on every construction and decrements it on
/// drop.
///
/// Clones count as constructions, so `n` live `Counted` values always mean
/// tally `n`. Used to assert exact construct/destroy pairing.
pub struct Counted<'a> {
    count: &'a LiveCount,
}

impl<'a> Counted<'a> {
    /// Construct and record one live object on `count`.
    pub fn new(count: &'a LiveCount) -> Self {
        count.increment();
        Self { count }
    }

    /// The tally this value reports to.
    pub fn count(&self) -> &'a LiveCount {
        self.count
    }
}

impl Clone for Counted<'_> {
    fn clone(&self) -> Self {
        self.count.increment();
        Self { count: self.count }
    }
}

impl Drop for Counted<'_> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

impl<'a> Emplace<(&'a LiveCount,)> for Counted<'a> {
    fn emplace((count,): (&'a LiveCount,)) -> Self {
        Counted::new(count)
    }
}

/// A three-field aggregate with several constructor shapes.
///
/// Field-wise equality; the four-argument shape additionally bumps an
/// external tally exactly once, making the constructor's side effect
/// observable from outside the object.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triple {
    a: i32,
    b: char,
    c: f64,
}

impl Triple {
    /// Build a triple from its three fields.
    pub const fn new(a: i32, b: char, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl Emplace<(i32, char, f64)> for Triple {
    fn emplace((a, b, c): (i32, char, f64)) -> Self {
        Triple::new(a, b, c)
    }
}

impl<'a> Emplace<(i32, char, f64, &'a Cell<u32>)> for Triple {
    fn emplace((a, b, c, tally): (i32, char, f64, &'a Cell<u32>)) -> Self {
        tally.set(tally.get() + 1);
        Triple::new(a, b, c)
    }
}

/// A value that can only be moved.
///
/// No `Clone`, no `Default`: the only way to place one in storage is to
/// move an existing value through the from-value constructor shape. Proves
/// that in-place construction never routes through clone or assignment.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveOnly(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counted_pairs_construct_and_drop() {
        let count = LiveCount::new();
        {
            let _a = Counted::new(&count);
            assert_eq!(count.get(), 1);
            let _b = _a.clone();
            assert_eq!(count.get(), 2);
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn triple_default_is_zeroed() {
        assert_eq!(Triple::default(), Triple::new(0, '\0', 0.0));
    }

    #[test]
    fn triple_side_effect_shape_bumps_tally_once() {
        let tally = Cell::new(0);
        let t: Triple = Emplace::emplace((42, 'x', 123.89, &tally));
        assert_eq!(t, Triple::new(42, 'x', 123.89));
        assert_eq!(tally.get(), 1);
    }
}
