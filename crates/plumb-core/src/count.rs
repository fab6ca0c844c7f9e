//! The shared liveness tally.

use std::cell::Cell;
use std::fmt;

/// A shared tally of live constructor-balanced objects.
///
/// The counter is referenced — never owned — by every counted value in a
/// test scope. Counted values increment it from their constructors
/// (including copy construction) and decrement it from their destructor;
/// nothing else may mutate it. After any balanced construct/destroy
/// sequence the tally returns to its prior value, which is how the harness
/// detects skipped or duplicated destructions.
///
/// `Cell`-backed: the harness is single-threaded and synchronous, and the
/// non-`Sync` cell enforces that at the type level.
#[derive(Debug, Default)]
pub struct LiveCount {
    live: Cell<i64>,
}

impl LiveCount {
    /// Create a tally starting at zero.
    pub const fn new() -> Self {
        Self { live: Cell::new(0) }
    }

    /// Record one construction.
    pub fn increment(&self) {
        self.live.set(self.live.get() + 1);
    }

    /// Record one destruction.
    pub fn decrement(&self) {
        self.live.set(self.live.get() - 1);
    }

    /// Current number of live objects.
    pub fn get(&self) -> i64 {
        self.live.get()
    }
}

impl fmt::Display for LiveCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.live.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero() {
        let count = LiveCount::new();
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn increment_decrement_round_trip() {
        let count = LiveCount::new();
        count.increment();
        assert_eq!(count.get(), 1);
        count.decrement();
        assert_eq!(count.get(), 0);
    }

    proptest! {
        #[test]
        fn balanced_sequences_return_to_zero(n in 0usize..256) {
            let count = LiveCount::new();
            for _ in 0..n {
                count.increment();
            }
            prop_assert_eq!(count.get(), n as i64);
            for _ in 0..n {
                count.decrement();
            }
            prop_assert_eq!(count.get(), 0);
        }
    }
}
