//! Relational outcomes and the per-fixture contract checker.
//!
//! A fixture supplies two values and the two independent expected
//! results, `a == b` and `a < b`. The other four relations (`!=`, `>`,
//! `<=`, `>=`) are derived from those booleans alone — never recomputed
//! from the fields — and every observed operator result is checked
//! against its derived expectation, in both argument orders.

use crate::month_day::MonthDay;
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;

/// The six relational operators, in the canonical order used by outcome
/// arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
}

impl Relation {
    /// All six relations, indexed like the outcome arrays.
    pub const ALL: [Relation; 6] = [
        Relation::Eq,
        Relation::Ne,
        Relation::Lt,
        Relation::Gt,
        Relation::Le,
        Relation::Ge,
    ];

    /// The operator's source symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The two independent expected outcomes for a fixture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelationExpectation {
    /// Expected result of `a == b`.
    pub equal: bool,
    /// Expected result of `a < b`.
    pub less: bool,
}

impl RelationExpectation {
    /// Expectation from the two independent booleans.
    pub const fn new(equal: bool, less: bool) -> Self {
        Self { equal, less }
    }

    /// The expectation for the same fixture with the arguments swapped.
    pub const fn reversed(self) -> Self {
        Self {
            equal: self.equal,
            less: !self.less && !self.equal,
        }
    }

    /// Expected results for all six relations, derived from `equal` and
    /// `less` alone.
    pub const fn outcomes(self) -> [bool; 6] {
        expected_outcomes(self.equal, self.less)
    }
}

/// Derive all six expected relational results from `equal` and `less`.
///
/// Indexed like [`Relation::ALL`]: `ne = !equal`, `gt = !less && !equal`,
/// `le = less || equal`, `ge = !less`.
pub const fn expected_outcomes(equal: bool, less: bool) -> [bool; 6] {
    [
        equal,
        !equal,
        less,
        !less && !equal,
        less || equal,
        !less,
    ]
}

/// Evaluate all six relational operators on a pair.
///
/// Indexed like [`Relation::ALL`].
pub fn observed_outcomes<T: PartialOrd>(a: &T, b: &T) -> [bool; 6] {
    [a == b, a != b, a < b, a > b, a <= b, a >= b]
}

/// Check one argument order of a fixture: every observed operator result
/// must match the expectation derived from `equal` and `less`.
///
/// On failure the returned [`OrderViolation`] names exactly which
/// relations disagreed.
pub fn check_relations<T: PartialOrd>(
    a: &T,
    b: &T,
    expectation: RelationExpectation,
) -> Result<(), OrderViolation> {
    let observed = observed_outcomes(a, b);
    if observed == expectation.outcomes() {
        Ok(())
    } else {
        Err(OrderViolation {
            expectation,
            observed,
        })
    }
}

/// A failed relation check: the observed operator results disagreed with
/// the expectation-derived results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderViolation {
    /// The expectation the fixture supplied.
    pub expectation: RelationExpectation,
    /// What the six operators actually returned, indexed like
    /// [`Relation::ALL`].
    pub observed: [bool; 6],
}

impl OrderViolation {
    /// The relations whose observed result disagreed with expectation.
    pub fn disagreements(&self) -> SmallVec<[Relation; 6]> {
        let expected = self.expectation.outcomes();
        Relation::ALL
            .iter()
            .copied()
            .zip(self.observed.iter().zip(expected.iter()))
            .filter(|(_, (observed, expected))| observed != expected)
            .map(|(relation, _)| relation)
            .collect()
    }
}

impl fmt::Display for OrderViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparison contract violated (expected equal={}, less={}):",
            self.expectation.equal, self.expectation.less
        )?;
        let expected = self.expectation.outcomes();
        for (i, relation) in Relation::ALL.iter().enumerate() {
            if self.observed[i] != expected[i] {
                write!(
                    f,
                    " [{relation} returned {}, expected {}]",
                    self.observed[i], expected[i]
                )?;
            }
        }
        Ok(())
    }
}

impl Error for OrderViolation {}

/// Two calendar values plus their expected comparison outcomes.
#[derive(Clone, Copy, Debug)]
pub struct ComparisonFixture {
    /// Left operand.
    pub a: MonthDay,
    /// Right operand.
    pub b: MonthDay,
    /// Expected `a == b` and `a < b`.
    pub expectation: RelationExpectation,
}

impl ComparisonFixture {
    /// Build a fixture from its operands and the two expected booleans.
    pub const fn new(a: MonthDay, b: MonthDay, equal: bool, less: bool) -> Self {
        Self {
            a,
            b,
            expectation: RelationExpectation::new(equal, less),
        }
    }

    /// Check the fixture in both argument orders.
    pub fn check(&self) -> Result<(), OrderViolation> {
        check_relations(&self.a, &self.b, self.expectation)?;
        check_relations(&self.b, &self.a, self.expectation.reversed())
    }
}

/// Constant-evaluable relation check over [`MonthDay`].
///
/// Evaluates the six relations in both argument orders from
/// [`MonthDay::same_fields`] and [`MonthDay::precedes`] alone and
/// compares them against the expectation derived from `equal` and
/// `less`. Usable in `const` assertions.
pub const fn relations_hold(a: MonthDay, b: MonthDay, equal: bool, less: bool) -> bool {
    direction_holds(a, b, equal, less) && direction_holds(b, a, equal, !less && !equal)
}

const fn direction_holds(a: MonthDay, b: MonthDay, equal: bool, less: bool) -> bool {
    let expected = expected_outcomes(equal, less);
    let observed = [
        a.same_fields(b),
        !a.same_fields(b),
        a.precedes(b),
        b.precedes(a),
        !b.precedes(a),
        !a.precedes(b),
    ];
    let mut i = 0;
    while i < 6 {
        if observed[i] != expected[i] {
            return false;
        }
        i += 1;
    }
    true
}
