//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use cdcl_sat::structures::literal::{CLiteral, Literal};
//! # use cdcl_sat::structures::clause::{Clause, ClauseStatus};
//! let clause = vec![CLiteral::new(3, true),
//!                   CLiteral::new(1, false),
//!                   CLiteral::new(2, false)];
//!
//! assert_eq!(clause.size(), 3);
//!
//! let mut valuation = vec![None, Some(true), Some(true), None];
//! assert_eq!(clause.status(&valuation), ClauseStatus::Unit(3));
//!
//! valuation[3] = Some(false);
//! assert_eq!(clause.status(&valuation), ClauseStatus::Falsified);
//! ```
//!
//! - The empty clause is always falsified.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//! - Clauses may contain duplicate literals. These are kept, and are not counted twice when determining the [status](Clause::status) of a clause.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The status of a clause on some valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true.
    Satisfied,

    /// Every literal of the clause is false (including the case of the empty clause).
    Falsified,

    /// No literal is true and exactly one (distinct) literal has no value, and so must be true.
    Unit(CLiteral),

    /// No literal is true and at least two distinct literals have no value.
    Unresolved,
}

/// The clause trait.
pub trait Clause {
    /// An iterator over all literals in the clause, in the order given.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause, duplicates included.
    fn size(&self) -> usize;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// An iterator over all atoms in the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.literals().map(|literal| literal.atom())
    }

    /// Some string representation of the clause.
    fn as_string(&self) -> String {
        let mut the_string = String::from("(");
        for (index, literal) in self.literals().enumerate() {
            if index > 0 {
                the_string.push_str(" ∨ ");
            }
            the_string.push_str(format!("{literal}").as_str());
        }
        the_string.push(')');
        the_string
    }

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = self
            .literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !dimacs_string.is_empty() {
                dimacs_string.push(' ');
            }
            dimacs_string.push('0');
        }
        dimacs_string
    }

    /// The status of the clause on the given valuation.
    ///
    /// Literals are scanned in order, and the scan stops at the first true literal.
    /// Otherwise, the unvalued literals are counted up to distinctness, so a clause such as `[p, p, q]` is unit on `p` when `q` is false.
    fn status(&self, valuation: &(impl Valuation + ?Sized)) -> ClauseStatus {
        let mut unvalued = None;
        let mut open = false;

        for literal in self.literals() {
            match valuation.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => return ClauseStatus::Satisfied,

                Some(_) => {}

                None => match unvalued {
                    None => unvalued = Some(literal),
                    Some(first) if first == literal => {}
                    Some(_) => open = true,
                },
            }
        }

        match (unvalued, open) {
            (None, _) => ClauseStatus::Falsified,
            (Some(literal), false) => ClauseStatus::Unit(literal),
            (Some(_), true) => ClauseStatus::Unresolved,
        }
    }

    /// Whether some literal of the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &(impl Valuation + ?Sized)) -> bool {
        self.literals()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }
}

/// The implementation of a clause as a vector of literals.
pub type CClause = Vec<CLiteral>;

impl Clause for CClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for CLiteral {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(*self)
    }

    fn size(&self) -> usize {
        1
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause given as part of the formula.
    Original,

    /// A clause derived via resolution during conflict analysis.
    Resolution,
}

#[cfg(test)]
mod status_tests {
    use super::*;

    #[test]
    fn empty_is_falsified() {
        let clause: CClause = vec![];
        let valuation: Vec<Option<bool>> = vec![None];
        assert_eq!(clause.status(&valuation), ClauseStatus::Falsified);
    }

    #[test]
    fn satisfied_before_counting() {
        let clause = vec![-1, 2, 3];
        let valuation = vec![None, Some(true), Some(true), None];
        assert_eq!(clause.status(&valuation), ClauseStatus::Satisfied);
    }

    #[test]
    fn unresolved() {
        let clause = vec![1, 2, -3];
        let valuation = vec![None, Some(false), None, None];
        assert_eq!(clause.status(&valuation), ClauseStatus::Unresolved);
    }

    #[test]
    fn duplicate_unvalued_is_unit() {
        let clause = vec![1, 1];
        let valuation = vec![None, None];
        assert_eq!(clause.status(&valuation), ClauseStatus::Unit(1));

        let clause = vec![1, 1, 2];
        let valuation = vec![None, None, Some(false)];
        assert_eq!(clause.status(&valuation), ClauseStatus::Unit(1));
    }

    #[test]
    fn duplicate_false_is_not_premature() {
        // Two false occurrences of -2, and two distinct unvalued literals.
        let clause = vec![-2, 1, -2, 3];
        let valuation = vec![None, None, Some(true), None];
        assert_eq!(clause.status(&valuation), ClauseStatus::Unresolved);

        let clause = vec![-2, -2];
        assert_eq!(clause.status(&valuation), ClauseStatus::Falsified);
    }

    #[test]
    fn dimacs() {
        assert_eq!(vec![1, -2].as_dimacs(true), "1 -2 0");
        assert_eq!(vec![1, -2].as_dimacs(false), "1 -2");
        assert_eq!(CClause::new().as_dimacs(true), "0");
    }
}
