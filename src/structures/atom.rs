/*!
(The internal representation of) an atom (aka. a 'variable').

Each internal atom is a u32 *u* such that *u* ≥ 1 and every *u'* with 1 ≤ *u'* < *u* is also an atom.
In other words, the atoms of a context with *n* variables are exactly `1..=n`.

Index 0 of every per-atom structure is left unused.
This ensures every atom has both a positive and a negative literal when literals are signed integers, as `-0` and `0` are indistinguishable.

```rust
# use cdcl_sat::structures::atom::{Atom, ATOM_MAX};
let atoms = (1..=3).collect::<Vec<Atom>>();
assert!(atoms.iter().all(|atom| *atom <= ATOM_MAX));
```

# Notes
- External variable numbering (zero or one based) is translated to atoms when a clause is added, see [Indexing].
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, limited by the representation of literals as `i32`.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

/// The numbering used for variables outside of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indexing {
    /// Variables are `1..=n`, and a literal is a non-zero integer whose sign gives the polarity (as in DIMACS).
    OneBased,

    /// Variables are `0..n`.
    ///
    /// As `-0` is not representable, negation is by complement: a literal `v ≥ 0` is variable `v` with positive polarity and a literal `v < 0` is variable `!v` (that is, `-v - 1`) with negative polarity.
    ZeroBased,
}

impl Indexing {
    /// The atom of the given external variable.
    pub fn atom_of(&self, variable: usize) -> Option<Atom> {
        let atom = match self {
            Self::OneBased => variable,
            Self::ZeroBased => variable.checked_add(1)?,
        };
        match Atom::try_from(atom) {
            Ok(atom) if atom > 0 && atom <= ATOM_MAX => Some(atom),
            _ => None,
        }
    }

    /// The (external variable, polarity) pair encoded by an external integer literal, if the integer is a literal under the indexing.
    pub fn decode(&self, literal: i64) -> Option<(usize, bool)> {
        match self {
            Self::OneBased => match literal {
                0 => None,
                _ => Some((usize::try_from(literal.unsigned_abs()).ok()?, literal > 0)),
            },
            Self::ZeroBased => match literal >= 0 {
                true => Some((usize::try_from(literal).ok()?, true)),
                false => Some((usize::try_from(!literal).ok()?, false)),
            },
        }
    }
}

#[cfg(test)]
mod indexing_tests {
    use super::*;

    #[test]
    fn zero_based_negation() {
        assert_eq!(Indexing::ZeroBased.decode(0), Some((0, true)));
        assert_eq!(Indexing::ZeroBased.decode(-1), Some((0, false)));
        assert_eq!(Indexing::ZeroBased.decode(-3), Some((2, false)));
        assert_eq!(Indexing::ZeroBased.atom_of(0), Some(1));
    }

    #[test]
    fn one_based_zero() {
        assert_eq!(Indexing::OneBased.decode(0), None);
        assert_eq!(Indexing::OneBased.decode(-4), Some((4, false)));
        assert_eq!(Indexing::OneBased.atom_of(0), None);
        assert_eq!(Indexing::OneBased.atom_of(4), Some(4));
    }
}
