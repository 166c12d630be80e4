/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is unused, as atoms start at 1.
- Each non-zero index of the vector is interpreted as an atom.

In other words, the canonical representation of a valuation 𝐯 is a vector *v* such that:
-  *v*\[a\] = Some(true) *if any only if* 𝐯(a) = true.
-  *v*\[a\] = Some(false) *if any only if* 𝐯(a) = false.
-  *v*\[a\] = None *if any only if* 𝐯(a) is undefined.

```rust
# use cdcl_sat::structures::valuation::Valuation;
let valuation = vec![None, None, Some(true), None];

assert_eq!(valuation.value_of(2), Some(true));
assert_eq!(valuation.atom_count(), 3);
assert_eq!(valuation.unvalued_atoms().collect::<Vec<_>>(), vec![1, 3]);
```

The [assignment store](crate::db::atom::AtomDB) is also a valuation, which is how [clause status](crate::structures::clause::Clause::status) is read during a solve.
*/

use crate::structures::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom under the valuation, if the atom has some value.
    ///
    /// Atoms outside the valuation have no value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// A count of the atoms in the valuation.
    fn atom_count(&self) -> usize;

    /// An iterator through atoms which do not have some value, in increasing order.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        (1..=self.atom_count() as Atom).filter(|atom| self.value_of(*atom).is_none())
    }

    /// An iterator through all (Atom, Value) pairs for which the atom has some value.
    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        (1..=self.atom_count() as Atom)
            .filter_map(|atom| self.value_of(atom).map(|value| (atom, value)))
    }
}

impl Valuation for [Option<bool>] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn atom_count(&self) -> usize {
        self.len().saturating_sub(1)
    }
}

impl Valuation for CValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.as_slice().value_of(atom)
    }

    fn atom_count(&self) -> usize {
        self.as_slice().atom_count()
    }
}
