/*!
The assignment store, a database of atom related things.

# Assignments

An [Assignment] exists for an atom while the atom has a value, and records:
- The value of the atom.
- The antecedent of the value: the key of the clause which forced the value via propagation, or nothing if the value is a decision.
- The decision level at which the value was set.
- The position of the assignment on the [trail](crate::db::trail).

Assignments are stored in a vector indexed by atoms, and this database is the only owner of an assignment.
When a value is dropped (e.g. on a backjump) the slot of the atom is overwritten, and the record is gone.
As antecedents are [keys](ClauseKey) to an append-only database, no clause is lost with the record.

# Saved phase

Whenever an atom loses its value, the value is kept as the 'previous' value of the atom.
This is used by the [saved](crate::config::Polarity::Saved) decision polarity.
*/

use crate::{
    db::{trail::Trail, ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::{self},
};

/// The value of an atom, together with how and when the value was set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// The value of the atom.
    pub value: bool,

    /// The clause which forced the value, or none if the value was decided.
    pub antecedent: Option<ClauseKey>,

    /// The decision level at which the value was set.
    pub level: LevelIndex,

    /// The position of the assignment on the trail.
    pub position: usize,
}

impl Assignment {
    /// True if the value was decided, rather than forced.
    pub fn is_decision(&self) -> bool {
        self.antecedent.is_none()
    }
}

/// The assignment store.
#[derive(Default)]
pub struct AtomDB {
    /// The assignment of each atom, if any, indexed by atom.
    assignments: Vec<Option<Assignment>>,

    /// The value each atom last held, indexed by atom.
    previous_values: Vec<bool>,

    /// The order of assignments.
    pub trail: Trail,
}

impl AtomDB {
    /// A database with no atoms.
    pub fn new() -> Self {
        Self {
            // Index zero is unused, as atoms start at one.
            assignments: vec![None],
            previous_values: vec![false],
            trail: Trail::default(),
        }
    }

    /// Adds a fresh atom to the database, with the given previous value.
    pub fn fresh_atom(&mut self, previous_value: bool) -> Result<Atom, err::BuildError> {
        let atom = match Atom::try_from(self.assignments.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(err::BuildError::AtomsExhausted),
        };
        self.assignments.push(None);
        self.previous_values.push(previous_value);
        Ok(atom)
    }

    /// True if the atom is part of the database.
    pub fn contains(&self, atom: Atom) -> bool {
        atom != 0 && (atom as usize) < self.assignments.len()
    }

    /// The assignment of an atom, if the atom has a value.
    pub fn assignment(&self, atom: Atom) -> Option<&Assignment> {
        self.assignments.get(atom as usize)?.as_ref()
    }

    /// The decision level at which the atom was assigned a value, if the atom has a value.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.assignment(atom).map(|assignment| assignment.level)
    }

    /// The value the atom last held, or the initial previous value given to the atom.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_values
            .get(atom as usize)
            .copied()
            .unwrap_or_default()
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// True if every atom has a value.
    pub fn is_complete(&self) -> bool {
        self.trail.literals.len() == self.atom_count()
    }

    /// Assigns the atom of `literal` the polarity of `literal`, at the given level.
    ///
    /// A decision is made by opening a level on the trail and then assigning without an antecedent.
    ///
    /// # Soundness
    /// The atom must not have a value, and the level must be the current level of the trail.
    pub fn assign(&mut self, literal: CLiteral, antecedent: Option<ClauseKey>, level: LevelIndex) {
        debug_assert!(self.value_of(literal.atom()).is_none());
        debug_assert_eq!(level, self.trail.level());

        let assignment = Assignment {
            value: literal.polarity(),
            antecedent,
            level,
            position: self.trail.literals.len(),
        };

        match antecedent {
            Some(key) => log::trace!(target: targets::VALUATION, "{literal} at {level} via {key}"),
            None => log::trace!(target: targets::VALUATION, "{literal} at {level} by decision"),
        }

        self.assignments[literal.atom() as usize] = Some(assignment);
        self.trail.store_assignment(literal);
    }

    /// Drops the value of the atom, keeping the value as the previous value of the atom.
    ///
    /// # Soundness
    /// Does not update the trail.
    pub fn drop_value(&mut self, atom: Atom) {
        if let Some(assignment) = self.assignments[atom as usize].take() {
            self.previous_values[atom as usize] = assignment.value;
        }
    }

    /// Drops the value of every atom assigned at a level above `level`, and returns the count of values dropped.
    pub fn unassign_above(&mut self, level: LevelIndex) -> usize {
        let dropped = self.trail.clear_assignments_above(level);
        for literal in &dropped {
            self.drop_value(literal.atom());
        }
        dropped.len()
    }

    /// The valuation of the database in canonical form.
    pub fn valuation(&self) -> CValuation {
        self.assignments
            .iter()
            .map(|assignment| assignment.map(|a| a.value))
            .collect()
    }

    /// The valuation as a string of literals, for logs and the like.
    pub fn valuation_string(&self) -> String {
        self.atom_valued_pairs()
            .map(|(atom, value)| CLiteral::new(atom, value).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Valuation for AtomDB {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.assignment(atom).map(|assignment| assignment.value)
    }

    fn atom_count(&self) -> usize {
        self.assignments.len() - 1
    }
}
