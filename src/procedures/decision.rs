/*!
Methods for choosing the value of an atom.

# Overview

The core decision procedure is straightforward:
- Find the lowest atom in the context which is not assigned a value, and assign either true or false.

```rust,ignore
self.atom_db.unvalued_atoms().next();
```

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.

# Polarity

The value given to a chosen atom is determined by [Config::polarity](crate::config::Config::polarity):
- [Negative](Polarity::Negative) and [Positive](Polarity::Positive) give a fixed value.
- [Saved](Polarity::Saved) gives the value the atom last held, and false if the atom never held a value.
- [Random](Polarity::Random) gives true with probability [Config::polarity_lean](crate::config::Config::polarity_lean), using the rng of the context.

# Custom deciders

The decision policy may be replaced in full by [setting](GenericContext::set_decider) a [Decider].
A decider is given read access to the assignment store and must return a literal on an atom without a value, or nothing if every atom has a value.

```rust
# use cdcl_sat::context::Context;
# use cdcl_sat::config::Config;
# use cdcl_sat::procedures::decision::LowestAtom;
# use cdcl_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());
the_context.set_decider(Box::new(LowestAtom { polarity: true }));

let p = the_context.fresh_or_max_atom();
assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);
assert_eq!(the_context.value_of(p), Some(true));
```
*/

use rand::Rng;

use crate::{
    config::Polarity,
    context::GenericContext,
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
    types::err::ErrorKind,
};

/// A policy for choosing decisions.
pub trait Decider {
    /// A literal on some atom without a value, or none if every atom has a value.
    fn choose_literal(&mut self, atom_db: &AtomDB) -> Option<CLiteral>;
}

/// A decider which always chooses the lowest atom without a value, with a fixed polarity.
pub struct LowestAtom {
    pub polarity: bool,
}

impl Decider for LowestAtom {
    fn choose_literal(&mut self, atom_db: &AtomDB) -> Option<CLiteral> {
        let atom = atom_db.unvalued_atoms().next()?;
        Some(CLiteral::new(atom, self.polarity))
    }
}

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was chosen for some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Replaces the configured decision policy with the given decider.
    pub fn set_decider(&mut self, decider: Box<dyn Decider>) {
        self.decider = Some(decider);
    }

    /// Chooses a decision, without making the decision.
    ///
    /// An error is returned if a custom decider chooses a literal on an unknown atom or an atom which already has a value, or chooses nothing while some atom has no value.
    ///
    /// ```rust, ignore
    /// match self.make_decision()? {
    ///     DecisionOk::Literal(literal) => self.decide(literal)?,
    ///     DecisionOk::Exhausted => break,
    /// }
    /// ```
    pub fn make_decision(&mut self) -> Result<DecisionOk, ErrorKind> {
        let chosen = match &mut self.decider {
            Some(decider) => decider.choose_literal(&self.atom_db),

            None => match self.atom_db.unvalued_atoms().next() {
                Some(atom) => {
                    // Takes ownership of rng to satisfy the borrow checker.
                    let mut rng = std::mem::take(&mut self.rng);
                    let value = self.polarity_of(atom, &mut rng);
                    self.rng = rng;
                    Some(CLiteral::new(atom, value))
                }
                None => None,
            },
        };

        match chosen {
            Some(literal) if !self.is_decidable(literal) => {
                log::error!(target: targets::DECISION, "Invalid decision {literal}");
                Err(ErrorKind::InvalidDecision(literal))
            }

            Some(literal) => Ok(DecisionOk::Literal(literal)),

            None if !self.atom_db.is_complete() => {
                log::error!(target: targets::DECISION, "No decision with atoms left to value");
                Err(ErrorKind::InvalidState)
            }

            None => Ok(DecisionOk::Exhausted),
        }
    }

    /// Makes a decision, by opening a fresh level on the trail and assigning the literal without an antecedent.
    ///
    /// If the atom of the literal is not part of the context, or already has a value, the context is unchanged and [InvalidDecision](ErrorKind::InvalidDecision) is returned.
    pub fn decide(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        if !self.is_decidable(literal) {
            log::error!(target: targets::DECISION, "Invalid decision {literal}");
            return Err(ErrorKind::InvalidDecision(literal));
        }

        self.atom_db.trail.open_level();
        let level = self.atom_db.level();
        log::trace!(target: targets::DECISION, "Decision {literal} at level {level}");

        self.atom_db.assign(literal, None, level);
        self.counters.total_decisions += 1;
        self.make_callback_decision(literal);
        Ok(())
    }

    /// True if the atom of the literal is part of the context and has no value.
    fn is_decidable(&self, literal: CLiteral) -> bool {
        self.atom_db.contains(literal.atom()) && self.atom_db.value_of(literal.atom()).is_none()
    }

    /// The value to give an atom chosen for a decision, following the configured polarity.
    fn polarity_of(&self, atom: Atom, rng: &mut impl Rng) -> bool {
        match self.config.polarity.value {
            Polarity::Negative => false,
            Polarity::Positive => true,
            Polarity::Saved => self.atom_db.previous_value_of(atom),
            Polarity::Random => rng.random_bool(self.config.polarity_lean.bounded_value()),
        }
    }
}
