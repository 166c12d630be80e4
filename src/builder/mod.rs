/*!
Tools for building a context.

A formula is given to a context by first introducing atoms and then adding clauses over those atoms.

- Clauses may be added [directly](GenericContext::add_clause), as anything which implements the [Clause] trait over the internal representation of literals.
- Or, clauses may be added from an [external representation](GenericContext::add_external_clause) as a slice of integers, under some [Indexing] of variables.

In either case the clause is checked before it is stored, and a clause containing a literal on an atom which is not part of the context is rejected with a [BuildError](err::BuildError).
So, malformed input is always rejected before a solve begins.

Clauses are stored as given.
In particular, duplicate literals are kept, and the empty clause is accepted (and will be found to be unsatisfiable on the first propagation of a solve).

```rust
# use cdcl_sat::context::Context;
# use cdcl_sat::config::Config;
# use cdcl_sat::structures::atom::Indexing;
# use cdcl_sat::types::err::{BuildError, ErrorKind};
let mut the_context = Context::from_config(Config::default());
assert!(the_context.fresh_atoms(3).is_ok());

assert!(the_context.add_external_clause(&[1, -3], Indexing::OneBased).is_ok());
assert!(the_context.add_external_clause(&[0, -3], Indexing::ZeroBased).is_ok());

assert_eq!(
    the_context.add_external_clause(&[4], Indexing::OneBased),
    Err(ErrorKind::Build(BuildError::UnknownVariable(4)))
);
```
*/

use crate::{
    context::{ContextState, GenericContext},
    db::ClauseKey,
    structures::{
        atom::{Atom, Indexing, ATOM_MAX},
        clause::{Clause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns a fresh atom.
    ///
    /// For a practical alternative, see [fresh_or_max_atom](GenericContext::fresh_or_max_atom).
    pub fn fresh_atom(&mut self) -> Result<Atom, err::BuildError> {
        self.atom_db.fresh_atom(false)
    }

    /// Returns a fresh atom, or the maximum atom.
    ///
    /// In short, a safe alternative to unwrapping the result of [fresh_atom](GenericContext::fresh_atom), by defaulting to the maximum limit of an atom.
    /// Note, if the maximum atom is returned then it is *not* part of the context, and a clause containing the atom will be rejected.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        match self.fresh_atom() {
            Ok(atom) => atom,
            Err(_) => ATOM_MAX,
        }
    }

    /// Returns `count` fresh atoms, in increasing order.
    pub fn fresh_atoms(&mut self, count: usize) -> Result<Vec<Atom>, err::BuildError> {
        let mut atoms = Vec::with_capacity(count);
        for _ in 0..count {
            atoms.push(self.fresh_atom()?);
        }
        Ok(atoms)
    }

    /// Returns a vector containing `count` fresh atoms as literals with positive polarity.
    pub fn fresh_literals(&mut self, count: usize) -> Result<Vec<CLiteral>, err::BuildError> {
        Ok(self
            .fresh_atoms(count)?
            .into_iter()
            .map(|atom| CLiteral::new(atom, true))
            .collect())
    }

    /// Returns a vector of `count` fresh literals, or as many as possible followed by the maximum atom as a literal.
    pub fn fresh_or_max_literals(&mut self, count: usize) -> Vec<CLiteral> {
        (0..count)
            .map(|_| CLiteral::new(self.fresh_or_max_atom(), true))
            .collect()
    }

    /// Adds a clause to the formula of the context, and returns the key of the clause.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseKey, ErrorKind> {
        if self.state != ContextState::Input {
            return Err(ErrorKind::from(err::StateError::SolveStarted));
        }

        if let Some(unknown) = clause
            .literals()
            .find(|literal| !self.atom_db.contains(literal.atom()))
        {
            log::warn!("Rejected {} as {unknown} is unknown", clause.as_string());
            return Err(ErrorKind::from(err::BuildError::UnknownVariable(
                unknown.as_int() as i64,
            )));
        }

        let key = self
            .clause_db
            .store(clause.canonical(), ClauseSource::Original, None)?;
        Ok(key)
    }

    /// Adds a clause given as a slice of integers, with variables numbered by `indexing`.
    ///
    /// Each integer is translated to a literal, and the clause is rejected if any integer is not the literal of some variable of the context.
    pub fn add_external_clause<I: Copy + Into<i64>>(
        &mut self,
        literals: &[I],
        indexing: Indexing,
    ) -> Result<ClauseKey, ErrorKind> {
        let mut clause = Vec::with_capacity(literals.len());

        for external in literals.iter().map(|literal| (*literal).into()) {
            let Some((variable, polarity)) = indexing.decode(external) else {
                return Err(ErrorKind::from(err::BuildError::UnrepresentableLiteral(
                    external,
                )));
            };

            match indexing.atom_of(variable) {
                Some(atom) if self.atom_db.contains(atom) => {
                    clause.push(CLiteral::new(atom, polarity));
                }
                _ => {
                    return Err(ErrorKind::from(err::BuildError::UnknownVariable(external)));
                }
            }
        }

        self.add_clause(clause)
    }
}
