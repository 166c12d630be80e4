/*!
Boolean constraint propagation (aka. unit propagation).

See [GenericContext::propagate] for the relevant context method.

# Overview

Propagation repeatedly scans the clause database, in order, and [evaluates](crate::structures::clause::Clause::status) each clause on the current valuation:
- A satisfied or unresolved clause is skipped.
- A unit clause forces its unvalued literal, which is assigned at the given level with the clause as antecedent, and the scan starts again from the first clause.
- A falsified clause is a conflict, and propagation stops at once with the key of the clause.

If a full scan completes without an assignment, a fixpoint has been reached without conflict.

Restarting the scan after every assignment is simple and correct, though each step costs a pass over the whole database.
A watched literal scheme could replace the scan without changing the result, as the fixpoint reached is the same.

# Example

```rust,ignore
match self.propagate(self.atom_db.level()) {
    Ok(()) => { /* fixpoint, decide or finish */ }
    Err(err::BCPError::Conflict(key)) => { /* analyse the conflict */ }
}
```
*/

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::clause::{Clause, ClauseStatus},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates to a fixpoint, or the first conflict.
    ///
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn propagate(&mut self, level: LevelIndex) -> Result<(), err::BCPError> {
        'scan: loop {
            for db_clause in self.clause_db.all_clauses() {
                match db_clause.status(&self.atom_db) {
                    ClauseStatus::Satisfied | ClauseStatus::Unresolved => {}

                    ClauseStatus::Unit(literal) => {
                        log::trace!(target: targets::PROPAGATION, "{} forces {literal}", db_clause.key());
                        self.atom_db.assign(literal, Some(db_clause.key()), level);
                        self.counters.total_propagations += 1;
                        continue 'scan;
                    }

                    ClauseStatus::Falsified => {
                        log::trace!(target: targets::PROPAGATION, "{} is falsified at level {level}", db_clause.key());
                        return Err(err::BCPError::Conflict(db_clause.key()));
                    }
                }
            }

            return Ok(());
        }
    }
}
