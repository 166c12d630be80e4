/*!
The clause database, aka. the formula.

The database is an ordered, append-only, sequence of clauses.
Clauses are either original (given as part of the formula to be solved) or derived via resolution during [analysis](crate::procedures::analysis).

No clause is ever removed or mutated, so:
- A [key](ClauseKey) to a clause is valid for the lifetime of the database.
- Every clause ever derived remains available to propagation, and no derived clause can be silently 'forgotten'.

The cost is memory, which is monotonically non-decreasing across a solve.
See the [conflict limit](crate::config::Config::conflict_limit) for a way to bound this.

# Derivations

If [recorded](crate::config::Config::record_derivations), each derived clause is stored together with its [Derivation]: the clause in conflict and the sequence of resolution steps applied to it.
Replaying the derivation with [resolve](crate::procedures::analysis::resolve) reproduces the clause, which gives a check that each derived clause is a consequence of the formula.
*/

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause, ClauseSource},
        literal::CLiteral,
    },
    types::err::{self},
};

/// An instance of resolution on `pivot` with the antecedent of the pivot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionStep {
    /// The atom resolved on.
    pub pivot: Atom,

    /// The clause resolved with.
    pub antecedent: ClauseKey,
}

/// How a clause was derived.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Derivation {
    /// The clause in conflict from which the derivation began.
    pub conflict: Option<ClauseKey>,

    /// The steps of resolution, in order of application.
    pub steps: Vec<ResolutionStep>,
}

/// A clause, as stored in the database.
#[derive(Clone, Debug)]
pub struct DBClause {
    key: ClauseKey,
    clause: CClause,
    source: ClauseSource,
    derivation: Option<Derivation>,
}

impl DBClause {
    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The clause.
    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// The source of the clause.
    pub fn source(&self) -> ClauseSource {
        self.source
    }

    /// The derivation of the clause, if the clause was derived and the derivation recorded.
    pub fn derivation(&self) -> Option<&Derivation> {
        self.derivation.as_ref()
    }
}

impl Clause for DBClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.clause.iter().copied()
    }

    fn size(&self) -> usize {
        self.clause.len()
    }

    fn canonical(self) -> CClause {
        self.clause
    }
}

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Every clause, in order of addition.
    clauses: Vec<DBClause>,

    /// A count of original clauses.
    original_count: usize,
}

impl ClauseDB {
    /// Stores a clause and returns the key to the clause.
    ///
    /// Storage is reserved before the clause is stored, so on failure to allocate the database is unchanged and [StorageExhausted](err::ClauseDBError::StorageExhausted) is returned.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        derivation: Option<Derivation>,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        let key = ClauseKey::from_position(self.clauses.len())?;

        if self.clauses.try_reserve(1).is_err() {
            log::error!(target: targets::CLAUSE_DB, "Failed to reserve space for {key}");
            return Err(err::ClauseDBError::StorageExhausted);
        }

        log::debug!(target: targets::CLAUSE_DB, "{key}: {} ({source:?})", clause.as_string());

        if source == ClauseSource::Original {
            self.original_count += 1;
        }

        self.clauses.push(DBClause {
            key,
            clause,
            source,
            derivation,
        });

        Ok(key)
    }

    /// The clause with the given key.
    pub fn get(&self, key: &ClauseKey) -> Result<&DBClause, err::ClauseDBError> {
        match self.clauses.get(key.0 as usize) {
            Some(db_clause) => Ok(db_clause),
            None => Err(err::ClauseDBError::Missing),
        }
    }

    /// An iterator over every clause in the database, in order of addition.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.clauses.iter()
    }

    /// An iterator over the original clauses, in order of addition.
    pub fn original_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.clauses
            .iter()
            .filter(|db_clause| db_clause.source == ClauseSource::Original)
    }

    /// An iterator over the clauses derived by resolution, in order of derivation.
    pub fn learned_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.clauses
            .iter()
            .filter(|db_clause| db_clause.source == ClauseSource::Resolution)
    }

    /// A count of all clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// A count of clauses derived by resolution.
    pub fn learned_count(&self) -> usize {
        self.clauses.len() - self.original_count
    }
}

#[cfg(test)]
mod clause_db_tests {
    use super::*;

    #[test]
    fn append_only_keys() {
        let mut clause_db = ClauseDB::default();

        let first = clause_db.store(vec![1, 2], ClauseSource::Original, None);
        let second = clause_db.store(vec![-1], ClauseSource::Resolution, Some(Derivation::default()));

        assert_eq!(first, Ok(ClauseKey(0)));
        assert_eq!(second, Ok(ClauseKey(1)));

        assert_eq!(clause_db.original_count(), 1);
        assert_eq!(clause_db.learned_count(), 1);
        assert_eq!(clause_db.clause_count(), 2);

        assert!(clause_db.get(&ClauseKey(0)).is_ok_and(|c| c.clause() == &vec![1, 2]));
        assert!(clause_db.get(&ClauseKey(1)).is_ok_and(|c| c.derivation().is_some()));
        assert_eq!(clause_db.get(&ClauseKey(2)).err(), Some(err::ClauseDBError::Missing));

        assert_eq!(clause_db.learned_clauses().count(), 1);
        assert_eq!(clause_db.original_clauses().count(), 1);
    }
}
