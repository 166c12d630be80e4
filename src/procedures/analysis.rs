/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and returns an asserting clause, together with the level to backjump to.

For the method, see: [conflict_analysis](GenericContext::conflict_analysis).

# Overview

If the conflict is at level zero then no decision contributed to the conflict, and the formula is unsatisfiable.

Otherwise, a working copy of the conflict clause is made, and the following step is repeated until exactly one literal of the working clause was assigned at the level of the conflict:
- Of the literals in the working clause assigned at the level of the conflict, take the literal assigned most recently.
- [Resolve](resolve) the working clause with the antecedent of the literal, on the atom of the literal.

The result is the clause at the first unique implication point of the conflict.
The single literal from the level of the conflict is the *asserted* literal, and is placed first in the clause.

# Termination

Each literal of the working clause from the level of the conflict other than the decision of the level has an antecedent whose other literals were all assigned *before* the literal.
So, resolving away the most recently assigned literal from the level replaces it with literals from the level which were assigned strictly earlier, and the greatest trail position of a literal from the level strictly decreases with each step.
As positions are bounded below, the loop terminates.

# Soundness

Each step is an instance of resolution on clauses of the database, and so the clause derived is a consequence of the formula.
The steps are recorded as a [Derivation], which may be [stored](crate::config::Config::record_derivations) with the clause.

# Example

```rust, ignore
match self.conflict_analysis(level, key)? {
    AnalysisResult::FundamentalConflict => { /* unsatisfiable */ }

    AnalysisResult::AssertingClause { clause, backjump_level, .. } => {
        self.clause_db.store(clause, ClauseSource::Resolution, None)?;
        self.backjump(backjump_level);
    }
}
```
*/

use crate::{
    context::GenericContext,
    db::{
        clause::{Derivation, ResolutionStep},
        ClauseKey, LevelIndex,
    },
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Possible 'Ok' results from conflict analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The conflict is at level zero, and so the formula is unsatisfiable.
    FundamentalConflict,

    /// The result of analysis is an asserting clause.
    AssertingClause {
        /// The clause, with the asserted literal first.
        clause: CClause,

        /// The literal asserted by the clause after a backjump.
        asserted: CLiteral,

        /// The highest level of a literal in the clause other than the asserted literal, or zero.
        backjump_level: LevelIndex,

        /// The resolution steps applied to the conflict clause.
        derivation: Derivation,
    },
}

/// Resolves two clauses on `pivot`.
///
/// The resolvent contains the literals of `first` followed by those of `second`, with any literal on `pivot` removed and duplicate literals dropped.
/// The resolvent is fresh, and shares nothing with either clause.
///
/// For the resolvent to be a consequence of the two clauses, `pivot` should appear with opposite polarities in the clauses.
///
/// Storage for the resolvent is reserved up front, and [StorageExhausted](err::ClauseDBError::StorageExhausted) is returned if the reservation fails.
///
/// ```rust
/// # use cdcl_sat::procedures::analysis::resolve;
/// let resolvent = resolve(&vec![1, -2, 3], &vec![2, 3, -4], 2);
/// assert_eq!(resolvent, Ok(vec![1, 3, -4]));
/// ```
pub fn resolve(
    first: &impl Clause,
    second: &impl Clause,
    pivot: Atom,
) -> Result<CClause, err::ClauseDBError> {
    let mut resolvent = CClause::default();
    if resolvent.try_reserve(first.size() + second.size()).is_err() {
        log::error!(target: targets::ANALYSIS, "Failed to reserve space for a resolvent");
        return Err(err::ClauseDBError::StorageExhausted);
    }

    for literal in first.literals().chain(second.literals()) {
        if literal.atom() != pivot && !resolvent.contains(&literal) {
            resolvent.push(literal);
        }
    }
    Ok(resolvent)
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Analyses the clause with the given key, which must be falsified on the current valuation, as a conflict at `level`.
    ///
    /// For documentation see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(
        &self,
        level: LevelIndex,
        key: ClauseKey,
    ) -> Result<AnalysisResult, err::ErrorKind> {
        if level == 0 {
            log::trace!(target: targets::ANALYSIS, "Conflict on {key} without a decision");
            return Ok(AnalysisResult::FundamentalConflict);
        }

        let conflict = self.clause_db.get(&key)?;
        log::trace!(target: targets::ANALYSIS, "Analysis of {key}: {}", conflict.as_string());

        let mut clause = CClause::default();
        if clause.try_reserve(conflict.size()).is_err() {
            log::error!(target: targets::ANALYSIS, "Failed to reserve space for analysis of {key}");
            return Err(err::ClauseDBError::StorageExhausted.into());
        }
        for literal in conflict.literals() {
            if !clause.contains(&literal) {
                clause.push(literal);
            }
        }

        let mut derivation = Derivation {
            conflict: Some(key),
            steps: Vec::default(),
        };

        loop {
            let mut at_level = 0;
            // (trail position, atom, antecedent) of the most recent assignment at the level
            let mut latest: Option<(usize, Atom, Option<ClauseKey>)> = None;

            for literal in clause.literals() {
                let atom = literal.atom();
                let Some(assignment) = self.atom_db.assignment(atom) else {
                    log::error!(target: targets::ANALYSIS, "{literal} has no value");
                    return Err(err::AnalysisError::UnvaluedLiteral(atom).into());
                };

                if assignment.level != level {
                    continue;
                }
                at_level += 1;

                match latest {
                    Some((position, ..)) if position > assignment.position => {}
                    _ => latest = Some((assignment.position, atom, assignment.antecedent)),
                }
            }

            match at_level {
                0 => {
                    log::error!(target: targets::ANALYSIS, "No literal from level {level}");
                    return Err(err::AnalysisError::NoAssertion.into());
                }
                1 => break,
                _ => {}
            }

            let Some((_, pivot, antecedent)) = latest else {
                return Err(err::AnalysisError::NoAssertion.into());
            };
            let Some(antecedent) = antecedent else {
                log::error!(target: targets::ANALYSIS, "{pivot} was decided");
                return Err(err::AnalysisError::MissingAntecedent(pivot).into());
            };

            clause = resolve(&clause, self.clause_db.get(&antecedent)?, pivot)?;
            if clause.is_empty() {
                return Err(err::AnalysisError::EmptyResolution.into());
            }

            derivation.steps.push(ResolutionStep { pivot, antecedent });
            log::trace!(target: targets::ANALYSIS, "Resolved on {pivot} with {antecedent}: {}", clause.as_string());
        }

        let Some(index) = clause
            .iter()
            .position(|literal| self.atom_db.level_of(literal.atom()) == Some(level))
        else {
            return Err(err::AnalysisError::NoAssertion.into());
        };
        clause.swap(0, index);
        let asserted = clause[0];

        let backjump_level = self.non_chronological_backjump_level(&clause)?;

        log::trace!(target: targets::ANALYSIS, "Learned {} asserting {asserted} at {backjump_level}", clause.as_string());

        Ok(AnalysisResult::AssertingClause {
            clause,
            asserted,
            backjump_level,
            derivation,
        })
    }
}

#[cfg(test)]
mod analysis_tests {
    use crate::{
        config::Config,
        context::Context,
        procedures::decision::DecisionOk,
        structures::clause::ClauseSource,
        types::err::BCPError,
    };

    use super::*;

    #[test]
    fn resolution_is_fresh() {
        let first = vec![-4, -2, -3];
        let second = vec![-1, 3];
        let resolvent = resolve(&first, &second, 3);

        assert_eq!(resolvent, Ok(vec![-4, -2, -1]));
        assert_eq!(first, vec![-4, -2, -3]);
        assert_eq!(second, vec![-1, 3]);
    }

    #[test]
    fn resolution_drops_duplicates() {
        assert_eq!(resolve(&vec![1, 2, 1], &vec![-2, 1], 2), Ok(vec![1]));
        assert_eq!(resolve(&vec![1], &vec![-1], 1), Ok(CClause::default()));
    }

    /// Decides 4 then 1, from which 2 and 3 are forced and the last clause is falsified.
    fn conflict_at_two() -> (Context, ClauseKey) {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.fresh_atoms(4).is_ok());

        for clause in [vec![-1, 2], vec![-1, 3], vec![-4, -2, -3]] {
            assert!(ctx.add_clause(clause).is_ok());
        }

        assert!(ctx.decide(4).is_ok());
        assert_eq!(ctx.propagate(1), Ok(()));
        assert!(ctx.decide(1).is_ok());

        match ctx.propagate(2) {
            Err(BCPError::Conflict(key)) => (ctx, key),
            Ok(()) => panic!("Expected a conflict"),
        }
    }

    #[test]
    fn first_uip() {
        let (ctx, key) = conflict_at_two();
        assert_eq!(key, ClauseKey(2));

        let Ok(AnalysisResult::AssertingClause {
            clause,
            asserted,
            backjump_level,
            derivation,
        }) = ctx.conflict_analysis(2, key)
        else {
            panic!("Expected an asserting clause");
        };

        assert_eq!(clause, vec![-1, -4]);
        assert_eq!(asserted, -1);
        assert_eq!(backjump_level, 1);

        assert_eq!(derivation.conflict, Some(key));
        assert_eq!(
            derivation.steps,
            vec![
                ResolutionStep {
                    pivot: 3,
                    antecedent: ClauseKey(1)
                },
                ResolutionStep {
                    pivot: 2,
                    antecedent: ClauseKey(0)
                },
            ]
        );
    }

    /// Replays the derivation of a conflict at `level`, asserting the latest trail position of a literal from the level strictly decreases with each step.
    fn assert_measure_decreases(
        ctx: &Context,
        key: ClauseKey,
        level: LevelIndex,
        derivation: &Derivation,
    ) {
        let latest_at_level = |clause: &CClause| {
            clause
                .iter()
                .filter_map(|literal| ctx.atom_db.assignment(literal.atom()))
                .filter(|assignment| assignment.level == level)
                .map(|assignment| assignment.position)
                .max()
        };

        let Ok(conflict) = ctx.clause_db.get(&key) else {
            panic!("Missing conflict clause");
        };
        let mut working = conflict.clause().clone();
        let mut measure = latest_at_level(&working);

        for step in &derivation.steps {
            let Ok(antecedent) = ctx.clause_db.get(&step.antecedent) else {
                panic!("Missing antecedent");
            };
            let Ok(resolvent) = resolve(&working, antecedent, step.pivot) else {
                panic!("Resolution failed");
            };
            working = resolvent;

            let next = latest_at_level(&working);
            assert!(next.is_some());
            assert!(next < measure);
            measure = next;
        }
    }

    #[test]
    fn latest_position_decreases() {
        let (ctx, key) = conflict_at_two();
        let Ok(AnalysisResult::AssertingClause { derivation, .. }) = ctx.conflict_analysis(2, key)
        else {
            panic!("Expected an asserting clause");
        };

        assert_eq!(derivation.steps.len(), 2);
        assert_measure_decreases(&ctx, key, 2, &derivation);
    }

    #[test]
    fn latest_position_decreases_throughout_search() {
        // Four pigeons into three holes, where atom 3p + h + 1 places pigeon p in hole h.
        let placed = |pigeon: i32, hole: i32| pigeon * 3 + hole + 1;

        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.fresh_atoms(12).is_ok());
        for pigeon in 0..4 {
            assert!(ctx.add_clause((0..3).map(|hole| placed(pigeon, hole)).collect::<CClause>()).is_ok());
        }
        for hole in 0..3 {
            for first in 0..4 {
                for second in (first + 1)..4 {
                    assert!(ctx.add_clause(vec![-placed(first, hole), -placed(second, hole)]).is_ok());
                }
            }
        }

        let mut analyses = 0;
        loop {
            match ctx.propagate(ctx.atom_db.level()) {
                Ok(()) => match ctx.make_decision() {
                    Ok(DecisionOk::Literal(literal)) => assert!(ctx.decide(literal).is_ok()),
                    otherwise => panic!("Unexpected decision {otherwise:?}"),
                },

                Err(BCPError::Conflict(key)) => {
                    let level = ctx.atom_db.level();
                    match ctx.conflict_analysis(level, key) {
                        Ok(AnalysisResult::FundamentalConflict) => break,

                        Ok(AnalysisResult::AssertingClause {
                            clause,
                            backjump_level,
                            derivation,
                            ..
                        }) => {
                            assert_measure_decreases(&ctx, key, level, &derivation);
                            analyses += 1;

                            assert!(ctx
                                .clause_db
                                .store(clause, ClauseSource::Resolution, None)
                                .is_ok());
                            ctx.backjump(backjump_level);
                        }

                        Err(e) => panic!("Analysis failed: {e:?}"),
                    }
                }
            }
        }

        assert!(analyses > 0);
    }

    #[test]
    fn fundamental_conflict() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.fresh_atoms(1).is_ok());
        assert!(ctx.add_clause(vec![1]).is_ok());
        assert!(ctx.add_clause(vec![-1]).is_ok());

        let Err(BCPError::Conflict(key)) = ctx.propagate(0) else {
            panic!("Expected a conflict");
        };
        assert_eq!(ctx.conflict_analysis(0, key), Ok(AnalysisResult::FundamentalConflict));
    }
}
