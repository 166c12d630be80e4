//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! [solve](GenericContext::solve) is a loop over four states, beginning with propagation at level zero:
//!
//! - *Propagating*: [propagate](crate::procedures::bcp) to a fixpoint at the current level.
//!   + If some clause is falsified, analyse the clause.
//!   + Otherwise, if every atom has a value, the formula is satisfiable.
//!   + Otherwise, make a decision.
//! - *Deciding*: [make a decision](crate::procedures::decision), opening a fresh level, and propagate.
//! - *Analysing*: [analyse](crate::procedures::analysis) the falsified clause.
//!   + If the conflict is at level zero, the formula is unsatisfiable.
//!   + Otherwise, store the clause learned and backjump.
//! - *Backjumping*: [backjump](crate::procedures::backjump) to the level of the clause learned, and propagate.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +----------+
//!   +-------| Deciding |
//!   |       +----------+
//!   |             ⌃
//!   |             | if the valuation is partial
//!   |             |
//!   ⌄   +-------------+
//! --+-->| Propagating |-----> satisfiable, if the valuation is complete
//!   ⌃   +-------------+
//!   |             |
//!   |             | if some clause is falsified
//!   |             ⌄
//!   |       +-----------+
//!   |       | Analysing |-----> unsatisfiable, if the conflict is at level zero
//!   |       +-----------+
//!   |             |
//!   |             ⌄
//!   |      +-------------+
//!   +------| Backjumping |
//!          +-------------+
//! ```
//!
//! # Interruption
//!
//! A solve may be interrupted by a [conflict limit](crate::config::Config::conflict_limit), a [time limit](crate::config::Config::time_limit), or the [terminate callback](crate::context::callbacks::CallbackTerminate).
//! Each is checked only before propagation or a decision, and never during analysis or a backjump.
//! So, an interrupted context has a consistent valuation and database, with every learned clause stored.
//!
//! # Example
//!
//! ```rust
//! # use cdcl_sat::context::Context;
//! # use cdcl_sat::config::Config;
//! # use cdcl_sat::reports::Report;
//! # use cdcl_sat::structures::atom::Indexing;
//! let mut the_context = Context::from_config(Config::default());
//! assert!(the_context.fresh_atoms(2).is_ok());
//!
//! for clause in [[1, 2], [1, -2], [-1, 2], [-1, -2]] {
//!     assert!(the_context.add_external_clause(&clause, Indexing::OneBased).is_ok());
//! }
//!
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! assert!(the_context.counters.learned_clauses > 0);
//! assert!(the_context.solve().is_err());
//! ```
//!
//! # Literature
//!
//! See [Decision Procedures](https://doi.org/10.1007/978-3-662-50497-0), Chapter 2, and the [Handbook of satisfiability](https://www.iospress.com/catalog/books/handbook-of-satisfiability-2), Chapters 3 and 4.

use crate::{
    context::{ContextState, GenericContext, Interrupt},
    db::ClauseKey,
    misc::log::targets::{self},
    procedures::{analysis::AnalysisResult, decision::DecisionOk},
    reports::Report,
    structures::{
        clause::{Clause, ClauseSource},
        valuation::Valuation,
    },
    types::err::{self},
};

/// The states of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchState {
    Propagating,
    Deciding,
    Analysing(ClauseKey),
    Backjumping(crate::db::LevelIndex),
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context, unless interrupted.
    ///
    /// A context may be solved only once, and an error is returned on any further attempt.
    ///
    /// For documentation see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Input => {}
            ContextState::Solving => return Err(err::StateError::SolveStarted.into()),
            _ => return Err(err::StateError::AlreadySolved.into()),
        }
        self.state = ContextState::Solving;

        log::info!(target: targets::SOLVE, "Solve of {} atoms and {} clauses", self.atom_db.atom_count(), self.clause_db.clause_count());

        let total_time = std::time::Instant::now();
        let mut search = SearchState::Propagating;

        'solve_loop: loop {
            self.counters.total_iterations += 1;
            self.counters.time = total_time.elapsed();

            if matches!(search, SearchState::Propagating | SearchState::Deciding) {
                if let Some(interrupt) = self.interrupt() {
                    log::info!(target: targets::SOLVE, "Interrupted: {interrupt:?}");
                    self.state = ContextState::Interrupted(interrupt);
                    break 'solve_loop;
                }
            }

            search = match search {
                SearchState::Propagating => match self.propagate(self.atom_db.level()) {
                    Ok(()) if self.atom_db.is_complete() => {
                        self.state = ContextState::Satisfiable;
                        break 'solve_loop;
                    }

                    Ok(()) => SearchState::Deciding,

                    Err(err::BCPError::Conflict(key)) => {
                        self.counters.total_conflicts += 1;
                        SearchState::Analysing(key)
                    }
                },

                SearchState::Deciding => match self.make_decision()? {
                    DecisionOk::Literal(literal) => {
                        self.decide(literal)?;
                        SearchState::Propagating
                    }

                    DecisionOk::Exhausted => {
                        self.state = ContextState::Satisfiable;
                        break 'solve_loop;
                    }
                },

                SearchState::Analysing(key) => {
                    let level = self.atom_db.level();
                    match self.conflict_analysis(level, key)? {
                        AnalysisResult::FundamentalConflict => {
                            self.state = ContextState::Unsatisfiable(key);
                            break 'solve_loop;
                        }

                        AnalysisResult::AssertingClause {
                            clause,
                            backjump_level,
                            derivation,
                            ..
                        } => {
                            log::debug!(target: targets::SOLVE, "Learned {} at level {level}", clause.as_string());
                            self.make_callback_learned(&clause, level, backjump_level);

                            let derivation = match self.config.record_derivations.value {
                                true => Some(derivation),
                                false => None,
                            };
                            self.clause_db
                                .store(clause, ClauseSource::Resolution, derivation)?;
                            self.counters.learned_clauses += 1;

                            SearchState::Backjumping(backjump_level)
                        }
                    }
                }

                SearchState::Backjumping(level) => {
                    self.backjump(level);
                    SearchState::Propagating
                }
            };
        }

        self.counters.time = total_time.elapsed();
        if self.state == ContextState::Satisfiable {
            log::debug!(target: targets::SOLVE, "Model: {}", self.atom_db.valuation_string());
        }
        log::info!(target: targets::SOLVE, "{} after {} conflicts and {} decisions", self.report(), self.counters.total_conflicts, self.counters.total_decisions);

        Ok(self.report())
    }

    /// The reason to stop the solve, if any.
    fn interrupt(&mut self) -> Option<Interrupt> {
        if self
            .config
            .conflict_limit
            .is_some_and(|limit| self.counters.total_conflicts >= limit)
        {
            return Some(Interrupt::ConflictLimit);
        }

        if self
            .config
            .time_limit
            .is_some_and(|limit| self.counters.time >= limit)
        {
            return Some(Interrupt::TimeUp);
        }

        if self.check_callback_terminate() {
            return Some(Interrupt::Terminated);
        }

        None
    }
}
