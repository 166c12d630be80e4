//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! cdcl_sat is a small conflict-driven clause-learning core: clauses are evaluated on a partial valuation, unit propagation is made to a fixpoint, conflicts are analysed by resolution to a clause asserting some literal, and a non-chronological backjump is made before the search continues.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), atoms are introduced, and clauses are added either [programatically](crate::context::GenericContext::add_clause) or from [integer literals](crate::context::GenericContext::add_external_clause).
//!
//! Internally, a solve is viewed in terms of manipulation of a pair of databases:
//! - A formula is stored in a [clause database](crate::db::clause), which is append-only.
//! - A valuation is stored in an [atom database](crate::db::atom), together with the antecedent and level of each value, and the order of assignment on a [trail](crate::db::trail).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their representation (atoms, literals, clauses, etc.)
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Solve a formula given as integer literals, in the style of DIMACS.
//!
//! ```rust
//! # use cdcl_sat::structures::atom::Indexing;
//! # use cdcl_sat::reports::Solution;
//! let clauses = vec![vec![1], vec![-1, 2], vec![-2, 3]];
//!
//! assert_eq!(
//!     cdcl_sat::solve(3, &clauses, Indexing::OneBased),
//!     Ok(Solution::Satisfiable(vec![true, true, true]))
//! );
//!
//! let clauses = [vec![0], vec![-1]];
//! assert_eq!(
//!     cdcl_sat::solve(1, &clauses, Indexing::ZeroBased),
//!     Ok(Solution::Unsatisfiable)
//! );
//! ```
//!
//! + Find (a count of) all valuations of some collection of atoms, by blocking each model found.
//!
//! ```rust
//! # use cdcl_sat::config::Config;
//! # use cdcl_sat::context::Context;
//! # use cdcl_sat::reports::Report;
//! # use cdcl_sat::structures::literal::{CLiteral, Literal};
//! let atoms = 3;
//! let mut blocking_clauses: Vec<Vec<CLiteral>> = Vec::default();
//!
//! loop {
//!     let mut the_context = Context::from_config(Config::default());
//!     assert!(the_context.fresh_atoms(atoms).is_ok());
//!     for clause in &blocking_clauses {
//!         assert!(the_context.add_clause(clause.clone()).is_ok());
//!     }
//!
//!     match the_context.solve() {
//!         Ok(Report::Satisfiable) => {}
//!         _ => break,
//!     }
//!
//!     let Ok(model) = the_context.model() else { break };
//!     let blocking = model
//!         .iter()
//!         .enumerate()
//!         .map(|(index, value)| CLiteral::new(index as u32 + 1, !value))
//!         .collect();
//!     blocking_clauses.push(blocking);
//! }
//!
//! assert_eq!(blocking_clauses.len(), 2_usize.pow(atoms as u32));
//! ```
//!
//! # Logs
//!
//! Logs are made throughout the library, with [targets](crate::misc::log::targets) for each procedure.
//! No logger is provided, and logs are compiled away in release builds.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

use crate::{
    config::Config,
    context::Context,
    reports::Solution,
    structures::atom::Indexing,
    types::err::ErrorKind,
};

/// Solves a formula of `variable_count` variables given as clauses of integer literals, with the default configuration.
///
/// See [Indexing] for the interpretation of integers as literals.
///
/// Malformed input (a literal on a variable outside of the given count, or an integer which is not a literal) is an error.
pub fn solve<C: AsRef<[i32]>>(
    variable_count: usize,
    clauses: &[C],
    indexing: Indexing,
) -> Result<Solution, ErrorKind> {
    solve_with_config(variable_count, clauses, indexing, Config::default())
}

/// As [solve], with the given configuration.
///
/// If a limit of the configuration is reached before satisfiability is determined, an [InvalidState](ErrorKind::InvalidState) error is returned.
pub fn solve_with_config<C: AsRef<[i32]>>(
    variable_count: usize,
    clauses: &[C],
    indexing: Indexing,
    config: Config,
) -> Result<Solution, ErrorKind> {
    let mut the_context = Context::from_config(config);
    the_context.fresh_atoms(variable_count)?;

    for clause in clauses {
        the_context.add_external_clause(clause.as_ref(), indexing)?;
    }

    let report = the_context.solve()?;
    log::info!(target: misc::log::targets::SOLVE, "{report}");

    the_context.solution()
}
