//! Databases for holding information relevant to a solve.
//!
//! - [The clause database](crate::db::clause)
//!   + The formula: an append-only collection of clauses, each accessed by a [ClauseKey].
//!     * Original clauses are added to the context before a solve. \
//!       The collection of original clauses is the CNF formula 𝐅 whose satisfiability is to be determined.
//!     * Learned clauses are added by [analysis](crate::procedures::analysis). \
//!       Every learned clause is a consequence of the original clauses.
//!
//! - [The atom database](crate::db::atom)
//!   + The assignment store: the current (partial) valuation, together with the antecedent and decision level of each value.
//!   + The [trail](crate::db::trail), recording the order in which values were set.

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;

/// The index of a [decision level](crate::db::trail).
///
/// Level zero holds every value forced without a decision, and each decision opens a fresh level.
pub type LevelIndex = u32;
