/*!
The context --- to which formulas are added and within which a solve takes place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, while a context fixes the source to [MinimalPCG32](crate::generic::random::MinimalPCG32), seeded from the configuration.

A context is used once: clauses are added, and then a single solve is made.
Any attempt to add a clause after a solve has begun is an error, as the engine is not incremental.

# Example
```rust
# use cdcl_sat::context::Context;
# use cdcl_sat::config::Config;
# use cdcl_sat::reports::Report;
# use cdcl_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);

assert!(the_context.add_clause(not_p).is_ok());
assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(p), Some(false));
assert_eq!(the_context.value_of(q), Some(true));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

use crate::db::ClauseKey;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula is satisfiable, with a complete valuation.
    Satisfiable,

    /// The formula is unsatisfiable, as the given clause was falsified without any decision.
    Unsatisfiable(ClauseKey),

    /// The solve was interrupted before satisfiability was determined.
    Interrupted(Interrupt),
}

/// Reasons for interrupting a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interrupt {
    /// The time limit was reached.
    TimeUp,

    /// The conflict limit was reached.
    ConflictLimit,

    /// The terminate callback requested termination.
    Terminated,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable(_) => write!(f, "Unsatisfiable"),
            Self::Interrupted(interrupt) => write!(f, "Interrupted ({interrupt:?})"),
        }
    }
}
