use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, ClauseKey},
    procedures::decision::Decider,
    reports::{Report, Solution},
    structures::{
        atom::Atom,
        valuation::{CValuation, Valuation},
    },
    types::err::ErrorKind,
};

use super::{
    callbacks::{CallbackOnDecision, CallbackOnLearned, CallbackTerminate},
    ContextState, Counters, Interrupt,
};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used in calls to [make_decision](GenericContext::make_decision) to appease the borrow checker.
///
/// # Example
///
/// ```rust
/// # use cdcl_sat::context::GenericContext;
/// # use cdcl_sat::generic::random::MinimalPCG32;
/// # use cdcl_sat::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config_and_rng(Config::default(), MinimalPCG32::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database, aka. the assignment store.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database, aka. the formula.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// A decider to use in place of the configured decision policy.
    pub(crate) decider: Option<Box<dyn Decider>>,

    /// Terminates a solve, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,

    /// Learned clauses are passed in.
    pub(super) callback_learned: Option<Box<CallbackOnLearned>>,

    /// Decisions are passed in.
    pub(super) callback_decision: Option<Box<CallbackOnDecision>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Creates a context from some given configuration and source of randomness.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::new(),
            clause_db: ClauseDB::default(),
            state: ContextState::Input,
            rng,
            decider: None,
            callback_terminate: None,
            callback_learned: None,
            callback_decision: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Input | ContextState::Solving => Report::Unknown,
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable(_) => Report::Unsatisfiable,
            ContextState::Interrupted(Interrupt::TimeUp) => Report::TimeUp,
            ContextState::Interrupted(Interrupt::ConflictLimit) => Report::ConflictLimit,
            ContextState::Interrupted(Interrupt::Terminated) => Report::Terminated,
        }
    }

    /// The clause with which unsatisfiability of the context was determined.
    pub fn unsatisfiable_clause(&self) -> Result<ClauseKey, ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable(key) => Ok(key),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// The value of an atom on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The current valuation.
    pub fn valuation(&self) -> CValuation {
        self.atom_db.valuation()
    }

    /// The model found by a solve, with the value of atom `i` at index `i - 1`.
    ///
    /// Every atom without a value is given the value false.
    /// An error is returned unless the formula is satisfiable.
    pub fn model(&self) -> Result<Vec<bool>, ErrorKind> {
        match self.state {
            ContextState::Satisfiable => Ok((1..=self.atom_db.atom_count() as Atom)
                .map(|atom| self.atom_db.value_of(atom).unwrap_or(false))
                .collect()),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// The solution found by a solve.
    ///
    /// An error is returned if satisfiability was not determined, e.g. as a limit was reached.
    pub fn solution(&self) -> Result<Solution, ErrorKind> {
        match self.state {
            ContextState::Satisfiable => Ok(Solution::Satisfiable(self.model()?)),
            ContextState::Unsatisfiable(_) => Ok(Solution::Unsatisfiable),
            _ => Err(ErrorKind::InvalidState),
        }
    }
}
