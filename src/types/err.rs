//! Error types used in the library.
//!
//! - Unsatisfiability is not an error, and is instead [reported](crate::reports::Report::Unsatisfiable).
//! - Some errors are internally expected --- e.g. BCP errors are used to control the flow of a solve, and a conflict never surfaces from [solve](crate::context::GenericContext::solve).
//! - Malformed input is rejected when a clause is added, before any search.
//! - Failure to allocate storage for a learned clause is fatal, and returned as an error rather than some partial result.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{
    db::ClauseKey,
    structures::{atom::Atom, literal::CLiteral},
};

/// The general error type, wrapping more specific errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    Build(BuildError),
    ClauseDB(ClauseDBError),
    BCP(BCPError),
    State(StateError),

    /// Some literal of a clause used to determine a backjump level has no value.
    Backjump,

    /// A decider chose a literal on an atom which is not part of the context, or which already has a value.
    InvalidDecision(CLiteral),

    /// A request was made which does not make sense given the state of the context.
    InvalidState,
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Somehow resolution resolved to an empty clause.
    EmptyResolution,

    /// Resolution failed to terminate with exactly one literal from the level of the conflict.
    NoAssertion,

    /// An atom to resolve on has no antecedent.
    MissingAntecedent(Atom),

    /// Some literal in a clause used during analysis has no value.
    UnvaluedLiteral(Atom),
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Noted errors when building a context, i.e. malformed input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A literal refers to a variable outside of the variables of the context.
    /// The literal is given as it was in the input.
    UnknownVariable(i64),

    /// A literal which is not the literal of any variable under the indexing used.
    /// For example, `0` when variables are one-based.
    UnrepresentableLiteral(i64),

    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A clause could not be stored, either as storage could not be allocated or as all keys are in use.
    StorageExhausted,

    /// No clause exists for some key.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors from requests made in the wrong state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// The formula may only be extended before a solve.
    SolveStarted,

    /// A solve may only be made once.
    AlreadySolved,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "Analysis error: {e:?}"),
            Self::Build(BuildError::UnknownVariable(literal)) => {
                write!(f, "The literal {literal} refers to an unknown variable")
            }
            Self::Build(BuildError::UnrepresentableLiteral(literal)) => {
                write!(f, "{literal} is not a literal")
            }
            Self::Build(BuildError::AtomsExhausted) => write!(f, "Atoms exhausted"),
            Self::ClauseDB(ClauseDBError::StorageExhausted) => write!(f, "Clause storage exhausted"),
            Self::ClauseDB(ClauseDBError::Missing) => write!(f, "Missing clause"),
            Self::BCP(BCPError::Conflict(key)) => write!(f, "Unhandled conflict on {key}"),
            Self::State(e) => write!(f, "State error: {e:?}"),
            Self::Backjump => write!(f, "Backjump error"),
            Self::InvalidDecision(literal) => write!(f, "Invalid decision {literal}"),
            Self::InvalidState => write!(f, "Invalid state"),
        }
    }
}

impl std::error::Error for ErrorKind {}
