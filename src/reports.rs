//! Details on the result of a solve.

/// Reports from the context.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula could not be determined within the time allowed.
    TimeUp,

    /// Satisfiability of the formula could not be determined within the conflicts allowed.
    ConflictLimit,

    /// The solve was stopped by the terminate callback.
    Terminated,

    /// Satisfiability of the formula of the context is unknown, e.g. as no solve has been made.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::TimeUp => write!(f, "Unknown (time limit)"),
            Self::ConflictLimit => write!(f, "Unknown (conflict limit)"),
            Self::Terminated => write!(f, "Unknown (terminated)"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The definite outcome of a solve.
///
/// Only returned if the solve determined satisfiability, so 'no model' always means the formula was proven unsatisfiable.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Solution {
    /// A model, with the value of each variable in order.
    /// Variables without a value in the final valuation are false.
    Satisfiable(Vec<bool>),

    /// The formula is unsatisfiable.
    Unsatisfiable,
}
