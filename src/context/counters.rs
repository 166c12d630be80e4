use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of all values set by propagation.
    pub total_propagations: usize,

    /// A count of all backjumps.
    pub total_backjumps: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// A count of clauses learned through analysis.
    pub learned_clauses: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
