//! Counters related to a context/solve.

/// Counters, defaulting to zero.
#[derive(Default)]
pub struct Counters {
    /// A count of every conflict seen.
    pub total_conflicts: usize,

    /// A count of conflicts seen since the last restart.
    pub fresh_conflicts: u32,

    /// A count of decisions made.
    pub total_decisions: usize,

    /// A count of iterations of the core search loop.
    pub total_iterations: usize,

    /// A count of restarts made.
    pub restarts: usize,

    /// The maximum length the trail has reached.
    /// Used to schedule refreshes of the cached valuation.
    pub longest_trail: usize,
}
