//! Keys to clauses stored in the clause database.

/// The index to a stored clause.
pub type FormulaIndex = u32;

/// A key to access a clause stored in the clause database.
///
/// Within the clause database clauses are stored in append-only vectors, and
/// a key notes which vector together with the index to the clause.
/// As stored clauses are never moved or removed, keys are stable for the
/// lifetime of the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to a clause given as input.
    Original(FormulaIndex),

    /// The key to a clause added during a solve, e.g. by resolution.
    Addition(FormulaIndex),
}

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        match self {
            Self::Original(index) => *index as usize,
            Self::Addition(index) => *index as usize,
        }
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(key) => write!(f, "Original({key})"),
            Self::Addition(key) => write!(f, "Addition({key})"),
        }
    }
}
