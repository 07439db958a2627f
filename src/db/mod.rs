/*!
Databases for the data considered during a solve.

- The formula is stored in the [clause database](crate::db::clause).
- The valuation, with levels, reasons, and activities, is stored in the
  [atom database](crate::db::atom).
- Assignments, in order of assignment, are stored on the [trail](crate::db::trail).
- Clauses to revisit when a literal is falsified are stored in the
  [watch database](crate::db::watches).
*/

pub mod atom;
pub mod clause;
mod keys;
pub mod trail;
pub mod watches;

pub use keys::{ClauseKey, FormulaIndex};

/// A decision level, counted from zero.
pub type LevelIndex = u32;

/// The source of an assignment, used to note the reason of an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentSource {
    /// The assignment was a decision.
    Decision,

    /// The assignment was a consequence of the noted clause, via BCP.
    BCP(ClauseKey),
}
