/*!
Consultation of an external theory solver.

# Overview

Propagation settles the boolean consequences of the current valuation, and a
theory solver may know of further constraints between the atoms.
So, at each propagation fixpoint the theory callback (if set) is consulted
with the assignments made since its previous consultation, and may return a
conflict clause.

Each consultation notes the length of the trail on a mark stack, so the next
consultation passes only fresh assignments.
When the trail is unwound the stack is trimmed and the backtrack callback is
told the revised top mark; assignments up to the mark remain as the theory
solver was told.

A returned conflict clause must be false on the current valuation with at
least one literal valued at the current decision level, as holds for any
clause constraining the assignments the solver was just told of.
The clause is not stored: analysis derives (and stores) a learnt clause from
it, exactly as for a conflict met during propagation.
*/

use std::collections::BTreeMap;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
};

/// Possible 'Ok' results from consulting a theory solver.
pub enum TheoryOk {
    /// The theory solver had no complaint, or no theory solver is set.
    Consistent,

    /// The theory solver returned a conflict clause.
    Conflict(CClause),
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Consults the theory callback with the assignments made since the last
    /// consultation, if a callback is set.
    pub fn consult_theory(&mut self) -> TheoryOk {
        if !self.theory_is_set() {
            return TheoryOk::Consistent;
        }

        let mark = self.trail.top_theory_mark();
        let mut fresh_assignments: BTreeMap<_, _> = BTreeMap::default();
        for literal in self.trail.assignments_since(mark) {
            fresh_assignments.insert(literal.atom(), literal.polarity());
        }
        let assignment_count = self.trail.assignment_count();
        self.trail.note_theory_consultation();

        let conflict = self.check_callback_theory(assignment_count, &fresh_assignments);

        match conflict {
            Some(clause) => {
                log::trace!(target: targets::THEORY, "Theory conflict {}", clause.as_string());
                TheoryOk::Conflict(clause)
            }
            None => TheoryOk::Consistent,
        }
    }
}
