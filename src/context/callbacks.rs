/*!
Callbacks associated with a context, linking a solve to an external theory
solver.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable.

- [CallbackTheory] is called at each propagation fixpoint with the current
  count of assignments and the assignments made since the previous call, and
  may return a conflict clause.
  A returned clause must be false on the current valuation with at least one
  literal valued at the current decision level.
- [CallbackBacktrack] is called after the trail is unwound with the count of
  assignments the theory solver has been told of which remain on the trail.
- [CallbackPolarityHint] is consulted for the value of a decision before any
  cached value.
*/

use std::collections::BTreeMap;

use crate::structures::{atom::Atom, clause::CClause};

use super::GenericContext;

pub type CallbackTheory = dyn FnMut(usize, &BTreeMap<Atom, bool>) -> Option<CClause>;

pub type CallbackBacktrack = dyn FnMut(usize);

pub type CallbackPolarityHint = dyn FnMut(Atom) -> Option<bool>;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    pub fn set_callback_theory(&mut self, callback: Box<CallbackTheory>) {
        self.callback_theory = Some(callback);
    }

    pub fn set_callback_backtrack(&mut self, callback: Box<CallbackBacktrack>) {
        self.callback_backtrack = Some(callback);
    }

    pub fn set_callback_polarity_hint(&mut self, callback: Box<CallbackPolarityHint>) {
        self.callback_polarity_hint = Some(callback);
    }

    /// True if a theory callback is set, false otherwise.
    pub fn theory_is_set(&self) -> bool {
        self.callback_theory.is_some()
    }

    /// Consults the theory callback, if set.
    pub fn check_callback_theory(
        &mut self,
        assignment_count: usize,
        fresh_assignments: &BTreeMap<Atom, bool>,
    ) -> Option<CClause> {
        match &mut self.callback_theory {
            Some(callback) => callback(assignment_count, fresh_assignments),
            None => None,
        }
    }

    /// Notifies the backtrack callback, if set.
    pub fn notify_backtrack(&mut self, mark: usize) {
        if let Some(callback) = &mut self.callback_backtrack {
            callback(mark)
        }
    }

    /// Consults the polarity hint callback for `atom`, if set.
    pub fn check_callback_polarity_hint(&mut self, atom: Atom) -> Option<bool> {
        match &mut self.callback_polarity_hint {
            Some(callback) => callback(atom),
            None => None,
        }
    }
}
