use std::collections::BTreeMap;

use crate::{
    config::Config,
    db::{
        AssignmentSource, atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches,
    },
    reports::Report,
    structures::{atom::Atom, literal::CLiteral},
};

use super::{
    ContextState, Counters,
    callbacks::{CallbackBacktrack, CallbackPolarityHint, CallbackTheory},
};

/// A generic context, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used in calls to
/// [make_decision](GenericContext::make_decision) to appease the borrow
/// checker, and may be relaxed with a different implementation.
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// Watch lists for each literal.
    pub watches: Watches,

    /// The trail of assignments.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// Consulted at each propagation fixpoint, if set.
    pub(super) callback_theory: Option<Box<CallbackTheory>>,

    /// Notified after the trail is unwound, if set.
    pub(super) callback_backtrack: Option<Box<CallbackBacktrack>>,

    /// Consulted for the polarity of a decision, if set.
    pub(super) callback_polarity_hint: Option<Box<CallbackPolarityHint>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The value of `atom` on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The model found by the last solve, if the context is satisfiable.
    pub fn model(&self) -> Option<BTreeMap<Atom, bool>> {
        match self.state {
            ContextState::Satisfiable => Some(
                self.atom_db
                    .valuation()
                    .iter()
                    .enumerate()
                    .filter_map(|(atom, value)| value.map(|v| (atom as Atom, v)))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Values the atom of `literal` to match `literal` at the current level,
    /// and stores the assignment on the trail for propagation.
    ///
    /// # Soundness
    /// Assumes the atom has no value.
    pub fn record_assignment(&mut self, literal: CLiteral, source: AssignmentSource) {
        let reason = match source {
            AssignmentSource::Decision => None,
            AssignmentSource::BCP(key) => Some(key),
        };
        self.atom_db.set_value(literal, self.trail.level(), reason);
        self.trail.store_assignment(literal);
    }
}
