/*!
Methods for choosing the value of an atom.

# Overview

A decision is to value some atom *a* with value *v*, conveniently represented
as a literal with atom *a* and polarity *v*.

# Choice of atom

Atoms are selected by activity: the [atom database](crate::db::atom) keeps
(at least) the atoms without a value on a max activity heap, so the most
active atom without a value is found by popping the heap until an atom
without a value surfaces.

With probability [random_decision_bias](crate::config::Config::random_decision_bias)
a uniformly random atom without a value is taken instead.

# Choice of value

In order of preference:

1. The [polarity hint callback](crate::context::callbacks), if set and with an
   opinion on the atom.
2. The cached value of the atom, if phase saving is enabled.
3. A random value, leant by [polarity_lean](crate::config::Config::polarity_lean).
*/

use rand::{Rng, seq::IteratorRandom};

use crate::{
    context::{ContextState, GenericContext},
    structures::{atom::Atom, literal::CLiteral},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some truth value was chosen for some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could
    /// be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Makes a decision, choosing an atom without a value and a value for the
    /// atom.
    ///
    /// If every atom has a value the valuation is complete, and as decisions
    /// are only made with no conflict at hand the context is satisfiable.
    pub fn make_decision(&mut self) -> DecisionOk {
        // Takes ownership of rng to satisfy the borrow checker.
        // Avoidable, at the cost of a less generic atom method.
        let mut rng = std::mem::take(&mut self.rng);
        let chosen_atom = self.atom_without_value(&mut rng);
        self.rng = rng;

        match chosen_atom {
            Some(chosen_atom) => {
                self.counters.total_decisions += 1;

                let polarity = match self.check_callback_polarity_hint(chosen_atom) {
                    Some(hint) => hint,
                    None => match self.config.phase_saving {
                        true => self.atom_db.cached_value_of(chosen_atom),
                        false => self.rng.random_bool(self.config.polarity_lean),
                    },
                };

                let decision_literal = CLiteral::new(chosen_atom, polarity);
                log::trace!("Decision {decision_literal}");

                DecisionOk::Literal(decision_literal)
            }
            None => {
                self.state = ContextState::Satisfiable;
                DecisionOk::Exhausted
            }
        }
    }

    /// Returns an atom which has no value on the current valuation, either by
    /// random decision or by most activity.
    pub fn atom_without_value(&mut self, rng: &mut impl Rng) -> Option<Atom> {
        match rng.random_bool(self.config.random_decision_bias) {
            true => self.atom_db.unvalued_atoms().choose(rng),
            false => {
                while let Some(atom) = self.atom_db.heap_pop_most_active() {
                    if self.atom_db.value_of(atom).is_none() {
                        return Some(atom);
                    }
                }
                self.atom_db.unvalued_atoms().next()
            }
        }
    }
}
