/*!
Recovery from a conflict.

# Overview

A backjump is a 'jump' from some (higher) decision level to some previous
(lower) decision level.

Typically, a backjump is made from level *l* to level *l - i* because a
conflict was found at level *l* and analysis produced a clause which asserts
some literal at level *l - i*.
All decisions and consequences of decisions above the target level are
undone, the undone atoms are reactivated for decision, and the propagation
queue is emptied of the undone assignments.

Two pieces of bookkeeping ride along:

- If the trail is at a fresh maximum length, the full valuation is cached
  before anything is undone, so later decisions default to the most complete
  valuation seen (phase saving).
- Theory consultation marks above the revised trail are forgotten, and the
  backtrack callback (if set) is told the revised top mark.
*/

use crate::{
    context::{ContextState, GenericContext},
    db::LevelIndex,
    misc::log::targets::{self},
    structures::literal::Literal,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// For sound application the target level must be equal to or lower than
    /// the current level.
    /// Still, passing a target level at or above the current level is safe
    /// --- nothing will happen.
    pub fn backjump(&mut self, target: LevelIndex) {
        if target >= self.trail.level() {
            return;
        }
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        if self.trail.assignment_count() > self.counters.longest_trail {
            self.counters.longest_trail = self.trail.assignment_count();
            self.atom_db.cache_valuation();
        }

        for literal in self.trail.clear_assignments_above(target) {
            self.atom_db.drop_value(literal.atom());
        }
        self.trail.q_head = self.trail.assignment_count();

        let mark = self.trail.trim_theory_marks();
        self.notify_backtrack(mark);
    }

    /// Resets all decisions and consequences of those decisions.
    ///
    /// In other words, backjumps to before any decision was made.
    pub fn clear_decisions(&mut self) {
        self.state = ContextState::Input;
        self.backjump(0);
    }
}
