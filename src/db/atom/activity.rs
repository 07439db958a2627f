//! Methods for inspecting and mutating the activity of atoms.
//!
//! The role of these methods is tied to the use of a VSIDS decision ordering:
//! atoms touched by conflict analysis are bumped, the bump grows after each
//! conflict (an exponential decay of older activity), and all activities are
//! rescored whenever a bump would pass the configured maximum.

use crate::{config::Activity, db::atom::AtomDB, structures::atom::Atom};

impl AtomDB {
    /// The activity of an atom, regardless of whether it is on the activity
    /// heap.
    pub fn activity_of(&self, atom: Atom) -> Activity {
        *self.activity_heap.value_at(atom as usize)
    }

    /// Bumps the activity of an atom and updates its position on the activity
    /// heap, if the atom is on the activity heap.
    ///
    /// If the bumped activity would be greater than the maximum allowed
    /// activity, the activity of every atom is rescored first.
    pub fn bump_activity(&mut self, atom: Atom) {
        if self.activity_of(atom) + self.config.bump > self.config.max_bump {
            self.rescore_activity();
        }
        self.activity_heap
            .revalue(atom as usize, self.activity_of(atom) + self.config.bump);
        self.activity_heap.heapify_if_active(atom as usize);
    }

    /// Increases the activity bump applied to atoms by a factor.
    pub fn exponent_activity(&mut self) {
        let factor = 1.0 / (1.0 - self.config.decay);
        self.config.bump *= factor;
    }

    /// Rescores the activity of all atoms and the activity bump.
    pub fn rescore_activity(&mut self) {
        let heap_max = self
            .activity_heap
            .peek_max_value()
            .copied()
            .unwrap_or(Activity::MIN);
        let rescale = Activity::max(heap_max, self.config.bump);

        let factor = 1.0 / rescale;
        self.activity_heap.apply_to_all(|value| value * factor);
        self.config.bump *= factor;
        self.activity_heap.reheap();
    }

    /// Pops the most active atom from the activity heap.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }
}
