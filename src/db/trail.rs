/*!
The trail of assignments, in order of assignment.

The trail doubles as the propagation queue: `q_head` is a cursor into the
assignments, with everything before the cursor propagated and everything at or
after the cursor queued for propagation.

The trail also keeps the stack of theory consultation marks.
Each consultation of an external theory solver notes the length of the trail
at the time, so the next consultation passes only the assignments made since.
On backjumping, marks above the revised trail are forgotten.
*/

use crate::{db::LevelIndex, structures::literal::CLiteral};

#[derive(Default)]
pub struct Trail {
    /// Assignments, in order of assignment.
    pub literals: Vec<CLiteral>,

    /// Indices into `literals` at which each decision level begins.
    level_indices: Vec<usize>,

    /// The propagation queue cursor.
    pub q_head: usize,

    /// Trail lengths at which a theory solver was consulted.
    theory_marks: Vec<usize>,
}

impl Trail {
    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level_indices.len() as LevelIndex
    }

    /// Opens a fresh decision level at the current trail length.
    pub fn new_level(&mut self) {
        self.level_indices.push(self.literals.len());
    }

    /// Stores an assignment at the top decision level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// A count of assignments made.
    pub fn assignment_count(&self) -> usize {
        self.literals.len()
    }

    /// The next queued assignment to propagate, if any.
    pub fn next_in_queue(&self) -> Option<CLiteral> {
        self.literals.get(self.q_head).copied()
    }

    /// Removes levels above `level`, if they exist, returning the removed
    /// assignments.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the removed assignments.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        // level_indices stores with zero-indexing, so clearing all assignments
        // at and after literals[level_indices[level]] removes every level
        // above `level`, and level zero assignments can never be cleared.
        if let Some(&level_start) = self.level_indices.get(level as usize) {
            self.level_indices.truncate(level as usize);
            self.literals.split_off(level_start)
        } else {
            Vec::default()
        }
    }

    /// The top theory consultation mark, zero if none has been made.
    pub fn top_theory_mark(&self) -> usize {
        self.theory_marks.last().copied().unwrap_or(0)
    }

    /// Notes a theory consultation at the current trail length.
    pub fn note_theory_consultation(&mut self) {
        self.theory_marks.push(self.literals.len());
    }

    /// Forgets theory marks above the current trail length, returning the
    /// revised top mark.
    pub fn trim_theory_marks(&mut self) -> usize {
        while self
            .theory_marks
            .last()
            .is_some_and(|mark| *mark > self.literals.len())
        {
            self.theory_marks.pop();
        }
        self.top_theory_mark()
    }

    /// The assignments made after the first `mark` assignments.
    pub fn assignments_since(&self, mark: usize) -> &[CLiteral] {
        &self.literals[mark..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bookkeeping() {
        let mut trail = Trail::default();
        assert_eq!(trail.level(), 0);

        trail.store_assignment(CLiteral::new(0, true));
        trail.new_level();
        trail.store_assignment(CLiteral::new(1, false));
        trail.store_assignment(CLiteral::new(2, true));
        trail.new_level();
        trail.store_assignment(CLiteral::new(3, true));

        assert_eq!(trail.level(), 2);
        assert_eq!(trail.assignment_count(), 4);

        let removed = trail.clear_assignments_above(1);
        assert_eq!(removed, vec![CLiteral::new(3, true)]);
        assert_eq!(trail.level(), 1);

        let removed = trail.clear_assignments_above(0);
        assert_eq!(removed.len(), 2);
        assert_eq!(trail.level(), 0);
        assert_eq!(trail.assignment_count(), 1);

        assert!(trail.clear_assignments_above(0).is_empty());
    }

    #[test]
    fn queue_cursor() {
        let mut trail = Trail::default();
        trail.store_assignment(CLiteral::new(0, true));
        trail.store_assignment(CLiteral::new(1, true));

        assert_eq!(trail.next_in_queue(), Some(CLiteral::new(0, true)));
        trail.q_head += 1;
        assert_eq!(trail.next_in_queue(), Some(CLiteral::new(1, true)));
        trail.q_head += 1;
        assert_eq!(trail.next_in_queue(), None);
    }

    #[test]
    fn theory_marks() {
        let mut trail = Trail::default();
        assert_eq!(trail.top_theory_mark(), 0);

        trail.store_assignment(CLiteral::new(0, true));
        trail.note_theory_consultation();
        trail.new_level();
        trail.store_assignment(CLiteral::new(1, true));
        trail.note_theory_consultation();

        assert_eq!(trail.top_theory_mark(), 2);
        assert_eq!(trail.assignments_since(1), &[CLiteral::new(1, true)]);

        trail.clear_assignments_above(0);
        assert_eq!(trail.trim_theory_marks(), 1);

        let _ = trail.literals.pop();
        assert_eq!(trail.trim_theory_marks(), 0);
    }
}
