/*!
Watch lists, pairing literals with the clauses watching them.

A clause watches (up to) two of its literals, and is listed under the literals
it watches.
When a literal is falsified, only the clauses listed under that literal need
inspection, as every other clause either does not contain the literal or is
indifferent to it for the moment.

Lists are indexed by literal, with the polarities of an atom interleaved.

During BCP the list of a falsified literal is taken wholesale from the
database and the watches to keep are returned wholesale, which keeps mutation
of clauses and the valuation free of any borrow of the database.
*/

use crate::{
    db::ClauseKey,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// Watch lists for each literal, indexed by atom and polarity.
#[derive(Default)]
pub struct Watches {
    lists: Vec<Vec<ClauseKey>>,
}

impl Watches {
    /// The index of the list for `literal`.
    fn list_index(literal: CLiteral) -> usize {
        ((literal.atom() as usize) << 1) | (literal.polarity() as usize)
    }

    /// Ensures lists exist for both literals of `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = ((atom as usize) + 1) << 1;
        while self.lists.len() < required {
            self.lists.push(Vec::default());
        }
    }

    /// Notes that the clause keyed by `key` watches `literal`.
    pub fn watch(&mut self, literal: CLiteral, key: ClauseKey) {
        self.lists[Self::list_index(literal)].push(key);
    }

    /// Takes the list of clauses watching `literal`, leaving an empty list.
    ///
    /// To be used in conjunction with [restore_list](Watches::restore_list).
    pub fn take_list(&mut self, literal: CLiteral) -> Vec<ClauseKey> {
        std::mem::take(&mut self.lists[Self::list_index(literal)])
    }

    /// Sets the list of clauses watching `literal` to `list`.
    ///
    /// To be used in conjunction with [take_list](Watches::take_list).
    pub fn restore_list(&mut self, literal: CLiteral, list: Vec<ClauseKey>) {
        self.lists[Self::list_index(literal)] = list;
    }

    /// The clauses currently watching `literal`.
    pub fn watchers_of(&self, literal: CLiteral) -> &[ClauseKey] {
        &self.lists[Self::list_index(literal)]
    }
}
