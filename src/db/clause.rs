/*!
The clause database.

Clauses are stored in two append-only vectors: original clauses given as input
and additions made during a solve (learnt clauses).
A [ClauseKey] notes the vector and index of a stored clause, and as stored
clauses are never moved or removed keys remain valid for the lifetime of the
database.

On storage the first (up to) two literals of a clause are watched.
In particular, a unit clause is watched on its single literal and is *not*
asserted eagerly: if the literal is ever falsified BCP reports a conflict, and
analysis of the conflict asserts the literal at level zero.
*/

use crate::{
    db::{ClauseKey, FormulaIndex, watches::Watches},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
    types::err::{self},
};

/// The source of a stored clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// The clause was given as input.
    Original,

    /// The clause was derived by resolution during conflict analysis.
    Resolution,
}

/// A clause, as stored in the clause database.
pub struct StoredClause {
    literals: CClause,
    source: ClauseSource,
}

impl StoredClause {
    /// The literals of the clause, in their current order.
    ///
    /// BCP swaps literals within a clause to keep the watched literals at the
    /// first two positions, so the order may differ from the order given.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The literal at `position`.
    pub fn literal_at(&self, position: usize) -> CLiteral {
        self.literals[position]
    }

    /// A count of the literals in the clause.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// True if the clause has no literals.
    /// Never the case for a stored clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Swaps the literals at `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.literals.swap(a, b);
    }

    /// The source of the clause.
    pub fn source(&self) -> ClauseSource {
        self.source
    }
}

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Clauses given as input.
    originals: Vec<StoredClause>,

    /// Clauses added during a solve.
    additions: Vec<StoredClause>,
}

impl ClauseDB {
    /// Stores `clause`, watching its first (up to) two literals, and returns
    /// the key to the stored clause.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        watches: &mut Watches,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        if clause.is_empty() {
            log::error!(target: targets::CLAUSE_DB, "An attempt was made to store an empty clause");
            return Err(err::ClauseDBError::EmptyClause);
        }

        let store = match source {
            ClauseSource::Original => &mut self.originals,
            ClauseSource::Resolution => &mut self.additions,
        };

        if store.len() > FormulaIndex::MAX as usize {
            return Err(err::ClauseDBError::StorageExhausted);
        }
        let index = store.len() as FormulaIndex;
        let key = match source {
            ClauseSource::Original => ClauseKey::Original(index),
            ClauseSource::Resolution => ClauseKey::Addition(index),
        };

        for literal in clause.iter().take(2) {
            watches.watch(*literal, key);
        }
        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_string());

        store.push(StoredClause {
            literals: clause,
            source,
        });
        Ok(key)
    }

    /// The clause keyed by `key`, if stored.
    pub fn get(&self, key: &ClauseKey) -> Result<&StoredClause, err::ClauseDBError> {
        let clause = match key {
            ClauseKey::Original(index) => self.originals.get(*index as usize),
            ClauseKey::Addition(index) => self.additions.get(*index as usize),
        };
        clause.ok_or(err::ClauseDBError::Missing)
    }

    /// A mutable borrow of the clause keyed by `key`, if stored.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut StoredClause, err::ClauseDBError> {
        let clause = match key {
            ClauseKey::Original(index) => self.originals.get_mut(*index as usize),
            ClauseKey::Addition(index) => self.additions.get_mut(*index as usize),
        };
        clause.ok_or(err::ClauseDBError::Missing)
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.originals.len()
    }

    /// A count of clauses added during solves.
    pub fn addition_count(&self) -> usize {
        self.additions.len()
    }

    /// All stored clauses with their keys, originals first.
    pub fn all_clauses(&self) -> impl Iterator<Item = (ClauseKey, &StoredClause)> + '_ {
        let originals = self
            .originals
            .iter()
            .enumerate()
            .map(|(index, clause)| (ClauseKey::Original(index as FormulaIndex), clause));
        let additions = self
            .additions
            .iter()
            .enumerate()
            .map(|(index, clause)| (ClauseKey::Addition(index as FormulaIndex), clause));
        originals.chain(additions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::CLiteral;

    #[test]
    fn store_and_watch() {
        let mut clause_db = ClauseDB::default();
        let mut watches = Watches::default();
        watches.ensure_atom(2);

        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, false);

        let key = clause_db
            .store(vec![p, q, r], ClauseSource::Original, &mut watches)
            .expect("storage failure");

        assert_eq!(key, ClauseKey::Original(0));
        assert_eq!(watches.watchers_of(p), &[key]);
        assert_eq!(watches.watchers_of(q), &[key]);
        assert!(watches.watchers_of(r).is_empty());

        let stored = clause_db.get(&key).expect("lost clause");
        assert_eq!(stored.len(), 3);
        assert_eq!(stored.literal_at(0), p);
    }

    #[test]
    fn empty_clause_rejected() {
        let mut clause_db = ClauseDB::default();
        let mut watches = Watches::default();
        assert_eq!(
            clause_db.store(vec![], ClauseSource::Original, &mut watches),
            Err(err::ClauseDBError::EmptyClause)
        );
    }

    #[test]
    fn unit_clause_is_not_asserted() {
        let mut clause_db = ClauseDB::default();
        let mut watches = Watches::default();
        watches.ensure_atom(0);

        let p = CLiteral::new(0, true);
        let key = clause_db
            .store(vec![p], ClauseSource::Original, &mut watches)
            .expect("storage failure");

        assert_eq!(watches.watchers_of(p), &[key]);
    }
}
