/*!
The atom database.

Things relating to atoms are stored as columns indexed by atom:

- The current valuation, i.e. the value of each atom, if any.
- A cache of a previous valuation, used to seed decision polarities
  (phase saving).
- The decision level at which each atom was valued, if valued.
- The reason (antecedent clause) for each valued atom, if the value was a
  consequence of BCP.
- The external (display) name of each atom.
- The activity of each atom, kept on an [IndexHeap] so the most active atom
  without a value may be popped when a decision is needed.

The cache of a previous valuation is refreshed wholesale whenever the trail
reaches a fresh maximum length, just before the trail is unwound.
Atoms without a value at the time of the refresh default to false.
*/

mod activity;

use crate::{
    config::{Activity, Config},
    db::{ClauseKey, LevelIndex},
    generic::index_heap::IndexHeap,
    structures::{
        atom::{ATOM_MAX, Atom},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The status of an atom's value with respect to a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AtomValue {
    /// The atom has no value.
    NotSet,

    /// The value of the atom matches the polarity of the literal.
    Same,

    /// The value of the atom conflicts with the polarity of the literal.
    Different,
}

/// Parts of the config relevant to the atom database.
#[derive(Clone)]
pub struct AtomDBConfig {
    /// The activity added to an atom when bumped, dynamically adjusted.
    pub bump: Activity,

    /// The decay applied to activity after each conflict.
    pub decay: Activity,

    /// The activity at which all activities are rescored.
    pub max_bump: Activity,
}

/// The atom database.
pub struct AtomDB {
    /// The current valuation.
    valuation: Vec<Option<bool>>,

    /// The cached valuation used for phase saving.
    cached_valuation: Vec<bool>,

    /// The decision level at which each atom was valued, if valued.
    decision_levels: Vec<Option<LevelIndex>>,

    /// The antecedent clause of each valued atom, if a consequence of BCP.
    reasons: Vec<Option<ClauseKey>>,

    /// The external name of each atom.
    external_names: Vec<String>,

    /// Activities, with atoms without a value active on the heap.
    activity_heap: IndexHeap<Activity>,

    /// A local copy of the relevant parts of the config.
    pub config: AtomDBConfig,
}

impl AtomDB {
    /// A fresh atom database, configured by `config`.
    pub fn new(config: &Config) -> Self {
        AtomDB {
            valuation: Vec::default(),
            cached_valuation: Vec::default(),
            decision_levels: Vec::default(),
            reasons: Vec::default(),
            external_names: Vec::default(),
            activity_heap: IndexHeap::default(),
            config: AtomDBConfig {
                bump: config.activity_bump,
                decay: config.activity_decay,
                max_bump: config.activity_max,
            },
        }
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// A fresh atom named `name`, with `cached_value` as its initial cached
    /// value.
    pub fn fresh_atom(
        &mut self,
        name: String,
        cached_value: bool,
    ) -> Result<Atom, err::AtomDBError> {
        if self.valuation.len() > ATOM_MAX as usize {
            return Err(err::AtomDBError::AtomsExhausted);
        }
        let atom = self.valuation.len() as Atom;

        self.valuation.push(None);
        self.cached_valuation.push(cached_value);
        self.decision_levels.push(None);
        self.reasons.push(None);
        self.external_names.push(name);

        self.activity_heap.add(atom as usize, Activity::default());
        self.activity_heap.activate(atom as usize);

        Ok(atom)
    }

    /// The value of `atom`, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The status of the value of the atom of `literal`, with respect to the
    /// polarity of `literal`.
    pub fn value_status(&self, literal: CLiteral) -> AtomValue {
        match self.value_of(literal.atom()) {
            None => AtomValue::NotSet,
            Some(value) if value == literal.polarity() => AtomValue::Same,
            Some(_) => AtomValue::Different,
        }
    }

    /// Values the atom of `literal` to match `literal` at `level`, with
    /// `reason` as its antecedent, if a consequence of BCP.
    ///
    /// # Soundness
    /// Assumes the atom has no value.
    pub fn set_value(&mut self, literal: CLiteral, level: LevelIndex, reason: Option<ClauseKey>) {
        let atom = literal.atom() as usize;
        debug_assert!(self.valuation[atom].is_none());

        self.valuation[atom] = Some(literal.polarity());
        self.decision_levels[atom] = Some(level);
        self.reasons[atom] = reason;
    }

    /// Clears the value, level, and reason of `atom`, and reactivates the
    /// atom on the activity heap.
    pub fn drop_value(&mut self, atom: Atom) {
        self.valuation[atom as usize] = None;
        self.decision_levels[atom as usize] = None;
        self.reasons[atom as usize] = None;
        self.activity_heap.activate(atom as usize);
    }

    /// The decision level at which `atom` was valued, if valued.
    pub fn decision_level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.decision_levels[atom as usize]
    }

    /// The antecedent clause of `atom`, if its value is a consequence of BCP.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reasons[atom as usize]
    }

    /// The cached value of `atom`.
    pub fn cached_value_of(&self, atom: Atom) -> bool {
        self.cached_valuation[atom as usize]
    }

    /// Refreshes the cached valuation from the current valuation.
    /// Atoms without a value are cached as false.
    pub fn cache_valuation(&mut self) {
        for (atom, value) in self.valuation.iter().enumerate() {
            self.cached_valuation[atom] = value.unwrap_or(false);
        }
    }

    /// The atoms without a value, in atom order.
    pub fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.valuation
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as Atom)
    }

    /// The external name of `atom`.
    pub fn name_of(&self, atom: Atom) -> &str {
        &self.external_names[atom as usize]
    }

    /// The current valuation, as a slice indexed by atom.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_and_cache() {
        let mut atom_db = AtomDB::new(&Config::default());
        let p = atom_db.fresh_atom("p".to_string(), false).expect("no atom");
        let q = atom_db.fresh_atom("q".to_string(), false).expect("no atom");

        assert_eq!(atom_db.count(), 2);
        assert_eq!(atom_db.name_of(p), "p");
        assert_eq!(atom_db.value_of(p), None);

        let p_true = CLiteral::new(p, true);
        atom_db.set_value(p_true, 1, None);
        assert_eq!(atom_db.value_of(p), Some(true));
        assert_eq!(atom_db.value_status(p_true), AtomValue::Same);
        assert_eq!(atom_db.value_status(p_true.negate()), AtomValue::Different);
        assert_eq!(atom_db.value_status(CLiteral::new(q, true)), AtomValue::NotSet);
        assert_eq!(atom_db.decision_level_of(p), Some(1));

        atom_db.cache_valuation();
        assert!(atom_db.cached_value_of(p));
        assert!(!atom_db.cached_value_of(q));

        atom_db.drop_value(p);
        assert_eq!(atom_db.value_of(p), None);
        assert_eq!(atom_db.decision_level_of(p), None);
        assert_eq!(atom_db.unvalued_atoms().collect::<Vec<_>>(), vec![p, q]);
    }
}
