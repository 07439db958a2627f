//! Tools for building a context.

use crate::{
    context::{ContextState, GenericContext},
    db::{ClauseKey, clause::ClauseSource},
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Methods for building the context.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns a fresh atom, named `name`.
    ///
    /// The initial cached value of the atom is decided by
    /// [polarity_lean](crate::config::Config::polarity_lean), so an atom
    /// always has a cached value to default to when phase saving.
    pub fn fresh_atom(&mut self, name: &str) -> Result<Atom, err::ErrorKind> {
        let cached_value = self.rng.random_bool(self.config.polarity_lean);
        let atom = self.atom_db.fresh_atom(name.to_string(), cached_value)?;
        self.watches.ensure_atom(atom);
        self.state = ContextState::Input;
        Ok(atom)
    }

    /// Returns a positive literal over a fresh atom named `name`.
    pub fn fresh_literal(&mut self, name: &str) -> Result<CLiteral, err::ErrorKind> {
        let atom = self.fresh_atom(name)?;
        Ok(CLiteral::new(atom, true))
    }

    /// Adds a clause to the context and returns the key to the stored clause.
    ///
    /// The clause must be non-empty and over atoms of the context.
    /// Duplicate literals and tautologies are stored as given.
    ///
    /// ```rust
    /// # use marten_sat::context::Context;
    /// # use marten_sat::config::Config;
    /// # use marten_sat::structures::literal::{CLiteral, Literal};
    /// let mut the_context = Context::from_config(Config::default());
    /// let p = the_context.fresh_atom("p").unwrap();
    /// let q = the_context.fresh_atom("q").unwrap();
    ///
    /// let clause = vec![CLiteral::new(p, true), CLiteral::new(q, false)];
    /// assert!(the_context.add_clause(clause).is_ok());
    /// ```
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseKey, err::ErrorKind> {
        if clause.size() == 0 {
            return Err(err::ErrorKind::from(err::ClauseDBError::EmptyClause));
        }
        for literal in clause.literals() {
            if (literal.atom() as usize) >= self.atom_db.count() {
                return Err(err::ErrorKind::from(err::AtomDBError::UnknownAtom));
            }
        }

        let key = self.clause_db.store(
            clause.canonical(),
            ClauseSource::Original,
            &mut self.watches,
        )?;
        self.state = ContextState::Input;
        Ok(key)
    }
}
