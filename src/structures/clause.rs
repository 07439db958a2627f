/*!
Clauses, i.e. disjunctions of literals.

The [Clause] trait details the intended interface, implemented for the
canonical [CClause] (a vector of literals) and for a lone [CLiteral] so unit
clauses may be added without wrapping.

Note, clauses are taken as given: duplicate literals and tautologies are
neither detected nor normalised.
*/

use crate::structures::literal::{CLiteral, Literal};

/// The canonical clause.
pub type CClause = Vec<CLiteral>;

/// The interface of a clause.
pub trait Clause {
    /// A count of the literals in the clause.
    fn size(&self) -> usize;

    /// The literals of the clause, in order.
    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_;

    /// The canonical representation of the clause.
    fn canonical(self) -> CClause;

    /// The clause as a space-separated string of literals.
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self.literals() {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.pop();
        the_string
    }
}

impl Clause for CClause {
    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.iter().copied()
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for CLiteral {
    fn size(&self) -> usize {
        1
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        std::iter::once(*self)
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}

impl Clause for &[CLiteral] {
    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.iter().copied()
    }

    fn canonical(self) -> CClause {
        self.to_vec()
    }
}
