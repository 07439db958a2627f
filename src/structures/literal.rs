/*!
Literals, i.e. atoms paired with a polarity.

A literal with polarity true is satisfied when its atom is valued true, and a
literal with polarity false is satisfied when its atom is valued false.

The [Literal] trait details the intended interface, and [CLiteral] is the
canonical implementation used throughout the library.
*/

use crate::structures::atom::Atom;

/// The interface of a literal.
pub trait Literal {
    /// A fresh literal, pairing `atom` with `polarity`.
    fn fresh(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal, i.e. the same atom with flipped polarity.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The canonical representation of the literal.
    fn canonical(&self) -> CLiteral;
}

/// The canonical literal.
#[derive(Clone, Copy, Debug)]
pub struct CLiteral {
    atom: Atom,
    polarity: bool,
}

impl CLiteral {
    /// A literal pairing `atom` with `polarity`.
    pub const fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }
}

impl Literal for CLiteral {
    fn fresh(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn canonical(&self) -> CLiteral {
        *self
    }
}

impl std::ops::Neg for CLiteral {
    type Output = CLiteral;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl PartialEq for CLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity == other.polarity
    }
}

impl Eq for CLiteral {}

impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl std::hash::Hash for CLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.atom.hash(state);
        self.polarity.hash(state);
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}
