/*!
The context --- to which formulas are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is parameterised to its source of randomness, and the
[Context] fixes the source to a crate-local PCG32 so building from a config
does not require supplying an rng alongside.

# Example
```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::reports::Report;
# use marten_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_atom("p").unwrap();
let q = the_context.fresh_atom("q").unwrap();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);
assert!(the_context.add_clause(not_p).is_ok());

assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(p), Some(false));
assert_eq!(the_context.value_of(q), Some(true));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// The database is known to be consistent, with a complete valuation.
    Satisfiable,

    /// The database is known to be inconsistent.
    Unsatisfiable,

    /// The consistency of the database is unknown.
    Solving,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Solving => write!(f, "Solving"),
        }
    }
}
