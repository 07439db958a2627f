use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    generic::random::MinimalPCG32,
};

use rand::SeedableRng;

use super::{ContextState, Counters, GenericContext};

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::default(),
            watches: Watches::default(),
            trail: Trail::default(),

            config,

            counters: Counters::default(),

            rng: MinimalPCG32::from_seed(0_u64.to_le_bytes()),
            state: ContextState::Configuration,

            callback_theory: None,
            callback_backtrack: None,
            callback_polarity_hint: None,
        }
    }
}
