/*!
Configuration of a context.

All configuration of a context is contained in a [Config], fixed when the
context is built from the config.
Some structures clone the parts of the configuration relevant to them, notably
the [atom database](crate::db::atom).
*/

/// The representation of atom activity.
pub type Activity = f64;

/// The probability of assigning true when freely choosing a value for an atom.
pub type PolarityLean = f64;

/// The probability of making a random choice of atom when deciding.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The activity added to an atom when bumped, dynamically adjusted.
    pub activity_bump: Activity,

    /// The decay applied to the activity of atoms after each conflict.
    pub activity_decay: Activity,

    /// The activity at which all activities are rescored.
    pub activity_max: Activity,

    /// The count of conflicts to tolerate before a restart.
    pub conflict_budget: u32,

    /// The factor by which the conflict budget grows on each restart.
    pub budget_growth: f64,

    /// Default to the cached value of an atom when choosing a value for the
    /// atom, otherwise decide the value with [polarity_lean](Config::polarity_lean).
    pub phase_saving: bool,

    /// The probability of assigning true when freely choosing a value.
    pub polarity_lean: PolarityLean,

    /// The probability of choosing the decision atom at random rather than by
    /// activity.
    pub random_decision_bias: RandomDecisionBias,

    /// Permit backjumping to level zero when the conflict budget is spent.
    /// Otherwise, the search continues in place with a grown budget.
    pub restarts: bool,
}

impl Default for Config {
    /// The default config provides quick, deterministic, results on a library
    /// of tests.
    fn default() -> Self {
        Config {
            activity_bump: 1.0,
            activity_decay: 50.0 * 1e-3,
            activity_max: (2.0 as Activity).powi(512),
            conflict_budget: 100,
            budget_growth: 1.2,
            phase_saving: true,
            polarity_lean: 0.0,
            random_decision_bias: 0.0,
            restarts: true,
        }
    }
}
