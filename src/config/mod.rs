/*!
Configuration of a solve.

The local search procedures are configured by budgets, and WalkSAT by the probability of a random walk.
Backtracking search has no configuration.

Each option is a [ConfigOption], which bounds the value of the option.
The bounds of an option are checked by a procedure before any search begins, and a value outside the bounds is an [error](crate::types::err::ConfigError).

No budget is scaled to the size of a formula, and so a caller should choose budgets relative to the count of atoms in a formula.

```rust
# use trisat::config::Config;
let mut config = Config::default();
assert!(config.gsat.max_restarts.set(50).is_ok());
assert!(config.walksat.noise.set(1.1).is_err());
assert!(config.walksat.max_flips.set(0).is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod solver;
pub use solver::Solver;

use crate::types::err::{self};

/// Representation for the probability of a random walk.
pub type Noise = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of GSAT.
    pub gsat: GSATConfig,

    /// Configuration of WalkSAT.
    pub walksat: WalkSATConfig,

    /// The seed for the source of rng.
    pub seed: u64,
}

/// Configuration of GSAT.
#[derive(Clone, Debug)]
pub struct GSATConfig {
    /// The number of attempts, each from a fresh random model.
    pub max_restarts: ConfigOption<usize>,

    /// The number of flips made during an attempt.
    pub max_climbs: ConfigOption<usize>,
}

/// Configuration of WalkSAT.
#[derive(Clone, Debug)]
pub struct WalkSATConfig {
    /// The probability of flipping a random atom of a falsified clause, rather than the best atom.
    pub noise: ConfigOption<Noise>,

    /// The number of flips made.
    pub max_flips: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gsat: GSATConfig::default(),
            walksat: WalkSATConfig::default(),
            seed: 0,
        }
    }
}

impl Default for GSATConfig {
    fn default() -> Self {
        GSATConfig {
            max_restarts: ConfigOption {
                name: "max_restarts",
                min: 1,
                max: usize::MAX,
                value: 10,
            },

            max_climbs: ConfigOption {
                name: "max_climbs",
                min: 1,
                max: usize::MAX,
                value: 100,
            },
        }
    }
}

impl Default for WalkSATConfig {
    fn default() -> Self {
        WalkSATConfig {
            noise: ConfigOption {
                name: "noise",
                min: 0.0,
                max: 1.0,
                value: 0.5,
            },

            max_flips: ConfigOption {
                name: "max_flips",
                min: 1,
                max: usize::MAX,
                value: 1000,
            },
        }
    }
}

impl GSATConfig {
    /// A configuration with the given budgets, if the budgets are positive.
    pub fn with_budgets(max_restarts: usize, max_climbs: usize) -> Result<Self, err::ConfigError> {
        let mut config = Self::default();
        config.max_restarts.set(max_restarts)?;
        config.max_climbs.set(max_climbs)?;
        Ok(config)
    }

    /// Checks each option is within bounds.
    pub fn check(&self) -> Result<(), err::ConfigError> {
        self.max_restarts.check()?;
        self.max_climbs.check()
    }
}

impl WalkSATConfig {
    /// A configuration with the given noise and budget, if the noise is a probability and the budget is positive.
    pub fn with_budget(noise: Noise, max_flips: usize) -> Result<Self, err::ConfigError> {
        let mut config = Self::default();
        config.noise.set(noise)?;
        config.max_flips.set(max_flips)?;
        Ok(config)
    }

    /// Checks each option is within bounds.
    pub fn check(&self) -> Result<(), err::ConfigError> {
        self.noise.check()?;
        self.max_flips.check()
    }
}
