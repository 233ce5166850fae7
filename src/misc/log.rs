/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information on the progress of a search, and for fixing issues.

Note, no log implementation is provided by the library.
The binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so logs of, e.g., WalkSAT may be filtered with `RUST_LOG=walksat …`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [GSAT](crate::procedures::gsat)
    pub const GSAT: &str = "gsat";

    /// Logs related to [WalkSAT](crate::procedures::walksat)
    pub const WALKSAT: &str = "walksat";

    /// Logs related to [DPLL](crate::procedures::dpll)
    pub const DPLL: &str = "dpll";

    /// Logs related to pure literal elimination and unit propagation during [DPLL](crate::procedures::dpll)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the choice of a [successor](crate::procedures::successor) model
    pub const SUCCESSOR: &str = "successor";

    /// Logs related to [parsing](crate::builder::dimacs)
    pub const PARSE: &str = "parse";
}
