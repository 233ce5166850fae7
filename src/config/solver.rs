use std::str::FromStr;

/// The procedures available to determine satisfiability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Solver {
    /// Hill-climbing over models, with restarts.
    GSAT = 0,

    /// Noisy local search over models, guided by falsified clauses.
    WalkSAT,

    /// Backtracking search over trails, with pure literal elimination and unit propagation.
    DPLL,
}

impl Solver {
    /// Each solver, in a fixed order.
    pub const ALL: [Solver; 3] = [Solver::GSAT, Solver::WalkSAT, Solver::DPLL];

    /// Whether the solver always decides satisfiability.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::DPLL)
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GSAT => write!(f, "gsat"),
            Self::WalkSAT => write!(f, "walksat"),
            Self::DPLL => write!(f, "dpll"),
        }
    }
}

impl FromStr for Solver {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gsat" => Ok(Self::GSAT),

            "walksat" => Ok(Self::WalkSAT),

            "dpll" => Ok(Self::DPLL),

            _unknown_string => Err(()),
        }
    }
}

#[cfg(test)]
mod solver_tests {
    use super::*;

    #[test]
    fn names() {
        for solver in Solver::ALL {
            assert_eq!(solver.to_string().parse::<Solver>(), Ok(solver));
        }
        assert_eq!("WalkSAT".parse::<Solver>(), Ok(Solver::WalkSAT));
        assert!("cdcl".parse::<Solver>().is_err());
    }
}
