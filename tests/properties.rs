use proptest::prelude::*;
use rand::SeedableRng;

use trisat::{
    config::{GSATConfig, WalkSATConfig},
    generic::random::MinimalPCG32,
    procedures::{
        dpll::dpll,
        evaluate::{count_satisfied, falsified_clauses, formula_satisfied},
        gsat::gsat,
        successor::{count_on_flip, rand_best_successor},
        walksat::walksat,
    },
    reports::Outcome,
    structures::{
        formula::Formula,
        literal::{CLiteral, Literal},
        valuation::Model,
    },
};

/// Formulas over at most six atoms, with at most three literals per clause.
fn small_formula() -> impl Strategy<Value = Formula> {
    (1_u32..=6).prop_flat_map(|atom_count| {
        let literal = (1..=atom_count, any::<bool>())
            .prop_map(|(atom, polarity)| CLiteral::new(atom, polarity));
        let clause = prop::collection::vec(literal, 1..=3);
        prop::collection::vec(clause, 1..=16)
            .prop_map(move |clauses| Formula::new(atom_count, clauses).unwrap())
    })
}

/// The model of the formula given by the low bits of `bits`.
fn model_from_bits(formula: &Formula, bits: u64) -> Model {
    Model::from(
        (0..formula.atom_count())
            .map(|index| (bits >> index) & 1 == 1)
            .collect::<Vec<_>>(),
    )
}

fn satisfiable_by_enumeration(formula: &Formula) -> bool {
    (0..1_u64 << formula.atom_count())
        .any(|bits| formula_satisfied(formula, &model_from_bits(formula, bits)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_evaluator_agreement(formula in small_formula(), bits in any::<u64>()) {
        let model = model_from_bits(&formula, bits);
        let count = count_satisfied(&formula, &model);

        prop_assert_eq!(formula_satisfied(&formula, &model), count == formula.clause_count());
        prop_assert_eq!(falsified_clauses(&formula, &model).len(), formula.clause_count() - count);
    }

    #[test]
    fn prop_dpll_agrees_with_enumeration(formula in small_formula()) {
        match dpll(&formula) {
            Ok(Outcome::Model(model)) => {
                prop_assert!(formula_satisfied(&formula, &model));
                prop_assert!(formula.check_model(&model).is_ok());
            }
            Ok(Outcome::Unsatisfiable) => prop_assert!(!satisfiable_by_enumeration(&formula)),
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn prop_local_search_is_sound(formula in small_formula(), seed in any::<u64>()) {
        let mut rng = MinimalPCG32::seed_from_u64(seed);

        let outcomes = [
            gsat(&formula, &GSATConfig::with_budgets(2, 20).unwrap(), &mut rng),
            walksat(&formula, &WalkSATConfig::with_budget(0.5, 50).unwrap(), &mut rng),
        ];

        for outcome in outcomes {
            match outcome {
                Ok(Outcome::Model(model)) => prop_assert!(formula_satisfied(&formula, &model)),
                Ok(Outcome::NoDecision) => {}
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }
    }

    #[test]
    fn prop_greedy_flip_is_maximal(formula in small_formula(), bits in any::<u64>(), seed in any::<u64>()) {
        let mut model = model_from_bits(&formula, bits);
        let mut rng = MinimalPCG32::seed_from_u64(seed);

        let best = formula
            .atoms()
            .map(|atom| count_on_flip(&formula, &mut model, atom))
            .max();

        let chosen = rand_best_successor(&formula, &mut model, formula.atoms(), &mut rng);
        prop_assert!(chosen.is_some());

        if let Some(atom) = chosen {
            prop_assert_eq!(Some(count_on_flip(&formula, &mut model, atom)), best);
        }
    }
}
