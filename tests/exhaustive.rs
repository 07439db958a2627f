use marten_sat::{
    config::Config,
    context::Context,
    generic::random::MinimalPCG32,
    reports::Report,
    structures::literal::CLiteral,
};

use rand_core::{RngCore, SeedableRng};

/// Clauses over atom indices, as (index, polarity) pairs.
type IndexClauses = Vec<Vec<(u32, bool)>>;

fn brute_force_satisfiable(atom_count: u32, clauses: &IndexClauses) -> bool {
    (0..1_u64 << atom_count).any(|assignment| {
        clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|(index, polarity)| ((assignment >> index) & 1 == 1) == *polarity)
        })
    })
}

fn random_clauses(rng: &mut MinimalPCG32, atom_count: u32, clause_count: u32) -> IndexClauses {
    (0..clause_count)
        .map(|_| {
            let length = 1 + (rng.next_u32() % 3);
            (0..length)
                .map(|_| (rng.next_u32() % atom_count, rng.next_u32() & 1 == 1))
                .collect()
        })
        .collect()
}

fn cross_check(config: &Config, seed: u64, atom_count: u32, clause_count: u32) {
    let mut rng = MinimalPCG32::from_seed(seed.to_le_bytes());
    let clauses = random_clauses(&mut rng, atom_count, clause_count);

    let mut ctx = Context::from_config(config.clone());
    let atoms: Vec<_> = (0..atom_count)
        .map(|index| {
            ctx.fresh_atom(&format!("x{index}"))
                .expect("atoms exhausted")
        })
        .collect();

    for clause in &clauses {
        let literals: Vec<_> = clause
            .iter()
            .map(|(index, polarity)| CLiteral::new(atoms[*index as usize], *polarity))
            .collect();
        assert!(ctx.add_clause(literals).is_ok());
    }

    let report = ctx.solve().expect("solve failed");

    match brute_force_satisfiable(atom_count, &clauses) {
        true => {
            assert_eq!(report, Report::Satisfiable, "seed {seed}");
            for clause in &clauses {
                let satisfied = clause.iter().any(|(index, polarity)| {
                    ctx.value_of(atoms[*index as usize]) == Some(*polarity)
                });
                assert!(satisfied, "seed {seed}");
            }
        }
        false => assert_eq!(report, Report::Unsatisfiable, "seed {seed}"),
    }
}

mod exhaustive {

    use super::*;

    #[test]
    fn agreement_on_small_formulas() {
        for seed in 0..32 {
            cross_check(&Config::default(), seed, 4, 10);
        }
    }

    #[test]
    fn agreement_on_medium_formulas() {
        for seed in 0..16 {
            cross_check(&Config::default(), seed, 7, 24);
        }
    }

    #[test]
    fn agreement_with_a_tight_budget() {
        let config = Config {
            conflict_budget: 5,
            ..Config::default()
        };
        for seed in 0..16 {
            cross_check(&config, seed, 5, 16);
        }
    }

    #[test]
    fn agreement_without_restarts() {
        let config = Config {
            restarts: false,
            conflict_budget: 5,
            ..Config::default()
        };
        for seed in 0..16 {
            cross_check(&config, seed, 5, 16);
        }
    }

    #[test]
    fn agreement_with_random_decisions() {
        let config = Config {
            random_decision_bias: 0.5,
            polarity_lean: 0.5,
            phase_saving: false,
            ..Config::default()
        };
        for seed in 0..16 {
            cross_check(&config, seed, 5, 16);
        }
    }
}
