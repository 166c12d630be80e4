use std::{cell::RefCell, rc::Rc};

use cdcl_sat::{
    config::Config,
    context::Context,
    db::LevelIndex,
    generic::random::MinimalPCG32,
    reports::Report,
    structures::{
        atom::Indexing,
        clause::{CClause, Clause},
        literal::CLiteral,
    },
};
use rand::{Rng, SeedableRng};

/// A random formula of clauses with three distinct one-based variables each.
fn random_formula(seed: u64, variable_count: usize, clause_count: usize) -> Vec<Vec<i32>> {
    let mut rng = MinimalPCG32::seed_from_u64(seed);
    let mut formula = Vec::with_capacity(clause_count);

    for _ in 0..clause_count {
        let mut clause: Vec<i32> = Vec::with_capacity(3);
        while clause.len() < 3 {
            let variable = rng.random_range(1..=variable_count as i32);
            if clause.iter().any(|literal| literal.abs() == variable) {
                continue;
            }
            match rng.random_bool(0.5) {
                true => clause.push(variable),
                false => clause.push(-variable),
            }
        }
        formula.push(clause);
    }
    formula
}

/// Pigeons `0..=holes` into holes `0..holes`, where variable `p * holes + h + 1` places pigeon `p` in hole `h`.
fn pigeonhole(holes: i32) -> (usize, Vec<Vec<i32>>) {
    let pigeons = holes + 1;
    let placed = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;

    let mut formula: Vec<Vec<i32>> = Vec::default();
    for pigeon in 0..pigeons {
        formula.push((0..holes).map(|hole| placed(pigeon, hole)).collect());
    }
    for hole in 0..holes {
        for first in 0..pigeons {
            for second in (first + 1)..pigeons {
                formula.push(vec![-placed(first, hole), -placed(second, hole)]);
            }
        }
    }

    ((pigeons * holes) as usize, formula)
}

fn context_from(config: Config, variable_count: usize, formula: &[Vec<i32>]) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut the_context = Context::from_config(config);
    assert!(the_context.fresh_atoms(variable_count).is_ok());
    for clause in formula {
        assert!(the_context.add_external_clause(clause, Indexing::OneBased).is_ok());
    }
    the_context
}

/// Every valuation of `variable_count` atoms, as canonical valuations (index zero unused).
fn all_valuations(variable_count: usize) -> impl Iterator<Item = Vec<Option<bool>>> {
    (0..(1_u32 << variable_count)).map(move |bits| {
        std::iter::once(None)
            .chain((0..variable_count).map(|index| Some(bits & (1 << index) != 0)))
            .collect()
    })
}

fn sorted(clause: &CClause) -> CClause {
    let mut clause = clause.clone();
    clause.sort();
    clause.dedup();
    clause
}

mod soundness {
    use cdcl_sat::procedures::analysis::resolve;

    use super::*;

    #[test]
    fn random_three_sat() {
        let variable_count = 8;

        for seed in 0..48 {
            let formula = random_formula(seed, variable_count, 34);
            let mut ctx = context_from(Config::default(), variable_count, &formula);

            let models = all_valuations(variable_count)
                .filter(|valuation| formula.iter().all(|clause| clause.satisfied_on(valuation)))
                .collect::<Vec<_>>();

            match ctx.solve() {
                Ok(Report::Satisfiable) => {
                    assert!(!models.is_empty());

                    let Ok(model) = ctx.model() else {
                        panic!("Satisfiable without a model");
                    };
                    let valuation = std::iter::once(None)
                        .chain(model.into_iter().map(Some))
                        .collect::<Vec<_>>();

                    assert!(ctx
                        .clause_db
                        .original_clauses()
                        .all(|clause| clause.satisfied_on(&valuation)));
                    assert!(formula.iter().all(|clause| clause.satisfied_on(&valuation)));
                }

                Ok(Report::Unsatisfiable) => assert!(models.is_empty()),

                otherwise => panic!("Unexpected result {otherwise:?}"),
            }

            for learned in ctx.clause_db.learned_clauses() {
                assert!(models.iter().all(|model| learned.satisfied_on(model)));
            }
        }
    }

    #[test]
    fn derivation_replay() {
        let (variable_count, formula) = pigeonhole(3);

        for seed in 0..4 {
            let mut formula = formula.clone();
            formula.extend(random_formula(seed, variable_count, 6));

            let mut ctx = context_from(Config::default(), variable_count, &formula);
            assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
            assert!(ctx.clause_db.learned_count() > 0);

            for learned in ctx.clause_db.learned_clauses() {
                let Some(derivation) = learned.derivation() else {
                    panic!("Missing derivation");
                };
                let Some(conflict) = derivation.conflict else {
                    panic!("Missing conflict");
                };
                assert!(conflict < learned.key());

                let Ok(conflict) = ctx.clause_db.get(&conflict) else {
                    panic!("Missing conflict clause");
                };
                let mut replay = conflict.clause().clone();

                // Each step resolves on an atom assigned strictly earlier than the last, so no pivot repeats.
                let mut pivots = derivation.steps.iter().map(|step| step.pivot).collect::<Vec<_>>();
                pivots.sort_unstable();
                pivots.dedup();
                assert_eq!(pivots.len(), derivation.steps.len());

                for step in &derivation.steps {
                    assert!(step.antecedent < learned.key());
                    let Ok(antecedent) = ctx.clause_db.get(&step.antecedent) else {
                        panic!("Missing antecedent");
                    };
                    let Ok(resolvent) = resolve(&replay, antecedent, step.pivot) else {
                        panic!("Resolution failed");
                    };
                    replay = resolvent;
                }

                assert_eq!(sorted(&replay), sorted(learned.clause()));
            }
        }
    }

    #[test]
    fn backjump_validity() {
        let records: Rc<RefCell<Vec<(CClause, LevelIndex, LevelIndex)>>> = Rc::default();

        let (variable_count, formula) = pigeonhole(3);
        let mut ctx = context_from(Config::default(), variable_count, &formula);

        let record = records.clone();
        ctx.set_callback_learned(Box::new(
            move |clause: &CClause, conflict_level: LevelIndex, backjump_level: LevelIndex| {
                record
                    .borrow_mut()
                    .push((clause.clone(), conflict_level, backjump_level))
            },
        ));

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));

        let records = records.borrow();
        assert!(!records.is_empty());
        assert_eq!(records.len(), ctx.counters.learned_clauses);

        for (clause, conflict_level, backjump_level) in records.iter() {
            assert!(*conflict_level > 0);
            assert!(backjump_level < conflict_level);
            assert!(!clause.is_empty());
        }

        // Every conflict above level zero is followed by a backjump.
        assert_eq!(ctx.counters.total_conflicts, records.len() + 1);
    }
}

mod pigeonhole {
    use super::*;

    #[test]
    fn four_into_three() {
        let (variable_count, formula) = pigeonhole(3);
        assert_eq!(
            cdcl_sat::solve(variable_count, &formula, Indexing::OneBased),
            Ok(cdcl_sat::reports::Solution::Unsatisfiable)
        );

        // Conflicts are bounded by the count of valuations.
        let mut ctx = context_from(Config::default(), variable_count, &formula);
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.total_conflicts > 0);
        assert!(ctx.counters.total_conflicts <= 1 << variable_count);
        assert_eq!(ctx.counters.learned_clauses + 1, ctx.counters.total_conflicts);
    }

    #[test]
    fn five_into_four() {
        let (variable_count, formula) = pigeonhole(4);
        let mut ctx = context_from(Config::default(), variable_count, &formula);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.learned_clauses > 0);
        assert_eq!(ctx.clause_db.original_count(), formula.len());
    }

    #[test]
    fn four_into_four() {
        let (_, mut formula) = pigeonhole(4);
        // Drop the last pigeon, by dropping the clause placing the pigeon in some hole.
        formula.remove(4);

        let Ok(cdcl_sat::reports::Solution::Satisfiable(model)) =
            cdcl_sat::solve(20, &formula, Indexing::OneBased)
        else {
            panic!("Expected a model");
        };

        for pigeon in 0..4 {
            assert!((0..4).any(|hole| model[pigeon * 4 + hole]));
        }
    }
}

mod determinism {
    use cdcl_sat::config::Polarity;

    use super::*;

    fn decisions_of(
        config: Config,
        variable_count: usize,
        formula: &[Vec<i32>],
    ) -> (Report, Vec<CLiteral>) {
        let decisions: Rc<RefCell<Vec<CLiteral>>> = Rc::default();
        let mut ctx = context_from(config, variable_count, formula);

        let record = decisions.clone();
        ctx.set_callback_decision(Box::new(move |literal| record.borrow_mut().push(literal)));

        let Ok(report) = ctx.solve() else {
            panic!("Solve failed");
        };
        let decisions = decisions.borrow().clone();
        (report, decisions)
    }

    #[test]
    fn repeated_runs() {
        let formula = random_formula(3, 12, 50);

        for polarity in [Polarity::Negative, Polarity::Saved, Polarity::Random] {
            let mut config = Config::default();
            config.polarity.value = polarity;
            config.seed = 11;

            let first = decisions_of(config.clone(), 12, &formula);
            let second = decisions_of(config, 12, &formula);

            assert!(!first.1.is_empty());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn seeded_polarity() {
        let (variable_count, formula) = pigeonhole(3);

        let mut config = Config::default();
        config.polarity.value = Polarity::Random;

        let mut runs = Vec::default();
        for seed in [5, 5, 6] {
            config.seed = seed;
            runs.push(decisions_of(config.clone(), variable_count, &formula));
        }

        assert_eq!(runs[0], runs[1]);
        assert!(runs.iter().all(|(report, _)| *report == Report::Unsatisfiable));
    }
}

mod limits {
    use std::time::Duration;

    use cdcl_sat::types::err::ErrorKind;

    use super::*;

    #[test]
    fn conflict_limit() {
        let (variable_count, formula) = pigeonhole(4);

        let mut config = Config::default();
        config.conflict_limit = Some(3);
        let mut ctx = context_from(config.clone(), variable_count, &formula);

        assert_eq!(ctx.solve(), Ok(Report::ConflictLimit));
        assert_eq!(ctx.counters.total_conflicts, 3);
        assert_eq!(ctx.clause_db.learned_count(), 3);
        assert!(ctx.solution().is_err());

        assert_eq!(
            cdcl_sat::solve_with_config(variable_count, &formula, Indexing::OneBased, config),
            Err(ErrorKind::InvalidState)
        );
    }

    #[test]
    fn time_limit() {
        let (variable_count, formula) = pigeonhole(5);

        let mut config = Config::default();
        config.time_limit = Some(Duration::ZERO);
        let mut ctx = context_from(config, variable_count, &formula);

        assert_eq!(ctx.solve(), Ok(Report::TimeUp));
    }

    #[test]
    fn terminate_callback() {
        let (variable_count, formula) = pigeonhole(4);
        let mut ctx = context_from(Config::default(), variable_count, &formula);

        let mut calls = 0;
        ctx.set_callback_terminate(Box::new(move || {
            calls += 1;
            calls > 10
        }));

        assert_eq!(ctx.solve(), Ok(Report::Terminated));
        assert_eq!(ctx.report(), Report::Terminated);
        assert!(ctx.model().is_err());
    }
}
