use cdcl_sat::{
    config::Config,
    context::Context,
    reports::{Report, Solution},
    structures::atom::Indexing,
};

fn context_from(variable_count: usize, clauses: &[Vec<i32>], indexing: Indexing) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut the_context = Context::from_config(Config::default());
    assert!(the_context.fresh_atoms(variable_count).is_ok());
    for clause in clauses {
        assert!(the_context.add_external_clause(clause, indexing).is_ok());
    }
    the_context
}

fn satisfies(model: &[bool], clauses: &[Vec<i32>], indexing: Indexing) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|literal| {
            match indexing.decode(*literal as i64) {
                Some((variable, polarity)) => {
                    let index = match indexing {
                        Indexing::OneBased => variable - 1,
                        Indexing::ZeroBased => variable,
                    };
                    model[index] == polarity
                }
                None => false,
            }
        })
    })
}

mod scenarios {
    use cdcl_sat::config::Polarity;

    use super::*;

    #[test]
    fn satisfiable() {
        let clauses = vec![vec![3], vec![1, 2], vec![2, 3]];

        let Ok(Solution::Satisfiable(model)) = cdcl_sat::solve(3, &clauses, Indexing::OneBased)
        else {
            panic!("Expected a model");
        };

        assert_eq!(model.len(), 3);
        assert!(satisfies(&model, &clauses, Indexing::OneBased));
        assert_eq!(model, vec![false, true, true]);
    }

    #[test]
    fn satisfiable_zero_based() {
        let clauses = vec![vec![2], vec![0, 1], vec![1, 2]];

        let Ok(Solution::Satisfiable(model)) = cdcl_sat::solve(3, &clauses, Indexing::ZeroBased)
        else {
            panic!("Expected a model");
        };

        assert!(satisfies(&model, &clauses, Indexing::ZeroBased));
        assert!(model[2]);
    }

    #[test]
    fn zero_based_variable_zero_negated() {
        // -1 is the negation of variable 0.
        let clauses = vec![vec![-1], vec![0, 1]];

        let Ok(Solution::Satisfiable(model)) = cdcl_sat::solve(2, &clauses, Indexing::ZeroBased)
        else {
            panic!("Expected a model");
        };

        assert_eq!(model, vec![false, true]);
    }

    #[test]
    fn unsatisfiable() {
        let mut ctx = context_from(1, &[vec![1], vec![-1]], Indexing::OneBased);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.counters.total_decisions, 0);
        assert_eq!(ctx.counters.learned_clauses, 0);
        assert!(ctx.unsatisfiable_clause().is_ok_and(|key| key.index() == 1));
        assert_eq!(ctx.solution(), Ok(Solution::Unsatisfiable));
    }

    #[test]
    fn forced_chain() {
        let mut ctx = context_from(3, &[vec![1], vec![-1, 2], vec![-2, 3]], Indexing::OneBased);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.counters.total_decisions, 0);
        assert_eq!(ctx.counters.total_propagations, 3);
        assert_eq!(ctx.model(), Ok(vec![true, true, true]));
    }

    #[test]
    fn learning_required() {
        let clauses = [vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]];

        for polarity in [Polarity::Negative, Polarity::Positive] {
            let mut config = Config::default();
            config.polarity.value = polarity;

            let mut ctx = Context::from_config(config);
            assert!(ctx.fresh_atoms(2).is_ok());
            for clause in &clauses {
                assert!(ctx.add_external_clause(clause, Indexing::OneBased).is_ok());
            }

            assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
            assert!(ctx.counters.learned_clauses >= 1);
            assert!(ctx.counters.total_backjumps >= 1);
            assert!(ctx.counters.total_decisions >= 1);
        }
    }
}

mod malformed {
    use cdcl_sat::types::err::{BuildError, ErrorKind};

    use super::*;

    #[test]
    fn zero_literal_one_based() {
        assert_eq!(
            cdcl_sat::solve(2, &[vec![1, 0, 2]], Indexing::OneBased),
            Err(ErrorKind::Build(BuildError::UnrepresentableLiteral(0)))
        );
    }

    #[test]
    fn variable_out_of_range() {
        assert_eq!(
            cdcl_sat::solve(2, &[vec![1], vec![-3]], Indexing::OneBased),
            Err(ErrorKind::Build(BuildError::UnknownVariable(-3)))
        );

        assert_eq!(
            cdcl_sat::solve(2, &[vec![2]], Indexing::ZeroBased),
            Err(ErrorKind::Build(BuildError::UnknownVariable(2)))
        );

        assert_eq!(
            cdcl_sat::solve(2, &[vec![-3]], Indexing::ZeroBased),
            Err(ErrorKind::Build(BuildError::UnknownVariable(-3)))
        );
    }

    #[test]
    fn rejected_before_search() {
        let mut ctx = context_from(2, &[vec![1, 2]], Indexing::OneBased);

        assert!(ctx.add_external_clause(&[5], Indexing::OneBased).is_err());
        assert_eq!(ctx.clause_db.clause_count(), 1);
        assert_eq!(ctx.report(), Report::Unknown);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn empty_clause() {
        assert_eq!(
            cdcl_sat::solve(2, &[vec![1, 2], vec![]], Indexing::OneBased),
            Ok(Solution::Unsatisfiable)
        );
    }

    #[test]
    fn no_variables() {
        assert_eq!(
            cdcl_sat::solve::<Vec<i32>>(0, &[], Indexing::OneBased),
            Ok(Solution::Satisfiable(Vec::default()))
        );
    }
}
