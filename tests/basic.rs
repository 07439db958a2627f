use marten_sat::{config::Config, context::Context, reports::Report};

mod basic {

    use marten_sat::{
        structures::literal::{CLiteral, Literal},
        types::err::{self, ErrorKind},
    };

    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_literal("p").expect("atoms exhausted");

        assert!(ctx.add_clause(p).is_ok());
        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.value_of(p.atom()), Some(true));
    }

    #[test]
    fn one_negative_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_literal("p").expect("atoms exhausted");

        assert!(ctx.add_clause(-p).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(p.atom()), Some(false));
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_literal("p").expect("atoms exhausted");
        let q = ctx.fresh_literal("q").expect("atoms exhausted");

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_literal("p").expect("atoms exhausted");
        let q = ctx.fresh_literal("q").expect("atoms exhausted");

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(-p).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn implied_pair() {
        let mut ctx = Context::from_config(Config::default());

        let a = ctx.fresh_literal("a").expect("atoms exhausted");
        let b = ctx.fresh_literal("b").expect("atoms exhausted");

        assert!(ctx.add_clause(vec![a, b]).is_ok());
        assert!(ctx.add_clause(vec![-a, b]).is_ok());
        assert!(ctx.add_clause(vec![a, -b]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(a.atom()), Some(true));
        assert_eq!(ctx.value_of(b.atom()), Some(true));
    }

    #[test]
    fn one_of_three() {
        let mut ctx = Context::from_config(Config::default());

        let a = ctx.fresh_literal("a").expect("atoms exhausted");
        let b = ctx.fresh_literal("b").expect("atoms exhausted");
        let c = ctx.fresh_literal("c").expect("atoms exhausted");

        assert!(ctx.add_clause(vec![a, b, c]).is_ok());
        assert!(ctx.add_clause(vec![-a, -b]).is_ok());
        assert!(ctx.add_clause(vec![-b, -c]).is_ok());
        assert!(ctx.add_clause(vec![-a, -c]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let trues = [a, b, c]
            .iter()
            .filter(|l| ctx.value_of(l.atom()) == Some(true))
            .count();
        assert_eq!(trues, 1);
    }

    #[test]
    fn empty_clause_rejected() {
        let mut ctx = Context::from_config(Config::default());
        let empty: Vec<CLiteral> = vec![];

        assert_eq!(
            ctx.add_clause(empty),
            Err(ErrorKind::ClauseDB(err::ClauseDBError::EmptyClause))
        );
    }

    #[test]
    fn unknown_atom_rejected() {
        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.fresh_atom("p").expect("atoms exhausted");

        assert_eq!(
            ctx.add_clause(CLiteral::new(5, true)),
            Err(ErrorKind::AtomDB(err::AtomDBError::UnknownAtom))
        );
    }

    #[test]
    fn duplicate_literals_tolerated() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_literal("p").expect("atoms exhausted");
        let q = ctx.fresh_literal("q").expect("atoms exhausted");

        assert!(ctx.add_clause(vec![p, p, q, q]).is_ok());
        assert!(ctx.add_clause(vec![-p]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn solve_is_idempotent() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_literal("p").expect("atoms exhausted");
        let q = ctx.fresh_literal("q").expect("atoms exhausted");

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        let first_model = ctx.model().expect("no model");

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model().expect("no model"), first_model);
    }

    #[test]
    fn clear_decisions_resets() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_literal("p").expect("atoms exhausted");
        let q = ctx.fresh_literal("q").expect("atoms exhausted");

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        ctx.clear_decisions();
        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(ctx.value_of(p.atom()), None);
        assert_eq!(ctx.value_of(q.atom()), None);
    }

    #[test]
    fn addition_after_solve() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_literal("p").expect("atoms exhausted");

        assert!(ctx.add_clause(p).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p.atom()), Some(true));

        assert!(ctx.add_clause(-p).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn model_satisfies_the_formula() {
        let mut ctx = Context::from_config(Config::default());

        let literals = ["a", "b", "c", "d", "e"]
            .map(|name| ctx.fresh_literal(name).expect("atoms exhausted"));
        let [a, b, c, d, e] = literals;

        assert!(ctx.add_clause(vec![a, b, -c]).is_ok());
        assert!(ctx.add_clause(vec![-a, d]).is_ok());
        assert!(ctx.add_clause(vec![c, -d, e]).is_ok());
        assert!(ctx.add_clause(vec![-b, -e]).is_ok());
        assert!(ctx.add_clause(vec![a, c, e]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        for (_key, clause) in ctx.clause_db.all_clauses() {
            let satisfied = clause
                .literals()
                .iter()
                .any(|literal| ctx.value_of(literal.atom()) == Some(literal.polarity()));
            assert!(satisfied);
        }
    }
}
