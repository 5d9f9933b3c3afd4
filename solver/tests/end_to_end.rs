use rand::Rng;

use solver::branching::DefaultHeuristic;
use solver::{Clause, Literal, Outcome, Solver, VarId};

#[test]
fn dimacs_parses_and_solves_a_small_instance() {
    let input = "c a trivial satisfiable instance\np cnf 3 2\n1 2 0\n-1 3 0\n";
    let (num_vars, clauses) = solver::dimacs::parse(input).unwrap();
    assert_eq!(num_vars, 3);

    let variables: solver::util::HashSet<VarId> = clauses.iter().flat_map(|c| c.vars()).collect();

    let mut solver = Solver::new(variables, clauses.clone(), Box::new(DefaultHeuristic));
    match solver.solve(None).unwrap() {
        Outcome::Sat(assignment) => assert!(assignment.status_of_formula(clauses.iter())),
        Outcome::Unsat => panic!("expected SAT"),
    }
}

#[test]
fn unsat_witness_via_public_api() {
    let clauses = vec![
        Clause::new(vec![Literal::neg(1), Literal::neg(2), Literal::pos(3)]),
        Clause::new(vec![Literal::pos(1), Literal::neg(2), Literal::pos(3)]),
        Clause::new(vec![Literal::neg(3), Literal::pos(4)]),
        Clause::new(vec![Literal::neg(3), Literal::neg(4)]),
        Clause::new(vec![Literal::neg(1), Literal::pos(3), Literal::pos(4)]),
        Clause::new(vec![Literal::neg(1), Literal::pos(2), Literal::neg(4)]),
        Clause::new(vec![Literal::pos(2), Literal::pos(3), Literal::neg(4)]),
        Clause::new(vec![Literal::pos(1), Literal::pos(2), Literal::pos(4)]),
    ];
    let variables: solver::util::HashSet<VarId> = (1..=4).collect();
    let mut solver = Solver::new(variables, clauses, Box::new(DefaultHeuristic));
    assert!(matches!(solver.solve(None).unwrap(), Outcome::Unsat));
}

/// On a satisfiable random small 3-SAT instance, the solver returns SAT and
/// the model satisfies every original clause.
#[test]
fn random_small_3sat_soundness() {
    let mut rng = rand::thread_rng();
    for seed in 0..20 {
        let num_vars = 10 + (seed % 15);
        let num_clauses = num_vars * 3;
        let mut clauses = Vec::with_capacity(num_clauses);
        // Plant a satisfying assignment first so the instance is guaranteed SAT.
        let planted: Vec<bool> = (0..=num_vars).map(|_| rng.gen_bool(0.5)).collect();
        for _ in 0..num_clauses {
            let mut literals = Vec::with_capacity(3);
            while literals.len() < 3 {
                let var = rng.gen_range(1, num_vars + 1);
                if literals.iter().any(|l: &Literal| l.var == var) {
                    continue;
                }
                let sign = rng.gen_bool(0.5);
                literals.push(Literal::new(var, sign));
            }
            if !literals.iter().any(|l| (l.sign == planted[l.var])) {
                let flip = literals.len() - 1;
                literals[flip].sign = planted[literals[flip].var];
            }
            clauses.push(Clause::new(literals));
        }

        let variables: solver::util::HashSet<VarId> = (1..=num_vars).collect();
        let mut solver = Solver::new(variables, clauses.clone(), Box::new(DefaultHeuristic));
        match solver.solve(None).unwrap() {
            Outcome::Sat(assignment) => {
                assert!(
                    assignment.status_of_formula(clauses.iter()),
                    "seed {}: model did not satisfy all clauses",
                    seed
                );
            }
            Outcome::Unsat => panic!("seed {}: planted-satisfiable instance reported UNSAT", seed),
        }
    }
}
