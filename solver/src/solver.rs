use log::{debug, trace};

use crate::assignment::{Assignment, Status};
use crate::branching::BranchingHeuristic;
use crate::clause::{resolve, Clause};
use crate::error::Result;
use crate::formula::{ClauseId, Formula};
use crate::literal::{Literal, VarId};
use crate::state::StateManager;
use crate::stats::Statistics;
use crate::util::{HashSet, IndexSet};

/// Result of a full run: either a satisfying model, or a proof the formula
/// has none.
#[derive(Debug, Clone)]
pub enum Outcome {
    Sat(Assignment),
    Unsat,
}

/// Drives the CDCL loop: propagate, analyze conflicts, decide. Owns the
/// formula (originals plus whatever gets learnt) and the state manager.
pub struct Solver {
    formula: Formula,
    state: StateManager,
    heuristic: Box<dyn BranchingHeuristic>,
    level: usize,
}

impl Solver {
    pub fn new(variables: HashSet<VarId>, clauses: Vec<Clause>, heuristic: Box<dyn BranchingHeuristic>) -> Solver {
        let assignment = Assignment::from_variables(&variables);
        let mut ordered: Vec<VarId> = variables.iter().copied().collect();
        ordered.sort_unstable();
        let pool: IndexSet<VarId> = ordered.into_iter().collect();
        let num_vars = variables.iter().copied().max().unwrap_or(0);
        let state = StateManager::new(assignment, num_vars, pool);
        Solver { formula: Formula::new(clauses), state, heuristic, level: 0 }
    }

    pub fn solve(&mut self, mut stats: Option<&mut Statistics>) -> Result<Outcome> {
        loop {
            match propagate(&self.formula, &mut self.state, self.level, stats.as_deref_mut())? {
                Some(conflict_id) => {
                    if let Some(s) = stats.as_deref_mut() {
                        s.inc_conflicts();
                    }
                    if self.level == 0 {
                        debug!("conflict at decision level 0, unsatisfiable");
                        return Ok(Outcome::Unsat);
                    }
                    match analyze_conflict(conflict_id, &self.state, &self.formula, self.level)? {
                        None => return Ok(Outcome::Unsat),
                        Some((learnt, backtrack_level)) => {
                            trace!("learnt clause {} backtracking to level {}", learnt, backtrack_level);
                            self.state.revert_to(backtrack_level)?;
                            self.formula.learn(learnt);
                            self.level = backtrack_level;
                            if let Some(s) = stats.as_deref_mut() {
                                s.inc_backtracks();
                            }
                        }
                    }
                }
                None => {
                    if self.state.unassigned().is_empty() {
                        debug!("all variables assigned, satisfiable");
                        return Ok(Outcome::Sat(self.state.assignment.clone()));
                    }
                    self.level += 1;
                    let (var, polarity) = self
                        .heuristic
                        .select(&self.state, &self.formula)
                        .expect("unassigned pool is non-empty but heuristic found nothing to branch on");
                    trace!("decide {}={} at level {}", var, polarity, self.level);
                    self.state.record_decision(Literal::pos(var), polarity, self.level)?;
                    if let Some(s) = stats.as_deref_mut() {
                        s.inc_decisions();
                    }
                }
            }
        }
    }
}

/// Runs BCP to a fixpoint: repeatedly scans every clause in formula order,
/// conflicting on the first falsified one, else enqueuing every unit
/// clause's forced literal (deduplicated by variable) and applying the
/// whole batch before restarting the scan.
fn propagate(
    formula: &Formula,
    state: &mut StateManager,
    level: usize,
    mut stats: Option<&mut Statistics>,
) -> Result<Option<ClauseId>> {
    loop {
        let mut queue: Vec<(Literal, ClauseId)> = Vec::new();
        let mut queued_vars: HashSet<VarId> = HashSet::default();

        for (id, clause) in formula.iter() {
            match state.assignment.status(clause) {
                Status::True => continue,
                Status::False => return Ok(Some(id)),
                Status::Unassigned => {
                    let (is_unit, lit) = state.assignment.unit(clause);
                    if is_unit {
                        let lit = lit.expect("unit clause must name its forced literal");
                        if queued_vars.insert(lit.var) {
                            queue.push((lit, id));
                        }
                    }
                }
            }
        }

        if queue.is_empty() {
            return Ok(None);
        }

        for (lit, clause_id) in queue {
            let clause = formula.get(clause_id);
            state.record_implication(lit, true, (clause_id, clause), level)?;
            if let Some(s) = stats.as_deref_mut() {
                s.inc_propagations();
            }
        }
    }
}

/// First-UIP conflict analysis. Returns `None` only when `level == 0`
/// (root-level conflict, unsatisfiable); otherwise `(learnt clause,
/// backtrack level)`.
fn analyze_conflict(
    conflict: ClauseId,
    state: &StateManager,
    formula: &Formula,
    level: usize,
) -> Result<Option<(Clause, usize)>> {
    if level == 0 {
        return Ok(None);
    }

    let mut w = formula.get(conflict).clone();
    let mut done: HashSet<VarId> = HashSet::default();

    loop {
        let vars_in_w: HashSet<VarId> = w.vars().collect();
        let at_level = vars_in_w
            .iter()
            .filter(|v| state.level_of(**v).map(|l| l == level).unwrap_or(false))
            .count();
        if at_level <= 1 {
            break;
        }

        let history = state.history_at(level)?;
        let latest = history
            .iter()
            .rev()
            .find(|v| vars_in_w.contains(*v))
            .copied()
            .expect("a variable assigned at this level must appear in the current working clause");

        if !done.contains(&latest) {
            if let Some(antecedent_id) = state.antecedent_of(latest)? {
                let antecedent = formula.get(antecedent_id);
                w = resolve(&w, antecedent, latest)
                    .map_err(crate::error::SolverError::InvariantViolated)?;
            }
            done.insert(latest);
        }
    }

    let levels: Vec<usize> = w
        .vars()
        .map(|v| state.level_of(v))
        .collect::<Result<Vec<_>>>()?;

    let backtrack_level = if levels.len() <= 1 {
        0
    } else {
        let mut distinct = levels.clone();
        distinct.sort_unstable();
        distinct.dedup();
        distinct[distinct.len() - 2]
    };

    Ok(Some((w, backtrack_level)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::DefaultHeuristic;
    use crate::literal::Literal;

    fn vars(ids: &[VarId]) -> HashSet<VarId> {
        ids.iter().copied().collect()
    }

    #[test]
    fn canonical_bcp_conflict_and_backtrack() {
        let clauses = vec![
            Clause::new(vec![Literal::neg(1), Literal::neg(4), Literal::pos(5)]), // w1
            Clause::new(vec![Literal::neg(4), Literal::pos(6)]),                  // w2
            Clause::new(vec![Literal::neg(5), Literal::neg(6), Literal::pos(7)]), // w3
            Clause::new(vec![Literal::neg(7), Literal::pos(8)]),                  // w4
            Clause::new(vec![Literal::neg(2), Literal::neg(7), Literal::pos(9)]), // w5
            Clause::new(vec![Literal::neg(8), Literal::neg(9)]),                  // w6
            Clause::new(vec![Literal::neg(8), Literal::pos(9)]),                  // w7
        ];
        let formula = Formula::new(clauses);
        let all_vars: HashSet<VarId> = (1..=9).collect();
        let assignment = Assignment::from_variables(&all_vars);
        let mut ordered: Vec<VarId> = (1..=9).collect();
        ordered.sort_unstable();
        let pool: IndexSet<VarId> = ordered.into_iter().collect();
        let mut state = StateManager::new(assignment, 9, pool);

        for (var, level) in [(1, 1), (2, 2), (3, 3), (4, 4)] {
            state.record_decision(Literal::pos(var), true, level).unwrap();
        }

        let conflict = propagate(&formula, &mut state, 4, None).unwrap();
        assert!(conflict.is_some());
        let conflict_id = conflict.unwrap();
        assert_eq!(formula.get(conflict_id).len(), 2);

        let (learnt, backtrack_level) = analyze_conflict(conflict_id, &state, &formula, 4).unwrap().unwrap();
        let mut learnt_vars: Vec<VarId> = learnt.vars().collect();
        learnt_vars.sort_unstable();
        assert_eq!(learnt_vars, vec![2, 7]);
        assert_eq!(backtrack_level, 2);

        state.revert_to(backtrack_level).unwrap();
        assert!(state.history_at(3).is_err());
        assert!(state.history_at(4).is_err());
        assert_eq!(state.history_at(2).unwrap(), &[2]);
    }

    #[test]
    fn unsat_witness() {
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
        let mut solver = Solver::new(vars(&[1, 2, 3, 4]), clauses, Box::new(DefaultHeuristic));
        let outcome = solver.solve(None).unwrap();
        assert!(matches!(outcome, Outcome::Unsat));
    }

    #[test]
    fn solves_a_trivially_satisfiable_formula() {
        let clauses = vec![
            Clause::new(vec![Literal::pos(1), Literal::pos(2)]),
            Clause::new(vec![Literal::neg(1), Literal::pos(3)]),
        ];
        let mut solver = Solver::new(vars(&[1, 2, 3]), clauses.clone(), Box::new(DefaultHeuristic));
        let outcome = solver.solve(None).unwrap();
        match outcome {
            Outcome::Sat(assignment) => assert!(assignment.status_of_formula(clauses.iter())),
            Outcome::Unsat => panic!("expected SAT"),
        }
    }
}
