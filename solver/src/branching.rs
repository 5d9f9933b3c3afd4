use rand::Rng;

use crate::assignment::Status;
use crate::clause::Clause;
use crate::formula::Formula;
use crate::literal::{Literal, VarId};
use crate::state::StateManager;

/// A pure function `(state, formula) -> (positive literal, polarity)`. Never
/// mutates `state`; the caller commits the pick via `StateManager::record_decision`.
pub trait BranchingHeuristic {
    fn select(&self, state: &StateManager, formula: &Formula) -> Option<(VarId, bool)>;
}

fn unresolved<'a>(formula: &'a Formula, state: &StateManager) -> Vec<&'a Clause> {
    formula
        .iter()
        .map(|(_, c)| c)
        .filter(|c| matches!(state.assignment.status(c), Status::Unassigned))
        .collect()
}

fn occurrences(clauses: &[&Clause], lit: Literal) -> usize {
    clauses.iter().filter(|c| c.iter().any(|l| *l == lit)).count()
}

/// Picks the first unassigned variable in insertion order, polarity true.
#[derive(Debug, Clone, Default)]
pub struct DefaultHeuristic;

impl BranchingHeuristic for DefaultHeuristic {
    fn select(&self, state: &StateManager, _formula: &Formula) -> Option<(VarId, bool)> {
        state.unassigned().iter().copied().next().map(|v| (v, true))
    }
}

/// Dynamic Largest Individual Sum.
#[derive(Debug, Clone, Default)]
pub struct Dlis;

impl Dlis {
    fn pick(state: &StateManager, formula: &Formula) -> Option<(VarId, usize, usize)> {
        let clauses = unresolved(formula, state);
        let mut best: Option<(VarId, usize, usize)> = None;
        for var in state.unassigned().iter().copied() {
            let score_pos = occurrences(&clauses, Literal::pos(var));
            let score_neg = occurrences(&clauses, Literal::neg(var));
            let score = score_pos.max(score_neg);
            if best.map_or(true, |(_, bp, bn)| score > bp.max(bn)) {
                best = Some((var, score_pos, score_neg));
            }
        }
        best
    }
}

impl BranchingHeuristic for Dlis {
    fn select(&self, state: &StateManager, formula: &Formula) -> Option<(VarId, bool)> {
        let (var, score_pos, score_neg) = Dlis::pick(state, formula)?;
        Some((var, score_pos >= score_neg))
    }
}

/// Same variable choice as DLIS, polarity chosen by a coin flip.
#[derive(Debug, Clone, Default)]
pub struct Rdlis;

impl BranchingHeuristic for Rdlis {
    fn select(&self, state: &StateManager, formula: &Formula) -> Option<(VarId, bool)> {
        let (var, _, _) = Dlis::pick(state, formula)?;
        Some((var, rand::thread_rng().gen_bool(0.5)))
    }
}

fn clause_weight(clause: &Clause) -> f64 {
    2f64.powi(-(clause.len() as i32))
}

/// Jeroslow-Wang, one-sided: score(v) sums the weight of every unresolved
/// clause mentioning either polarity of v; polarity is always true.
#[derive(Debug, Clone, Default)]
pub struct JwOs;

impl BranchingHeuristic for JwOs {
    fn select(&self, state: &StateManager, formula: &Formula) -> Option<(VarId, bool)> {
        let clauses = unresolved(formula, state);
        let mut best: Option<(VarId, f64)> = None;
        for var in state.unassigned().iter().copied() {
            let score: f64 = clauses
                .iter()
                .filter(|c| c.iter().any(|l| l.var == var))
                .map(|c| clause_weight(c))
                .sum();
            if best.map_or(true, |(_, bs)| score > bs) {
                best = Some((var, score));
            }
        }
        best.map(|(var, _)| (var, true))
    }
}

/// Jeroslow-Wang, two-sided: score(L) sums clause weight per literal; the
/// variable is chosen by score(pos) + score(neg), polarity by which side wins.
#[derive(Debug, Clone, Default)]
pub struct JwTs;

impl BranchingHeuristic for JwTs {
    fn select(&self, state: &StateManager, formula: &Formula) -> Option<(VarId, bool)> {
        let clauses = unresolved(formula, state);
        let mut best: Option<(VarId, f64, f64)> = None;
        for var in state.unassigned().iter().copied() {
            let score_pos: f64 = clauses
                .iter()
                .filter(|c| c.iter().any(|l| *l == Literal::pos(var)))
                .map(|c| clause_weight(c))
                .sum();
            let score_neg: f64 = clauses
                .iter()
                .filter(|c| c.iter().any(|l| *l == Literal::neg(var)))
                .map(|c| clause_weight(c))
                .sum();
            let total = score_pos + score_neg;
            if best.map_or(true, |(_, bp, bn)| total > bp + bn) {
                best = Some((var, score_pos, score_neg));
            }
        }
        best.map(|(var, score_pos, score_neg)| (var, score_pos >= score_neg))
    }
}

/// Maximum Occurrences in Minimum-Size clauses: restricts to the unresolved
/// clauses of smallest length, scores each variable by total occurrence
/// count across both polarities, polarity is always true.
#[derive(Debug, Clone, Default)]
pub struct Moms;

impl BranchingHeuristic for Moms {
    fn select(&self, state: &StateManager, formula: &Formula) -> Option<(VarId, bool)> {
        let clauses = unresolved(formula, state);
        let min_len = clauses.iter().map(|c| c.len()).min()?;
        let smallest: Vec<&Clause> = clauses.into_iter().filter(|c| c.len() == min_len).collect();

        let mut best: Option<(VarId, usize)> = None;
        for var in state.unassigned().iter().copied() {
            let score = occurrences(&smallest, Literal::pos(var)) + occurrences(&smallest, Literal::neg(var));
            if best.map_or(true, |(_, bs)| score > bs) {
                best = Some((var, score));
            }
        }
        best.map(|(var, _)| (var, true))
    }
}
