use crate::assignment::Assignment;
use crate::clause::Clause;
use crate::error::{Result, SolverError};
use crate::formula::ClauseId;
use crate::graph::ImplicationGraph;
use crate::history::History;
use crate::literal::{Literal, VarId};
use crate::util::IndexSet;

/// Composes `Assignment`, `ImplicationGraph`, `History`, and the
/// unassigned-variable pool, and exposes only atomic transitions over them
/// (callers never mutate the three substructures independently).
#[derive(Debug, Clone)]
pub struct StateManager {
    pub assignment: Assignment,
    pub graph: ImplicationGraph,
    pub history: History,
    unassigned: IndexSet<VarId>,
}

impl StateManager {
    pub fn new(assignment: Assignment, num_vars: usize, unassigned: IndexSet<VarId>) -> StateManager {
        StateManager {
            assignment,
            graph: ImplicationGraph::new(num_vars),
            history: History::new(),
            unassigned,
        }
    }

    pub fn unassigned(&self) -> &IndexSet<VarId> {
        &self.unassigned
    }

    /// Extends the assignment, adds a parentless graph node, appends to
    /// history, and drops `lit`'s variable from the unassigned pool.
    pub fn record_decision(&mut self, lit: Literal, value: bool, level: usize) -> Result<()> {
        self.assignment.extend(lit, value)?;
        self.graph.add_node(lit, value, None, level)?;
        self.history.append(level, lit.var);
        self.unassigned.remove(&lit.var);
        Ok(())
    }

    /// As `record_decision`, but with an antecedent clause; first verifies
    /// that every other literal of `antecedent` already resolves to false
    /// under the current assignment.
    pub fn record_implication(
        &mut self,
        lit: Literal,
        value: bool,
        antecedent: (ClauseId, &Clause),
        level: usize,
    ) -> Result<()> {
        let (clause_id, clause) = antecedent;
        for other in clause.iter() {
            if other.var == lit.var {
                continue;
            }
            if self.assignment.value(*other) != Some(false) {
                return Err(SolverError::InvariantViolated(format!(
                    "record_implication: antecedent literal {} is not false",
                    other
                )));
            }
        }

        self.assignment.extend(lit, value)?;
        self.graph.add_node(lit, value, Some((clause_id, clause)), level)?;
        self.history.append(level, lit.var);
        self.unassigned.remove(&lit.var);
        Ok(())
    }

    /// Rewinds all levels strictly greater than `keep_level`: reclaims their
    /// variables to the graph, assignment, and unassigned pool, then erases
    /// their history.
    pub fn revert_to(&mut self, keep_level: usize) -> Result<()> {
        let max_level = self.history.max_level();
        for level in (keep_level + 1..=max_level).rev() {
            let vars: Vec<VarId> = self.history.at(level)?.to_vec();
            for var in vars {
                self.graph.remove(var)?;
                self.assignment.unassign(var);
                self.unassigned.insert(var);
            }
        }
        self.history.truncate_above(keep_level);
        Ok(())
    }

    /// Default branching: pops the front of the unassigned pool in
    /// insertion order, always with polarity `true`.
    pub fn pop_unassigned_fifo(&mut self) -> Option<(VarId, bool)> {
        let var = *self.unassigned.get_index(0)?;
        self.unassigned.shift_remove_index(0);
        Some((var, true))
    }

    pub fn parents(&self, var: VarId) -> Result<&[VarId]> {
        self.graph.parents(var)
    }

    pub fn parents_at_level(&self, var: VarId, level: usize) -> Result<Vec<VarId>> {
        self.graph.parents_at_level(var, level)
    }

    pub fn level_of(&self, var: VarId) -> Result<usize> {
        self.graph.level(var)
    }

    pub fn antecedent_of(&self, var: VarId) -> Result<Option<ClauseId>> {
        self.graph.antecedent(var)
    }

    pub fn history_at(&self, level: usize) -> Result<&[VarId]> {
        self.history.at(level)
    }
}
