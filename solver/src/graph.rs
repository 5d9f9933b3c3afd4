use crate::clause::Clause;
use crate::error::{Result, SolverError};
use crate::formula::ClauseId;
use crate::literal::{Literal, VarId};

/// A node of the implication graph: an assigned variable together with the
/// clause that forced it (`None` for decisions/branching nodes).
#[derive(Debug, Clone)]
pub struct Node {
    pub var: VarId,
    pub value: bool,
    pub level: usize,
    pub antecedent: Option<ClauseId>,
    pub parents: Vec<VarId>,
    pub children: Vec<VarId>,
}

/// DAG of assigned variables, keyed by positive literal. Implemented as an
/// arena indexed directly by `VarId`: acyclicity of logical dependencies
/// means back-edges never need reference counting, so plain `VarId` indices
/// into a flat `Vec` are enough.
#[derive(Debug, Clone, Default)]
pub struct ImplicationGraph {
    nodes: Vec<Option<Node>>,
}

impl ImplicationGraph {
    pub fn new(num_vars: usize) -> ImplicationGraph {
        ImplicationGraph { nodes: vec![None; num_vars + 1] }
    }

    fn ensure_capacity(&mut self, var: VarId) {
        if var >= self.nodes.len() {
            self.nodes.resize(var + 1, None);
        }
    }

    pub fn has(&self, var: VarId) -> bool {
        self.nodes.get(var).map_or(false, |n| n.is_some())
    }

    /// Adds `lit` (canonicalized to its positive variable) with derived
    /// value `v' = (v == lit.sign)` (e.g. assigning `-1` to `false` records
    /// variable `1` as `true`). Parents are the antecedent's other literals
    /// that already have nodes.
    pub fn add_node(
        &mut self,
        lit: Literal,
        value: bool,
        antecedent: Option<(ClauseId, &Clause)>,
        level: usize,
    ) -> Result<()> {
        self.ensure_capacity(lit.var);
        if self.has(lit.var) {
            return Err(SolverError::InvariantViolated(format!(
                "add_node: variable {} already has a graph node",
                lit.var
            )));
        }

        let canonical_value = value == lit.sign;
        let antecedent_id = antecedent.map(|(id, _)| id);

        let mut parents = Vec::new();
        if let Some((_, clause)) = antecedent {
            for other in clause.iter() {
                if other.var == lit.var {
                    continue;
                }
                if self.has(other.var) {
                    parents.push(other.var);
                }
            }
        }

        self.nodes[lit.var] = Some(Node {
            var: lit.var,
            value: canonical_value,
            level,
            antecedent: antecedent_id,
            parents: parents.clone(),
            children: Vec::new(),
        });

        for parent in parents {
            if let Some(node) = self.nodes[parent].as_mut() {
                node.children.push(lit.var);
            }
        }

        Ok(())
    }

    pub fn parents(&self, var: VarId) -> Result<&[VarId]> {
        self.node(var).map(|n| n.parents.as_slice())
    }

    pub fn parents_at_level(&self, var: VarId, level: usize) -> Result<Vec<VarId>> {
        let node = self.node(var)?;
        Ok(node
            .parents
            .iter()
            .copied()
            .filter(|p| self.nodes[*p].as_ref().map_or(false, |n| n.level == level))
            .collect())
    }

    pub fn antecedent(&self, var: VarId) -> Result<Option<ClauseId>> {
        self.node(var).map(|n| n.antecedent)
    }

    pub fn level(&self, var: VarId) -> Result<usize> {
        self.node(var).map(|n| n.level)
    }

    pub fn value(&self, var: VarId) -> Result<bool> {
        self.node(var).map(|n| n.value)
    }

    fn node(&self, var: VarId) -> Result<&Node> {
        self.nodes
            .get(var)
            .and_then(|n| n.as_ref())
            .ok_or_else(|| SolverError::InvariantViolated(format!("no graph node for variable {}", var)))
    }

    /// Drops `var`'s node and purges it from every remaining node's
    /// children list.
    pub fn remove(&mut self, var: VarId) -> Result<()> {
        if !self.has(var) {
            return Err(SolverError::InvariantViolated(format!(
                "remove: no graph node for variable {}",
                var
            )));
        }
        self.nodes[var] = None;
        for node in self.nodes.iter_mut().flatten() {
            node.children.retain(|&c| c != var);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_node_links_parents_and_children() {
        let mut g = ImplicationGraph::new(5);
        g.add_node(Literal::pos(1), true, None, 1).unwrap();
        g.add_node(Literal::pos(2), true, None, 1).unwrap();

        let clause = Clause::new(vec![Literal::neg(1), Literal::neg(2), Literal::pos(3)]);
        g.add_node(Literal::pos(3), true, Some((0, &clause)), 1).unwrap();

        assert_eq!(g.parents(3).unwrap(), &[1, 2]);
        assert!(g.parents(1).unwrap().is_empty());
        // 1 and 2 should both list 3 as a child
        assert!(g.nodes[1].as_ref().unwrap().children.contains(&3));
        assert!(g.nodes[2].as_ref().unwrap().children.contains(&3));
    }

    #[test]
    fn duplicate_node_is_invariant_violation() {
        let mut g = ImplicationGraph::new(2);
        g.add_node(Literal::pos(1), true, None, 0).unwrap();
        let err = g.add_node(Literal::neg(1), false, None, 0);
        assert!(matches!(err, Err(SolverError::InvariantViolated(_))));
    }

    #[test]
    fn remove_purges_dangling_children() {
        let mut g = ImplicationGraph::new(3);
        g.add_node(Literal::pos(1), true, None, 1).unwrap();
        let clause = Clause::new(vec![Literal::neg(1), Literal::pos(2)]);
        g.add_node(Literal::pos(2), true, Some((0, &clause)), 1).unwrap();

        g.remove(2).unwrap();
        assert!(!g.has(2));
        assert!(g.nodes[1].as_ref().unwrap().children.is_empty());
    }
}
