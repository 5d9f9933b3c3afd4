use rustc_hash::FxHashSet;

use crate::clause::Clause;
use crate::error::{Result, SolverError};
use crate::literal::{Literal, VarId};

/// Truth value of a clause (or literal) under a partial assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    True,
    False,
    Unassigned,
}

/// Total map from every variable to {true, false, unassigned}, keyed by the
/// variable's positive form. `value(L)` derives the literal's value from the
/// variable's stored value and `L`'s sign, which makes the model invariant
/// (`value(L) = not value(negate(L))`) hold by construction rather than by
/// bookkeeping two separate entries.
#[derive(Debug, Clone)]
pub struct Assignment {
    values: Vec<Option<bool>>,
}

impl Assignment {
    /// All-unassigned model over the given variable set.
    pub fn from_variables(vars: &FxHashSet<VarId>) -> Assignment {
        let max = vars.iter().copied().max().unwrap_or(0);
        Assignment { values: vec![None; max + 1] }
    }

    fn ensure_capacity(&mut self, var: VarId) {
        if var >= self.values.len() {
            self.values.resize(var + 1, None);
        }
    }

    /// Sets both `L` and `negate(L)` atomically. Fails if the variable is
    /// already assigned.
    pub fn extend(&mut self, lit: Literal, value: bool) -> Result<()> {
        self.ensure_capacity(lit.var);
        if self.values[lit.var].is_some() {
            return Err(SolverError::InvariantViolated(format!(
                "extend: variable {} is already assigned",
                lit.var
            )));
        }
        let positive_value = value == lit.sign;
        self.values[lit.var] = Some(positive_value);
        Ok(())
    }

    /// `value(L)`: `None` iff unassigned.
    pub fn value(&self, lit: Literal) -> Option<bool> {
        let stored = *self.values.get(lit.var)?;
        stored.map(|v| v == lit.sign)
    }

    pub fn is_assigned(&self, var: VarId) -> bool {
        self.values.get(var).copied().flatten().is_some()
    }

    pub fn status(&self, clause: &Clause) -> Status {
        let mut any_unassigned = false;
        for lit in clause.iter() {
            match self.value(*lit) {
                Some(true) => return Status::True,
                Some(false) => {}
                None => any_unassigned = true,
            }
        }
        if any_unassigned {
            Status::Unassigned
        } else {
            Status::False
        }
    }

    /// `(true, L)` iff exactly one literal of `clause` is unassigned and all
    /// others are false; `L` keeps its original polarity as written in the
    /// clause.
    pub fn unit(&self, clause: &Clause) -> (bool, Option<Literal>) {
        let mut unassigned_lit = None;
        let mut unassigned_count = 0;
        for lit in clause.iter() {
            match self.value(*lit) {
                Some(true) => return (false, None),
                Some(false) => {}
                None => {
                    unassigned_count += 1;
                    unassigned_lit = Some(*lit);
                }
            }
        }
        if unassigned_count == 1 {
            (true, unassigned_lit)
        } else {
            (false, None)
        }
    }

    /// Sets every variable not in `keep` back to unassigned.
    pub fn revert(&mut self, keep: &FxHashSet<VarId>) {
        for (var, slot) in self.values.iter_mut().enumerate() {
            if !keep.contains(&var) {
                *slot = None;
            }
        }
    }

    /// Sets a single variable back to unassigned.
    pub fn unassign(&mut self, var: VarId) {
        if let Some(slot) = self.values.get_mut(var) {
            *slot = None;
        }
    }

    /// `true` iff every clause in `clauses` evaluates true under this model.
    pub fn status_of_formula<'a>(&self, clauses: impl Iterator<Item = &'a Clause>) -> bool {
        clauses.map(|c| self.status(c)).all(|s| matches!(s, Status::True))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(ids: &[VarId]) -> FxHashSet<VarId> {
        ids.iter().copied().collect()
    }

    #[test]
    fn extend_then_value_returns_v_and_negation() {
        let mut a = Assignment::from_variables(&vars(&[1]));
        a.extend(Literal::pos(1), true).unwrap();
        assert_eq!(a.value(Literal::pos(1)), Some(true));
        assert_eq!(a.value(Literal::neg(1)), Some(false));
    }

    #[test]
    fn extend_twice_is_invariant_violation() {
        let mut a = Assignment::from_variables(&vars(&[1]));
        a.extend(Literal::pos(1), true).unwrap();
        let err = a.extend(Literal::neg(1), true);
        assert!(matches!(err, Err(SolverError::InvariantViolated(_))));
    }

    #[test]
    fn satisfied_when_all_variables_assigned() {
        let clauses = vec![
            Clause::new(vec![Literal::pos(1), Literal::pos(2)]),
            Clause::new(vec![Literal::pos(3), Literal::pos(4)]),
        ];
        let mut a = Assignment::from_variables(&vars(&[1, 2, 3, 4]));
        for v in [1, 2, 3, 4] {
            a.extend(Literal::pos(v), true).unwrap();
        }
        assert!(a.status_of_formula(clauses.iter()));

        let mut b = Assignment::from_variables(&vars(&[1, 2, 3, 4]));
        for v in [1, 2, 4] {
            b.extend(Literal::pos(v), true).unwrap();
        }
        assert!(!b.status_of_formula(clauses.iter()));
    }

    #[test]
    fn unit_preserves_original_polarity() {
        let clause = Clause::new(vec![Literal::neg(1), Literal::neg(4), Literal::pos(5)]);
        let mut a = Assignment::from_variables(&vars(&[1, 4, 5]));
        a.extend(Literal::pos(1), true).unwrap();
        a.extend(Literal::pos(4), true).unwrap();
        let (is_unit, lit) = a.unit(&clause);
        assert!(is_unit);
        assert_eq!(lit, Some(Literal::pos(5)));
    }

    #[test]
    fn unassign_clears_a_single_variable() {
        let mut a = Assignment::from_variables(&vars(&[1, 2]));
        a.extend(Literal::pos(1), true).unwrap();
        a.extend(Literal::pos(2), true).unwrap();
        a.unassign(1);
        assert_eq!(a.value(Literal::pos(1)), None);
        assert_eq!(a.value(Literal::pos(2)), Some(true));
    }

    #[test]
    fn revert_keeps_only_listed_variables() {
        let mut a = Assignment::from_variables(&vars(&[1, 2]));
        a.extend(Literal::pos(1), true).unwrap();
        a.extend(Literal::pos(2), false).unwrap();
        a.revert(&vars(&[1]));
        assert_eq!(a.value(Literal::pos(1)), Some(true));
        assert_eq!(a.value(Literal::pos(2)), None);
        assert_eq!(a.value(Literal::neg(2)), None);
    }
}
