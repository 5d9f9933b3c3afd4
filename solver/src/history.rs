use crate::error::{Result, SolverError};
use crate::literal::VarId;

/// Per-level ordered log of assigned variables (always in positive form).
/// Level 0 holds top-level forced assignments; level `d >= 1` begins with
/// the `d`-th decision variable followed by its propagated consequences.
///
/// Represented as `Vec<Vec<VarId>>` indexed directly by level: decision
/// levels are allocated contiguously (0 at the start, +1 per decision) and
/// backtracking only ever truncates, so there is never a gap to account for.
#[derive(Debug, Clone, Default)]
pub struct History {
    levels: Vec<Vec<VarId>>,
}

impl History {
    pub fn new() -> History {
        History { levels: vec![Vec::new()] }
    }

    fn ensure_level(&mut self, level: usize) {
        if level >= self.levels.len() {
            self.levels.resize_with(level + 1, Vec::new);
        }
    }

    pub fn append(&mut self, level: usize, var: VarId) {
        self.ensure_level(level);
        self.levels[level].push(var);
    }

    pub fn at(&self, level: usize) -> Result<&[VarId]> {
        self.levels
            .get(level)
            .map(|v| v.as_slice())
            .ok_or_else(|| SolverError::InvariantViolated(format!("history: level {} not recorded", level)))
    }

    pub fn erase(&mut self, level: usize) -> Result<()> {
        if level >= self.levels.len() {
            return Err(SolverError::InvariantViolated(format!(
                "history: cannot erase unrecorded level {}",
                level
            )));
        }
        self.levels[level].clear();
        Ok(())
    }

    /// Truncates the log down to `level` (inclusive); levels above it are
    /// dropped entirely, matching `revert_to`'s "history[d] is absent"
    /// contract.
    pub fn truncate_above(&mut self, level: usize) {
        self.levels.truncate(level + 1);
    }

    pub fn max_level(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn levels(&self) -> impl Iterator<Item = (usize, &[VarId])> {
        self.levels.iter().enumerate().map(|(l, v)| (l, v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_leads_each_nonzero_level() {
        let mut h = History::new();
        h.append(0, 10);
        h.append(1, 1); // decision
        h.append(1, 2); // propagated
        assert_eq!(h.at(1).unwrap(), &[1, 2]);
        assert_eq!(h.at(1).unwrap()[0], 1);
    }

    #[test]
    fn truncate_above_drops_history_for_higher_levels() {
        let mut h = History::new();
        h.append(1, 1);
        h.append(2, 2);
        h.append(3, 3);
        h.append(4, 4);
        h.truncate_above(2);
        assert!(h.at(3).is_err());
        assert!(h.at(4).is_err());
        assert_eq!(h.at(2).unwrap(), &[2]);
    }

    #[test]
    fn at_unknown_level_is_invariant_violation() {
        let h = History::new();
        assert!(matches!(h.at(5), Err(SolverError::InvariantViolated(_))));
    }
}
