use rustc_hash::FxHashSet;

use crate::clause::Clause;
use crate::literal::VarId;

/// Addresses a clause across both the original formula and the learnt
/// clauses appended during search: `0..originals.len()` are originals,
/// the remainder index into `learnts`.
pub type ClauseId = usize;

/// Two clause sequences, `originals` (immutable after parse) and `learnts`
/// (append-only during search), plus the cached set of variables appearing
/// anywhere in the formula, in positive form.
#[derive(Debug, Clone)]
pub struct Formula {
    originals: Vec<Clause>,
    learnts: Vec<Clause>,
    variables: FxHashSet<VarId>,
}

impl Formula {
    pub fn new(originals: Vec<Clause>) -> Formula {
        let variables = originals
            .iter()
            .flat_map(|c| c.vars())
            .collect::<FxHashSet<_>>();
        Formula { originals, learnts: Vec::new(), variables }
    }

    pub fn variables(&self) -> &FxHashSet<VarId> {
        &self.variables
    }

    pub fn len_originals(&self) -> usize {
        self.originals.len()
    }

    pub fn len(&self) -> usize {
        self.originals.len() + self.learnts.len()
    }

    pub fn get(&self, id: ClauseId) -> &Clause {
        if id < self.originals.len() {
            &self.originals[id]
        } else {
            &self.learnts[id - self.originals.len()]
        }
    }

    /// All clauses, originals first in formula order, then learnts in the
    /// order they were learnt.
    pub fn iter(&self) -> impl Iterator<Item = (ClauseId, &Clause)> {
        self.originals
            .iter()
            .chain(self.learnts.iter())
            .enumerate()
    }

    pub fn originals(&self) -> &[Clause] {
        &self.originals
    }

    /// Appends `clause` to the learnt list, becoming visible to the next
    /// call to `iter`.
    pub fn learn(&mut self, clause: Clause) -> ClauseId {
        self.learnts.push(clause);
        self.originals.len() + self.learnts.len() - 1
    }
}
