use std::fmt;
use itertools::Itertools;

use crate::literal::{Literal, VarId};

/// An unordered multiset of literals: a disjunction. `originals` and learnt
/// clauses share this representation.
#[derive(Debug, Clone)]
pub struct Clause {
    pub literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Clause {
        Clause { literals }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn vars(&self) -> impl Iterator<Item = VarId> + '_ {
        self.literals.iter().map(|l| l.var)
    }
}

impl IntoIterator for Clause {
    type Item = Literal;
    type IntoIter = std::vec::IntoIter<Literal>;
    fn into_iter(self) -> Self::IntoIter {
        self.literals.into_iter()
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;
    type IntoIter = std::slice::Iter<'a, Literal>;
    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.literals.iter().map(|l| l.to_string()).join(" "))
    }
}

/// Resolves `w` and `a` on pivot variable `x`: the clause containing every
/// literal of `w ∪ a` whose variable is not `x`, deduplicated.
///
/// Precondition: `x` occurs with one polarity in `w` and the opposite
/// polarity in `a`. Commutative in `(w, a)`.
pub fn resolve(w: &Clause, a: &Clause, x: VarId) -> Result<Clause, String> {
    let w_sign = w.literals.iter().find(|l| l.var == x).map(|l| l.sign);
    let a_sign = a.literals.iter().find(|l| l.var == x).map(|l| l.sign);

    match (w_sign, a_sign) {
        (Some(ws), Some(as_)) if ws != as_ => {
            let mut seen = rustc_hash::FxHashSet::default();
            let mut literals = Vec::with_capacity(w.len() + a.len());
            for lit in w.iter().chain(a.iter()) {
                if lit.var == x {
                    continue;
                }
                if seen.insert(*lit) {
                    literals.push(*lit);
                }
            }
            Ok(Clause::new(literals))
        }
        _ => Err(format!(
            "resolve: pivot {} does not appear with opposite polarities in both clauses",
            x
        )),
    }
}
