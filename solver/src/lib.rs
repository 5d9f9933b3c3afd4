//! CDCL SAT solver core: DIMACS parsing, the implication graph, first-UIP
//! conflict analysis, and a handful of branching heuristics.

/// Branching heuristics one can choose from to drive the [`solver::Solver`].
pub mod branching;
/// Per-variable truth values keyed by positive literal.
pub mod assignment;
/// Disjunctions of literals and the resolution rule over them.
pub mod clause;
/// Parses DIMACS CNF text into a variable set and clause list.
pub mod dimacs;
/// Errors surfaced across this crate's public API.
pub mod error;
/// The formula under search: original clauses plus learnt ones.
pub mod formula;
/// The implication graph built up during propagation.
pub mod graph;
/// Per-level log of assigned variables.
pub mod history;
/// Signed atomic propositions.
pub mod literal;
/// The CDCL driver loop.
pub mod solver;
/// Composes assignment, graph, history, and the unassigned pool.
pub mod state;
/// Run counters (decisions, conflicts, elapsed time).
pub mod stats;
/// Hasher and collection type aliases shared across the crate.
pub mod util;

pub use assignment::{Assignment, Status};
pub use branching::{BranchingHeuristic, DefaultHeuristic, Dlis, JwOs, JwTs, Moms, Rdlis};
pub use clause::{resolve, Clause};
pub use error::{Result, SolverError};
pub use formula::{ClauseId, Formula};
pub use graph::ImplicationGraph;
pub use history::History;
pub use literal::{Literal, VarId};
pub use solver::{Outcome, Solver};
pub use state::StateManager;
pub use stats::Statistics;

/// Builds a [`Box<dyn BranchingHeuristic>`] from its CLI/config name.
pub fn heuristic_by_name(name: &str) -> Result<Box<dyn BranchingHeuristic>> {
    match name {
        "DEFAULT" => Ok(Box::new(DefaultHeuristic)),
        "DLIS" => Ok(Box::new(Dlis)),
        "RDLIS" => Ok(Box::new(Rdlis)),
        "JWOS" => Ok(Box::new(JwOs)),
        "JWTS" => Ok(Box::new(JwTs)),
        "MOMS" => Ok(Box::new(Moms)),
        other => Err(SolverError::ArgumentFormat(format!("unknown branching heuristic {}", other))),
    }
}
