use dimacs::parse_dimacs;

use crate::clause::Clause;
use crate::error::{Result, SolverError};
use crate::literal::Literal;

/// Parses a DIMACS CNF document into clauses plus the declared variable
/// count. Delegates the grammar itself to the `dimacs` crate; only CNF
/// instances are accepted, matching the solver's input domain.
pub fn parse(input: &str) -> Result<(usize, Vec<Clause>)> {
    match parse_dimacs(input) {
        Ok(dimacs::Instance::Cnf { clauses, num_vars }) => {
            let clauses = clauses
                .iter()
                .map(|clause| {
                    Clause::new(
                        clause
                            .lits()
                            .iter()
                            .map(|lit| Literal::new(lit.var().to_u64() as usize, lit.sign() == dimacs::Sign::Pos))
                            .collect(),
                    )
                })
                .collect();
            Ok((num_vars as usize, clauses))
        }
        Ok(dimacs::Instance::Sat { .. }) => {
            Err(SolverError::FileFormat("only CNF instances are supported".to_string()))
        }
        Err(e) => Err(SolverError::FileFormat(format!("{:?}", e))),
    }
}
