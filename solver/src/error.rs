/// Errors surfaced across the solver's public API.
///
/// `FileFormat` and `ArgumentFormat` are ordinary, recoverable conditions a
/// caller is expected to handle. `InvariantViolated` signals a precondition
/// breach inside the core (e.g. extending an already-assigned variable) and
/// indicates a defect in the caller or the solver itself, never a normal
/// control-flow outcome.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("malformed DIMACS input: {0}")]
    FileFormat(String),

    #[error("invalid argument: {0}")]
    ArgumentFormat(String),

    #[error("invariant violated: {0}")]
    InvariantViolated(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;
