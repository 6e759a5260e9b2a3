use rio_turtle::TurtleError;
use thiserror::Error;

/// Type alias for `Result` with default error [`RioError`].
pub type Result<T, E = RioError> = std::result::Result<T, E>;

/// Error raised while loading a graph.
#[derive(Debug, Error)]
pub enum RioError {
    /// The input could not be read, or is not syntactically valid
    #[error("Parse error: {0}")]
    Syntax(#[from] TurtleError),
    /// The base IRI provided to the parser is not a valid absolute IRI
    #[error("The given base IRI is invalid: {0}")]
    InvalidBase(String),
}
