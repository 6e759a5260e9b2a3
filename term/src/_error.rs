use thiserror::Error;

/// Type alias for `Result` with default error `TermError`.
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = TermError> = std::result::Result<T, E>;

/// This error is raised when the creation of a term fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TermError {
    /// The IRI of a term must apply to [RFC 3987](https://tools.ietf.org/html/rfc3987).
    #[error("The given IRI '{0}' is not valid according to RFC3987")]
    InvalidIri(String),
    /// Identifiers of blank nodes must apply to Turtle's [production rules](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL).
    #[error(
        "The identifier '{0}' is not valid for a blank node according to Turtle's BLANK_NODE_LABEL"
    )]
    InvalidBlankNodeId(String),
    /// Names of variables must apply to SPARQL's [production rules](https://www.w3.org/TR/sparql11-query/#rVARNAME).
    #[error("The name '{0}' is not valid for a variable according to the SPARQL specification")]
    InvalidVariableName(String),
    /// The language tags of literals must apply to [BCP47](https://tools.ietf.org/html/bcp47).
    #[error("The given language tag '{0}' is not valid according to BCP47")]
    InvalidLanguageTag(String),
}
