//! This crate loads RDF graphs into the [`Quad`](rdfiso_term::Quad)s
//! of [`rdfiso_term`],
//! using the [RIO](https://docs.rs/rio_turtle/) parsers.
//!
//! Supported syntaxes are
//! [N-Triples](https://www.w3.org/TR/n-triples/),
//! [N-Quads](https://www.w3.org/TR/n-quads/),
//! [Turtle](https://www.w3.org/TR/turtle/)
//! and [TriG](https://www.w3.org/TR/trig/),
//! including their RDF-star extensions.
#![deny(missing_docs)]

mod _error;
pub use _error::*;
pub mod model;
pub mod parser;
pub use parser::{parse_nquads, parse_ntriples, parse_trig, parse_turtle};
