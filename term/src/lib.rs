//! I define the RDF data model used by [`rdfiso_isomorphism`](https://docs.rs/rdfiso_isomorphism):
//! * [`Term`], a closed enum covering IRIs, blank nodes, literals, variables,
//!   the default graph, and quads used as terms;
//! * [`Quad`], a subject/predicate/object/graph statement;
//! * wrapper types guaranteeing the validity of identifiers
//!   ([`IriRef`], [`BnodeId`], [`VarName`], [`LanguageTag`]).
//!
//! Every term and quad has a canonical string form, given by its [`Display`](std::fmt::Display) implementation,
//! which is consistent with structural equality.
#![deny(missing_docs)]

#[macro_use]
mod _macro;

mod _cnq;
mod _error;
pub use _error::*;
mod bnode_id;
pub use bnode_id::*;
mod iri;
pub use iri::*;
mod language_tag;
pub use language_tag::*;
mod literal;
pub use literal::*;
pub mod ns;
mod quad;
pub use quad::*;
mod term;
pub use term::*;
mod var_name;
pub use var_name::*;

#[cfg(test)]
mod test;
