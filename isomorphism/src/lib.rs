//! This crate decides whether two [RDF] graphs are [isomorphic],
//! i.e. equal up to a renaming of their blank nodes.
//!
//! The decision procedure combines
//! * a structural refinement of blank node hashes
//!   (see [`refine`]), akin to Weisfeiler-Leman colour refinement, and
//! * a backtracking search over speculative pairings of blank nodes
//!   that refinement alone could not distinguish.
//!
//! ```
//! use rdfiso_isomorphism::isomorphic;
//! use rdfiso_term::{BnodeId, IriRef, Quad};
//!
//! let p = IriRef::new_unchecked("http://example.org/p");
//! let g1 = vec![Quad::triple(BnodeId::new_unchecked("a"), p.clone(), BnodeId::new_unchecked("b"))];
//! let g2 = vec![Quad::triple(BnodeId::new_unchecked("x"), p, BnodeId::new_unchecked("y"))];
//! assert!(isomorphic(&g1, &g2));
//! ```
//!
//! The outcome is probabilistically sound:
//! it relies on the absence of collisions of the underlying [hash function](hash::HashFunction).
//! [`check_bijection`] can be used to verify a bijection exactly.
//!
//! [RDF]: https://www.w3.org/TR/rdf12-primer/
//! [isomorphic]: https://www.w3.org/TR/rdf12-concepts/#graph-isomorphism
#![deny(missing_docs)]

use std::collections::{BTreeMap, HashMap};

use rdfiso_term::BnodeId;

mod _error;
pub use _error::*;
mod budget;
pub use budget::{Budget, DEFAULT_MAX_CALLS};
mod graph;
pub use graph::*;
pub mod hash;
pub mod partition;
pub mod refine;
pub mod signature;
mod solver;

/// Maps blank nodes to their hash; a blank node is present iff it is grounded.
pub type TermHash<O> = HashMap<BnodeId, O>;

/// Maps the blank nodes of one graph to the blank nodes of another.
pub type Bijection = BTreeMap<BnodeId, BnodeId>;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
