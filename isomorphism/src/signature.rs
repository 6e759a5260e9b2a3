//! I compute the signature of a term or a quad *relative to* a target term.
//!
//! A signature encodes which positions the target occupies in a quad,
//! and what every other term looks like at the current refinement step:
//! * non-blank terms contribute their canonical form,
//! * grounded blank nodes contribute their current hash,
//! * ungrounded blank nodes contribute an indistinguishable placeholder,
//! * embedded quads contribute their own signature, between `<` and `>`.
use std::fmt::Write;

use rdfiso_term::{Quad, Term};

use crate::hash::hex;
use crate::TermHash;

/// Signature of the target term itself.
pub const SELF_MARKER: &str = "@self";
/// Signature of a blank node that is not grounded yet.
pub const BLANK_MARKER: &str = "@blank";
/// Terminates the signature of each component of a quad.
pub const SEPARATOR: char = '|';

/// The signature of `term`, relative to `target`, given the current grounded `hashes`.
pub fn term_signature<O: AsRef<[u8]>>(term: &Term, hashes: &TermHash<O>, target: &Term) -> String {
    let mut buffer = String::new();
    write_term_signature(term, hashes, target, &mut buffer);
    buffer
}

/// The signature of `quad`, relative to `target`, given the current grounded `hashes`.
///
/// This is the concatenation of the signatures of its subject, predicate, object and graph,
/// each followed by [`SEPARATOR`].
pub fn quad_signature<O: AsRef<[u8]>>(quad: &Quad, hashes: &TermHash<O>, target: &Term) -> String {
    let mut buffer = String::new();
    write_quad_signature(quad, hashes, target, &mut buffer);
    buffer
}

pub(crate) fn write_term_signature<O: AsRef<[u8]>>(
    term: &Term,
    hashes: &TermHash<O>,
    target: &Term,
    buffer: &mut String,
) {
    if term == target {
        buffer.push_str(SELF_MARKER);
        return;
    }
    match term {
        Term::BlankNode(bnid) => match hashes.get(bnid) {
            Some(hash) => buffer.push_str(&hex(hash)),
            None => buffer.push_str(BLANK_MARKER),
        },
        Term::Quad(quad) => {
            buffer.push('<');
            write_quad_signature(quad, hashes, target, buffer);
            buffer.push('>');
        }
        Term::Iri(_) | Term::Literal(_) | Term::Variable(_) | Term::DefaultGraph => {
            // writing to a String can not fail
            let _ = write!(buffer, "{term}");
        }
    }
}

pub(crate) fn write_quad_signature<O: AsRef<[u8]>>(
    quad: &Quad,
    hashes: &TermHash<O>,
    target: &Term,
    buffer: &mut String,
) {
    for term in quad.spog() {
        write_term_signature(term, hashes, target, buffer);
        buffer.push(SEPARATOR);
    }
}
