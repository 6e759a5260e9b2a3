//! I compute, by successive refinements, a hash for every blank node of a graph,
//! reflecting its position in the graph.
//!
//! A blank node is *grounded* once its hash is fully determined,
//! i.e. when every other term of every quad it appears in is grounded,
//! or when its hash is unique in the graph.
//! Grounded hashes are then used to compute the hashes of the neighbouring blank nodes,
//! until no more blank node can be grounded.
use std::collections::{HashMap, HashSet};

use rdfiso_term::{BnodeId, Quad, Term};

use crate::hash::{hex, HashFunction};
use crate::signature::quad_signature;
use crate::TermHash;

/// Whether `term` is grounded with respect to `hashes`.
///
/// Non-blank terms are always grounded,
/// blank nodes are grounded iff they appear in `hashes`,
/// and embedded quads are grounded iff all their nested terms are.
pub fn is_grounded<O>(term: &Term, hashes: &TermHash<O>) -> bool {
    match term {
        Term::BlankNode(bnid) => hashes.contains_key(bnid),
        Term::Quad(quad) => quad.nested_terms().all(|t| is_grounded(t, hashes)),
        Term::Iri(_) | Term::Literal(_) | Term::Variable(_) | Term::DefaultGraph => true,
    }
}

/// Compute the hash of `term` given the current grounded `hashes`.
///
/// The hash covers the signatures (relative to `term`) of all the `quads` containing `term`,
/// possibly nested.
/// The returned boolean indicates whether the hash is final,
/// i.e. whether all the other terms of these quads are grounded.
pub fn hash_term<H: HashFunction>(
    term: &Term,
    quads: &[&Quad],
    hashes: &TermHash<H::Output>,
) -> (bool, H::Output) {
    let mut grounded = true;
    let mut signatures: Vec<_> = quads
        .iter()
        .filter(|q| q.contains_nested(term))
        .map(|q| {
            grounded = grounded && q.nested_terms().all(|t| t == term || is_grounded(t, hashes));
            quad_signature(q, hashes, term)
        })
        .collect();
    signatures.sort_unstable();
    let mut hasher = H::initialize();
    for signature in signatures {
        hasher.update(&signature);
    }
    (grounded, hasher.finalize())
}

/// Refine the hashes of `blank_nodes` until a fixed point is reached.
///
/// `quads` are the quads of the graph containing blank nodes,
/// and `seed` contains blank nodes whose hash is imposed.
///
/// Returns two maps:
/// * the grounded hashes (including `seed`),
/// * the current hash of *every* blank node, grounded or not.
///
/// Each pass computes the hash of every ungrounded blank node
/// against the grounded hashes as they were at the beginning of the pass,
/// so the result does not depend on the order of `blank_nodes`.
/// At the end of each pass, every ungrounded blank node whose hash is unique
/// is grounded as well.
pub fn hash_terms<H: HashFunction>(
    quads: &[&Quad],
    blank_nodes: &[&BnodeId],
    seed: &TermHash<H::Output>,
) -> (TermHash<H::Output>, TermHash<H::Output>) {
    let index = index_quads(quads);
    let mut grounded = seed.clone();
    let mut all = seed.clone();
    loop {
        let mut newly_grounded = TermHash::new();
        for bnid in blank_nodes.iter().filter(|b| !grounded.contains_key(**b)) {
            let related = index.get(*bnid).map(Vec::as_slice).unwrap_or_default();
            let term = Term::BlankNode((*bnid).clone());
            let (is_grounded, hash) = hash_term::<H>(&term, related, &grounded);
            debug_assert!({
                log::trace!("hash({}) -> {} {}", bnid.as_str(), hex(&hash), if is_grounded { "(grounded)" } else { "" });
                true
            });
            all.insert((*bnid).clone(), hash);
            if is_grounded {
                newly_grounded.insert((*bnid).clone(), hash);
            }
        }

        let mut counts = HashMap::<H::Output, usize>::new();
        for hash in all.values() {
            *counts.entry(*hash).or_default() += 1;
        }
        for bnid in blank_nodes {
            if grounded.contains_key(*bnid) || newly_grounded.contains_key(*bnid) {
                continue;
            }
            if let Some(hash) = all.get(*bnid) {
                if counts.get(hash) == Some(&1) {
                    newly_grounded.insert((*bnid).clone(), *hash);
                }
            }
        }

        if newly_grounded.is_empty() {
            break;
        }
        grounded.extend(newly_grounded);
    }
    (grounded, all)
}

/// Map every blank node to the quads where it occurs (possibly nested).
fn index_quads<'a>(quads: &[&'a Quad]) -> HashMap<&'a BnodeId, Vec<&'a Quad>> {
    let mut index: HashMap<&BnodeId, Vec<&Quad>> = HashMap::new();
    for quad in quads {
        let mut seen = HashSet::new();
        for bnid in quad.nested_terms().filter_map(Term::bnode_id) {
            if seen.insert(bnid) {
                index.entry(bnid).or_default().push(*quad);
            }
        }
    }
    index
}
