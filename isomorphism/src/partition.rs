//! I split graphs into the quads that contain blank nodes and those that do not,
//! and collect their blank nodes.
//!
//! A graph is a *set* of quads:
//! duplicates are collapsed by [`dedupe`] before any comparison.
use std::collections::{BTreeMap, HashSet};

use rdfiso_term::{BnodeId, Quad, Term};

/// Quads of `graph` where no term, including terms nested in embedded quads,
/// is a blank node.
pub fn quads_without_blank_nodes<'a, I>(graph: I) -> Vec<&'a Quad>
where
    I: IntoIterator<Item = &'a Quad>,
{
    graph
        .into_iter()
        .filter(|q| !q.contains_blank_node())
        .collect()
}

/// Quads of `graph` where at least one term, possibly nested, is a blank node.
pub fn quads_with_blank_nodes<'a, I>(graph: I) -> Vec<&'a Quad>
where
    I: IntoIterator<Item = &'a Quad>,
{
    graph
        .into_iter()
        .filter(|q| q.contains_blank_node())
        .collect()
}

/// Index the quads of `graph` by their canonical serialization.
///
/// Structurally identical quads collapse into a single entry.
pub fn index_graph<'a, I>(graph: I) -> BTreeMap<String, &'a Quad>
where
    I: IntoIterator<Item = &'a Quad>,
{
    graph.into_iter().map(|q| (q.to_string(), q)).collect()
}

/// Remove duplicate quads from `graph`.
///
/// The result is sorted by canonical serialization,
/// so it does not depend on the order of the input.
pub fn dedupe<'a, I>(graph: I) -> Vec<&'a Quad>
where
    I: IntoIterator<Item = &'a Quad>,
{
    index_graph(graph).into_values().collect()
}

/// All the blank nodes of `graph`, including those nested in embedded quads,
/// without duplicates, in order of first appearance.
pub fn blank_nodes_of<'a, I>(graph: I) -> Vec<&'a BnodeId>
where
    I: IntoIterator<Item = &'a Quad>,
{
    let mut seen = HashSet::new();
    graph
        .into_iter()
        .flat_map(Quad::nested_terms)
        .filter_map(Term::bnode_id)
        .filter(|bnid| seen.insert(*bnid))
        .collect()
}
