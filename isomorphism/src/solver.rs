//! I search for a bijection between the blank nodes of two graphs.
//!
//! The search alternates refinement ([`hash_terms`]) and speculation:
//! when refinement can not ground every blank node,
//! one ungrounded blank node of each graph is forced to the same hash,
//! and refinement is resumed, recursively.
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use rdfiso_term::{BnodeId, Quad};

use crate::budget::{Budget, Meter};
use crate::hash::HashFunction;
use crate::refine::hash_terms;
use crate::{Bijection, IsoError, TermHash};

/// The blank-node-containing part of a graph, as seen by the [`Solver`].
#[derive(Clone, Debug)]
pub(crate) struct Side<'a> {
    pub quads: Vec<&'a Quad>,
    pub blank_nodes: Vec<&'a BnodeId>,
}

pub(crate) struct Solver<'a, H> {
    a: Side<'a>,
    b: Side<'a>,
    meter: Meter<'a>,
    _phantom: PhantomData<H>,
}

impl<'a, H: HashFunction> Solver<'a, H> {
    pub fn new(a: Side<'a>, b: Side<'a>, budget: &'a Budget) -> Self {
        Solver {
            a,
            b,
            meter: budget.start(),
            _phantom: PhantomData,
        }
    }

    /// Search for a bijection, starting with no imposed hash.
    pub fn solve(&mut self) -> Result<Option<Bijection>, IsoError> {
        self.solve_rec(&TermHash::new(), &TermHash::new(), 0)
    }

    /// Number of recursive steps performed so far.
    pub fn calls(&self) -> usize {
        self.meter.calls()
    }

    fn solve_rec(
        &mut self,
        seed_a: &TermHash<H::Output>,
        seed_b: &TermHash<H::Output>,
        depth: usize,
    ) -> Result<Option<Bijection>, IsoError> {
        self.meter.charge(depth)?;
        let (grounded_a, all_a) = hash_terms::<H>(&self.a.quads, &self.a.blank_nodes, seed_a);
        let (grounded_b, all_b) = hash_terms::<H>(&self.b.quads, &self.b.blank_nodes, seed_b);

        if grounded_a.len() != grounded_b.len() || value_counts(&grounded_a) != value_counts(&grounded_b) {
            log::trace!("depth {depth}: grounded hashes differ");
            return Ok(None);
        }

        // pair every blank node of a with the first unused blank node of b having the same hash
        let mut buckets = HashMap::<H::Output, Vec<&BnodeId>>::new();
        for bnid in self.b.blank_nodes.iter().rev() {
            if let Some(hash) = all_b.get(*bnid) {
                buckets.entry(*hash).or_default().push(*bnid);
            }
        }
        let mut pairing = Bijection::new();
        for bnid in &self.a.blank_nodes {
            let matched = all_a.get(*bnid).and_then(|hash| buckets.get_mut(hash)).and_then(Vec::pop);
            if let Some(other) = matched {
                pairing.insert((*bnid).clone(), other.clone());
            }
        }
        if pairing.len() != self.a.blank_nodes.len() || pairing.len() != self.b.blank_nodes.len() {
            log::trace!("depth {depth}: no pairing");
            return Ok(None);
        }
        if grounded_a.len() == self.a.blank_nodes.len() {
            return Ok(Some(pairing));
        }

        // speculate on the ungrounded node of a with the fewest candidates in b
        let mut candidates = HashMap::<H::Output, Vec<&'a BnodeId>>::new();
        for bnid in self.b.blank_nodes.iter().filter(|b| !grounded_b.contains_key(**b)) {
            if let Some(hash) = all_b.get(*bnid) {
                candidates.entry(*hash).or_default().push(*bnid);
            }
        }
        let chosen = self
            .a
            .blank_nodes
            .iter()
            .filter(|a| !grounded_a.contains_key(**a))
            .filter_map(|a| {
                let hash = all_a.get(*a)?;
                Some((*a, candidates.get(hash)?.clone()))
            })
            .min_by_key(|(_, bs)| bs.len());
        let Some((a_node, b_nodes)) = chosen else {
            return Ok(None);
        };

        let forced = H::hash(format!("@forced{depth}"));
        for b_node in b_nodes {
            log::trace!("depth {depth}: forcing {} ~ {}", a_node.as_str(), b_node.as_str());
            let mut next_a = grounded_a.clone();
            next_a.insert(a_node.clone(), forced);
            let mut next_b = grounded_b.clone();
            next_b.insert(b_node.clone(), forced);
            if let Some(bijection) = self.solve_rec(&next_a, &next_b, depth + 1)? {
                return Ok(Some(bijection));
            }
        }
        Ok(None)
    }
}

/// The multiset of the values of `hashes`.
fn value_counts<O: Copy + Eq + Hash>(hashes: &TermHash<O>) -> HashMap<O, usize> {
    let mut counts = HashMap::new();
    for hash in hashes.values() {
        *counts.entry(*hash).or_default() += 1;
    }
    counts
}
