use std::collections::HashSet;

use rdfiso_term::{BnodeId, Quad, Term};

use crate::hash::{HashFunction, Sha256};
use crate::partition::{blank_nodes_of, index_graph, quads_with_blank_nodes, quads_without_blank_nodes};
use crate::solver::{Side, Solver};
use crate::{Bijection, Budget, IsoError};

/// Computes whether two graphs are isomorphic,
/// i.e. equal up to a renaming of their blank nodes.
///
/// Graphs are considered as *sets* of quads: duplicates are ignored.
///
/// This uses [`Sha256`] and an [unlimited](Budget::unlimited) budget;
/// see [`isomorphic_with`] for more control.
pub fn isomorphic(a: &[Quad], b: &[Quad]) -> bool {
    isomorphic_with::<Sha256>(a, b, &Budget::unlimited())
        .unwrap_or_else(|err| unreachable!("unlimited budget exhausted: {err}"))
}

/// Computes a bijection between the blank nodes of `a` and those of `b`,
/// if the two graphs are isomorphic.
///
/// This uses [`Sha256`] and an [unlimited](Budget::unlimited) budget;
/// see [`bijection_with`] for more control.
pub fn bijection(a: &[Quad], b: &[Quad]) -> Option<Bijection> {
    bijection_with::<Sha256>(a, b, &Budget::unlimited())
        .unwrap_or_else(|err| unreachable!("unlimited budget exhausted: {err}"))
}

/// Computes whether two graphs are isomorphic,
/// using hash function `H` and bounding the search with `budget`.
///
/// # Error
/// If `budget` is exhausted before a verdict is reached,
/// an [`IsoError`] is returned.
pub fn isomorphic_with<H: HashFunction>(
    a: &[Quad],
    b: &[Quad],
    budget: &Budget,
) -> Result<bool, IsoError> {
    bijection_with::<H>(a, b, budget).map(|res| res.is_some())
}

/// Computes a bijection between the blank nodes of `a` and those of `b`,
/// using hash function `H` and bounding the search with `budget`.
///
/// The returned bijection is the result of a hash-based search,
/// and is not checked against the quads of `a` and `b`;
/// use [`check_bijection`] for that.
///
/// # Error
/// If `budget` is exhausted before a verdict is reached,
/// an [`IsoError`] is returned.
pub fn bijection_with<H: HashFunction>(
    a: &[Quad],
    b: &[Quad],
    budget: &Budget,
) -> Result<Option<Bijection>, IsoError> {
    let ground_a = index_graph(quads_without_blank_nodes(a));
    let ground_b = index_graph(quads_without_blank_nodes(b));
    if ground_a.len() != ground_b.len() || !ground_a.keys().eq(ground_b.keys()) {
        log::debug!("not isomorphic: quads without blank nodes differ");
        return Ok(None);
    }

    let quads_a: Vec<_> = index_graph(quads_with_blank_nodes(a)).into_values().collect();
    let quads_b: Vec<_> = index_graph(quads_with_blank_nodes(b)).into_values().collect();
    if quads_a.len() != quads_b.len() {
        log::debug!("not isomorphic: {} vs {} quads with blank nodes", quads_a.len(), quads_b.len());
        return Ok(None);
    }

    let blank_nodes_a = blank_nodes_of(quads_a.iter().copied());
    let blank_nodes_b = blank_nodes_of(quads_b.iter().copied());
    if blank_nodes_a.len() != blank_nodes_b.len() {
        log::debug!(
            "not isomorphic: {} vs {} blank nodes",
            blank_nodes_a.len(),
            blank_nodes_b.len()
        );
        return Ok(None);
    }

    let mut solver = Solver::<H>::new(
        Side {
            quads: quads_a,
            blank_nodes: blank_nodes_a,
        },
        Side {
            quads: quads_b,
            blank_nodes: blank_nodes_b,
        },
        budget,
    );
    let res = solver.solve();
    match &res {
        Ok(Some(_)) => log::debug!("isomorphic ({} steps)", solver.calls()),
        Ok(None) => log::debug!("not isomorphic ({} steps)", solver.calls()),
        Err(err) => log::debug!("{err} ({} steps)", solver.calls()),
    }
    res
}

/// Checks that renaming the blank nodes of `a` according to `bijection`
/// produces exactly the quads of `b` (as sets).
///
/// `bijection` must map every blank node of `a`, and be injective.
pub fn check_bijection(a: &[Quad], b: &[Quad], bijection: &Bijection) -> bool {
    let targets: HashSet<&BnodeId> = bijection.values().collect();
    if targets.len() != bijection.len() {
        return false;
    }
    if !blank_nodes_of(a).into_iter().all(|bnid| bijection.contains_key(bnid)) {
        return false;
    }
    let Some(relabelled) = a.iter().map(|q| relabel_quad(q, bijection)).collect::<Option<Vec<_>>>() else {
        return false;
    };
    let index_a = index_graph(&relabelled);
    let index_b = index_graph(b);
    index_a.len() == index_b.len() && index_a.keys().eq(index_b.keys())
}

pub(crate) fn relabel_quad(quad: &Quad, bijection: &Bijection) -> Option<Quad> {
    let [s, p, o, g] = quad.spog();
    Some(Quad::new(
        relabel_term(s, bijection)?,
        relabel_term(p, bijection)?,
        relabel_term(o, bijection)?,
        relabel_term(g, bijection)?,
    ))
}

fn relabel_term(term: &Term, bijection: &Bijection) -> Option<Term> {
    match term {
        Term::BlankNode(bnid) => bijection.get(bnid).cloned().map(Term::BlankNode),
        Term::Quad(quad) => relabel_quad(quad, bijection).map(Term::from),
        Term::Iri(_) | Term::Literal(_) | Term::Variable(_) | Term::DefaultGraph => Some(term.clone()),
    }
}
