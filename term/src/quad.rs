//! I define [`Quad`], and the [`NestedTerms`] iterator.
use std::fmt;

use crate::_cnq::nq_quad;
use crate::Term;

/// An RDF statement: subject, predicate, object and graph label.
///
/// A triple is a quad whose graph label is [`Term::DefaultGraph`].
/// No constraint is put on the kind of each component
/// (this is [generalized RDF](https://www.w3.org/TR/rdf11-concepts/#section-generalized-rdf)).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quad {
    /// The subject of this quad
    pub subject: Term,
    /// The predicate of this quad
    pub predicate: Term,
    /// The object of this quad
    pub object: Term,
    /// The graph label of this quad
    pub graph: Term,
}

impl Quad {
    /// Build a quad from its four components.
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
        graph: impl Into<Term>,
    ) -> Self {
        Quad {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: graph.into(),
        }
    }

    /// Build a quad in the default graph.
    pub fn triple(subject: impl Into<Term>, predicate: impl Into<Term>, object: impl Into<Term>) -> Self {
        Quad::new(subject, predicate, object, Term::DefaultGraph)
    }

    /// The four components of this quad, in positional order.
    pub fn spog(&self) -> [&Term; 4] {
        [&self.subject, &self.predicate, &self.object, &self.graph]
    }

    /// Consume this quad into its four components.
    pub fn into_spog(self) -> [Term; 4] {
        [self.subject, self.predicate, self.object, self.graph]
    }

    /// Whether this quad belongs to the default graph.
    pub fn is_triple(&self) -> bool {
        self.graph.is_default_graph()
    }

    /// Iter over all the atomic terms of this quad,
    /// recursing into the embedded quads, depth first.
    ///
    /// Embedded quads are not yielded themselves, only their components.
    pub fn nested_terms(&self) -> NestedTerms<'_> {
        let [s, p, o, g] = self.spog();
        NestedTerms::new(vec![g, o, p, s])
    }

    /// Whether any term of this quad, including nested ones, is a blank node.
    pub fn contains_blank_node(&self) -> bool {
        self.nested_terms().any(Term::is_blank_node)
    }

    /// Whether `term` occurs anywhere in this quad, including in nested quads.
    pub fn contains_nested(&self, term: &Term) -> bool {
        self.nested_terms().any(|t| t == term)
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        nq_quad(self, f)
    }
}

/// Iterator over the atomic terms of a [`Term`] or a [`Quad`];
/// see [`Quad::nested_terms`].
#[derive(Clone, Debug)]
pub struct NestedTerms<'a> {
    stack: Vec<&'a Term>,
}

impl<'a> NestedTerms<'a> {
    /// `stack` must be given in reverse order
    pub(crate) fn new(stack: Vec<&'a Term>) -> Self {
        NestedTerms { stack }
    }
}

impl<'a> Iterator for NestedTerms<'a> {
    type Item = &'a Term;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(term) = self.stack.pop() {
            if let Term::Quad(quad) = term {
                let [s, p, o, g] = quad.spog();
                self.stack.extend([g, o, p, s]);
            } else {
                return Some(term);
            }
        }
        None
    }
}
