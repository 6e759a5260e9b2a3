//! I define [`Term`], a closed enum of all the kinds of RDF terms,
//! and [`TermKind`] to discriminate them.
use std::fmt;

use crate::_cnq::nq;
use crate::{BnodeId, IriRef, LanguageTag, Literal, NestedTerms, Quad, Result, VarName};

/// The different kinds of [`Term`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermKind {
    /// An IRI
    Iri,
    /// A blank node
    BlankNode,
    /// A literal
    Literal,
    /// A variable
    Variable,
    /// The default graph, used as graph label of triples
    DefaultGraph,
    /// A quad used as a term
    Quad,
}

/// An RDF term.
///
/// Equality, hashing and ordering are structural,
/// recursively for [embedded quads](Term::Quad).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri(IriRef),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(BnodeId),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal(Literal),
    /// A SPARQL or Notation3 variable
    Variable(VarName),
    /// The default graph
    DefaultGraph,
    /// A quad used as a term (RDF-star style)
    Quad(Box<Quad>),
}

impl Term {
    /// Build an IRI term, checking its validity.
    pub fn iri(iri: &str) -> Result<Self> {
        IriRef::new(iri).map(Term::Iri)
    }

    /// Build a blank node, checking the validity of its identifier.
    pub fn bnode(id: &str) -> Result<Self> {
        BnodeId::new(id).map(Term::BlankNode)
    }

    /// Build a variable, checking the validity of its name.
    pub fn variable(name: &str) -> Result<Self> {
        VarName::new(name).map(Term::Variable)
    }

    /// Build a language-tagged string, checking the validity of its tag.
    pub fn lang_string(lexical_form: &str, tag: &str) -> Result<Self> {
        LanguageTag::new(tag).map(|tag| Term::Literal(Literal::new_lang(lexical_form, tag)))
    }

    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
            Term::Variable(_) => TermKind::Variable,
            Term::DefaultGraph => TermKind::DefaultGraph,
            Term::Quad(_) => TermKind::Quad,
        }
    }

    /// Whether this term is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Whether this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Whether this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Whether this term is a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// Whether this term is the default graph.
    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph)
    }

    /// Whether this term is an embedded quad.
    pub fn is_quad(&self) -> bool {
        matches!(self, Term::Quad(_))
    }

    /// If this term is an IRI, return it.
    pub fn as_iri(&self) -> Option<&IriRef> {
        if let Term::Iri(iri) = self {
            Some(iri)
        } else {
            None
        }
    }

    /// If this term is a blank node, return its identifier.
    pub fn bnode_id(&self) -> Option<&BnodeId> {
        if let Term::BlankNode(bnid) = self {
            Some(bnid)
        } else {
            None
        }
    }

    /// If this term is a literal, return it.
    pub fn as_literal(&self) -> Option<&Literal> {
        if let Term::Literal(lit) = self {
            Some(lit)
        } else {
            None
        }
    }

    /// If this term is an embedded quad, return it.
    pub fn as_quad(&self) -> Option<&Quad> {
        if let Term::Quad(quad) = self {
            Some(quad)
        } else {
            None
        }
    }

    /// Iter over the atomic terms of this term:
    /// the term itself if it is not an embedded quad,
    /// or all the nested atomic terms of that quad otherwise.
    pub fn nested_terms(&self) -> NestedTerms<'_> {
        NestedTerms::new(vec![self])
    }

    /// Whether this term is, or (recursively) contains, a blank node.
    pub fn contains_blank_node(&self) -> bool {
        self.nested_terms().any(Term::is_blank_node)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        nq(self, f)
    }
}

impl From<IriRef> for Term {
    fn from(value: IriRef) -> Self {
        Term::Iri(value)
    }
}

impl From<BnodeId> for Term {
    fn from(value: BnodeId) -> Self {
        Term::BlankNode(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

impl From<VarName> for Term {
    fn from(value: VarName) -> Self {
        Term::Variable(value)
    }
}

impl From<Quad> for Term {
    fn from(value: Quad) -> Self {
        Term::Quad(Box::new(value))
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Literal(value.into())
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        Term::Literal(value.into())
    }
}
