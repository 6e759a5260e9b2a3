//! Convert the types of [`rio_api::model`] into [`rdfiso_term`] types.
//!
//! NB: since [`rio_api::model`] types have public fields,
//! they can not in general be trusted to contain valid data
//! (e.g. a valid IRI in [`NamedNode`]).
//!
//! However, their typical use-case is to be produced by a parser,
//! which ensures the validity of the underlying data.
//! The conversions below therefore only check validity in debug mode.
use rdfiso_term::ns::xsd;
use rdfiso_term::{BnodeId, IriRef, LanguageTag, Literal as IsoLiteral, Quad as IsoQuad, Term as IsoTerm};
use rio_api::model::{
    BlankNode, GraphName, Literal, NamedNode, Quad as RioQuad, Subject, Term as RioTerm,
    Triple as RioTriple,
};

/// Convert a Rio IRI.
pub fn iri(n: NamedNode) -> IriRef {
    debug_assert!(IriRef::new(n.iri).is_ok());
    IriRef::new_unchecked(n.iri)
}

/// Convert a Rio blank node.
pub fn bnode_id(b: BlankNode) -> BnodeId {
    debug_assert!(BnodeId::new(b.id).is_ok());
    BnodeId::new_unchecked(b.id)
}

/// Convert a Rio literal.
pub fn literal(l: Literal) -> IsoLiteral {
    match l {
        Literal::Simple { value } => IsoLiteral::new_simple(value),
        Literal::LanguageTaggedString { value, language } => {
            debug_assert!(LanguageTag::new(language).is_ok());
            IsoLiteral::new_lang(value, LanguageTag::new_unchecked(language))
        }
        Literal::Typed { value, datatype } if datatype.iri == xsd::STRING => {
            IsoLiteral::new_simple(value)
        }
        Literal::Typed { value, datatype } => IsoLiteral::new_typed(value, iri(datatype)),
    }
}

/// Convert a Rio subject.
pub fn subject(s: Subject) -> IsoTerm {
    match s {
        Subject::NamedNode(n) => iri(n).into(),
        Subject::BlankNode(b) => bnode_id(b).into(),
        Subject::Triple(t) => triple(t).into(),
    }
}

/// Convert a Rio term.
pub fn term(t: RioTerm) -> IsoTerm {
    match t {
        RioTerm::NamedNode(n) => iri(n).into(),
        RioTerm::BlankNode(b) => bnode_id(b).into(),
        RioTerm::Literal(l) => literal(l).into(),
        RioTerm::Triple(t) => triple(t).into(),
    }
}

/// Convert an optional Rio graph name,
/// `None` standing for the default graph.
pub fn graph_name(g: Option<GraphName>) -> IsoTerm {
    match g {
        None => IsoTerm::DefaultGraph,
        Some(GraphName::NamedNode(n)) => iri(n).into(),
        Some(GraphName::BlankNode(b)) => bnode_id(b).into(),
    }
}

/// Convert a Rio triple into a quad in the default graph.
pub fn triple(t: &RioTriple) -> IsoQuad {
    IsoQuad::triple(subject(t.subject), iri(t.predicate), term(t.object))
}

/// Convert a Rio quad.
pub fn quad(q: &RioQuad) -> IsoQuad {
    IsoQuad::new(
        subject(q.subject),
        iri(q.predicate),
        term(q.object),
        graph_name(q.graph_name),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfiso_term::ns::rdf;

    #[test]
    fn convert_literals() {
        let simple = literal(Literal::Simple { value: "foo" });
        assert!(simple.is_simple());
        assert_eq!(simple.lexical_form(), "foo");

        let explicit_string = literal(Literal::Typed {
            value: "foo",
            datatype: NamedNode { iri: xsd::STRING },
        });
        assert_eq!(explicit_string, simple);

        let lang = literal(Literal::LanguageTaggedString {
            value: "chat",
            language: "fr",
        });
        assert_eq!(lang.datatype().as_str(), rdf::LANG_STRING);
        assert_eq!(lang.language_tag().map(LanguageTag::as_str), Some("fr"));

        let typed = literal(Literal::Typed {
            value: "42",
            datatype: NamedNode { iri: xsd::INTEGER },
        });
        assert_eq!(typed.datatype().as_str(), xsd::INTEGER);
        assert_eq!(typed.language_tag(), None);
    }

    #[test]
    fn convert_embedded_triple() {
        let inner = RioTriple {
            subject: Subject::BlankNode(BlankNode { id: "a" }),
            predicate: NamedNode { iri: "tag:p" },
            object: RioTerm::Literal(Literal::Simple { value: "o" }),
        };
        let outer = RioQuad {
            subject: Subject::Triple(&inner),
            predicate: NamedNode { iri: "tag:q" },
            object: RioTerm::NamedNode(NamedNode { iri: "tag:o" }),
            graph_name: Some(GraphName::BlankNode(BlankNode { id: "g" })),
        };
        let converted = quad(&outer);
        assert_eq!(converted.to_string(), r#"<< _:a <tag:p> "o" >> <tag:q> <tag:o> _:g ."#);
        assert!(converted.contains_blank_node());
    }

    #[test]
    fn convert_default_graph() {
        let t = RioTriple {
            subject: Subject::NamedNode(NamedNode { iri: "tag:s" }),
            predicate: NamedNode { iri: "tag:p" },
            object: RioTerm::BlankNode(BlankNode { id: "b" }),
        };
        let converted = triple(&t);
        assert!(converted.is_triple());
        assert_eq!(converted, quad(&RioQuad {
            subject: t.subject,
            predicate: t.predicate,
            object: t.object,
            graph_name: None,
        }));
    }
}
