use super::*;
use test_case::test_case;

fn iri(txt: &str) -> Term {
    IriRef::new_unchecked(txt).into()
}

fn bn(id: &str) -> Term {
    BnodeId::new_unchecked(id).into()
}

#[test_case(iri("tag:a"), "<tag:a>"; "iri")]
#[test_case(bn("b1"), "_:b1"; "blank node")]
#[test_case("hello".into(), r#""hello""#; "simple literal")]
#[test_case("a \"quoted\"\nline".into(), r#""a \"quoted\"\nline""#; "escaped literal")]
#[test_case(42.into(), r#""42"^^<http://www.w3.org/2001/XMLSchema#integer>"#; "integer literal")]
#[test_case(Term::lang_string("chat", "fr").unwrap(), r#""chat"@fr"#; "language string")]
#[test_case(Term::variable("x").unwrap(), "?x"; "variable")]
#[test_case(Term::DefaultGraph, ""; "default graph")]
#[test_case(Quad::triple(bn("s"), iri("tag:p"), "o").into(), r#"<< _:s <tag:p> "o" >>"#; "embedded triple")]
#[test_case(Quad::new(bn("s"), iri("tag:p"), bn("o"), iri("tag:g")).into(), "<< _:s <tag:p> _:o <tag:g> >>"; "embedded quad")]
fn canonical_form(term: Term, expected: &str) {
    assert_eq!(term.to_string(), expected);
}

#[test]
fn quad_canonical_form() {
    let q1 = Quad::triple(iri("tag:s"), iri("tag:p"), "o");
    assert_eq!(q1.to_string(), r#"<tag:s> <tag:p> "o" ."#);
    let q2 = Quad::new(bn("s"), iri("tag:p"), bn("o"), iri("tag:g"));
    assert_eq!(q2.to_string(), "_:s <tag:p> _:o <tag:g> .");
}

#[test]
fn structural_equality() {
    assert_eq!(Term::from("a"), Term::Literal(Literal::new_simple("a")));
    assert_eq!(
        Term::from("a"),
        Term::Literal(Literal::new_typed("a", IriRef::new_unchecked(ns::xsd::STRING)))
    );
    assert_ne!(Term::from("a"), Term::lang_string("a", "en").unwrap());
    assert_ne!(Term::from("a"), iri("a"));
    assert_ne!(bn("a"), Term::variable("a").unwrap());

    let q1 = Quad::triple(bn("s"), iri("tag:p"), Term::from(Quad::triple(bn("x"), iri("tag:q"), 1)));
    let q2 = Quad::triple(bn("s"), iri("tag:p"), Term::from(Quad::triple(bn("x"), iri("tag:q"), 1)));
    let q3 = Quad::triple(bn("s"), iri("tag:p"), Term::from(Quad::triple(bn("x"), iri("tag:q"), 2)));
    assert_eq!(q1, q2);
    assert_ne!(q1, q3);
    assert_eq!(q1.to_string(), q2.to_string());
    assert_ne!(q1.to_string(), q3.to_string());
}

#[test]
fn nested_terms() {
    let inner = Quad::triple(bn("x"), iri("tag:q"), Quad::triple(iri("tag:a"), iri("tag:b"), bn("y")));
    let quad = Quad::new(bn("s"), iri("tag:p"), inner, iri("tag:g"));
    let got: Vec<String> = quad.nested_terms().map(Term::to_string).collect();
    assert_eq!(
        got,
        vec![
            "_:s", "<tag:p>", "_:x", "<tag:q>", "<tag:a>", "<tag:b>", "_:y", "", "", "<tag:g>"
        ]
    );
    assert!(quad.contains_nested(&bn("y")));
    assert!(!quad.contains_nested(&bn("z")));
}

#[test]
fn contains_blank_node() {
    let ground = Quad::triple(iri("tag:s"), iri("tag:p"), "o");
    assert!(!ground.contains_blank_node());

    let direct = Quad::new(iri("tag:s"), iri("tag:p"), "o", bn("g"));
    assert!(direct.contains_blank_node());

    let nested = Quad::triple(
        iri("tag:s"),
        iri("tag:p"),
        Quad::triple(iri("tag:a"), iri("tag:b"), bn("c")),
    );
    assert!(nested.contains_blank_node());
    assert!(nested.object.contains_blank_node());
    assert!(!nested.subject.contains_blank_node());
}

#[test]
fn kinds() {
    assert_eq!(iri("tag:a").kind(), TermKind::Iri);
    assert_eq!(bn("a").kind(), TermKind::BlankNode);
    assert_eq!(Term::from(1).kind(), TermKind::Literal);
    assert_eq!(Term::variable("v").unwrap().kind(), TermKind::Variable);
    assert_eq!(Term::DefaultGraph.kind(), TermKind::DefaultGraph);
    assert_eq!(Term::from(Quad::triple(bn("a"), iri("tag:b"), 1)).kind(), TermKind::Quad);
}

#[test]
fn invalid_terms() {
    assert_eq!(
        Term::bnode("a b"),
        Err(TermError::InvalidBlankNodeId("a b".to_string()))
    );
    assert!(matches!(Term::iri("tag:a b"), Err(TermError::InvalidIri(_))));
    assert!(matches!(Term::variable("?x"), Err(TermError::InvalidVariableName(_))));
    assert!(matches!(Term::lang_string("x", "e"), Err(TermError::InvalidLanguageTag(_))));
}
