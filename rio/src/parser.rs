//! Parse N-Triples, N-Quads, Turtle and TriG with the [RIO](https://docs.rs/rio_turtle/) parsers.
//!
//! Every function reads the whole input,
//! and returns the parsed statements as a vector of [`Quad`]s.
//! Triples are placed in the default graph.
use std::io::BufRead;

use oxiri::Iri;
use rdfiso_term::Quad;
use rio_api::parser::{QuadsParser, TriplesParser};
use rio_turtle::{NQuadsParser, NTriplesParser, TriGParser, TurtleError, TurtleParser};

use crate::{model, Result, RioError};

/// Parse [N-Triples](https://www.w3.org/TR/n-triples/) from `data`.
pub fn parse_ntriples<B: BufRead>(data: B) -> Result<Vec<Quad>> {
    collect_triples(NTriplesParser::new(data))
}

/// Parse [N-Quads](https://www.w3.org/TR/n-quads/) from `data`.
pub fn parse_nquads<B: BufRead>(data: B) -> Result<Vec<Quad>> {
    collect_quads(NQuadsParser::new(data))
}

/// Parse [Turtle](https://www.w3.org/TR/turtle/) from `data`.
///
/// `base`, if provided, is used to resolve relative IRI-references.
pub fn parse_turtle<B: BufRead>(data: B, base: Option<&str>) -> Result<Vec<Quad>> {
    let base = parse_base(base)?;
    collect_triples(TurtleParser::new(data, base))
}

/// Parse [TriG](https://www.w3.org/TR/trig/) from `data`.
///
/// `base`, if provided, is used to resolve relative IRI-references.
pub fn parse_trig<B: BufRead>(data: B, base: Option<&str>) -> Result<Vec<Quad>> {
    let base = parse_base(base)?;
    collect_quads(TriGParser::new(data, base))
}

fn parse_base(base: Option<&str>) -> Result<Option<Iri<String>>> {
    base.map(|iri| Iri::parse(iri.to_string()))
        .transpose()
        .map_err(|err| RioError::InvalidBase(err.to_string()))
}

fn collect_triples<P>(mut parser: P) -> Result<Vec<Quad>>
where
    P: TriplesParser<Error = TurtleError>,
{
    let mut quads = Vec::new();
    parser.parse_all(&mut |t| -> std::result::Result<(), TurtleError> {
        quads.push(model::triple(&t));
        Ok(())
    })?;
    log::debug!("parsed {} triples", quads.len());
    Ok(quads)
}

fn collect_quads<P>(mut parser: P) -> Result<Vec<Quad>>
where
    P: QuadsParser<Error = TurtleError>,
{
    let mut quads = Vec::new();
    parser.parse_all(&mut |q| -> std::result::Result<(), TurtleError> {
        quads.push(model::quad(&q));
        Ok(())
    })?;
    log::debug!("parsed {} quads", quads.len());
    Ok(quads)
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rdfiso_term::ns::xsd;
    use rdfiso_term::Term;
    use test_case::test_case;

    fn lines(quads: &[Quad]) -> Vec<String> {
        let mut lines: Vec<_> = quads.iter().map(Quad::to_string).collect();
        lines.sort();
        lines
    }

    #[test]
    fn ntriples() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let nt = r#"<http://example.org/s> <http://example.org/p> "hello"@en .
_:b <http://example.org/p> "42"^^<http://www.w3.org/2001/XMLSchema#integer> .
"#;
        let quads = parse_ntriples(nt.as_bytes())?;
        assert_eq!(
            lines(&quads),
            vec![
                r#"<http://example.org/s> <http://example.org/p> "hello"@en ."#,
                r#"_:b <http://example.org/p> "42"^^<http://www.w3.org/2001/XMLSchema#integer> ."#,
            ]
        );
        assert!(quads.iter().all(Quad::is_triple));
        Ok(())
    }

    #[test]
    fn nquads() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let nq = r#"<http://example.org/s> <http://example.org/p> _:o <http://example.org/g> .
_:o <http://example.org/p> "x" _:g .
<http://example.org/s> <http://example.org/p> "y" .
"#;
        let quads = parse_nquads(nq.as_bytes())?;
        assert_eq!(quads.len(), 3);
        assert_eq!(quads[0].graph, Term::iri("http://example.org/g")?);
        assert_eq!(quads[1].graph, Term::bnode("g")?);
        assert!(quads[2].is_triple());
        Ok(())
    }

    #[test]
    fn turtle() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let ttl = r#"
            @prefix : <http://example.org/ns/> .

            <#me> :knows [ :name "Bob" ], _:c .
            _:c :age 42 .
        "#;
        let quads = parse_turtle(ttl.as_bytes(), Some("http://example.org/doc"))?;
        assert_eq!(quads.len(), 4);
        assert!(quads.iter().all(Quad::is_triple));
        let me = Term::iri("http://example.org/doc#me")?;
        assert_eq!(quads.iter().filter(|q| q.subject == me).count(), 2);
        let age = quads
            .iter()
            .find_map(|q| q.object.as_literal().filter(|lit| lit.lexical_form() == "42"))
            .expect("age should be parsed");
        assert_eq!(age.datatype().as_str(), xsd::INTEGER);
        Ok(())
    }

    #[test]
    fn turtle_star() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let ttl = r#"
            @prefix : <http://example.org/ns/> .
            << _:a :p :o >> :q :r .
        "#;
        let quads = parse_turtle(ttl.as_bytes(), None)?;
        assert_eq!(quads.len(), 1);
        assert!(quads[0].subject.is_quad());
        assert!(quads[0].contains_blank_node());
        Ok(())
    }

    #[test]
    fn trig() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let trig = r#"
            @prefix : <http://example.org/ns/> .

            :alice :knows :bob .
            <tag:g1> {
                _:alice a :Person ; :name "Alice" .
            }
        "#;
        let quads = parse_trig(trig.as_bytes(), None)?;
        assert_eq!(quads.len(), 3);
        assert_eq!(quads.iter().filter(|q| q.is_triple()).count(), 1);
        let g1 = Term::iri("tag:g1")?;
        assert_eq!(quads.iter().filter(|q| q.graph == g1).count(), 2);
        Ok(())
    }

    #[test_case("<http://example.org/s> <http://example.org/p> ."; "missing object")]
    #[test_case("<http://example.org/s> <http://example.org/p> \"o\""; "missing dot")]
    fn syntax_error(nt: &str) {
        assert!(matches!(parse_ntriples(nt.as_bytes()), Err(RioError::Syntax(_))));
    }

    #[test]
    fn invalid_base() {
        let res = parse_turtle("<a> <b> <c> .".as_bytes(), Some("not an iri"));
        assert!(matches!(res, Err(RioError::InvalidBase(_))));
    }
}
