//! Canonical N-Quads-like serialization of terms and quads.
//!
//! This is the "string identity" of terms and quads:
//! two terms (resp. quads) are equal iff their serializations are equal.

use std::fmt::{Result, Write};

use crate::ns::xsd;
use crate::{Quad, Term};

/// Serialize a term.
///
/// The default graph serializes as the empty string.
pub fn nq<W: Write>(term: &Term, w: &mut W) -> Result {
    match term {
        Term::Iri(iri) => {
            w.write_char('<')?;
            w.write_str(iri)?;
            w.write_char('>')
        }
        Term::BlankNode(bnid) => {
            w.write_str("_:")?;
            w.write_str(bnid)
        }
        Term::Literal(lit) => {
            w.write_char('"')?;
            for c in lit.lexical_form().chars() {
                match c {
                    '"' => w.write_str("\\\"")?,
                    '\\' => w.write_str("\\\\")?,
                    '\n' => w.write_str("\\n")?,
                    '\r' => w.write_str("\\r")?,
                    '\t' => w.write_str("\\t")?,
                    '\x08' => w.write_str("\\b")?,
                    '\x0c' => w.write_str("\\f")?,
                    '\x7f' => w.write_str("\\u007F")?,
                    c if c <= '\x1f' => write!(w, "\\u{:04X}", c as u8)?,
                    _ => w.write_char(c)?,
                }
            }
            w.write_char('"')?;
            if let Some(tag) = lit.language_tag() {
                w.write_char('@')?;
                w.write_str(tag)
            } else if lit.datatype().as_str() != xsd::STRING {
                w.write_str("^^<")?;
                w.write_str(lit.datatype())?;
                w.write_char('>')
            } else {
                Ok(())
            }
        }
        Term::Variable(name) => {
            w.write_char('?')?;
            w.write_str(name)
        }
        Term::DefaultGraph => Ok(()),
        Term::Quad(quad) => {
            w.write_str("<< ")?;
            nq_spog(quad, w)?;
            w.write_str(" >>")
        }
    }
}

/// Serialize a quad as an N-Quads line, without the trailing newline.
pub fn nq_quad<W: Write>(quad: &Quad, w: &mut W) -> Result {
    nq_spog(quad, w)?;
    w.write_str(" .")
}

fn nq_spog<W: Write>(quad: &Quad, w: &mut W) -> Result {
    nq(&quad.subject, w)?;
    w.write_char(' ')?;
    nq(&quad.predicate, w)?;
    w.write_char(' ')?;
    nq(&quad.object, w)?;
    if !quad.graph.is_default_graph() {
        w.write_char(' ')?;
        nq(&quad.graph, w)?;
    }
    Ok(())
}
