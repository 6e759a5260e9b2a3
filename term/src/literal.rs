//! I define [`Literal`], the value of [`Term::Literal`](crate::Term::Literal).
use std::sync::Arc;

use crate::ns::{rdf, xsd};
use crate::{IriRef, LanguageTag};

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal).
///
/// Equality is structural: two literals are equal iff they have
/// the same lexical form, the same datatype and the same language tag.
/// No value-based comparison is performed (`"01"^^xsd:integer != "1"^^xsd:integer`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    lexical_form: Arc<str>,
    datatype: IriRef,
    language_tag: Option<LanguageTag>,
}

impl Literal {
    /// A simple literal, with datatype `xsd:string`.
    pub fn new_simple(lexical_form: impl Into<Arc<str>>) -> Self {
        Literal {
            lexical_form: lexical_form.into(),
            datatype: IriRef::new_unchecked(xsd::STRING),
            language_tag: None,
        }
    }

    /// A literal with an explicit datatype.
    pub fn new_typed(lexical_form: impl Into<Arc<str>>, datatype: IriRef) -> Self {
        Literal {
            lexical_form: lexical_form.into(),
            datatype,
            language_tag: None,
        }
    }

    /// A [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string),
    /// with datatype `rdf:langString`.
    pub fn new_lang(lexical_form: impl Into<Arc<str>>, language_tag: LanguageTag) -> Self {
        Literal {
            lexical_form: lexical_form.into(),
            datatype: IriRef::new_unchecked(rdf::LANG_STRING),
            language_tag: Some(language_tag),
        }
    }

    /// The lexical form of this literal.
    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    /// The datatype of this literal.
    pub fn datatype(&self) -> &IriRef {
        &self.datatype
    }

    /// The language tag of this literal, if any.
    pub fn language_tag(&self) -> Option<&LanguageTag> {
        self.language_tag.as_ref()
    }

    /// Whether this literal is a simple literal (datatype `xsd:string`, no language tag).
    pub fn is_simple(&self) -> bool {
        self.language_tag.is_none() && self.datatype.as_str() == xsd::STRING
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::new_simple(value)
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::new_simple(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::new_typed(value.to_string(), IriRef::new_unchecked(xsd::INTEGER))
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::from(i64::from(value))
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        let lex = if value { "true" } else { "false" };
        Literal::new_typed(lex, IriRef::new_unchecked(xsd::BOOLEAN))
    }
}
