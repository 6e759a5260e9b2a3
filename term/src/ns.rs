//! Standard IRIs required by the data model.

/// The [XML Schema datatypes](https://www.w3.org/TR/xmlschema11-2/) namespace.
pub mod xsd {
    /// Prefix used in this namespace.
    pub static PREFIX: &str = "http://www.w3.org/2001/XMLSchema#";
    /// `xsd:string`, the datatype of simple literals.
    pub static STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`
    pub static INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:boolean`
    pub static BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}

/// The [RDF](https://www.w3.org/TR/rdf11-concepts/) namespace.
pub mod rdf {
    /// Prefix used in this namespace.
    pub static PREFIX: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// `rdf:langString`, the datatype of language-tagged strings.
    pub static LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}
