//! I define the [`IriRef`] wrapper type,
//! which guarantees that the underlying `str`
//! is a valid [IRI reference](https://www.rfc-editor.org/rfc/rfc3987#section-2.2).

fn is_valid_iri_ref(txt: &str) -> bool {
    oxiri::IriRef::parse(txt).is_ok()
}

wrap_str! {
    /// This wrapper guarantees that the underlying `str`
    /// is a valid IRI reference (absolute or relative).
    ///
    /// NB: relative references are accepted as is, and never resolved;
    /// two relative IRIs are equal iff they are textually equal.
    IriRef, InvalidIri, is_valid_iri_ref
}

impl IriRef {
    /// Whether this IRI reference is absolute (i.e. has a scheme).
    pub fn is_absolute(&self) -> bool {
        oxiri::Iri::parse(self.as_str()).is_ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.org/"; "http")]
    #[test_case("tag:rel")]
    #[test_case("urn:isbn:0451450523"; "urn")]
    #[test_case("#frag"; "relative fragment")]
    #[test_case("a1"; "relative path")]
    #[test_case(""; "empty")]
    fn valid(txt: &str) {
        assert!(IriRef::new(txt).is_ok());
    }

    #[test_case("http://a b/"; "space")]
    #[test_case("<tag:a>"; "brackets")]
    #[test_case("http://[::1"; "unclosed ip literal")]
    fn invalid(txt: &str) {
        assert!(IriRef::new(txt).is_err());
    }

    #[test]
    fn absolute() {
        assert!(IriRef::new_unchecked("tag:a").is_absolute());
        assert!(!IriRef::new_unchecked("#a").is_absolute());
    }
}
