//! I define the [`LanguageTag`] wrapper type,
//! which guarantees that the underlying `str`
//! is a valid [BCP47](https://tools.ietf.org/search/bcp47) language tag.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LANG_TAG: Regex = Regex::new(LANG_TAG_SRC).unwrap();
}

/// Match a valid BCP47 language tag
static LANG_TAG_SRC: &str = r"(?xi-u)^
(
  (?:
    (?: #language
      (?:
        [A-Z]{2,3}
        (?: #extlang
          (?:
            -[A-Z]{3}
          ){0,3}
        )
      )
    |
      [A-Z]{4,8}
    )
    (?: #script
      -[A-Z]{4}
    )?
    (?: #region
      -
      (?:
        [A-Z]{2}
      |
        [0-9]{3}
      )
    )?
    (?: #variant
      -
      (?:
        [A-Z0-9]{5,8}
      |
        [0-9][A-Z0-9]{3}
      )
    )*
    (?: #extension
      -[0-9A-WY-Z]
      (?:
        -[A-Z0-9]{2,8}
      )+
    )*
    (?: #privateUse
      -X
      (?:
        -[A-Z0-9]{1,8}
      )+
    )?
  )
|
  (?: #privateUse
    X
    (?:
      -[A-Z0-9]{1,8}
    )+
  )
|
  (?: #grandfathered
    en-GB-oed|i-ami|i-bnn|i-default|i-enochian|i-hak|i-klingon|i-lux|i-mingo|i-navajo|i-pwn|i-tao|i-tay|i-tsu|sgn-BE-FR|sgn-BE-NL|sgn-CH-DE
  )
)$";

fn is_valid_language_tag(txt: &str) -> bool {
    LANG_TAG.is_match(txt)
}

wrap_str! {
    /// This wrapper guarantees that the underlying `str`
    /// is a valid [BCP47](https://tools.ietf.org/search/bcp47) language tag.
    ///
    /// NB: it is actually slightly more permissive than BCP47,
    /// as it does not check that the different subtags are registered codes.
    /// Comparison is case-sensitive: tags are compared as given.
    LanguageTag, InvalidLanguageTag, is_valid_language_tag
}
