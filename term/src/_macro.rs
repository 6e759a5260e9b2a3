//! I define the `wrap_str!` macro,
//! generating newtypes around `Arc<str>`
//! that guarantee that the underlying text complies with some syntactic rule.

macro_rules! wrap_str {
    ($(#[$attr: meta])* $wid: ident, $err: ident, $is_valid: path) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $wid(std::sync::Arc<str>);

        impl $wid {
            #[doc = concat!("Build a new [`", stringify!($wid), "`] from `value`,")]
            /// returning an error if it is not valid.
            pub fn new(value: impl Into<std::sync::Arc<str>>) -> Result<Self, $crate::TermError> {
                let value = value.into();
                if $is_valid(&value) {
                    Ok($wid(value))
                } else {
                    Err($crate::TermError::$err(value.to_string()))
                }
            }

            #[doc = concat!("Build a new [`", stringify!($wid), "`] from `value`,")]
            /// without checking its validity.
            ///
            /// This is meant for trusted sources, such as parsers;
            /// validity is only asserted in debug builds.
            pub fn new_unchecked(value: impl Into<std::sync::Arc<str>>) -> Self {
                let value = value.into();
                debug_assert!($is_valid(&value), "invalid {}: {:?}", stringify!($wid), value);
                $wid(value)
            }

            /// Gets a reference to the underlying `str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the wrapped value, consuming `self`.
            pub fn unwrap(self) -> std::sync::Arc<str> {
                self.0
            }
        }

        impl std::ops::Deref for $wid {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $wid {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $wid {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $wid {
            type Err = $crate::TermError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $wid::new(s)
            }
        }
    };
}
