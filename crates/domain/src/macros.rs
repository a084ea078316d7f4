//! Macro for implementing Display and FromStr for stored status enums
//!
//! Status columns (`pending`, `published`, `sent`, ...) are persisted as
//! lowercase text. The macro keeps the string mapping in one place and
//! parses case-insensitively.
//!
//! # Example
//!
//! ```rust
//! use linkedgpt_domain::impl_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum DraftState {
//!     Open,
//!     Closed,
//! }
//!
//! impl_status_conversions!(DraftState {
//!     Open => "open",
//!     Closed => "closed",
//! });
//! ```

/// Implements `Display`, `FromStr` and `as_str` for status enums.
///
/// Parsing failures are reported as [`crate::LinkedGptError::InvalidInput`].
#[macro_export]
macro_rules! impl_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Persisted string form.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::LinkedGptError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::LinkedGptError::InvalidInput(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::LinkedGptError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Draft,
        Sent,
    }

    impl_status_conversions!(TestStatus {
        Draft => "draft",
        Sent => "sent",
    });

    #[test]
    fn display_uses_lowercase_form() {
        assert_eq!(TestStatus::Draft.to_string(), "draft");
        assert_eq!(TestStatus::Sent.as_str(), "sent");
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(TestStatus::from_str("SENT").unwrap(), TestStatus::Sent);
        assert_eq!(TestStatus::from_str(" Draft ").unwrap(), TestStatus::Draft);
    }

    mod with_result_alias {
        use std::str::FromStr;

        #[allow(unused_imports)]
        use crate::Result;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Visibility {
            Public,
        }

        impl_status_conversions!(Visibility {
            Public => "public",
        });

        #[test]
        fn expands_next_to_single_parameter_result_alias() {
            assert_eq!(Visibility::from_str("PUBLIC").unwrap(), Visibility::Public);
        }
    }

    #[test]
    fn invalid_value_is_invalid_input() {
        let err = TestStatus::from_str("archived").unwrap_err();
        assert!(matches!(err, LinkedGptError::InvalidInput(msg) if msg.contains("TestStatus")));
    }
}
