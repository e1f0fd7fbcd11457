//! Error types for credentials-field parsing.

/// Result type alias for credentials-field parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing a credentials field.
///
/// The list variant is structural: the comma list cannot be split safely,
/// so it is fatal in both strict and lenient mode. The remaining variants
/// are policy violations that lenient mode downgrades to warnings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed comma list (unterminated quoting).
    #[error(transparent)]
    List(#[from] ListError),

    /// More than one bare value was found in the element list.
    #[error("Multiple token68 is not allowed")]
    MultipleToken68,

    /// An auth-param failed token or quoted-string validation.
    #[error("Bad parameter: {element}")]
    BadParameter {
        /// The offending list element, verbatim.
        element: String,
        /// The validator failure.
        source: ValidationError,
    },

    /// The token68 candidate failed validation.
    #[error("Bad token: {token}")]
    BadToken {
        /// The offending candidate, verbatim.
        token: String,
        /// The validator failure.
        source: ValidationError,
    },
}

/// Errors raised by the comma-list splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// Input ended inside a quoted string.
    #[error("Unclosed quoted string")]
    UnclosedQuotedString,

    /// Input ended right after a backslash.
    #[error("Unclosed quoted pair")]
    UnclosedQuotedPair,
}

/// Errors raised by the token, quoted-string and token68 validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A character outside the grammar being validated.
    ///
    /// The position is the 0-based index of the character, counted in
    /// `char`s. Inside a quoted string, a character consumed as the second
    /// half of a quoted pair does not advance the reported position.
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Its 0-based position within the validated string.
        position: usize,
    },

    /// Input ended inside a quoted string.
    #[error("Unclosed quoted string")]
    UnclosedQuotedString,

    /// Input ended right after a backslash.
    #[error("Unclosed quoted pair")]
    UnclosedQuotedPair,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(
            ValidationError::UnexpectedCharacter { ch: '?', position: 3 }.to_string(),
            "Unexpected character '?' at position 3"
        );
        assert_eq!(
            ValidationError::UnclosedQuotedString.to_string(),
            "Unclosed quoted string"
        );
        assert_eq!(
            ValidationError::UnclosedQuotedPair.to_string(),
            "Unclosed quoted pair"
        );
        assert_eq!(
            Error::MultipleToken68.to_string(),
            "Multiple token68 is not allowed"
        );
        assert_eq!(
            Error::BadParameter {
                element: "a?=b".to_string(),
                source: ValidationError::UnexpectedCharacter { ch: '?', position: 1 },
            }
            .to_string(),
            "Bad parameter: a?=b"
        );
        assert_eq!(
            Error::BadToken {
                token: "k?".to_string(),
                source: ValidationError::UnexpectedCharacter { ch: '?', position: 1 },
            }
            .to_string(),
            "Bad token: k?"
        );
    }

    #[test]
    fn test_list_error_is_transparent() {
        let error = Error::from(ListError::UnclosedQuotedString);
        assert_eq!(error.to_string(), "Unclosed quoted string");
    }

    #[test]
    fn test_violation_source_is_exposed() {
        let error = Error::BadToken {
            token: "k?".to_string(),
            source: ValidationError::UnexpectedCharacter { ch: '?', position: 1 },
        };
        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(source.to_string(), "Unexpected character '?' at position 1");
    }
}
