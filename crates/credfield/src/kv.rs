//! Key/value splitting for auth-params.

/// A list element split at its first `=`.
///
/// `auth-param = token BWS "=" BWS ( token / quoted-string )`
/// (RFC 7235 §2.1). An element with no `=` at all keeps its text in the
/// value and leaves the key empty; that shape marks a token68 candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyValue {
    key: String,
    value: String,
}

impl KeyValue {
    /// Splits `element` at the first `=` and trims BWS around both sides.
    ///
    /// Everything after the first `=` belongs to the value, so `a=b=c`
    /// splits into `a` and `b=c`. Without an `=` the key stays empty and
    /// the value is the whole element, untrimmed.
    #[must_use]
    pub fn parse(element: &str) -> Self {
        match element.split_once('=') {
            Some((key, value)) => Self {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => Self {
                key: String::new(),
                value: element.to_string(),
            },
        }
    }

    /// Returns the key; empty when the element had no `=`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
