//! Credentials-field values and their parser.

use std::fmt;

use crate::error::{Error, Result, ValidationError};
use crate::kv::KeyValue;
use crate::list;
use crate::params::Params;
use crate::sink::{TracingSink, WarningSink};
use crate::validator::{QuotedStringValidator, Token68Validator, TokenValidator, Validator};

/// A parsed `Authorization` / `WWW-Authenticate` credentials value.
///
/// ```text
/// credentials = auth-scheme [ 1*SP ( token68 / #auth-param ) ]
/// ```
///
/// (RFC 7235 §2.1.) The scheme is kept verbatim and never validated; an
/// empty token means no token68 was present. Quoted parameter values keep
/// their quotes and escapes, so what went over the wire is what you read
/// back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Credentials {
    scheme: String,
    token: String,
    params: Params,
}

impl Credentials {
    /// Creates credentials with a scheme and token68, without parameters.
    #[must_use]
    pub fn new(scheme: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            token: token.into(),
            params: Params::new(),
        }
    }

    /// Creates credentials with a scheme, token68 and parameters.
    #[must_use]
    pub fn with_params(scheme: impl Into<String>, token: impl Into<String>, params: Params) -> Self {
        Self {
            scheme: scheme.into(),
            token: token.into(),
            params,
        }
    }

    /// Creates credentials from `(key, value)` pairs, one value per key.
    #[must_use]
    pub fn from_single_value_params<I, K, V>(
        scheme: impl Into<String>,
        token: impl Into<String>,
        params: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let params = params
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::with_params(scheme, token, params)
    }

    /// The absent credentials value: empty scheme, token and parameters.
    ///
    /// [`parse`](Self::parse) returns this for `None` input, so callers
    /// can hand over an optional header lookup without unwrapping it.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Parses a credentials field in strict mode.
    ///
    /// Shorthand for [`Parser::new().parse(credentials)`](Parser::parse).
    ///
    /// ```
    /// use credfield::Credentials;
    ///
    /// let creds = Credentials::parse(Some("Bearer mF_9.B5f-4.1JqM"))?;
    /// assert_eq!(creds.scheme(), "Bearer");
    /// assert_eq!(creds.token(), "mF_9.B5f-4.1JqM");
    /// # Ok::<(), credfield::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] on the first grammar or policy violation.
    pub fn parse(credentials: Option<&str>) -> Result<Self> {
        Parser::new().parse(credentials)
    }

    /// Returns the auth-scheme, verbatim.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the token68, or `""` when none was present.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the auth-params.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Iterates over `(key, value)` pairs, taking each key's first value.
    pub fn single_value_params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter_map(|(key, values)| values.first().map(|value| (key, value.as_str())))
    }

    /// Renders the credentials back into header-field form.
    ///
    /// The token68 comes first, then each parameter as `key=value` with
    /// every repeated value spelled out, all joined by `", "`. Parsing
    /// the result in strict mode yields an equal [`Credentials`].
    #[must_use]
    pub fn to_header_value(&self) -> String {
        let mut parts = Vec::new();
        if !self.token.is_empty() {
            parts.push(self.token.clone());
        }
        for (key, values) in self.params.iter() {
            for value in values {
                parts.push(format!("{key}={value}"));
            }
        }
        if parts.is_empty() {
            self.scheme.clone()
        } else {
            format!("{} {}", self.scheme, parts.join(", "))
        }
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_header_value())
    }
}

/// Parser for the credentials field, with a configurable error policy.
///
/// Strict mode (the default) fails on the first violation. Lenient mode
/// forgives policy violations, reports each one to a [`WarningSink`] and
/// keeps the raw data; only malformed list quoting stays fatal, because
/// element boundaries cannot be recovered past it.
///
/// ```
/// use credfield::Parser;
///
/// let parser = Parser::new().strict(false);
/// let creds = parser.parse(Some("Custom abc, k=?"))?;
/// assert_eq!(creds.token(), "abc");
/// assert_eq!(creds.params().get("k"), Some("?"));
/// # Ok::<(), credfield::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    strict: bool,
}

impl Parser {
    /// Creates a strict parser.
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: true }
    }

    /// Sets the error policy; `false` switches to lenient mode.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parses a credentials field, logging forgiven violations through
    /// [`tracing`] in lenient mode.
    ///
    /// # Errors
    ///
    /// In strict mode, any [`Error`]. In lenient mode only the list
    /// variant, raised when quoting never closes.
    pub fn parse(&self, credentials: Option<&str>) -> Result<Credentials> {
        self.parse_with_sink(credentials, &mut TracingSink)
    }

    /// Parses a credentials field, reporting forgiven violations to
    /// `sink`.
    ///
    /// `None` parses to [`Credentials::none`]. The scheme is whatever
    /// precedes the first whitespace and is not validated; the remainder
    /// is split into comma-separated elements. An element without `=` (or
    /// with an empty side) is the token68; `key=value` elements become
    /// auth-params with keys checked as tokens and values as tokens or
    /// quoted strings.
    ///
    /// # Errors
    ///
    /// In strict mode, any [`Error`]. In lenient mode only the list
    /// variant, raised when quoting never closes.
    pub fn parse_with_sink<S>(&self, credentials: Option<&str>, sink: &mut S) -> Result<Credentials>
    where
        S: WarningSink + ?Sized,
    {
        let Some(credentials) = credentials else {
            return Ok(Credentials::none());
        };
        tracing::trace!(credentials, "parsing credentials field");

        let (scheme, remainder) = split_scheme(credentials);

        let mut token = String::new();
        let mut params = Params::new();

        for element in list::split(remainder)? {
            let pair = KeyValue::parse(&element);
            if pair.key().is_empty() || pair.value().is_empty() {
                // A bare value, or a dangling `=`: a token68 candidate.
                // The element is kept whole, so `a=` stays `a=`.
                if token.is_empty() {
                    token = element;
                } else {
                    self.handle_violation(Error::MultipleToken68, sink)?;
                }
            } else {
                if let Err(source) = validate_param(&pair) {
                    self.handle_violation(Error::BadParameter { element, source }, sink)?;
                }
                params.add(pair.key(), pair.value());
            }
        }

        if let Err(source) = Token68Validator.validate(&token) {
            self.handle_violation(
                Error::BadToken {
                    token: token.clone(),
                    source,
                },
                sink,
            )?;
        }

        Ok(Credentials {
            scheme: scheme.to_string(),
            token,
            params,
        })
    }

    fn handle_violation<S>(&self, error: Error, sink: &mut S) -> Result<()>
    where
        S: WarningSink + ?Sized,
    {
        if self.strict {
            return Err(error);
        }
        sink.on_warning(&error.to_string());
        Ok(())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits off the auth-scheme at the first whitespace character.
///
/// The rest of the whitespace run is stripped from the remainder. No
/// whitespace means the whole input is the scheme.
fn split_scheme(credentials: &str) -> (&str, &str) {
    match credentials.find(char::is_whitespace) {
        Some(at) => {
            let (scheme, rest) = credentials.split_at(at);
            (scheme, rest.trim_start())
        }
        None => (credentials, ""),
    }
}

/// Validates one auth-param: the key as a token, the value as a quoted
/// string when it opens with DQUOTE and as a token otherwise.
fn validate_param(pair: &KeyValue) -> std::result::Result<(), ValidationError> {
    TokenValidator.validate(pair.key())?;
    if pair.value().starts_with('"') {
        QuotedStringValidator.validate(pair.value())
    } else {
        TokenValidator.validate(pair.value())
    }
}
