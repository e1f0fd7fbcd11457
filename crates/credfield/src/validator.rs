//! Validators for the lexical classes of the credentials field.
//!
//! Three grammars appear inside a credentials field: RFC 7230 tokens and
//! quoted strings for auth-params, and RFC 7235 token68 for the bare
//! value. Each validator scans a complete string and reports the first
//! offending character with its position.

use crate::chars;
use crate::error::ValidationError;

/// Scans a string against one lexical grammar.
pub trait Validator {
    /// Checks every character of `input`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first violation.
    /// Positions are 0-based and counted in `char`s.
    fn validate(&self, input: &str) -> Result<(), ValidationError>;
}

/// Validator for RFC 7230 `token`, as used by auth-param keys and
/// unquoted values.
///
/// Beyond `tchar` this accepts SP, DQUOTE and backslash, so values that
/// quote or escape internally still pass; [`chars::is_tchar`] gives the
/// strict set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenValidator;

impl Validator for TokenValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        for (position, ch) in input.chars().enumerate() {
            let accepted =
                chars::is_tchar(ch) || chars::is_sp(ch) || chars::is_dquote(ch) || ch == '\\';
            if !accepted {
                return Err(ValidationError::UnexpectedCharacter { ch, position });
            }
        }
        Ok(())
    }
}

/// Validator for RFC 7235 `token68`.
///
/// The body alphabet is [`chars::is_token68_char`] and a single `=` is
/// accepted in final position only; `==` padding is rejected. The empty
/// string is accepted; it stands for an absent token68.
#[derive(Debug, Clone, Copy, Default)]
pub struct Token68Validator;

impl Validator for Token68Validator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let last = input.chars().count().checked_sub(1);
        for (position, ch) in input.chars().enumerate() {
            if chars::is_token68_char(ch) {
                continue;
            }
            if ch == '=' && Some(position) == last {
                return Ok(());
            }
            return Err(ValidationError::UnexpectedCharacter { ch, position });
        }
        Ok(())
    }
}

/// Validator for RFC 7230 `quoted-string`.
///
/// ```text
/// quoted-string = DQUOTE *( qdtext / quoted-pair ) DQUOTE
/// quoted-pair   = "\" ( HTAB / SP / VCHAR / obs-text )
/// ```
///
/// The whole input must be a single quoted string; anything after the
/// closing DQUOTE is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedStringValidator;

/// Scanner states for [`QuotedStringValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before the opening DQUOTE.
    Begin,
    /// Inside the string body.
    InString,
    /// Right after a backslash.
    QuotedPair,
    /// After the closing DQUOTE.
    End,
}

/// One accepted transition: the next state and whether the reported
/// position advances past the consumed character.
///
/// The escaped character of a quoted pair does not advance the position,
/// so the character after `\x` is reported at the index of `x`.
const fn step(state: State, ch: char) -> Option<(State, bool)> {
    match state {
        State::Begin => {
            if chars::is_dquote(ch) {
                Some((State::InString, true))
            } else {
                None
            }
        }
        State::InString => {
            if ch == '\\' {
                Some((State::QuotedPair, true))
            } else if chars::is_dquote(ch) {
                Some((State::End, true))
            } else if chars::is_qdtext(ch) {
                Some((State::InString, true))
            } else {
                None
            }
        }
        State::QuotedPair => {
            if chars::is_htab(ch) || chars::is_sp(ch) || chars::is_vchar(ch) || chars::is_obs_text(ch)
            {
                Some((State::InString, false))
            } else {
                None
            }
        }
        State::End => None,
    }
}

impl Validator for QuotedStringValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let mut state = State::Begin;
        let mut position = 0;
        for ch in input.chars() {
            let Some((next, advance)) = step(state, ch) else {
                return Err(ValidationError::UnexpectedCharacter { ch, position });
            };
            state = next;
            if advance {
                position += 1;
            }
        }
        match state {
            State::InString => Err(ValidationError::UnclosedQuotedString),
            State::QuotedPair => Err(ValidationError::UnclosedQuotedPair),
            State::Begin | State::End => Ok(()),
        }
    }
}
