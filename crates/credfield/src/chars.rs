//! Character classes from RFC 7230 §3.2.6 and RFC 7235 §2.1.
//!
//! These predicates are the shared vocabulary of the validators and the
//! list splitter, exposed for callers that want to scan header material
//! themselves.

/// Returns `true` for RFC 7230 `tchar`.
///
/// ```text
/// tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
///         "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
/// ```
#[must_use]
pub const fn is_tchar(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|'
                | '~'
        )
}

/// Returns `true` for RFC 7230 `qdtext`.
///
/// ```text
/// qdtext = HTAB / SP / %x21 / %x23-5B / %x5D-7E / obs-text
/// ```
#[must_use]
pub const fn is_qdtext(ch: char) -> bool {
    is_htab(ch)
        || is_sp(ch)
        || (is_vchar(ch) && !is_dquote(ch) && ch != '\\')
        || is_obs_text(ch)
}

/// Returns `true` for RFC 5234 `VCHAR` (visible ASCII, `%x21-7E`).
#[must_use]
pub const fn is_vchar(ch: char) -> bool {
    matches!(ch, '\x21'..='\x7e')
}

/// Returns `true` for RFC 7230 `obs-text` (`%x80-FF`).
#[must_use]
pub const fn is_obs_text(ch: char) -> bool {
    matches!(ch, '\u{80}'..='\u{ff}')
}

/// Returns `true` for SP (`%x20`).
#[must_use]
pub const fn is_sp(ch: char) -> bool {
    ch == ' '
}

/// Returns `true` for HTAB (`%x09`).
#[must_use]
pub const fn is_htab(ch: char) -> bool {
    ch == '\t'
}

/// Returns `true` for DQUOTE (`%x22`).
#[must_use]
pub const fn is_dquote(ch: char) -> bool {
    ch == '"'
}

/// Returns `true` for a character of the token68 body.
///
/// This is the `tchar` set plus `/`, a superset of the RFC 7235
/// `token68` alphabet (`ALPHA / DIGIT / "-" / "." / "_" / "~" / "+" /
/// "/"`). The trailing `=` padding is positional and handled by the
/// token68 validator, not by this predicate.
#[must_use]
pub const fn is_token68_char(ch: char) -> bool {
    is_tchar(ch) || ch == '/'
}
