//! Destinations for lenient-mode parse warnings.

/// Receives the warnings produced when a violation is forgiven in lenient
/// mode.
///
/// Each message is exactly the text the strict-mode [`Error`] would have
/// carried, so switching a parser between modes never changes the wording
/// a consumer sees. The parser takes the sink by exclusive reference;
/// implementations need no interior mutability.
///
/// [`Error`]: crate::Error
pub trait WarningSink {
    /// Called once per forgiven violation.
    fn on_warning(&mut self, message: &str) {
        let _ = message;
    }
}

/// A sink that discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl WarningSink for NoopSink {}

/// A sink that emits every warning through [`tracing`] at `WARN` level.
///
/// This is the sink behind [`Parser::parse`].
///
/// [`Parser::parse`]: crate::Parser::parse
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn on_warning(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}
