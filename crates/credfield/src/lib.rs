//! # credfield
//!
//! Parser for the HTTP `Authorization` / `WWW-Authenticate` credentials
//! field (RFC 7235 §2.1).
//!
//! ## Features
//!
//! - **Structured credentials**: auth-scheme, optional token68 and an
//!   ordered, case-insensitive multimap of auth-params
//! - **Strict or lenient**: violations either abort parsing or are
//!   reported to a warning sink while the raw data is kept
//! - **Quote-aware lists**: commas inside quoted strings and quoted
//!   pairs never split an element (RFC 7230 §7)
//! - **Grammar building blocks**: RFC 7230/7235 character classes and
//!   validators, usable on their own
//!
//! ## Quick Start
//!
//! ### Parsing credentials
//!
//! ```
//! use credfield::Credentials;
//!
//! let creds = Credentials::parse(Some("Custom abc, realm=\"home, sweet\", k=v"))?;
//! assert_eq!(creds.scheme(), "Custom");
//! assert_eq!(creds.token(), "abc");
//! assert_eq!(creds.params().get("REALM"), Some("\"home, sweet\""));
//! # Ok::<(), credfield::Error>(())
//! ```
//!
//! ### Lenient parsing
//!
//! ```
//! use credfield::{Parser, WarningSink};
//!
//! #[derive(Default)]
//! struct Collect(Vec<String>);
//!
//! impl WarningSink for Collect {
//!     fn on_warning(&mut self, message: &str) {
//!         self.0.push(message.to_string());
//!     }
//! }
//!
//! let parser = Parser::new().strict(false);
//! let mut warnings = Collect::default();
//! let creds = parser.parse_with_sink(Some("Custom abc, a?=b"), &mut warnings)?;
//!
//! assert_eq!(creds.params().get("a?"), Some("b"));
//! assert_eq!(warnings.0, ["Bad parameter: a?=b"]);
//! # Ok::<(), credfield::Error>(())
//! ```
//!
//! ### Rendering
//!
//! ```
//! use credfield::Credentials;
//!
//! let creds = Credentials::from_single_value_params("Digest", "", [("realm", "\"home\"")]);
//! assert_eq!(creds.to_string(), "Digest realm=\"home\"");
//! ```
//!
//! ## Modules
//!
//! - [`chars`]: RFC 7230/7235 character classes
//! - [`list`]: quote-aware comma-list splitting

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod credentials;
mod error;
mod kv;
mod params;
mod sink;
mod validator;

pub mod chars;
pub mod list;

pub use credentials::{Credentials, Parser};
pub use error::{Error, ListError, Result, ValidationError};
pub use kv::KeyValue;
pub use params::Params;
pub use sink::{NoopSink, TracingSink, WarningSink};
pub use validator::{QuotedStringValidator, Token68Validator, TokenValidator, Validator};
