//! Escape spellings of identifiers, for testing a lexer's escape decoder.
//!
//! A lexer that accepts `\u0061` wherever it accepts `a` must produce the
//! same identifier either way. This crate generates every alternate
//! spelling of an identifier and decodes them back:
//!
//! - [`EscapeScheme`] renders one scalar as `\uXXXX`, `\UXXXXXXXX`,
//!   `&#DDD;` or `&#xHHH;`.
//! - [`escape`] applies a scheme to every scalar or only the first
//!   ([`EscapeMode`]).
//! - [`escape_variants`] produces the full, ordered set of spellings.
//! - [`unescape`] decodes them again ([`DecodeContext`]).
//! - [`EscapeCase`] bundles the variants with the verdict and comparison
//!   form a lexer test asserts against.

mod error;
mod oracle;
mod scheme;
mod unescape;
mod variants;

pub use error::{EscapeError, OracleError, UnescapeError};
pub use oracle::EscapeCase;
pub use scheme::{escape, escape_str, EscapeMode, EscapeScheme};
pub use unescape::{unescape, DecodeContext};
pub use variants::{escape_variants, variant_plan, EscapeVariant};
