//! Error types for escape generation, decoding and verification.
//!
//! Offsets in [`EscapeError`] are UTF-16 code units into the identifier;
//! offsets in [`UnescapeError`] are byte offsets into the escaped text,
//! pointing at the escape's introducer (`\` or `&`).

use crate::{EscapeMode, EscapeScheme};

/// Input that has no escaped spelling.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    /// The identifier is malformed UTF-16.
    #[error("unpaired surrogate U+{unit:04X} at offset {offset} has no escaped spelling")]
    UnpairedSurrogate { offset: usize, unit: u16 },
    /// A literal `\` or `&` after the first scalar of a first-only spelling,
    /// which would decode as the start of an escape.
    #[error("literal {introducer:?} at offset {offset} would start an escape")]
    LiteralIntroducer { offset: usize, introducer: char },
}

/// Malformed escape in text being decoded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnescapeError {
    /// Input ended before the escape's fixed number of digits.
    #[error("escape at byte {offset} ends before its digits")]
    Truncated { offset: usize },
    /// A character that is not a digit of the escape's radix.
    #[error("invalid digit {found:?} in escape at byte {offset}")]
    InvalidDigit { offset: usize, found: char },
    /// The escape names a value above U+10FFFF.
    #[error("escape at byte {offset} is above U+10FFFF")]
    OutOfRange { offset: usize },
    /// A character reference ran to the end of input without `;`.
    #[error("character reference at byte {offset} is missing its `;`")]
    Unterminated { offset: usize },
    /// `&#;` or `&#x;`.
    #[error("character reference at byte {offset} has no digits")]
    EmptyEntity { offset: usize },
}

/// A generated spelling that does not decode back to its identifier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error(transparent)]
    Escape(#[from] EscapeError),
    #[error("{scheme} {mode} spelling {text:?} does not decode")]
    Undecodable {
        scheme: EscapeScheme,
        mode: EscapeMode,
        text: String,
        #[source]
        source: UnescapeError,
    },
    #[error("{scheme} {mode} spelling {text:?} decodes to a different identifier")]
    Mismatch {
        scheme: EscapeScheme,
        mode: EscapeMode,
        text: String,
    },
}
