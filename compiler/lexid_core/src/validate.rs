//! Identifier validity state machine.
//!
//! ```text
//! Start --start char--> ScanningParts --part char--> ScanningParts
//!   |                         |                            |
//!   +--- anything else ---> Rejected <--- anything else ---+
//!                                              end of input --> Accepted
//! ```
//!
//! Rejection is terminal and reachable from every check. Malformed input is
//! not an error: an empty string, an unpaired surrogate or a disallowed
//! character all end in a [`Verdict`] other than [`Verdict::Valid`].

use std::fmt;

use crate::char_class::{is_identifier_part, is_identifier_start};
use crate::scalars::scalar_indices;
use crate::Scalar;

/// Terminal state of the validity check, with the reason for a rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Every scalar passed its check.
    Valid,
    /// No code units at all.
    Empty,
    /// A surrogate code unit without its partner, at `offset` (UTF-16 units).
    UnpairedSurrogate { offset: usize, unit: u16 },
    /// The first scalar is neither a letter nor `_`.
    InvalidStart { scalar: Scalar },
    /// A later scalar, at `offset` (UTF-16 units), is not an identifier part.
    InvalidPart { offset: usize, scalar: Scalar },
}

impl Verdict {
    #[inline]
    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => f.write_str("valid identifier"),
            Verdict::Empty => f.write_str("identifier is empty"),
            Verdict::UnpairedSurrogate { offset, unit } => {
                write!(f, "unpaired surrogate U+{unit:04X} at offset {offset}")
            }
            Verdict::InvalidStart { scalar } => {
                write!(f, "{scalar} cannot start an identifier")
            }
            Verdict::InvalidPart { offset, scalar } => {
                write!(f, "{scalar} at offset {offset} cannot appear in an identifier")
            }
        }
    }
}

#[derive(Clone, Copy)]
enum State {
    Start,
    ScanningParts,
}

/// Run the state machine over `(utf16_offset, scalar)` pairs.
fn run(scalars: impl Iterator<Item = (usize, Scalar)>) -> Verdict {
    let mut state = State::Start;

    for (offset, scalar) in scalars {
        if let Some(unit) = scalar.as_lone_surrogate() {
            return Verdict::UnpairedSurrogate { offset, unit };
        }
        match state {
            State::Start => {
                if !is_identifier_start(scalar) {
                    return Verdict::InvalidStart { scalar };
                }
                state = State::ScanningParts;
            }
            State::ScanningParts => {
                if !is_identifier_part(scalar) {
                    return Verdict::InvalidPart { offset, scalar };
                }
            }
        }
    }

    match state {
        State::Start => Verdict::Empty,
        State::ScanningParts => Verdict::Valid,
    }
}

/// Check whether `text` is a valid identifier, reporting why not.
///
/// The first scalar must be a letter or `_`. Every later scalar must be a
/// letter, decimal digit, connecting, combining or formatting character.
/// Surrogate pairs are decoded first; an unpaired surrogate anywhere is a
/// rejection.
pub fn check_identifier(text: &[u16]) -> Verdict {
    let verdict = run(scalar_indices(text));
    if !verdict.is_valid() {
        tracing::trace!(%verdict, len = text.len(), "identifier rejected");
    }
    verdict
}

/// [`check_identifier`] for Rust strings. Offsets are still UTF-16 units.
pub fn check_identifier_str(text: &str) -> Verdict {
    let indexed = text.chars().scan(0usize, |offset, c| {
        let at = *offset;
        *offset += c.len_utf16();
        Some((at, Scalar::from(c)))
    });
    run(indexed)
}

/// Returns `true` if `text` is a valid identifier.
#[inline]
pub fn is_valid_identifier(text: &[u16]) -> bool {
    check_identifier(text).is_valid()
}

/// Returns `true` if `text` is a valid identifier.
#[inline]
pub fn is_valid_identifier_str(text: &str) -> bool {
    check_identifier_str(text).is_valid()
}
