//! Escape schemes and single-spelling rendering.
//!
//! | Scheme | Spelling of U+1F600 |
//! |---|---|
//! | [`EscapeScheme::NumericFour`] | `\uD83D\uDE00` |
//! | [`EscapeScheme::NumericEight`] | `\U0001F600` |
//! | [`EscapeScheme::EntityDecimal`] | `&#128512;` |
//! | [`EscapeScheme::EntityHex`] | `&#x1F600;` |
//!
//! Hex digits are always uppercase.

use std::fmt::{self, Write as _};

use lexid_core::{scalar_indices, Scalar};

use crate::error::EscapeError;
use crate::unescape::DecodeContext;

/// A way of spelling one scalar value as an escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EscapeScheme {
    /// `\uXXXX`. Supplementary-plane scalars become two escapes, one per
    /// surrogate; this scheme cannot name them as a single token.
    NumericFour,
    /// `\UXXXXXXXX`, one escape per scalar.
    NumericEight,
    /// `&#DDD;` decimal character reference.
    EntityDecimal,
    /// `&#xHHH;` hexadecimal character reference.
    EntityHex,
}

impl EscapeScheme {
    /// Schemes available in source text.
    pub const NUMERIC: [EscapeScheme; 2] = [EscapeScheme::NumericFour, EscapeScheme::NumericEight];

    /// Schemes available in markup (documentation comments).
    pub const ENTITY: [EscapeScheme; 2] = [EscapeScheme::EntityDecimal, EscapeScheme::EntityHex];

    pub const fn name(self) -> &'static str {
        match self {
            EscapeScheme::NumericFour => "numeric-4",
            EscapeScheme::NumericEight => "numeric-8",
            EscapeScheme::EntityDecimal => "entity-decimal",
            EscapeScheme::EntityHex => "entity-hex",
        }
    }

    /// The decoding grammar that reads this scheme back.
    pub fn context(self) -> DecodeContext {
        match self {
            EscapeScheme::NumericFour | EscapeScheme::NumericEight => DecodeContext::Source,
            EscapeScheme::EntityDecimal | EscapeScheme::EntityHex => DecodeContext::Markup,
        }
    }

    /// Longest spelling of a single scalar, in bytes.
    fn max_len(self) -> usize {
        match self {
            EscapeScheme::NumericFour => 12,
            EscapeScheme::NumericEight | EscapeScheme::EntityDecimal | EscapeScheme::EntityHex => 10,
        }
    }

    /// Append the escaped spelling of `scalar` to `out`.
    ///
    /// A lone surrogate is spelled as its own value. Nothing rejects that
    /// here, but [`escape`] refuses malformed input before calling this.
    pub fn encode(self, scalar: Scalar, out: &mut String) {
        let value = scalar.value();
        // Formatting into a String cannot fail.
        let _ = match self {
            EscapeScheme::NumericFour => match scalar.surrogate_pair() {
                Some((high, low)) => write!(out, "\\u{high:04X}\\u{low:04X}"),
                None => write!(out, "\\u{value:04X}"),
            },
            EscapeScheme::NumericEight => write!(out, "\\U{value:08X}"),
            EscapeScheme::EntityDecimal => write!(out, "&#{value};"),
            EscapeScheme::EntityHex => write!(out, "&#x{value:X};"),
        };
    }
}

impl fmt::Display for EscapeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which scalars of an identifier get escaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EscapeMode {
    /// Every scalar.
    All,
    /// Only the first scalar; the rest stay literal.
    FirstOnly,
}

impl EscapeMode {
    pub const fn name(self) -> &'static str {
        match self {
            EscapeMode::All => "all",
            EscapeMode::FirstOnly => "first-only",
        }
    }

    #[inline]
    fn escapes(self, index: usize) -> bool {
        match self {
            EscapeMode::All => true,
            EscapeMode::FirstOnly => index == 0,
        }
    }
}

impl fmt::Display for EscapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spell `text` with `scheme`, escaping the scalars selected by `mode`.
///
/// Literal scalars are copied as characters, so a supplementary-plane
/// scalar left literal is still one character (two UTF-16 units). Input
/// containing an unpaired surrogate has no spelling and is rejected, as is
/// a literal copy of the scheme's escape introducer.
pub fn escape(
    text: &[u16],
    scheme: EscapeScheme,
    mode: EscapeMode,
) -> Result<String, EscapeError> {
    let introducer = scheme.context().introducer();
    let mut out = String::with_capacity(text.len() * scheme.max_len());
    for (index, (offset, scalar)) in scalar_indices(text).enumerate() {
        let c = scalar
            .char_or_surrogate()
            .map_err(|unit| EscapeError::UnpairedSurrogate { offset, unit })?;
        if mode.escapes(index) {
            scheme.encode(scalar, &mut out);
        } else if c == introducer {
            return Err(EscapeError::LiteralIntroducer { offset, introducer });
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// [`escape`] for Rust strings. These have no unpaired surrogates, but a
/// literal escape introducer is still rejected.
pub fn escape_str(
    text: &str,
    scheme: EscapeScheme,
    mode: EscapeMode,
) -> Result<String, EscapeError> {
    let units: Vec<u16> = text.encode_utf16().collect();
    escape(&units, scheme, mode)
}
