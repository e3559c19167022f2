//! Escape decoding, the inverse of [`EscapeScheme::encode`](crate::EscapeScheme::encode).
//!
//! # Grammar
//!
//! Source context:
//! - `\u` followed by exactly 4 hex digits: one UTF-16 code unit. Two of
//!   these in a row spell a surrogate pair.
//! - `\U` followed by exactly 8 hex digits: one scalar, at most U+10FFFF.
//!
//! Markup context:
//! - `&#` decimal digits `;`
//! - `&#x` (or `&#X`) hex digits `;`
//!
//! Hex digits are case-insensitive. Everything else, including a `\` or `&`
//! that does not start an escape, is copied through unchanged.
//!
//! Output is UTF-16 so that an escape naming a lone surrogate decodes to
//! exactly that unit.

use lexid_core::Scalar;

use crate::error::UnescapeError;

/// Which escape grammar to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeContext {
    /// `\uXXXX` and `\UXXXXXXXX` (identifiers in source text).
    Source,
    /// `&#DDD;` and `&#xHHH;` (documentation comments).
    Markup,
}

impl DecodeContext {
    /// The character that starts every escape in this context.
    pub(crate) fn introducer(self) -> char {
        match self {
            DecodeContext::Source => '\\',
            DecodeContext::Markup => '&',
        }
    }
}

/// Decode every escape of `context` in `text` into UTF-16.
pub fn unescape(text: &str, context: DecodeContext) -> Result<Vec<u16>, UnescapeError> {
    let mut out = Vec::with_capacity(text.len());
    let mut pos = 0;

    while let Some(rel) = text[pos..].find(context.introducer()) {
        let start = pos + rel;
        out.extend(text[pos..start].encode_utf16());
        let consumed = match context {
            DecodeContext::Source => decode_numeric(text, start, &mut out),
            DecodeContext::Markup => decode_entity(text, start, &mut out),
        }
        .inspect_err(|error| tracing::debug!(%error, "unescape failed"))?;
        pos = start + consumed;
    }

    out.extend(text[pos..].encode_utf16());
    Ok(out)
}

/// Decode a `\u` / `\U` escape at `start`, returning the bytes consumed.
fn decode_numeric(text: &str, start: usize, out: &mut Vec<u16>) -> Result<usize, UnescapeError> {
    match text.as_bytes().get(start + 1) {
        Some(b'u') => {
            let value = fixed_hex(text, start, 4)?;
            #[allow(clippy::cast_possible_truncation, reason = "4 hex digits fit in u16")]
            out.push(value as u16);
            Ok(6)
        }
        Some(b'U') => {
            let value = fixed_hex(text, start, 8)?;
            let scalar = Scalar::new(value).ok_or(UnescapeError::OutOfRange { offset: start })?;
            scalar.encode_utf16(out);
            Ok(10)
        }
        _ => {
            out.push(u16::from(b'\\'));
            Ok(1)
        }
    }
}

/// Read exactly `width` hex digits after the two-byte introducer at `start`.
fn fixed_hex(text: &str, start: usize, width: usize) -> Result<u32, UnescapeError> {
    let bytes = text.as_bytes();
    let mut value = 0u32;
    for at in start + 2..start + 2 + width {
        let Some(&byte) = bytes.get(at) else {
            return Err(UnescapeError::Truncated { offset: start });
        };
        let digit = hex_digit(byte).ok_or_else(|| invalid_digit(text, start, at))?;
        value = (value << 4) | digit;
    }
    Ok(value)
}

/// Decode a `&#...;` reference at `start`, returning the bytes consumed.
fn decode_entity(text: &str, start: usize, out: &mut Vec<u16>) -> Result<usize, UnescapeError> {
    let bytes = text.as_bytes();
    if bytes.get(start + 1) != Some(&b'#') {
        out.push(u16::from(b'&'));
        return Ok(1);
    }

    let (radix, digits_start) = match bytes.get(start + 2) {
        Some(b'x' | b'X') => (16, start + 3),
        _ => (10, start + 2),
    };

    let mut value = 0u32;
    let mut at = digits_start;
    loop {
        match bytes.get(at) {
            None => return Err(UnescapeError::Unterminated { offset: start }),
            Some(b';') if at == digits_start => {
                return Err(UnescapeError::EmptyEntity { offset: start });
            }
            Some(b';') => break,
            Some(&byte) => {
                let digit = match radix {
                    16 => hex_digit(byte),
                    _ => decimal_digit(byte),
                }
                .ok_or_else(|| invalid_digit(text, start, at))?;
                value = value * radix + digit;
                if value > Scalar::MAX {
                    return Err(UnescapeError::OutOfRange { offset: start });
                }
            }
        }
        at += 1;
    }

    let scalar = Scalar::new(value).ok_or(UnescapeError::OutOfRange { offset: start })?;
    scalar.encode_utf16(out);
    Ok(at + 1 - start)
}

#[inline]
fn hex_digit(byte: u8) -> Option<u32> {
    char::from(byte).to_digit(16)
}

#[inline]
fn decimal_digit(byte: u8) -> Option<u32> {
    char::from(byte).to_digit(10)
}

/// Error for the non-digit at byte `at`.
///
/// Every byte between the introducer and `at` was ASCII, so `at` is a char
/// boundary.
fn invalid_digit(text: &str, start: usize, at: usize) -> UnescapeError {
    let found = text[at..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
    UnescapeError::InvalidDigit { offset: start, found }
}

#[cfg(test)]
mod tests;
