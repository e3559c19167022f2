//! Formatting-character removal.
//!
//! Formatting characters (`Cf`, e.g. ZWJ or the right-to-left mark) are legal
//! inside identifiers but do not distinguish one identifier from another.
//! The comparison form of an identifier is the identifier with all of them
//! removed.
//!
//! When nothing needs removing the input is returned as [`Cow::Borrowed`],
//! so `matches!(result, Cow::Borrowed(_))` doubles as a cheap "unchanged"
//! test.

use std::borrow::Cow;

use crate::char_class::is_formatting;
use crate::scalars::{has_unpaired_surrogate, scalar_indices, scalars};
use crate::Scalar;

/// UTF-16 offset of the first formatting scalar in `text`.
fn first_formatting(text: &[u16]) -> Option<usize> {
    scalar_indices(text)
        .find(|&(_, scalar)| is_formatting(scalar))
        .map(|(offset, _)| offset)
}

/// Copy `text`, dropping formatting scalars from offset `first` onwards.
fn strip_from(text: &[u16], first: usize) -> Vec<u16> {
    let mut out = Vec::with_capacity(text.len());
    out.extend_from_slice(&text[..first]);
    for scalar in scalars(&text[first..]) {
        if !is_formatting(scalar) {
            scalar.encode_utf16(&mut out);
        }
    }
    out
}

/// Remove every formatting scalar from `text`, preserving everything else.
///
/// Surviving supplementary-plane scalars are re-encoded as surrogate pairs;
/// lone surrogates survive unchanged. The result never contains a
/// formatting scalar, so stripping twice is the same as stripping once.
pub fn remove_format_scalars(text: &[u16]) -> Cow<'_, [u16]> {
    let Some(first) = first_formatting(text) else {
        return Cow::Borrowed(text);
    };

    let mut out = strip_from(text, first);
    // Dropping a unit between a lone high and a lone low surrogate pairs
    // them up, and the new scalar can itself be formatting (U+E0001..).
    while let Some(first) = first_formatting(&out) {
        out = strip_from(&out, first);
    }
    Cow::Owned(out)
}

/// [`remove_format_scalars`] for Rust strings.
pub fn remove_format_chars(text: &str) -> Cow<'_, str> {
    let Some(first) = text
        .char_indices()
        .find(|&(_, c)| is_formatting(c.into()))
        .map(|(offset, _)| offset)
    else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    out.extend(text[first..].chars().filter(|&c| !is_formatting(c.into())));
    Cow::Owned(out)
}

/// Compare two identifiers with formatting characters ignored.
///
/// Equivalent to comparing their [`remove_format_scalars`] forms. Well-formed
/// input is compared scalar by scalar without allocating. If either side has
/// an unpaired surrogate, removal can pair it with another one, so both sides
/// are stripped in full first.
pub fn eq_ignoring_format(a: &[u16], b: &[u16]) -> bool {
    if has_unpaired_surrogate(a) || has_unpaired_surrogate(b) {
        return remove_format_scalars(a) == remove_format_scalars(b);
    }
    let significant = |scalar: &Scalar| !is_formatting(*scalar);
    scalars(a)
        .filter(significant)
        .eq(scalars(b).filter(significant))
}

#[cfg(test)]
mod tests;
