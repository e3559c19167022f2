//! Scalar value enumeration over UTF-16 code units.
//!
//! [`Scalars`] walks a `&[u16]` left to right and yields one [`Scalar`] per
//! logical character:
//!
//! - a high surrogate immediately followed by a low surrogate is combined
//!   into one supplementary-plane scalar;
//! - any other unit, including an unpaired high or low surrogate, is yielded
//!   on its own.
//!
//! There is no error path. Malformed UTF-16 degrades to lone surrogate
//! scalars, which the validator then rejects like any other disallowed
//! character. Concatenating the UTF-16 encoding of every yielded scalar
//! reproduces the input exactly, malformed or not.

use std::fmt;
use std::iter::FusedIterator;

const HIGH_SURROGATE_START: u16 = 0xD800;
const HIGH_SURROGATE_END: u16 = 0xDBFF;
const LOW_SURROGATE_START: u16 = 0xDC00;
const LOW_SURROGATE_END: u16 = 0xDFFF;

/// First scalar value outside the Basic Multilingual Plane.
const SUPPLEMENTARY_START: u32 = 0x1_0000;

#[inline]
pub(crate) const fn is_high_surrogate(unit: u16) -> bool {
    unit >= HIGH_SURROGATE_START && unit <= HIGH_SURROGATE_END
}

#[inline]
pub(crate) const fn is_low_surrogate(unit: u16) -> bool {
    unit >= LOW_SURROGATE_START && unit <= LOW_SURROGATE_END
}

/// A Unicode scalar value, or a lone surrogate surfaced from malformed UTF-16.
///
/// Unlike `char`, a `Scalar` may hold a value in `0xD800..=0xDFFF`. That only
/// happens when the enumerator meets an unpaired surrogate; correctly paired
/// input never produces one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Scalar(u32);

impl Scalar {
    /// Largest Unicode code point.
    pub const MAX: u32 = 0x10_FFFF;

    /// Create a scalar from a code point, or `None` above [`Scalar::MAX`].
    ///
    /// Surrogate code points are accepted so that decoders can represent
    /// escapes that name a lone surrogate.
    #[inline]
    pub const fn new(value: u32) -> Option<Self> {
        if value <= Self::MAX {
            Some(Scalar(value))
        } else {
            None
        }
    }

    /// A single code unit taken on its own (BMP character or lone surrogate).
    #[inline]
    pub const fn from_unit(unit: u16) -> Self {
        Scalar(unit as u32)
    }

    /// Combine a high and a low surrogate. Callers check both ranges first.
    #[inline]
    pub(crate) const fn from_pair(high: u16, low: u16) -> Self {
        let high = (high - HIGH_SURROGATE_START) as u32;
        let low = (low - LOW_SURROGATE_START) as u32;
        Scalar(SUPPLEMENTARY_START + (high << 10) + low)
    }

    /// The code point value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns `true` for a value in the surrogate range `0xD800..=0xDFFF`.
    #[inline]
    pub const fn is_surrogate(self) -> bool {
        self.0 >= HIGH_SURROGATE_START as u32 && self.0 <= LOW_SURROGATE_END as u32
    }

    /// Returns `true` for a supplementary-plane value (needs a surrogate pair).
    #[inline]
    pub const fn is_astral(self) -> bool {
        self.0 >= SUPPLEMENTARY_START
    }

    /// Returns `true` for a value below `0x80`.
    #[inline]
    pub const fn is_ascii(self) -> bool {
        self.0 < 0x80
    }

    /// The scalar as a `char`, or `None` for a lone surrogate.
    #[inline]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// The scalar as a `char`, or the lone surrogate unit it holds.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "only surrogates fail char conversion, and they fit in u16"
    )]
    #[inline]
    pub fn char_or_surrogate(self) -> Result<char, u16> {
        char::from_u32(self.0).ok_or(self.0 as u16)
    }

    /// The surrogate code unit this scalar was decoded from, if it is one.
    #[inline]
    pub fn as_lone_surrogate(self) -> Option<u16> {
        if self.is_surrogate() {
            u16::try_from(self.0).ok()
        } else {
            None
        }
    }

    /// Number of UTF-16 code units needed to encode this scalar.
    #[inline]
    pub const fn len_utf16(self) -> usize {
        if self.is_astral() {
            2
        } else {
            1
        }
    }

    /// Split a supplementary-plane scalar into its `(high, low)` surrogates.
    ///
    /// Returns `None` for BMP values, which encode as a single unit.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset below 0x10_0000, so each half is at most 10 bits"
    )]
    #[inline]
    pub const fn surrogate_pair(self) -> Option<(u16, u16)> {
        if !self.is_astral() {
            return None;
        }
        let offset = self.0 - SUPPLEMENTARY_START;
        let high = HIGH_SURROGATE_START + (offset >> 10) as u16;
        let low = LOW_SURROGATE_START + (offset & 0x3FF) as u16;
        Some((high, low))
    }

    /// Append this scalar's UTF-16 encoding to `out`.
    ///
    /// A lone surrogate is written back as the single unit it came from.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "BMP values fit in u16 by definition"
    )]
    #[inline]
    pub fn encode_utf16(self, out: &mut Vec<u16>) {
        match self.surrogate_pair() {
            Some((high, low)) => {
                out.push(high);
                out.push(low);
            }
            None => out.push(self.0 as u16),
        }
    }
}

impl From<char> for Scalar {
    #[inline]
    fn from(c: char) -> Self {
        Scalar(c as u32)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// Iterator over the scalar values of a UTF-16 slice.
///
/// Cloning the iterator restarts enumeration from the clone point; calling
/// [`scalars`] again restarts from the beginning.
#[derive(Clone, Debug)]
pub struct Scalars<'a> {
    units: &'a [u16],
    pos: usize,
}

impl<'a> Scalars<'a> {
    pub fn new(units: &'a [u16]) -> Self {
        Scalars { units, pos: 0 }
    }

    /// UTF-16 offset of the next scalar to be yielded.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The code units not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a [u16] {
        &self.units[self.pos..]
    }
}

impl Iterator for Scalars<'_> {
    type Item = Scalar;

    #[inline]
    fn next(&mut self) -> Option<Scalar> {
        let &unit = self.units.get(self.pos)?;

        // A pending high surrogate only pairs with an immediately following
        // low surrogate. Anything else leaves it unpaired, and the next unit
        // is evaluated fresh on the following call.
        if is_high_surrogate(unit) {
            if let Some(&next) = self.units.get(self.pos + 1) {
                if is_low_surrogate(next) {
                    self.pos += 2;
                    return Some(Scalar::from_pair(unit, next));
                }
            }
        }

        self.pos += 1;
        Some(Scalar::from_unit(unit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len() - self.pos;
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl FusedIterator for Scalars<'_> {}

/// Iterator over `(utf16_offset, scalar)` pairs.
#[derive(Clone, Debug)]
pub struct ScalarIndices<'a> {
    inner: Scalars<'a>,
}

impl Iterator for ScalarIndices<'_> {
    type Item = (usize, Scalar);

    #[inline]
    fn next(&mut self) -> Option<(usize, Scalar)> {
        let offset = self.inner.offset();
        self.inner.next().map(|scalar| (offset, scalar))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for ScalarIndices<'_> {}

/// Enumerate the scalar values of `units`.
#[inline]
pub fn scalars(units: &[u16]) -> Scalars<'_> {
    Scalars::new(units)
}

/// Enumerate the scalar values of `units` with their UTF-16 offsets.
#[inline]
pub fn scalar_indices(units: &[u16]) -> ScalarIndices<'_> {
    ScalarIndices {
        inner: Scalars::new(units),
    }
}

/// Returns `true` if `units` is malformed UTF-16.
pub fn has_unpaired_surrogate(units: &[u16]) -> bool {
    scalars(units).any(Scalar::is_surrogate)
}
