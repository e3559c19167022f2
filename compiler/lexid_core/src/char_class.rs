//! Unicode general category to identifier class mapping.
//!
//! The identifier grammar is stated in terms of five character classes:
//!
//! | Class | General categories |
//! |---|---|
//! | letter | `Lu` `Ll` `Lt` `Lm` `Lo` `Nl` |
//! | decimal digit | `Nd` |
//! | connecting | `Pc` |
//! | combining | `Mn` `Mc` |
//! | formatting | `Cf` |
//!
//! An identifier starts with a letter or `_` and continues with any of the
//! five. ASCII values never reach the category table: the fast paths below
//! give the same answers the table would.

use bitflags::bitflags;
use icu_properties::props::GeneralCategory;
use icu_properties::CodePointMapData;

use crate::Scalar;

bitflags! {
    /// Identifier-relevant facets of a character.
    ///
    /// Every general category maps to at most one facet today, but the
    /// facets are queried independently, so they are modelled as a set.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharClass: u8 {
        /// `Lu`, `Ll`, `Lt`, `Lm`, `Lo`, `Nl`.
        const LETTER = 1 << 0;
        /// `Nd`.
        const DECIMAL_DIGIT = 1 << 1;
        /// `Pc`, which includes `_`.
        const CONNECTING = 1 << 2;
        /// `Mn`, `Mc`.
        const COMBINING = 1 << 3;
        /// `Cf`.
        const FORMATTING = 1 << 4;

        /// Classes allowed after the first character.
        const IDENTIFIER_PART = Self::LETTER.bits()
            | Self::DECIMAL_DIGIT.bits()
            | Self::CONNECTING.bits()
            | Self::COMBINING.bits()
            | Self::FORMATTING.bits();
    }
}

impl CharClass {
    /// Facets of a general category.
    pub fn of_category(category: GeneralCategory) -> Self {
        match category {
            GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::LetterNumber => CharClass::LETTER,
            GeneralCategory::DecimalNumber => CharClass::DECIMAL_DIGIT,
            GeneralCategory::ConnectorPunctuation => CharClass::CONNECTING,
            GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark => {
                CharClass::COMBINING
            }
            GeneralCategory::Format => CharClass::FORMATTING,
            _ => CharClass::empty(),
        }
    }

    /// Facets of a scalar value. ASCII is answered without a table lookup.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by is_ascii, value < 0x80"
    )]
    pub fn of(scalar: Scalar) -> Self {
        if scalar.is_ascii() {
            return match scalar.value() as u8 {
                b'A'..=b'Z' | b'a'..=b'z' => CharClass::LETTER,
                b'0'..=b'9' => CharClass::DECIMAL_DIGIT,
                b'_' => CharClass::CONNECTING,
                _ => CharClass::empty(),
            };
        }
        Self::of_category(general_category(scalar))
    }
}

/// Unicode general category of a scalar.
///
/// Lone surrogates report [`GeneralCategory::Surrogate`], which belongs to
/// no identifier class.
#[inline]
pub fn general_category(scalar: Scalar) -> GeneralCategory {
    CodePointMapData::<GeneralCategory>::new().get32(scalar.value())
}

/// Returns `true` if `scalar` may begin an identifier: a letter or `_`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "guarded by is_ascii, value < 0x80"
)]
pub fn is_identifier_start(scalar: Scalar) -> bool {
    if scalar.is_ascii() {
        return matches!(scalar.value() as u8, b'A'..=b'Z' | b'a'..=b'z' | b'_');
    }
    CharClass::of_category(general_category(scalar)).contains(CharClass::LETTER)
}

/// Returns `true` if `scalar` may appear after the first character.
#[allow(
    clippy::cast_possible_truncation,
    reason = "guarded by is_ascii, value < 0x80"
)]
pub fn is_identifier_part(scalar: Scalar) -> bool {
    if scalar.is_ascii() {
        return matches!(
            scalar.value() as u8,
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_'
        );
    }
    CharClass::of_category(general_category(scalar)).intersects(CharClass::IDENTIFIER_PART)
}

/// Returns `true` if `scalar` is a formatting character (`Cf`).
///
/// There are no formatting characters in ASCII.
pub fn is_formatting(scalar: Scalar) -> bool {
    !scalar.is_ascii() && general_category(scalar) == GeneralCategory::Format
}
