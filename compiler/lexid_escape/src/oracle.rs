//! Expected outcomes for one identifier lexer test.
//!
//! A lexer test feeds every escape spelling of an identifier to the lexer
//! and checks that each one produces the same token as the literal
//! spelling: the same validity, and the same identifier value, which is
//! the identifier with formatting characters removed.

use lexid_core::{is_valid_identifier, remove_format_scalars};

use crate::error::{EscapeError, OracleError};
use crate::unescape::{unescape, DecodeContext};
use crate::variants::{escape_variants, EscapeVariant};

/// One identifier with everything a lexer test asserts about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscapeCase {
    /// The literal identifier.
    pub text: Vec<u16>,
    /// Whether the literal identifier is valid.
    pub expected_valid: bool,
    /// The identifier value with formatting characters removed.
    pub canonical: Vec<u16>,
    /// Every escape spelling, in generation order.
    pub variants: Vec<EscapeVariant>,
}

impl EscapeCase {
    pub fn build(text: &[u16], include_entity_forms: bool) -> Result<Self, EscapeError> {
        let variants = escape_variants(text, include_entity_forms)?;
        Ok(EscapeCase {
            text: text.to_vec(),
            expected_valid: is_valid_identifier(text),
            canonical: remove_format_scalars(text).into_owned(),
            variants,
        })
    }

    /// [`EscapeCase::build`] for Rust strings.
    pub fn for_str(text: &str, include_entity_forms: bool) -> Result<Self, EscapeError> {
        let units: Vec<u16> = text.encode_utf16().collect();
        Self::build(&units, include_entity_forms)
    }

    /// Returns `true` if any spelling uses a markup character reference.
    pub fn has_entity_forms(&self) -> bool {
        self.variants
            .iter()
            .any(|variant| variant.scheme.context() == DecodeContext::Markup)
    }

    /// Decode every spelling and check it reproduces [`EscapeCase::text`].
    pub fn verify(&self) -> Result<(), OracleError> {
        for variant in &self.variants {
            let decoded = unescape(&variant.text, variant.scheme.context()).map_err(|source| {
                OracleError::Undecodable {
                    scheme: variant.scheme,
                    mode: variant.mode,
                    text: variant.text.clone(),
                    source,
                }
            })?;
            if decoded != self.text {
                tracing::debug!(
                    scheme = %variant.scheme,
                    mode = %variant.mode,
                    text = %variant.text,
                    "spelling does not round-trip"
                );
                return Err(OracleError::Mismatch {
                    scheme: variant.scheme,
                    mode: variant.mode,
                    text: variant.text.clone(),
                });
            }
        }
        Ok(())
    }
}
