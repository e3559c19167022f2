//! The ordered set of escape spellings of one identifier.
//!
//! For each scheme in order (`numeric-4`, `numeric-8`, then with entity
//! forms `entity-decimal`, `entity-hex`):
//!
//! 1. every scalar escaped;
//! 2. only the first scalar escaped, when there is more than one scalar.
//!
//! With a single scalar the two modes would spell the same text, so the
//! first-only spelling is skipped. The order is stable across calls.

use lexid_core::scalars;

use crate::error::EscapeError;
use crate::scheme::{escape, EscapeMode, EscapeScheme};

/// One alternate spelling and how it was produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EscapeVariant {
    pub scheme: EscapeScheme,
    pub mode: EscapeMode,
    pub text: String,
}

/// The `(scheme, mode)` pairs [`escape_variants`] produces, in order.
pub fn variant_plan(
    include_entity_forms: bool,
    multi_scalar: bool,
) -> impl Iterator<Item = (EscapeScheme, EscapeMode)> + Clone {
    let numeric: &'static [EscapeScheme] = &EscapeScheme::NUMERIC;
    let entity: &'static [EscapeScheme] = if include_entity_forms {
        &EscapeScheme::ENTITY
    } else {
        &[]
    };
    let modes: &'static [EscapeMode] = if multi_scalar {
        &[EscapeMode::All, EscapeMode::FirstOnly]
    } else {
        &[EscapeMode::All]
    };

    numeric
        .iter()
        .chain(entity)
        .flat_map(move |&scheme| modes.iter().map(move |&mode| (scheme, mode)))
}

/// Every escape spelling of `text`, in [`variant_plan`] order.
///
/// Fails if `text` contains an unpaired surrogate: such input has no
/// spelling that decodes back to it through a `String`. Also fails when a
/// first-only spelling would copy an escape introducer literally (`\` for
/// the numeric schemes, `&` for the entity schemes).
pub fn escape_variants(
    text: &[u16],
    include_entity_forms: bool,
) -> Result<Vec<EscapeVariant>, EscapeError> {
    let multi_scalar = scalars(text).nth(1).is_some();

    let variants = variant_plan(include_entity_forms, multi_scalar)
        .map(|(scheme, mode)| {
            escape(text, scheme, mode).map(|text| EscapeVariant { scheme, mode, text })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        len = text.len(),
        include_entity_forms,
        count = variants.len(),
        "generated escape variants"
    );
    Ok(variants)
}
