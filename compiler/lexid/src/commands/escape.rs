//! The `escape` command: print every escape spelling of each identifier.

use std::io::Write;

use lexid_escape::escape_variants;

use super::{render, CommandError};

/// Print `scheme mode spelling` lines in generation order. Identifiers are
/// separated by a blank line.
pub fn escape(
    identifiers: &[Vec<u16>],
    include_entity_forms: bool,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    for (index, units) in identifiers.iter().enumerate() {
        let variants = escape_variants(units, include_entity_forms).inspect_err(|error| {
            tracing::debug!(identifier = %render(units), %error, "cannot escape");
        })?;
        if index > 0 {
            writeln!(out)?;
        }
        for variant in &variants {
            writeln!(
                out,
                "{:<14} {:<10} {}",
                variant.scheme.name(),
                variant.mode.name(),
                variant.text
            )?;
        }
    }
    Ok(())
}
