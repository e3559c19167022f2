//! The `classify` command: list every scalar with its general category.

use std::io::Write;

use lexid_core::{general_category, scalar_indices, CharClass};

use super::{render, CommandError};

/// Lowercase class names joined with `|`, or `-` for none.
fn class_names(class: CharClass) -> String {
    let names: Vec<String> = class
        .iter_names()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join("|")
    }
}

/// One header line per identifier, then one indented line per scalar:
/// UTF-16 offset, code point, general category, identifier classes.
pub fn classify(identifiers: &[Vec<u16>], out: &mut impl Write) -> Result<(), CommandError> {
    for units in identifiers {
        writeln!(out, "{}:", render(units))?;
        for (offset, scalar) in scalar_indices(units) {
            let code_point = scalar.to_string();
            let category = format!("{:?}", general_category(scalar));
            let classes = class_names(CharClass::of(scalar));
            writeln!(out, "  {offset:>3}  {code_point:<9} {category:<22} {classes}")?;
        }
    }
    Ok(())
}
