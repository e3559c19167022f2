//! The `strip` command: print identifiers without formatting characters.

use std::io::Write;

use lexid_core::remove_format_scalars;

use super::{render, CommandError};

pub fn strip(identifiers: &[Vec<u16>], out: &mut impl Write) -> Result<(), CommandError> {
    for units in identifiers {
        writeln!(out, "{}", render(&remove_format_scalars(units)))?;
    }
    Ok(())
}
