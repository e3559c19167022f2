//! The `check` command: report whether each identifier is valid.

use std::io::Write;

use lexid_core::check_identifier;

use super::{render, CommandError, Status};

/// Print `valid` or `invalid` with the reason, one identifier per line.
pub fn check(identifiers: &[Vec<u16>], out: &mut impl Write) -> Result<Status, CommandError> {
    let mut status = Status::Success;
    for units in identifiers {
        let verdict = check_identifier(units);
        if verdict.is_valid() {
            writeln!(out, "{}: valid", render(units))?;
        } else {
            writeln!(out, "{}: invalid ({verdict})", render(units))?;
            status = Status::Failure;
        }
    }
    Ok(status)
}
