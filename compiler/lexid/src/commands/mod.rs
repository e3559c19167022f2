//! Command handlers for the `lexid` CLI.
//!
//! Each submodule implements one command over already-decoded UTF-16
//! identifiers. Argument decoding and output rendering are shared and live
//! here in the module root.

use std::io::Write;

use lexid_core::scalars;
use lexid_escape::{unescape, DecodeContext, EscapeError, EscapeScheme, UnescapeError};
use thiserror::Error;

use crate::config::{CliConfig, Command, Invocation};

mod check;
mod classify;
mod escape;
mod strip;

pub use check::check;
pub use classify::classify;
pub use escape::escape;
pub use strip::strip;

/// How a command finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    /// At least one identifier was rejected.
    Failure,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot decode `{argument}`: {source}")]
    Unescape {
        argument: String,
        #[source]
        source: UnescapeError,
    },

    #[error(transparent)]
    Escape(#[from] EscapeError),

    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Decode every argument, then run the selected command.
pub fn run(invocation: &Invocation, out: &mut impl Write) -> Result<Status, CommandError> {
    let identifiers = invocation
        .identifiers
        .iter()
        .map(|argument| identifier_units(argument, &invocation.config))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        command = invocation.command.name(),
        count = identifiers.len(),
        "running command"
    );

    match invocation.command {
        Command::Check => check(&identifiers, out),
        Command::Classify => classify(&identifiers, out).map(|()| Status::Success),
        Command::Strip => strip(&identifiers, out).map(|()| Status::Success),
        Command::Escape => escape(&identifiers, invocation.config.include_entity_forms, out)
            .map(|()| Status::Success),
    }
}

/// The UTF-16 form of one command-line argument.
pub fn identifier_units(argument: &str, config: &CliConfig) -> Result<Vec<u16>, CommandError> {
    if config.escaped_input {
        unescape(argument, DecodeContext::Source).map_err(|source| CommandError::Unescape {
            argument: argument.to_string(),
            source,
        })
    } else {
        Ok(argument.encode_utf16().collect())
    }
}

/// Printable form of UTF-16 text: lone surrogates are spelled `\uXXXX`.
pub fn render(units: &[u16]) -> String {
    let mut out = String::with_capacity(units.len());
    for scalar in scalars(units) {
        match scalar.char_or_surrogate() {
            Ok(c) => out.push(c),
            Err(_) => EscapeScheme::NumericFour.encode(scalar, &mut out),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests;
