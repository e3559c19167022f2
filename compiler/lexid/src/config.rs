//! Command-line parsing.
//!
//! Flags may appear anywhere after the command name; every other argument
//! is an identifier. A lone `--` ends flag parsing so identifiers that
//! start with `-` can still be passed.

use thiserror::Error;

/// The subcommand to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Report validity and the reason for each rejection.
    Check,
    /// List the scalars of each identifier with their classes.
    Classify,
    /// Print the comparison form without formatting characters.
    Strip,
    /// Print every escape spelling.
    Escape,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "check" => Some(Command::Check),
            "classify" => Some(Command::Classify),
            "strip" => Some(Command::Strip),
            "escape" => Some(Command::Escape),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Command::Check => "check",
            Command::Classify => "classify",
            Command::Strip => "strip",
            Command::Escape => "escape",
        }
    }
}

/// Options shared by every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Decode `\uXXXX` and `\UXXXXXXXX` in arguments before use (`--escaped`).
    pub escaped_input: bool,
    /// Add the markup character reference spellings (`--entities`).
    pub include_entity_forms: bool,
}

/// A fully parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub config: CliConfig,
    pub identifiers: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("`--entities` only applies to the `escape` command")]
    EntitiesWithoutEscape,

    #[error("`{0}` needs at least one identifier")]
    MissingIdentifier(&'static str),
}

/// Parse the arguments that follow the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation, ArgsError> {
    let Some((name, rest)) = args.split_first() else {
        return Err(ArgsError::MissingCommand);
    };
    let name = name.as_ref();
    let command =
        Command::from_name(name).ok_or_else(|| ArgsError::UnknownCommand(name.to_string()))?;

    let mut config = CliConfig::default();
    let mut identifiers = Vec::new();
    let mut flags_done = false;

    for arg in rest {
        let arg = arg.as_ref();
        if flags_done || !arg.starts_with("--") {
            identifiers.push(arg.to_string());
            continue;
        }
        match arg {
            "--" => flags_done = true,
            "--escaped" => config.escaped_input = true,
            "--entities" => config.include_entity_forms = true,
            _ => return Err(ArgsError::UnknownOption(arg.to_string())),
        }
    }

    if config.include_entity_forms && command != Command::Escape {
        return Err(ArgsError::EntitiesWithoutEscape);
    }
    if identifiers.is_empty() {
        return Err(ArgsError::MissingIdentifier(command.name()));
    }

    Ok(Invocation {
        command,
        config,
        identifiers,
    })
}
