//! Argument parsing.
//!
//! ```text
//! nsmap <command> [options] <identifier>...
//!
//! commands:  resolve | candidates | help
//! options:   --map <prefix>=<dir>      (or -m, repeatable)
//!            --prepend <prefix>=<dir>  (registered ahead of earlier maps)
//!            --delimiter <char>
//!            --ext <extension>
//!
//! Every option also accepts the `--name=value` spelling.
//! ```

use thiserror::Error;

/// A parsed invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Resolve(Options),
    Candidates(Options),
    Help,
}

/// One `--map` or `--prepend` registration, in command-line order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mapping {
    pub prefix: String,
    pub base_dir: String,
    pub prepend: bool,
}

/// Options shared by `resolve` and `candidates`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub mappings: Vec<Mapping>,
    pub delimiter: Option<char>,
    pub extension: Option<String>,
    pub identifiers: Vec<String>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("`{0}` expects a value")]
    MissingValue(String),

    #[error("invalid mapping `{0}`, expected <prefix>=<dir>")]
    InvalidMapping(String),

    #[error("delimiter must be a single character, got `{0}`")]
    InvalidDelimiter(String),

    #[error("no identifier given")]
    MissingIdentifier,
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::MissingCommand);
    };

    match command.as_str() {
        "resolve" => parse_options(rest).map(Command::Resolve),
        "candidates" => parse_options(rest).map(Command::Candidates),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn parse_options(args: &[String]) -> Result<Options, CliError> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let arg = arg.as_str();
        if let Some(value) = option_value(arg, &["--map", "-m"], &mut iter) {
            options.mappings.push(parse_mapping(value?, false)?);
        } else if let Some(value) = option_value(arg, &["--prepend"], &mut iter) {
            options.mappings.push(parse_mapping(value?, true)?);
        } else if let Some(value) = option_value(arg, &["--delimiter"], &mut iter) {
            let value = non_empty("--delimiter", value?)?;
            options.delimiter = Some(parse_delimiter(value)?);
        } else if let Some(value) = option_value(arg, &["--ext"], &mut iter) {
            // `--ext=.` names no extension at all.
            let value = non_empty("--ext", value?.trim_start_matches('.'))?;
            options.extension = Some(value.to_string());
        } else if arg == "--" {
            options.identifiers.extend(iter.by_ref().cloned());
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(CliError::UnknownOption(arg.to_string()));
        } else {
            options.identifiers.push(arg.to_string());
        }
    }

    if options.identifiers.is_empty() {
        return Err(CliError::MissingIdentifier);
    }
    Ok(options)
}

/// Value of an option spelled `--name=value` or `--name value`.
///
/// `None` when `arg` is not one of `names`.
fn option_value<'a>(
    arg: &'a str,
    names: &[&str],
    rest: &mut impl Iterator<Item = &'a String>,
) -> Option<Result<&'a str, CliError>> {
    for name in names {
        if arg == *name {
            let value = rest
                .next()
                .map(String::as_str)
                .ok_or_else(|| CliError::MissingValue(arg.to_string()));
            return Some(value);
        }
        if let Some(value) = arg.strip_prefix(name).and_then(|v| v.strip_prefix('=')) {
            return Some(Ok(value));
        }
    }
    None
}

fn non_empty<'a>(name: &str, value: &'a str) -> Result<&'a str, CliError> {
    if value.is_empty() {
        return Err(CliError::MissingValue(name.to_string()));
    }
    Ok(value)
}

/// Split `<prefix>=<dir>` at the first `=`; the directory may contain more.
fn parse_mapping(value: &str, prepend: bool) -> Result<Mapping, CliError> {
    match value.split_once('=') {
        Some((prefix, base_dir)) if !base_dir.is_empty() => Ok(Mapping {
            prefix: prefix.to_string(),
            base_dir: base_dir.to_string(),
            prepend,
        }),
        _ => Err(CliError::InvalidMapping(value.to_string())),
    }
}

fn parse_delimiter(value: &str) -> Result<char, CliError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CliError::InvalidDelimiter(value.to_string())),
    }
}
