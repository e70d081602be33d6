//! Command-line argument handling.

use std::fmt;
use std::path::PathBuf;

use davls_core::config::OutputFormat;

use crate::error::{AppError, AppResult};

pub const USAGE: &str = "\
Usage: davls [OPTIONS] [FILE|-] [QUERY_PATH]

List the entries of a saved WebDAV PROPFIND multistatus response.

Arguments:
  FILE          Response body to read; `-` or omitted reads stdin
  QUERY_PATH    Collection that was queried (default: listing.query_path)

Options:
  -f, --format <table|json>   Output format (default: listing.format)
  -h, --help                  Print this help
";

/// Where the multistatus body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Options for a listing run. Unset values fall back to configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    pub input: Input,
    pub query_path: Option<String>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List(ListArgs),
}

impl Command {
    /// ## Summary
    /// Parses the arguments following the program name.
    ///
    /// ## Errors
    /// Returns a usage error for unknown options, a missing or invalid
    /// `--format` value, or surplus positional arguments.
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut positional: Vec<String> = Vec::new();
        let mut format = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Self::Help),
                "-f" | "--format" => {
                    let value = args
                        .next()
                        .ok_or_else(|| AppError::Usage(format!("{arg} requires a value")))?;
                    format = Some(value.parse::<OutputFormat>()?);
                }
                "-" => positional.push(arg),
                _ => {
                    if let Some(value) = arg.strip_prefix("--format=") {
                        format = Some(value.parse::<OutputFormat>()?);
                    } else if arg.starts_with('-') {
                        return Err(AppError::Usage(format!("unknown option: {arg}")));
                    } else {
                        positional.push(arg);
                    }
                }
            }
        }

        if positional.len() > 2 {
            return Err(AppError::Usage(format!(
                "unexpected argument: {}",
                positional[2]
            )));
        }

        let mut positional = positional.into_iter();
        let input = match positional.next().filter(|path| path != "-") {
            None => Input::Stdin,
            Some(path) => Input::File(PathBuf::from(path)),
        };

        Ok(Self::List(ListArgs {
            input,
            query_path: positional.next(),
            format,
        }))
    }
}
