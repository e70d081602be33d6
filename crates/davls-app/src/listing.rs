//! The listing command: load, parse, render.

use std::fs::File;
use std::io::{self, Write};

use davls_core::config::Settings;
use davls_rfc::rfc::dav::parse::{parse_multistatus, read_document};

use crate::cli::{Input, ListArgs};
use crate::error::AppResult;
use crate::output::render;

/// ## Summary
/// Reads the multistatus body named by `input`.
///
/// ## Errors
/// Returns an error if the file cannot be opened or read, or is not UTF-8.
pub fn load_document(input: &Input) -> AppResult<String> {
    let document = match input {
        Input::Stdin => read_document(io::stdin().lock())?,
        Input::File(path) => {
            tracing::debug!(path = %path.display(), "Reading multistatus body");
            read_document(File::open(path)?)?
        }
    };
    Ok(document)
}

/// ## Summary
/// Lists the entries of `document` below the effective query path and
/// writes them to `out`. Command-line values win over configuration.
///
/// Returns the number of entries written.
///
/// ## Errors
/// Returns an error if rendering or writing fails.
#[tracing::instrument(skip(document, settings, out), fields(document_len = document.len()))]
pub fn run(
    args: &ListArgs,
    settings: &Settings,
    document: &str,
    out: &mut impl Write,
) -> AppResult<usize> {
    let query_path = args
        .query_path
        .as_deref()
        .unwrap_or(&settings.listing.query_path);
    let format = args.format.unwrap_or(settings.listing.format);

    let entries = parse_multistatus(document, query_path);
    tracing::info!(entries = entries.len(), query_path = %query_path, %format, "Listing parsed");

    render(&entries, format, out)?;
    out.flush()?;

    Ok(entries.len())
}
