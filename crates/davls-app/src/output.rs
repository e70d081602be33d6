//! Rendering of listings.

use std::io::Write;

use chrono::{DateTime, Utc};
use davls_core::config::OutputFormat;
use davls_rfc::rfc::dav::core::FileEntry;

use crate::error::AppResult;

/// Width of a rendered `YYYY-MM-DD HH:MM` timestamp.
const DATE_WIDTH: usize = 16;

/// ## Summary
/// Writes `entries` to `out` in the requested format.
///
/// ## Errors
/// Returns an error if writing or JSON serialization fails.
pub fn render(entries: &[FileEntry], format: OutputFormat, out: &mut impl Write) -> AppResult<()> {
    match format {
        OutputFormat::Table => render_table(entries, out),
        OutputFormat::Json => render_json(entries, out),
    }
}

fn render_json(entries: &[FileEntry], out: &mut impl Write) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out)?;
    Ok(())
}

fn render_table(entries: &[FileEntry], out: &mut impl Write) -> AppResult<()> {
    let size_width = entries
        .iter()
        .map(|entry| entry.size.to_string().len())
        .max()
        .unwrap_or(1);

    for entry in entries {
        let kind = if entry.is_dir { 'd' } else { '-' };
        let suffix = if entry.is_dir { "/" } else { "" };
        writeln!(
            out,
            "{kind} {size:>size_width$} {modified:<DATE_WIDTH$} {name}{suffix}",
            size = entry.size,
            modified = display_modified(&entry.modified),
            name = entry.name,
        )?;
    }

    Ok(())
}

/// Formats a `getlastmodified` value for the table.
///
/// HTTP dates (RFC 1123, a profile of RFC 2822) are shown in UTC as
/// `YYYY-MM-DD HH:MM`. Anything else is shown verbatim, and a missing
/// value as `-`.
#[must_use]
pub fn display_modified(raw: &str) -> String {
    if raw.is_empty() {
        return String::from("-");
    }

    match DateTime::parse_from_rfc2822(raw) {
        Ok(date) => date.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string(),
        Err(err) => {
            tracing::debug!(error = %err, value = %raw, "Unrecognized modification time");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use davls_rfc::rfc::dav::core::Href;

    use super::*;

    fn sample() -> Vec<FileEntry> {
        vec![
            FileEntry::new("sub", Href::new("/docs/sub/"), 0, ""),
            FileEntry::new(
                "report.pdf",
                Href::new("/docs/report.pdf"),
                2048,
                "Mon, 01 Jan 2024 00:00:00 GMT",
            ),
        ]
    }

    fn rendered(entries: &[FileEntry], format: OutputFormat) -> String {
        let mut out = Vec::new();
        render(entries, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn display_http_date() {
        assert_eq!(display_modified("Mon, 01 Jan 2024 00:00:00 GMT"), "2024-01-01 00:00");
        assert_eq!(display_modified("Tue, 02 Jan 2024 10:05:00 +0200"), "2024-01-02 08:05");
    }

    #[test]
    fn display_missing_and_unknown_dates() {
        assert_eq!(display_modified(""), "-");
        assert_eq!(display_modified("2024-01-01T00:00:00Z"), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn table_lines() {
        let table = rendered(&sample(), OutputFormat::Table);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "d    0 -                sub/");
        assert_eq!(lines[1], "- 2048 2024-01-01 00:00 report.pdf");
    }

    #[test]
    fn table_empty_listing() {
        assert!(rendered(&[], OutputFormat::Table).is_empty());
    }

    #[test]
    fn json_round_trips() {
        let entries = sample();
        let json = rendered(&entries, OutputFormat::Json);

        assert!(json.contains("\"isDir\": true"));
        let parsed: Vec<FileEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn json_empty_listing() {
        assert_eq!(rendered(&[], OutputFormat::Json).trim(), "[]");
    }
}
