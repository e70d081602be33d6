//! Multistatus (PROPFIND response) parsing.

use davls_core::util::path::{normalize, same_directory};
use regex_lite::Regex;

use crate::rfc::dav::core::{FileEntry, Href};

/// A `DAV:response` element, attributes allowed. `responsedescription`
/// does not match because the name must be followed by whitespace or `>`.
const RESPONSE_PATTERN: &str = r"(?s)<[Dd]:response(?:\s[^>]*)?>(.*?)</[Dd]:response\s*>";

/// Builds the pattern for a leaf `DAV:` property carrying text content.
fn element_pattern(name: &str) -> String {
    format!(r"<[Dd]:{name}(?:\s[^>]*)?>([^<]*)</[Dd]:{name}\s*>")
}

#[expect(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("multistatus element pattern must compile")
}

/// Extracts listing entries from `PROPFIND` multistatus bodies.
///
/// ## Summary
/// Holds only the compiled element patterns, so one parser can be reused
/// for any number of documents and shared across threads.
#[derive(Debug, Clone)]
pub struct MultistatusParser {
    response: Regex,
    href: Regex,
    displayname: Regex,
    getcontentlength: Regex,
    getlastmodified: Regex,
}

impl MultistatusParser {
    /// Creates a parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            response: compile(RESPONSE_PATTERN),
            href: compile(&element_pattern("href")),
            displayname: compile(&element_pattern("displayname")),
            getcontentlength: compile(&element_pattern("getcontentlength")),
            getlastmodified: compile(&element_pattern("getlastmodified")),
        }
    }

    /// Parses a multistatus body into the entries below `query_path`.
    ///
    /// ## Summary
    /// Each `DAV:response` becomes at most one [`FileEntry`], in document
    /// order. The response describing `query_path` itself is left out, as
    /// are responses without an href or without any usable name. Missing
    /// optional properties fall back to defaults (size `0`, empty
    /// modification time).
    ///
    /// This never fails: a document without responses yields an empty list.
    #[must_use]
    #[tracing::instrument(skip(self, document), fields(document_len = document.len()))]
    pub fn parse(&self, document: &str, query_path: &str) -> Vec<FileEntry> {
        let query_path = normalize(query_path);

        let fragments: Vec<&str> = self
            .response
            .captures_iter(document)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();

        tracing::debug!(
            responses = fragments.len(),
            query_path = %query_path,
            "Parsing multistatus response"
        );

        let entries: Vec<FileEntry> = fragments
            .into_iter()
            .filter_map(|fragment| self.parse_response(fragment, &query_path))
            .collect();

        tracing::debug!(entries = entries.len(), "Parsed multistatus response");

        entries
    }

    /// Builds the entry for a single `DAV:response` body, if it has one.
    fn parse_response(&self, fragment: &str, query_path: &str) -> Option<FileEntry> {
        let Some(raw_href) = element_text(&self.href, fragment) else {
            tracing::trace!("Skipping response without href");
            return None;
        };

        let href = Href::new(raw_href).decoded();
        tracing::trace!(href = %href, "Found response");

        if same_directory(href.as_str(), query_path) {
            tracing::trace!(href = %href, "Skipping queried collection");
            return None;
        }

        let name = match element_text(&self.displayname, fragment) {
            Some(displayname) => displayname.to_owned(),
            None => href.name().unwrap_or_default().to_owned(),
        };
        if name.is_empty() {
            tracing::trace!(href = %href, "Skipping response without a name");
            return None;
        }

        let size = element_text(&self.getcontentlength, fragment)
            .and_then(|length| {
                length
                    .parse::<u64>()
                    .inspect_err(|err| {
                        tracing::trace!(error = %err, value = %length, "Ignoring invalid getcontentlength");
                    })
                    .ok()
            })
            .unwrap_or(0);

        let modified = element_text(&self.getlastmodified, fragment).unwrap_or_default();

        Some(FileEntry::new(name, href, size, modified))
    }
}

impl Default for MultistatusParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the trimmed text of the first element matched by `pattern`,
/// or `None` when there is no match or the text is blank.
fn element_text<'a>(pattern: &Regex, fragment: &'a str) -> Option<&'a str> {
    pattern
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
}

/// Parses a `PROPFIND` multistatus body with a freshly built parser.
///
/// See [`MultistatusParser::parse`].
#[must_use]
pub fn parse_multistatus(document: &str, query_path: &str) -> Vec<FileEntry> {
    MultistatusParser::new().parse(document, query_path)
}
