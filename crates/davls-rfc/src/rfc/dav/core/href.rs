//! DAV href type.

use std::fmt;

/// A `WebDAV` href (URL reference).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Href(pub String);

impl Href {
    /// Creates a new href.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the href as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this href ends with a slash.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Returns the last non-empty path segment (resource name).
    ///
    /// `None` when the href has no segments, e.g. `/` or `//`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.split('/').rfind(|s| !s.is_empty())
    }

    /// URL-decodes the href.
    ///
    /// Multi-byte UTF-8 escapes are decoded as a unit. Malformed escapes are
    /// kept literally, and byte sequences that do not form valid UTF-8 once
    /// decoded are replaced with U+FFFD.
    #[must_use]
    pub fn decode(&self) -> String {
        match urlencoding::decode(&self.0) {
            Ok(decoded) => decoded.into_owned(),
            Err(err) => {
                tracing::trace!(error = %err, href = %self.0, "Decoded href is not valid UTF-8");
                String::from_utf8_lossy(&urlencoding::decode_binary(self.0.as_bytes()))
                    .into_owned()
            }
        }
    }

    /// Returns a new href holding the decoded form of this one.
    #[must_use]
    pub fn decoded(&self) -> Self {
        Self(self.decode())
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Href {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Href {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Href> for String {
    fn from(href: Href) -> Self {
        href.0
    }
}

impl AsRef<str> for Href {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
