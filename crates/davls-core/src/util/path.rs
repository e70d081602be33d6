//! Path canonicalization for comparing collection paths.
//!
//! ## Summary
//! `WebDAV` servers disagree on whether collection hrefs carry a trailing
//! slash, and callers pass query paths with or without a leading one. Both
//! sides are brought into a single form (`/a/b/`) before comparison.

/// Normalize a filesystem-style path so it both starts and ends with `/`.
///
/// The root path `/` maps to itself. Interior slashes are not collapsed.
///
/// Examples:
/// - "a/b" -> "/a/b/"
/// - "/a/b" -> "/a/b/"
/// - "/a/b/" -> "/a/b/"
/// - "" -> "/"
#[must_use]
pub fn normalize(path: &str) -> String {
    if path == "/" {
        return String::from("/");
    }

    let mut normalized = String::with_capacity(path.len() + 2);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Returns whether two paths denote the same directory once normalized.
#[must_use]
pub fn same_directory(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
