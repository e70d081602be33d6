//! `WebDAV` multistatus handling for davls.
//!
//! Turns the body of a `PROPFIND` response into a flat list of
//! [`FileEntry`](rfc::dav::core::FileEntry) records.

pub mod error;
pub mod rfc;
