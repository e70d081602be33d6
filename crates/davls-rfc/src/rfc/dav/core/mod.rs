//! `WebDAV` value types.
//!
//! This module defines the types produced when reading a
//! multistatus response: the raw [`Href`] of each resource and the
//! [`FileEntry`] handed to listing consumers.

mod entry;
mod href;

pub use entry::FileEntry;
pub use href::Href;
