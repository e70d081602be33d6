//! `WebDAV` (RFC 4918) types and response parsing.

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;
