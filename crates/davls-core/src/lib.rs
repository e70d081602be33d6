//! Shared building blocks for the davls crates: path canonicalization,
//! configuration loading and the core error type.

pub mod config;
pub mod error;
pub mod util;
