//! The `davls` listing command.
//!
//! Reads a saved `PROPFIND` multistatus body, extracts the entries below the
//! queried collection and prints them as a table or as JSON.

pub mod cli;
pub mod error;
pub mod listing;
pub mod logging;
pub mod output;
