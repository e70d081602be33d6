use std::io;

use anyhow::Context;

use davls_app::cli::{Command, USAGE};
use davls_app::listing::{load_document, run};
use davls_app::logging;
use davls_core::config::load_config;

fn main() -> anyhow::Result<()> {
    let filter_handle = logging::init();

    let args = match Command::parse(std::env::args().skip(1))? {
        Command::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Command::List(args) => args,
    };

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    logging::apply_level(&filter_handle, &config.logging.level);

    let document = load_document(&args.input)
        .with_context(|| format!("Failed to read multistatus body from {}", args.input))?;
    let count = run(&args, &config, &document, &mut io::stdout().lock())?;

    tracing::debug!(entries = count, "Listing written");

    Ok(())
}
