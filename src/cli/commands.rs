//! Command implementation for the CLI

use crate::{config::Config, core::Encoder};
use anyhow::Context;
use std::io;
use tracing::{debug, instrument};

/// Encode the configured text and print it as one line on stdout
#[instrument(skip(config))]
pub fn execute(config: &Config) -> anyhow::Result<()> {
    debug!(
        "Encoding {} character(s) with dash={:?} dot={:?} separator={:?}",
        config.text.chars().count(),
        config.symbols.dash,
        config.symbols.dot,
        config.symbols.separator
    );

    let encoder = Encoder::new(config.symbols.clone());
    let stdout = io::stdout();
    encoder
        .write_line(&config.text, &mut stdout.lock())
        .context("Failed to write encoded text")?;

    Ok(())
}
