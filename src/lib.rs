//! # Morse Encoder
//!
//! Converts ASCII text into Morse code. Letters (case-insensitive), digits
//! and a fixed set of punctuation marks are looked up in a static table;
//! the dot, dash and separator symbols that end up in the output can be
//! replaced from the command line.
//!
//! ## Example
//!
//! ```
//! use morse_encoder::{config::SymbolSet, core::Encoder};
//!
//! let encoder = Encoder::new(SymbolSet::default());
//! assert_eq!(encoder.encode("SOS"), "... --- ... ");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use error::{MorseError, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr, keeping stdout for the encoded line
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| MorseError::logging(e.to_string()))?;

    Ok(())
}
