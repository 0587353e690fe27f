//! Configuration for one encoder invocation
//!
//! Built once from the command line and passed explicitly to the encoder.

use crate::{cli::Args, core::Mark, error::MorseError};
use serde::{Deserialize, Serialize};

/// Output strings substituted for each Morse mark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    /// Emitted for a dash
    pub dash: String,
    /// Emitted for a dot
    pub dot: String,
    /// Emitted after every input character
    pub separator: String,
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self {
            dash: "-".to_string(),
            dot: ".".to_string(),
            separator: " ".to_string(),
        }
    }
}

impl SymbolSet {
    /// Create a symbol set from explicit dash, dot and separator strings
    pub fn new(
        dash: impl Into<String>,
        dot: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            dash: dash.into(),
            dot: dot.into(),
            separator: separator.into(),
        }
    }

    /// Take dot, dash and separator from the first three characters of `triple`
    ///
    /// Anything after the third character is ignored.
    pub fn from_triple(triple: &str) -> Result<Self, MorseError> {
        let mut chars = triple.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(dot), Some(dash), Some(separator)) => Ok(Self::new(dash, dot, separator)),
            _ => Err(MorseError::malformed_override(
                "-b",
                format!(
                    "expected at least 3 characters (dot, dash, separator), got {:?}",
                    triple
                ),
            )),
        }
    }

    /// Output string for a mark
    pub fn symbol_for(&self, mark: Mark) -> &str {
        match mark {
            Mark::Dot => &self.dot,
            Mark::Dash => &self.dash,
            Mark::Separator => &self.separator,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Symbols used in the output
    pub symbols: SymbolSet,
    /// All text arguments joined without spacing
    pub text: String,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            debug: args.debug,
            symbols: args.symbols.clone().unwrap_or_default(),
            text: args.text.concat(),
        }
    }
}
