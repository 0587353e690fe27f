//! Text to Morse encoding
//!
//! Every input character contributes its marks followed by exactly one
//! separator, so unsupported characters still leave a gap in the output.

use crate::{
    config::SymbolSet,
    core::table::{self, Mark},
    error::{MorseError, Result},
};
use std::io::Write;
use tracing::{debug, instrument};

/// Encoder that renders text with a fixed symbol set
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    symbols: SymbolSet,
}

impl Encoder {
    /// Create a new encoder using the given symbols
    pub fn new(symbols: SymbolSet) -> Self {
        Self { symbols }
    }

    /// Append the encoding of a single character to `out`
    pub fn encode_char(&self, c: char, out: &mut String) {
        for mark in table::lookup(c) {
            out.push_str(self.symbols.symbol_for(*mark));
        }
        out.push_str(self.symbols.symbol_for(Mark::Separator));
    }

    /// Encode a whole message, left to right
    #[instrument(skip(self), fields(len = text.len()))]
    pub fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 8);
        let mut skipped = 0usize;

        for c in text.chars() {
            if !table::is_supported(c) {
                skipped += 1;
            }
            self.encode_char(c, &mut out);
        }

        if skipped > 0 {
            debug!("{} unsupported character(s) encoded as bare separators", skipped);
        }
        out
    }

    /// Write the encoded message followed by a newline
    pub fn write_line<W: Write>(&self, text: &str, out: &mut W) -> Result<()> {
        let encoded = self.encode(text);
        writeln!(out, "{}", encoded)
            .and_then(|_| out.flush())
            .map_err(MorseError::output)
    }
}
