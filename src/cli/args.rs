//! Command-line argument parsing and validation
//!
//! Arguments are scanned in order. Only the first `-a`/`-b` override is
//! honored; later ones are ordinary words. Every other word, including
//! hyphen-prefixed ones, is text to encode.

use crate::{config::SymbolSet, error::MorseError};
use clap::{Command, error::ErrorKind};
use std::ffi::OsString;

const HELP: &str = "\
morse: Text to Morse
morse wordy words
morse -a dash dot separator  words words words
morse -b .-/ words
";

/// Parsed command line for one encoding run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Enable debug output on stderr
    pub debug: bool,
    /// Symbols from the first `-a` or `-b` override
    pub symbols: Option<SymbolSet>,
    /// Words to encode, in command-line order
    pub text: Vec<String>,
}

/// What the command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Encode the collected text
    Encode(Args),
    /// Print usage and stop
    Help,
}

/// Command description used for help output and usage errors
pub fn command() -> Command {
    Command::new("morse")
        .about("Convert text to Morse code")
        .override_usage("morse [--debug] [-a DASH DOT SEP | -b TRIPLE] [WORDS]...")
        .override_help(HELP)
        .disable_help_flag(true)
        .disable_version_flag(true)
}

/// Parse command line arguments, exiting on usage errors or help
pub fn parse_args() -> Args {
    match try_parse_args_from(std::env::args_os()) {
        Ok(Invocation::Encode(args)) => args,
        Ok(Invocation::Help) => {
            let code = match command().print_help() {
                Ok(()) => 0,
                Err(_) => 1,
            };
            std::process::exit(code)
        }
        Err(err) => command().error(ErrorKind::ValueValidation, err).exit(),
    }
}

/// Parse arguments from an explicit iterator whose first item is the binary name
///
/// `-h`/`--help` wins wherever it is reached, even after a malformed override.
pub fn try_parse_args_from<I, T>(itr: I) -> Result<Invocation, MorseError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let words: Vec<String> = itr
        .into_iter()
        .skip(1)
        .map(|arg| {
            let arg: OsString = arg.into();
            arg.into_string()
                .unwrap_or_else(|os| os.to_string_lossy().into_owned())
        })
        .collect();

    let mut args = Args::default();
    let mut override_taken = false;
    let mut malformed = None;
    let mut i = 0;

    while i < words.len() {
        let word = words[i].as_str();
        i += 1;

        match word {
            "-h" | "--help" => return Ok(Invocation::Help),
            "--debug" => args.debug = true,
            "-a" if !override_taken => {
                override_taken = true;
                match words.get(i..i + 3) {
                    Some([dash, dot, separator]) => {
                        args.symbols = Some(SymbolSet::new(
                            dash.as_str(),
                            dot.as_str(),
                            separator.as_str(),
                        ));
                        i += 3;
                    }
                    _ => {
                        malformed = malformed.or(Some(MorseError::malformed_override(
                            "-a",
                            format!(
                                "expected three values (dash, dot, separator), got {}",
                                words.len() - i
                            ),
                        )));
                    }
                }
            }
            "-b" if !override_taken => {
                override_taken = true;
                match words.get(i) {
                    Some(triple) => {
                        i += 1;
                        match SymbolSet::from_triple(triple) {
                            Ok(symbols) => args.symbols = Some(symbols),
                            Err(err) => malformed = malformed.or(Some(err)),
                        }
                    }
                    None => {
                        malformed = malformed.or(Some(MorseError::malformed_override(
                            "-b",
                            "expected a value with at least 3 characters (dot, dash, separator)",
                        )));
                    }
                }
            }
            _ => args.text.push(word.to_string()),
        }
    }

    match malformed {
        Some(err) => Err(err),
        None => Ok(Invocation::Encode(args)),
    }
}
