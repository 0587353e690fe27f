#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use morse_encoder::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments; exits on -h/--help and malformed overrides
    let args = cli::parse_args();

    setup_logging(args.debug)?;

    let config = Config::from_args(&args);

    cli::execute(&config)
}
