//! # `cuid2`
//!
//! Command-line front end for [`fast_cuid2`].
//!
//! ## Usage
//!
//! ```bash
//! cuid2 generate -n 10 --threads 2
//! cuid2 validate k3x9qa0123456789bcdefghj 0123
//! ```

mod commands;
mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, CliConfig};
use std::{io, process::ExitCode};
use telemetry::init_tracing;

fn main() -> anyhow::Result<ExitCode> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_tracing();
    tracing::debug!("starting with config: {config:?}");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match config {
        CliConfig::Generate(config) => {
            commands::run_generate(&config, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        CliConfig::Validate(config) => {
            if commands::run_validate(&config, &mut out)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
