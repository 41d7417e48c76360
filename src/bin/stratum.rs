// src/bin/stratum.rs
use clap::Parser;
use colored::Colorize;
use stratum_core::cli::{self, Cli};
use stratum_core::exit::StratumExit;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> StratumExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli::execute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            StratumExit::Error
        }
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` selects debug and the default is warn.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "stratum_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
