// src/cli/dispatch.rs
//! Runs one `stratum` invocation and picks the exit code.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use super::args::Cli;
use crate::config::Config;
use crate::error::StratumError;
use crate::exit::StratumExit;
use crate::graph::layering::{inspect, Mode};
use crate::pipeline::{self, Analysis};
use crate::reporting::{self, console, OutputFormat};

/// Executes the parsed command line.
///
/// # Errors
/// Returns error if the config or `go.mod` cannot be loaded, or the report
/// cannot be written.
pub fn execute(cli: &Cli) -> Result<StratumExit> {
    if cli.output.is_some() {
        colored::control::set_override(false);
    }
    if cli.package_imports.is_some() && cli.format == OutputFormat::Dot {
        eprintln!(
            "{} --package-imports supports only the text and json formats",
            "Error:".red()
        );
        return Ok(StratumExit::InvalidInput);
    }
    let config = load_config(cli)?;
    let mode = if cli.strict {
        Mode::Strict
    } else {
        config.mode()
    };
    debug!(root = %cli.path.display(), %mode, "starting analysis");

    let analysis = pipeline::run(&cli.path, &config, mode)
        .with_context(|| format!("Failed to analyze {}", cli.path.display()))?;

    if let Some(query) = &cli.package_imports {
        return handle_package_imports(cli, &analysis, query);
    }

    let text = reporting::render(&analysis, cli.format).context("Failed to render report")?;
    emit(cli.output.as_deref(), &text)?;

    if analysis.passed() {
        Ok(StratumExit::Success)
    } else {
        Ok(StratumExit::CheckFailed)
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(&cli.path, cli.config.as_deref())
        .context("Failed to load configuration")?;
    if cli.ignore_tests {
        config.file.walk.ignore_tests = true;
    }
    if let Some(source) = &config.source {
        debug!(path = %source.display(), "using config file");
    }
    Ok(config)
}

fn handle_package_imports(cli: &Cli, analysis: &Analysis, query: &str) -> Result<StratumExit> {
    let found = inspect(
        &analysis.graph,
        &analysis.report.partition,
        &analysis.classifier,
        query,
    );
    let Some(info) = found else {
        let err = StratumError::UnknownPackage(query.to_string());
        eprintln!("{} {err}", "Error:".red());
        return Ok(StratumExit::InvalidInput);
    };

    let text = if cli.format == OutputFormat::Json {
        serde_json::to_string_pretty(&info).context("Failed to render package")?
    } else {
        console::render_package(&info)
    };
    emit(cli.output.as_deref(), &text)?;
    Ok(StratumExit::Success)
}

fn emit(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!(path = %path.display(), "report written");
        }
        None => print!("{text}"),
    }
    Ok(())
}
