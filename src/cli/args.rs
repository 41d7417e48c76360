// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "stratum",
    version,
    about = "Checks that a Go module's packages respect a layered architecture"
)]
pub struct Cli {
    /// Root directory of the Go module
    #[arg(default_value = ".")]
    pub path: PathBuf,
    /// Only allow imports of the directly adjacent level
    #[arg(long)]
    pub strict: bool,
    /// Skip `_test.go` files
    #[arg(long)]
    pub ignore_tests: bool,
    /// Show level, imports and importers of one package and exit (text or json only)
    #[arg(long, value_name = "PKG")]
    pub package_imports: Option<String>,
    /// Report format; `dot` is rejected together with `--package-imports`
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the report to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Config file to use instead of `<PATH>/stratum.toml`
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[arg(long, short)]
    pub verbose: bool,
}
