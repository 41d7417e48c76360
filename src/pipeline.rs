// src/pipeline.rs
//! One analysis run: module lookup, graph build, layering.

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::graph::layering::{self, Classifier, LayerReport, Mode};
use crate::graph::{build_graph, Diagnostic, PackageGraph};
use crate::module::{self, ModuleInfo};

/// Everything the reporters need from one run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub module: ModuleInfo,
    pub graph: PackageGraph,
    pub classifier: Classifier,
    pub report: LayerReport,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.report.passed()
    }
}

/// Analyzes the Go module rooted at `root`.
///
/// # Errors
/// Returns error if `go.mod` cannot be found or read. Problems with
/// individual source files end up in `diagnostics` instead.
pub fn run(root: &Path, config: &Config, mode: Mode) -> Result<Analysis> {
    let module = module::locate(root)?;
    let (graph, diagnostics) = build_graph(root, &module.path, &config.walk_options());
    let classifier = config.classifier(&module.path);
    let report = layering::analyze(&graph, &classifier, mode);

    info!(
        packages = graph.len(),
        levels = report.partition.len(),
        violations = report.violations.len(),
        mode = %mode,
        "analysis finished"
    );

    Ok(Analysis {
        module,
        graph,
        classifier,
        report,
        diagnostics,
    })
}
