// src/reporting/json.rs
//! Machine-readable report.

use serde::Serialize;

use crate::graph::layering::{LevelPartition, Mode, Violation};
use crate::graph::{Diagnostic, PackagePath};
use crate::pipeline::Analysis;

/// The JSON document emitted by `--format json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub module: &'a str,
    pub mode: Mode,
    pub levels: &'a LevelPartition,
    pub violations: &'a [Violation],
    pub diagnostics: &'a [Diagnostic],
    pub cycles: &'a [Vec<PackagePath>],
    pub passed: bool,
}

impl<'a> From<&'a Analysis> for JsonReport<'a> {
    fn from(analysis: &'a Analysis) -> Self {
        Self {
            module: &analysis.module.path,
            mode: analysis.report.mode,
            levels: &analysis.report.partition,
            violations: &analysis.report.violations,
            diagnostics: &analysis.diagnostics,
            cycles: &analysis.report.cycles,
            passed: analysis.passed(),
        }
    }
}

/// Serializes the run as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::layering::{self, Classifier};
    use crate::graph::{PackageGraph, PackageNode};
    use crate::module::ModuleInfo;
    use serde_json::Value;
    use std::path::PathBuf;

    fn run(nodes: Vec<PackageNode>, mode: Mode) -> Analysis {
        let graph: PackageGraph = nodes.into_iter().collect();
        let classifier = Classifier::for_module("m");
        let report = layering::analyze(&graph, &classifier, mode);
        Analysis {
            module: ModuleInfo {
                root: PathBuf::from("."),
                path: "m".to_string(),
            },
            graph,
            classifier,
            report,
            diagnostics: vec![Diagnostic::new("bad.go", "syntax error")],
        }
    }

    #[test]
    fn test_document_shape() -> serde_json::Result<()> {
        let a = run(
            vec![
                PackageNode::new("m").with_imports(["m/a"]),
                PackageNode::new("m/a"),
            ],
            Mode::Strict,
        );
        let doc: Value = serde_json::from_str(&render(&a)?)?;

        assert_eq!(doc["module"], "m");
        assert_eq!(doc["mode"], "strict");
        assert_eq!(doc["levels"], serde_json::json!([["m"], ["m/a"]]));
        assert_eq!(doc["violations"], serde_json::json!([]));
        assert_eq!(doc["diagnostics"][0]["message"], "syntax error");
        assert_eq!(doc["passed"], true);
        Ok(())
    }

    #[test]
    fn test_violation_fields() -> serde_json::Result<()> {
        let a = run(
            vec![
                PackageNode::new("m").with_imports(["m/api/v1/handlers", "m/store"]),
                PackageNode::new("m/api/v1/handlers").with_imports(["m/store"]),
                PackageNode::new("m/store"),
            ],
            Mode::Lenient,
        );
        let doc: Value = serde_json::from_str(&render(&a)?)?;

        assert_eq!(doc["passed"], false);
        let v = &doc["violations"][0];
        assert_eq!(v["from_path"], "m/api/v1/handlers");
        assert_eq!(v["to_path"], "m/store");
        assert_eq!(v["from_level"], 1);
        assert_eq!(v["to_level"], 1);
        assert_eq!(v["mode"], "lenient");
        Ok(())
    }
}
