// src/graph/builder.rs
//! Package graph construction from a Go source tree.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use super::imports::{self, Extraction};
use super::package::{Diagnostic, PackageGraph, PackageNode, PackagePath};
use crate::discovery::{self, normalize_path, WalkOptions};
use crate::error::{Result, StratumError};

/// Walks `root` and builds the graph of in-module packages.
///
/// Only imports equal to `module_prefix` or below it are kept. Files that
/// cannot be read are skipped and reported as diagnostics.
#[must_use]
pub fn build_graph(
    root: &Path,
    module_prefix: &str,
    options: &WalkOptions,
) -> (PackageGraph, Vec<Diagnostic>) {
    let (files, mut diagnostics) = discovery::discover(root, options);

    let parsed: Vec<(PathBuf, Result<Extraction>)> = files
        .par_iter()
        .map(|file| (file.clone(), read_imports(file)))
        .collect();

    let mut graph = PackageGraph::new();
    for (file, result) in parsed {
        match result {
            Ok(extraction) => {
                if extraction.syntax_error {
                    diagnostics.push(Diagnostic::new(
                        &file,
                        "syntax error; imports may be incomplete",
                    ));
                }
                add_file(&mut graph, root, module_prefix, &file, extraction.imports);
            }
            Err(e) => {
                warn!(file = %file.display(), error = %e, "skipping unreadable file");
                diagnostics.push(Diagnostic::new(&file, e.to_string()));
            }
        }
    }

    debug!(packages = graph.len(), "package graph built");
    (graph, diagnostics)
}

fn read_imports(file: &Path) -> Result<Extraction> {
    let content = fs::read_to_string(file).map_err(|e| StratumError::io(e, file))?;
    imports::extract(&content)
}

fn add_file(
    graph: &mut PackageGraph,
    root: &Path,
    module_prefix: &str,
    file: &Path,
    raw_imports: Vec<String>,
) {
    let package = package_path(root, module_prefix, file);
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !graph.contains(&package) {
        graph.insert(PackageNode::new(package.clone()));
    }
    let Some(node) = graph.get_mut(&package) else {
        return;
    };

    node.files.push(file_name);
    node.imports.extend(
        raw_imports
            .into_iter()
            .filter(|import| is_internal(import, module_prefix) && *import != package),
    );
}

/// Import path of the package that owns `file`.
#[must_use]
pub fn package_path(root: &Path, module_prefix: &str, file: &Path) -> PackagePath {
    let dir = file.parent().unwrap_or(root);
    let relative = dir.strip_prefix(root).unwrap_or(dir);
    let relative = normalize_path(relative);
    if relative.is_empty() {
        module_prefix.to_string()
    } else {
        format!("{module_prefix}/{relative}")
    }
}

/// True when `import` names the module itself or a package inside it.
#[must_use]
pub fn is_internal(import: &str, module_prefix: &str) -> bool {
    import
        .strip_prefix(module_prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
