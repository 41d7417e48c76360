// src/graph/layering/inspect.rs
//! Per-package detail view.

use serde::Serialize;

use super::classifier::Classifier;
use super::types::LevelPartition;
use crate::graph::package::{PackageGraph, PackagePath};

/// Everything known about one package after leveling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub path: PackagePath,
    pub level: Option<usize>,
    pub entry_point: bool,
    pub utility: bool,
    pub files: Vec<String>,
    pub imports: Vec<ImportInfo>,
    pub imported_by: Vec<PackagePath>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportInfo {
    pub path: PackagePath,
    /// `None` when the target is not part of the analyzed graph.
    pub level: Option<usize>,
}

/// Looks up `query` by full path, falling back to the module-relative path.
#[must_use]
pub fn inspect(
    graph: &PackageGraph,
    partition: &LevelPartition,
    classifier: &Classifier,
    query: &str,
) -> Option<PackageInfo> {
    let node = graph
        .get(query)
        .or_else(|| graph.nodes().find(|n| classifier.relative(&n.path) == query))?;

    let imports = node
        .imports
        .iter()
        .map(|target| ImportInfo {
            path: target.clone(),
            level: partition.level_of(target),
        })
        .collect();

    let imported_by = graph
        .nodes()
        .filter(|other| other.path != node.path && other.imports.contains(&node.path))
        .map(|other| other.path.clone())
        .collect();

    Some(PackageInfo {
        path: node.path.clone(),
        level: partition.level_of(&node.path),
        entry_point: classifier.is_entry_point(&node.path),
        utility: classifier.is_utility(&node.path),
        files: node.files.clone(),
        imports,
        imported_by,
    })
}
