// src/graph/package.rs
//! Package graph types shared by the walker and the layering engine.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Fully-qualified import path of a package, e.g. `example.com/app/internal/store`.
pub type PackagePath = String;

/// A single package: the files it is made of and the in-module packages it imports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageNode {
    pub path: PackagePath,
    pub files: Vec<String>,
    pub imports: BTreeSet<PackagePath>,
}

impl PackageNode {
    #[must_use]
    pub fn new(path: impl Into<PackagePath>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PackagePath>,
    {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }
}

/// Read-only map of every package in the module.
///
/// Keys are ordered so every traversal over the graph is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageGraph {
    nodes: BTreeMap<PackagePath, PackageNode>,
}

impl PackageGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, replacing any node already stored under the same path.
    pub fn insert(&mut self, node: PackageNode) {
        self.nodes.insert(node.path.clone(), node);
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&PackageNode> {
        self.nodes.get(path)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.nodes.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PackagePath> {
        self.nodes.keys()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PackageNode> {
        self.nodes.values()
    }

    /// Imports of `path` that resolve to packages inside this graph.
    pub fn resolved_imports<'a>(&'a self, path: &str) -> impl Iterator<Item = &'a PackagePath> {
        self.nodes
            .get(path)
            .into_iter()
            .flat_map(|node| node.imports.iter())
            .filter(|target| self.nodes.contains_key(target.as_str()))
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut PackageNode> {
        self.nodes.get_mut(path)
    }
}

impl FromIterator<PackageNode> for PackageGraph {
    fn from_iter<T: IntoIterator<Item = PackageNode>>(iter: T) -> Self {
        let mut graph = Self::new();
        for node in iter {
            graph.insert(node);
        }
        graph
    }
}

/// A non-fatal problem met while building the graph (unreadable file, bad syntax).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}
