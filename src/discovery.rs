// src/discovery.rs
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

use crate::graph::package::Diagnostic;

/// Directories never descended into.
pub const PRUNE_DIRS: &[&str] = &["vendor", "testdata", "node_modules", "target"];

/// Options for the source walk.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Skip `_test.go` files.
    pub ignore_tests: bool,
    /// Relative paths (forward slashes) matching any of these are skipped.
    pub exclude: Vec<Regex>,
}

/// Collects every Go source file under `root`, sorted.
///
/// Walk errors do not abort the walk; they come back as diagnostics.
#[must_use]
pub fn discover(root: &Path, options: &WalkOptions) -> (Vec<PathBuf>, Vec<Diagnostic>) {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(e));

    let (paths, diagnostics) = accumulate_walker(walker, root);
    let files: Vec<PathBuf> = paths
        .into_iter()
        .filter(|p| is_go_source(p, options.ignore_tests))
        .filter(|p| !is_excluded(p, root, &options.exclude))
        .collect();

    debug!(files = files.len(), errors = diagnostics.len(), "source walk finished");
    (files, diagnostics)
}

fn should_prune(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') || name.starts_with('_') || PRUNE_DIRS.contains(&&*name) {
        return true;
    }
    is_nested_module(entry.path())
}

/// A directory below the root with its own `go.mod` is a separate module.
fn is_nested_module(dir: &Path) -> bool {
    dir.join("go.mod").is_file()
}

fn accumulate_walker<I>(walker: I, root: &Path) -> (Vec<PathBuf>, Vec<Diagnostic>)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut diagnostics = Vec::new();
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            Err(e) => {
                let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                diagnostics.push(Diagnostic::new(path, e.to_string()));
            }
        }
    }
    (paths, diagnostics)
}

/// True for `*.go` files, minus tests when `ignore_tests` is set.
#[must_use]
pub fn is_go_source(path: &Path, ignore_tests: bool) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if !name.ends_with(".go") || name.len() <= 3 {
        return false;
    }
    !(ignore_tests && name.ends_with("_test.go"))
}

fn is_excluded(path: &Path, root: &Path, exclude: &[Regex]) -> bool {
    if exclude.is_empty() {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    let s = normalize_path(relative);
    exclude.iter().any(|re| re.is_match(&s))
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
