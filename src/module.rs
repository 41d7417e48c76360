// src/module.rs
//! Go module root resolution.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::error::{Result, StratumError};

static MODULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*module\s+(?:"([^"]+)"|`([^`]+)`|(\S+))"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// The module being analyzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Directory holding `go.mod`.
    pub root: PathBuf,
    /// Import path declared by the `module` directive.
    pub path: String,
}

/// Reads `root/go.mod` and returns the declared module path.
///
/// # Errors
/// Returns error if `go.mod` is missing or unreadable, or declares no module path.
pub fn locate(root: &Path) -> Result<ModuleInfo> {
    let gomod = root.join("go.mod");
    if !gomod.is_file() {
        return Err(StratumError::ModuleNotFound {
            path: root.to_path_buf(),
        });
    }

    let content = fs::read_to_string(&gomod).map_err(|e| StratumError::io(e, &gomod))?;
    let path = parse_module_path(&content)
        .ok_or_else(|| StratumError::EmptyModulePath { path: gomod.clone() })?;

    info!(module = %path, "found module");
    Ok(ModuleInfo {
        root: root.to_path_buf(),
        path,
    })
}

/// Extracts the module path from `go.mod` content.
#[must_use]
pub fn parse_module_path(content: &str) -> Option<String> {
    content
        .lines()
        .map(strip_comment)
        .find_map(|line| MODULE_RE.captures(line))
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str().to_string())
        .filter(|p| !p.is_empty())
}

fn strip_comment(line: &str) -> &str {
    line.split_once("//").map_or(line, |(code, _)| code)
}
