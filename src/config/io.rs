// src/config/io.rs
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use super::types::StratumToml;
use crate::error::{Result, StratumError};

pub const CONFIG_FILE: &str = "stratum.toml";

/// Reads the config file. `explicit` must exist; the default one may be absent.
pub(super) fn load_toml(root: &Path, explicit: Option<&Path>) -> Result<(StratumToml, Option<PathBuf>)> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => (root.join(CONFIG_FILE), false),
    };

    if !path.is_file() {
        if required {
            return Err(StratumError::io(
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                path,
            ));
        }
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok((StratumToml::default(), None));
    }

    let content = fs::read_to_string(&path).map_err(|e| StratumError::io(e, &path))?;
    let parsed = parse_toml(&content).map_err(|source| StratumError::Config {
        source,
        path: path.clone(),
    })?;
    debug!(path = %path.display(), "config loaded");
    Ok((parsed, Some(path)))
}

/// Parses `stratum.toml` content.
///
/// # Errors
/// Returns error on malformed TOML or mistyped fields.
pub fn parse_toml(content: &str) -> std::result::Result<StratumToml, toml::de::Error> {
    toml::from_str(content)
}

pub(super) fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(StratumError::from))
        .collect()
}
