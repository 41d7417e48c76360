// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StratumError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Could not find go.mod in {path}. Run from the root directory of a Go module.")]
    ModuleNotFound { path: PathBuf },

    #[error("Empty module path in {path}")]
    EmptyModulePath { path: PathBuf },

    #[error("Invalid config {path}: {source}")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Grammar error: {0}")]
    Grammar(String),

    #[error("Unknown package: {0}")]
    UnknownPackage(String),
}

pub type Result<T> = std::result::Result<T, StratumError>;

impl StratumError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}
