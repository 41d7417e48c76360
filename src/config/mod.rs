// src/config/mod.rs
pub mod io;
pub mod types;

use std::path::{Path, PathBuf};

use regex::Regex;

pub use self::io::{parse_toml, CONFIG_FILE};
pub use self::types::{RuleConfig, StratumToml, WalkConfig};

use crate::discovery::WalkOptions;
use crate::error::Result;
use crate::graph::layering::{Classifier, Mode};

/// Resolved runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: StratumToml,
    /// Where `file` was read from, if anywhere.
    pub source: Option<PathBuf>,
    pub exclude_patterns: Vec<Regex>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `stratum.toml` from `root`, or from `explicit` when given.
    ///
    /// # Errors
    /// Returns error if an explicit file is missing, the file is malformed,
    /// or an exclude pattern is not a valid regex.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let (file, source) = io::load_toml(root, explicit)?;
        Self::from_toml(file, source)
    }

    /// Builds a config from already-parsed settings.
    ///
    /// # Errors
    /// Returns error if an exclude pattern is not a valid regex.
    pub fn from_toml(file: StratumToml, source: Option<PathBuf>) -> Result<Self> {
        let exclude_patterns = io::compile_patterns(&file.walk.exclude)?;
        Ok(Self {
            file,
            source,
            exclude_patterns,
        })
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        Mode::from_strict(self.file.rules.strict)
    }

    #[must_use]
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            ignore_tests: self.file.walk.ignore_tests,
            exclude: self.exclude_patterns.clone(),
        }
    }

    /// Classifier for `module`, unless the config pins a prefix of its own.
    #[must_use]
    pub fn classifier(&self, module: &str) -> Classifier {
        let mut settings = self.file.classifier.clone();
        if settings.module_prefix.is_none() {
            settings.module_prefix = Some(module.to_string());
        }
        Classifier::new(settings)
    }
}
