//! CLI configuration management

use codevariants::ValidationMode;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Where content lives and how strictly it is checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory of per-component JSON tables
    pub content_dir: PathBuf,

    /// Coverage policy applied when building the registry
    pub mode: ValidationMode,
}

impl CliConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            content_dir: lookup("CODEVARIANTS_CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_dir),
            mode: lookup("CODEVARIANTS_MODE")
                .map(|value| {
                    value.parse().map_err(|err| {
                        CliError::Config(format!("Invalid CODEVARIANTS_MODE value: {err}"))
                    })
                })
                .transpose()?
                .unwrap_or(defaults.mode),
        })
    }

    /// Command-line flags win over the environment
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.content_dir {
            self.content_dir = dir.clone();
        }
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        self
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            mode: ValidationMode::Strict,
        }
    }
}
