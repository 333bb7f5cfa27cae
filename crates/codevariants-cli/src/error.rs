//! Error handling for the command-line tool

use codevariants::CatalogError;
use codevariants_registry::{QueryError, RegistryError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("No component matches: {}", .0.join(", "))]
    Unresolved(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status: 1 for content that fails the gate, 2 for bad
    /// usage or configuration
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Catalog(_) | CliError::Registry(_) | CliError::Io { .. } => 1,
            CliError::Output(_) => 1,
            CliError::Query(_) | CliError::Unresolved(_) | CliError::Config(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let content = CliError::from(CatalogError::DuplicateComponent {
            component: "Backdrop".into(),
        });
        assert_eq!(content.exit_code(), 1);

        let usage = CliError::from(QueryError::UnknownComponent {
            component: "Backdorp".into(),
        });
        assert_eq!(usage.exit_code(), 2);
        assert_eq!(usage.to_string(), "Unknown component: Backdorp");

        let unresolved = CliError::Unresolved(vec!["a.tsx".into(), "b.tsx".into()]);
        assert_eq!(unresolved.to_string(), "No component matches: a.tsx, b.tsx");
    }
}
