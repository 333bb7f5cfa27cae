//! Error types for the codevariants registry

use codevariants::{CatalogError, Environment};
use thiserror::Error;

/// Registry-specific errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Invalid fingerprint '{0}': expected sha256:<64 hex digits>")]
    InvalidFingerprint(String),

    #[error("Snapshot fingerprint mismatch: expected {expected}, rebuilt {actual}")]
    FingerprintMismatch { expected: String, actual: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcomes of a read that found nothing.
///
/// These are part of the normal contract: content that is not authored yet.
/// A renderer handles [`QueryError::MissingBody`] by hiding that
/// environment's tab.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown component: {component}")]
    UnknownComponent { component: String },

    #[error("Unknown scenario '{scenario}' for component {component}")]
    UnknownScenario { component: String, scenario: String },

    #[error("No {environment} example for {component}/{scenario}")]
    MissingBody {
        component: String,
        scenario: String,
        environment: Environment,
    },
}

impl QueryError {
    /// Whether the scenario exists but lacks this environment
    pub fn is_missing_body(&self) -> bool {
        matches!(self, QueryError::MissingBody { .. })
    }
}

/// Errors parsing a textual example reference
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Invalid example reference '{reference}': {reason}")]
    InvalidFormat { reference: String, reason: String },

    #[error("Invalid example reference '{reference}': unknown environment '{label}'")]
    UnknownEnvironment { reference: String, label: String },
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
