//! Codevariants organizes hand-written component usage examples into typed
//! catalogs: for every component, an ordered set of scenarios, and for every
//! scenario one source-text body per target environment.
//!
//! Author tables go through [`CatalogLoader`] and [`Validator`] before they
//! are handed to a registry for publication.

pub mod catalog;
pub mod environment;
pub mod error;
pub mod loader;
mod macros;
pub mod source;
pub mod table;
pub mod validator;

// Re-export core types
pub use catalog::{ComponentCatalog, ComponentName, ScenarioKey, ScenarioRecord};
pub use environment::{Environment, UnknownEnvironment};
pub use error::{CatalogError, NameKind, Result};
pub use loader::{CatalogLoader, load_triples};
pub use source::ContentDir;
pub use table::{AuthorTable, Entries, ScenarioEntry, TableRow};
pub use validator::{CoverageGap, Validated, ValidationMode, Validator};

/// Get the library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
