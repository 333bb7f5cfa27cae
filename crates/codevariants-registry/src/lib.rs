//! # Codevariants Registry
//!
//! The published side of codevariants:
//! - Immutable registries built from validated component catalogs
//! - A read-only query interface for documentation renderers
//! - Plain nested-map snapshots for export and re-import
//! - An atomically swapped "current registry" pointer for rebuilds
//!
//! ## Core Concepts
//!
//! - **Registries** are frozen once published; new content means a new registry
//! - **Builds** load and validate every author table before anything is published
//! - **Missing bodies** are ordinary query results, rendered as a hidden tab
//! - **Fingerprints** (`sha256:<hex>`) identify registry content independent of publication time
//!
//! ## Example Usage
//!
//! ```rust
//! use codevariants::{scenarios, Environment, ValidationMode};
//! use codevariants_registry::{build, ExampleQuery, RegistryHandle};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backdrop = scenarios!("Backdrop" => {
//!     "default" => {
//!         react: "<Backdrop onClick={handleClick} />",
//!         vanilla: r#"<div class="Polaris-Backdrop"></div>"#,
//!     },
//! });
//!
//! let build = build(&[backdrop], ValidationMode::Lenient)?;
//! let handle = RegistryHandle::new(build.registry);
//!
//! let registry = handle.current();
//! let body = registry.get_body("Backdrop", "default", Environment::PrimaryFramework)?;
//! assert_eq!(body, "<Backdrop onClick={handleClick} />");
//!
//! let missing = registry.get_body("Backdrop", "default", Environment::LegacyWidgetToolkit);
//! assert!(missing.unwrap_err().is_missing_body());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod address;
pub mod build;
pub mod error;
pub mod handle;
pub mod query;
pub mod reference;
pub mod registry;
pub mod snapshot;
pub mod tabs;

pub use address::ContentAddress;
pub use build::{Build, build};
pub use error::{QueryError, ReferenceError, RegistryError, Result};
pub use handle::RegistryHandle;
pub use query::ExampleQuery;
pub use reference::{ExampleRef, resolve_file_name};
pub use registry::Registry;
pub use snapshot::{RegistryExport, RegistrySnapshot};
pub use tabs::CodeTab;
