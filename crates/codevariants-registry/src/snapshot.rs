//! Plain nested-map form of a registry, for export and re-import

use codevariants::{AuthorTable, Entries, ValidationMode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::address::ContentAddress;
use crate::build::build;
use crate::error::{RegistryError, Result};
use crate::registry::Registry;

/// `component -> scenario -> environment label -> source text`, in
/// publication, author and display order respectively.
///
/// Repeated keys in snapshot JSON are kept, so restoring reports them as
/// duplicate components or scenarios.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrySnapshot(Entries<Entries<Entries<String>>>);

impl RegistrySnapshot {
    pub fn of(registry: &Registry) -> Self {
        let components = registry
            .catalogs()
            .map(|catalog| {
                let scenarios: Entries<Entries<String>> = catalog
                    .scenarios()
                    .map(|record| {
                        let bodies: Entries<String> = record
                            .bodies
                            .iter()
                            .map(|(environment, body)| (environment.label().to_string(), body.clone()))
                            .collect();
                        (record.scenario.to_string(), bodies)
                    })
                    .collect();
                (catalog.component().to_string(), scenarios)
            })
            .collect();

        RegistrySnapshot(components)
    }

    /// Component names in snapshot order
    pub fn components(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One author table per component, as if the content had been written
    /// out by hand
    pub fn into_tables(self) -> Vec<AuthorTable> {
        self.0
            .into_iter()
            .map(|(component, scenarios)| {
                scenarios
                    .into_iter()
                    .fold(AuthorTable::new(component), |table, (scenario, bodies)| {
                        table.scenario(scenario, bodies.into_inner())
                    })
            })
            .collect()
    }

    /// Rebuild a registry, validating the content again under `mode`
    pub fn restore(self, mode: ValidationMode) -> Result<Registry> {
        let tables = self.into_tables();
        Ok(build(&tables, mode)?.registry)
    }
}

impl Registry {
    pub fn to_snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot::of(self)
    }

    pub fn from_snapshot(snapshot: RegistrySnapshot, mode: ValidationMode) -> Result<Registry> {
        snapshot.restore(mode)
    }
}

/// A snapshot with its publication time and fingerprint, as written by
/// `codevariants export`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryExport {
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,

    /// `sha256:<hex>` of the exported content
    pub fingerprint: String,

    pub components: RegistrySnapshot,
}

impl RegistryExport {
    pub fn of(registry: &Registry) -> Self {
        Self {
            published_at: registry.published_at(),
            fingerprint: registry.fingerprint().to_string(),
            components: registry.to_snapshot(),
        }
    }

    /// Serialize export to JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(RegistryError::Serialization)
    }

    /// Deserialize export from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let export: RegistryExport = serde_json::from_slice(bytes)?;

        // Re-validate after deserialization
        export.validate()?;

        Ok(export)
    }

    pub fn validate(&self) -> Result<()> {
        if !ContentAddress::is_valid_hash(&self.fingerprint) {
            return Err(RegistryError::InvalidFingerprint(self.fingerprint.clone()));
        }
        Ok(())
    }

    /// Rebuild the exported registry.
    ///
    /// The rebuilt content must hash to the recorded fingerprint; the
    /// original publication time is kept.
    pub fn restore(self, mode: ValidationMode) -> Result<Registry> {
        self.validate()?;

        let registry = self.components.restore(mode)?;
        if registry.fingerprint() != self.fingerprint {
            return Err(RegistryError::FingerprintMismatch {
                expected: self.fingerprint,
                actual: registry.fingerprint().to_string(),
            });
        }

        Ok(registry.with_published_at(self.published_at))
    }
}
