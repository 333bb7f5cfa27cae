//! The published, immutable registry of component catalogs

use codevariants::{CatalogError, ComponentCatalog, ComponentName, Validated};
use indexmap::IndexMap;
use std::collections::HashMap;
use time::OffsetDateTime;
use tracing::info;

use crate::address::ContentAddress;
use crate::error::Result;

/// An immutable snapshot of every validated component catalog.
///
/// A registry is only created by [`Registry::publish`] and never changes
/// afterwards; a content change produces a new registry. Components keep
/// the order they were published in, and component lookup ignores ASCII
/// case.
#[derive(Debug, Clone)]
pub struct Registry {
    catalogs: IndexMap<ComponentName, ComponentCatalog>,
    /// Lowercased component name -> position in `catalogs`
    index: HashMap<String, usize>,
    published_at: OffsetDateTime,
    fingerprint: String,
}

impl Registry {
    /// Build a new registry from a batch of validated catalogs.
    ///
    /// Only [`Validated`] catalogs are accepted, so a blank body can never be
    /// served. Fails with every duplicated component name (compared ignoring
    /// ASCII case) if the batch names a component more than once.
    ///
    /// ```compile_fail
    /// use codevariants::load_triples;
    /// use codevariants_registry::Registry;
    ///
    /// let catalog = load_triples("Backdrop", [("default", "react", "   ")]).unwrap();
    /// Registry::publish([catalog]);
    /// ```
    pub fn publish<I>(catalogs: I) -> Result<Registry>
    where
        I: IntoIterator<Item = Validated>,
    {
        let mut map = IndexMap::new();
        let mut index = HashMap::new();
        let mut errors = Vec::new();

        for validated in catalogs {
            let catalog = validated.into_catalog();
            let key = lookup_key(catalog.component().as_str());
            if index.contains_key(&key) {
                errors.push(CatalogError::DuplicateComponent {
                    component: catalog.component().to_string(),
                });
                continue;
            }
            index.insert(key, map.len());
            map.insert(catalog.component().clone(), catalog);
        }

        CatalogError::collect(errors)?;

        let fingerprint = ContentAddress::of_catalogs(map.values());
        let registry = Registry {
            catalogs: map,
            index,
            published_at: OffsetDateTime::now_utc(),
            fingerprint,
        };

        info!(
            components = registry.len(),
            scenarios = registry.scenario_count(),
            fingerprint = %registry.fingerprint,
            "published registry"
        );
        Ok(registry)
    }

    /// An empty registry, useful as the initial current snapshot
    pub fn empty() -> Registry {
        Registry {
            catalogs: IndexMap::new(),
            index: HashMap::new(),
            published_at: OffsetDateTime::now_utc(),
            fingerprint: ContentAddress::of_catalogs(std::iter::empty()),
        }
    }

    /// Look up a catalog by component name, ignoring ASCII case
    pub fn catalog(&self, component: &str) -> Option<&ComponentCatalog> {
        let position = *self.index.get(&lookup_key(component))?;
        self.catalogs.get_index(position).map(|(_, catalog)| catalog)
    }

    /// Catalogs in publication order
    pub fn catalogs(&self) -> impl Iterator<Item = &ComponentCatalog> + '_ {
        self.catalogs.values()
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Number of scenarios across all components
    pub fn scenario_count(&self) -> usize {
        self.catalogs.values().map(ComponentCatalog::len).sum()
    }

    /// When this registry was published
    pub fn published_at(&self) -> OffsetDateTime {
        self.published_at
    }

    /// Carry over the publication time of an exported registry
    pub(crate) fn with_published_at(mut self, published_at: OffsetDateTime) -> Registry {
        self.published_at = published_at;
        self
    }

    /// `sha256:` fingerprint of the registry content
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

/// Structural equality: same components, scenarios and bodies in the same
/// order. Publication time is ignored.
impl PartialEq for Registry {
    fn eq(&self, other: &Self) -> bool {
        self.catalogs.iter().eq(other.catalogs.iter())
    }
}

impl Eq for Registry {}

pub(crate) fn lookup_key(component: &str) -> String {
    component.to_ascii_lowercase()
}
