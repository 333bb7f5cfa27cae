//! The process-wide "current registry" pointer

use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::registry::Registry;

/// Shared pointer to the current published registry.
///
/// Readers take an `Arc<Registry>` and keep a consistent snapshot for as
/// long as they hold it; a rebuild swaps in a new registry without locking
/// or disturbing them.
#[derive(Debug)]
pub struct RegistryHandle {
    current: ArcSwap<Registry>,
}

impl RegistryHandle {
    pub fn new(registry: Registry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
        }
    }

    /// The registry readers should use right now
    pub fn current(&self) -> Arc<Registry> {
        self.current.load_full()
    }

    /// Install a new registry, returning the one it replaced
    pub fn swap(&self, registry: Registry) -> Arc<Registry> {
        let next = Arc::new(registry);
        info!(fingerprint = %next.fingerprint(), "swapping current registry");
        self.current.swap(next)
    }

    /// Install `registry` unless the current one has the same fingerprint.
    ///
    /// Returns the replaced registry, or `None` when nothing changed.
    pub fn replace_if_changed(&self, registry: Registry) -> Option<Arc<Registry>> {
        let next = Arc::new(registry);

        loop {
            let cur = self.current.load_full();
            if cur.fingerprint() == next.fingerprint() {
                debug!(fingerprint = %cur.fingerprint(), "registry unchanged, keeping current");
                return None;
            }

            let prev = self.current.compare_and_swap(&cur, Arc::clone(&next));
            if Arc::ptr_eq(&prev, &cur) {
                info!(
                    previous = %cur.fingerprint(),
                    fingerprint = %next.fingerprint(),
                    "replaced current registry"
                );
                return Some(cur);
            }
        }
    }
}

impl Default for RegistryHandle {
    fn default() -> Self {
        Self::new(Registry::empty())
    }
}
