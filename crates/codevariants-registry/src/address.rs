use sha2::{Digest, Sha256};

use codevariants::ComponentCatalog;

/// Content fingerprints using SHA-256 hashing, rendered as `sha256:<hex>`
pub struct ContentAddress;

impl ContentAddress {
    /// Fingerprint an ordered set of catalogs.
    ///
    /// Every component name, scenario key, environment label and body is
    /// fed length-prefixed, so the result changes with content and with
    /// order, and never depends on publication time.
    pub fn of_catalogs<'a, I>(catalogs: I) -> String
    where
        I: IntoIterator<Item = &'a ComponentCatalog>,
    {
        let mut hasher = Sha256::new();
        let mut field = |bytes: &[u8]| {
            hasher.update((bytes.len() as u64).to_le_bytes());
            hasher.update(bytes);
        };

        for catalog in catalogs {
            field(b"component");
            field(catalog.component().as_str().as_bytes());
            for record in catalog.scenarios() {
                field(b"scenario");
                field(record.scenario.as_str().as_bytes());
                for (environment, body) in &record.bodies {
                    field(environment.label().as_bytes());
                    field(body.as_bytes());
                }
            }
        }

        format!("sha256:{:x}", hasher.finalize())
    }

    /// Validate that a hash string has the correct format
    pub fn is_valid_hash(hash: &str) -> bool {
        let Some(hash_value) = hash.strip_prefix("sha256:") else {
            return false;
        };

        // SHA-256 produces 64 hex characters
        hash_value.len() == 64 && hash_value.chars().all(|c| c.is_ascii_hexdigit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codevariants::load_triples;

    #[test]
    fn test_empty_registry_fingerprint() {
        // SHA-256 of no input
        assert_eq!(
            ContentAddress::of_catalogs(std::iter::empty::<&ComponentCatalog>()),
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_catalog_fingerprint_is_stable() {
        let catalog = load_triples("Backdrop", [("default", "react", "<Backdrop />")]).unwrap();
        let first = ContentAddress::of_catalogs([&catalog]);
        let second = ContentAddress::of_catalogs([&catalog.clone()]);

        assert_eq!(first, second);
        assert!(ContentAddress::is_valid_hash(&first));
    }

    #[test]
    fn test_catalog_fingerprint_tracks_content_and_order() {
        let a = load_triples("Backdrop", [("default", "react", "<Backdrop />")]).unwrap();
        let b = load_triples("Backdrop", [("default", "react", "<Backdrop transparent />")]).unwrap();
        let c = load_triples("Spinner", [("default", "react", "<Spinner />")]).unwrap();

        assert_ne!(ContentAddress::of_catalogs([&a]), ContentAddress::of_catalogs([&b]));
        assert_ne!(
            ContentAddress::of_catalogs([&a, &c]),
            ContentAddress::of_catalogs([&c, &a])
        );
    }

    #[test]
    fn test_hash_validation() {
        let valid_hash = "sha256:".to_string() + &"a".repeat(64);
        assert!(ContentAddress::is_valid_hash(&valid_hash));

        assert!(!ContentAddress::is_valid_hash(&"a".repeat(64)));
        assert!(!ContentAddress::is_valid_hash("sha256:abc123"));
        assert!(!ContentAddress::is_valid_hash(
            &("sha256:".to_string() + &"g".repeat(64))
        ));
    }
}
