//! Author-supplied scenario tables
//!
//! A table is what a content author writes for one component: an ordered
//! mapping of scenario key to `{ environment-label: source text }`. Tables
//! keep everything the author wrote, including duplicate keys and unknown
//! labels, so the loader can report them instead of losing them.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::catalog::{ComponentName, ScenarioKey};
use crate::error::{CatalogError, Result};

/// One scenario entry of an author table, bodies in author order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioEntry {
    pub scenario: ScenarioKey,
    /// `(environment label, source text)` pairs exactly as written
    pub bodies: Vec<(String, String)>,
}

/// A flattened table row: `(component, scenario, environment label, text)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub component: ComponentName,
    pub scenario: ScenarioKey,
    pub label: String,
    pub body: String,
}

/// The scenario table of one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorTable {
    component: ComponentName,
    entries: Vec<ScenarioEntry>,
}

impl AuthorTable {
    /// Create an empty table for a component
    pub fn new(component: impl Into<ComponentName>) -> Self {
        Self {
            component: component.into(),
            entries: Vec::new(),
        }
    }

    /// Append a scenario with its bodies
    pub fn scenario<I, L, B>(mut self, scenario: impl Into<ScenarioKey>, bodies: I) -> Self
    where
        I: IntoIterator<Item = (L, B)>,
        L: Into<String>,
        B: Into<String>,
    {
        self.entries.push(ScenarioEntry {
            scenario: scenario.into(),
            bodies: bodies
                .into_iter()
                .map(|(label, body)| (label.into(), body.into()))
                .collect(),
        });
        self
    }

    /// Parse a JSON table of the shape `{ "scenario": { "label": "text" } }`.
    ///
    /// Object key order is kept, and duplicate keys survive parsing.
    pub fn from_json(component: impl Into<ComponentName>, json: &str) -> Result<Self> {
        let component = component.into();
        let parsed: Entries<Entries<String>> =
            serde_json::from_str(json).map_err(|source| CatalogError::Table {
                component: component.to_string(),
                source,
            })?;

        let entries = parsed
            .into_iter()
            .map(|(scenario, bodies)| ScenarioEntry {
                scenario: scenario.into(),
                bodies: bodies.into_inner(),
            })
            .collect();

        Ok(Self { component, entries })
    }

    pub fn component(&self) -> &ComponentName {
        &self.component
    }

    pub fn entries(&self) -> &[ScenarioEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten the table into rows, preserving author order
    pub fn rows(&self) -> Vec<TableRow> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry.bodies.iter().map(|(label, body)| TableRow {
                    component: self.component.clone(),
                    scenario: entry.scenario.clone(),
                    label: label.clone(),
                    body: body.clone(),
                })
            })
            .collect()
    }
}

/// A JSON object read as an ordered list of entries, duplicates included.
///
/// Map types overwrite a repeated key while parsing; this keeps every entry
/// so the loader can report the duplicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entries<V>(Vec<(String, V)>);

impl<V> Entries<V> {
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<(String, V)> {
        self.0
    }
}

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Entries(Vec::new())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Entries<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Entries(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}

impl<V> IntoIterator for Entries<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: Serialize> Serialize for Entries<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keeps_author_order() {
        let table = AuthorTable::from_json(
            "Backdrop",
            r#"{
                "transparent": { "react": "<Backdrop transparent />" },
                "default": { "vanilla": "<div></div>", "react": "<Backdrop />" }
            }"#,
        )
        .unwrap();

        let keys: Vec<&str> = table.entries().iter().map(|e| e.scenario.as_str()).collect();
        assert_eq!(keys, vec!["transparent", "default"]);
        assert_eq!(
            table.entries()[1].bodies,
            vec![
                ("vanilla".to_string(), "<div></div>".to_string()),
                ("react".to_string(), "<Backdrop />".to_string()),
            ]
        );
    }

    #[test]
    fn test_json_keeps_duplicate_keys() {
        let table = AuthorTable::from_json(
            "Button",
            r#"{
                "default": { "react": "a", "react": "b" },
                "default": { "extjs": "c" }
            }"#,
        )
        .unwrap();

        assert_eq!(table.entries().len(), 2);
        assert_eq!(table.entries()[0].bodies.len(), 2);
    }

    #[test]
    fn test_entries_serialize_in_order() {
        let entries: Entries<String> = [("vanilla", "v".to_string()), ("react", "r".to_string())]
            .into_iter()
            .collect();

        assert_eq!(
            serde_json::to_string(&entries).unwrap(),
            r#"{"vanilla":"v","react":"r"}"#
        );
        let parsed: Entries<String> = serde_json::from_str(r#"{"react":"a","react":"b"}"#).unwrap();
        assert_eq!(parsed.keys().collect::<Vec<_>>(), vec!["react", "react"]);
    }

    #[test]
    fn test_malformed_json() {
        let err = AuthorTable::from_json("Button", r#"{ "default": "not an object" }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Table { ref component, .. } if component == "Button"));
    }

    #[test]
    fn test_rows_flatten_in_order() {
        let table = AuthorTable::new("Button")
            .scenario("default", [("react", "r"), ("vanilla", "v")])
            .scenario("primary", [("extjs", "e")]);

        let rows = table.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].scenario.as_str(), "default");
        assert_eq!(rows[1].label, "vanilla");
        assert_eq!(rows[2].scenario.as_str(), "primary");
        assert!(rows.iter().all(|row| row.component.as_str() == "Button"));
    }
}
