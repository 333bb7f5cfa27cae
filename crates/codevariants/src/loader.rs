//! Turning author tables into component catalogs

use tracing::debug;

use crate::catalog::{ComponentCatalog, ComponentName, ScenarioKey, ScenarioRecord};
use crate::environment::Environment;
use crate::error::{CatalogError, NameKind, Result};
use crate::table::{AuthorTable, ScenarioEntry, TableRow};

/// Builds [`ComponentCatalog`]s from author tables.
///
/// The loader reports every problem of a table at once: duplicate scenarios,
/// duplicate or unknown environment labels and malformed names. Unknown
/// labels are never dropped. Body text is not inspected here; empty bodies
/// are the validator's concern.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load one component table
    pub fn load_table(&self, table: &AuthorTable) -> Result<ComponentCatalog> {
        self.load_entries(table.component(), table.entries())
    }

    /// Load flattened `(component, scenario, label, text)` rows.
    ///
    /// Consecutive rows of the same scenario form one scenario; a scenario
    /// key that comes back after another scenario started is a duplicate.
    pub fn load_rows<I>(&self, component: impl Into<ComponentName>, rows: I) -> Result<ComponentCatalog>
    where
        I: IntoIterator<Item = TableRow>,
    {
        let component = component.into();
        let mut errors = Vec::new();
        let mut entries: Vec<ScenarioEntry> = Vec::new();

        for row in rows {
            if row.component != component {
                errors.push(CatalogError::ComponentMismatch {
                    expected: component.to_string(),
                    found: row.component.to_string(),
                });
                continue;
            }

            match entries.last_mut() {
                Some(last) if last.scenario == row.scenario => {
                    last.bodies.push((row.label, row.body));
                }
                _ => entries.push(ScenarioEntry {
                    scenario: row.scenario,
                    bodies: vec![(row.label, row.body)],
                }),
            }
        }

        let loaded = self.load_entries(&component, &entries);
        if errors.is_empty() {
            return loaded;
        }
        if let Err(err) = loaded {
            errors.extend(err.into_issues());
        }
        Err(CatalogError::from_issues(errors))
    }

    fn load_entries(
        &self,
        component: &ComponentName,
        entries: &[ScenarioEntry],
    ) -> Result<ComponentCatalog> {
        let mut errors = Vec::new();

        if let Err(err) = check_name(NameKind::Component, component.as_str()) {
            errors.push(err);
        }

        let mut catalog = ComponentCatalog::new(component.clone());

        for entry in entries {
            if let Err(err) = check_name(NameKind::Scenario, entry.scenario.as_str()) {
                errors.push(err);
                continue;
            }

            let record = ScenarioRecord::new(component.clone(), entry.scenario.clone());
            if !catalog.push(record) {
                errors.push(CatalogError::DuplicateScenario {
                    component: component.to_string(),
                    scenario: entry.scenario.to_string(),
                });
                continue;
            }

            let Some(record) = catalog.scenario_mut(entry.scenario.as_str()) else {
                continue;
            };
            for (label, body) in &entry.bodies {
                insert_body(record, label, body, &mut errors);
            }
        }

        CatalogError::collect(errors)?;

        debug!(
            component = %component,
            scenarios = catalog.len(),
            bodies = catalog.body_count(),
            "loaded component table"
        );
        Ok(catalog)
    }
}

fn insert_body(
    record: &mut ScenarioRecord,
    label: &str,
    body: &str,
    errors: &mut Vec<CatalogError>,
) {
    let Some(environment) = Environment::from_label(label) else {
        errors.push(CatalogError::UnknownEnvironment {
            component: record.component.to_string(),
            scenario: record.scenario.to_string(),
            label: label.to_string(),
        });
        return;
    };

    if record.bodies.contains_key(&environment) {
        errors.push(CatalogError::DuplicateEnvironment {
            component: record.component.to_string(),
            scenario: record.scenario.to_string(),
            environment,
        });
        return;
    }

    record.bodies.insert(environment, body.to_string());
}

fn check_name(kind: NameKind, name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        "name cannot be empty"
    } else if name.trim() != name {
        "name cannot start or end with whitespace"
    } else {
        return Ok(());
    };

    Err(CatalogError::InvalidName {
        kind,
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

/// Convenience for building a catalog straight from `(scenario, label, text)` triples
pub fn load_triples<'a, I>(component: impl Into<ComponentName>, triples: I) -> Result<ComponentCatalog>
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
{
    let component = component.into();
    let rows = triples
        .into_iter()
        .map(|(scenario, label, body)| TableRow {
            component: component.clone(),
            scenario: ScenarioKey::from(scenario),
            label: label.to_string(),
            body: body.to_string(),
        })
        .collect::<Vec<_>>();
    CatalogLoader::new().load_rows(component, rows)
}
