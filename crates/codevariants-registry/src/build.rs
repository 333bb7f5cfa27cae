//! Load, validate and publish a whole content set in one pass

use codevariants::{AuthorTable, CatalogError, CatalogLoader, CoverageGap, ValidationMode, Validator};
use std::collections::HashSet;
use tracing::{error, info};

use crate::error::Result;
use crate::registry::{Registry, lookup_key};

/// A freshly published registry and the coverage gaps tolerated on the way
#[derive(Debug, Clone)]
pub struct Build {
    pub registry: Registry,
    pub warnings: Vec<CoverageGap>,
}

/// Build a registry from author tables.
///
/// Every table is loaded and validated even after a failure, so the error
/// lists every structural problem across all components, duplicated
/// component names included. Nothing is published unless all tables pass.
pub fn build<'a, I>(tables: I, mode: ValidationMode) -> Result<Build>
where
    I: IntoIterator<Item = &'a AuthorTable>,
{
    let loader = CatalogLoader::new();
    let validator = Validator::new(mode);

    let mut seen = HashSet::new();
    let mut issues = Vec::new();
    let mut catalogs = Vec::new();
    let mut warnings = Vec::new();

    for table in tables {
        if !seen.insert(lookup_key(table.component().as_str())) {
            issues.push(CatalogError::DuplicateComponent {
                component: table.component().to_string(),
            });
        }

        match loader
            .load_table(table)
            .and_then(|catalog| validator.validate(catalog))
        {
            Ok(validated) => {
                warnings.extend_from_slice(validated.warnings());
                catalogs.push(validated);
            }
            Err(err) => issues.extend(err.into_issues()),
        }
    }

    if !issues.is_empty() {
        error!(problems = issues.len(), %mode, "catalog content rejected");
        return Err(CatalogError::from_issues(issues).into());
    }

    let registry = Registry::publish(catalogs)?;
    info!(warnings = warnings.len(), %mode, "build finished");

    Ok(Build { registry, warnings })
}
