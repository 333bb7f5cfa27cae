//! Structural validation and completeness policy for loaded catalogs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::catalog::{ComponentCatalog, ComponentName, ScenarioKey};
use crate::environment::Environment;
use crate::error::{CatalogError, Result};

/// How incomplete environment coverage is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Every scenario must supply every environment. Used as a release gate.
    #[default]
    Strict,
    /// Gaps are recorded as warnings. Used while editing content.
    Lenient,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "strict"),
            ValidationMode::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ValidationMode::Strict),
            "lenient" => Ok(ValidationMode::Lenient),
            other => Err(format!("unknown validation mode '{other}' (expected strict or lenient)")),
        }
    }
}

/// A `(component, scenario, environment)` triple with no body
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoverageGap {
    pub component: ComponentName,
    pub scenario: ScenarioKey,
    pub environment: Environment,
}

impl fmt::Display for CoverageGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: no {} body", self.component, self.scenario, self.environment)
    }
}

/// A catalog that passed validation, with any lenient-mode gaps.
///
/// Only [`Validator::validate`] creates one, so holding a `Validated` means
/// every present body is non-blank.
#[derive(Debug, Clone)]
pub struct Validated {
    catalog: ComponentCatalog,
    warnings: Vec<CoverageGap>,
}

impl Validated {
    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    pub fn warnings(&self) -> &[CoverageGap] {
        &self.warnings
    }

    pub fn into_catalog(self) -> ComponentCatalog {
        self.catalog
    }

    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Checks catalogs before they are published
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    mode: ValidationMode,
}

impl Validator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(ValidationMode::Lenient)
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validate a freshly loaded catalog.
    ///
    /// Empty or whitespace-only bodies are errors in both modes. Missing
    /// environments fail in strict mode and become warnings in lenient mode.
    /// On failure every problem of the catalog is returned together.
    pub fn validate(&self, catalog: ComponentCatalog) -> Result<Validated> {
        let component = catalog.component().to_string();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for record in catalog.scenarios() {
            for (environment, body) in &record.bodies {
                if body.trim().is_empty() {
                    errors.push(CatalogError::EmptyContent {
                        component: component.clone(),
                        scenario: record.scenario.to_string(),
                        environment: *environment,
                    });
                }
            }

            let missing = record.missing_environments();
            if missing.is_empty() {
                continue;
            }

            match self.mode {
                ValidationMode::Strict => errors.push(CatalogError::MissingEnvironment {
                    component: component.clone(),
                    scenario: record.scenario.to_string(),
                    missing,
                }),
                ValidationMode::Lenient => {
                    warnings.extend(missing.into_iter().map(|environment| CoverageGap {
                        component: record.component.clone(),
                        scenario: record.scenario.clone(),
                        environment,
                    }))
                }
            }
        }

        CatalogError::collect(errors)?;

        for gap in &warnings {
            warn!(
                component = %gap.component,
                scenario = %gap.scenario,
                environment = %gap.environment,
                "example has no body for environment"
            );
        }
        debug!(
            component = %component,
            mode = %self.mode,
            gaps = warnings.len(),
            "catalog validated"
        );

        Ok(Validated { catalog, warnings })
    }
}
