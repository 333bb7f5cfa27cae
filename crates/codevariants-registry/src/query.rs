//! Read-only query interface for the documentation renderer

use codevariants::{ComponentCatalog, ComponentName, Environment, ScenarioKey, ScenarioRecord};

use crate::error::QueryError;
use crate::reference::{ExampleRef, resolve_file_name};
use crate::registry::Registry;
use crate::tabs::CodeTab;

/// Everything a renderer may ask of the registry.
///
/// All methods are pure reads. Any `(component, scenario)` pair returned by
/// [`list_scenarios`](ExampleQuery::list_scenarios) resolves through
/// [`get_scenario`](ExampleQuery::get_scenario).
pub trait ExampleQuery {
    /// Look up a component catalog
    fn catalog_of(&self, component: &str) -> Result<&ComponentCatalog, QueryError>;

    /// Component names in publication order
    fn list_components(&self) -> Vec<&ComponentName>;

    /// Scenario keys of a component in author order
    fn list_scenarios(&self, component: &str) -> Result<Vec<&ScenarioKey>, QueryError> {
        Ok(self.catalog_of(component)?.scenario_keys().collect())
    }

    /// One scenario of one component
    fn get_scenario(&self, component: &str, scenario: &str) -> Result<&ScenarioRecord, QueryError> {
        let catalog = self.catalog_of(component)?;
        catalog
            .scenario(scenario)
            .ok_or_else(|| QueryError::UnknownScenario {
                component: catalog.component().to_string(),
                scenario: scenario.to_string(),
            })
    }

    /// Source text of one scenario for one environment, exactly as authored
    fn get_body(
        &self,
        component: &str,
        scenario: &str,
        environment: Environment,
    ) -> Result<&str, QueryError> {
        let record = self.get_scenario(component, scenario)?;
        record
            .body(environment)
            .ok_or_else(|| QueryError::MissingBody {
                component: record.component.to_string(),
                scenario: record.scenario.to_string(),
                environment,
            })
    }

    /// Code tabs for a scenario, in environment display order.
    ///
    /// Environments without a body get no tab.
    fn code_tabs(&self, component: &str, scenario: &str) -> Result<Vec<CodeTab<'_>>, QueryError> {
        let record = self.get_scenario(component, scenario)?;
        Ok(CodeTab::for_record(record))
    }

    /// Map an example file name such as `button-group-with-icons.tsx` to a
    /// reference, matching the longest registered component prefix.
    fn resolve_example_file(&self, file_name: &str) -> Option<ExampleRef> {
        resolve_file_name(file_name, self.list_components())
    }
}

impl ExampleQuery for Registry {
    fn catalog_of(&self, component: &str) -> Result<&ComponentCatalog, QueryError> {
        self.catalog(component)
            .ok_or_else(|| QueryError::UnknownComponent {
                component: component.to_string(),
            })
    }

    fn list_components(&self) -> Vec<&ComponentName> {
        self.catalogs().map(ComponentCatalog::component).collect()
    }
}
