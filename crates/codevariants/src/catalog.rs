//! Scenario records and per-component catalogs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::environment::Environment;

/// Name of a documented UI component, e.g. `Backdrop`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ComponentName(pub String);

/// Name of one usage scenario within a component, e.g. `with-onclick`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ScenarioKey(pub String);

macro_rules! string_newtype {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_newtype!(ComponentName);
string_newtype!(ScenarioKey);

/// One usage scenario of one component, with at most one body per environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioRecord {
    pub component: ComponentName,
    pub scenario: ScenarioKey,
    /// Source text per environment, stored exactly as authored
    pub bodies: BTreeMap<Environment, String>,
}

impl ScenarioRecord {
    pub(crate) fn new(component: ComponentName, scenario: ScenarioKey) -> Self {
        Self {
            component,
            scenario,
            bodies: BTreeMap::new(),
        }
    }

    /// Body text for an environment, if one was authored
    pub fn body(&self, environment: Environment) -> Option<&str> {
        self.bodies.get(&environment).map(String::as_str)
    }

    pub fn has_body(&self, environment: Environment) -> bool {
        self.bodies.contains_key(&environment)
    }

    /// Environments with a body, in display order
    pub fn environments(&self) -> impl Iterator<Item = Environment> + '_ {
        self.bodies.keys().copied()
    }

    /// Environments without a body, in display order
    pub fn missing_environments(&self) -> Vec<Environment> {
        Environment::ALL
            .into_iter()
            .filter(|env| !self.bodies.contains_key(env))
            .collect()
    }

    /// Whether every environment has a body
    pub fn is_complete(&self) -> bool {
        self.bodies.len() == Environment::ALL.len()
    }
}

/// All scenarios of one component, in author order.
///
/// Catalogs are only built by [`CatalogLoader`](crate::CatalogLoader); once
/// built they expose no mutation. Equality is structural and includes
/// scenario order.
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    component: ComponentName,
    scenarios: IndexMap<ScenarioKey, ScenarioRecord>,
}

impl PartialEq for ComponentCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.component == other.component && self.scenarios.iter().eq(other.scenarios.iter())
    }
}

impl Eq for ComponentCatalog {}

impl ComponentCatalog {
    pub(crate) fn new(component: ComponentName) -> Self {
        Self {
            component,
            scenarios: IndexMap::new(),
        }
    }

    pub(crate) fn scenario_mut(&mut self, key: &str) -> Option<&mut ScenarioRecord> {
        self.scenarios.get_mut(key)
    }

    /// Append a scenario; returns `false` if the key is already present
    pub(crate) fn push(&mut self, record: ScenarioRecord) -> bool {
        if self.scenarios.contains_key(&record.scenario) {
            return false;
        }
        self.scenarios.insert(record.scenario.clone(), record);
        true
    }

    pub fn component(&self) -> &ComponentName {
        &self.component
    }

    pub fn scenario(&self, key: &str) -> Option<&ScenarioRecord> {
        self.scenarios.get(key)
    }

    /// Scenario keys in author order
    pub fn scenario_keys(&self) -> impl Iterator<Item = &ScenarioKey> + '_ {
        self.scenarios.keys()
    }

    /// Scenario records in author order
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioRecord> + '_ {
        self.scenarios.values()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Total number of authored bodies across all scenarios
    pub fn body_count(&self) -> usize {
        self.scenarios.values().map(|s| s.bodies.len()).sum()
    }
}
