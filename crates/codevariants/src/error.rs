//! Error types for catalog loading and validation
//!
//! Every structural problem found while turning author tables into catalogs is
//! a [`CatalogError`]. Loads do not stop at the first problem: when a table
//! has several, they are returned together as [`CatalogError::Multiple`] so
//! authors can fix every gap in one pass.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::environment::Environment;

/// Structural and completeness errors raised by the loader, the validator
/// and registry publication.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The same scenario key appears twice in one component table
    #[error("duplicate scenario '{scenario}' in component '{component}'")]
    DuplicateScenario { component: String, scenario: String },

    /// Two catalogs declare the same component name
    #[error("duplicate component '{component}'")]
    DuplicateComponent { component: String },

    /// A scenario supplies two bodies for the same environment
    #[error("duplicate '{environment}' body in {component}/{scenario}")]
    DuplicateEnvironment {
        component: String,
        scenario: String,
        environment: Environment,
    },

    /// An environment label outside the closed environment set
    #[error("unknown environment '{label}' in {component}/{scenario}")]
    UnknownEnvironment {
        component: String,
        scenario: String,
        label: String,
    },

    /// A present body that is empty or whitespace only
    #[error("empty '{environment}' body in {component}/{scenario}")]
    EmptyContent {
        component: String,
        scenario: String,
        environment: Environment,
    },

    /// Strict mode: a scenario lacks bodies for some environments
    #[error("{component}/{scenario} is missing {}", EnvironmentList(.missing))]
    MissingEnvironment {
        component: String,
        scenario: String,
        missing: Vec<Environment>,
    },

    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: NameKind,
        name: String,
        reason: String,
    },

    /// A row declares a component other than the one being loaded
    #[error("row for component '{found}' in table of '{expected}'")]
    ComponentMismatch { expected: String, found: String },

    /// An author table could not be parsed
    #[error("malformed table for component '{component}': {source}")]
    Table {
        component: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every problem found by one load, validation or build
    #[error("{} problem(s) in catalog content:\n{}", .0.len(), IssueList(.0))]
    Multiple(Vec<CatalogError>),
}

/// Which kind of identifier an [`CatalogError::InvalidName`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Component,
    Scenario,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Component => write!(f, "component"),
            NameKind::Scenario => write!(f, "scenario"),
        }
    }
}

impl CatalogError {
    /// Fold a list of problems into a single error.
    ///
    /// Returns `Ok(())` for an empty list, the error itself for a single
    /// problem and [`CatalogError::Multiple`] otherwise.
    pub fn collect(errors: Vec<CatalogError>) -> std::result::Result<(), CatalogError> {
        if errors.is_empty() {
            return Ok(());
        }
        Err(CatalogError::from_issues(errors))
    }

    /// Build one error out of a non-empty list of problems
    pub fn from_issues(mut errors: Vec<CatalogError>) -> CatalogError {
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            CatalogError::Multiple(errors)
        }
    }

    /// Every individual problem carried by this error, nested lists flattened
    pub fn issues(&self) -> Vec<&CatalogError> {
        match self {
            CatalogError::Multiple(errors) => errors.iter().flat_map(|e| e.issues()).collect(),
            other => vec![other],
        }
    }

    /// Consume the error into its individual problems
    pub fn into_issues(self) -> Vec<CatalogError> {
        match self {
            CatalogError::Multiple(errors) => {
                errors.into_iter().flat_map(|e| e.into_issues()).collect()
            }
            other => vec![other],
        }
    }

    /// `(scenario, environment)` pairs named by strict-mode completeness errors
    pub fn missing_pairs(&self) -> Vec<(&str, Environment)> {
        self.issues()
            .into_iter()
            .filter_map(|issue| match issue {
                CatalogError::MissingEnvironment {
                    scenario, missing, ..
                } => Some(missing.iter().map(move |env| (scenario.as_str(), *env))),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

struct EnvironmentList<'a>(&'a [Environment]);

impl fmt::Display for EnvironmentList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, env) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{env}")?;
        }
        Ok(())
    }
}

struct IssueList<'a>(&'a [CatalogError]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {issue}")?;
        }
        Ok(())
    }
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn duplicate(scenario: &str) -> CatalogError {
        CatalogError::DuplicateScenario {
            component: "Button".into(),
            scenario: scenario.into(),
        }
    }

    #[test]
    fn test_collect_shapes() {
        assert!(CatalogError::collect(Vec::new()).is_ok());

        let single = CatalogError::collect(vec![duplicate("default")]).unwrap_err();
        assert!(matches!(single, CatalogError::DuplicateScenario { .. }));

        let many = CatalogError::collect(vec![duplicate("a"), duplicate("b")]).unwrap_err();
        assert!(matches!(many, CatalogError::Multiple(ref v) if v.len() == 2));
    }

    #[test]
    fn test_issues_flatten_nested_lists() {
        let nested = CatalogError::Multiple(vec![
            duplicate("a"),
            CatalogError::Multiple(vec![duplicate("b"), duplicate("c")]),
        ]);
        assert_eq!(nested.issues().len(), 3);
        assert_eq!(nested.into_issues().len(), 3);
    }

    #[test]
    fn test_multiple_lists_every_issue() {
        let err = CatalogError::Multiple(vec![
            duplicate("a"),
            CatalogError::MissingEnvironment {
                component: "Button".into(),
                scenario: "b".into(),
                missing: vec![Environment::LegacyWidgetToolkit, Environment::TypedScripting],
            },
        ]);
        let text = err.to_string();
        assert!(text.starts_with("2 problem(s)"));
        assert!(text.contains("duplicate scenario 'a'"));
        assert!(text.contains("Button/b is missing legacy-widget-toolkit, typed-scripting"));
    }

    #[test]
    fn test_missing_pairs() {
        let err = CatalogError::MissingEnvironment {
            component: "Backdrop".into(),
            scenario: "default".into(),
            missing: vec![Environment::LegacyWidgetToolkit],
        };
        assert_eq!(
            err.missing_pairs(),
            vec![("default", Environment::LegacyWidgetToolkit)]
        );
    }
}
