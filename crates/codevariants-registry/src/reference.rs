use codevariants::{ComponentName, Environment};
use std::fmt;
use std::str::FromStr;

use crate::error::ReferenceError;

/// A textual pointer to an example: `component/scenario[:environment]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleRef {
    pub component: String, // "Backdrop"
    pub scenario: String,  // "with-onclick"
    pub environment: Option<Environment>,
}

impl ExampleRef {
    pub fn new(component: impl Into<String>, scenario: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            scenario: scenario.into(),
            environment: None,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Parse reference string: component/scenario[:environment]
    ///
    /// The component is everything before the first `/`. A `:` suffix is
    /// read as an environment label, so scenario keys containing `:` need
    /// an explicit environment.
    pub fn parse(reference: &str) -> Result<Self, ReferenceError> {
        let invalid = |reason: &str| ReferenceError::InvalidFormat {
            reference: reference.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = reference.trim();
        if trimmed.is_empty() {
            return Err(invalid("Empty reference"));
        }

        let (component, rest) = trimmed
            .split_once('/')
            .ok_or_else(|| invalid("Expected component/scenario"))?;

        let (scenario, environment) = match rest.rsplit_once(':') {
            Some((scenario, label)) => {
                let label = label.trim();
                if label.is_empty() {
                    return Err(invalid("Empty environment"));
                }
                let environment = Environment::from_label(label).ok_or_else(|| {
                    ReferenceError::UnknownEnvironment {
                        reference: reference.to_string(),
                        label: label.to_string(),
                    }
                })?;
                (scenario, Some(environment))
            }
            None => (rest, None),
        };

        let (component, scenario) = (component.trim(), scenario.trim());
        if component.is_empty() {
            return Err(invalid("Empty component"));
        }
        if scenario.is_empty() {
            return Err(invalid("Empty scenario"));
        }

        Ok(ExampleRef {
            component: component.to_string(),
            scenario: scenario.to_string(),
            environment,
        })
    }
}

impl FromStr for ExampleRef {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExampleRef::parse(s)
    }
}

impl fmt::Display for ExampleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.component, self.scenario)?;
        if let Some(environment) = self.environment {
            write!(f, ":{environment}")?;
        }
        Ok(())
    }
}

const SOURCE_EXTENSIONS: [&str; 4] = [".tsx", ".ts", ".jsx", ".js"];

/// Resolve an example file name against known components.
///
/// `button-group-with-segmented-buttons.tsx` resolves to component
/// `ButtonGroup` (or `button-group`) and scenario `with-segmented-buttons`.
/// Component names are compared in kebab case; the longest match wins and
/// must be followed by `-` and a non-empty scenario.
pub fn resolve_file_name<'a, I>(file_name: &str, components: I) -> Option<ExampleRef>
where
    I: IntoIterator<Item = &'a ComponentName>,
{
    let stem = SOURCE_EXTENSIONS
        .iter()
        .find_map(|ext| file_name.strip_suffix(ext))
        .unwrap_or(file_name);
    let lowered = stem.to_ascii_lowercase();

    let (component, prefix_len) = components
        .into_iter()
        .filter_map(|component| {
            let prefix = kebab_case(component.as_str());
            let rest = lowered.strip_prefix(&prefix)?.strip_prefix('-')?;
            (!rest.is_empty()).then_some((component, prefix.len()))
        })
        .max_by_key(|(_, len)| *len)?;

    Some(ExampleRef::new(component.as_str(), &stem[prefix_len + 1..]))
}

/// `ButtonGroup`, `button_group` and `Button Group` all become `button-group`
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.chars() {
        if c == '_' || c == ' ' || c == '-' {
            if !out.ends_with('-') && !out.is_empty() {
                out.push('-');
            }
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    out
}
