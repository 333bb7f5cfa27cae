//! The closed set of target environments an example can be written for

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A target environment for example source text.
///
/// The set is closed: adding an environment is a schema change, not a data
/// change. Variants are declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    /// Component-oriented UI framework (React)
    #[serde(alias = "react")]
    PrimaryFramework,
    /// Plain scripting with HTML (vanilla JavaScript)
    #[serde(alias = "vanilla")]
    PlainScripting,
    /// Legacy enterprise widget toolkit (ExtJS)
    #[serde(alias = "extjs")]
    LegacyWidgetToolkit,
    /// Statically typed scripting (TypeScript)
    #[serde(alias = "typescript")]
    TypedScripting,
}

impl Environment {
    /// Every environment, in display order
    pub const ALL: [Environment; 4] = [
        Environment::PrimaryFramework,
        Environment::PlainScripting,
        Environment::LegacyWidgetToolkit,
        Environment::TypedScripting,
    ];

    /// Canonical label, as used in serialized snapshots
    pub fn label(self) -> &'static str {
        match self {
            Environment::PrimaryFramework => "primary-framework",
            Environment::PlainScripting => "plain-scripting",
            Environment::LegacyWidgetToolkit => "legacy-widget-toolkit",
            Environment::TypedScripting => "typed-scripting",
        }
    }

    /// Short label used by authors in content tables
    pub fn alias(self) -> &'static str {
        match self {
            Environment::PrimaryFramework => "react",
            Environment::PlainScripting => "vanilla",
            Environment::LegacyWidgetToolkit => "extjs",
            Environment::TypedScripting => "typescript",
        }
    }

    /// Tab title shown by the documentation renderer
    pub fn title(self) -> &'static str {
        match self {
            Environment::PrimaryFramework => "React",
            Environment::PlainScripting => "Vanilla",
            Environment::LegacyWidgetToolkit => "ExtJS",
            Environment::TypedScripting => "TS",
        }
    }

    /// Syntax-highlighting language hint for the body text
    pub fn language(self) -> &'static str {
        match self {
            Environment::PrimaryFramework => "jsx",
            Environment::PlainScripting => "html",
            Environment::LegacyWidgetToolkit => "javascript",
            Environment::TypedScripting => "typescript",
        }
    }

    /// Parse a canonical label or an author alias, matched exactly
    pub fn from_label(label: &str) -> Option<Environment> {
        Environment::ALL
            .into_iter()
            .find(|env| env.label() == label || env.alias() == label)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label that names no known environment
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment '{0}'")]
pub struct UnknownEnvironment(pub String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::from_label(s).ok_or_else(|| UnknownEnvironment(s.to_string()))
    }
}
