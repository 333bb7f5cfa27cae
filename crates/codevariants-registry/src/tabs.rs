//! Renderer-facing code tabs

use codevariants::{Environment, ScenarioRecord};
use serde::Serialize;

/// One tab of a code panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeTab<'a> {
    pub environment: Environment,
    /// Tab title, e.g. `React`
    pub title: &'static str,
    /// Syntax-highlighting language hint
    pub language: &'static str,
    pub code: &'a str,
}

impl<'a> CodeTab<'a> {
    /// Tabs for every environment the record has a body for, in display order
    pub fn for_record(record: &'a ScenarioRecord) -> Vec<CodeTab<'a>> {
        record
            .bodies
            .iter()
            .map(|(environment, code)| CodeTab {
                environment: *environment,
                title: environment.title(),
                language: environment.language(),
                code,
            })
            .collect()
    }
}
