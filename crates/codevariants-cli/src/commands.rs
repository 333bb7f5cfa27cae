//! Subcommand implementations
//!
//! Every command builds a fresh registry from the content directory and
//! writes its report to `out`; diagnostics go through `tracing`.

use codevariants::ContentDir;
use codevariants_registry::{Build, ExampleQuery, ExampleRef, RegistryExport, build};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::{CliError, Result};

fn load(config: &CliConfig) -> Result<Build> {
    debug!(content_dir = %config.content_dir.display(), mode = %config.mode, "loading content");
    let tables = ContentDir::new(&config.content_dir).read_tables()?;
    Ok(build(&tables, config.mode)?)
}

/// Release gate: succeed only when every table loads and validates
pub fn check(config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let Build { registry, warnings } = load(config)?;

    for gap in &warnings {
        writeln!(out, "warning: {gap}")?;
    }
    writeln!(
        out,
        "ok: {} components, {} scenarios, {} warnings ({} mode)",
        registry.len(),
        registry.scenario_count(),
        warnings.len(),
        config.mode
    )?;
    Ok(())
}

pub fn list(config: &CliConfig, component: Option<&str>, out: &mut impl Write) -> Result<()> {
    let registry = load(config)?.registry;

    match component {
        Some(component) => {
            for scenario in registry.list_scenarios(component)? {
                writeln!(out, "{scenario}")?;
            }
        }
        None => {
            for component in registry.list_components() {
                writeln!(out, "{component}")?;
            }
        }
    }
    Ok(())
}

/// Print one body, or every tab of the scenario when no environment is given
pub fn show(config: &CliConfig, reference: &ExampleRef, out: &mut impl Write) -> Result<()> {
    let registry = load(config)?.registry;

    if let Some(environment) = reference.environment {
        let body = registry.get_body(&reference.component, &reference.scenario, environment)?;
        out.write_all(body.as_bytes())?;
        return Ok(());
    }

    for tab in registry.code_tabs(&reference.component, &reference.scenario)? {
        writeln!(out, "--- {} ({}) ---", tab.title, tab.language)?;
        writeln!(out, "{}", tab.code)?;
    }
    Ok(())
}

pub fn export(config: &CliConfig, output: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let registry = load(config)?.registry;
    let bytes = RegistryExport::of(&registry).to_bytes()?;

    match output {
        Some(path) => {
            fs::write(path, &bytes).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), fingerprint = %registry.fingerprint(), "exported registry");
        }
        None => {
            out.write_all(&bytes)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print `file -> component/scenario` for each name; unmatched names fail
/// the command after all names are reported
pub fn resolve(config: &CliConfig, file_names: &[String], out: &mut impl Write) -> Result<()> {
    let registry = load(config)?.registry;
    let mut unresolved = Vec::new();

    for file_name in file_names {
        match registry.resolve_example_file(file_name) {
            Some(reference) => writeln!(out, "{file_name} -> {reference}")?,
            None => unresolved.push(file_name.clone()),
        }
    }

    if unresolved.is_empty() {
        Ok(())
    } else {
        Err(CliError::Unresolved(unresolved))
    }
}
