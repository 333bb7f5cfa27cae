//! Author tables stored as JSON files in a content directory
//!
//! Each `<Component>.json` file holds the scenario table of one component;
//! the file stem is the component name. Other files are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::table::AuthorTable;

/// A directory of per-component JSON tables
#[derive(Debug, Clone)]
pub struct ContentDir {
    root: PathBuf,
}

impl ContentDir {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths of all table files, sorted by file name
    pub fn table_paths(&self) -> Result<Vec<PathBuf>> {
        let io_err = |source| CatalogError::Io {
            path: self.root.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Read every table in the directory.
    ///
    /// Unreadable or malformed files do not stop the scan; all of them are
    /// reported together.
    pub fn read_tables(&self) -> Result<Vec<AuthorTable>> {
        let mut tables = Vec::new();
        let mut errors = Vec::new();

        for path in self.table_paths()? {
            match read_table(&path) {
                Ok(table) => tables.push(table),
                Err(err) => errors.push(err),
            }
        }

        CatalogError::collect(errors)?;
        debug!(root = %self.root.display(), tables = tables.len(), "read content directory");
        Ok(tables)
    }
}

/// Read one table file; the component name is the file stem
pub fn read_table(path: &Path) -> Result<AuthorTable> {
    let component = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    AuthorTable::from_json(component, &json)
}
