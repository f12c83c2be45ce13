//! Builder for creating and configuring [`Lists`] instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Lists;
use crate::{
    catalog::Catalog,
    error::{ListsError, Result},
    store::SqliteStore,
};

/// Builder for a [`Lists`] backed by an on-disk SQLite store.
#[derive(Debug, Clone, Default)]
pub struct ListsBuilder {
    database_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
}

impl ListsBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/lovelists/lovelists.db` or
    /// `~/.local/share/lovelists/lovelists.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the catalog from a JSON file instead of the embedded one.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the catalog and opens the store.
    ///
    /// # Errors
    ///
    /// Returns `ListsError::FileSystem` if a path is unusable,
    /// `ListsError::Catalog` or `ListsError::DuplicateTemplate` if the
    /// catalog is invalid, and `ListsError::Database` if the store cannot be
    /// opened.
    pub fn build(self) -> Result<Lists<SqliteStore>> {
        let catalog = match &self.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::embedded()?,
        };

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ListsError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!(
            "Opening store at {} with {} lists",
            db_path.display(),
            catalog.len()
        );
        let store = SqliteStore::open(&db_path)?;
        Ok(Lists::new(catalog, store))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("lovelists")
            .place_data_file("lovelists.db")
            .map_err(|e| ListsError::XdgDirectory(e.to_string()))
    }
}
