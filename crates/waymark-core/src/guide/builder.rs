//! Builder for creating and configuring Guide instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Guide;
use crate::{
    error::{GuideError, Result},
    store::Store,
};

/// Builder for creating and configuring Guide instances.
#[derive(Debug, Clone)]
pub struct GuideBuilder {
    database_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

impl GuideBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            data_dir: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waymark/waymark.db` or
    /// `~/.local/share/waymark/waymark.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom dataset directory.
    ///
    /// A file named `<version>.json` in this directory overrides the
    /// compiled-in dataset for that version. If not specified, the XDG data
    /// home for the application is searched.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured guide instance.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::FileSystem` if the database path is invalid
    /// Returns `GuideError::Database` if database initialization fails
    pub async fn build(self) -> Result<Guide> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GuideError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _store = Store::new(&db_path_clone)?;
            Ok::<(), GuideError>(())
        })
        .await
        .map_err(|e| GuideError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let data_dir = match self.data_dir {
            Some(dir) => Some(dir),
            None => xdg::BaseDirectories::with_prefix("waymark").get_data_home(),
        };

        Ok(Guide::new(db_path, data_dir))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waymark")
            .place_data_file("waymark.db")
            .map_err(|e| GuideError::XdgDirectory(e.to_string()))
    }
}

impl Default for GuideBuilder {
    fn default() -> Self {
        Self::new()
    }
}
