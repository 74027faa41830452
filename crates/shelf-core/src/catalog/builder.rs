//! Builder for creating and configuring Catalog instances.

use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio::task;

use super::Catalog;
use crate::{
    db::Database,
    error::{CatalogError, Result},
};

/// Builder for creating and configuring Catalog instances.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    database_path: Option<PathBuf>,
    sample_data: bool,
}

impl CatalogBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/shelf/shelf.db` or `~/.local/share/shelf/shelf.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Seed the sample books when the catalog is empty at startup.
    pub fn with_sample_data(mut self, enabled: bool) -> Self {
        self.sample_data = enabled;
        self
    }

    /// Builds the configured catalog instance.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::FileSystem` if the database directory cannot be
    /// created, `CatalogError::Database` if initialization or seeding fails.
    pub async fn build(self) -> Result<Catalog> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        let sample_data = self.sample_data;
        let seeded = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path_clone)?;
            if sample_data {
                db.seed_sample_books()
            } else {
                Ok(0)
            }
        })
        .await
        .map_err(CatalogError::task_join)??;

        if seeded > 0 {
            info!("Seeded {seeded} sample books into {}", db_path.display());
        }
        debug!("Catalog ready at {}", db_path.display());

        Ok(Catalog::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("shelf")
            .place_data_file("shelf.db")
            .map_err(|e| CatalogError::XdgDirectory(e.to_string()))
    }
}
