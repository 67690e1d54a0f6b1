//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    repository::{MemoryStore, SnapshotStore, SqliteStore},
    store::Workspace,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn SnapshotStore>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Keeps all state in memory; nothing survives the process.
    pub fn in_memory(self) -> Self {
        self.with_store(Arc::new(MemoryStore::new()))
    }

    /// Uses an already constructed snapshot store. Takes precedence over
    /// the database path.
    pub fn with_store(mut self, store: Arc<dyn SnapshotStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the configured planner instance and loads the saved state.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if no default path can be found,
    /// `PlannerError::FileSystem` if the database directory cannot be
    /// created, `PlannerError::Database` if database initialization fails
    /// and `PlannerError::Serialization` if the stored snapshot is corrupt.
    pub async fn build(self) -> Result<Planner> {
        let store: Arc<dyn SnapshotStore> = match self.store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                let store = task::spawn_blocking(move || SqliteStore::open(db_path))
                    .await
                    .map_err(PlannerError::join)??;
                Arc::new(store)
            }
        };

        let loader = Arc::clone(&store);
        let (snapshot, selection) = task::spawn_blocking(move || {
            Ok::<_, PlannerError>((loader.load()?, loader.load_selection()?))
        })
        .await
        .map_err(PlannerError::join)??;

        let mut workspace = snapshot.map(Workspace::from_snapshot).unwrap_or_default();
        if let Some(id) = selection
            && workspace.select_plan(id).is_err()
        {
            debug!("Stored selection {id} no longer exists; keeping the newest plan");
        }
        debug!("Loaded {} plans", workspace.plans().len());

        Ok(Planner::new(workspace, store))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}
