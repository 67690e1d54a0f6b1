//! Snapshot persistence behind a small repository trait.
//!
//! The resolver, layout and lifecycle code never perform I/O. The
//! [`Planner`](crate::Planner) loads a [`Snapshot`] once at start-up and
//! saves a fresh one after every successful mutation through a
//! [`SnapshotStore`].

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Mutex,
};

use jiff::Timestamp;
use log::debug;
use uuid::Uuid;

use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::Snapshot,
};

/// Load-on-start / save-on-change persistence for the workspace.
///
/// Implementations are called from blocking threads and must be safe to
/// share between them.
pub trait SnapshotStore: Send + Sync + fmt::Debug {
    /// Returns the last saved snapshot, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Replaces the saved snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;

    /// The plan selected in an earlier session. Stores that do not remember
    /// a selection report none, and the first plan becomes active.
    fn load_selection(&self) -> Result<Option<Uuid>> {
        Ok(None)
    }

    /// Remembers the selected plan outside the snapshot.
    fn save_selection(&self, _id: Option<Uuid>) -> Result<()> {
        Ok(())
    }

    /// When the snapshot was last written, if the store records it.
    fn last_saved(&self) -> Result<Option<Timestamp>> {
        Ok(None)
    }
}

/// Stores the snapshot in a SQLite database file.
///
/// A connection is opened per call, so the store itself holds no handle.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Creates a store for `db_path`, creating parent directories and the
    /// schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the parent directory cannot be
    /// created and `PlannerError::Database` if the database cannot be
    /// initialised.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        Database::new(&db_path)?;
        debug!("Using database at {}", db_path.display());
        Ok(Self { db_path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

impl SnapshotStore for SqliteStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        Database::new(&self.db_path)?.load_snapshot()
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        Database::new(&self.db_path)?.save_snapshot(snapshot)
    }

    fn load_selection(&self) -> Result<Option<Uuid>> {
        Database::new(&self.db_path)?.load_active_plan()
    }

    fn save_selection(&self, id: Option<Uuid>) -> Result<()> {
        Database::new(&self.db_path)?.save_active_plan(id)
    }

    fn last_saved(&self) -> Result<Option<Timestamp>> {
        Database::new(&self.db_path)?.snapshot_updated_at()
    }
}

/// Keeps the snapshot in process memory. The selection is not remembered.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<Snapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `snapshot`.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        let guard = self.snapshot.lock().map_err(|_| poisoned())?;
        Ok(guard.clone())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let mut guard = self.snapshot.lock().map_err(|_| poisoned())?;
        *guard = Some(snapshot.clone());
        Ok(())
    }
}

fn poisoned() -> PlannerError {
    PlannerError::Configuration {
        message: "Snapshot store lock poisoned".to_string(),
    }
}
