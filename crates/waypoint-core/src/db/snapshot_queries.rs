//! Key-value reads and writes: the snapshot and the plan selection.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params};

use uuid::Uuid;

use crate::{
    error::{DatabaseResultExt, PlannerError, Result, parse_id},
    models::Snapshot,
};

/// Key under which the workspace snapshot is stored.
pub const SNAPSHOT_KEY: &str = "waypoint.snapshot";
/// Key under which the selected plan ID is stored.
pub const ACTIVE_PLAN_KEY: &str = "waypoint.active_plan";

const SELECT_VALUE_SQL: &str = "SELECT value FROM snapshots WHERE key = ?1";
const SELECT_UPDATED_AT_SQL: &str = "SELECT updated_at FROM snapshots WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO snapshots (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM snapshots WHERE key = ?1";

impl super::Database {
    /// Reads the raw value stored under `key`.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read stored value")
    }

    /// Inserts or replaces the value stored under `key`.
    pub fn put_value(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        tx.execute(UPSERT_VALUE_SQL, params![key, value, now])
            .db_context("Failed to write stored value")?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Removes the value stored under `key`. Returns whether one existed.
    pub fn delete_value(&mut self, key: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_VALUE_SQL, params![key])
            .db_context("Failed to delete stored value")?;
        Ok(deleted > 0)
    }

    /// Loads the stored snapshot, if one has been saved.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Serialization` when the stored document is not
    /// a valid snapshot.
    pub fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        self.get_value(SNAPSHOT_KEY)?
            .as_deref()
            .map(Snapshot::from_json)
            .transpose()
    }

    /// Replaces the stored snapshot.
    pub fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        let json = snapshot.to_json()?;
        self.put_value(SNAPSHOT_KEY, &json)
    }

    /// When the snapshot was last written.
    pub fn snapshot_updated_at(&self) -> Result<Option<Timestamp>> {
        let value: Option<String> = self
            .connection
            .query_row(SELECT_UPDATED_AT_SQL, params![SNAPSHOT_KEY], |row| row.get(0))
            .optional()
            .db_context("Failed to read snapshot timestamp")?;

        value
            .map(|s| {
                s.parse::<Timestamp>().map_err(|e| {
                    PlannerError::invalid_input("updated_at")
                        .with_reason(format!("Invalid stored timestamp '{s}': {e}"))
                })
            })
            .transpose()
    }

    /// The plan selected in an earlier session, if any.
    pub fn load_active_plan(&self) -> Result<Option<Uuid>> {
        self.get_value(ACTIVE_PLAN_KEY)?
            .map(|value| parse_id("active_plan", &value))
            .transpose()
    }

    /// Records the selected plan, or forgets it.
    pub fn save_active_plan(&mut self, id: Option<Uuid>) -> Result<()> {
        match id {
            Some(id) => self.put_value(ACTIVE_PLAN_KEY, &id.to_string()),
            None => self.delete_value(ACTIVE_PLAN_KEY).map(|_| ()),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use tempfile::TempDir;
    use uuid::Uuid;

    use crate::{
        db::Database,
        models::{Plan, Snapshot, Task, TaskStatus, Theme},
    };

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            flows: vec![Plan {
                id: Uuid::new_v4(),
                name: "Launch".to_string(),
                description: "Ship it".to_string(),
                tasks: vec![
                    Task::new("Build").with_status(TaskStatus::Done),
                    Task::new("Release").with_dependencies(["Build"]),
                ],
                created_at: Timestamp::from_millisecond(1_720_000_000_000).unwrap(),
            }],
            theme: Theme::Onyx,
        }
    }

    fn create_test_db() -> (TempDir, Database) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("test.db")).unwrap();
        (temp_dir, db)
    }

    #[test]
    fn test_empty_database_has_no_snapshot() {
        let (_temp_dir, db) = create_test_db();
        assert!(db.load_snapshot().unwrap().is_none());
        assert!(db.snapshot_updated_at().unwrap().is_none());
        assert_eq!(db.schema_version().unwrap(), 1);
    }

    #[test]
    fn test_save_and_load_snapshot() {
        let (_temp_dir, mut db) = create_test_db();
        let snapshot = sample_snapshot();

        db.save_snapshot(&snapshot).unwrap();
        assert_eq!(db.load_snapshot().unwrap(), Some(snapshot.clone()));
        assert!(db.snapshot_updated_at().unwrap().is_some());

        let mut changed = snapshot;
        changed.theme = Theme::Cyber;
        changed.flows.clear();
        db.save_snapshot(&changed).unwrap();
        assert_eq!(db.load_snapshot().unwrap(), Some(changed));
    }

    #[test]
    fn test_active_plan_round_trip() {
        let (_temp_dir, mut db) = create_test_db();
        assert!(db.load_active_plan().unwrap().is_none());

        let id = Uuid::new_v4();
        db.save_active_plan(Some(id)).unwrap();
        assert_eq!(db.load_active_plan().unwrap(), Some(id));

        db.save_active_plan(None).unwrap();
        assert!(db.load_active_plan().unwrap().is_none());
        // The selection never lands inside the snapshot document.
        assert!(db.load_snapshot().unwrap().is_none());
    }
}
