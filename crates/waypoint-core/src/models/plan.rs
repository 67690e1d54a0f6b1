//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Task;

/// Represents a complete plan (a "flow") with its tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: Uuid,

    /// Name of the plan
    pub name: String,

    /// Free-form description of the goal behind the plan
    #[serde(default)]
    pub description: String,

    /// Tasks in insertion order (not dependency order)
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Creation time, persisted as integer epoch milliseconds
    #[serde(with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub created_at: Timestamp,
}

impl Plan {
    /// Looks up a task by ID.
    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Looks up a task by title. Duplicate titles resolve to the first
    /// occurrence in list order.
    pub fn task_by_title(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.title == title)
    }

    pub(crate) fn task_index(&self, id: Uuid) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}
