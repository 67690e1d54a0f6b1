//! Task model definition and related functionality.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DurationUnit, Priority, TaskStatus};

/// Represents an individual task within a plan.
///
/// Dependencies name other tasks of the same plan by **title**. Titles that
/// match nothing are dangling and treated as already satisfied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, stable for the task's lifetime
    pub id: Uuid,

    /// Human-readable title, also the key other tasks reference
    pub title: String,

    /// Free-form description of the work
    #[serde(default)]
    pub description: String,

    /// Stored status (todo, in-progress or done)
    #[serde(default)]
    pub status: TaskStatus,

    /// Relative importance
    #[serde(default)]
    pub priority: Priority,

    /// Estimated effort, in `duration_unit`
    #[serde(default)]
    pub duration: f64,

    /// Unit for `duration`
    #[serde(default)]
    pub duration_unit: DurationUnit,

    /// Titles of the tasks that must be done before this one is unblocked
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Task {
    /// Creates a todo task with a fresh ID and default effort.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::default(),
            duration: 0.0,
            duration_unit: DurationUnit::default(),
            dependencies: Vec::new(),
        }
    }

    /// Appends prerequisite titles.
    pub fn with_dependencies<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(titles.into_iter().map(Into::into));
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this task lists `title` among its dependencies.
    pub fn depends_on(&self, title: &str) -> bool {
        self.dependencies.iter().any(|d| d == title)
    }

    /// Compact effort label such as `3h` or `1.5d`.
    pub fn effort(&self) -> String {
        format!("{}{}", self.duration, self.duration_unit.abbreviation())
    }
}
