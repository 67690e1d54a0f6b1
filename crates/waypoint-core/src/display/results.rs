//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Plan, Task, TaskStatus};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes that were applied.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{display::UpdateResult, models::Task};
///
/// let task = Task::new("Write post");
/// let result = UpdateResult::with_changes(task, vec!["Priority changed to high".to_string()]);
/// let output = result.to_string();
/// assert!(output.contains("Changes made:"));
/// assert!(output.contains("- Priority changed to high"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;

        writeln!(f)?;
        if self.changes.is_empty() {
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task '{}' (ID: {})",
            self.resource.title, self.resource.id
        )?;
        writeln!(
            f,
            "Tasks that listed '{}' as a dependency no longer wait on it.",
            self.resource.title
        )
    }
}

/// Outcome of a status change, naming any prerequisites that were still
/// unfinished when the change was applied.
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub task: Task,
    pub previous: TaskStatus,
    pub blocked_by: Vec<String>,
}

impl StatusChange {
    /// Whether the task was blocked when its status changed.
    pub fn was_blocked(&self) -> bool {
        !self.blocked_by.is_empty()
    }
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Task '{}' (ID: {}) is now {} (was {}).",
            self.task.title,
            self.task.id,
            self.task.status.with_icon(),
            self.previous.with_icon()
        )?;
        if self.was_blocked() {
            writeln!(f)?;
            writeln!(
                f,
                "**Warning**: prerequisites not finished: {}",
                self.blocked_by.join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_result_without_changes() {
        let output = UpdateResult::new(Task::new("Dig")).to_string();
        assert!(output.contains("No changes made."));
    }

    #[test]
    fn test_delete_task_mentions_dangling_references() {
        let output = DeleteResult::new(Task::new("Dig")).to_string();
        assert!(output.starts_with("Deleted task 'Dig'"));
        assert!(output.contains("no longer wait on it"));
    }

    #[test]
    fn test_status_change_warns_when_blocked() {
        let change = StatusChange {
            task: Task::new("Plant").with_status(TaskStatus::Done),
            previous: TaskStatus::Todo,
            blocked_by: vec!["Dig".to_string()],
        };
        let output = change.to_string();
        assert!(output.contains("is now ✓ Done (was ○ Todo)"));
        assert!(output.contains("prerequisites not finished: Dig"));

        let clean = StatusChange {
            blocked_by: vec![],
            ..change
        };
        assert!(!clean.to_string().contains("Warning"));
    }
}
