//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{PlanSummary, Task};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use uuid::Uuid;
/// use waypoint_core::{display::PlanSummaries, models::PlanSummary};
///
/// let plan = PlanSummary {
///     id: Uuid::new_v4(),
///     name: "My Project".to_string(),
///     description: "A test project".to_string(),
///     created_at: Timestamp::now(),
///     active: true,
///     total_tasks: 5,
///     completed_tasks: 2,
///     in_progress_tasks: 1,
///     blocked_tasks: 1,
/// };
///
/// let output = PlanSummaries(vec![plan]).to_string();
/// assert!(output.contains("My Project"));
/// assert!(output.contains("2/5 done (40%)"));
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&PlanSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a list of tasks, such as the tasks that
/// are ready to start.
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collections() {
        assert_eq!(PlanSummaries(vec![]).to_string(), "No plans found.\n");
        assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
    }

    #[test]
    fn test_tasks_display_each_task() {
        let tasks = Tasks(vec![Task::new("Dig"), Task::new("Water")]);
        let output = tasks.to_string();
        assert_eq!(tasks.len(), 2);
        assert!(output.contains("### Dig"));
        assert!(output.contains("### Water"));
        assert_eq!(tasks[1].title, "Water");
    }
}
