//! Plan summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Plan, TaskStatus};
use crate::resolver::is_blocked;

/// Summary information about a plan with task statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: Uuid,
    /// Name of the plan
    pub name: String,
    /// Description of the plan
    pub description: String,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Whether this plan is the active one
    pub active: bool,
    /// Total number of tasks
    pub total_tasks: u32,
    /// Number of completed tasks
    pub completed_tasks: u32,
    /// Number of tasks in progress
    pub in_progress_tasks: u32,
    /// Number of unfinished tasks waiting on an unfinished dependency
    pub blocked_tasks: u32,
}

impl PlanSummary {
    /// Completion as a whole percentage; 0 for an empty plan.
    pub fn progress_percent(&self) -> u32 {
        if self.total_tasks == 0 {
            0
        } else {
            (f64::from(self.completed_tasks) * 100.0 / f64::from(self.total_tasks)).round() as u32
        }
    }

    /// Mark the summary as describing the active plan.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let count = |status: TaskStatus| {
            plan.tasks.iter().filter(|t| t.status == status).count() as u32
        };
        let blocked_tasks = plan
            .tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Done && is_blocked(t, &plan.tasks))
            .count() as u32;

        Self {
            id: plan.id,
            name: plan.name.clone(),
            description: plan.description.clone(),
            created_at: plan.created_at,
            active: false,
            total_tasks: plan.tasks.len() as u32,
            completed_tasks: count(TaskStatus::Done),
            in_progress_tasks: count(TaskStatus::InProgress),
            blocked_tasks,
        }
    }
}
