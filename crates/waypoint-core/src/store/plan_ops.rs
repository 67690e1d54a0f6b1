//! Plan lifecycle: creation from the ingestion contract and deletion.

use log::debug;
use uuid::Uuid;

use super::{Workspace, normalize_dependencies, now_millis, required_text, unique_title};
use crate::{
    error::{PlannerError, Result},
    models::{Plan, Task, TaskStatus},
    params::{CreatePlan, TaskDraft},
};

impl Workspace {
    /// Creates a plan from the ingestion contract and makes it active.
    ///
    /// Every task receives a fresh ID and starts as todo. The new plan is
    /// placed first in the plan list. Dependency titles are not checked
    /// against the task list; duplicate task titles are renamed with a
    /// ` (n)` suffix so that references stay unambiguous.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for a blank plan name, a blank
    /// task title or an invalid duration.
    pub fn create_plan(&mut self, params: &CreatePlan) -> Result<Plan> {
        let name = required_text("name", &params.name)?;

        let mut tasks: Vec<Task> = Vec::with_capacity(params.tasks.len());
        for draft in &params.tasks {
            let task = task_from_draft(draft, &tasks)?;
            tasks.push(task);
        }

        let plan = Plan {
            id: Uuid::new_v4(),
            name,
            description: params.description.trim().to_string(),
            tasks,
            created_at: now_millis()?,
        };

        debug!("Created plan {} with {} tasks", plan.id, plan.tasks.len());
        self.flows.insert(0, plan.clone());
        self.active = Some(plan.id);
        Ok(plan)
    }

    /// Removes a plan. Clears the selection if it was the active plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if no plan has this ID.
    pub fn delete_plan(&mut self, id: Uuid) -> Result<Plan> {
        let index = self
            .flows
            .iter()
            .position(|plan| plan.id == id)
            .ok_or(PlannerError::PlanNotFound { id })?;

        let plan = self.flows.remove(index);
        if self.active == Some(id) {
            self.active = None;
        }
        debug!("Deleted plan {id}");
        Ok(plan)
    }
}

/// Builds a todo task from a draft, renaming it if `siblings` already use
/// its title.
pub(crate) fn task_from_draft(draft: &TaskDraft, siblings: &[Task]) -> Result<Task> {
    let wanted = required_text("title", &draft.title)?;
    let title = unique_title(&wanted, |candidate| {
        siblings.iter().any(|task| task.title == candidate)
    });
    if title != wanted {
        debug!("Renamed duplicate task title '{wanted}' to '{title}'");
    }

    Ok(Task {
        id: Uuid::new_v4(),
        title,
        description: draft.description.trim().to_string(),
        status: TaskStatus::Todo,
        priority: draft.priority,
        duration: super::validate_duration(draft.duration)?,
        duration_unit: draft.duration_unit,
        dependencies: normalize_dependencies(&draft.dependencies),
    })
}
