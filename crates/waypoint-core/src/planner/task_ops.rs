//! Task mutations for the Planner.

use log::{info, warn};

use super::Planner;
use crate::{
    display::StatusChange,
    error::{PlannerError, Result, parse_id},
    models::{Task, UpdateTaskRequest},
    params::{AddTask, SetTaskStatus, TaskRef, UpdateTask},
    resolver::blockers,
};

impl Planner {
    /// Appends a task to a plan.
    pub async fn add_task(&mut self, params: &AddTask) -> Result<Task> {
        let plan_id = parse_id("plan_id", &params.plan_id)?;
        let task = self
            .commit(|workspace| workspace.add_task(plan_id, &params.task))
            .await?;
        info!("Added task '{}'", task.title);
        self.warn_on_cycle(plan_id);
        Ok(task)
    }

    /// Edits a task's details. Returns the task and the applied changes.
    pub async fn update_task(&mut self, params: &UpdateTask) -> Result<(Task, Vec<String>)> {
        let request = UpdateTaskRequest::try_from(params)?;
        let plan_id = parse_id("plan_id", &params.plan_id)?;
        let task_id = parse_id("task_id", &params.task_id)?;

        let updated = self
            .commit(|workspace| workspace.update_task(plan_id, task_id, &request))
            .await?;
        self.warn_on_cycle(plan_id);
        Ok(updated)
    }

    /// Overwrites a task's status.
    ///
    /// The change is applied even when prerequisites are unfinished; the
    /// returned [`StatusChange`] names them so the caller can warn.
    pub async fn set_task_status(&mut self, params: &SetTaskStatus) -> Result<StatusChange> {
        let status = params.parsed_status()?;
        let plan_id = parse_id("plan_id", &params.plan_id)?;
        let task_id = parse_id("task_id", &params.task_id)?;

        let blocked_by = self.task_blockers(&TaskRef {
            plan_id: params.plan_id.clone(),
            task_id: params.task_id.clone(),
        })?;
        let previous = self
            .workspace
            .plan(plan_id)?
            .task(task_id)
            .map(|task| task.status)
            .unwrap_or_default();

        let task = self
            .commit(|workspace| workspace.set_task_status(plan_id, task_id, status))
            .await?;
        if !blocked_by.is_empty() {
            warn!(
                "Task '{}' set to {} while waiting on: {}",
                task.title,
                status.as_str(),
                blocked_by.join(", ")
            );
        }

        Ok(StatusChange {
            task,
            previous,
            blocked_by,
        })
    }

    /// Removes a task from its plan.
    pub async fn delete_task(&mut self, params: &TaskRef) -> Result<Task> {
        let plan_id = parse_id("plan_id", &params.plan_id)?;
        let task_id = parse_id("task_id", &params.task_id)?;
        let task = self
            .commit(|workspace| workspace.delete_task(plan_id, task_id))
            .await?;
        info!("Deleted task '{}'", task.title);
        Ok(task)
    }

    /// Titles of the unfinished prerequisites currently blocking a task.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` or `PlannerError::TaskNotFound`
    /// for unknown IDs.
    pub fn task_blockers(&self, params: &TaskRef) -> Result<Vec<String>> {
        let plan_id = parse_id("plan_id", &params.plan_id)?;
        let task_id = parse_id("task_id", &params.task_id)?;
        let plan = self.workspace.plan(plan_id)?;
        let task = plan.task(task_id).ok_or(PlannerError::TaskNotFound {
            plan_id,
            id: task_id,
        })?;

        Ok(blockers(task, &plan.tasks)
            .into_iter()
            .map(|t| t.title.clone())
            .collect())
    }
}
