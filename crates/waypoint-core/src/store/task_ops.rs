//! Task lifecycle within a plan.

use log::debug;
use uuid::Uuid;

use super::{Workspace, normalize_dependencies, plan_ops::task_from_draft, required_text, unique_title};
use crate::{
    error::{PlannerError, Result},
    models::{Plan, Task, TaskStatus, UpdateTaskRequest},
    params::TaskDraft,
};

impl Workspace {
    /// Appends a new todo task to a plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` for an unknown plan and
    /// `PlannerError::InvalidInput` for a blank title or invalid duration.
    pub fn add_task(&mut self, plan_id: Uuid, draft: &TaskDraft) -> Result<Task> {
        let plan = self.plan_mut(plan_id)?;
        let task = task_from_draft(draft, &plan.tasks)?;
        plan.tasks.push(task.clone());
        debug!("Added task {} to plan {plan_id}", task.id);
        Ok(task)
    }

    /// Merges a patch into an existing task, keeping its ID and status.
    ///
    /// Returns the updated task and a description of each applied change.
    /// Renaming a task leaves references to its old title in other tasks
    /// untouched; those references become dangling.
    pub fn update_task(
        &mut self,
        plan_id: Uuid,
        task_id: Uuid,
        request: &UpdateTaskRequest,
    ) -> Result<(Task, Vec<String>)> {
        let plan = self.plan_mut(plan_id)?;
        let index = task_index(plan, task_id)?;

        let title = match &request.title {
            Some(wanted) => {
                let wanted = required_text("title", wanted)?;
                if wanted == plan.tasks[index].title {
                    None
                } else {
                    Some(unique_title(&wanted, |candidate| {
                        plan.tasks
                            .iter()
                            .any(|t| t.id != task_id && t.title == candidate)
                    }))
                }
            }
            None => None,
        };
        let duration = request.duration.map(super::validate_duration).transpose()?;

        let task = &mut plan.tasks[index];
        let mut changes = Vec::new();

        if let Some(title) = title
            && title != task.title
        {
            changes.push(format!("Renamed '{}' to '{title}'", task.title));
            task.title = title;
        }
        if let Some(description) = &request.description {
            let description = description.trim();
            if description != task.description {
                changes.push("Updated description".to_string());
                task.description = description.to_string();
            }
        }
        if let Some(priority) = request.priority
            && priority != task.priority
        {
            changes.push(format!("Priority changed to {}", priority.as_str()));
            task.priority = priority;
        }
        if let Some(duration) = duration
            && duration != task.duration
        {
            task.duration = duration;
            changes.push(format!("Duration set to {}", task.effort()));
        }
        if let Some(unit) = request.duration_unit
            && unit != task.duration_unit
        {
            task.duration_unit = unit;
            changes.push(format!("Duration unit set to {}", unit.as_str()));
        }
        if let Some(dependencies) = &request.dependencies {
            let dependencies = normalize_dependencies(dependencies);
            if dependencies != task.dependencies {
                changes.push(if dependencies.is_empty() {
                    "Cleared dependencies".to_string()
                } else {
                    format!("Dependencies set to {}", dependencies.join(", "))
                });
                task.dependencies = dependencies;
            }
        }

        debug!("Updated task {task_id} in plan {plan_id}: {} changes", changes.len());
        Ok((task.clone(), changes))
    }

    /// Removes a task. Other tasks that depend on its title keep the
    /// now-dangling reference.
    pub fn delete_task(&mut self, plan_id: Uuid, task_id: Uuid) -> Result<Task> {
        let plan = self.plan_mut(plan_id)?;
        let index = task_index(plan, task_id)?;
        let task = plan.tasks.remove(index);
        debug!("Deleted task {task_id} from plan {plan_id}");
        Ok(task)
    }

    /// Overwrites a task's status.
    ///
    /// Never rejected because of unfinished prerequisites; callers decide
    /// whether a blocked task may move.
    pub fn set_task_status(
        &mut self,
        plan_id: Uuid,
        task_id: Uuid,
        status: TaskStatus,
    ) -> Result<Task> {
        let plan = self.plan_mut(plan_id)?;
        let index = task_index(plan, task_id)?;
        let task = &mut plan.tasks[index];
        task.status = status;
        debug!("Task {task_id} in plan {plan_id} is now {}", status.as_str());
        Ok(task.clone())
    }
}

fn task_index(plan: &Plan, task_id: Uuid) -> Result<usize> {
    plan.task_index(task_id).ok_or(PlannerError::TaskNotFound {
        plan_id: plan.id,
        id: task_id,
    })
}
