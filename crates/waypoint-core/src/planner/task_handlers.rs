//! Task views and handler operations that return display wrapper types.

use super::Planner;
use crate::{
    display::{CreateResult, DeleteResult, Tasks, UpdateResult},
    error::Result,
    models::Task,
    params::{AddTask, PlanRef, TaskRef, UpdateTask},
    resolver,
};

impl Planner {
    /// Handle listing the tasks that can be worked on now.
    ///
    /// A task is ready when it is not done and every prerequisite that
    /// resolves within the plan is done.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::{params::{CreatePlan, PlanRef, TaskDraft}, PlannerBuilder};
    /// # async {
    /// let mut planner = PlannerBuilder::new().in_memory().build().await?;
    /// planner
    ///     .create_plan(&CreatePlan {
    ///         name: "Garden".to_string(),
    ///         description: String::new(),
    ///         tasks: vec![
    ///             TaskDraft::titled("Dig"),
    ///             TaskDraft::titled("Plant").depending_on(["Dig"]),
    ///         ],
    ///     })
    ///     .await?;
    ///
    /// let ready = planner.ready_tasks(&PlanRef::default())?;
    /// assert_eq!(ready.len(), 1);
    /// # Result::<(), waypoint_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub fn ready_tasks(&self, params: &PlanRef) -> Result<Tasks> {
        let plan = self.target_plan(params)?;
        Ok(Tasks(
            resolver::ready_tasks(&plan.tasks)
                .into_iter()
                .cloned()
                .collect(),
        ))
    }

    /// Handle adding a task, wrapped for display.
    pub async fn add_task_result(&mut self, params: &AddTask) -> Result<CreateResult<Task>> {
        self.add_task(params).await.map(CreateResult::new)
    }

    /// Handle updating a task, wrapped for display with the list of changes.
    pub async fn update_task_result(&mut self, params: &UpdateTask) -> Result<UpdateResult<Task>> {
        let (task, changes) = self.update_task(params).await?;
        Ok(UpdateResult::with_changes(task, changes))
    }

    /// Handle deleting a task, wrapped for display.
    pub async fn delete_task_result(&mut self, params: &TaskRef) -> Result<DeleteResult<Task>> {
        self.delete_task(params).await.map(DeleteResult::new)
    }
}
