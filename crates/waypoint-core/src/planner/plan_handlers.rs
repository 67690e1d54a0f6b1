//! Plan views and handler operations that return display wrapper types.

use super::Planner;
use crate::{
    display::{CreateResult, DeleteResult, PlanSummaries},
    error::Result,
    layout::{Board, CircleLayout, GraphLayout},
    models::{Plan, PlanSummary},
    params::{CreatePlan, DeletePlan, PlanRef},
};

impl Planner {
    /// Handle listing plans.
    ///
    /// Converts every plan to a summary with task counts, newest first, and
    /// marks the active one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::PlannerBuilder;
    /// # async {
    /// let planner = PlannerBuilder::new().in_memory().build().await?;
    /// let summaries = planner.list_plans_summary();
    /// assert!(summaries.is_empty());
    /// # Result::<(), waypoint_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub fn list_plans_summary(&self) -> PlanSummaries {
        let active = self.workspace.active_plan_id();
        PlanSummaries(
            self.workspace
                .plans()
                .iter()
                .map(|plan| PlanSummary::from(plan).with_active(Some(plan.id) == active))
                .collect(),
        )
    }

    /// Handle showing a complete plan with all its tasks.
    ///
    /// Uses the active plan when `params.id` is absent.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` for an unknown ID and
    /// `PlannerError::NoActivePlan` when nothing is selected.
    pub fn show_plan(&self, params: &PlanRef) -> Result<Plan> {
        self.target_plan(params).cloned()
    }

    /// Handle laying out a plan as depth-ordered columns.
    ///
    /// # Errors
    ///
    /// In addition to the lookup errors of [`Planner::show_plan`], returns
    /// `PlannerError::CyclicDependency` when the plan's references form a
    /// cycle.
    pub fn plan_board(&self, params: &PlanRef) -> Result<Board> {
        Board::for_plan(self.target_plan(params)?)
    }

    /// Handle projecting a plan onto the circular dependency graph.
    pub fn plan_graph(&self, params: &PlanRef) -> Result<GraphLayout> {
        let plan = self.target_plan(params)?;
        Ok(CircleLayout::default().project(&plan.tasks))
    }

    /// Handle creating a new plan, wrapped for display.
    pub async fn create_plan_result(&mut self, params: &CreatePlan) -> Result<CreateResult<Plan>> {
        self.create_plan(params).await.map(CreateResult::new)
    }

    /// Handle deleting a plan, wrapped for display.
    pub async fn delete_plan_result(&mut self, params: &DeletePlan) -> Result<DeleteResult<Plan>> {
        self.delete_plan(params).await.map(DeleteResult::new)
    }
}
