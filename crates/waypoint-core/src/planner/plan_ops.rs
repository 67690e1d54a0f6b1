//! Plan mutations for the Planner.

use log::info;

use super::Planner;
use crate::{
    error::{PlannerError, Result, parse_id},
    models::{Plan, Theme},
    params::{CreatePlan, DeletePlan, Id, SetTheme},
};

impl Planner {
    /// Creates a plan from the ingestion contract and makes it active.
    pub async fn create_plan(&mut self, params: &CreatePlan) -> Result<Plan> {
        let plan = self.commit(|workspace| workspace.create_plan(params)).await?;
        info!("Created plan '{}' ({} tasks)", plan.name, plan.tasks.len());
        self.warn_on_cycle(plan.id);
        Ok(plan)
    }

    /// Creates a plan from the JSON form of the ingestion contract.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Serialization` for malformed JSON.
    pub async fn import_plan(&mut self, json: &str) -> Result<Plan> {
        let params = CreatePlan::from_json(json)?;
        self.create_plan(&params).await
    }

    /// Permanently deletes a plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` unless `confirmed` is set, and
    /// `PlannerError::PlanNotFound` for an unknown ID.
    pub async fn delete_plan(&mut self, params: &DeletePlan) -> Result<Plan> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input("confirmed").with_reason(
                "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let id = parse_id("id", &params.id)?;
        let plan = self.commit(|workspace| workspace.delete_plan(id)).await?;
        info!("Deleted plan '{}'", plan.name);
        Ok(plan)
    }

    /// Makes a plan the active one.
    pub async fn select_plan(&mut self, params: &Id) -> Result<Plan> {
        let id = parse_id("id", &params.id)?;
        self.commit(|workspace| workspace.select_plan(id).cloned())
            .await
    }

    /// Changes the colour theme.
    pub async fn set_theme(&mut self, params: &SetTheme) -> Result<Theme> {
        let theme: Theme = params
            .theme
            .parse()
            .map_err(|reason: String| PlannerError::invalid_input("theme").with_reason(reason))?;
        self.commit(|workspace| {
            workspace.set_theme(theme);
            Ok(theme)
        })
        .await
    }
}
