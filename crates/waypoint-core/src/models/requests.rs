//! Request types for model updates.

use super::{DurationUnit, Priority};
use crate::{error::parse_id, params::UpdateTask, PlannerError};

/// Patch applied to an existing task. `None` fields are left untouched.
///
/// The task's ID and status are never part of a patch; status changes go
/// through [`crate::Workspace::set_task_status`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub duration: Option<f64>,
    pub duration_unit: Option<DurationUnit>,
    pub dependencies: Option<Vec<String>>,
}

impl UpdateTaskRequest {
    /// Whether applying this request would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.duration.is_none()
            && self.duration_unit.is_none()
            && self.dependencies.is_none()
    }
}

impl TryFrom<&UpdateTask> for UpdateTaskRequest {
    type Error = PlannerError;

    /// Validate and convert interface-level update parameters.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when the IDs, priority or unit do not
    ///   parse
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waypoint_core::{models::{Priority, UpdateTaskRequest}, params::UpdateTask};
    ///
    /// let params = UpdateTask {
    ///     plan_id: "5f8c1a8e-8a4e-4c1e-9a57-2d0f7d8c9b10".to_string(),
    ///     task_id: "0b7e7d9c-3f55-4a8e-b8a5-7e2f9a6f1c22".to_string(),
    ///     priority: Some("high".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let request = UpdateTaskRequest::try_from(&params)?;
    /// assert_eq!(request.priority, Some(Priority::High));
    /// # Ok::<(), waypoint_core::PlannerError>(())
    /// ```
    fn try_from(params: &UpdateTask) -> Result<Self, Self::Error> {
        parse_id("plan_id", &params.plan_id)?;
        parse_id("task_id", &params.task_id)?;

        let priority = params
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()
            .map_err(|reason| PlannerError::invalid_input("priority").with_reason(reason))?;
        let duration_unit = params
            .duration_unit
            .as_deref()
            .map(str::parse::<DurationUnit>)
            .transpose()
            .map_err(|reason| PlannerError::invalid_input("duration_unit").with_reason(reason))?;

        Ok(Self {
            title: params.title.clone(),
            description: params.description.clone(),
            priority,
            duration: params.duration,
            duration_unit,
            dependencies: params.dependencies.clone(),
        })
    }
}
