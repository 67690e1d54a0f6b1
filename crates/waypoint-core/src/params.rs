//! Parameter structures for Waypoint operations
//!
//! This module contains shared parameter structures used across the
//! interfaces (CLI, MCP) without framework-specific dependencies beyond serde
//! and the optional JSON schema derive.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap or convert into these types; the planner only ever
//! sees the core structures. Identifiers travel as strings and are parsed
//! (and rejected with [`PlannerError::InvalidInput`]) at the core boundary.
//!
//! ## Ingestion Contract
//!
//! [`CreatePlan`] is the shape produced by goal decomposition (an AI
//! assistant, OCR extraction or manual entry):
//!
//! ```json
//! {
//!   "name": "Launch blog",
//!   "description": "Ship a personal blog",
//!   "tasks": [
//!     { "title": "Pick host", "description": "", "priority": "high",
//!       "duration": 2, "durationUnit": "hours", "dependencies": [] }
//!   ]
//! }
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    models::{DurationUnit, Priority},
    PlannerError, Result,
};

/// Description used for plans created by hand without one.
pub const MANUAL_PLAN_DESCRIPTION: &str = "New manual workflow";

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

/// Parameters naming a plan, defaulting to the active plan when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanRef {
    /// ID of the plan; the active plan is used when absent
    #[serde(default)]
    pub id: Option<String>,
}

/// A task as supplied by the ingestion contract, before an ID and status are
/// assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Title of the task; other tasks reference it in `dependencies`
    pub title: String,
    /// What needs to be done
    pub description: String,
    /// low, medium or high
    pub priority: Priority,
    /// Estimated effort in `durationUnit`
    pub duration: f64,
    /// minutes, hours, days or weeks
    #[serde(alias = "duration_unit")]
    pub duration_unit: DurationUnit,
    /// Titles of prerequisite tasks in the same plan
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TaskDraft {
    /// Creates a draft with default priority and effort.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Adds prerequisite titles to the draft.
    pub fn depending_on<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(titles.into_iter().map(Into::into));
        self
    }
}

/// Parameters for creating a new plan: the ingestion contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    /// Name of the plan (required)
    pub name: String,
    /// Description of the goal
    #[serde(default)]
    pub description: String,
    /// Tasks in the order they should be listed
    #[serde(default)]
    pub tasks: Vec<TaskDraft>,
}

impl CreatePlan {
    /// Parameters for an empty plan built by hand.
    pub fn manual(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description: description.unwrap_or_else(|| MANUAL_PLAN_DESCRIPTION.to_string()),
            tasks: Vec::new(),
        }
    }

    /// Parses the JSON form of the ingestion contract.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Serialization` when the document is malformed
    /// or misses required fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parameters for permanently deleting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeletePlan {
    /// ID of the plan to delete
    pub id: String,
    /// Must be true; deletion cannot be undone
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for appending a task to a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddTask {
    /// ID of the plan to add the task to
    pub plan_id: String,
    /// The task itself
    #[serde(flatten)]
    pub task: TaskDraft,
}

/// Parameters addressing one task of one plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TaskRef {
    /// ID of the plan owning the task
    pub plan_id: String,
    /// ID of the task
    pub task_id: String,
}

/// Parameters for editing a task's details.
///
/// Only the provided fields are changed. Renaming a task does not rewrite
/// references to its old title held by other tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTask {
    /// ID of the plan owning the task
    pub plan_id: String,
    /// ID of the task to update
    pub task_id: String,
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New description
    #[serde(default)]
    pub description: Option<String>,
    /// New priority (low, medium, high)
    #[serde(default)]
    pub priority: Option<String>,
    /// New duration
    #[serde(default)]
    pub duration: Option<f64>,
    /// New duration unit (minutes, hours, days, weeks)
    #[serde(default)]
    pub duration_unit: Option<String>,
    /// Replacement list of prerequisite titles
    #[serde(default)]
    pub dependencies: Option<Vec<String>>,
}

/// Parameters for overwriting a task's status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetTaskStatus {
    /// ID of the plan owning the task
    pub plan_id: String,
    /// ID of the task
    pub task_id: String,
    /// New status: todo, in-progress or done
    pub status: String,
}

impl SetTaskStatus {
    /// Parses the requested status.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for unknown values and for the
    /// derived `blocked` state.
    pub fn parsed_status(&self) -> Result<crate::models::TaskStatus> {
        self.status
            .parse()
            .map_err(|reason: String| PlannerError::invalid_input("status").with_reason(reason))
    }
}

/// Parameters for choosing the colour theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetTheme {
    /// peach, onyx or cyber
    pub theme: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_plan_from_ingestion_json() {
        let json = r#"{
            "name": "Launch blog",
            "description": "Ship a personal blog",
            "tasks": [
                {"title": "Pick host", "description": "Compare providers", "priority": "high",
                 "duration": 2, "durationUnit": "hours", "dependencies": []},
                {"title": "Write post", "description": "First article", "priority": "medium",
                 "duration": 1.5, "durationUnit": "days", "dependencies": ["Pick host"]}
            ]
        }"#;

        let params = CreatePlan::from_json(json).unwrap();
        assert_eq!(params.name, "Launch blog");
        assert_eq!(params.tasks.len(), 2);
        assert_eq!(params.tasks[0].priority, Priority::High);
        assert_eq!(params.tasks[1].duration_unit, DurationUnit::Days);
        assert_eq!(params.tasks[1].dependencies, vec!["Pick host".to_string()]);
    }

    #[test]
    fn test_create_plan_rejects_malformed_json() {
        let err = CreatePlan::from_json("{\"name\": ").unwrap_err();
        assert!(matches!(err, PlannerError::Serialization { .. }));
    }

    #[test]
    fn test_task_draft_requires_contract_fields() {
        let err = CreatePlan::from_json(r#"{"name": "x", "tasks": [{"title": "only"}]}"#)
            .unwrap_err();
        assert!(matches!(err, PlannerError::Serialization { .. }));
    }

    #[test]
    fn test_task_draft_dependencies_default_to_empty() {
        let json = r#"{"name": "x", "tasks": [{"title": "t", "description": "", "priority": "low",
            "duration": 5, "durationUnit": "minutes"}]}"#;
        let params = CreatePlan::from_json(json).unwrap();
        assert!(params.tasks[0].dependencies.is_empty());
    }

    #[test]
    fn test_manual_plan_uses_default_description() {
        let params = CreatePlan::manual("Garden", None);
        assert_eq!(params.description, MANUAL_PLAN_DESCRIPTION);
        assert!(params.tasks.is_empty());
    }

    #[test]
    fn test_set_task_status_refuses_blocked() {
        let params = SetTaskStatus {
            status: "blocked".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            params.parsed_status(),
            Err(PlannerError::InvalidInput { .. })
        ));
    }
}
