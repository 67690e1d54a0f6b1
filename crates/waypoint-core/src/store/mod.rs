//! In-memory task store.
//!
//! [`Workspace`] holds every plan, the active selection and the theme. It is
//! a plain owned value: lifecycle operations mutate it synchronously and
//! never touch I/O, so a caller that wants a transactional update clones the
//! workspace, applies the change to the clone and swaps it in once the new
//! state has been persisted.
//!
//! Lifecycle operations live in [`plan_ops`] and [`task_ops`].

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    error::{PlannerError, Result},
    models::{Plan, Snapshot, Theme},
};

pub mod plan_ops;
pub mod task_ops;


/// The task store: all plans plus the user's selection and theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    flows: Vec<Plan>,
    active: Option<Uuid>,
    theme: Theme,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a workspace from persisted state. The first plan becomes
    /// active.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let active = snapshot.flows.first().map(|plan| plan.id);
        Self {
            flows: snapshot.flows,
            active,
            theme: snapshot.theme,
        }
    }

    /// The persistable part of the workspace.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            flows: self.flows.clone(),
            theme: self.theme,
        }
    }

    /// All plans, newest first.
    pub fn plans(&self) -> &[Plan] {
        &self.flows
    }

    pub fn plan(&self, id: Uuid) -> Result<&Plan> {
        self.flows
            .iter()
            .find(|plan| plan.id == id)
            .ok_or(PlannerError::PlanNotFound { id })
    }

    pub(crate) fn plan_mut(&mut self, id: Uuid) -> Result<&mut Plan> {
        self.flows
            .iter_mut()
            .find(|plan| plan.id == id)
            .ok_or(PlannerError::PlanNotFound { id })
    }

    pub fn active_plan_id(&self) -> Option<Uuid> {
        self.active
    }

    pub fn active_plan(&self) -> Option<&Plan> {
        self.active.and_then(|id| self.plan(id).ok())
    }

    /// Resolves an optional plan ID, falling back to the active plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` for an unknown ID and
    /// `PlannerError::NoActivePlan` when no ID is given and nothing is
    /// selected.
    pub fn plan_or_active(&self, id: Option<Uuid>) -> Result<&Plan> {
        match id {
            Some(id) => self.plan(id),
            None => self.active_plan().ok_or(PlannerError::NoActivePlan),
        }
    }

    /// Makes the given plan the active one.
    pub fn select_plan(&mut self, id: Uuid) -> Result<&Plan> {
        let index = self
            .flows
            .iter()
            .position(|plan| plan.id == id)
            .ok_or(PlannerError::PlanNotFound { id })?;
        self.active = Some(id);
        Ok(&self.flows[index])
    }

    pub fn clear_selection(&mut self) {
        self.active = None;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

/// Current time truncated to whole milliseconds, the precision timestamps
/// are persisted with.
pub(crate) fn now_millis() -> Result<Timestamp> {
    Timestamp::from_millisecond(Timestamp::now().as_millisecond()).map_err(|e| {
        PlannerError::Configuration {
            message: format!("System clock out of range: {e}"),
        }
    })
}

/// Trims a required text field, rejecting blank values.
pub(crate) fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::invalid_input(field).with_reason("must not be blank"));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_duration(duration: f64) -> Result<f64> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(PlannerError::invalid_input("duration")
            .with_reason(format!("must be a non-negative number, got {duration}")));
    }
    Ok(duration)
}

/// Trims dependency titles, dropping blanks and repeats.
pub(crate) fn normalize_dependencies(titles: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(titles.len());
    for title in titles {
        let title = title.trim();
        if !title.is_empty() && !normalized.iter().any(|t| t == title) {
            normalized.push(title.to_string());
        }
    }
    normalized
}

/// Returns `wanted`, or `wanted (n)` for the smallest `n >= 2` that is not
/// taken.
///
/// ```rust
/// use waypoint_core::store::unique_title;
///
/// let taken = ["Setup", "Setup (2)"];
/// assert_eq!(unique_title("Deploy", |t| taken.contains(&t)), "Deploy");
/// assert_eq!(unique_title("Setup", |t| taken.contains(&t)), "Setup (3)");
/// ```
pub fn unique_title(wanted: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(wanted) {
        return wanted.to_string();
    }
    (2..)
        .map(|n| format!("{wanted} ({n})"))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| wanted.to_string())
}
