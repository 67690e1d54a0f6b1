//! High-level planner API.
//!
//! [`Planner`] is the entry point the interfaces (CLI, MCP) talk to. It owns
//! the in-memory [`Workspace`] and the [`SnapshotStore`] it was loaded from,
//! and coordinates the two:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │  Snapshot store │
//! │ (plan_handlers, │───▶│ (plan_ops,      │───▶│ (repository,    │
//! │  task_handlers) │    │  task_ops)      │    │  via db/)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  Display wrappers      Lifecycle + persist      Data persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Planner`] instances
//! - [`plan_ops`]: Plan mutations (create, import, delete, select, theme)
//! - [`task_ops`]: Task mutations (add, update, status, delete)
//! - [`plan_handlers`]: Plan views (summaries, board, graph) and result
//!   wrappers
//! - [`task_handlers`]: Task views (ready tasks) and result wrappers
//!
//! Every mutation is applied to a copy of the workspace, the copy is
//! persisted on a blocking thread, and only then does it replace the current
//! state. A failed save leaves the planner unchanged. Views are synchronous
//! and never touch the store.
//!
//! # Usage
//!
//! ```rust
//! use waypoint_core::{PlannerBuilder, params::{CreatePlan, PlanRef, TaskDraft}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new().in_memory().build().await?;
//!
//! planner
//!     .create_plan(&CreatePlan {
//!         name: "Launch blog".to_string(),
//!         description: "Ship a personal blog".to_string(),
//!         tasks: vec![
//!             TaskDraft::titled("Pick host"),
//!             TaskDraft::titled("Write post").depending_on(["Pick host"]),
//!         ],
//!     })
//!     .await?;
//!
//! let board = planner.plan_board(&PlanRef::default())?;
//! assert_eq!(board.columns.len(), 2);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::Timestamp;
use log::warn;
use tokio::task;
use uuid::Uuid;

use crate::{
    error::{PlannerError, Result, parse_id},
    models::{Plan, Theme},
    params::PlanRef,
    repository::SnapshotStore,
    resolver::DependencyGraph,
    store::Workspace,
};

pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;
pub mod task_handlers;
pub mod task_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing plans and tasks.
#[derive(Debug)]
pub struct Planner {
    workspace: Workspace,
    store: Arc<dyn SnapshotStore>,
}

impl Planner {
    pub(crate) fn new(workspace: Workspace, store: Arc<dyn SnapshotStore>) -> Self {
        Self { workspace, store }
    }

    /// Read-only access to the current state.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn theme(&self) -> Theme {
        self.workspace.theme()
    }

    /// When the workspace was last persisted, if the store records it.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Database` if the store cannot be read.
    pub async fn last_saved(&self) -> Result<Option<Timestamp>> {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || store.last_saved())
            .await
            .map_err(PlannerError::join)?
    }

    /// Applies `change` to a copy of the workspace, persists the copy and
    /// then makes it current.
    pub(crate) async fn commit<T, F>(&mut self, change: F) -> Result<T>
    where
        F: FnOnce(&mut Workspace) -> Result<T>,
    {
        let mut next = self.workspace.clone();
        let output = change(&mut next)?;

        let store = Arc::clone(&self.store);
        let snapshot = next.snapshot();
        let selection = next.active_plan_id();
        let selection_changed = selection != self.workspace.active_plan_id();

        task::spawn_blocking(move || {
            store.save(&snapshot)?;
            if selection_changed {
                store.save_selection(selection)?;
            }
            Ok::<(), PlannerError>(())
        })
        .await
        .map_err(PlannerError::join)??;

        self.workspace = next;
        Ok(output)
    }

    /// Looks up the plan named by `params`, or the active plan.
    pub(crate) fn target_plan(&self, params: &PlanRef) -> Result<&Plan> {
        let id = params
            .id
            .as_deref()
            .map(|id| parse_id("id", id))
            .transpose()?;
        self.workspace.plan_or_active(id)
    }

    /// Logs a warning when a plan's references have become cyclic. Cycles
    /// are allowed in storage but have no board layout.
    pub(crate) fn warn_on_cycle(&self, plan_id: Uuid) {
        if let Ok(plan) = self.workspace.plan(plan_id)
            && let Err(e) = DependencyGraph::new(&plan.tasks).depths()
        {
            warn!("Plan '{}' can no longer be laid out: {e}", plan.name);
        }
    }
}
