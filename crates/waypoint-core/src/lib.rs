//! Core library for the Waypoint planning application.
//!
//! Waypoint turns a goal into a plan of tasks whose dependencies name other
//! tasks by title. This crate owns everything below the interfaces: the data
//! model, dependency resolution (depth, blocked state, cycle detection), the
//! two plan projections, the plan and task lifecycle and snapshot
//! persistence.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Projections** ([`layout`]): The column [`layout::Board`] and the
//!   circular [`layout::GraphLayout`], also rendered through `Display`
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{
//!     PlannerBuilder,
//!     params::{CreatePlan, PlanRef, TaskDraft},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         name: "Move house".to_string(),
//!         description: "Relocate by the end of the month".to_string(),
//!         tasks: vec![
//!             TaskDraft::titled("Find flat"),
//!             TaskDraft::titled("Book movers").depending_on(["Find flat"]),
//!         ],
//!     })
//!     .await?;
//! println!("{plan}");
//!
//! // The newly created plan is active, so no ID is needed.
//! println!("{}", planner.plan_board(&PlanRef::default())?);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod layout;
pub mod models;
pub mod params;
pub mod planner;
pub mod repository;
pub mod resolver;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, GraphSvg, LocalDateTime, OperationStatus, PlanSummaries,
    StatusChange, Tasks, UpdateResult,
};
pub use error::{PlannerError, Result};
pub use layout::{Board, CircleLayout, GraphLayout};
pub use models::{
    DurationUnit, Plan, PlanSummary, Priority, Snapshot, Task, TaskStatus, Theme,
    UpdateTaskRequest,
};
pub use params::{
    AddTask, CreatePlan, DeletePlan, Id, PlanRef, SetTaskStatus, SetTheme, TaskDraft, TaskRef,
    UpdateTask,
};
pub use planner::{Planner, PlannerBuilder};
pub use repository::{MemoryStore, SnapshotStore, SqliteStore};
pub use store::Workspace;
