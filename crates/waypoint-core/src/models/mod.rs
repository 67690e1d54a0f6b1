//! Data models for plans and tasks.
//!
//! This module contains the core domain models of Waypoint: a [`Plan`] (a
//! "flow" in the persisted snapshot) owns an ordered list of [`Task`]s, and
//! tasks name their prerequisites by **title**. Display implementations for
//! these models are located in [`crate::display::models`] so that the data
//! structures stay free of presentation logic.
//!
//! # Stored vs. derived state
//!
//! Only the statuses in [`TaskStatus`] are ever stored. Whether a task is
//! *blocked* and how deep it sits in the dependency graph are derived on
//! demand by [`crate::resolver`] and overlaid by the views.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use uuid::Uuid;
//! use waypoint_core::models::{Plan, Task, TaskStatus};
//!
//! let task = Task {
//!     id: Uuid::new_v4(),
//!     title: "Draft outline".to_string(),
//!     description: String::new(),
//!     status: TaskStatus::Todo,
//!     priority: Default::default(),
//!     duration: 2.0,
//!     duration_unit: Default::default(),
//!     dependencies: vec![],
//! };
//! let plan = Plan {
//!     id: Uuid::new_v4(),
//!     name: "Write a book".to_string(),
//!     description: String::new(),
//!     tasks: vec![task],
//!     created_at: Timestamp::UNIX_EPOCH,
//! };
//!
//! assert!(plan.task_by_title("Draft outline").is_some());
//! assert_eq!(plan.tasks[0].effort(), "2h");
//! ```

pub mod plan;
pub mod requests;
pub mod snapshot;
pub mod status;
pub mod summary;
pub mod task;
pub mod theme;

#[cfg(test)]
mod tests;

pub use plan::Plan;
pub use requests::UpdateTaskRequest;
pub use snapshot::Snapshot;
pub use status::{DurationUnit, Priority, TaskStatus};
pub use summary::PlanSummary;
pub use task::Task;
pub use theme::Theme;
