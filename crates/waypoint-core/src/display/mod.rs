//! Display formatting for models, views and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections, operation results and
//! the two plan projections. All text output is markdown so that the CLI can
//! render it through its terminal skin and the MCP server can hand it to an
//! assistant verbatim. The dependency graph can additionally be rendered as
//! a standalone SVG document.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers ([`PlanSummaries`], [`Tasks`])
//! - [`results`]: Operation results ([`CreateResult`], [`UpdateResult`],
//!   [`DeleteResult`], [`StatusChange`])
//! - [`status`]: Confirmation messages ([`OperationStatus`])
//! - [`board`]: The flow board in columns
//! - [`graph`]: The circular dependency graph, as text or [`GraphSvg`]
//! - [`datetime`]: Timestamp formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use waypoint_core::{display::OperationStatus, models::Theme};
//!
//! let status = OperationStatus::success(format!("Theme set to {}", Theme::Cyber));
//! assert_eq!(status.to_string(), "Success: Theme set to cyber\n");
//! ```

pub mod board;
pub mod collections;
pub mod datetime;
pub mod graph;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{PlanSummaries, Tasks};
pub use datetime::LocalDateTime;
pub use graph::GraphSvg;
pub use results::{CreateResult, DeleteResult, StatusChange, UpdateResult};
pub use status::OperationStatus;

/// Status line shown for a task, with the blocked overlay applied.
///
/// Done tasks always show as done; any other task waiting on an unfinished
/// prerequisite shows as blocked.
pub(crate) fn status_label(status: crate::models::TaskStatus, is_blocked: bool) -> &'static str {
    if is_blocked && status != crate::models::TaskStatus::Done {
        "⛔ Blocked"
    } else {
        status.with_icon()
    }
}
