//! Render-ready projections of a plan's tasks.
//!
//! Two independent projections consume the resolver output:
//!
//! - [`columns`]: the flow board, tasks grouped into depth-ordered columns.
//! - [`circle`]: the dependency graph, tasks placed on a circle with curved
//!   edges from each prerequisite to its dependent.
//!
//! Both are pure functions of the task list and are recomputed on every
//! change; nothing here is persisted.

pub mod circle;
pub mod columns;

pub use circle::{
    truncate_label, Arrowhead, CircleLayout, GraphEdge, GraphLayout, GraphNode, NodeFill, Point,
};
pub use columns::{column_label, layer_columns, Board, Card, Column};
