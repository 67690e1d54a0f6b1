//! Circular dependency-graph layout.
//!
//! Node `i` of `N` sits at angle `(i / N) * 2π` on a circle around the
//! viewport centre, in list order. Each resolvable prerequisite is joined to
//! its dependent by a quadratic curve whose control point is the chord
//! midpoint raised by a fixed bow; the arrowhead sits where that curve
//! enters the dependent's node circle.

use std::f64::consts::TAU;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::{Task, TaskStatus},
    resolver::DependencyGraph,
};

/// Ellipsis appended to truncated labels.
const ELLIPSIS: &str = "...";
/// Bisection steps used to find where an edge meets a node rim.
const RIM_SEARCH_STEPS: usize = 48;

/// A point in viewport coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// How a node is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeFill {
    /// The task is done
    Completed,
    /// Anything else; drawn in the theme's primary colour
    Active,
}

impl NodeFill {
    pub fn for_status(status: TaskStatus) -> Self {
        if status == TaskStatus::Done {
            NodeFill::Completed
        } else {
            NodeFill::Active
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub task_id: Uuid,
    pub label: String,
    /// Angle on the layout circle, in radians
    pub angle: f64,
    pub position: Point,
    pub fill: NodeFill,
}

/// Arrow tip on an edge, with the direction of travel in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arrowhead {
    pub tip: Point,
    pub angle: f64,
}

/// A curved edge from a prerequisite (`from`) to its dependent (`to`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub from: Uuid,
    pub to: Uuid,
    pub start: Point,
    pub control: Point,
    pub end: Point,
    pub arrow: Arrowhead,
}

impl GraphEdge {
    /// Point on the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        Point::new(
            u * u * self.start.x + 2.0 * u * t * self.control.x + t * t * self.end.x,
            u * u * self.start.y + 2.0 * u * t * self.control.y + t * t * self.end.y,
        )
    }

    fn tangent_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        Point::new(
            2.0 * u * (self.control.x - self.start.x) + 2.0 * t * (self.end.x - self.control.x),
            2.0 * u * (self.control.y - self.start.y) + 2.0 * t * (self.end.y - self.control.y),
        )
    }
}

/// The complete projection, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLayout {
    pub width: f64,
    pub height: f64,
    pub node_radius: f64,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Geometry of the circular layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleLayout {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub radius: f64,
    pub node_radius: f64,
    /// How far above the chord midpoint each curve's control point sits
    pub bow: f64,
    /// Labels longer than this many characters are shortened
    pub label_limit: usize,
}

impl Default for CircleLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            center: Point::new(400.0, 300.0),
            radius: 220.0,
            node_radius: 40.0,
            bow: 40.0,
            label_limit: 20,
        }
    }
}

impl CircleLayout {
    /// Angle and position of node `index` out of `count`.
    pub fn place(&self, index: usize, count: usize) -> (f64, Point) {
        let angle = if count == 0 {
            0.0
        } else {
            index as f64 / count as f64 * TAU
        };
        let position = Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        );
        (angle, position)
    }

    /// Projects a task list onto the circle.
    ///
    /// Cycles are drawn like any other edges; this projection needs no
    /// depths.
    pub fn project(&self, tasks: &[Task]) -> GraphLayout {
        let graph = DependencyGraph::new(tasks);

        let nodes: Vec<GraphNode> = tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let (angle, position) = self.place(index, tasks.len());
                GraphNode {
                    task_id: task.id,
                    label: truncate_label(&task.title, self.label_limit),
                    angle,
                    position,
                    fill: NodeFill::for_status(task.status),
                }
            })
            .collect();

        let edges = tasks
            .iter()
            .enumerate()
            .flat_map(|(index, _)| {
                graph
                    .prerequisites(index)
                    .iter()
                    .map(move |&dep| (dep, index))
            })
            .map(|(from, to)| self.edge(&nodes[from], &nodes[to]))
            .collect();

        GraphLayout {
            width: self.width,
            height: self.height,
            node_radius: self.node_radius,
            nodes,
            edges,
        }
    }

    fn edge(&self, from: &GraphNode, to: &GraphNode) -> GraphEdge {
        let start = from.position;
        let end = to.position;
        let control = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0 - self.bow);

        let mut edge = GraphEdge {
            from: from.task_id,
            to: to.task_id,
            start,
            control,
            end,
            arrow: Arrowhead {
                tip: end,
                angle: 0.0,
            },
        };
        edge.arrow = self.arrowhead(&edge);
        edge
    }

    /// Places the arrow where the curve crosses the dependent's rim.
    ///
    /// Falls back to the curve's end point when the curve starts inside the
    /// node circle (overlapping nodes or a self-reference).
    fn arrowhead(&self, edge: &GraphEdge) -> Arrowhead {
        let outside = |t: f64| edge.point_at(t).distance(edge.end) > self.node_radius;

        let t = if outside(0.0) {
            let (mut lo, mut hi) = (0.0, 1.0);
            for _ in 0..RIM_SEARCH_STEPS {
                let mid = (lo + hi) / 2.0;
                if outside(mid) {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            hi
        } else {
            1.0
        };

        let tangent = edge.tangent_at(t);
        let angle = if tangent.x == 0.0 && tangent.y == 0.0 {
            0.0
        } else {
            tangent.y.atan2(tangent.x)
        };
        Arrowhead {
            tip: edge.point_at(t),
            angle,
        }
    }
}

/// Shortens `title` to fit `limit` characters, ending it with `...`.
///
/// ```rust
/// use waypoint_core::layout::truncate_label;
///
/// assert_eq!(truncate_label("Short", 20), "Short");
/// assert_eq!(
///     truncate_label("Configure the deployment pipeline", 20),
///     "Configure the depl..."
/// );
/// ```
pub fn truncate_label(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }
    let keep = limit.saturating_sub(2);
    let mut label: String = title.chars().take(keep).collect();
    label.push_str(ELLIPSIS);
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn task(title: &str, deps: &[&str]) -> Task {
        Task::new(title).with_dependencies(deps.iter().copied())
    }

    #[test]
    fn test_uniform_angular_spacing() {
        let tasks: Vec<Task> = (0..7).map(|i| task(&format!("T{i}"), &[])).collect();
        let layout = CircleLayout::default().project(&tasks);

        assert_eq!(layout.nodes[0].angle, 0.0);
        assert!((layout.nodes[0].position.x - 620.0).abs() < EPSILON);
        assert!((layout.nodes[0].position.y - 300.0).abs() < EPSILON);
        for pair in layout.nodes.windows(2) {
            assert!((pair[1].angle - pair[0].angle - TAU / 7.0).abs() < EPSILON);
        }
        for node in &layout.nodes {
            let r = node.position.distance(Point::new(400.0, 300.0));
            assert!((r - 220.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_edges_follow_resolvable_dependencies() {
        let tasks = vec![task("A", &[]), task("B", &["A", "Ghost"]), task("C", &["A", "B"])];
        let layout = CircleLayout::default().project(&tasks);

        let pairs: Vec<(Uuid, Uuid)> = layout.edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(
            pairs,
            vec![
                (tasks[0].id, tasks[1].id),
                (tasks[0].id, tasks[2].id),
                (tasks[1].id, tasks[2].id),
            ]
        );
    }

    #[test]
    fn test_edge_control_point_is_raised_midpoint() {
        let tasks = vec![task("A", &[]), task("B", &["A"])];
        let layout = CircleLayout::default().project(&tasks);
        let edge = &layout.edges[0];

        assert_eq!(edge.start, layout.nodes[0].position);
        assert_eq!(edge.end, layout.nodes[1].position);
        assert!((edge.control.x - (edge.start.x + edge.end.x) / 2.0).abs() < EPSILON);
        assert!((edge.control.y - ((edge.start.y + edge.end.y) / 2.0 - 40.0)).abs() < EPSILON);
    }

    #[test]
    fn test_arrowhead_sits_on_dependent_rim() {
        let tasks = vec![task("A", &[]), task("B", &["A"]), task("C", &["A"])];
        let layout = CircleLayout::default().project(&tasks);

        for edge in &layout.edges {
            let gap = edge.arrow.tip.distance(edge.end);
            assert!((gap - 40.0).abs() < 1e-6, "tip is {gap} from centre");
        }
    }

    #[test]
    fn test_self_reference_arrow_falls_back_to_end() {
        let tasks = vec![task("Loop", &["Loop"])];
        let layout = CircleLayout::default().project(&tasks);
        assert_eq!(layout.edges.len(), 1);
        assert_eq!(layout.edges[0].arrow.tip, layout.edges[0].end);
    }

    #[test]
    fn test_fill_reflects_completion() {
        let tasks = vec![
            task("A", &[]).with_status(TaskStatus::Done),
            task("B", &[]).with_status(TaskStatus::InProgress),
        ];
        let layout = CircleLayout::default().project(&tasks);
        assert_eq!(layout.nodes[0].fill, NodeFill::Completed);
        assert_eq!(layout.nodes[1].fill, NodeFill::Active);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Exactly twenty chars", 20), "Exactly twenty chars");
        assert_eq!(truncate_label("Twenty-one characters", 20), "Twenty-one charact...");
        assert_eq!(truncate_label("ÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅ", 20).chars().count(), 21);
    }

    #[test]
    fn test_empty_layout() {
        let layout = CircleLayout::default().project(&[]);
        assert!(layout.nodes.is_empty());
        assert!(layout.edges.is_empty());
        assert_eq!(layout.width, 800.0);
    }
}
