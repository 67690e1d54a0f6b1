//! Rendering of the circular dependency graph.
//!
//! The layout prints as a markdown table of nodes followed by an edge list.
//! [`GraphSvg`] draws the same layout as a standalone SVG document.

use std::{collections::HashMap, fmt};

use uuid::Uuid;

use crate::{
    layout::{GraphLayout, NodeFill},
    models::Theme,
};

/// Fill for completed nodes, independent of the theme.
const COMPLETED_FILL: &str = "#10b981";
const EDGE_STROKE: &str = "#94a3b8";

impl fmt::Display for GraphLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nodes.is_empty() {
            return writeln!(f, "No tasks in this plan.");
        }

        writeln!(f, "| # | Task | Angle | Position | State |")?;
        writeln!(f, "|---|------|-------|----------|-------|")?;
        for (index, node) in self.nodes.iter().enumerate() {
            let state = match node.fill {
                NodeFill::Completed => "done",
                NodeFill::Active => "open",
            };
            writeln!(
                f,
                "| {} | {} | {:.0}° | ({:.1}, {:.1}) | {state} |",
                index + 1,
                escape_table_cell(&node.label),
                node.angle.to_degrees(),
                node.position.x,
                node.position.y
            )?;
        }

        writeln!(f)?;
        if self.edges.is_empty() {
            return writeln!(f, "No dependencies.");
        }

        let labels: HashMap<Uuid, &str> = self
            .nodes
            .iter()
            .map(|node| (node.task_id, node.label.as_str()))
            .collect();
        let label = |id: &Uuid| labels.get(id).copied().unwrap_or("?");

        writeln!(f, "## Dependencies")?;
        writeln!(f)?;
        for edge in &self.edges {
            writeln!(f, "- {} → {}", label(&edge.from), label(&edge.to))?;
        }
        Ok(())
    }
}

/// SVG document for a [`GraphLayout`], coloured by a [`Theme`].
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{display::GraphSvg, layout::CircleLayout, models::{Task, Theme}};
///
/// let tasks = vec![Task::new("Dig"), Task::new("Plant").with_dependencies(["Dig"])];
/// let layout = CircleLayout::default().project(&tasks);
/// let svg = GraphSvg::new(&layout, Theme::Cyber).to_string();
///
/// assert!(svg.starts_with("<svg"));
/// assert_eq!(svg.matches("<path").count(), 1);
/// ```
pub struct GraphSvg<'a> {
    pub layout: &'a GraphLayout,
    pub theme: Theme,
}

impl<'a> GraphSvg<'a> {
    pub fn new(layout: &'a GraphLayout, theme: Theme) -> Self {
        Self { layout, theme }
    }
}

impl fmt::Display for GraphSvg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.layout;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            layout.width, layout.height, layout.width, layout.height
        )?;

        writeln!(f, "  <g class=\"edges\">")?;
        for edge in &layout.edges {
            writeln!(
                f,
                r#"    <path d="M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}" fill="none" stroke="{EDGE_STROKE}" stroke-width="2"/>"#,
                edge.start.x,
                edge.start.y,
                edge.control.x,
                edge.control.y,
                edge.end.x,
                edge.end.y
            )?;
            // Tip of the polygon sits at the local origin.
            writeln!(
                f,
                r#"    <polygon points="-10 -3.5, 0 0, -10 3.5" fill="{EDGE_STROKE}" transform="translate({:.2} {:.2}) rotate({:.2})"/>"#,
                edge.arrow.tip.x,
                edge.arrow.tip.y,
                edge.arrow.angle.to_degrees()
            )?;
        }
        writeln!(f, "  </g>")?;

        writeln!(f, "  <g class=\"nodes\">")?;
        for node in &layout.nodes {
            let fill = match node.fill {
                NodeFill::Completed => COMPLETED_FILL,
                NodeFill::Active => self.theme.primary_color(),
            };
            let (x, y) = (node.position.x, node.position.y);
            writeln!(
                f,
                r#"    <circle cx="{x:.2}" cy="{y:.2}" r="{}" fill="{fill}"/>"#,
                layout.node_radius
            )?;
            writeln!(
                f,
                r#"    <circle cx="{x:.2}" cy="{y:.2}" r="15" fill="white" opacity="0.2"/>"#
            )?;
            writeln!(
                f,
                r#"    <text x="{x:.2}" y="{:.2}" text-anchor="middle" font-size="12">{}</text>"#,
                y + layout.node_radius + 16.0,
                escape_xml(&node.label)
            )?;
        }
        writeln!(f, "  </g>")?;
        writeln!(f, "</svg>")
    }
}

/// Escapes pipes so a label stays inside its markdown table cell.
fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layout::CircleLayout,
        models::{Task, TaskStatus},
    };

    fn sample_layout() -> GraphLayout {
        let tasks = vec![
            Task::new("Design").with_status(TaskStatus::Done),
            Task::new("Build & test").with_dependencies(["Design"]),
            Task::new("Ship").with_dependencies(["Build & test", "Design"]),
        ];
        CircleLayout::default().project(&tasks)
    }

    #[test]
    fn test_text_graph_lists_nodes_and_edges() {
        let output = sample_layout().to_string();
        assert!(output.contains("| 1 | Design | 0° | (620.0, 300.0) | done |"));
        assert!(output.contains("| 2 | Build & test | 120° |"));
        assert!(output.contains("- Design → Build & test"));
        assert!(output.contains("- Build & test → Ship"));
        assert!(output.contains("- Design → Ship"));
    }

    #[test]
    fn test_text_graph_escapes_pipes_in_labels() {
        let tasks = vec![Task::new("Read | write"), Task::new("Ship")];
        let output = CircleLayout::default().project(&tasks).to_string();

        assert!(output.contains(r"| 1 | Read \| write | 0° |"));
        let row = output.lines().nth(2).unwrap();
        assert_eq!(row.matches(" | ").count(), 4);
    }

    #[test]
    fn test_svg_colours_and_escapes() {
        let layout = sample_layout();
        let svg = GraphSvg::new(&layout, Theme::Peach).to_string();

        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert_eq!(svg.matches("<path").count(), 3);
        assert_eq!(svg.matches("<polygon").count(), 3);
        assert_eq!(svg.matches(r##"fill="#10b981""##).count(), 1);
        assert_eq!(svg.matches(r##"fill="#fb923c""##).count(), 2);
        assert!(svg.contains("Build &amp; test"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_empty_graph() {
        let layout = CircleLayout::default().project(&[]);
        assert_eq!(layout.to_string(), "No tasks in this plan.\n");
        assert!(GraphSvg::new(&layout, Theme::Onyx).to_string().contains("<svg"));
    }
}
