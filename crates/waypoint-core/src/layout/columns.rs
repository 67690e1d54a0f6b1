//! Column layering for the flow board.

use serde::Serialize;

use crate::{
    models::{Plan, Task},
    resolver::DependencyGraph,
    Result,
};

/// Label of the first column.
pub const FOUNDATION_LABEL: &str = "Foundation";

/// Human-readable heading for the column at `index`.
///
/// ```rust
/// use waypoint_core::layout::column_label;
///
/// assert_eq!(column_label(0), "Foundation");
/// assert_eq!(column_label(1), "Phase 2");
/// ```
pub fn column_label(index: usize) -> String {
    if index == 0 {
        FOUNDATION_LABEL.to_string()
    } else {
        format!("Phase {}", index + 1)
    }
}

/// Groups task indices by depth into columns `0..=max_depth`.
///
/// This is a stable partition: tasks keep their list order within a column.
/// Every column up to the deepest one is present even if empty, and an
/// empty task list still yields a single (empty) column.
pub fn layer_columns(depths: &[u32]) -> Vec<Vec<usize>> {
    let column_count = depths.iter().max().map_or(1, |&max| max as usize + 1);
    let mut columns = vec![Vec::new(); column_count];
    for (index, &depth) in depths.iter().enumerate() {
        columns[depth as usize].push(index);
    }
    columns
}

/// A task as it appears on the board, with its derived state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub task: Task,
    pub depth: u32,
    pub is_blocked: bool,
}

/// One depth column of the board.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub index: usize,
    pub label: String,
    pub cards: Vec<Card>,
}

/// A plan laid out as depth-ordered columns of cards.
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Board {
    /// Lays out a task list.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::CyclicDependency` when depths cannot be
    /// computed.
    pub fn build(tasks: &[Task]) -> Result<Self> {
        let graph = DependencyGraph::new(tasks);
        let depths = graph.depths()?;

        let columns = layer_columns(&depths)
            .into_iter()
            .enumerate()
            .map(|(index, members)| Column {
                index,
                label: column_label(index),
                cards: members
                    .into_iter()
                    .map(|task_index| Card {
                        task: tasks[task_index].clone(),
                        depth: depths[task_index],
                        is_blocked: graph.is_blocked(task_index),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            name: String::new(),
            columns,
        })
    }

    /// Lays out a whole plan, keeping its name for headings.
    pub fn for_plan(plan: &Plan) -> Result<Self> {
        let mut board = Self::build(&plan.tasks)?;
        board.name = plan.name.clone();
        Ok(board)
    }

    /// All cards in column order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flat_map(|column| column.cards.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn task(title: &str, deps: &[&str]) -> Task {
        Task::new(title).with_dependencies(deps.iter().copied())
    }

    #[test]
    fn test_layer_columns_is_stable_partition() {
        let depths = [1, 0, 2, 0, 1];
        let columns = layer_columns(&depths);
        assert_eq!(columns, vec![vec![1, 3], vec![0, 4], vec![2]]);

        let mut all: Vec<usize> = columns.concat();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_layer_columns_keeps_empty_intermediate_columns() {
        let columns = layer_columns(&[0, 2]);
        assert_eq!(columns, vec![vec![0], vec![], vec![1]]);
    }

    #[test]
    fn test_empty_plan_has_single_foundation_column() {
        let board = Board::build(&[]).unwrap();
        assert_eq!(board.columns.len(), 1);
        assert_eq!(board.columns[0].label, FOUNDATION_LABEL);
        assert!(board.columns[0].cards.is_empty());
    }

    #[test]
    fn test_board_chain_has_three_columns() {
        let tasks = vec![task("A", &[]), task("B", &["A"]), task("C", &["B"])];
        let board = Board::build(&tasks).unwrap();

        let labels: Vec<&str> = board.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Foundation", "Phase 2", "Phase 3"]);
        for (index, column) in board.columns.iter().enumerate() {
            assert_eq!(column.cards.len(), 1);
            assert_eq!(column.cards[0].depth as usize, index);
        }
        assert!(!board.columns[0].cards[0].is_blocked);
        assert!(board.columns[1].cards[0].is_blocked);
    }

    #[test]
    fn test_board_card_column_matches_depth() {
        let mut tasks = vec![
            task("Ship", &["Test", "Docs"]),
            task("Docs", &[]),
            task("Build", &[]),
            task("Test", &["Build"]),
        ];
        tasks[2].status = TaskStatus::Done;
        let board = Board::build(&tasks).unwrap();

        assert_eq!(board.cards().count(), tasks.len());
        for column in &board.columns {
            for card in &column.cards {
                assert_eq!(card.depth as usize, column.index);
            }
        }
        let foundation: Vec<&str> = board.columns[0]
            .cards
            .iter()
            .map(|c| c.task.title.as_str())
            .collect();
        assert_eq!(foundation, vec!["Docs", "Build"]);
        // "Test" depends only on the finished "Build".
        assert!(!board.columns[1].cards[0].is_blocked);
    }

    #[test]
    fn test_board_rejects_cycles() {
        let tasks = vec![task("A", &["B"]), task("B", &["A"])];
        assert!(Board::build(&tasks).is_err());
    }
}
