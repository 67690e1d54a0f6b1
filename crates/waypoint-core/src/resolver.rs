//! Dependency resolution for a plan's task list.
//!
//! Tasks reference their prerequisites by title. [`DependencyGraph`]
//! normalizes those references once into index-based edges (first
//! occurrence wins for duplicate titles, dangling titles are dropped) and
//! derives two facts per task:
//!
//! - **depth**: the length of the longest prerequisite chain ending at the
//!   task. Tasks with no resolvable prerequisite sit at depth 0.
//! - **blocked**: whether any resolvable prerequisite is not yet done.
//!
//! Depth is computed with an explicit stack and an on-path set, so a cyclic
//! reference graph fails with [`PlannerError::CyclicDependency`] instead of
//! recursing without bound.
//!
//! ```rust
//! use waypoint_core::{models::Task, resolver::DependencyGraph};
//!
//! let tasks = vec![
//!     Task::new("A"),
//!     Task::new("B").with_dependencies(["A"]),
//!     Task::new("C").with_dependencies(["B", "Ghost"]),
//! ];
//! let graph = DependencyGraph::new(&tasks);
//!
//! assert_eq!(graph.depths()?, vec![0, 1, 2]);
//! assert!(graph.is_blocked(1));
//! # Ok::<(), waypoint_core::PlannerError>(())
//! ```

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::{Task, TaskStatus},
    PlannerError, Result,
};

/// Depths already computed during one traversal, keyed by task ID.
pub type DepthMemo = HashMap<Uuid, u32>;

/// Derived per-task state consumed by the board and list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub depth: u32,
    pub is_blocked: bool,
}

/// Index-based view of the title references inside one task list.
#[derive(Debug)]
pub struct DependencyGraph<'a> {
    tasks: &'a [Task],
    by_title: HashMap<&'a str, usize>,
    edges: Vec<Vec<usize>>,
}

impl<'a> DependencyGraph<'a> {
    /// Builds the title index and resolves every dependency reference.
    pub fn new(tasks: &'a [Task]) -> Self {
        let mut by_title = HashMap::with_capacity(tasks.len());
        for (index, task) in tasks.iter().enumerate() {
            by_title.entry(task.title.as_str()).or_insert(index);
        }

        let edges = tasks
            .iter()
            .map(|task| {
                task.dependencies
                    .iter()
                    .filter_map(|title| by_title.get(title.as_str()).copied())
                    .collect()
            })
            .collect();

        Self {
            tasks,
            by_title,
            edges,
        }
    }

    pub fn tasks(&self) -> &'a [Task] {
        self.tasks
    }

    /// Index of the task a dependency title refers to, if any.
    pub fn resolve(&self, title: &str) -> Option<usize> {
        self.by_title.get(title).copied()
    }

    /// Indices of the resolvable prerequisites of the task at `index`, in
    /// the order they are listed.
    pub fn prerequisites(&self, index: usize) -> &[usize] {
        self.edges.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether any resolvable prerequisite of the task at `index` is not done.
    pub fn is_blocked(&self, index: usize) -> bool {
        self.prerequisites(index)
            .iter()
            .any(|&dep| self.tasks[dep].status != TaskStatus::Done)
    }

    /// Depth of every task, in list order.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::CyclicDependency` if the resolvable references
    /// contain a cycle.
    pub fn depths(&self) -> Result<Vec<u32>> {
        let mut known = vec![None; self.tasks.len()];
        (0..self.tasks.len())
            .map(|index| self.fill_depth(index, &mut known))
            .collect()
    }

    /// Depth and blocked flag of every task, in list order.
    pub fn resolutions(&self) -> Result<Vec<Resolution>> {
        Ok(self
            .depths()?
            .into_iter()
            .enumerate()
            .map(|(index, depth)| Resolution {
                depth,
                is_blocked: self.is_blocked(index),
            })
            .collect())
    }

    /// Depth of the task at `start`, reusing and extending `memo`.
    pub fn depth_at(&self, start: usize, memo: &mut DepthMemo) -> Result<u32> {
        let mut known: Vec<Option<u32>> = self
            .tasks
            .iter()
            .map(|task| memo.get(&task.id).copied())
            .collect();
        let depth = self.fill_depth(start, &mut known)?;
        for (task, depth) in self.tasks.iter().zip(known) {
            if let Some(depth) = depth {
                memo.entry(task.id).or_insert(depth);
            }
        }
        Ok(depth)
    }

    /// Computes the depth at `start` and every depth it needs, recording
    /// them in `known` by list index.
    fn fill_depth(&self, start: usize, known: &mut [Option<u32>]) -> Result<u32> {
        if let Some(depth) = known[start] {
            return Ok(depth);
        }

        let mut on_path = vec![false; self.tasks.len()];
        // Each frame is a node and the next edge of it to explore.
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        on_path[start] = true;

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            let edges = &self.edges[node];

            if cursor < edges.len() {
                frame.1 += 1;
                let next = edges[cursor];
                if known[next].is_some() {
                    continue;
                }
                if on_path[next] {
                    return Err(self.cycle_error(&stack, next));
                }
                on_path[next] = true;
                stack.push((next, 0));
            } else {
                let depth = edges
                    .iter()
                    .map(|&dep| known[dep].map_or(0, |d| d + 1))
                    .max()
                    .unwrap_or(0);
                known[node] = Some(depth);
                on_path[node] = false;
                stack.pop();
            }
        }

        Ok(known[start].unwrap_or(0))
    }

    fn cycle_error(&self, stack: &[(usize, usize)], reentered: usize) -> PlannerError {
        let cycle = stack
            .iter()
            .map(|&(index, _)| index)
            .skip_while(|&index| index != reentered)
            .chain(std::iter::once(reentered))
            .map(|index| self.tasks[index].title.clone())
            .collect();
        PlannerError::CyclicDependency { cycle }
    }
}

/// Depth of `task` within `all_tasks`.
///
/// `task` does not need to be a member of `all_tasks`; its references are
/// resolved against the list either way. Dangling references contribute
/// nothing.
///
/// # Errors
///
/// Returns `PlannerError::CyclicDependency` when a cycle is reachable from
/// `task`.
pub fn compute_depth(task: &Task, all_tasks: &[Task], memo: &mut DepthMemo) -> Result<u32> {
    let graph = DependencyGraph::new(all_tasks);
    if let Some(index) = all_tasks.iter().position(|t| t.id == task.id) {
        return graph.depth_at(index, memo);
    }

    let mut depth = 0;
    for title in &task.dependencies {
        if let Some(index) = graph.resolve(title) {
            depth = depth.max(graph.depth_at(index, memo)? + 1);
        }
    }
    Ok(depth)
}

/// Whether any dependency of `task` resolves to a task that is not done.
///
/// Titles that match nothing in `all_tasks` never block.
pub fn is_blocked(task: &Task, all_tasks: &[Task]) -> bool {
    task.dependencies.iter().any(|title| {
        all_tasks
            .iter()
            .find(|t| t.title == *title)
            .is_some_and(|t| t.status != TaskStatus::Done)
    })
}

/// The unfinished prerequisites that make `task` blocked, in listed order.
pub fn blockers<'a>(task: &Task, all_tasks: &'a [Task]) -> Vec<&'a Task> {
    task.dependencies
        .iter()
        .filter_map(|title| all_tasks.iter().find(|t| t.title == *title))
        .filter(|t| t.status != TaskStatus::Done)
        .collect()
}

/// Per-task `{ depth, is_blocked }` for a whole task list.
pub fn resolve_plan(tasks: &[Task]) -> Result<Vec<Resolution>> {
    DependencyGraph::new(tasks).resolutions()
}

/// Tasks that can be worked on now: not done and not blocked.
pub fn ready_tasks(tasks: &[Task]) -> Vec<&Task> {
    let graph = DependencyGraph::new(tasks);
    tasks
        .iter()
        .enumerate()
        .filter(|(index, task)| task.status != TaskStatus::Done && !graph.is_blocked(*index))
        .map(|(_, task)| task)
        .collect()
}

/// Tasks that list `title` among their dependencies.
pub fn dependents_of<'a>(title: &str, tasks: &'a [Task]) -> Vec<&'a Task> {
    tasks.iter().filter(|task| task.depends_on(title)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, deps: &[&str]) -> Task {
        Task::new(title).with_dependencies(deps.iter().copied())
    }

    fn depths(tasks: &[Task]) -> Vec<u32> {
        DependencyGraph::new(tasks).depths().unwrap()
    }

    #[test]
    fn test_chain_depths() {
        let tasks = vec![task("A", &[]), task("B", &["A"]), task("C", &["B"])];
        assert_eq!(depths(&tasks), vec![0, 1, 2]);
    }

    #[test]
    fn test_depth_is_longest_chain() {
        let tasks = vec![
            task("D", &["A", "C"]),
            task("A", &[]),
            task("B", &["A"]),
            task("C", &["B"]),
        ];
        assert_eq!(depths(&tasks), vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_dangling_reference_adds_no_depth() {
        let tasks = vec![task("Solo", &["Nonexistent"])];
        assert_eq!(depths(&tasks), vec![0]);
        assert!(!is_blocked(&tasks[0], &tasks));

        let tasks = vec![task("A", &[]), task("B", &["A", "Ghost"])];
        assert_eq!(depths(&tasks), vec![0, 1]);
    }

    #[test]
    fn test_blocked_follows_prerequisite_status() {
        let mut tasks = vec![task("A", &[]), task("B", &["A"])];
        assert!(is_blocked(&tasks[1], &tasks));
        assert!(!is_blocked(&tasks[0], &tasks));

        tasks[0].status = TaskStatus::InProgress;
        assert!(is_blocked(&tasks[1], &tasks));

        tasks[0].status = TaskStatus::Done;
        assert!(!is_blocked(&tasks[1], &tasks));
        assert!(!DependencyGraph::new(&tasks).is_blocked(1));
    }

    #[test]
    fn test_deleted_prerequisite_becomes_dangling() {
        let mut tasks = vec![task("A", &[]), task("B", &["A"])];
        assert!(is_blocked(&tasks[1], &tasks));

        tasks.remove(0);
        assert!(!is_blocked(&tasks[0], &tasks));
        assert_eq!(depths(&tasks), vec![0]);
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first() {
        let mut tasks = vec![task("A", &[]), task("A", &["X"]), task("X", &[]), task("B", &["A"])];
        tasks[0].status = TaskStatus::Done;
        let graph = DependencyGraph::new(&tasks);

        assert_eq!(graph.resolve("A"), Some(0));
        assert_eq!(graph.prerequisites(3), &[0]);
        assert!(!graph.is_blocked(3));
        assert_eq!(graph.depths().unwrap(), vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_cycle_is_reported_with_path() {
        let tasks = vec![task("A", &["C"]), task("B", &["A"]), task("C", &["B"])];
        match DependencyGraph::new(&tasks).depths() {
            Err(PlannerError::CyclicDependency { cycle }) => {
                assert_eq!(cycle, vec!["A", "C", "B", "A"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let tasks = vec![task("Loop", &["Loop"])];
        match DependencyGraph::new(&tasks).depths() {
            Err(PlannerError::CyclicDependency { cycle }) => {
                assert_eq!(cycle, vec!["Loop", "Loop"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_cycle_elsewhere_does_not_affect_unrelated_depth() {
        let tasks = vec![task("A", &[]), task("B", &["A"]), task("X", &["Y"]), task("Y", &["X"])];
        let graph = DependencyGraph::new(&tasks);
        let mut memo = DepthMemo::new();
        assert_eq!(graph.depth_at(1, &mut memo).unwrap(), 1);
        assert!(graph.depth_at(2, &mut memo).is_err());
    }

    #[test]
    fn test_compute_depth_uses_memo() {
        let tasks = vec![task("A", &[]), task("B", &["A"]), task("C", &["A", "B"])];
        let mut memo = DepthMemo::new();

        assert_eq!(compute_depth(&tasks[2], &tasks, &mut memo).unwrap(), 2);
        assert_eq!(memo.get(&tasks[0].id), Some(&0));
        assert_eq!(memo.get(&tasks[1].id), Some(&1));

        // A task outside the list still resolves its references against it.
        let outsider = task("Z", &["C", "Missing"]);
        assert_eq!(compute_depth(&outsider, &tasks, &mut memo).unwrap(), 3);
    }

    #[test]
    fn test_depths_ignore_repeated_ids() {
        let mut tasks = vec![task("A", &[]), task("B", &["A"]), task("C", &["B"])];
        tasks[2].id = tasks[0].id;
        assert_eq!(depths(&tasks), vec![0, 1, 2]);
    }

    #[test]
    fn test_long_chain_does_not_overflow_stack() {
        let mut tasks = vec![task("T0", &[])];
        for i in 1..20_000 {
            let previous = format!("T{}", i - 1);
            tasks.push(task(&format!("T{i}"), &[previous.as_str()]));
        }
        // Deepest task first so the traversal walks the whole chain at once.
        tasks.reverse();
        assert_eq!(depths(&tasks)[0], 19_999);
    }

    #[test]
    fn test_resolve_plan_and_ready_tasks() {
        let mut tasks = vec![task("A", &[]), task("B", &["A"]), task("C", &[])];
        tasks[2].status = TaskStatus::Done;

        let resolutions = resolve_plan(&tasks).unwrap();
        assert_eq!(
            resolutions[1],
            Resolution {
                depth: 1,
                is_blocked: true
            }
        );

        let ready: Vec<&str> = ready_tasks(&tasks).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(ready, vec!["A"]);
    }

    #[test]
    fn test_blockers_lists_unfinished_prerequisites() {
        let tasks = vec![
            task("A", &[]).with_status(TaskStatus::Done),
            task("B", &[]),
            task("C", &["A", "B", "Ghost"]),
        ];
        let titles: Vec<&str> = blockers(&tasks[2], &tasks)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B"]);
        assert!(blockers(&tasks[1], &tasks).is_empty());
    }

    #[test]
    fn test_dependents_of() {
        let tasks = vec![task("A", &[]), task("B", &["A"]), task("C", &["A", "B"])];
        let titles: Vec<&str> = dependents_of("A", &tasks)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "C"]);
        assert!(dependents_of("C", &tasks).is_empty());
    }
}
