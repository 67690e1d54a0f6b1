use waypoint_core::{
    PlannerBuilder,
    models::Task,
    params::{CreatePlan, TaskDraft},
};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, waypoint_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// A task with the given title and prerequisite titles
#[allow(dead_code)]
pub fn task(title: &str, deps: &[&str]) -> Task {
    Task::new(title).with_dependencies(deps.iter().copied())
}

/// Plan parameters for a simple three-step chain
#[allow(dead_code)]
pub fn chain_plan(name: &str) -> CreatePlan {
    CreatePlan {
        name: name.to_string(),
        description: format!("{name} description"),
        tasks: vec![
            TaskDraft::titled("A"),
            TaskDraft::titled("B").depending_on(["A"]),
            TaskDraft::titled("C").depending_on(["B"]),
        ],
    }
}
