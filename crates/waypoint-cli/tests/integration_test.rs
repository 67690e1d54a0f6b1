//! Integration tests comparing CLI output with the core Display
//! implementations the MCP server returns.

use std::{path::Path, process::Command};

use tempfile::TempDir;
use waypoint_core::{
    PlannerBuilder,
    display::LocalDateTime,
    params::{CreatePlan, PlanRef, TaskDraft},
};

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &Path, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wp"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn launch_plan() -> CreatePlan {
    CreatePlan {
        name: "Launch".to_string(),
        description: "Ship version one".to_string(),
        tasks: vec![
            TaskDraft::titled("Design"),
            TaskDraft::titled("Build").depending_on(["Design"]),
            TaskDraft::titled("Docs").depending_on(["Design"]),
            TaskDraft::titled("Release").depending_on(["Build", "Docs"]),
        ],
    }
}

#[tokio::test]
async fn test_views_match_core_display() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let mut planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    planner.create_plan(&launch_plan()).await.unwrap();

    let current = PlanRef::default();
    assert_eq!(
        run_cli_command(&db_path, &["plan", "show"]),
        planner.show_plan(&current).unwrap().to_string()
    );
    assert_eq!(
        run_cli_command(&db_path, &["plan", "board"]),
        planner.plan_board(&current).unwrap().to_string()
    );
    assert_eq!(
        run_cli_command(&db_path, &["plan", "graph"]),
        planner.plan_graph(&current).unwrap().to_string()
    );
    let saved = planner.last_saved().await.unwrap().expect("Save time recorded");
    assert_eq!(
        run_cli_command(&db_path, &["plan", "list"]),
        format!(
            "# Plans\n\n{}_Last saved: {}_\n",
            planner.list_plans_summary(),
            LocalDateTime::new(&saved)
        )
    );
}

#[tokio::test]
async fn test_cli_changes_are_visible_to_new_planner() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let created = run_cli_command(&db_path, &["plan", "create", "From CLI"]);
    assert!(created.contains("Created plan with ID: "));
    run_cli_command(&db_path, &["theme", "cyber"]);

    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();
    let plan = planner.show_plan(&PlanRef::default()).unwrap();
    assert_eq!(plan.name, "From CLI");
    assert_eq!(plan.description, "New manual workflow");
    assert_eq!(planner.theme().to_string(), "cyber");
}
