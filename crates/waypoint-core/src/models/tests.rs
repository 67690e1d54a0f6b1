#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use serde_json::json;
    use uuid::Uuid;

    use crate::{
        models::{
            DurationUnit, Plan, PlanSummary, Priority, Snapshot, Task, TaskStatus, Theme,
            UpdateTaskRequest,
        },
        params::UpdateTask,
        PlannerError,
    };

    fn create_test_task(title: &str, status: TaskStatus, deps: &[&str]) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("Work on {title}"),
            status,
            priority: Priority::Medium,
            duration: 3.0,
            duration_unit: DurationUnit::Hours,
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn create_test_plan() -> Plan {
        Plan {
            id: Uuid::new_v4(),
            name: "Test Plan".to_string(),
            description: "A plan for tests".to_string(),
            created_at: Timestamp::from_millisecond(1_700_000_000_123).unwrap(),
            tasks: vec![
                create_test_task("Design", TaskStatus::Done, &[]),
                create_test_task("Build", TaskStatus::InProgress, &["Design"]),
                create_test_task("Test", TaskStatus::Todo, &["Build"]),
                create_test_task("Ship", TaskStatus::Todo, &["Test", "Legal review"]),
            ],
        }
    }

    #[test]
    fn test_task_serializes_with_camel_case_keys() {
        let task = create_test_task("Design", TaskStatus::InProgress, &["Research"]);
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["status"], "in-progress");
        assert_eq!(value["priority"], "medium");
        assert_eq!(value["durationUnit"], "hours");
        assert_eq!(value["dependencies"], json!(["Research"]));
        assert!(value.get("duration_unit").is_none());
    }

    #[test]
    fn test_legacy_blocked_status_reads_as_todo() {
        let value = json!({
            "id": Uuid::new_v4(),
            "title": "Old",
            "status": "blocked"
        });
        let task: Task = serde_json::from_value(value).unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.duration_unit, DurationUnit::Hours);
        assert!(task.dependencies.is_empty());
    }

    #[test]
    fn test_plan_created_at_is_epoch_milliseconds() {
        let plan = create_test_plan();
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["createdAt"], json!(1_700_000_000_123_i64));

        let back: Plan = serde_json::from_value(value).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_task_by_title_prefers_first_occurrence() {
        let mut plan = create_test_plan();
        let duplicate = create_test_task("Design", TaskStatus::Todo, &[]);
        plan.tasks.push(duplicate);

        let found = plan.task_by_title("Design").unwrap();
        assert_eq!(found.id, plan.tasks[0].id);
        assert!(plan.task_by_title("Nope").is_none());
    }

    #[test]
    fn test_plan_summary_counts() {
        let plan = create_test_plan();
        let summary = PlanSummary::from(&plan);

        assert_eq!(summary.total_tasks, 4);
        assert_eq!(summary.completed_tasks, 1);
        assert_eq!(summary.in_progress_tasks, 1);
        // "Test" waits on "Build" (in progress); "Ship" waits on "Test".
        // "Build" itself depends on a finished task.
        assert_eq!(summary.blocked_tasks, 2);
        assert_eq!(summary.progress_percent(), 25);
        assert!(!summary.active);
        assert!(summary.with_active(true).active);
    }

    #[test]
    fn test_empty_plan_progress_is_zero() {
        let mut plan = create_test_plan();
        plan.tasks.clear();
        assert_eq!(PlanSummary::from(&plan).progress_percent(), 0);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = Snapshot {
            flows: vec![create_test_plan()],
            theme: Theme::Cyber,
        };
        let json = snapshot.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["theme"], "cyber");
        assert_eq!(value["flows"].as_array().unwrap().len(), 1);

        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_snapshot_defaults_missing_fields() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert!(snapshot.flows.is_empty());
        assert_eq!(snapshot.theme, Theme::Peach);
    }

    #[test]
    fn test_snapshot_rejects_corrupt_json() {
        assert!(matches!(
            Snapshot::from_json("[1, 2"),
            Err(PlannerError::Serialization { .. })
        ));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("todo".parse::<TaskStatus>(), Ok(TaskStatus::Todo));
        assert_eq!("In-Progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("in_progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("DONE".parse::<TaskStatus>(), Ok(TaskStatus::Done));
        assert!("blocked".parse::<TaskStatus>().is_err());
        assert!("later".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_duration_unit_parsing_and_effort() {
        assert_eq!("m".parse::<DurationUnit>(), Ok(DurationUnit::Minutes));
        assert_eq!("days".parse::<DurationUnit>(), Ok(DurationUnit::Days));
        assert_eq!("Week".parse::<DurationUnit>(), Ok(DurationUnit::Weeks));
        assert!("fortnight".parse::<DurationUnit>().is_err());

        let mut task = create_test_task("Read", TaskStatus::Todo, &[]);
        task.duration = 1.5;
        task.duration_unit = DurationUnit::Days;
        assert_eq!(task.effort(), "1.5d");
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!("ONYX".parse::<Theme>(), Ok(Theme::Onyx));
        assert!("solarized".parse::<Theme>().is_err());
        assert_eq!(Theme::default().as_str(), "peach");
    }

    #[test]
    fn test_update_task_request_conversion() {
        let params = UpdateTask {
            plan_id: Uuid::new_v4().to_string(),
            task_id: Uuid::new_v4().to_string(),
            duration: Some(4.0),
            duration_unit: Some("d".to_string()),
            dependencies: Some(vec!["Design".to_string()]),
            ..Default::default()
        };

        let request = UpdateTaskRequest::try_from(&params).unwrap();
        assert_eq!(request.duration, Some(4.0));
        assert_eq!(request.duration_unit, Some(DurationUnit::Days));
        assert_eq!(request.dependencies, Some(vec!["Design".to_string()]));
        assert!(request.title.is_none());
        assert!(!request.is_empty());
        assert!(UpdateTaskRequest::default().is_empty());
    }

    #[test]
    fn test_update_task_request_rejects_bad_priority() {
        let params = UpdateTask {
            plan_id: Uuid::new_v4().to_string(),
            task_id: Uuid::new_v4().to_string(),
            priority: Some("urgent".to_string()),
            ..Default::default()
        };

        match UpdateTaskRequest::try_from(&params) {
            Err(PlannerError::InvalidInput { field, .. }) => assert_eq!(field, "priority"),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_update_task_request_rejects_bad_ids() {
        let params = UpdateTask {
            plan_id: "plan-1".to_string(),
            task_id: Uuid::new_v4().to_string(),
            ..Default::default()
        };
        assert!(matches!(
            UpdateTaskRequest::try_from(&params),
            Err(PlannerError::InvalidInput { .. })
        ));
    }
}
