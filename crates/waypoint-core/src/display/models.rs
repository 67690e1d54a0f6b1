//! Display implementations for domain models.
//!
//! Plans render with their tasks in list order and overlay the derived
//! blocked state. A task rendered on its own has no plan context, so it
//! shows only its stored status.

use std::fmt;

use super::{datetime::LocalDateTime, status_label};
use crate::{
    models::{DurationUnit, Plan, PlanSummary, Priority, Task, TaskStatus, Theme},
    resolver::blockers,
};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = PlanSummary::from(self);

        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Created: {}", LocalDateTime::new(&self.created_at))?;
        writeln!(
            f,
            "- Progress: {}/{} done ({}%)",
            summary.completed_tasks,
            summary.total_tasks,
            summary.progress_percent()
        )?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if self.tasks.is_empty() {
            writeln!(f, "\nNo tasks in this plan.")?;
            return Ok(());
        }

        writeln!(f, "\n## Tasks")?;
        writeln!(f)?;
        for task in &self.tasks {
            let waiting_on: Vec<&str> = blockers(task, &self.tasks)
                .into_iter()
                .map(|t| t.title.as_str())
                .collect();
            task.fmt_task(f, !waiting_on.is_empty())?;
            if !waiting_on.is_empty() && task.status != TaskStatus::Done {
                writeln!(f, "- Waiting on: {}", waiting_on.join(", "))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Task {
    fn fmt_task(&self, f: &mut fmt::Formatter<'_>, is_blocked: bool) -> fmt::Result {
        writeln!(
            f,
            "### {} ({})",
            self.title,
            status_label(self.status, is_blocked)
        )?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f, "- Effort: {}", self.effort())?;
        if !self.dependencies.is_empty() {
            writeln!(f, "- Depends on: {}", self.dependencies.join(", "))?;
        }
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_task(f, false)?;
        writeln!(f)
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.active { " (active)" } else { "" };
        writeln!(f, "## {} (ID: {}){marker}", self.name, self.id)?;
        writeln!(f)?;

        write!(
            f,
            "- **Progress**: {}/{} done ({}%)",
            self.completed_tasks,
            self.total_tasks,
            self.progress_percent()
        )?;
        if self.in_progress_tasks > 0 {
            write!(f, ", {} in progress", self.in_progress_tasks)?;
        }
        if self.blocked_tasks > 0 {
            write!(f, ", {} blocked", self.blocked_tasks)?;
        }
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "- **Description**: {}", self.description)?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime::new(&self.created_at))?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use uuid::Uuid;

    use super::*;

    fn create_test_plan() -> Plan {
        Plan {
            id: Uuid::new_v4(),
            name: "Launch".to_string(),
            description: "Ship the product".to_string(),
            tasks: vec![
                Task::new("Build").with_status(TaskStatus::InProgress),
                Task::new("Release").with_dependencies(["Build", "Marketing"]),
            ],
            created_at: Timestamp::from_second(1_640_995_200).unwrap(),
        }
    }

    #[test]
    fn test_plan_display_overlays_blocked_state() {
        let plan = create_test_plan();
        let output = plan.to_string();

        assert!(output.starts_with("# Launch\n"));
        assert!(output.contains("- Progress: 0/2 done (0%)"));
        assert!(output.contains("### Build (➤ In Progress)"));
        assert!(output.contains("### Release (⛔ Blocked)"));
        assert!(output.contains("- Depends on: Build, Marketing"));
        assert!(output.contains("- Waiting on: Build\n"));
    }

    #[test]
    fn test_empty_plan_display() {
        let mut plan = create_test_plan();
        plan.tasks.clear();
        assert!(plan.to_string().contains("No tasks in this plan."));
    }

    #[test]
    fn test_standalone_task_shows_stored_status() {
        let task = Task::new("Release").with_dependencies(["Build"]);
        let output = task.to_string();
        assert!(output.contains("### Release (○ Todo)"));
        assert!(output.contains("- Effort: 0h"));
    }

    #[test]
    fn test_plan_summary_display() {
        let mut plan = create_test_plan();
        plan.tasks[0].status = TaskStatus::Done;
        let summary = PlanSummary::from(&plan).with_active(true);
        let output = summary.to_string();

        assert!(output.contains("## Launch (ID: "));
        assert!(output.contains("(active)"));
        assert!(output.contains("- **Progress**: 1/2 done (50%)"));
        assert!(!output.contains("blocked"));
        assert!(output.contains("- **Description**: Ship the product"));
    }
}
