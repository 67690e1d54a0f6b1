//! Command definitions and handlers for the terminal interface.
//!
//! Argument structs implement the CLI side of the parameter wrapper pattern:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner → Display → Renderer
//! ```
//!
//! Core parameter types stay free of clap attributes; each wrapper here adds
//! flags, help text and value enums, then converts into its core
//! counterpart with `From`.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use waypoint_core::{
    GraphSvg, Planner, PlannerError,
    display::{LocalDateTime, OperationStatus},
    models::{DurationUnit, Priority, TaskStatus, Theme},
    params::*,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Plan arguments
// ============================================================================

/// Create an empty plan to fill in by hand
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Name of the plan
    pub name: String,
    #[arg(
        short,
        long,
        help = "Description of the goal (defaults to \"New manual workflow\")"
    )]
    pub description: Option<String>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan::manual(val.name, val.description)
    }
}

/// Import a plan from a JSON document
///
/// The document has the shape `{ name, description, tasks: [{ title,
/// description, priority, duration, durationUnit, dependencies }] }`, as
/// produced by an assistant decomposing a goal.
#[derive(Args)]
pub struct ImportPlanArgs {
    #[arg(help = "Path to the JSON file, or '-' to read standard input")]
    pub source: String,
}

/// Select a plan by ID, or use the active plan
#[derive(Args)]
pub struct PlanRefArgs {
    #[arg(help = "ID of the plan (defaults to the active plan)")]
    pub id: Option<String>,
}

impl From<PlanRefArgs> for PlanRef {
    fn from(val: PlanRefArgs) -> Self {
        PlanRef { id: val.id }
    }
}

/// Show the circular dependency graph of a plan
#[derive(Args)]
pub struct GraphArgs {
    #[command(flatten)]
    pub plan: PlanRefArgs,
    /// Emit an SVG document instead of the text layout
    #[arg(long)]
    pub svg: bool,
    /// Write the SVG to this file instead of standard output
    #[arg(short, long, requires = "svg")]
    pub output: Option<PathBuf>,
}

/// Make a plan the active one
#[derive(Args)]
pub struct SelectPlanArgs {
    #[arg(help = "ID of the plan to make active")]
    pub id: String,
}

impl From<SelectPlanArgs> for Id {
    fn from(val: SelectPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    #[arg(help = "ID of the plan to permanently delete")]
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create an empty plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Import a plan from JSON
    #[command(alias = "i")]
    Import(ImportPlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a plan with all its tasks
    #[command(alias = "s")]
    Show(PlanRefArgs),
    /// Show a plan as depth-ordered columns
    #[command(alias = "b")]
    Board(PlanRefArgs),
    /// Show a plan's dependency graph
    #[command(alias = "g")]
    Graph(GraphArgs),
    /// Make a plan the active one
    Select(SelectPlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

// ============================================================================
// Task arguments
// ============================================================================

/// Add a task to a plan
#[derive(Args)]
pub struct AddTaskArgs {
    #[arg(help = "ID of the plan to add the task to")]
    pub plan_id: String,
    /// Title of the task; other tasks refer to it by this title
    pub title: String,
    #[arg(short, long, default_value = "", help = "What needs to be done")]
    pub description: String,
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
    pub priority: PriorityArg,
    #[arg(long, default_value_t = 1.0, help = "Estimated effort, in --unit")]
    pub duration: f64,
    #[arg(long, value_enum, default_value_t = DurationUnitArg::Hours)]
    pub unit: DurationUnitArg,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Titles of prerequisite tasks as comma-separated list"
    )]
    pub deps: Vec<String>,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            plan_id: val.plan_id,
            task: TaskDraft {
                title: val.title,
                description: val.description,
                priority: val.priority.into(),
                duration: val.duration,
                duration_unit: val.unit.into(),
                dependencies: val.deps,
            },
        }
    }
}

/// Edit a task's details
///
/// Only the given fields change. Renaming a task does not update other tasks
/// that list its old title as a dependency.
#[derive(Args)]
pub struct UpdateTaskArgs {
    #[command(flatten)]
    pub target: TaskRefArgs,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New description")]
    pub description: Option<String>,
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    #[arg(long)]
    pub duration: Option<f64>,
    #[arg(long, value_enum)]
    pub unit: Option<DurationUnitArg>,
    #[arg(
        long,
        value_delimiter = ',',
        conflicts_with = "clear_deps",
        help = "Replacement prerequisite titles as comma-separated list"
    )]
    pub deps: Option<Vec<String>>,
    /// Remove all prerequisites
    #[arg(long)]
    pub clear_deps: bool,
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        let dependencies = if val.clear_deps {
            Some(Vec::new())
        } else {
            val.deps
        };
        UpdateTask {
            plan_id: val.target.plan_id,
            task_id: val.target.task_id,
            title: val.title,
            description: val.description,
            priority: val.priority.map(|p| Priority::from(p).as_str().to_string()),
            duration: val.duration,
            duration_unit: val.unit.map(|u| DurationUnit::from(u).as_str().to_string()),
            dependencies,
        }
    }
}

/// Address one task of one plan
#[derive(Args)]
pub struct TaskRefArgs {
    #[arg(help = "ID of the plan owning the task")]
    pub plan_id: String,
    #[arg(help = "ID of the task")]
    pub task_id: String,
}

impl From<TaskRefArgs> for TaskRef {
    fn from(val: TaskRefArgs) -> Self {
        TaskRef {
            plan_id: val.plan_id,
            task_id: val.task_id,
        }
    }
}

/// Change a task's status
///
/// A task waiting on unfinished prerequisites can still change status; a
/// warning names the prerequisites. Pass --strict to refuse instead.
#[derive(Args)]
pub struct SetStatusArgs {
    #[command(flatten)]
    pub target: TaskRefArgs,
    #[arg(value_enum)]
    pub status: TaskStatusArg,
    #[command(flatten)]
    pub gate: StrictArgs,
}

/// Shortcut for a fixed status change
#[derive(Args)]
pub struct StatusShortcutArgs {
    #[command(flatten)]
    pub target: TaskRefArgs,
    #[command(flatten)]
    pub gate: StrictArgs,
}

#[derive(Args)]
pub struct StrictArgs {
    /// Refuse the change while prerequisites are unfinished
    #[arg(long)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to a plan
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Edit a task's details
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Set a task's status
    #[command(alias = "st")]
    Status(SetStatusArgs),
    /// Mark a task as in progress
    Start(StatusShortcutArgs),
    /// Mark a task as done
    Done(StatusShortcutArgs),
    /// Delete a task
    #[command(aliases = ["d", "rm"])]
    Delete(TaskRefArgs),
    /// List tasks that can be started now
    #[command(alias = "r")]
    Ready(PlanRefArgs),
}

/// Show the colour theme, or change it
#[derive(Args)]
pub struct ThemeArgs {
    #[arg(value_enum)]
    pub theme: Option<ThemeArg>,
}

// ============================================================================
// Value enums
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DurationUnitArg {
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl From<DurationUnitArg> for DurationUnit {
    fn from(val: DurationUnitArg) -> Self {
        match val {
            DurationUnitArg::Minutes => DurationUnit::Minutes,
            DurationUnitArg::Hours => DurationUnit::Hours,
            DurationUnitArg::Days => DurationUnit::Days,
            DurationUnitArg::Weeks => DurationUnit::Weeks,
        }
    }
}

/// Statuses a task can be set to. Blocked is derived and never set.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TaskStatusArg {
    Todo,
    InProgress,
    Done,
}

impl From<TaskStatusArg> for TaskStatus {
    fn from(val: TaskStatusArg) -> Self {
        match val {
            TaskStatusArg::Todo => TaskStatus::Todo,
            TaskStatusArg::InProgress => TaskStatus::InProgress,
            TaskStatusArg::Done => TaskStatus::Done,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Peach,
    Onyx,
    Cyber,
}

impl From<ThemeArg> for Theme {
    fn from(val: ThemeArg) -> Self {
        match val {
            ThemeArg::Peach => Theme::Peach,
            ThemeArg::Onyx => Theme::Onyx,
            ThemeArg::Cyber => Theme::Cyber,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs one command against a planner and renders the outcome.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let result = self
                    .planner
                    .create_plan_result(&args.into())
                    .await
                    .context("Failed to create plan")?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Import(args) => self.import_plan(&args.source).await,
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => {
                let plan = self
                    .planner
                    .show_plan(&args.into())
                    .context("Failed to show plan")?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Board(args) => {
                let board = self
                    .planner
                    .plan_board(&args.into())
                    .context("Failed to lay out plan")?;
                self.renderer.render(&board.to_string())
            }
            PlanCommands::Graph(args) => self.show_graph(args),
            PlanCommands::Select(args) => {
                let plan = self
                    .planner
                    .select_plan(&args.into())
                    .await
                    .context("Failed to select plan")?;
                let status =
                    OperationStatus::success(format!("'{}' is now the active plan", plan.name));
                self.renderer.render(&status.to_string())
            }
            PlanCommands::Delete(args) => {
                if !args.confirm {
                    bail!(
                        "Plan deletion requires --confirm. This permanently deletes the plan and all its tasks."
                    );
                }
                let result = self
                    .planner
                    .delete_plan_result(&args.into())
                    .await
                    .context("Failed to delete plan")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_task_command(mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let result = self
                    .planner
                    .add_task_result(&args.into())
                    .await
                    .context("Failed to add task")?;
                self.renderer.render(&result.to_string())
            }
            TaskCommands::Update(args) => {
                let result = self
                    .planner
                    .update_task_result(&args.into())
                    .await
                    .context("Failed to update task")?;
                self.renderer.render(&result.to_string())
            }
            TaskCommands::Status(args) => {
                self.set_status(args.target, args.status.into(), args.gate.strict)
                    .await
            }
            TaskCommands::Start(args) => {
                self.set_status(args.target, TaskStatus::InProgress, args.gate.strict)
                    .await
            }
            TaskCommands::Done(args) => {
                self.set_status(args.target, TaskStatus::Done, args.gate.strict)
                    .await
            }
            TaskCommands::Delete(args) => {
                let result = self
                    .planner
                    .delete_task_result(&args.into())
                    .await
                    .context("Failed to delete task")?;
                self.renderer.render(&result.to_string())
            }
            TaskCommands::Ready(args) => {
                let tasks = self
                    .planner
                    .ready_tasks(&args.into())
                    .context("Failed to list ready tasks")?;
                self.renderer
                    .render(&format!("# Ready to start\n\n{tasks}"))
            }
        }
    }

    pub async fn handle_theme(mut self, args: ThemeArgs) -> Result<()> {
        let Some(theme) = args.theme else {
            let theme = self.planner.theme();
            return self.renderer.render(&format!(
                "Theme: {theme} ({})\n",
                theme.primary_color()
            ));
        };

        let theme = self
            .planner
            .set_theme(&SetTheme {
                theme: Theme::from(theme).to_string(),
            })
            .await
            .context("Failed to set theme")?;
        let status = OperationStatus::success(format!("Theme set to {theme}"));
        self.renderer.render(&status.to_string())
    }

    /// Board of the active plan, or the plan list when nothing is active.
    pub async fn show_home(&self) -> Result<()> {
        if self.planner.workspace().active_plan().is_none() {
            return self.list_plans().await;
        }

        match self.planner.plan_board(&PlanRef::default()) {
            Ok(board) => self.renderer.render(&board.to_string()),
            Err(e @ PlannerError::CyclicDependency { .. }) => {
                debug!("Falling back to the plan view: {e}");
                let plan = self.planner.show_plan(&PlanRef::default())?;
                self.renderer.render(&plan.to_string())?;
                self.renderer
                    .render(&OperationStatus::failure(e.to_string()).to_string())
            }
            Err(e) => Err(e).context("Failed to lay out plan"),
        }
    }

    async fn list_plans(&self) -> Result<()> {
        let summaries = self.planner.list_plans_summary();
        if summaries.is_empty() {
            return self.renderer.render(&format!("# No plans yet\n\n{summaries}"));
        }

        let mut output = format!("# Plans\n\n{summaries}");
        if let Some(saved) = self
            .planner
            .last_saved()
            .await
            .context("Failed to read save time")?
        {
            output.push_str(&format!("_Last saved: {}_\n", LocalDateTime::new(&saved)));
        }
        self.renderer.render(&output)
    }

    async fn import_plan(&mut self, source: &str) -> Result<()> {
        let json = if source == "-" {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read plan from standard input")?;
            buffer
        } else {
            fs::read_to_string(source).with_context(|| format!("Failed to read {source}"))?
        };

        let params = CreatePlan::from_json(&json).context("Invalid plan document")?;
        let result = self
            .planner
            .create_plan_result(&params)
            .await
            .context("Failed to import plan")?;
        self.renderer.render(&result.to_string())
    }

    fn show_graph(&self, args: GraphArgs) -> Result<()> {
        let layout = self
            .planner
            .plan_graph(&args.plan.into())
            .context("Failed to lay out graph")?;

        if !args.svg {
            return self.renderer.render(&layout.to_string());
        }

        let svg = GraphSvg::new(&layout, self.planner.theme()).to_string();
        match args.output {
            Some(path) => {
                fs::write(&path, svg)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                let status =
                    OperationStatus::success(format!("Wrote graph to {}", path.display()));
                self.renderer.render(&status.to_string())
            }
            None => {
                print!("{svg}");
                Ok(())
            }
        }
    }

    async fn set_status(&mut self, target: TaskRefArgs, status: TaskStatus, strict: bool) -> Result<()> {
        let task_ref: TaskRef = target.into();
        if strict {
            let blockers = self
                .planner
                .task_blockers(&task_ref)
                .context("Failed to check prerequisites")?;
            if !blockers.is_empty() && status != TaskStatus::Todo {
                bail!(
                    "Task is blocked by unfinished prerequisites: {}",
                    blockers.join(", ")
                );
            }
        }

        let change = self
            .planner
            .set_task_status(&SetTaskStatus {
                plan_id: task_ref.plan_id,
                task_id: task_ref.task_id,
                status: status.as_str().to_string(),
            })
            .await
            .context("Failed to set task status")?;
        self.renderer.render(&change.to_string())
    }
}
