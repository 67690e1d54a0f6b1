//! MCP server implementation for Waypoint
//!
//! This module implements the Model Context Protocol server for Waypoint,
//! letting an assistant decompose goals into plans and track them.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use tokio::{
    signal::unix::{SignalKind, signal},
    sync::Mutex,
};
use waypoint_core::Planner;

pub mod errors;
pub mod handlers;
pub mod prompts;

pub use handlers::{
    AddTask, CreatePlan, DeletePlan, McpResult, PlanRef, SetTaskStatus, TaskRef, UpdateTask,
};

/// MCP server for Waypoint
#[derive(Clone)]
pub struct WaypointMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaypointMcpServer {
    /// Create a new Waypoint MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(Arc::clone(&self.planner))
    }

    #[tool(
        name = "create_plan",
        description = "Create a plan from a decomposed goal. Provide name, description and tasks; each task has title, description, priority (low/medium/high), duration, durationUnit (minutes/hours/days/weeks) and dependencies (exact titles of other tasks in the same plan). Duplicate titles get a numeric suffix. The new plan becomes the active plan."
    )]
    async fn create_plan(&self, params: Parameters<CreatePlan>) -> McpResult {
        self.handlers().create_plan(params).await
    }

    #[tool(
        name = "list_plans",
        description = "List all plans, newest first, with progress (done/total, in progress, blocked) and which plan is active."
    )]
    async fn list_plans(&self) -> McpResult {
        self.handlers().list_plans().await
    }

    #[tool(
        name = "show_plan",
        description = "Show a plan with every task: status, priority, effort, dependencies and, for blocked tasks, which prerequisites they are waiting on. Omit id to use the active plan."
    )]
    async fn show_plan(&self, params: Parameters<PlanRef>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "show_board",
        description = "Show a plan as columns by dependency depth: 'Foundation' holds tasks with no unresolved prerequisites, 'Phase N' holds tasks whose longest prerequisite chain has N-1 links. Fails if the dependencies form a cycle. Omit id to use the active plan."
    )]
    async fn show_board(&self, params: Parameters<PlanRef>) -> McpResult {
        self.handlers().show_board(params).await
    }

    #[tool(
        name = "show_graph",
        description = "Show the dependency graph of a plan: tasks placed on a circle in list order and the prerequisite -> dependent edges. Works even when dependencies form a cycle. Omit id to use the active plan."
    )]
    async fn show_graph(&self, params: Parameters<PlanRef>) -> McpResult {
        self.handlers().show_graph(params).await
    }

    #[tool(
        name = "delete_plan",
        description = "Permanently delete a plan and all its tasks. This operation cannot be undone. You MUST set 'confirmed' to true; only do so after the user explicitly agreed."
    )]
    async fn delete_plan(&self, params: Parameters<DeletePlan>) -> McpResult {
        self.handlers().delete_plan(params).await
    }

    #[tool(
        name = "add_task",
        description = "Append a task to a plan. Requires plan_id, title, description, priority, duration and durationUnit; dependencies lists titles of prerequisite tasks. Titles that match no task are ignored when computing blocked state."
    )]
    async fn add_task(&self, params: Parameters<AddTask>) -> McpResult {
        self.handlers().add_task(params).await
    }

    #[tool(
        name = "update_task",
        description = "Edit a task's title, description, priority, duration, duration_unit or dependencies (replaces the whole list). Only provided fields change. Renaming a task does NOT update other tasks that depend on its old title."
    )]
    async fn update_task(&self, params: Parameters<UpdateTask>) -> McpResult {
        self.handlers().update_task(params).await
    }

    #[tool(
        name = "set_task_status",
        description = "Set a task's status to todo, in-progress or done. 'blocked' cannot be set; it is derived from unfinished prerequisites. The change is applied even when the task is blocked, and the response names the unfinished prerequisites; check before marking blocked work as done."
    )]
    async fn set_task_status(&self, params: Parameters<SetTaskStatus>) -> McpResult {
        self.handlers().set_task_status(params).await
    }

    #[tool(
        name = "delete_task",
        description = "Delete a task from a plan. Tasks that listed it as a dependency keep the reference, which then matches nothing and no longer blocks them."
    )]
    async fn delete_task(&self, params: Parameters<TaskRef>) -> McpResult {
        self.handlers().delete_task(params).await
    }

    #[tool(
        name = "ready_tasks",
        description = "List the tasks that can be started now: not done and with every prerequisite done. Omit id to use the active plan."
    )]
    async fn ready_tasks(&self, params: Parameters<PlanRef>) -> McpResult {
        self.handlers().ready_tasks(params).await
    }

    /// List all available prompts
    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.handlers().list_prompts(request, context).await
    }

    /// Get a specific prompt by name and apply arguments
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(request, context).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WaypointMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "waypoint".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Waypoint turns goals into plans of tasks with dependencies and tracks their progress.

## Core Concepts
- **Plans**: a named goal with an ordered list of tasks. One plan is active; tools that take an optional plan `id` use it when the id is omitted.
- **Tasks**: title, description, priority, estimated duration and a status of todo, in-progress or done.
- **Dependencies**: a task lists the *titles* of tasks that must be done first. A task is **blocked** while any listed prerequisite that exists in the plan is not done. Titles that match nothing are ignored.
- **Depth**: how many prerequisite links lie below a task. The board groups tasks into columns by depth.

## Workflow
1. Use the `decompose_goal` prompt, or build the task list yourself, and call `create_plan`.
2. Review with `show_board` (columns) or `show_plan` (details).
3. Pick work with `ready_tasks`, then move tasks through `set_task_status`.
4. Adjust with `add_task`, `update_task` and `delete_task`.

## Tool Categories
- **Plan Management**: create_plan, list_plans, show_plan, show_board, show_graph, delete_plan
- **Task Management**: add_task, update_task, set_task_status, delete_task, ready_tasks"#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WaypointMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Waypoint MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
