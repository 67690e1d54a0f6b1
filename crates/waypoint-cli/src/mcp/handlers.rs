//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    ErrorData as McpError, RoleServer,
    handler::server::tool::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use waypoint_core::{
    Planner,
    display::{LocalDateTime, OperationStatus},
    params as core,
};

use super::{errors::to_mcp_error, prompts::get_prompt_templates};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types only derive JsonSchema behind the core crate's
// `schema` feature. This transparent wrapper adds the Deserialize and
// JsonSchema plumbing rmcp needs without the core depending on rmcp.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type CreatePlan = McpParams<core::CreatePlan>;
pub type PlanRef = McpParams<core::PlanRef>;
pub type DeletePlan = McpParams<core::DeletePlan>;
pub type AddTask = McpParams<core::AddTask>;
pub type UpdateTask = McpParams<core::UpdateTask>;
pub type SetTaskStatus = McpParams<core::SetTaskStatus>;
pub type TaskRef = McpParams<core::TaskRef>;

pub type McpResult = Result<CallToolResult, McpError>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn create_plan(&self, Parameters(params): Parameters<CreatePlan>) -> McpResult {
        debug!("create_plan: {:?}", params);

        let result = self
            .planner
            .lock()
            .await
            .create_plan_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create plan", &e))?;

        text_result(result.to_string())
    }

    pub async fn list_plans(&self) -> McpResult {
        debug!("list_plans");

        let planner = self.planner.lock().await;
        let summaries = planner.list_plans_summary();
        if summaries.is_empty() {
            return text_result(format!("# No plans found\n\n{summaries}"));
        }

        let mut output = format!("# Plans\n\n{summaries}");
        let saved = planner
            .last_saved()
            .await
            .map_err(|e| to_mcp_error("Failed to read save time", &e))?;
        if let Some(saved) = saved {
            output.push_str(&format!("_Last saved: {}_\n", LocalDateTime::new(&saved)));
        }
        text_result(output)
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let plan = self
            .planner
            .lock()
            .await
            .show_plan(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to show plan", &e))?;

        text_result(plan.to_string())
    }

    pub async fn show_board(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        debug!("show_board: {:?}", params);

        let board = self
            .planner
            .lock()
            .await
            .plan_board(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to lay out plan", &e))?;

        text_result(board.to_string())
    }

    pub async fn show_graph(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        debug!("show_graph: {:?}", params);

        let layout = self
            .planner
            .lock()
            .await
            .plan_graph(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to lay out graph", &e))?;

        text_result(layout.to_string())
    }

    pub async fn delete_plan(&self, Parameters(params): Parameters<DeletePlan>) -> McpResult {
        debug!("delete_plan: {:?}", params);

        let result = self
            .planner
            .lock()
            .await
            .delete_plan_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete plan", &e))?;

        text_result(result.to_string())
    }

    pub async fn add_task(&self, Parameters(params): Parameters<AddTask>) -> McpResult {
        debug!("add_task: {:?}", params);

        let result = self
            .planner
            .lock()
            .await
            .add_task_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add task", &e))?;

        text_result(result.to_string())
    }

    pub async fn update_task(&self, Parameters(params): Parameters<UpdateTask>) -> McpResult {
        debug!("update_task: {:?}", params);

        let result = self
            .planner
            .lock()
            .await
            .update_task_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update task", &e))?;

        text_result(result.to_string())
    }

    pub async fn set_task_status(&self, Parameters(params): Parameters<SetTaskStatus>) -> McpResult {
        debug!("set_task_status: {:?}", params);

        let change = self
            .planner
            .lock()
            .await
            .set_task_status(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to set task status", &e))?;

        text_result(change.to_string())
    }

    pub async fn delete_task(&self, Parameters(params): Parameters<TaskRef>) -> McpResult {
        debug!("delete_task: {:?}", params);

        let result = self
            .planner
            .lock()
            .await
            .delete_task_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete task", &e))?;

        text_result(result.to_string())
    }

    pub async fn ready_tasks(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        debug!("ready_tasks: {:?}", params);

        let tasks = self
            .planner
            .lock()
            .await
            .ready_tasks(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to list ready tasks", &e))?;

        if tasks.is_empty() {
            let status = OperationStatus::success(
                "No tasks are ready. Every open task is waiting on an unfinished prerequisite, or the plan is complete.",
            );
            return text_result(status.to_string());
        }
        text_result(format!("# Ready to start\n\n{tasks}"))
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let prompts = get_prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let templates = get_prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let prompt_text = template
            .apply(|name| {
                request
                    .arguments
                    .as_ref()
                    .and_then(|args| args.get(name))
                    .and_then(|value| value.as_str())
            })
            .map_err(|name| {
                McpError::invalid_params(
                    format!("Required argument '{name}' is missing or not a string"),
                    None,
                )
            })?;

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
