//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

impl PromptTemplate {
    /// Substitutes `{name}` placeholders with the given argument values.
    ///
    /// Returns the name of the first required argument without a value.
    pub fn apply<'a, F>(&self, value_of: F) -> Result<String, &str>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut text = self.template.clone();
        for arg in &self.arguments {
            match value_of(&arg.name) {
                Some(value) => text = text.replace(&format!("{{{}}}", arg.name), value),
                None if arg.required => return Err(&arg.name),
                None => text = text.replace(&format!("{{{}}}", arg.name), "(not given)"),
            }
        }
        Ok(text)
    }
}

/// Get predefined prompt templates for goal planning
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            name: "decompose_goal".to_string(),
            description: "Break a goal down into a dependency-aware Waypoint plan".to_string(),
            template: r#"You are a world-class project manager. Decompose the following goal into a structured action plan and store it with Waypoint's `create_plan` tool.

# Goal
{goal}

# How to build the plan
- **name**: a short title for the plan (3-7 words)
- **description**: one or two sentences on the approach and the expected outcome
- **tasks**: the actionable tasks, in the order they would naturally be listed

Each task needs:
- **title**: unique within the plan, starting with a verb ("Draft outline", "Book venue")
- **description**: what done looks like
- **priority**: one of `low`, `medium`, `high`
- **duration** and **durationUnit**: an estimate, with the unit (`minutes`, `hours`, `days`, `weeks`) chosen to fit the size of the task
- **dependencies**: the exact titles of tasks that must be finished first; leave it empty for tasks that can start right away

# Rules
- Dependencies refer to titles, so spell them exactly as the titles of other tasks in the same plan.
- Do not create circular dependencies. Every chain must end at a task with no dependencies.
- Prefer several tasks that can run in parallel over one long chain.
- Aim for 5-12 tasks; split anything that would take more than a week.

# After creating the plan
Call `show_board` to check the columns. The first column ("Foundation") holds what can start now; each later phase depends on earlier ones. Summarise the plan for the user and point out the tasks from `ready_tasks`."#.to_string(),
            arguments: vec![PromptTemplateArg {
                name: "goal".to_string(),
                description: "The goal or outcome to plan for".to_string(),
                required: true,
            }],
        },
        PromptTemplate {
            name: "refine_goal".to_string(),
            description: "Rewrite a short goal into a clear project objective".to_string(),
            template: r#"You are a senior project architect. Transform this project goal into a professional project objective:

"{goal}"

Write a comprehensive description of under 40 words covering the outcome, its scope and how success is judged. Reply with the objective only; it will be used as the description of a new plan."#.to_string(),
            arguments: vec![PromptTemplateArg {
                name: "goal".to_string(),
                description: "The short goal to rewrite".to_string(),
                required: true,
            }],
        },
        PromptTemplate {
            name: "work_plan".to_string(),
            description: "Work through a plan one ready task at a time".to_string(),
            template: r#"You are helping the user make progress on a Waypoint plan.

# Plan
Plan ID: {plan_id} (use the active plan if not given)

# Loop
1. Call `ready_tasks` to find tasks whose prerequisites are all done.
2. Pick the highest-priority ready task and call `set_task_status` with status `in-progress`.
3. Help the user complete it. When it is finished, call `set_task_status` with status `done`.
4. Repeat until `ready_tasks` returns nothing, then call `show_plan` and summarise what was achieved.

Never mark a blocked task as done: if `set_task_status` reports unfinished prerequisites, set the task back to `todo` and work on its prerequisites first."#.to_string(),
            arguments: vec![PromptTemplateArg {
                name: "plan_id".to_string(),
                description: "ID of the plan to work on (defaults to the active plan)".to_string(),
                required: false,
            }],
        },
    ]
}
