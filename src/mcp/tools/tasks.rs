//! Task tools: listing, creation and updates.

use chrono::Utc;
use rmcp::model::JsonObject;
use rmcp::schemars;
use rmcp::schemars::JsonSchema;

use crate::config::{Config, ConfigSource};
use crate::mcp::args::{Arguments, ToolArgs, ValidationError};
use crate::mcp::error::{ToolError, ToolResult};
use crate::mcp::render;
use crate::mcp::server::VikunjaServer;
use crate::vikunja::{NewTask, OverdueFilter, TaskUpdate};

// =============================================================================
// Argument Structs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct GetTasksArgs {
    #[schemars(description = "ID of the project to get tasks from")]
    pub project_id: i64,
}

impl ToolArgs for GetTasksArgs {
    fn from_arguments(args: &Arguments<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            project_id: args.required("project_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct GetOverdueTasksArgs {
    #[schemars(
        description = "Project to leave out of the listing. Defaults to VIKUNJA_EXCLUDED_PROJECT_ID when omitted."
    )]
    pub exclude_project_id: Option<i64>,
}

impl ToolArgs for GetOverdueTasksArgs {
    fn from_arguments(args: &Arguments<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            exclude_project_id: args.optional("exclude_project_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct CreateTaskArgs {
    #[schemars(description = "ID of the project to create task in")]
    pub project_id: i64,
    #[schemars(description = "Title of the task")]
    pub title: String,
    #[schemars(description = "Description of the task")]
    pub description: Option<String>,
}

impl ToolArgs for CreateTaskArgs {
    fn from_arguments(args: &Arguments<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            project_id: args.required("project_id")?,
            title: args.required("title")?,
            description: args.optional("description")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct UpdateTaskArgs {
    #[schemars(description = "ID of the task to update")]
    pub task_id: i64,
    #[schemars(description = "New title of the task")]
    pub title: Option<String>,
    #[schemars(description = "New description of the task")]
    pub description: Option<String>,
    #[schemars(description = "Mark task as done or not done")]
    pub done: Option<bool>,
}

impl ToolArgs for UpdateTaskArgs {
    fn from_arguments(args: &Arguments<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            task_id: args.required("task_id")?,
            title: args.optional("title")?,
            description: args.optional("description")?,
            done: args.optional("done")?,
        })
    }
}

impl UpdateTaskArgs {
    /// Only the fields the caller supplied end up in the update.
    pub fn update_set(&self) -> TaskUpdate {
        let mut update = TaskUpdate::new();
        if let Some(title) = &self.title {
            update = update.title(title.clone());
        }
        if let Some(description) = &self.description {
            update = update.description(description.clone());
        }
        if let Some(done) = self.done {
            update = update.done(done);
        }
        update
    }
}

// =============================================================================
// Handlers
// =============================================================================

impl<S: ConfigSource> VikunjaServer<S> {
    pub(crate) async fn handle_get_tasks(
        &self,
        config: Config,
        raw: &JsonObject,
    ) -> ToolResult<String> {
        let args = GetTasksArgs::parse(raw)?;

        let tasks = self
            .client(&config)
            .list_tasks(args.project_id)
            .await
            .map_err(ToolError::remote("get tasks"))?;

        Ok(render::tasks(
            &format!("Tasks in project {}", args.project_id),
            &tasks,
        ))
    }

    pub(crate) async fn handle_get_overdue_tasks(
        &self,
        config: Config,
        raw: &JsonObject,
    ) -> ToolResult<String> {
        let args = GetOverdueTasksArgs::parse(raw)?;
        let filter =
            OverdueFilter::excluding(args.exclude_project_id.or(config.excluded_project_id));

        let tasks = self
            .client(&config)
            .list_overdue_tasks(&filter)
            .await
            .map_err(ToolError::remote("get overdue tasks"))?;

        Ok(render::tasks("Open overdue tasks", &tasks))
    }

    pub(crate) async fn handle_create_task(
        &self,
        config: Config,
        raw: &JsonObject,
    ) -> ToolResult<String> {
        let args = CreateTaskArgs::parse(raw)?;
        let new_task = NewTask::new(args.title, args.description.unwrap_or_default())
            .with_defaults(&config.task_defaults, Utc::now());

        let task = self
            .client(&config)
            .create_task(args.project_id, &new_task)
            .await
            .map_err(ToolError::remote("create task"))?;

        Ok(render::task("Created task:", &task))
    }

    pub(crate) async fn handle_update_task(
        &self,
        config: Config,
        raw: &JsonObject,
    ) -> ToolResult<String> {
        let args = UpdateTaskArgs::parse(raw)?;

        let task = self
            .client(&config)
            .update_task(args.task_id, &args.update_set())
            .await
            .map_err(ToolError::remote("update task"))?;

        Ok(render::task("Updated task:", &task))
    }
}
