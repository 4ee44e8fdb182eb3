//! MCP server exposing the Vikunja tool catalog.

use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, JsonObject, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use tracing::{Instrument, debug, info_span, warn};

use crate::config::{Config, ConfigSource};
use crate::vikunja::VikunjaClient;

use super::args::input_schema;
use super::error::{ToolError, ToolResult};
use super::tools::projects::{CreateProjectArgs, GetProjectsArgs};
use super::tools::tasks::{CreateTaskArgs, GetOverdueTasksArgs, GetTasksArgs, UpdateTaskArgs};

/// Vikunja MCP server.
///
/// Generic over the [`ConfigSource`] so every invocation resolves a fresh
/// [`Config`] at the boundary and hands it down explicitly. The HTTP
/// transport is shared by all invocations.
#[derive(Clone)]
pub struct VikunjaServer<S: ConfigSource> {
    config_source: Arc<S>,
    http: reqwest::Client,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl<S: ConfigSource> VikunjaServer<S> {
    pub fn new(config_source: S, http: reqwest::Client) -> Self {
        Self {
            config_source: Arc::new(config_source),
            http,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get tasks from a Vikunja project",
        input_schema = input_schema::<GetTasksArgs>()
    )]
    pub async fn get_tasks(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke("get_tasks", |config| {
            self.handle_get_tasks(config, &params.0)
        })
        .await
    }

    #[tool(
        description = "Get my open overdue tasks across all projects: not done, due date in the past, oldest due date first",
        input_schema = input_schema::<GetOverdueTasksArgs>()
    )]
    pub async fn get_overdue_tasks(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke("get_overdue_tasks", |config| {
            self.handle_get_overdue_tasks(config, &params.0)
        })
        .await
    }

    #[tool(
        description = "Create a new task in a Vikunja project",
        input_schema = input_schema::<CreateTaskArgs>()
    )]
    pub async fn create_task(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke("create_task", |config| {
            self.handle_create_task(config, &params.0)
        })
        .await
    }

    #[tool(
        description = "Update an existing task in Vikunja. Only the fields you pass are changed.",
        input_schema = input_schema::<UpdateTaskArgs>()
    )]
    pub async fn update_task(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke("update_task", |config| {
            self.handle_update_task(config, &params.0)
        })
        .await
    }

    #[tool(
        description = "Get all projects from Vikunja",
        input_schema = input_schema::<GetProjectsArgs>()
    )]
    pub async fn get_projects(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke("get_projects", |config| {
            self.handle_get_projects(config, &params.0)
        })
        .await
    }

    #[tool(
        description = "Create a new project in Vikunja",
        input_schema = input_schema::<CreateProjectArgs>()
    )]
    pub async fn create_project(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke("create_project", |config| {
            self.handle_create_project(config, &params.0)
        })
        .await
    }
}

impl<S: ConfigSource> VikunjaServer<S> {
    /// Tools advertised to the client.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    pub(crate) fn client(&self, config: &Config) -> VikunjaClient {
        VikunjaClient::new(config, self.http.clone())
    }

    /// Resolve configuration, run the handler and fold every outcome into a
    /// tool result. Never returns `Err`: failures become error-flagged results.
    async fn invoke<F, Fut>(
        &self,
        tool: &'static str,
        handler: F,
    ) -> Result<CallToolResult, McpError>
    where
        F: FnOnce(Config) -> Fut,
        Fut: Future<Output = ToolResult<String>>,
    {
        debug!(tool, "tool invoked");
        let outcome = match self.config_source.resolve() {
            Ok(config) => handler(config).instrument(info_span!("tool", name = tool)).await,
            Err(err) => Err(ToolError::from(err)),
        };

        Ok(into_call_result(tool, outcome))
    }
}

fn into_call_result(tool: &str, outcome: ToolResult<String>) -> CallToolResult {
    match outcome {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => {
            warn!(tool, kind = ?err.kind(), error = %err, "tool call failed");
            CallToolResult::error(vec![Content::text(err.to_string())])
        }
    }
}

#[tool_handler]
impl<S: ConfigSource> ServerHandler for VikunjaServer<S> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build()).with_instructions(
            "Vikunja MCP Server - List, create and update tasks and projects in a Vikunja instance",
        )
    }
}
