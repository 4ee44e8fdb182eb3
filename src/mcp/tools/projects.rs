//! Project tools.

use rmcp::model::JsonObject;
use rmcp::schemars;
use rmcp::schemars::JsonSchema;

use crate::config::{Config, ConfigSource};
use crate::mcp::args::{Arguments, ToolArgs, ValidationError};
use crate::mcp::error::{ToolError, ToolResult};
use crate::mcp::render;
use crate::mcp::server::VikunjaServer;
use crate::vikunja::NewProject;

#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct GetProjectsArgs {}

impl ToolArgs for GetProjectsArgs {
    fn from_arguments(_args: &Arguments<'_>) -> Result<Self, ValidationError> {
        Ok(Self {})
    }
}

#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct CreateProjectArgs {
    #[schemars(description = "Title of the project")]
    pub title: String,
    #[schemars(description = "Description of the project")]
    pub description: Option<String>,
}

impl ToolArgs for CreateProjectArgs {
    fn from_arguments(args: &Arguments<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: args.required("title")?,
            description: args.optional("description")?,
        })
    }
}

impl<S: ConfigSource> VikunjaServer<S> {
    pub(crate) async fn handle_get_projects(
        &self,
        config: Config,
        raw: &JsonObject,
    ) -> ToolResult<String> {
        GetProjectsArgs::parse(raw)?;

        let projects = self
            .client(&config)
            .list_projects()
            .await
            .map_err(ToolError::remote("get projects"))?;

        Ok(render::projects("Projects", &projects))
    }

    pub(crate) async fn handle_create_project(
        &self,
        config: Config,
        raw: &JsonObject,
    ) -> ToolResult<String> {
        let args = CreateProjectArgs::parse(raw)?;
        let new_project = NewProject::new(args.title, args.description.unwrap_or_default());

        let project = self
            .client(&config)
            .create_project(&new_project)
            .await
            .map_err(ToolError::remote("create project"))?;

        Ok(render::project("Created project:", &project))
    }
}
