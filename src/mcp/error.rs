//! Errors surfaced by tool handlers.
//!
//! Handlers keep the error kind until the very last step, where it is
//! rendered into an error-flagged tool result.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::vikunja::VikunjaError;

use super::args::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Validation,
    Transport,
    RemoteApi,
    Decode,
}

#[derive(Error, Diagnostic, Debug)]
pub enum ToolError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to {operation}: {source}")]
    #[diagnostic(code(vikunja_mcp::mcp::remote))]
    Remote {
        operation: &'static str,
        #[source]
        source: VikunjaError,
    },
}

impl ToolError {
    /// Adapter for `map_err` on client calls.
    pub fn remote(operation: &'static str) -> impl FnOnce(VikunjaError) -> Self {
        move |source| ToolError::Remote { operation, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::Config(_) => ErrorKind::Config,
            ToolError::Validation(_) => ErrorKind::Validation,
            ToolError::Remote { source, .. } => match source {
                VikunjaError::Transport { .. } => ErrorKind::Transport,
                VikunjaError::Api { .. } => ErrorKind::RemoteApi,
                VikunjaError::Decode { .. } => ErrorKind::Decode,
            },
        }
    }
}

pub type ToolResult<T> = Result<T, ToolError>;
