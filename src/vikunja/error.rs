//! Errors raised while talking to the Vikunja API.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum VikunjaError {
    #[error("request could not be sent: {source}")]
    #[diagnostic(
        code(vikunja_mcp::vikunja::transport),
        help("Check that VIKUNJA_URL points to a reachable Vikunja instance")
    )]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("API returned status {status}")]
    #[diagnostic(code(vikunja_mcp::vikunja::api))]
    Api { status: u16 },

    #[error("invalid response body: {source}")]
    #[diagnostic(code(vikunja_mcp::vikunja::decode))]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl VikunjaError {
    /// HTTP status of a rejected request, if that is what happened.
    pub fn status(&self) -> Option<u16> {
        match self {
            VikunjaError::Api { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VikunjaError {
    fn from(source: reqwest::Error) -> Self {
        VikunjaError::Transport { source }
    }
}

impl From<serde_json::Error> for VikunjaError {
    fn from(source: serde_json::Error) -> Self {
        VikunjaError::Decode { source }
    }
}

pub type VikunjaResult<T> = Result<T, VikunjaError>;
