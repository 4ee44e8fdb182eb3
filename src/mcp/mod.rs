//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the Vikunja remote client as a fixed catalog of tools.
//!
//! - **server**: `VikunjaServer`, the rmcp `ServerHandler` and tool router
//! - **tools**: argument structs and handler bodies per entity (tasks, projects)
//! - **args**: typed extraction of tool arguments with fixed validation messages
//! - **error**: `ToolError`, kept tagged until it is rendered as an error result
//! - **render**: human-readable text for successful results
//!
//! Every handler resolves its configuration at the boundary and never fails
//! the protocol call: all failures come back as error-flagged tool results.

pub mod args;
pub mod error;
mod render;
pub mod server;
pub mod tools;

#[cfg(test)]
mod args_test;

pub use error::{ErrorKind, ToolError};
pub use server::VikunjaServer;
