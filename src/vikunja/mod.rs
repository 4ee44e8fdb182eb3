//! Client for the Vikunja REST API (`/api/v1`).
//!
//! One method per remote capability, each a single HTTP round trip that
//! either decodes the response into a typed value or returns a [`VikunjaError`].

mod client;
mod error;
mod models;

pub use client::{VikunjaClient, build_http_client};
pub use error::{VikunjaError, VikunjaResult};
pub use models::{Assignee, NewProject, NewTask, OverdueFilter, Project, Task, TaskUpdate};
