//! Wire types for the Vikunja API.
//!
//! Identifiers are always assigned by Vikunja and round-tripped verbatim;
//! nothing here generates one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TaskDefaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub done: bool,
    pub project_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assignee {
    pub id: i64,
}

/// Body of `PUT /projects/{id}/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<Assignee>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: None,
            assignees: Vec::new(),
        }
    }

    /// Apply the configured creation defaults, stamping `now` as due date if enabled.
    pub fn with_defaults(mut self, defaults: &TaskDefaults, now: DateTime<Utc>) -> Self {
        if defaults.stamp_due_date {
            self.due_date = Some(format_due_date(now));
        }
        self.assignees = defaults
            .assignees
            .iter()
            .map(|&id| Assignee { id })
            .collect();
        self
    }
}

/// Vikunja expects millisecond precision with a literal `Z`.
pub(crate) fn format_due_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Body of `PUT /projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
}

impl NewProject {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Fields to change on an existing task. Only fields that were set are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl TaskUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.done.is_none()
    }
}

/// The "my open overdue tasks" listing: not done, due in the past,
/// oldest due date first, then newest id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverdueFilter {
    pub exclude_project_id: Option<i64>,
}

impl OverdueFilter {
    pub fn excluding(project_id: Option<i64>) -> Self {
        Self {
            exclude_project_id: project_id,
        }
    }

    /// Vikunja filter expression.
    pub fn expression(&self) -> String {
        let mut filter = String::from("done = false && due_date < now");
        if let Some(project_id) = self.exclude_project_id {
            filter.push_str(&format!(" && project != {}", project_id));
        }
        filter
    }

    /// Query pairs for `GET /tasks/all`, in wire order.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("filter", self.expression()),
            ("sort_by", "due_date".to_string()),
            ("order_by", "asc".to_string()),
            ("sort_by", "id".to_string()),
            ("order_by", "desc".to_string()),
            ("page", "1".to_string()),
        ]
    }
}
