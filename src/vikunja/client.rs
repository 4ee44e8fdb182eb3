use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;

use super::error::{VikunjaError, VikunjaResult};
use super::models::{NewProject, NewTask, OverdueFilter, Project, Task, TaskUpdate};

const API_PREFIX: &str = "/api/v1";

/// Build the shared HTTP transport.
///
/// reqwest is compiled without a bundled rustls provider, so the ring
/// provider is installed first. Installing twice is harmless.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    let _ = rustls::crypto::ring::default_provider().install_default();
    Client::builder().timeout(timeout).build()
}

/// Authenticated access to one Vikunja instance.
///
/// Cheap to construct: the underlying [`Client`] is reference counted and
/// is meant to be shared across invocations.
#[derive(Clone)]
pub struct VikunjaClient {
    base_url: String,
    token: String,
    http: Client,
}

impl VikunjaClient {
    pub fn new(config: &Config, http: Client) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            http,
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Request builder with bearer auth and JSON content type already attached.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "Vikunja request");
        self.http
            .request(method, self.url(path))
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(request: RequestBuilder) -> VikunjaResult<Response> {
        Ok(request.send().await?)
    }

    /// Decode the body when the status matches `expected`, otherwise fail with the status.
    async fn expect_json<T: DeserializeOwned>(
        response: Response,
        expected: StatusCode,
    ) -> VikunjaResult<T> {
        let status = response.status();
        if status != expected {
            warn!(
                status = status.as_u16(),
                url = %response.url(),
                "Vikunja rejected request"
            );
            return Err(VikunjaError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// `GET /projects/{id}/tasks`
    pub async fn list_tasks(&self, project_id: i64) -> VikunjaResult<Vec<Task>> {
        let request = self.request(Method::GET, &format!("/projects/{}/tasks", project_id));
        let response = Self::send(request).await?;
        Self::expect_json(response, StatusCode::OK).await
    }

    /// `GET /tasks/all` with the fixed overdue filter, first page only.
    pub async fn list_overdue_tasks(&self, filter: &OverdueFilter) -> VikunjaResult<Vec<Task>> {
        let request = self
            .request(Method::GET, "/tasks/all")
            .query(&filter.query());
        let response = Self::send(request).await?;
        Self::expect_json(response, StatusCode::OK).await
    }

    /// `PUT /projects/{id}/tasks`
    pub async fn create_task(&self, project_id: i64, task: &NewTask) -> VikunjaResult<Task> {
        let request = self
            .request(Method::PUT, &format!("/projects/{}/tasks", project_id))
            .json(task);
        let response = Self::send(request).await?;
        Self::expect_json(response, StatusCode::CREATED).await
    }

    /// `POST /tasks/{id}` with only the fields set on `update`.
    pub async fn update_task(&self, task_id: i64, update: &TaskUpdate) -> VikunjaResult<Task> {
        let request = self
            .request(Method::POST, &format!("/tasks/{}", task_id))
            .json(update);
        let response = Self::send(request).await?;
        Self::expect_json(response, StatusCode::OK).await
    }

    /// `GET /projects`
    pub async fn list_projects(&self) -> VikunjaResult<Vec<Project>> {
        let response = Self::send(self.request(Method::GET, "/projects")).await?;
        Self::expect_json(response, StatusCode::OK).await
    }

    /// `PUT /projects`
    pub async fn create_project(&self, project: &NewProject) -> VikunjaResult<Project> {
        let request = self.request(Method::PUT, "/projects").json(project);
        let response = Self::send(request).await?;
        Self::expect_json(response, StatusCode::CREATED).await
    }
}
