//! reqwest-backed GitHub API client using basic authentication.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::api::GitHubApi;
use crate::error::GitHubError;
use crate::models::{Label, Project, ProjectColumn, Repository, User};

const GITHUB_API_URL: &str = "https://api.github.com";

/// Classic Projects endpoints are gated behind this preview media type.
const INERTIA_PREVIEW: &str = "application/vnd.github.inertia-preview+json";

/// GitHub API client authenticated with username and password.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

/// GitHub's standard error body shape.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GitHubClient {
    /// Create a new client for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(username: &str, password: &str) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("ctf-setup/1.0"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: GITHUB_API_URL.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Override the API base URL (used by tests to point at a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request with credentials attached and map non-2xx statuses
    /// into the error taxonomy.
    async fn send(&self, request: RequestBuilder) -> Result<Response, GitHubError> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(GitHubError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn current_user(&self) -> Result<User, GitHubError> {
        let response = self.send(self.http.get(self.url("/user"))).await?;
        let user: User = response.json().await?;
        debug!(login = %user.login, "fetched authenticated user");
        Ok(user)
    }

    async fn create_repository(&self, name: &str) -> Result<Repository, GitHubError> {
        let body = serde_json::json!({ "name": name, "private": true });
        let response = self
            .send(self.http.post(self.url("/user/repos")).json(&body))
            .await?;
        let repository: Repository = response.json().await?;
        debug!(repo = %repository.full_name, "created private repository");
        Ok(repository)
    }

    async fn list_labels(&self, repo: &str) -> Result<Vec<Label>, GitHubError> {
        let response = self
            .send(self.http.get(self.url(&format!("/repos/{repo}/labels"))))
            .await?;
        let labels: Vec<Label> = response.json().await?;
        debug!(repo = %repo, count = labels.len(), "listed labels");
        Ok(labels)
    }

    async fn delete_label(&self, repo: &str, name: &str) -> Result<(), GitHubError> {
        let encoded = urlencoding::encode(name);
        self.send(
            self.http
                .delete(self.url(&format!("/repos/{repo}/labels/{encoded}"))),
        )
        .await?;
        debug!(repo = %repo, label = %name, "deleted label");
        Ok(())
    }

    async fn create_label(
        &self,
        repo: &str,
        name: &str,
        color: &str,
    ) -> Result<Label, GitHubError> {
        let body = serde_json::json!({ "name": name, "color": color });
        let response = self
            .send(
                self.http
                    .post(self.url(&format!("/repos/{repo}/labels")))
                    .json(&body),
            )
            .await?;
        let label: Label = response.json().await?;
        debug!(repo = %repo, label = %label.name, "created label");
        Ok(label)
    }

    async fn create_project(&self, repo: &str, name: &str) -> Result<Project, GitHubError> {
        let body = serde_json::json!({ "name": name });
        let response = self
            .send(
                self.http
                    .post(self.url(&format!("/repos/{repo}/projects")))
                    .header(ACCEPT, INERTIA_PREVIEW)
                    .json(&body),
            )
            .await?;
        let project: Project = response.json().await?;
        debug!(repo = %repo, project = %project.name, id = project.id, "created project");
        Ok(project)
    }

    async fn create_project_column(
        &self,
        project_id: u64,
        name: &str,
    ) -> Result<ProjectColumn, GitHubError> {
        let body = serde_json::json!({ "name": name });
        let response = self
            .send(
                self.http
                    .post(self.url(&format!("/projects/{project_id}/columns")))
                    .header(ACCEPT, INERTIA_PREVIEW)
                    .json(&body),
            )
            .await?;
        let column: ProjectColumn = response.json().await?;
        debug!(project_id, column = %column.name, "created project column");
        Ok(column)
    }
}
