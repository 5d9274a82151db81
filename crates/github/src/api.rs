//! Trait seam between the setup flow and the GitHub REST client.

use async_trait::async_trait;

use crate::error::GitHubError;
use crate::models::{Label, Project, ProjectColumn, Repository, User};

/// The GitHub operations the setup flow consumes.
///
/// Repository slugs are passed through as `owner/name` strings without
/// validation; malformed slugs surface as API errors from GitHub.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetch the authenticated user (identity verification).
    async fn current_user(&self) -> Result<User, GitHubError>;

    /// Create a private repository under the authenticated account.
    async fn create_repository(&self, name: &str) -> Result<Repository, GitHubError>;

    /// List all issue labels on a repository.
    async fn list_labels(&self, repo: &str) -> Result<Vec<Label>, GitHubError>;

    /// Delete a single label by name.
    async fn delete_label(&self, repo: &str, name: &str) -> Result<(), GitHubError>;

    /// Create a label with the given color.
    async fn create_label(&self, repo: &str, name: &str, color: &str)
        -> Result<Label, GitHubError>;

    /// Create a classic project board on a repository.
    async fn create_project(&self, repo: &str, name: &str) -> Result<Project, GitHubError>;

    /// Create a column under a project board.
    async fn create_project_column(
        &self,
        project_id: u64,
        name: &str,
    ) -> Result<ProjectColumn, GitHubError>;
}
