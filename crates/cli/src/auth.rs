//! Authentication seam: turns prompted credentials into a verified client.

use async_trait::async_trait;
use github::{GitHubApi, GitHubClient, GitHubError};
use tracing::info;

/// Builds an authenticated GitHub client from credentials, verifying the
/// identity with one lightweight call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Box<dyn GitHubApi>, GitHubError>;
}

/// Basic-auth authenticator against the real GitHub API.
pub struct BasicAuthenticator;

#[async_trait]
impl Authenticator for BasicAuthenticator {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Box<dyn GitHubApi>, GitHubError> {
        let client = GitHubClient::new(username, password)?;
        let user = client.current_user().await?;
        info!("Logged in as {}", user.login);
        Ok(Box::new(client))
    }
}
