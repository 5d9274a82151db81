//! Error types for GitHub API calls.

use thiserror::Error;

/// Errors that can occur when talking to the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub rejected the request with a non-2xx status
    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Credentials were rejected (HTTP 401)
    #[error("authentication failed: wrong username or password")]
    Unauthorized,
}

impl GitHubError {
    /// True for the one error class the setup flow recovers from locally.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
