//! Response models for the subset of the GitHub API the setup flow consumes.

use serde::Deserialize;

/// Authenticated user, from `GET /user`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}

/// Repository, from `POST /user/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub private: bool,
}

/// Issue label.
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: String,
}

/// Classic project board.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
}

/// Column on a classic project board.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectColumn {
    pub id: u64,
    pub name: String,
}
