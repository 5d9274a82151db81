//! GitHub REST API surface for the CTF setup flow.
//!
//! The orchestrator talks to GitHub through the [`GitHubApi`] trait so that
//! flow tests can substitute a mock; [`GitHubClient`] is the reqwest-backed
//! implementation with an overridable base URL for HTTP-level tests.

pub mod api;
pub mod client;
pub mod error;
pub mod models;

pub use api::GitHubApi;
pub use client::GitHubClient;
pub use error::GitHubError;
pub use models::{Label, Project, ProjectColumn, Repository, User};
