//! Per-run session state, threaded explicitly through the setup steps.

use github::GitHubApi;
use std::path::PathBuf;

/// Point in the setup sequence from which execution begins.
///
/// Stages are totally ordered: starting at stage S runs S and everything
/// after it, and skips everything before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Repository = 1,
    Labels = 2,
    Project = 3,
}

/// Transient state for one run. Created at process start, never persisted.
pub struct Session {
    /// Directory holding `labels.yaml` and `project.yaml`.
    pub resources: PathBuf,
    /// Authenticated client the remaining steps go through.
    pub client: Box<dyn GitHubApi>,
    /// Operator-chosen resume stage.
    pub stage: Stage,
    /// Target repository slug in `owner/name` form.
    pub repo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_totally_ordered() {
        assert!(Stage::Repository < Stage::Labels);
        assert!(Stage::Labels < Stage::Project);
        assert!(Stage::Repository <= Stage::Project);
    }
}
