//! The sequential setup flow: authenticate, acquire a repository, reset its
//! labels, create the project board.

use anyhow::Result;
use github::GitHubApi;
use std::path::PathBuf;
use tracing::{error, info};

use crate::auth::Authenticator;
use crate::config;
use crate::prompts::Prompt;
use crate::session::{Session, Stage};
use crate::ui;

/// Maximum login attempts, cumulative.
const MAX_LOGIN_ATTEMPTS: u32 = 3;

const STAGE_CHOICES: [&str; 3] = ["repository", "labels", "project"];

/// Prompt-driven setup flow over an authenticator and a prompt boundary.
pub struct SetupFlow<P, A> {
    prompt: P,
    auth: A,
}

impl<P: Prompt, A: Authenticator> SetupFlow<P, A> {
    pub fn new(prompt: P, auth: A) -> Self {
        Self { prompt, auth }
    }

    /// Run the whole flow. Side effects land on GitHub and the log stream;
    /// any unrecovered failure aborts the run with no rollback.
    pub async fn run(&self) -> Result<()> {
        let resources = self.choose_resource_folder()?;

        ui::print_section("Authentication");
        let (client, username) = self.connect().await?;

        let stage = self.choose_stage()?;
        let repo = self
            .acquire_repository(client.as_ref(), stage, &username)
            .await?;

        let session = Session {
            resources,
            client,
            stage,
            repo,
        };

        if session.stage <= Stage::Labels {
            ui::print_section("Labels");
            setup_labels(&session).await?;
        }
        if session.stage <= Stage::Project {
            ui::print_section("Project board");
            setup_project(&session).await?;
        }

        ui::print_success(&format!("{} is ready", session.repo));
        Ok(())
    }

    fn choose_resource_folder(&self) -> Result<PathBuf> {
        let folder = self.prompt.input("resource folder?", Some("templates"))?;
        Ok(PathBuf::from(folder))
    }

    /// Prompt for credentials and verify them. Rejected credentials are
    /// retried with a fresh prompt, up to [`MAX_LOGIN_ATTEMPTS`] total; the
    /// loop owns the attempt counter. Any other failure propagates
    /// immediately.
    async fn connect(&self) -> Result<(Box<dyn GitHubApi>, String)> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let username = self.prompt.input("username?", None)?;
            let password = self.prompt.password("password?")?;

            match self.auth.authenticate(&username, &password).await {
                Ok(client) => return Ok((client, username)),
                Err(err) if err.is_unauthorized() && attempts < MAX_LOGIN_ATTEMPTS => {
                    error!("Wrong username or password ({attempts}/{MAX_LOGIN_ATTEMPTS})");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn choose_stage(&self) -> Result<Stage> {
        let choice = self.prompt.select("Start with creating", &STAGE_CHOICES)?;
        Ok(match choice {
            0 => Stage::Repository,
            1 => Stage::Labels,
            _ => Stage::Project,
        })
    }

    /// Create a fresh private repository, or ask for an existing slug.
    /// Operator-supplied slugs are passed through unvalidated; malformed
    /// ones surface as API errors downstream.
    async fn acquire_repository(
        &self,
        client: &dyn GitHubApi,
        stage: Stage,
        username: &str,
    ) -> Result<String> {
        if stage == Stage::Repository {
            let name = self.prompt.input("new repo for CTF?", None)?;
            info!("Creating private repository {name}");
            client.create_repository(&name).await?;
            Ok(format!("{username}/{name}"))
        } else {
            Ok(self.prompt.input("repo for CTF (owner/name)?", None)?)
        }
    }
}

/// Reset the repository's labels to the configured set: delete every
/// existing label, then create each configured one. Aborts on first error,
/// leaving the label set partially modified.
async fn setup_labels(session: &Session) -> Result<()> {
    info!("Deleting old labels in {}", session.repo);
    for label in session.client.list_labels(&session.repo).await? {
        info!("Deleting label '{}'", label.name);
        session.client.delete_label(&session.repo, &label.name).await?;
    }

    for label in config::load_labels(&session.resources)? {
        info!("Adding label '{}' ({})", label.name, label.color);
        session
            .client
            .create_label(&session.repo, &label.name, &label.color)
            .await?;
    }
    Ok(())
}

/// Create the configured project board, then its columns in board order.
async fn setup_project(session: &Session) -> Result<()> {
    let spec = config::load_project(&session.resources)?;

    info!("Creating project '{}'", spec.name);
    let project = session.client.create_project(&session.repo, &spec.name).await?;

    for column in &spec.columns {
        info!("Adding column '{column}'");
        session.client.create_project_column(project.id, column).await?;
    }
    Ok(())
}
