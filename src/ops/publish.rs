//! Publishing the generated configuration.
//!
//! The rest of the crate only sees the [`Publisher`] trait: check that the
//! repository is ready, then commit a file and open a review request for it.
//! [`GitHubPublisher`] implements it by driving `git` and `gh`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::ops::errors::ConfigureError;
use crate::util::process::Executor;

/// What to commit and how to present it for review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    /// File to commit, relative to the repository root.
    pub path: PathBuf,
    /// Branch the review request targets.
    pub base_branch: String,
    /// Branch the file is committed on.
    pub branch: String,
    pub remote: String,
    pub commit_message: String,
    pub title: String,
    pub body: String,
}

/// Commits a file and opens a review request for it.
pub trait Publisher {
    /// Fail unless publishing can work from the current state.
    fn check_ready(&mut self, base_branch: &str) -> Result<()>;

    /// Commit `request.path` and open a review request. Returns its URL.
    fn publish(&mut self, request: &PublishRequest) -> Result<String>;
}

/// Publishes through git and the GitHub CLI.
#[derive(Debug)]
pub struct GitHubPublisher<E> {
    exec: E,
}

impl<E: Executor> GitHubPublisher<E> {
    pub fn new(exec: E) -> Self {
        GitHubPublisher { exec }
    }

    pub fn executor(&self) -> &E {
        &self.exec
    }

    /// The branch currently checked out.
    pub fn current_branch(&mut self) -> Result<String> {
        let output = self.exec.run_checked("git", &["branch", "--show-current"])?;
        Ok(output.stdout.trim().to_string())
    }

    fn ensure_on_branch(&mut self, expected: &str) -> Result<()> {
        let found = match self.current_branch() {
            Ok(branch) => branch,
            Err(e) => {
                tracing::debug!("git branch lookup failed: {:#}", e);
                return Err(ConfigureError::BranchUnknown {
                    expected: expected.to_string(),
                }
                .into());
            }
        };

        if found != expected {
            return Err(ConfigureError::NotOnBaseBranch {
                expected: expected.to_string(),
                found,
            }
            .into());
        }
        Ok(())
    }

    fn ensure_gh_ready(&mut self) -> Result<()> {
        if !self.exec.is_available("gh") {
            return Err(ConfigureError::GhUnavailable.into());
        }

        let status = self.exec.run("gh", &["auth", "status"])?;
        if !status.success() {
            return Err(ConfigureError::GhUnauthenticated.into());
        }
        Ok(())
    }

    fn commit(&mut self, request: &PublishRequest) -> Result<()> {
        let path = request.path.to_string_lossy();

        self.exec
            .run_checked("git", &["switch", "-c", &request.branch])?;
        self.exec.run_checked("git", &["add", &path])?;
        self.exec
            .run_checked("git", &["commit", "-m", &request.commit_message])?;
        Ok(())
    }

    fn push(&mut self, request: &PublishRequest) -> Result<()> {
        self.exec.run_checked(
            "git",
            &[
                "push",
                "--set-upstream",
                &request.remote,
                &request.branch,
                "-f",
            ],
        )?;
        Ok(())
    }

    fn create_pr(&mut self, request: &PublishRequest) -> Result<String> {
        let output = self.exec.run_checked(
            "gh",
            &[
                "pr",
                "create",
                "--head",
                &request.branch,
                "--base",
                &request.base_branch,
                "--title",
                &request.title,
                "--body",
                &request.body,
            ],
        )?;

        // gh prints the URL as the last line of output.
        match output.stdout.lines().map(str::trim).filter(|l| !l.is_empty()).last() {
            Some(url) => Ok(url.to_string()),
            None => bail!("`gh pr create` did not print a pull request URL"),
        }
    }
}

impl<E: Executor> Publisher for GitHubPublisher<E> {
    fn check_ready(&mut self, base_branch: &str) -> Result<()> {
        self.ensure_on_branch(base_branch)?;
        self.ensure_gh_ready()
    }

    fn publish(&mut self, request: &PublishRequest) -> Result<String> {
        self.commit(request)
            .context("unable to commit Dependabot config")?;
        self.push(request)
            .context("unable to create PR but config committed. Please create a PR manually")?;
        self.create_pr(request)
            .context("unable to create PR but config committed. Please create a PR manually")
    }
}
