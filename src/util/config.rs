//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `config.toml` in the platform config directory
//!   (e.g. `~/.config/configure-deps/config.toml`) - user-wide defaults
//! - Project: `.configure-deps.toml` at the repository root
//!
//! Project config takes precedence over global config. Command-line flags
//! take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::util::fs;

/// Where the Dependabot configuration is written, relative to the repo root.
pub const DEFAULT_OUTPUT_PATH: &str = ".github/dependabot.yml";

pub const DEFAULT_BASE_BRANCH: &str = "main";

pub const DEFAULT_BRANCH: &str = "bot/configure-dependency-management";

pub const DEFAULT_REMOTE: &str = "origin";

pub const DEFAULT_COMMIT_MESSAGE: &str = "feat: add Dependabot config";

pub const DEFAULT_PR_BODY: &str = "This PR was created by \
[a script](https://github.com/guardian/configure-dependency-management) to configure \
Dependabot. Please review and merge if appropriate.";

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = ".configure-deps.toml";

/// configure-deps configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Git settings
    pub git: GitConfig,

    /// Pull request settings
    pub pull_request: PullRequestConfig,

    /// Scan settings
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the generated file, relative to the repository root
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Branch the tool must be run from and the pull request targets
    pub base_branch: Option<String>,

    /// Branch the configuration is committed on
    pub branch: Option<String>,

    /// Remote to push to
    pub remote: Option<String>,

    pub commit_message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestConfig {
    /// Defaults to the commit message
    pub title: Option<String>,

    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extra directory names to skip, on top of `node_modules`
    pub ignored_dirs: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.output.path.is_some() {
            self.output.path = other.output.path;
        }

        if other.git.base_branch.is_some() {
            self.git.base_branch = other.git.base_branch;
        }
        if other.git.branch.is_some() {
            self.git.branch = other.git.branch;
        }
        if other.git.remote.is_some() {
            self.git.remote = other.git.remote;
        }
        if other.git.commit_message.is_some() {
            self.git.commit_message = other.git.commit_message;
        }

        if other.pull_request.title.is_some() {
            self.pull_request.title = other.pull_request.title;
        }
        if other.pull_request.body.is_some() {
            self.pull_request.body = other.pull_request.body;
        }

        // Ignore lists accumulate across layers.
        for dir in other.scan.ignored_dirs {
            if !self.scan.ignored_dirs.contains(&dir) {
                self.scan.ignored_dirs.push(dir);
            }
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    pub fn base_branch(&self) -> &str {
        self.git.base_branch.as_deref().unwrap_or(DEFAULT_BASE_BRANCH)
    }

    pub fn branch(&self) -> &str {
        self.git.branch.as_deref().unwrap_or(DEFAULT_BRANCH)
    }

    pub fn remote(&self) -> &str {
        self.git.remote.as_deref().unwrap_or(DEFAULT_REMOTE)
    }

    pub fn commit_message(&self) -> &str {
        self.git
            .commit_message
            .as_deref()
            .unwrap_or(DEFAULT_COMMIT_MESSAGE)
    }

    pub fn pr_title(&self) -> &str {
        self.pull_request
            .title
            .as_deref()
            .unwrap_or_else(|| self.commit_message())
    }

    pub fn pr_body(&self) -> &str {
        self.pull_request.body.as_deref().unwrap_or(DEFAULT_PR_BODY)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.configure-deps.toml)
/// 2. Global config
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        if global_path.exists() {
            tracing::debug!("loading global config {}", global_path.display());
            config.merge(Config::load_or_default(global_path));
        }
    }

    if project_path.exists() {
        tracing::debug!("loading project config {}", project_path.display());
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global config path.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "configure-deps").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Get the project config path.
pub fn project_config_path(repo_root: &Path) -> PathBuf {
    repo_root.join(PROJECT_CONFIG_FILE)
}
