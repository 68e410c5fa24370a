//! Orchestration error types.

use std::path::PathBuf;

use thiserror::Error;

/// A precondition for configuring the repository was not met.
#[derive(Debug, Error)]
pub enum ConfigureError {
    #[error("currently on branch `{found}`; switch to `{expected}` before running this command")]
    NotOnBaseBranch { expected: String, found: String },

    #[error("unable to determine the current git branch; switch to `{expected}` before running this command")]
    BranchUnknown { expected: String },

    #[error("please install the GitHub CLI (`gh`) before running this command")]
    GhUnavailable,

    #[error("the GitHub CLI is not authenticated; run `gh auth login` first")]
    GhUnauthenticated,

    #[error("existing Dependabot config found at `{}`; please remove it before running to continue", path.display())]
    ExistingConfig { path: PathBuf },
}
