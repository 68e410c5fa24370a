//! Implementation of `configure-deps setup`, `detect` and `render`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::tree::DiskTree;
use crate::detect::{ensure_detected, resolve_ecosystems_with, ResolvedRoots};
use crate::ops::errors::ConfigureError;
use crate::ops::publish::{PublishRequest, Publisher};
use crate::synth::{synthesize, ConfigDocument};
use crate::util::config::Config;
use crate::util::fs::write_string;
use crate::util::prompt::Confirm;
use crate::util::shell::{Shell, Status};

/// Options for configuring a repository.
#[derive(Debug, Clone)]
pub struct ConfigureOptions {
    /// Repository root
    pub root: PathBuf,

    /// Merged configuration
    pub config: Config,

    /// Render only; write, commit and publish nothing
    pub dry_run: bool,

    /// Overwrite an existing config without asking
    pub assume_yes: bool,
}

/// What a configure run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigureOutcome {
    /// The document was rendered but not written.
    DryRun { document: ConfigDocument },

    /// The document was written, committed and a pull request opened.
    Published {
        document: ConfigDocument,
        path: PathBuf,
        url: String,
    },
}

impl ConfigureOutcome {
    pub fn document(&self) -> &ConfigDocument {
        match self {
            ConfigureOutcome::DryRun { document } => document,
            ConfigureOutcome::Published { document, .. } => document,
        }
    }
}

/// Detect ecosystem roots in the repository at `root`.
pub fn detect_roots(root: &Path, config: &Config) -> ResolvedRoots {
    let tree = DiskTree::new(root);
    resolve_ecosystems_with(&tree, &config.scan.ignored_dirs)
}

/// Detect ecosystems and render the configuration, without any git checks.
pub fn render(root: &Path, config: &Config) -> Result<ConfigDocument> {
    let roots = detect_roots(root, config);
    ensure_detected(&roots)?;
    synthesize(&roots)
}

/// Configure Dependabot for the repository and open a pull request.
pub fn configure(
    opts: &ConfigureOptions,
    publisher: &mut dyn Publisher,
    prompt: &mut dyn Confirm,
    shell: &Shell,
) -> Result<ConfigureOutcome> {
    let config = &opts.config;

    publisher.check_ready(config.base_branch())?;

    shell.status(Status::Scanning, opts.root.display());
    let roots = detect_roots(&opts.root, config);
    ensure_detected(&roots)?;
    for (eco, root) in roots.iter() {
        shell.status(Status::Detected, format!("{} at {}", eco, root));
    }

    let relative_path = config.output_path();
    let output_path = opts.root.join(&relative_path);

    if output_path.exists() && !opts.dry_run && !opts.assume_yes {
        let overwrite = prompt
            .confirm("existing Dependabot config found. Do you want to overwrite it?")?;
        if !overwrite {
            return Err(ConfigureError::ExistingConfig {
                path: relative_path,
            }
            .into());
        }
    }

    let document = synthesize(&roots)?;

    if opts.dry_run {
        print_notices(shell, &document);
        return Ok(ConfigureOutcome::DryRun { document });
    }

    write_string(&output_path, &document.text)?;
    shell.status(
        Status::Wrote,
        format!(
            "Dependabot config with {} update(s) to {}",
            document.entry_count(),
            relative_path.display()
        ),
    );

    let request = PublishRequest {
        path: relative_path.clone(),
        base_branch: config.base_branch().to_string(),
        branch: config.branch().to_string(),
        remote: config.remote().to_string(),
        commit_message: config.commit_message().to_string(),
        title: config.pr_title().to_string(),
        body: config.pr_body().to_string(),
    };

    shell.status(Status::Publishing, format!("branch `{}`", request.branch));
    let url = publisher.publish(&request)?;
    shell.status(Status::Opened, format!("PR raised at: {}", url));

    print_notices(shell, &document);

    Ok(ConfigureOutcome::Published {
        document,
        path: relative_path,
        url,
    })
}

fn print_notices(shell: &Shell, document: &ConfigDocument) {
    for notice in &document.notices {
        shell.action(notice);
    }
}
