//! `configure-deps setup` command

use std::io;
use std::path::Path;

use anyhow::Result;

use crate::cli::SetupArgs;
use configure_deps::ops::{configure, ConfigureOptions, ConfigureOutcome, GitHubPublisher};
use configure_deps::util::process::SystemExecutor;
use configure_deps::util::prompt::TerminalPrompt;
use configure_deps::util::Shell;

/// Build configure options from the arguments and loaded config.
///
/// Flags override the config files.
pub fn build_options(args: &SetupArgs, root: &Path) -> ConfigureOptions {
    let mut config = super::load_config(root);
    if let Some(output) = &args.output {
        config.output.path = Some(output.clone());
    }

    ConfigureOptions {
        root: root.to_path_buf(),
        config,
        dry_run: args.dry_run,
        assume_yes: args.yes,
    }
}

pub fn execute(args: SetupArgs, root: &Path, shell: &Shell) -> Result<()> {
    let opts = build_options(&args, root);

    let mut publisher = GitHubPublisher::new(SystemExecutor::new(root));
    let mut prompt = TerminalPrompt::new(io::stdin().lock(), io::stderr());

    let outcome = configure(&opts, &mut publisher, &mut prompt, shell)?;
    tracing::debug!("{} update entries", outcome.document().entry_count());

    if let ConfigureOutcome::DryRun { document } = &outcome {
        print!("{}", document.text);
    }

    Ok(())
}
