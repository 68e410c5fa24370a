//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use configure_deps::util::shell::ColorChoice;

/// configure-deps - detect ecosystems and open a PR configuring Dependabot
#[derive(Parser)]
#[command(name = "configure-deps")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Repository root (defaults to the current directory)
    #[arg(short = 'C', long = "path", global = true, default_value = ".")]
    pub path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a Dependabot config, commit it on a new branch and open a PR
    Setup(SetupArgs),

    /// Show detected ecosystems and their configuration roots
    Detect(DetectArgs),

    /// Print the Dependabot config that would be generated
    Render,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct SetupArgs {
    /// Print the config to stdout instead of writing it to the repo
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite an existing config without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Where to write the config, relative to the repository root
    #[arg(long, env = "CONFIGURE_DEPS_OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct DetectArgs {
    /// Print the roots as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
