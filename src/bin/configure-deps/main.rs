//! configure-deps CLI - one-shot Dependabot onboarding

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use configure_deps::util::Shell;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("configure_deps=debug")
    } else if cli.quiet {
        EnvFilter::new("configure_deps=error")
    } else {
        EnvFilter::new("configure_deps=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let shell = Shell::from_flags(cli.quiet, cli.verbose, cli.color);

    match cli.command {
        Commands::Setup(args) => commands::setup::execute(args, &cli.path, &shell),
        Commands::Detect(args) => commands::detect::execute(args, &cli.path, &shell),
        Commands::Render => commands::render::execute(&cli.path, &shell),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
