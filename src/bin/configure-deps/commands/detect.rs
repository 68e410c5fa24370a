//! `configure-deps detect` command

use std::path::Path;

use anyhow::Result;

use crate::cli::DetectArgs;
use configure_deps::ops::detect_roots;
use configure_deps::util::Shell;
use configure_deps::ResolvedRoots;

/// Format roots as `ecosystem  root` lines.
pub fn format_roots(roots: &ResolvedRoots) -> String {
    roots
        .iter()
        .map(|(eco, root)| format!("{:<12} {}\n", eco.id(), root))
        .collect()
}

pub fn execute(args: DetectArgs, root: &Path, shell: &Shell) -> Result<()> {
    let config = super::load_config(root);
    let roots = detect_roots(root, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&roots)?);
        return Ok(());
    }

    if roots.is_empty() {
        shell.warn("no languages detected");
        return Ok(());
    }

    print!("{}", format_roots(&roots));
    Ok(())
}
