//! `configure-deps render` command

use std::path::Path;

use anyhow::Result;

use configure_deps::ops::render;
use configure_deps::util::Shell;

pub fn execute(root: &Path, shell: &Shell) -> Result<()> {
    let config = super::load_config(root);
    let document = render(root, &config)?;

    print!("{}", document.text);
    for notice in &document.notices {
        shell.action(notice);
    }

    Ok(())
}
