//! Command implementations

use std::path::Path;

use configure_deps::util::config::{self, Config};

pub mod completions;
pub mod detect;
pub mod render;
pub mod setup;

/// Load the merged global and project configuration for `root`.
pub fn load_config(root: &Path) -> Config {
    let global = config::global_config_path();
    config::load_config(global.as_deref(), &config::project_config_path(root))
}
