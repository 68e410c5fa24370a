//! configure-deps - set up Dependabot for a repository in one command
//!
//! This crate detects the language ecosystems present in a repository,
//! renders a `dependabot.yml` with one update entry per ecosystem, and
//! publishes it as a pull request.

pub mod core;
pub mod detect;
pub mod ops;
pub mod synth;
pub mod util;

/// Test utilities and mocks for unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides an in-memory file tree, a mock process executor and a scripted
/// prompt.
#[cfg(test)]
pub mod test_support;

pub use core::{ecosystem::Ecosystem, tree::DiskTree, tree::FileTree};
pub use detect::{find_files, resolve_ecosystems, ResolvedRoots};
pub use synth::{synthesize, ConfigDocument};
