//! Ecosystem detection.
//!
//! Scans a [`FileTree`] for each ecosystem's manifest file and picks one
//! configuration root per ecosystem. When several manifests exist the
//! shallowest one (shortest path) wins, since it is most likely the project
//! root.

pub mod errors;
pub mod roots;
pub mod scanner;

pub use errors::DetectError;
pub use roots::ResolvedRoots;
pub use scanner::find_files;

use crate::core::ecosystem::Ecosystem;
use crate::core::tree::FileTree;

/// Directory names whose contents are never treated as project manifests.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["node_modules"];

/// Resolve a root for every ecosystem present in `tree`.
pub fn resolve_ecosystems(tree: &dyn FileTree) -> ResolvedRoots {
    resolve_ecosystems_with(tree, &[])
}

/// Like [`resolve_ecosystems`], also skipping `extra_ignored` directories.
///
/// Empty names are dropped; they would match every path.
pub fn resolve_ecosystems_with(tree: &dyn FileTree, extra_ignored: &[String]) -> ResolvedRoots {
    let ignored: Vec<String> = DEFAULT_IGNORED_DIRS
        .iter()
        .map(|d| d.to_string())
        .chain(extra_ignored.iter().filter(|d| !d.is_empty()).cloned())
        .collect();

    let mut roots = ResolvedRoots::new();

    for eco in Ecosystem::ALL {
        let mut candidates = find_files(tree, eco.manifest_file(), &ignored);
        // Stable: equal lengths keep scan order.
        candidates.sort_by_key(|p| p.len());

        if let Some(manifest) = candidates.first() {
            let root = dependabot_root(manifest);
            tracing::debug!(
                "{}: using {} ({} candidate(s))",
                eco,
                manifest,
                candidates.len()
            );
            roots.set(eco, root);
        }
    }

    roots
}

/// The `directory` value Dependabot expects for a manifest path.
///
/// Begins with `/` and does not include the file name.
pub fn dependabot_root(manifest_path: &str) -> String {
    match manifest_path.rsplit_once('/') {
        Some((dir, _)) if !dir.is_empty() => format!("/{}", dir),
        _ => "/".to_string(),
    }
}

/// Fail unless at least one ecosystem was detected.
pub fn ensure_detected(roots: &ResolvedRoots) -> Result<(), DetectError> {
    if roots.is_empty() {
        return Err(DetectError::NoEcosystemDetected);
    }
    Ok(())
}
