//! Test fixtures for common repository layouts.

use std::fs;
use std::path::Path;

use super::MemoryTree;

/// A monorepo mixing every ecosystem, with nested and vendored manifests.
pub fn polyglot_monorepo() -> MemoryTree {
    MemoryTree::from_files([
        "README.md",
        ".github/workflows/ci.yml",
        "cdk/package.json",
        "cdk/node_modules/aws-cdk-lib/package.json",
        "cdk/node_modules/esbuild/go.mod",
        "frontend/package.json",
        "frontend/packages/ui/package.json",
        "backend/go.mod",
        "backend/tools/go.mod",
        "ml/requirements.txt",
        "cli/Cargo.toml",
        "cli/crates/core/Cargo.toml",
        "build.sbt",
        "project/plugins.sbt",
    ])
}

/// Create empty files at `paths` below `root`.
pub fn write_files(root: &Path, paths: &[&str]) {
    for path in paths {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&full, "").expect("write fixture file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ecosystem::Ecosystem;
    use crate::detect::resolve_ecosystems;
    use crate::synth::synthesize;

    #[test]
    fn test_polyglot_monorepo_roots() {
        let roots = resolve_ecosystems(&polyglot_monorepo());

        // "cdk/package.json" and "frontend/package.json" differ in length;
        // the shorter one wins.
        assert_eq!(roots.get(Ecosystem::Typescript), Some("/cdk"));
        assert_eq!(roots.get(Ecosystem::Go), Some("/backend"));
        assert_eq!(roots.get(Ecosystem::Python), Some("/ml"));
        assert_eq!(roots.get(Ecosystem::Rust), Some("/cli"));
        assert_eq!(roots.get(Ecosystem::Scala), Some("/"));
    }

    #[test]
    fn test_polyglot_monorepo_document() {
        let doc = synthesize(&resolve_ecosystems(&polyglot_monorepo())).unwrap();

        // github-actions, gomod, pip, cargo, npm; scala is manual.
        assert_eq!(doc.entry_count(), 5);
        assert_eq!(doc.notices.len(), 1);
    }
}
