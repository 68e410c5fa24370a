//! Manifest file discovery.

use crate::core::tree::FileTree;

/// Find every regular file named `name` in `tree`.
///
/// Paths containing any of `ignore_dirs` as a substring are skipped. The
/// result is in traversal order; callers sort if order matters.
///
/// A traversal error stops the walk. Whatever was collected up to that
/// point is returned and the error is logged as a warning.
pub fn find_files(tree: &dyn FileTree, name: &str, ignore_dirs: &[String]) -> Vec<String> {
    let in_ignored_dir =
        |path: &str| ignore_dirs.iter().any(|dir| path.contains(dir.as_str()));

    let mut paths = Vec::new();

    for entry in tree.walk() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("scan stopped early: {}", e);
                break;
            }
        };

        if entry.is_file() && entry.file_name() == name && !in_ignored_dir(&entry.path) {
            tracing::trace!("found {}", entry.path);
            paths.push(entry.path);
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryTree;

    fn ignore(dirs: &[&str]) -> Vec<String> {
        dirs.iter().map(|d| d.to_string()).collect()
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_find_files_skips_ignored_dirs() {
        let tree = MemoryTree::from_files([
            "README.md",
            "cdk/node_modules/foo/go.mod",
            "my-go-project/go.mod",
        ]);

        let found = find_files(&tree, "go.mod", &ignore(&["node_modules"]));
        assert_eq!(found, vec!["my-go-project/go.mod"]);
    }

    #[test]
    fn test_find_files_matches_exact_basename() {
        let tree = MemoryTree::from_files([
            "go.mod",
            "go.mod.bak",
            "old-go.mod",
            "nested/go.mod",
        ]);

        let found = sorted(find_files(&tree, "go.mod", &[]));
        assert_eq!(found, vec!["go.mod", "nested/go.mod"]);
    }

    #[test]
    fn test_find_files_ignores_directories_with_matching_name() {
        let mut tree = MemoryTree::new();
        tree.add_dir("weird/package.json");
        tree.add_file("app/package.json");

        let found = find_files(&tree, "package.json", &[]);
        assert_eq!(found, vec!["app/package.json"]);
    }

    #[test]
    fn test_find_files_ignores_symlinks() {
        let mut tree = MemoryTree::new();
        tree.add_symlink("linked/Cargo.toml");
        tree.add_file("crate/Cargo.toml");

        let found = find_files(&tree, "Cargo.toml", &[]);
        assert_eq!(found, vec!["crate/Cargo.toml"]);
    }

    #[test]
    fn test_find_files_ignore_is_substring_match() {
        // Any occurrence in the path counts, not only whole segments.
        let tree = MemoryTree::from_files([
            "my_node_modules_backup/package.json",
            "web/package.json",
        ]);

        let found = find_files(&tree, "package.json", &ignore(&["node_modules"]));
        assert_eq!(found, vec!["web/package.json"]);
    }

    #[test]
    fn test_find_files_multiple_ignore_entries() {
        let tree = MemoryTree::from_files([
            "vendor/lib/go.mod",
            "third_party/x/go.mod",
            "cmd/go.mod",
        ]);

        let found = find_files(&tree, "go.mod", &ignore(&["vendor", "third_party"]));
        assert_eq!(found, vec!["cmd/go.mod"]);
    }

    #[test]
    fn test_find_files_none_found() {
        let tree = MemoryTree::from_files(["README.md", "docs/index.md"]);
        assert!(find_files(&tree, "go.mod", &[]).is_empty());
    }

    #[test]
    fn test_find_files_keeps_partial_result_on_error() {
        let mut tree = MemoryTree::from_files(["a/go.mod", "z/go.mod"]);
        tree.fail_at("m");

        let found = find_files(&tree, "go.mod", &[]);
        assert_eq!(found, vec!["a/go.mod"]);
    }

    #[test]
    fn test_find_files_independent_of_insertion_order() {
        let forward = MemoryTree::from_files(["x/package.json", "y/package.json", "package.json"]);
        let backward = MemoryTree::from_files(["package.json", "y/package.json", "x/package.json"]);

        assert_eq!(
            sorted(find_files(&forward, "package.json", &[])),
            sorted(find_files(&backward, "package.json", &[]))
        );
    }
}
