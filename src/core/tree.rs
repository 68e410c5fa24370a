//! File tree abstraction used by the scanner.
//!
//! Detection never touches the real filesystem directly. It walks a
//! [`FileTree`], which is a [`DiskTree`] in production and an in-memory
//! tree in tests.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Kind of a tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file
    File,
    /// A directory
    Dir,
    /// Symlinks and other special files
    Other,
}

/// A single entry produced while walking a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the tree root, `/`-separated, no leading slash.
    pub path: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        TreeEntry {
            path: path.into(),
            kind,
        }
    }

    /// The last path segment.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Error raised while walking a tree.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// A queryable tree of files and directories.
pub trait FileTree {
    /// Walk every entry below the root, depth-first. The root itself is not
    /// yielded.
    fn walk(&self) -> Box<dyn Iterator<Item = Result<TreeEntry, ScanError>> + '_>;
}

/// The real filesystem rooted at a directory.
#[derive(Debug, Clone)]
pub struct DiskTree {
    root: PathBuf,
}

impl DiskTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DiskTree { root: root.into() }
    }

    fn relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FileTree for DiskTree {
    fn walk(&self) -> Box<dyn Iterator<Item = Result<TreeEntry, ScanError>> + '_> {
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        Box::new(walker.into_iter().map(move |entry| match entry {
            Ok(entry) => {
                let ty = entry.file_type();
                let kind = if ty.is_file() {
                    EntryKind::File
                } else if ty.is_dir() {
                    EntryKind::Dir
                } else {
                    EntryKind::Other
                };
                Ok(TreeEntry::new(self.relative(entry.path()), kind))
            }
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| self.relative(p))
                    .unwrap_or_else(|| self.root.display().to_string());
                Err(ScanError::Io {
                    path,
                    source: e.into(),
                })
            }
        }))
    }
}
