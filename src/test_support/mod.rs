//! Test utilities and mocks for unit tests.
//!
//! Provides an in-memory [`FileTree`], a mock [`Executor`] that records the
//! commands it is asked to run, and a scripted [`Confirm`] prompt.
//!
//! # Example
//!
//! ```rust,ignore
//! use configure_deps::test_support::{MemoryTree, MockExecutor, MockProcessOutput};
//!
//! #[test]
//! fn test_example() {
//!     let tree = MemoryTree::from_files(["go.mod", "web/package.json"]);
//!
//!     let mut exec = MockExecutor::new();
//!     exec.expect("git branch --show-current", MockProcessOutput::success("main"));
//!
//!     // Use mocks in tests...
//! }
//! ```

pub mod fixtures;

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::io;

use anyhow::{bail, Result};

use crate::core::tree::{EntryKind, FileTree, ScanError, TreeEntry};
use crate::util::process::{Executor, ProcessOutput};
use crate::util::prompt::Confirm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    File,
    Dir,
    Symlink,
    Unreadable,
}

/// In-memory file tree.
///
/// Parent directories are created implicitly. Entries are walked in
/// lexicographic path order.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    nodes: BTreeMap<String, Node>,
}

impl MemoryTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        MemoryTree {
            nodes: BTreeMap::new(),
        }
    }

    /// Create a tree containing the given regular files.
    pub fn from_files<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = MemoryTree::new();
        for path in paths {
            tree.add_file(path.as_ref());
        }
        tree
    }

    /// Add a regular file.
    pub fn add_file(&mut self, path: &str) {
        self.insert(path, Node::File);
    }

    /// Add a directory.
    pub fn add_dir(&mut self, path: &str) {
        self.insert(path, Node::Dir);
    }

    /// Add a symlink.
    pub fn add_symlink(&mut self, path: &str) {
        self.insert(path, Node::Symlink);
    }

    /// Make the walk fail when it reaches `path`.
    pub fn fail_at(&mut self, path: &str) {
        self.insert(path, Node::Unreadable);
    }

    fn insert(&mut self, path: &str, node: Node) {
        let path = path.trim_matches('/');
        let mut parent = path;
        while let Some((dir, _)) = parent.rsplit_once('/') {
            self.nodes.entry(dir.to_string()).or_insert(Node::Dir);
            parent = dir;
        }
        self.nodes.insert(path.to_string(), node);
    }
}

impl FileTree for MemoryTree {
    fn walk(&self) -> Box<dyn Iterator<Item = Result<TreeEntry, ScanError>> + '_> {
        Box::new(self.nodes.iter().map(|(path, node)| {
            let kind = match node {
                Node::File => EntryKind::File,
                Node::Dir => EntryKind::Dir,
                Node::Symlink => EntryKind::Other,
                Node::Unreadable => {
                    return Err(ScanError::Io {
                        path: path.clone(),
                        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
                    })
                }
            };
            Ok(TreeEntry::new(path.clone(), kind))
        }))
    }
}

/// Mock process output for testing command execution.
#[derive(Debug, Clone)]
pub struct MockProcessOutput {
    /// Exit status code (0 = success).
    pub status: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl MockProcessOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        MockProcessOutput {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Create a failure output with the given stderr and status code.
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

impl From<MockProcessOutput> for ProcessOutput {
    fn from(mock: MockProcessOutput) -> Self {
        ProcessOutput {
            code: Some(mock.status),
            stdout: mock.stdout,
            stderr: mock.stderr,
        }
    }
}

/// Pattern for matching commands in MockExecutor.
#[derive(Debug, Clone)]
pub enum CommandPattern {
    /// Exact match on full command string.
    Exact(String),
    /// Match if command starts with prefix.
    StartsWith(String),
}

impl CommandPattern {
    /// Check if this pattern matches the given command.
    pub fn matches(&self, cmd: &str) -> bool {
        match self {
            CommandPattern::Exact(s) => cmd == s,
            CommandPattern::StartsWith(s) => cmd.starts_with(s),
        }
    }
}

/// Mock process executor for testing command execution.
///
/// Records every command it is asked to run and answers from the first
/// matching expectation, then the default output. Unexpected commands fail.
#[derive(Debug, Default)]
pub struct MockExecutor {
    expectations: Vec<(CommandPattern, MockProcessOutput)>,
    calls: Vec<String>,
    default_output: Option<MockProcessOutput>,
    unavailable: HashSet<String>,
}

impl MockExecutor {
    /// Create a new mock executor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expectation for an exact command match.
    pub fn expect(&mut self, cmd: &str, output: MockProcessOutput) -> &mut Self {
        self.expectations
            .push((CommandPattern::Exact(cmd.to_string()), output));
        self
    }

    /// Add an expectation for a command starting with a prefix.
    pub fn expect_prefix(&mut self, prefix: &str, output: MockProcessOutput) -> &mut Self {
        self.expectations
            .push((CommandPattern::StartsWith(prefix.to_string()), output));
        self
    }

    /// Set a default output for commands that don't match any expectation.
    pub fn set_default(&mut self, output: MockProcessOutput) -> &mut Self {
        self.default_output = Some(output);
        self
    }

    /// Report `program` as missing from PATH.
    pub fn set_unavailable(&mut self, program: &str) -> &mut Self {
        self.unavailable.insert(program.to_string());
        self
    }

    /// Get all commands that were called.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

impl Executor for MockExecutor {
    fn run(&mut self, program: &str, args: &[&str]) -> Result<ProcessOutput> {
        let full_cmd = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };

        self.calls.push(full_cmd.clone());

        if self.unavailable.contains(program) {
            bail!("failed to spawn `{}`", program);
        }

        if let Some((_, output)) = self
            .expectations
            .iter()
            .find(|(pattern, _)| pattern.matches(&full_cmd))
        {
            return Ok(output.clone().into());
        }

        if let Some(ref default) = self.default_output {
            return Ok(default.clone().into());
        }

        bail!("unexpected command: {}", full_cmd)
    }

    fn is_available(&self, program: &str) -> bool {
        !self.unavailable.contains(program)
    }
}

/// Prompt that answers from a fixed script and records the questions asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    questions: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        ScriptedPrompt {
            answers: answers.into_iter().collect(),
            questions: Vec::new(),
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Confirm for ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.questions.push(question.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("unexpected question: {}", question),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_tree_adds_parents() {
        let tree = MemoryTree::from_files(["a/b/c.txt"]);
        let entries: Vec<TreeEntry> = tree.walk().map(|e| e.unwrap()).collect();

        assert_eq!(
            entries,
            vec![
                TreeEntry::new("a", EntryKind::Dir),
                TreeEntry::new("a/b", EntryKind::Dir),
                TreeEntry::new("a/b/c.txt", EntryKind::File),
            ]
        );
    }

    #[test]
    fn test_memory_tree_failure() {
        let mut tree = MemoryTree::from_files(["a.txt"]);
        tree.fail_at("b");

        let results: Vec<_> = tree.walk().collect();
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_mock_executor_records_calls() {
        let mut exec = MockExecutor::new();
        exec.expect("git status", MockProcessOutput::success("clean"));

        let output = exec.run("git", &["status"]).unwrap();
        assert!(output.success());
        assert_eq!(output.stdout, "clean");
        assert_eq!(exec.calls(), &["git status".to_string()]);

        assert!(exec.run("git", &["log"]).is_err());
    }

    #[test]
    fn test_scripted_prompt_exhausted() {
        let mut prompt = ScriptedPrompt::new([true]);
        assert!(prompt.confirm("one?").unwrap());
        assert!(prompt.confirm("two?").is_err());
        assert_eq!(prompt.questions().len(), 2);
    }
}
