//! Core data structures for configure-deps.
//!
//! - [`Ecosystem`](ecosystem::Ecosystem): the language ecosystems that can be detected
//! - [`FileTree`](tree::FileTree): a walkable view of a repository

pub mod ecosystem;
pub mod tree;
