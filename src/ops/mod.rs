//! High-level operations.
//!
//! This module contains the implementation of configure-deps commands.

pub mod configure;
pub mod errors;
pub mod publish;

pub use configure::{configure, detect_roots, render, ConfigureOptions, ConfigureOutcome};
pub use errors::ConfigureError;
pub use publish::{GitHubPublisher, PublishRequest, Publisher};
