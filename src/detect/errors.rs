//! Detection error types.

use thiserror::Error;

/// Error raised when detection cannot produce usable roots.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectError {
    #[error("unable to configure as no languages detected")]
    NoEcosystemDetected,
}
