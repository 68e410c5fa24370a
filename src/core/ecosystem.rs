//! Known package-management ecosystems.

use std::fmt;

use serde::Serialize;

/// A language ecosystem recognized by a unique manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// Go modules (`go.mod`)
    Go,
    /// pip (`requirements.txt`)
    Python,
    /// Cargo (`Cargo.toml`)
    Rust,
    /// sbt (`build.sbt`)
    Scala,
    /// npm (`package.json`)
    Typescript,
}

impl Ecosystem {
    /// Every ecosystem, ordered by identifier.
    pub const ALL: [Ecosystem; 5] = [
        Ecosystem::Go,
        Ecosystem::Python,
        Ecosystem::Rust,
        Ecosystem::Scala,
        Ecosystem::Typescript,
    ];

    /// Get the string identifier for this ecosystem.
    pub fn id(&self) -> &'static str {
        match self {
            Ecosystem::Go => "go",
            Ecosystem::Python => "python",
            Ecosystem::Rust => "rust",
            Ecosystem::Scala => "scala",
            Ecosystem::Typescript => "typescript",
        }
    }

    /// The manifest file whose presence marks a project root.
    pub fn manifest_file(&self) -> &'static str {
        match self {
            Ecosystem::Go => "go.mod",
            Ecosystem::Python => "requirements.txt",
            Ecosystem::Rust => "Cargo.toml",
            Ecosystem::Scala => "build.sbt",
            Ecosystem::Typescript => "package.json",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
