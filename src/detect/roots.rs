//! The resolved ecosystem-to-root record.

use serde::Serialize;

use crate::core::ecosystem::Ecosystem;

/// Configuration root per detected ecosystem.
///
/// Each field holds the directory (always starting with `/`, never
/// including the manifest file name) that the ecosystem's update entry
/// applies to. Undetected ecosystems are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedRoots {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rust: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scala: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typescript: Option<String>,
}

impl ResolvedRoots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root for an ecosystem, if detected.
    pub fn get(&self, eco: Ecosystem) -> Option<&str> {
        self.slot(eco).as_deref()
    }

    /// Record the root for an ecosystem, replacing any previous value.
    pub fn set(&mut self, eco: Ecosystem, root: impl Into<String>) {
        *self.slot_mut(eco) = Some(root.into());
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Detected ecosystems and their roots, ordered by identifier.
    pub fn iter(&self) -> impl Iterator<Item = (Ecosystem, &str)> + '_ {
        Ecosystem::ALL
            .into_iter()
            .filter_map(move |eco| self.get(eco).map(|root| (eco, root)))
    }

    fn slot(&self, eco: Ecosystem) -> &Option<String> {
        match eco {
            Ecosystem::Go => &self.go,
            Ecosystem::Python => &self.python,
            Ecosystem::Rust => &self.rust,
            Ecosystem::Scala => &self.scala,
            Ecosystem::Typescript => &self.typescript,
        }
    }

    fn slot_mut(&mut self, eco: Ecosystem) -> &mut Option<String> {
        match eco {
            Ecosystem::Go => &mut self.go,
            Ecosystem::Python => &mut self.python,
            Ecosystem::Rust => &mut self.rust,
            Ecosystem::Scala => &mut self.scala,
            Ecosystem::Typescript => &mut self.typescript,
        }
    }
}
