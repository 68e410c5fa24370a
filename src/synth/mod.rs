//! Dependabot configuration synthesis.
//!
//! Renders `dependabot.yml` from a [`ResolvedRoots`] record. The document
//! is built from typed entries and serialized with `serde_yaml`; it is not
//! validated against Dependabot's schema.
//!
//! The `github-actions` entry is always first. Detected ecosystems follow in
//! identifier order, so equal inputs always render byte-identical output.

pub mod policy;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::detect::ResolvedRoots;

pub use policy::{policy_for, IgnoreRule, Policy};

/// A rendered configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    /// The YAML text.
    pub text: String,
    /// The `updates` entries in document order.
    pub entries: Vec<UpdateTarget>,
    /// Messages for the operator about setup that could not be automated.
    pub notices: Vec<String>,
}

impl ConfigDocument {
    /// Number of `updates` entries in the document.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Which directory one `updates` entry watches, and for which ecosystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTarget {
    pub package_ecosystem: &'static str,
    pub directory: String,
}

#[derive(Serialize)]
struct Document<'a> {
    version: u8,
    updates: Vec<UpdateEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct UpdateEntry<'a> {
    package_ecosystem: &'a str,
    directory: &'a str,
    schedule: Schedule,
    commit_message: CommitMessage,
    labels: [&'static str; 1],
    groups: Groups,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ignore: Vec<IgnoredDependency>,
}

#[derive(Serialize)]
struct Schedule {
    interval: &'static str,
}

#[derive(Serialize)]
struct CommitMessage {
    prefix: &'static str,
}

#[derive(Serialize)]
struct Groups {
    all: Group,
}

#[derive(Serialize)]
struct Group {
    patterns: [&'static str; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct IgnoredDependency {
    dependency_name: &'static str,
}

impl<'a> UpdateEntry<'a> {
    fn new(package_ecosystem: &'a str, directory: &'a str, ignore: Option<&IgnoreRule>) -> Self {
        UpdateEntry {
            package_ecosystem,
            directory,
            schedule: Schedule {
                interval: policy::SCHEDULE_INTERVAL,
            },
            commit_message: CommitMessage {
                prefix: policy::COMMIT_PREFIX,
            },
            labels: [policy::LABEL],
            groups: Groups {
                all: Group { patterns: ["*"] },
            },
            ignore: ignore
                .map(|rule| {
                    rule.dependencies
                        .iter()
                        .map(|&dependency_name| IgnoredDependency { dependency_name })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Render the Dependabot configuration for `roots`.
///
/// Fails only if serialization fails.
pub fn synthesize(roots: &ResolvedRoots) -> Result<ConfigDocument> {
    let mut updates = vec![UpdateEntry::new(policy::ACTIONS_ECOSYSTEM, "/", None)];
    let mut reasons: Vec<&'static [&'static str]> = vec![&[]];
    let mut entries = vec![UpdateTarget {
        package_ecosystem: policy::ACTIONS_ECOSYSTEM,
        directory: "/".to_string(),
    }];
    let mut notices = Vec::new();

    for (eco, root) in roots.iter() {
        match policy_for(eco) {
            Policy::Update {
                package_ecosystem,
                ignore,
            } => {
                updates.push(UpdateEntry::new(package_ecosystem, root, ignore.as_ref()));
                reasons.push(ignore.map(|rule| rule.reason).unwrap_or(&[]));
                entries.push(UpdateTarget {
                    package_ecosystem,
                    directory: root.to_string(),
                });
            }
            Policy::Manual { notice } => {
                tracing::debug!("{} needs manual setup", eco);
                notices.push(notice.to_string());
            }
        }
    }

    let yaml = serde_yaml::to_string(&Document {
        version: 2,
        updates,
    })
    .context("failed to serialize Dependabot config to YAML")?;

    Ok(ConfigDocument {
        text: annotate_ignores(&yaml, &reasons),
        entries,
        notices,
    })
}

/// Put each entry's ignore reason as comments above its `ignore:` key.
///
/// `reasons` is indexed by entry. An entry starts at a `- package-ecosystem:`
/// line with at most two spaces of indentation; block scalar content is
/// always indented further, so it never matches.
fn annotate_ignores(yaml: &str, reasons: &[&[&str]]) -> String {
    let mut out = String::with_capacity(yaml.len());
    let mut entry: Option<usize> = None;
    let mut ignore_key = String::new();

    for line in yaml.lines() {
        let body = line.trim_start();
        let indent = line.len() - body.len();

        if indent <= 2 && body.starts_with("- package-ecosystem:") {
            entry = Some(entry.map_or(0, |i| i + 1));
            ignore_key = format!("{}ignore:", " ".repeat(indent + 2));
        } else if line == ignore_key {
            let reason = entry.and_then(|i| reasons.get(i)).copied().unwrap_or(&[]);
            for comment in reason {
                out.push_str(&" ".repeat(indent));
                out.push_str("# ");
                out.push_str(comment);
                out.push('\n');
            }
        }

        out.push_str(line);
        out.push('\n');
    }

    out
}
