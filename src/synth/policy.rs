//! Fixed per-ecosystem update policy.

use crate::core::ecosystem::Ecosystem;

/// How often Dependabot checks for updates.
pub const SCHEDULE_INTERVAL: &str = "monthly";

/// Prefix for every Dependabot commit message.
pub const COMMIT_PREFIX: &str = "chore(deps): ";

/// Label applied to every Dependabot pull request.
pub const LABEL: &str = "dependencies";

/// Package ecosystem of the unconditional workflow entry.
pub const ACTIONS_ECOSYSTEM: &str = "github-actions";

/// Dependencies Dependabot must never bump, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreRule {
    pub reason: &'static [&'static str],
    pub dependencies: &'static [&'static str],
}

/// What to emit for a detected ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Emit a Dependabot update entry.
    Update {
        package_ecosystem: &'static str,
        ignore: Option<IgnoreRule>,
    },
    /// Emit nothing; tell the operator to finish setup by hand.
    Manual { notice: &'static str },
}

const CDK_PINNED: IgnoreRule = IgnoreRule {
    reason: &[
        "The version of AWS CDK libraries must match those from @guardian/cdk.",
        "We'd never be able to update them here independently, so just ignore them.",
    ],
    dependencies: &["aws-cdk", "aws-cdk-lib", "constructs"],
};

const SCALA_STEWARD_NOTICE: &str = "Please follow the instructions at \
https://github.com/guardian/scala-steward-public-repos (or the private equivalent) \
to add Scala Steward to this repo. Unfortunately, this is configured via the UI so \
cannot be done here.";

/// The policy applied to an ecosystem.
pub fn policy_for(eco: Ecosystem) -> Policy {
    match eco {
        // Dependabot names the Go modules ecosystem `gomod`; `go` is rejected
        // by its config schema.
        Ecosystem::Go => Policy::Update {
            package_ecosystem: "gomod",
            ignore: None,
        },
        Ecosystem::Python => Policy::Update {
            package_ecosystem: "pip",
            ignore: None,
        },
        // Dependabot supports Cargo, so Rust roots get an entry rather than
        // being detected and then dropped.
        Ecosystem::Rust => Policy::Update {
            package_ecosystem: "cargo",
            ignore: None,
        },
        Ecosystem::Scala => Policy::Manual {
            notice: SCALA_STEWARD_NOTICE,
        },
        Ecosystem::Typescript => Policy::Update {
            package_ecosystem: "npm",
            ignore: Some(CDK_PINNED),
        },
    }
}
