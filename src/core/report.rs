//! # Result Contract Module
//!
//! The module's analogue of Ansible's `exit_json` / `fail_json`: every
//! invocation ends in exactly one [`Report`], serialized as a single JSON
//! object on stdout. Failure reports carry `failed: true` and make the
//! process exit non-zero, which is how a binary module signals failure to
//! Ansible.
//!
//! `changed` is `false` on every path, success and failure alike: the module
//! mutates no state of its own, it only runs tests. Downstream automation
//! may key on this, so it is preserved exactly.

use serde_json::{Value, json};

/// The final outcome of one module invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// behave exited zero.
    Success {
        feature: Option<String>,
        stdout: String,
    },
    /// The parameters were rejected before any process was launched.
    ValidationFailure { msg: String },
    /// behave exited non-zero, or could not be launched at all.
    ExecutionFailure {
        feature: Option<String>,
        stdout: String,
        stderr: String,
        msg: String,
    },
}

impl Report {
    pub fn validation_failure(msg: impl Into<String>) -> Self {
        Report::ValidationFailure { msg: msg.into() }
    }

    /// Whether this report takes the framework's failure path.
    pub fn failed(&self) -> bool {
        !matches!(self, Report::Success { .. })
    }

    /// The JSON result object handed to Ansible.
    ///
    /// `feature` is always present and serializes as `null` when no feature
    /// name was supplied, as in the original module.
    pub fn to_json(&self) -> Value {
        match self {
            Report::Success { feature, stdout } => json!({
                "changed": false,
                "feature": feature,
                "stdout": stdout,
            }),
            Report::ValidationFailure { msg } => json!({
                "failed": true,
                "changed": false,
                "msg": msg,
            }),
            Report::ExecutionFailure {
                feature,
                stdout,
                stderr,
                msg,
            } => json!({
                "failed": true,
                "changed": false,
                "stdout": stdout,
                "stderr": stderr,
                "msg": msg,
                "feature": feature,
            }),
        }
    }
}
