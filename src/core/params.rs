//! # Parameter Schema Module
//!
//! Defines the typed parameter set for the module and the validation that
//! turns the raw JSON args file supplied by Ansible into a
//! [`ModuleParams`] value. Validation covers required fields, types,
//! `choices` sets and defaults, and mirrors `AnsibleModule`'s rejection of
//! unsupported parameters.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The literal token that must appear in `output_name` and is replaced by
/// the base filename of the selected feature file.
pub const FEATURE_PLACEHOLDER: &str = "{feature}";

/// Parameter names accepted by the module. Anything else in the args file
/// (apart from Ansible's internal `_ansible*` keys) is rejected.
const KNOWN_KEYS: [&str; 7] = [
    "path",
    "name",
    "language",
    "tags",
    "output_format",
    "output_name",
    "output_dir",
];

/// Language of the feature files, forwarded to behave as `--lang`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Language {
    #[default]
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "en")]
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

/// Formatter behave uses to render the run, forwarded as `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum OutputFormat {
    #[default]
    #[serde(rename = "pretty")]
    Pretty,
    #[serde(rename = "json.pretty")]
    JsonPretty,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::JsonPretty => "json.pretty",
        }
    }
}

/// The validated parameter set for one module invocation.
///
/// Field defaults match the original module's `argument_spec`: `language`
/// defaults to French, the formatter to `pretty`, the output file to
/// `{feature}_result` under `/tmp`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleParams {
    /// Directory containing the `features` directory; the behave working
    /// directory. Existence is left to behave and the OS to enforce.
    pub path: PathBuf,
    /// Feature file to run. All discoverable feature files run when unset.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub language: Language,
    /// Comma-separated tag selection, passed through verbatim.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Name of the file behave writes its output to. Must contain the
    /// `{feature}` placeholder.
    #[serde(default = "default_output_name")]
    pub output_name: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_name() -> String {
    format!("{FEATURE_PLACEHOLDER}_result")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

impl ModuleParams {
    /// Parses and validates the raw contents of an Ansible args file.
    ///
    /// Ansible injects `_ansible_check_mode` and similar bookkeeping keys
    /// into binary-module args files; those are dropped before the
    /// unsupported-parameter check.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut value: serde_json::Value =
            serde_json::from_str(raw).context("module arguments are not valid JSON")?;
        let object = value
            .as_object_mut()
            .context("module arguments must be a JSON object")?;

        object.retain(|key, _| !key.starts_with("_ansible"));

        let mut unsupported: Vec<&str> = object
            .keys()
            .map(String::as_str)
            .filter(|key| !KNOWN_KEYS.contains(key))
            .collect();
        if !unsupported.is_empty() {
            unsupported.sort_unstable();
            bail!(
                "Unsupported parameters for (behave) module: {}",
                unsupported.join(", ")
            );
        }

        serde_json::from_value(value).context("invalid module arguments")
    }

    /// The feature filename filter, with the original module's truthiness
    /// semantics: an empty string counts as "not set".
    pub fn feature_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
