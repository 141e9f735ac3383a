//! # Command Assembly Module
//!
//! Builds the `behave` command line for a validated parameter set. The
//! fragment order is fixed (lang, tags, format, outfile, include) and
//! optional fragments are omitted entirely rather than passed empty, so the
//! same parameters always produce the same argv.

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use crate::core::params::{FEATURE_PLACEHOLDER, ModuleParams};

/// A fully resolved behave invocation, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaveCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the child process (the `path` parameter).
    pub workdir: PathBuf,
}

impl BehaveCommand {
    /// Assembles the command line for `params`.
    ///
    /// Fails before anything is spawned when `output_name` lacks the
    /// `{feature}` placeholder. The error message is part of the module's
    /// external contract and is kept verbatim.
    pub fn from_params(params: &ModuleParams) -> Result<Self> {
        if !params.output_name.contains(FEATURE_PLACEHOLDER) {
            bail!("The {{feature}} formatter is required in output_name string");
        }

        let feature = params.feature_name();
        let output_name = params
            .output_name
            .replace(FEATURE_PLACEHOLDER, base_filename(feature.unwrap_or("")));
        let output_path = params.output_dir.join(output_name);

        let mut args = vec!["--lang".to_string(), params.language.as_str().to_string()];
        if let Some(tags) = &params.tags {
            args.push(format!("--tags={tags}"));
        }
        args.push("--format".to_string());
        args.push(params.output_format.as_str().to_string());
        args.push("--outfile".to_string());
        args.push(output_path.to_string_lossy().into_owned());
        if let Some(name) = feature {
            args.push("--include".to_string());
            args.push(name.to_string());
        }

        Ok(Self {
            program: "behave".to_string(),
            args,
            workdir: params.path.clone(),
        })
    }

    /// Renders the invocation as a single shell-quoted string, for failure
    /// messages.
    pub fn rendered(&self) -> String {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        shlex::try_join(words).unwrap_or_else(|_| self.program.clone())
    }

    /// The path behave writes its output file to (`--outfile`).
    pub fn output_path(&self) -> Option<&Path> {
        self.args
            .iter()
            .position(|arg| arg == "--outfile")
            .and_then(|pos| self.args.get(pos + 1))
            .map(Path::new)
    }
}

/// The final path component of `name`, as `os.path.basename` resolves it:
/// everything after the last separator, so a trailing slash yields "".
fn base_filename(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
