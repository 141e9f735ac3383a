// src/cli.rs
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{execution, params::ModuleParams, report::Report};

fn build_cli() -> Command {
    Command::new("ansible-behave")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ansible binary module wrapping the behave BDD test runner")
        .arg(
            Arg::new("args-file")
                .help("Path to the JSON args file Ansible passes to a binary module")
                .value_name("ARGS_FILE")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

fn load_params(args_file: &Path) -> Result<ModuleParams> {
    let raw = fs::read_to_string(args_file)
        .with_context(|| format!("could not read args file {}", args_file.display()))?;
    ModuleParams::from_json(&raw)
}

/// Parses the command line and runs the module.
///
/// Every outcome, including an unreadable or malformed args file, ends in a
/// [`Report`]: Ansible expects a JSON object on stdout even when the module
/// rejects its input.
pub async fn run() -> Report {
    let matches = build_cli().get_matches();
    let args_file = matches
        .get_one::<PathBuf>("args-file")
        .expect("ARGS_FILE is required")
        .clone();

    match load_params(&args_file) {
        Ok(params) => execution::run_module(params).await,
        // {:#} flattens the context chain into one message line.
        Err(e) => Report::validation_failure(format!("{e:#}")),
    }
}
