// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes an Ansible-style args file into `dir` and returns its path.
pub fn write_args_file(dir: &TempDir, contents: &str) -> PathBuf {
    let args_path = dir.path().join("args.json");
    fs::write(&args_path, contents).expect("Failed to write args file");
    args_path
}

/// Installs a stub `behave` script into `dir` and returns the path of the
/// file it records its argv into. Prepend `dir` to PATH so the module picks
/// the stub up instead of a real behave installation.
#[cfg(unix)]
pub fn install_fake_behave(dir: &TempDir, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let argv_log = dir.path().join("behave_argv.txt");
    let script = format!(
        "#!/bin/sh\nprintf '%s' \"$*\" > {}\n{}\n",
        argv_log.display(),
        body
    );
    let script_path = dir.path().join("behave");
    fs::write(&script_path, script).expect("Failed to write fake behave");
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake behave executable");
    argv_log
}

/// PATH value with `dir` prepended, for running the module against the stub.
#[cfg(unix)]
pub fn path_with(dir: &TempDir) -> String {
    format!(
        "{}:{}",
        dir.path().display(),
        std::env::var("PATH").unwrap_or_default()
    )
}
