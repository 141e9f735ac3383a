//! # Process Execution Module
//!
//! Spawns a command in a working directory and captures its output. Both
//! streams are read concurrently while the child runs, so a chatty process
//! cannot deadlock on a full pipe, and they are kept separate because the
//! result contract reports `stdout` and `stderr` as distinct fields.

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;

/// Captured outcome of one child process run.
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Runs `program` with `args`, with the child's working directory set to
/// `workdir`, and awaits completion.
///
/// A spawn error (program not found, directory not traversable) is returned
/// as the `Err` variant; the caller decides how to report it.
pub async fn run_in_dir(
    program: &str,
    args: &[String],
    workdir: &Path,
) -> std::io::Result<CapturedOutput> {
    let mut child = Command::new(program)
        .args(args)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("failed to capture child stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| std::io::Error::other("failed to capture child stderr"))?;

    let stdout_handle = read_lines(stdout);
    let stderr_handle = read_lines(stderr);

    let status = child.wait().await?;

    // Join the readers after the child exits so every buffered line is in.
    let stdout = stdout_handle.await.unwrap_or_default();
    let stderr = stderr_handle.await.unwrap_or_default();

    Ok(CapturedOutput {
        status,
        stdout,
        stderr,
    })
}

/// Drains one stream line by line on its own task.
fn read_lines<R>(stream: R) -> JoinHandle<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut captured = String::new();
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            captured.push_str(&line);
            captured.push('\n');
        }
        captured
    })
}
