//! # Execution Flow Module
//!
//! The one-shot flow of a module invocation: assemble the behave command
//! from validated parameters, run it, and classify the outcome into a
//! [`Report`]. No retries and no partial success: one invocation, one child
//! process, one report.

use crate::core::command::BehaveCommand;
use crate::core::params::ModuleParams;
use crate::core::report::Report;
use crate::infra::exec;

/// Runs behave for `params` and produces the invocation's final report.
///
/// Errors never escape as a crash: a rejected `output_name` template becomes
/// a validation failure, a spawn error or non-zero behave exit becomes an
/// execution failure.
pub async fn run_module(params: ModuleParams) -> Report {
    let command = match BehaveCommand::from_params(&params) {
        Ok(command) => command,
        Err(e) => return Report::validation_failure(e.to_string()),
    };

    let feature = params.feature_name().map(str::to_string);

    match exec::run_in_dir(&command.program, &command.args, &command.workdir).await {
        Ok(captured) if captured.success() => Report::Success {
            feature,
            stdout: captured.stdout,
        },
        Ok(captured) => Report::ExecutionFailure {
            feature,
            stdout: captured.stdout,
            stderr: captured.stderr,
            // A failing exit code means at least one scenario went wrong;
            // behave's own output carries the detail.
            msg: "feature has at least one error".to_string(),
        },
        Err(e) => Report::ExecutionFailure {
            feature,
            stdout: String::new(),
            stderr: String::new(),
            msg: format!("failed to run '{}': {}", command.rendered(), e),
        },
    }
}
