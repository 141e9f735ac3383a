use ansible_behave::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let report = cli::run().await;

    // Ansible reads exactly one JSON object from the module's stdout.
    println!("{}", report.to_json());

    if report.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
