//! draft-issues - turn markdown issue drafts into GitHub issue commands

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = draft_issues::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
