//! Draft processing pipeline
//!
//! Reads every draft in a directory, extracts issues and writes both
//! artifacts. All locations come in through [`GenerateRequest`]; nothing
//! here looks at the working directory or global state.

use std::path::{Path, PathBuf};

use crate::domain::IssueRecord;
use crate::render::{render_script, ScriptOptions};
use crate::storage::{write_artifacts, DraftError, DraftStore};

/// Inputs and outputs for one generation run
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub input_dir: PathBuf,
    pub script_path: PathBuf,
    pub json_path: PathBuf,
    pub tracker_cli: String,
    pub repository: Option<String>,
}

/// A draft that was turned into an issue
#[derive(Debug, Clone)]
pub struct ProcessedDraft {
    pub file_name: String,
    pub issue: IssueRecord,
}

/// A draft that was skipped
#[derive(Debug)]
pub struct FailedDraft {
    pub file_name: String,
    pub error: DraftError,
}

/// What a generation run did
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of `*.md` files found
    pub found: usize,
    pub processed: Vec<ProcessedDraft>,
    pub failed: Vec<FailedDraft>,
    pub script_path: PathBuf,
    pub json_path: PathBuf,
}

impl GenerateReport {
    /// Issues in processing order
    pub fn issues(&self) -> impl Iterator<Item = &IssueRecord> {
        self.processed.iter().map(|p| &p.issue)
    }
}

/// Processes all drafts and writes the script and JSON export.
///
/// A missing input directory aborts the run. A draft that can't be read is
/// recorded in [`GenerateReport::failed`] and the rest still go through.
pub fn generate(request: &GenerateRequest) -> Result<GenerateReport, DraftError> {
    let store = DraftStore::new(&request.input_dir);

    let mut processed = Vec::new();
    let mut failed = Vec::new();

    let drafts = store.read_all()?;
    let found = drafts.len();

    for (path, result) in drafts {
        let file_name = file_name(&path);
        match result {
            Ok(issue) => processed.push(ProcessedDraft { file_name, issue }),
            Err(error) => failed.push(FailedDraft { file_name, error }),
        }
    }

    let issues: Vec<IssueRecord> = processed.iter().map(|p| p.issue.clone()).collect();

    let options = ScriptOptions {
        tracker_cli: &request.tracker_cli,
        repository: request.repository.as_deref(),
    };
    let script = render_script(&issues, &options);
    write_artifacts(&request.script_path, &script, &request.json_path, &issues)?;

    Ok(GenerateReport {
        found,
        processed,
        failed,
        script_path: request.script_path.clone(),
        json_path: request.json_path.clone(),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
