//! Draft file access
//!
//! Drafts are `*.md` files in a single directory (no recursion). Each one is
//! read whole and handed to the extractor.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{build_issue_record, IssueRecord};

const BOM: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Issues directory not found: {0}")]
    MissingInput(PathBuf),

    #[error("Failed to list drafts in {path}")]
    ListFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read draft {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Draft export not found at {0}. Run 'draft-issues generate' first.")]
    MissingArtifact(PathBuf),

    #[error("Draft export at {path} is not valid")]
    InvalidExport {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize issues")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Directory of draft issue files
pub struct DraftStore {
    dir: PathBuf,
}

impl DraftStore {
    /// Creates a store over the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Lists draft files sorted by file name
    pub fn list(&self) -> Result<Vec<PathBuf>, DraftError> {
        if !self.dir.is_dir() {
            return Err(DraftError::MissingInput(self.dir.clone()));
        }

        let list_err = |source| DraftError::ListFailed {
            path: self.dir.clone(),
            source,
        };

        let mut drafts = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(list_err)? {
            let path = entry.map_err(list_err)?.path();
            if path.is_file() && path.extension().is_some_and(|e| e == "md") {
                drafts.push(path);
            }
        }

        drafts.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(drafts)
    }

    /// Reads every draft, keeping per-file failures alongside the successes
    pub fn read_all(&self) -> Result<Vec<(PathBuf, Result<IssueRecord, DraftError>)>, DraftError> {
        Ok(self
            .list()?
            .into_iter()
            .map(|path| {
                let issue = read_draft(&path);
                (path, issue)
            })
            .collect())
    }
}

/// Reads a single draft file into an issue
pub fn read_draft(path: &Path) -> Result<IssueRecord, DraftError> {
    let document = read_document(path)?;
    Ok(build_issue_record(&document, &base_name(path)))
}

/// Reads the raw text of a draft, minus any byte-order mark
pub fn read_document(path: &Path) -> Result<String, DraftError> {
    let mut content = fs::read_to_string(path).map_err(|source| DraftError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if content.starts_with(BOM) {
        content.replace_range(..BOM.len_utf8(), "");
    }

    Ok(content)
}

/// File name without the `.md` extension
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
