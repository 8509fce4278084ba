//! Issue records
//!
//! An [`IssueRecord`] is the normalized form of one draft, ready to be turned
//! into a tracker command or exported as JSON.

use serde::{Deserialize, Serialize};

use super::frontmatter::{parse_metadata, split_metadata, IssueMetadata};

/// A normalized issue ready for submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
}

impl IssueRecord {
    /// Builds an issue from decoded metadata and body text
    pub fn from_parts(meta: IssueMetadata, body: &str, source_base_name: &str) -> Self {
        let title = meta
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| fallback_title(source_base_name));

        Self {
            title,
            body: body.trim().to_string(),
            labels: list_field(meta.labels.as_deref()),
            assignees: list_field(meta.assignees.as_deref()),
        }
    }
}

/// Extracts an issue from the raw text of a draft.
///
/// `source_base_name` is the draft's file name without extension; it only
/// matters when the draft has no title of its own.
pub fn build_issue_record(document: &str, source_base_name: &str) -> IssueRecord {
    let (metadata, body) = split_metadata(document);
    let record = parse_metadata(metadata);
    IssueRecord::from_parts(IssueMetadata::from(&record), body, source_base_name)
}

/// Derives a title from a file base name (`fix-login-bug` -> `fix login bug`)
pub fn fallback_title(base_name: &str) -> String {
    base_name.replace('-', " ")
}

/// Splits a comma-separated field into trimmed entries
///
/// Entries are kept even when empty, so `bug,,ui` has three.
pub fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(|s| s.trim().to_string()).collect()
}

/// An absent or empty field is an empty list
fn list_field(value: Option<&str>) -> Vec<String> {
    value
        .filter(|v| !v.is_empty())
        .map(split_list)
        .unwrap_or_default()
}
