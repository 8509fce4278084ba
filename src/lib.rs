//! draft-issues - Turn markdown issue drafts into GitHub issue commands
//!
//! Drafts are markdown files with an optional `---` delimited header of
//! `key: value` fields (`title`, `labels`, `assignees`). Each draft becomes
//! an [`IssueRecord`]; a batch of records is written out as a `gh` script and
//! a JSON export, and the export can be replayed as a manual creation guide.

pub mod domain;
pub mod render;
pub mod storage;
pub mod generate;
pub mod cli;

pub use domain::{build_issue_record, IssueRecord, MetadataRecord};
pub use generate::{generate, GenerateReport, GenerateRequest};
