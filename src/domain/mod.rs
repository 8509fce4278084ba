//! Domain models for draft issues
//!
//! Contains the extraction logic without any I/O concerns: a draft's text
//! goes in, an [`IssueRecord`] comes out.

mod frontmatter;
mod issue;

pub use frontmatter::{parse_metadata, split_metadata, IssueMetadata, MetadataRecord};
pub use issue::{build_issue_record, fallback_title, split_list, IssueRecord};
