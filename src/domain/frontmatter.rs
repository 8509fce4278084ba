//! Frontmatter handling for issue drafts
//!
//! A draft may open with a metadata block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Fix login bug
//! labels: bug, auth
//! ---
//! Body text...
//! ```
//!
//! The block is plain `key: value` lines, not YAML. Decoding never fails:
//! lines that don't look like a field are skipped, and a missing or unclosed
//! block simply means the whole document is body text.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Opening `---` at the very start, lazily captured metadata up to the first
/// closing `---` line, then everything else.
static FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n(.*)").expect("frontmatter pattern is valid")
});

/// Splits a draft into its metadata text and body text.
///
/// Returns an empty metadata slice and the untouched document when there is
/// no well-formed block at the start.
pub fn split_metadata(document: &str) -> (&str, &str) {
    match FRONTMATTER.captures(document) {
        Some(caps) => {
            let metadata = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            (metadata, body)
        }
        None => ("", document),
    }
}

/// Decodes metadata text into a field mapping.
pub fn parse_metadata(metadata: &str) -> MetadataRecord {
    let mut record = MetadataRecord::new();

    for line in metadata.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        record.insert(key, value.trim());
    }

    record
}

/// Raw field mapping decoded from a metadata block
///
/// Keys and values are trimmed. A repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord(BTreeMap<String, String>);

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Sets a field value, replacing any earlier one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Renders the record back as `key: value` lines
impl fmt::Display for MetadataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

/// The fields of a metadata block that issue building understands
///
/// Anything else in the block is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueMetadata {
    pub title: Option<String>,

    /// Comma-separated label list, unsplit
    pub labels: Option<String>,

    /// Comma-separated assignee list, unsplit
    pub assignees: Option<String>,
}

impl From<&MetadataRecord> for IssueMetadata {
    fn from(record: &MetadataRecord) -> Self {
        let field = |key: &str| record.get(key).map(str::to_string);
        Self {
            title: field("title"),
            labels: field("labels"),
            assignees: field("assignees"),
        }
    }
}
