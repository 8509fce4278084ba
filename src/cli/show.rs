//! Show command: preview one draft without writing anything

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::domain::{build_issue_record, parse_metadata, split_metadata};
use crate::storage::{base_name, read_document};

pub fn run(output: &Output, file: &Path) -> Result<()> {
    let document = read_document(file)?;

    if output.is_verbose() {
        let (metadata, _) = split_metadata(&document);
        let record = parse_metadata(metadata);
        output.verbose_ctx("show", &format!("{} metadata field(s)", record.len()));
        for line in record.to_string().lines() {
            output.verbose_ctx("show", line);
        }
    }

    let issue = build_issue_record(&document, &base_name(file));

    if output.is_json() {
        output.data(&issue);
        return Ok(());
    }

    println!("Title: {}", issue.title);
    if !issue.labels.is_empty() {
        println!("Labels: {}", issue.labels.join(", "));
    }
    if !issue.assignees.is_empty() {
        println!("Assignees: {}", issue.assignees.join(", "));
    }
    println!();
    println!("{}", issue.body);

    Ok(())
}
