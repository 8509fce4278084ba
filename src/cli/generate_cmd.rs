//! Generate command: drafts in, script and JSON export out

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::output::{error_chain, Output};
use crate::generate::{generate, GenerateReport, GenerateRequest};
use crate::storage::Config;

/// Command-line values that take precedence over configuration
#[derive(Debug, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub repo: Option<String>,
}

pub fn run(output: &Output, overrides: Overrides) -> Result<()> {
    let config = Config::load()?;
    output.verbose_ctx("generate", &format!("Project root: {}", config.root.display()));

    let request = GenerateRequest {
        input_dir: overrides.input.unwrap_or(config.input_dir),
        script_path: overrides.script.unwrap_or(config.script_path),
        json_path: overrides.json.unwrap_or(config.json_path),
        tracker_cli: config.tracker_cli,
        repository: overrides.repo.or(config.repository),
    };
    output.verbose_ctx(
        "generate",
        &format!("Reading drafts from: {}", request.input_dir.display()),
    );

    let report = generate(&request).context("Draft generation failed")?;

    output.verbose_ctx(
        "generate",
        &format!(
            "Processed {} of {} drafts",
            report.processed.len(),
            report.found
        ),
    );

    if output.is_json() {
        print_json(output, &report);
    } else {
        print_text(output, &report);
    }

    Ok(())
}

fn print_json(output: &Output, report: &GenerateReport) {
    let failed: Vec<_> = report
        .failed
        .iter()
        .map(|f| {
            serde_json::json!({
                "file": f.file_name,
                "error": error_chain(&f.error),
            })
        })
        .collect();

    let issues: Vec<_> = report.issues().collect();

    output.data(&serde_json::json!({
        "found": report.found,
        "issues": issues,
        "failed": failed,
        "script": report.script_path.display().to_string(),
        "json": report.json_path.display().to_string(),
    }));
}

fn print_text(output: &Output, report: &GenerateReport) {
    if report.found == 0 {
        println!("No markdown files found in issues directory");
    } else {
        println!("Found {} draft issue(s):", report.found);

        for draft in &report.processed {
            let issue = &draft.issue;
            println!("- {}", draft.file_name);
            println!("  Title: {}", issue.title);
            // Length in UTF-16 code units
            println!("  Body length: {} characters", issue.body.encode_utf16().count());
            if !issue.labels.is_empty() {
                println!("  Labels: {}", issue.labels.join(", "));
            }
            if !issue.assignees.is_empty() {
                println!("  Assignees: {}", issue.assignees.join(", "));
            }
            println!();
        }
    }

    for failure in &report.failed {
        output.error(&format!(
            "Error processing {}: {}",
            failure.file_name,
            error_chain(&failure.error)
        ));
    }

    println!(
        "Generated issue creation script: {}",
        report.script_path.display()
    );
    println!();
    println!("To create the GitHub issues, run:");
    println!("  {}", report.script_path.display());
    println!();
    println!("Or create them manually with: draft-issues guide");
    println!();
    println!("Draft issues also saved as JSON: {}", report.json_path.display());
}
