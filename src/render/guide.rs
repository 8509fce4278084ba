//! Manual issue creation guide
//!
//! A plain-text walkthrough for creating each issue through the GitHub web
//! interface, for when the generated script can't be used.

use crate::domain::IssueRecord;

const RULE_WIDTH: usize = 80;
const SECTION_WIDTH: usize = 40;

/// Settings for guide rendering
#[derive(Debug, Clone, Copy)]
pub struct GuideOptions<'a> {
    /// Repository (`owner/name`) used to link the new-issue page
    pub repository: Option<&'a str>,

    /// Script path mentioned as an alternative
    pub script_path: &'a str,
}

/// Renders the guide for all issues
pub fn render_guide(issues: &[IssueRecord], options: &GuideOptions<'_>) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut guide = String::new();

    guide.push_str(&format!("{rule}\nMANUAL ISSUE CREATION GUIDE\n{rule}\n\n"));

    for (index, issue) in issues.iter().enumerate() {
        guide.push_str(&render_issue(index + 1, issue, options));
        guide.push_str(&format!("\n{rule}\n\n"));
    }

    guide.push_str("SUMMARY:\n");
    guide.push_str(&format!(
        "Found {} draft issue(s) ready for creation.\n\n",
        issues.len()
    ));
    guide.push_str("Alternative methods:\n");
    guide.push_str(&format!(
        "- Use the GitHub CLI script: {}\n",
        options.script_path
    ));
    guide.push_str("- Use the manual steps above\n");

    guide
}

fn render_issue(number: usize, issue: &IssueRecord, options: &GuideOptions<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!("ISSUE {}:\n", number));
    out.push_str(&format!("{}\n", "-".repeat(SECTION_WIDTH)));
    out.push_str(&format!("Title: {}\n\n", issue.title));
    out.push_str(&format!("Body:\n{}\n\n", issue.body));

    if !issue.labels.is_empty() {
        out.push_str(&format!("Labels: {}\n", issue.labels.join(", ")));
    }
    if !issue.assignees.is_empty() {
        out.push_str(&format!("Assignees: {}\n", issue.assignees.join(", ")));
    }

    out.push_str("\nGitHub Web Interface Steps:\n");
    for (step, text) in steps(issue, options).iter().enumerate() {
        out.push_str(&format!("{}. {}\n", step + 1, text));
    }

    out
}

fn steps(issue: &IssueRecord, options: &GuideOptions<'_>) -> Vec<String> {
    let mut steps = vec![
        match options.repository {
            Some(repo) => format!("Go to: https://github.com/{}/issues/new", repo),
            None => "Open the repository's new issue page on GitHub".to_string(),
        },
        "Copy the title above into the title field".to_string(),
        "Copy the body above into the description field".to_string(),
    ];

    if !issue.labels.is_empty() {
        steps.push(format!("Add labels: {}", issue.labels.join(", ")));
    }
    if !issue.assignees.is_empty() {
        steps.push(format!("Assign to: {}", issue.assignees.join(", ")));
    }

    steps.push("Click \"Submit new issue\"".to_string());
    steps
}
