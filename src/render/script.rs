//! Issue creation script
//!
//! Renders a bash script that calls the tracker CLI (`gh` by default) once
//! per issue. Every argument is emitted as an ANSI-C quoted string so quotes,
//! `$`, backticks and line breaks in drafts survive intact.

use crate::domain::IssueRecord;

/// Settings for script rendering
#[derive(Debug, Clone, Copy)]
pub struct ScriptOptions<'a> {
    /// Command used to reach the tracker, e.g. `gh`
    pub tracker_cli: &'a str,

    /// Target repository (`owner/name`); the CLI's default when absent
    pub repository: Option<&'a str>,
}

impl Default for ScriptOptions<'_> {
    fn default() -> Self {
        Self {
            tracker_cli: "gh",
            repository: None,
        }
    }
}

/// Renders the full script for a batch of issues
pub fn render_script(issues: &[IssueRecord], options: &ScriptOptions<'_>) -> String {
    let mut script = header(options.tracker_cli);

    for (index, issue) in issues.iter().enumerate() {
        script.push_str(&format!(
            "echo \"Creating issue {}:\" {}\n",
            index + 1,
            shell_quote(&issue.title)
        ));
        script.push_str(&create_command(issue, options));
        script.push_str("\n\n");
    }

    script.push_str(FOOTER);
    script
}

fn header(tracker_cli: &str) -> String {
    format!(
        "#!/bin/bash
# Script to create GitHub issues from drafts
# Run this script to create all issues at once

set -e

echo \"Creating GitHub issues from drafts...\"
echo \"Make sure you have {} CLI installed and authenticated\"
echo \"\"

",
        tracker_cli
    )
}

const FOOTER: &str = "echo \"All issues created successfully!\"\n";

/// Builds the `issue create` invocation for one issue
fn create_command(issue: &IssueRecord, options: &ScriptOptions<'_>) -> String {
    let mut args = vec![
        format!("{} issue create", options.tracker_cli),
        format!("--title {}", shell_quote(&issue.title)),
        format!("--body {}", shell_quote(&issue.body)),
    ];

    if let Some(labels) = join_entries(&issue.labels) {
        args.push(format!("--label {}", shell_quote(&labels)));
    }

    if let Some(assignees) = join_entries(&issue.assignees) {
        args.push(format!("--assignee {}", shell_quote(&assignees)));
    }

    if let Some(repo) = options.repository {
        args.push(format!("--repo {}", shell_quote(repo)));
    }

    args.join(" \\\n  ")
}

/// Comma-joins the non-empty entries, if there are any
fn join_entries(entries: &[String]) -> Option<String> {
    let kept: Vec<&str> = entries
        .iter()
        .map(String::as_str)
        .filter(|e| !e.is_empty())
        .collect();

    (!kept.is_empty()).then(|| kept.join(","))
}

/// Quotes a value as a bash `$'...'` string
pub fn shell_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 3);
    quoted.push_str("$'");

    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_ascii_control() => quoted.push_str(&format!("\\x{:02x}", c as u32)),
            c => quoted.push(c),
        }
    }

    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(title: &str, body: &str, labels: &[&str], assignees: &[&str]) -> IssueRecord {
        IssueRecord {
            title: title.to_string(),
            body: body.to_string(),
            labels: labels.iter().map(|s| s.to_string()).collect(),
            assignees: assignees.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn empty_batch_is_header_and_footer() {
        let script = render_script(&[], &ScriptOptions::default());

        assert!(script.starts_with("#!/bin/bash\n"));
        assert!(script.contains("set -e"));
        assert!(!script.contains("issue create"));
        assert!(script.ends_with("echo \"All issues created successfully!\"\n"));
        assert_eq!(script, format!("{}{}", header("gh"), FOOTER));
    }

    #[test]
    fn renders_create_command() {
        let issues = vec![issue("Test Issue", "Test body content", &["bug"], &["testuser"])];
        let script = render_script(&issues, &ScriptOptions::default());

        assert!(script.contains("echo \"Creating issue 1:\" $'Test Issue'\n"));
        assert!(script.contains(
            "gh issue create \\\n  --title $'Test Issue' \\\n  --body $'Test body content' \\\n  --label $'bug' \\\n  --assignee $'testuser'\n\n"
        ));
    }

    #[test]
    fn omits_empty_labels_and_assignees() {
        let issues = vec![issue("Plain", "Body", &[], &[])];
        let script = render_script(&issues, &ScriptOptions::default());

        assert!(!script.contains("--label"));
        assert!(!script.contains("--assignee"));
        assert!(script.contains("--body $'Body'\n\n"));
    }

    #[test]
    fn joins_multiple_labels_with_commas() {
        let issues = vec![issue("T", "B", &["bug", "ui"], &["alice", "bob"])];
        let script = render_script(&issues, &ScriptOptions::default());

        assert!(script.contains("--label $'bug,ui'"));
        assert!(script.contains("--assignee $'alice,bob'"));
    }

    #[test]
    fn numbers_issues_in_order() {
        let issues = vec![issue("First", "a", &[], &[]), issue("Second", "b", &[], &[])];
        let script = render_script(&issues, &ScriptOptions::default());

        let first = script.find("Creating issue 1:\" $'First'").unwrap();
        let second = script.find("Creating issue 2:\" $'Second'").unwrap();
        assert!(first < second);
    }

    #[test]
    fn skips_empty_entries_in_flags() {
        let issues = vec![issue("T", "B", &["bug", "", "ui"], &["", ""])];
        let script = render_script(&issues, &ScriptOptions::default());

        assert!(script.contains("--label $'bug,ui'"));
        assert!(!script.contains("--assignee"));
    }

    #[test]
    fn adds_repo_and_custom_cli() {
        let options = ScriptOptions {
            tracker_cli: "/usr/local/bin/gh",
            repository: Some("acme/widgets"),
        };
        let script = render_script(&[issue("T", "B", &[], &[])], &options);

        assert!(script.contains("/usr/local/bin/gh issue create"));
        assert!(script.contains("--repo $'acme/widgets'"));
        assert!(script.contains("Make sure you have /usr/local/bin/gh CLI installed"));
    }

    #[test]
    fn quotes_special_characters() {
        assert_eq!(shell_quote("say \"hi\""), r#"$'say \"hi\"'"#);
        assert_eq!(shell_quote("it's"), r"$'it\'s'");
        assert_eq!(shell_quote("a\nb"), r"$'a\nb'");
        assert_eq!(shell_quote("c:\\dir"), r"$'c:\\dir'");
        assert_eq!(shell_quote("tab\there"), r"$'tab\there'");
        assert_eq!(shell_quote("$HOME `id`"), "$'$HOME `id`'");
        assert_eq!(shell_quote("bell\u{7}"), r"$'bell\x07'");
    }

    #[test]
    fn multi_line_body_stays_on_one_script_line() {
        let issues = vec![issue("T", "Line one\n\nLine \"two\"", &[], &[])];
        let script = render_script(&issues, &ScriptOptions::default());

        assert!(script.contains(r#"--body $'Line one\n\nLine \"two\"'"#));
    }
}
