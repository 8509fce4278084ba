//! Guide command: manual creation steps from the JSON export

use std::path::PathBuf;

use anyhow::Result;

use super::output::Output;
use crate::render::{render_guide, GuideOptions};
use crate::storage::{read_json_export, Config};

pub fn run(output: &Output, json: Option<PathBuf>, repo: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let json_path = json.unwrap_or(config.json_path);
    output.verbose_ctx("guide", &format!("Reading export: {}", json_path.display()));

    let issues = read_json_export(&json_path)?;
    output.verbose_ctx("guide", &format!("Loaded {} issues", issues.len()));

    if output.is_json() {
        output.data(&issues);
        return Ok(());
    }

    let script_path = config.script_path.display().to_string();
    let options = GuideOptions {
        repository: repo.as_deref().or(config.repository.as_deref()),
        script_path: &script_path,
    };
    print!("{}", render_guide(&issues, &options));

    Ok(())
}
