//! Init command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::storage::{Config, CONFIG_FILE, DEFAULT_CONFIG};

/// Creates `draft-issues.toml` and the draft directory, keeping existing files
pub fn run(output: &Output, root: &Path) -> Result<()> {
    output.verbose_ctx("init", &format!("Initializing at: {}", root.display()));

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory: {}", root.display()))?;

    let config_path = root.join(CONFIG_FILE);
    if config_path.exists() {
        output.verbose_ctx("init", "Config already exists, leaving it alone");
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
    }

    let config = Config::for_root(root)?;
    fs::create_dir_all(&config.input_dir).with_context(|| {
        format!(
            "Failed to create issues directory: {}",
            config.input_dir.display()
        )
    })?;
    output.verbose_ctx(
        "init",
        &format!("Draft directory: {}", config.input_dir.display()),
    );

    output.success(&format!(
        "Initialized draft-issues project at {}",
        root.display()
    ));
    Ok(())
}
