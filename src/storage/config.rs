//! Configuration handling for draft-issues
//!
//! Configuration is read from `draft-issues.toml` in the project root and
//! from the global `config.toml` in the user's config directory. Project
//! values win over global ones; unset fields fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the project configuration file
pub const CONFIG_FILE: &str = "draft-issues.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Settings as they appear in a config file, every field optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigFile {
    /// Directory holding the `*.md` drafts
    pub input_dir: Option<PathBuf>,

    /// Where to write the creation script
    pub script_path: Option<PathBuf>,

    /// Where to write the JSON export
    pub json_path: Option<PathBuf>,

    /// Tracker CLI command
    pub tracker_cli: Option<String>,

    /// Target repository as `owner/name`
    pub repository: Option<String>,
}

impl ConfigFile {
    /// Fills unset fields from a lower-priority layer
    fn or(self, fallback: ConfigFile) -> ConfigFile {
        ConfigFile {
            input_dir: self.input_dir.or(fallback.input_dir),
            script_path: self.script_path.or(fallback.script_path),
            json_path: self.json_path.or(fallback.json_path),
            tracker_cli: self.tracker_cli.or(fallback.tracker_cli),
            repository: self.repository.or(fallback.repository),
        }
    }

    fn read(path: &Path) -> Result<Option<ConfigFile>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let parsed = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Some(parsed))
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory relative paths are resolved against
    pub root: PathBuf,
    pub input_dir: PathBuf,
    pub script_path: PathBuf,
    pub json_path: PathBuf,
    pub tracker_cli: String,
    pub repository: Option<String>,
}

impl Config {
    /// Loads configuration for the current working directory
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        let root = Self::find_project_root(&cwd).unwrap_or(cwd);
        Self::for_root(&root)
    }

    /// Loads configuration for a specific project root
    pub fn for_root(root: &Path) -> Result<Self> {
        let project = ConfigFile::read(&root.join(CONFIG_FILE))?.unwrap_or_default();
        let global = match Self::global_config_path() {
            Some(path) => ConfigFile::read(&path)?.unwrap_or_default(),
            None => ConfigFile::default(),
        };

        Ok(Self::resolve(root, project.or(global)))
    }

    /// Applies defaults and resolves relative paths against `root`
    pub fn resolve(root: &Path, file: ConfigFile) -> Self {
        let path = |p: Option<PathBuf>, default: &str| root.join(p.unwrap_or_else(|| default.into()));

        Self {
            root: root.to_path_buf(),
            input_dir: path(file.input_dir, "issues"),
            script_path: path(file.script_path, "create-github-issues.sh"),
            json_path: path(file.json_path, "draft-issues.json"),
            tracker_cli: file.tracker_cli.unwrap_or_else(|| "gh".to_string()),
            repository: file.repository.filter(|r| !r.trim().is_empty()),
        }
    }

    /// Returns the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "draft-issues", "draft-issues")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Finds the nearest ancestor holding a `draft-issues.toml`
    pub fn find_project_root(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(CONFIG_FILE).is_file())
            .map(Path::to_path_buf)
    }
}

/// Contents written by `draft-issues init`
pub const DEFAULT_CONFIG: &str = r#"# draft-issues configuration
# Relative paths are resolved against this file's directory.

# Directory containing draft issue markdown files
input_dir = "issues"

# Generated issue creation script
script_path = "create-github-issues.sh"

# Generated JSON export
json_path = "draft-issues.json"

# Tracker CLI used by the generated script
tracker_cli = "gh"

# Target repository (owner/name); leave unset to use the CLI's default
# repository = "owner/name"
"#;
