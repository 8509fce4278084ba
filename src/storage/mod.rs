//! # Storage Layer
//!
//! File access for drafts, generated artifacts and configuration.
//!
//! ## Files
//!
//! | Data | Format | Default location |
//! |------|--------|------------------|
//! | Drafts | Markdown + `key: value` frontmatter | `issues/*.md` |
//! | Creation script | bash | `create-github-issues.sh` |
//! | Export | Pretty JSON array | `draft-issues.json` |
//! | Config | TOML | `draft-issues.toml` |
//!
//! Artifacts are overwritten on every run. Both are staged as temp files and
//! only then renamed into place.
//!
//! ## Key Types
//!
//! - [`DraftStore`] - Lists and reads draft files
//! - [`DraftError`] - Everything that can go wrong touching files
//! - [`Config`] - Project and global configuration

mod config;
mod drafts;
mod export;

pub use config::{Config, ConfigError, ConfigFile, CONFIG_FILE, DEFAULT_CONFIG};
pub use drafts::{base_name, read_document, read_draft, DraftError, DraftStore};
pub use export::{read_json_export, write_artifacts};
