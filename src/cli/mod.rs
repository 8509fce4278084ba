//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Create `issues/` and `draft-issues.toml` |
//! | `generate` | Write the creation script and JSON export |
//! | `show` | Preview one draft |
//! | `guide` | Print manual creation steps from the export |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! draft-issues --verbose generate
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod generate_cmd;
mod guide;
mod init;
mod output;
mod show;

pub use app::{run, Cli, Commands};
pub use output::{error_chain, Output, OutputFormat};
