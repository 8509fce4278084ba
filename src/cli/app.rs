//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{generate_cmd, guide, init, show};

#[derive(Parser)]
#[command(name = "draft-issues")]
#[command(author, version, about = "Turn markdown issue drafts into GitHub issue commands")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a draft directory and default configuration
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Generate the issue creation script and JSON export from drafts
    Generate {
        /// Directory containing draft markdown files
        #[arg(long, short = 'i', env = "DRAFT_ISSUES_INPUT")]
        input: Option<PathBuf>,

        /// Path of the generated shell script
        #[arg(long)]
        script: Option<PathBuf>,

        /// Path of the generated JSON export
        #[arg(long)]
        json: Option<PathBuf>,

        /// Target repository (owner/name)
        #[arg(long, env = "DRAFT_ISSUES_REPO")]
        repo: Option<String>,
    },

    /// Preview the issue extracted from a single draft
    Show {
        /// Draft file
        file: PathBuf,
    },

    /// Print step-by-step manual creation instructions from the JSON export
    Guide {
        /// Path of the JSON export
        #[arg(long)]
        json: Option<PathBuf>,

        /// Target repository (owner/name)
        #[arg(long, env = "DRAFT_ISSUES_REPO")]
        repo: Option<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("draft-issues starting");

    match cli.command {
        Commands::Init { path } => init::run(&output, &path)?,

        Commands::Generate { input, script, json, repo } => {
            let overrides = generate_cmd::Overrides { input, script, json, repo };
            generate_cmd::run(&output, overrides)?
        }

        Commands::Show { file } => show::run(&output, &file)?,

        Commands::Guide { json, repo } => guide::run(&output, json, repo)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
