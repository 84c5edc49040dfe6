//! Command line definition
//!
//! Parsed with clap derive. The binary maps each command onto a use case in
//! `commands/`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cops - keep Copilot instructions, agents, prompts and skills in sync with GitHub
#[derive(Parser, Debug)]
#[command(name = "cops")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Run as if started in <DIR>
    #[arg(short = 'C', long = "directory", value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Manage instruction files (.github/instructions/<name>.instructions.md)
    Instructions {
        #[command(subcommand)]
        action: AssetAction,
    },

    /// Manage agent files (.github/agents/<name>.agent.md)
    Agents {
        #[command(subcommand)]
        action: AssetAction,
    },

    /// Manage prompt files (.github/prompts/<name>.prompt.md)
    Prompts {
        #[command(subcommand)]
        action: AssetAction,
    },

    /// Manage skill directories (.github/skills/<name>/)
    Skills {
        #[command(subcommand)]
        action: AssetAction,
    },

    /// Download every asset declared in the manifest and refresh the lock file
    Sync,

    /// Report assets that are missing, unlocked or out of date
    Check {
        /// Exit non-zero when any asset is not in sync
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AssetAction {
    /// Add an entry to the manifest and download it
    ///
    /// Example: cops agents use helper my-org/repo/agents/helper.md@v1.0
    Use {
        /// Local name of the asset
        name: String,

        /// Source reference, org/repo/path@ref (ref may be `latest`)
        #[arg(value_name = "REF")]
        reference: String,
    },

    /// Remove an entry from the manifest and delete its local files
    Unuse {
        /// Local name of the asset
        name: String,
    },
}
