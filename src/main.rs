//! Cops CLI
//!
//! Usage: cops [--json] [-v...] [-C <dir>] <COMMAND>
//!
//! Commands:
//!   instructions|agents|prompts|skills use <name> <ref>
//!   instructions|agents|prompts|skills unuse <name>
//!   sync    Download every declared asset and refresh the lock file
//!   check   Report drift between manifest, lock and disk

mod commands;

use anyhow::Result;
use clap::Parser;

use cops::domain::value_objects::AssetType;
use cops::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cops::logging::init(cli.verbose) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let ctx = commands::Context::new(cli.directory.as_deref(), cli.json)?;

    match cli.command {
        Commands::Instructions { action } => {
            commands::cmd_asset(&ctx, AssetType::Instructions, action)
        }
        Commands::Agents { action } => commands::cmd_asset(&ctx, AssetType::Agents, action),
        Commands::Prompts { action } => commands::cmd_asset(&ctx, AssetType::Prompts, action),
        Commands::Skills { action } => commands::cmd_asset(&ctx, AssetType::Skills, action),
        Commands::Sync => commands::cmd_sync(&ctx),
        Commands::Check { strict } => commands::cmd_check(&ctx, strict),
    }
}
