//! `cops <type> use` and `cops <type> unuse`

use anyhow::{Context as _, Result};

use cops::domain::entities::Lockfile;
use cops::domain::value_objects::{validate_asset_name, AssetType};
use cops::presentation::factory::{create_unuse_use_case, create_use_asset_use_case};
use cops::presentation::AssetAction;

use super::Context;

pub fn cmd_asset(ctx: &Context, asset_type: AssetType, action: AssetAction) -> Result<()> {
    match action {
        AssetAction::Use { name, reference } => cmd_use(ctx, asset_type, &name, &reference),
        AssetAction::Unuse { name } => cmd_unuse(ctx, asset_type, &name),
    }
}

fn cmd_use(ctx: &Context, asset_type: AssetType, name: &str, reference: &str) -> Result<()> {
    validate_asset_name(name)?;
    let key = Lockfile::make_key(asset_type, name);

    let use_case =
        create_use_asset_use_case(&ctx.project).context("setting up the GitHub client")?;

    if !ctx.json {
        println!("Adding {} from {}", key, reference);
    }

    let outcome = use_case
        .execute(&ctx.project.files(), asset_type, name, reference)
        .with_context(|| format!("failed to add {}", key))?;

    ctx.emit(&ctx.renderer().use_result(&outcome));
    Ok(())
}

fn cmd_unuse(ctx: &Context, asset_type: AssetType, name: &str) -> Result<()> {
    let removed = create_unuse_use_case(&ctx.project)
        .execute(&ctx.project.files(), asset_type, name)
        .with_context(|| format!("failed to remove {}", Lockfile::make_key(asset_type, name)))?;

    ctx.emit(&ctx.renderer().unuse_result(asset_type, name, &removed));
    Ok(())
}
