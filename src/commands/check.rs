//! `cops check`

use anyhow::{bail, Context as _, Result};

use cops::presentation::factory::create_check_use_case;

use super::Context;

/// Report drift. Only `--strict` turns issues into a failing exit code.
pub fn cmd_check(ctx: &Context, strict: bool) -> Result<()> {
    let report = create_check_use_case(&ctx.project)
        .execute(&ctx.project.files())
        .context("check failed")?;

    ctx.emit(&ctx.renderer().check_report(&report, strict));

    if strict && !report.is_clean() {
        bail!("{} assets out of sync", report.issues);
    }
    Ok(())
}
