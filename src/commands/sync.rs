//! `cops sync`

use anyhow::{bail, Context as _, Result};

use cops::infrastructure::{ConsoleEventSink, JsonEventSink};
use cops::presentation::factory::create_sync_use_case;

use super::Context;

pub fn cmd_sync(ctx: &Context) -> Result<()> {
    let files = ctx.project.files();
    let use_case = create_sync_use_case(&ctx.project).context("setting up the GitHub client")?;

    let report = if ctx.json {
        use_case.execute_with_events(&files, JsonEventSink::stdout())
    } else {
        use_case.execute_with_events(&files, ConsoleEventSink::stdout(ctx.unicode))
    }
    .context("sync failed")?;

    ctx.emit(&ctx.renderer().sync_summary(&report));

    if !report.is_success() {
        bail!(
            "{} of {} assets failed to sync",
            report.failures.len(),
            report.total()
        );
    }
    Ok(())
}
