use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ppgis stats`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.session.stats().await, flags.format)
}
