use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ppgis report`.
///
/// Never fails on model errors; the report text carries the fallback message
/// instead.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.session.report().await;
    tracing::debug!(observations = report.observations, "report generated");
    output(&report, flags.format)
}
