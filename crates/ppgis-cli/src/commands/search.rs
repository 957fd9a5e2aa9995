use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ppgis search`.
pub fn handle(args: &SearchArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut response = ctx.session.search(&args.query, args.select);
    if let Some(limit) = flags.limit {
        response.results.truncate(usize::try_from(limit)?);
    }
    tracing::debug!(query = %args.query, hits = response.total_results, "poi search");
    output(&response, flags.format)
}
