use ppgis_core::entities::Observation;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::viewport;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ppgis list`: the feed, newest first, optionally narrowed to a
/// viewport and a classification.
pub async fn handle(
    args: &ListArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    viewport::apply(&args.viewport, &mut ctx.session)?;
    let limit = usize::try_from(flags.limit.unwrap_or(ctx.config.general.default_limit))?;

    let feed = ctx
        .session
        .visible_feed(Some(limit), |observation| keeps(args, observation))
        .await;
    output(&feed, flags.format)
}

fn keeps(args: &ListArgs, observation: &Observation) -> bool {
    if args.issues {
        observation.is_issue()
    } else if args.rated {
        !observation.is_issue()
    } else {
        true
    }
}
