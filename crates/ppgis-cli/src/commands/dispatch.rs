use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Pois(args) => commands::pois::handle(&args, ctx, flags),
        Commands::Search(args) => commands::search::handle(&args, ctx, flags),
        Commands::List(args) => commands::list::handle(&args, ctx, flags).await,
        Commands::Submit(args) => commands::submit::handle(&args, ctx, flags).await,
        Commands::Stats => commands::stats::handle(ctx, flags).await,
        Commands::Report => commands::report::handle(ctx, flags).await,
        Commands::Locate(args) => commands::locate::handle(&args, ctx, flags).await,
        Commands::Basemaps(args) => commands::basemaps::handle(&args, ctx, flags),
    }
}
