use ppgis_core::enums::Basemap;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BasemapsArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ppgis basemaps`.
pub fn handle(
    args: &BasemapsArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(raw) = &args.select {
        let basemap: Basemap = parse_enum(raw, "basemap")?;
        ctx.session.set_basemap(basemap);
    }
    output(&ctx.session.basemaps(), flags.format)
}
