use ppgis_core::entities::PointOfInterest;
use ppgis_core::geo::GeoBounds;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PoisArgs;
use crate::commands::shared::viewport;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PoiListResponse {
    bounds: Option<GeoBounds>,
    total: usize,
    pois: Vec<PointOfInterest>,
}

/// Handle `ppgis pois`.
pub fn handle(args: &PoisArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    viewport::apply(&args.viewport, &mut ctx.session)?;

    let mut pois = ctx.session.visible_pois();
    let total = pois.len();
    if let Some(limit) = flags.limit {
        pois.truncate(usize::try_from(limit)?);
    }

    output(
        &PoiListResponse {
            bounds: ctx.session.viewport(),
            total,
            pois,
        },
        flags.format,
    )
}
