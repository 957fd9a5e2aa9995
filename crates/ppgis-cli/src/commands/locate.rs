use ppgis_core::geo::Coordinates;
use ppgis_session::GeolocationError;
use ppgis_session::locate::{FixedLocator, Unsupported};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LocateArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ppgis locate`.
///
/// A terminal has no positioning hardware, so the device answer is simulated
/// from the flags. Without any, the host is treated as unsupported.
pub async fn handle(
    args: &LocateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = match (args.lat, args.lng, args.error_code) {
        (Some(lat), Some(lng), _) => {
            let coords = Coordinates::new(lat, lng);
            coords.validate()?;
            ctx.session.locate(&FixedLocator(Ok(coords))).await
        }
        (_, _, Some(code)) => {
            let error = GeolocationError::from_code(code);
            ctx.session.locate(&FixedLocator(Err(error))).await
        }
        _ => ctx.session.locate(&Unsupported).await,
    };
    output(&response, flags.format)
}
