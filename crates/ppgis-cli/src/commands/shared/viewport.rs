use ppgis_annotate::GenerativeBackend;
use ppgis_core::geo::GeoBounds;
use ppgis_session::Session;

use crate::cli::root_commands::ViewportArgs;

/// Apply `--bounds` to the session, if given.
pub fn apply<B: GenerativeBackend + 'static>(
    args: &ViewportArgs,
    session: &mut Session<B>,
) -> anyhow::Result<()> {
    if let Some(raw) = &args.bounds {
        let bounds: GeoBounds = raw
            .parse()
            .map_err(|error| anyhow::anyhow!("invalid --bounds: {error}"))?;
        session.set_viewport(bounds);
    }
    Ok(())
}
