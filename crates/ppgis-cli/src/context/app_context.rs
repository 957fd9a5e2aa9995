use anyhow::Context;
use ppgis_annotate::{Annotator, GeminiClient};
use ppgis_config::PpgisConfig;
use ppgis_session::{Session, SessionSettings};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub session: Session<GeminiClient>,
    pub config: PpgisConfig,
}

impl AppContext {
    /// Build the Gemini client and a session seeded with the reference data.
    pub fn init(config: PpgisConfig) -> anyhow::Result<Self> {
        let client =
            GeminiClient::new(config.gemini.clone()).context("failed to build gemini client")?;
        let session = Session::new(Annotator::new(client), SessionSettings::from(&config));
        Ok(Self { session, config })
    }
}
