//! Device geolocation request settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_notice_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeolocationConfig {
    /// How long a position request may take before it fails with a timeout.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// How long a failure notice stays visible before clearing itself.
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            notice_secs: default_notice_secs(),
        }
    }
}

impl GeolocationConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub const fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_secs)
    }
}
