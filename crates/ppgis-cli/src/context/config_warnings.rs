use ppgis_config::PpgisConfig;

/// Emit warnings for configuration that silently fell back to defaults.
pub fn warn_unconfigured(config: &PpgisConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PpgisConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.gemini.is_configured() {
        if has_flat_section_key(&env_keys, "GEMINI") {
            warnings.push(
                "Gemini config appears default while PPGIS_GEMINI_* env vars exist. Use double underscores (example: PPGIS_GEMINI__API_KEY)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "Gemini API key not set; annotations and reports will use fallback text. Set GEMINI_API_KEY or PPGIS_GEMINI__API_KEY."
                    .to_string(),
            );
        }
    }

    if has_flat_section_key(&env_keys, "GEOLOCATION") {
        warnings.push(
            "PPGIS_GEOLOCATION_* env vars are ignored. Use double underscores (example: PPGIS_GEOLOCATION__TIMEOUT_MS)."
                .to_string(),
        );
    }

    warnings
}

/// Keys like `PPGIS_GEMINI_API_KEY` that figment will not nest.
fn has_flat_section_key(keys: &[String], section: &str) -> bool {
    let flat = format!("PPGIS_{section}_");
    let nested = format!("PPGIS_{section}__");
    keys.iter()
        .any(|key| key.starts_with(&flat) && !key.starts_with(&nested))
}
