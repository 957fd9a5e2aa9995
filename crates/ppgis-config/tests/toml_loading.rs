//! Integration tests for TOML configuration loading and env overrides.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use ppgis_config::PpgisConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_gemini_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "toml-key"
model = "gemini-2.0-flash"
endpoint = "http://localhost:8089/v1beta"
timeout_secs = 5
"#,
        )?;

        let config: PpgisConfig = Figment::from(Serialized::defaults(PpgisConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "toml-key");
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.endpoint, "http://localhost:8089/v1beta");
        assert_eq!(config.gemini.timeout_secs, 5);
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[geolocation]
notice_secs = 8
"#,
        )?;

        let config: PpgisConfig = Figment::from(Serialized::defaults(PpgisConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.geolocation.notice_secs, 8);
        assert_eq!(config.geolocation.timeout_ms, 10_000);
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ppgis")?;
        jail.create_file(
            ".ppgis/config.toml",
            r#"
[general]
author = "Planner"
"#,
        )?;

        let config: PpgisConfig = PpgisConfig::figment().extract()?;
        assert_eq!(config.general.author, "Planner");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "toml-key"
"#,
        )?;
        jail.set_env("PPGIS_GEMINI__API_KEY", "env-key");
        jail.set_env("PPGIS_GEOLOCATION__TIMEOUT_MS", "2500");

        let config: PpgisConfig = Figment::from(Serialized::defaults(PpgisConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("PPGIS_").split("__"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "env-key");
        assert_eq!(config.geolocation.timeout_ms, 2500);
        Ok(())
    });
}

#[test]
fn gemini_api_key_shorthand_is_honoured() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "short-key");
        let config: PpgisConfig = PpgisConfig::figment().extract()?;
        assert_eq!(config.gemini.api_key, "short-key");
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_shorthand() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "short-key");
        jail.set_env("PPGIS_GEMINI__API_KEY", "prefixed-key");
        let config: PpgisConfig = PpgisConfig::figment().extract()?;
        assert_eq!(config.gemini.api_key, "prefixed-key");
        Ok(())
    });
}

#[test]
fn extra_toml_file_layers_over_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("tempfile should be created");
    std::io::Write::write_all(
        &mut file,
        b"[general]\nauthor = \"Surveyor\"\ndefault_limit = 5\n",
    )
    .expect("tempfile should be writable");

    let config: PpgisConfig = Figment::from(Serialized::defaults(PpgisConfig::default()))
        .merge(Toml::file(file.path()))
        .extract()
        .expect("config should extract");

    assert_eq!(config.general.author, "Surveyor");
    assert_eq!(config.general.default_limit, 5);
    assert_eq!(config.geolocation.notice_secs, 5);
}
