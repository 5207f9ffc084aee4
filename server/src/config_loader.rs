use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use palette_snap_application::error::{AppError, AppResult};
use palette_snap_application::infrastructure_config::Config;
use std::fs;
use std::path::Path;
use tracing::info;

const ENV_PREFIX: &str = "PALETTE_SNAP_";

pub fn load_config() -> AppResult<Config> {
    generate_env_template_if_missing()?;

    let config: Config = build_figment()
        .extract()
        .map_err(|e| AppError::ConfigError {
            message: format!("Failed to load configuration: {e}"),
        })?;

    config.validate()?;
    Ok(config)
}

/// Defaults, then `config.toml`, then `config.json`, then `PALETTE_SNAP_*`
/// environment variables with `__` separating nested keys.
fn build_figment() -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if Path::new("config.toml").exists() {
        figment = figment.merge(Toml::file("config.toml"));
    }

    if Path::new("config.json").exists() {
        figment = figment.merge(Json::file("config.json"));
    }

    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

fn generate_env_template_if_missing() -> AppResult<()> {
    let env_file = ".env";
    let template_file = ".env.example";

    if Path::new(env_file).exists() {
        return Ok(());
    }

    if !Path::new(template_file).exists() {
        return Ok(());
    }

    fs::copy(template_file, env_file).map_err(|e| AppError::ConfigError {
        message: format!("Failed to generate .env file from template: {e}"),
    })?;

    info!("Generated .env from template");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use palette_snap_application::infrastructure_config::{LogFormat, StoreBackend};

    fn load_in_jail() -> Result<Config, figment::Error> {
        load_config().map_err(|e| figment::Error::from(e.to_string()))
    }

    #[test]
    fn defaults_apply_without_any_source() {
        Jail::expect_with(|_jail| {
            let config = load_in_jail()?;
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.image.max_dimension, 100);
            assert_eq!(config.library.backend, StoreBackend::JsonFile);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [server]
                port = 8080

                [logging]
                format = "json"
                "#,
            )?;
            jail.set_env("PALETTE_SNAP_SERVER__PORT", "9090");
            jail.set_env("PALETTE_SNAP_LIBRARY__BACKEND", "memory");

            let config = load_in_jail()?;
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.library.backend, StoreBackend::Memory);
            assert!(matches!(config.logging.format, LogFormat::Json));
            Ok(())
        });
    }

    #[test]
    fn invalid_values_fail_validation() {
        Jail::expect_with(|jail| {
            jail.set_env("PALETTE_SNAP_IMAGE__MAX_DIMENSION", "0");
            assert!(load_in_jail().is_err());
            Ok(())
        });
    }

    #[test]
    fn env_template_is_copied_when_env_is_missing() {
        Jail::expect_with(|jail| {
            jail.create_file(".env.example", "PALETTE_SNAP_SERVER__PORT=4000\n")?;
            load_in_jail()?;
            assert!(Path::new(".env").exists());
            Ok(())
        });
    }
}
