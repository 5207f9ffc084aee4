use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{AppError, AppResult};

const MAX_IMAGE_DIMENSION: u32 = 4096;
const MAX_PALETTE_NAME_LEN: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub image: ImageConfig,
    pub library: LibraryConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    pub max_dimension: u32,
    pub decode_timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    pub backend: StoreBackend,
    pub file_path: String,
    pub default_palette_name: String,
    pub allow_sample_seed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreBackend {
    #[serde(rename = "memory")]
    Memory,
    #[serde(rename = "json_file")]
    JsonFile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_origin: None,
                body_limit_bytes: 10 * 1024 * 1024,
            },
            image: ImageConfig {
                max_dimension: 100,
                decode_timeout_ms: 5000,
            },
            library: LibraryConfig {
                backend: StoreBackend::JsonFile,
                file_path: "palette-storage.json".to_string(),
                default_palette_name: "Name".to_string(),
                allow_sample_seed: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::ConfigError {
                message: "server port must be greater than 0".to_string(),
            });
        }

        if self.server.body_limit_bytes == 0 {
            return Err(AppError::ConfigError {
                message: "body_limit_bytes must be greater than 0".to_string(),
            });
        }

        if self.image.max_dimension == 0 || self.image.max_dimension > MAX_IMAGE_DIMENSION {
            return Err(AppError::ConfigError {
                message: format!("max_dimension must be between 1 and {MAX_IMAGE_DIMENSION}"),
            });
        }

        if self.image.decode_timeout_ms == 0 {
            return Err(AppError::ConfigError {
                message: "decode_timeout_ms must be greater than 0".to_string(),
            });
        }

        if self.library.backend == StoreBackend::JsonFile
            && self.library.file_path.trim().is_empty()
        {
            return Err(AppError::ConfigError {
                message: "library file_path cannot be empty with the json_file backend"
                    .to_string(),
            });
        }

        let name_len = self.library.default_palette_name.trim().chars().count();
        if name_len == 0 || name_len > MAX_PALETTE_NAME_LEN {
            return Err(AppError::ConfigError {
                message: format!(
                    "default_palette_name must be between 1 and {MAX_PALETTE_NAME_LEN} characters"
                ),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging level cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn decode_timeout(&self) -> Duration {
        Duration::from_millis(self.image.decode_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.image.max_dimension, 100);
        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.decode_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn rejects_zero_dimension_and_port() {
        let mut config = Config::default();
        config.image.max_dimension = 0;
        assert!(matches!(config.validate(), Err(AppError::ConfigError { .. })));

        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(AppError::ConfigError { .. })));
    }

    #[test]
    fn file_path_only_required_for_file_backend() {
        let mut config = Config::default();
        config.library.file_path = "  ".to_string();
        assert!(config.validate().is_err());

        config.library.backend = StoreBackend::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn backend_names_match_config_files() {
        let backend: StoreBackend = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(backend, StoreBackend::Memory);
        assert_eq!(
            serde_json::to_string(&StoreBackend::JsonFile).unwrap(),
            "\"json_file\""
        );
    }
}
