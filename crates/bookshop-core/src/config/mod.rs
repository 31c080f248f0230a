//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `<dir>/default.toml`, an optional `<dir>/<env>.toml` overlay, and
//! `BOOKSHOP__`-prefixed environment variables.

pub mod app;
pub mod database;
pub mod filtering;
pub mod logging;
pub mod pagination;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::database::DatabaseConfig;
pub use self::filtering::FilteringConfig;
pub use self::logging::LoggingConfig;
pub use self::pagination::PaginationConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Pagination bounds for list endpoints.
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Filter combination settings.
    #[serde(default)]
    pub filtering: FilteringConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `dir` for the environment `env`.
    ///
    /// Both files are optional; `database.url` must come from one of the
    /// sources (for example `BOOKSHOP__DATABASE__URL`).
    pub fn load(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BOOKSHOP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::from_config(config)
    }

    /// Deserialize from an already-built [`config::Config`].
    pub fn from_config(config: config::Config) -> Result<Self, AppError> {
        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
