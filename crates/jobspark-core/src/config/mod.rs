//! Application configuration schemas.
//!
//! Configuration is merged by the `config` crate from TOML files and
//! environment variables. Each sub-module represents one section.

pub mod app;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::store::{PaginationConfig, StoreConfig};

use crate::error::AppError;

/// Prefix for environment overrides, e.g. `JOBSPARK__SERVER__PORT`.
const ENV_PREFIX: &str = "JOBSPARK";

/// The `JOBSPARK__SECTION__KEY` environment layer.
fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Job store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Pagination defaults for list endpoints.
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, later ones winning: `config/default.toml`,
    /// `config/{env}.toml`, `JOBSPARK__*` environment variables, and finally
    /// the bare `PORT` variable.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let port = std::env::var("PORT").ok();
        Self::load_with(env, env_source(), port.as_deref())
    }

    /// Same as [`AppConfig::load`] with the environment layer and the `PORT`
    /// value supplied by the caller.
    pub fn load_with(
        env: &str,
        environment: config::Environment,
        port: Option<&str>,
    ) -> Result<Self, AppError> {
        let mut app: AppConfig = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        if let Some(port) = port {
            app.server.port = port
                .trim()
                .parse()
                .map_err(|_| AppError::configuration(format!("Invalid PORT value '{port}'")))?;
        }

        app.validate()?;
        debug!(env, port = app.server.port, "Configuration loaded");
        Ok(app)
    }

    /// Reject settings that would make the server misbehave at runtime.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.pagination.default_limit == 0 {
            return Err(AppError::configuration(
                "pagination.default_limit must be at least 1",
            ));
        }
        if self.pagination.max_limit < self.pagination.default_limit {
            return Err(AppError::configuration(
                "pagination.max_limit must not be smaller than pagination.default_limit",
            ));
        }
        Ok(())
    }
}
