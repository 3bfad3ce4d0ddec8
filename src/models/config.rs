//! Configuration model loaded from external sources.

use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

fn default_busy_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Settings required to open the customer store.
pub struct DirectoryConfig {
    pub database_url: String,
    /// How long a connection waits on a locked database.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

impl DirectoryConfig {
    /// Loads `config/default.yaml`, the optional `config/{APP_ENV}.yaml`
    /// profile and `APP_*` environment variables, in that order.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // Select config profile (defaults to `local`).
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Self::from_sources(
            Config::builder()
                .add_source(File::with_name("config/default"))
                .add_source(File::with_name(&format!("config/{app_env}")).required(false))
                .add_source(Environment::with_prefix("APP")),
        )
    }

    fn from_sources(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let settings = builder.build().map_err(|err| {
            log::error!("Error loading settings: {err}");
            err
        })?;

        settings.try_deserialize::<Self>().map_err(|err| {
            log::error!("Error loading directory config: {err}");
            err
        })
    }
}
