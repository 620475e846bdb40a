//! Layered configuration loading
//!
//! Sources, lowest priority first:
//! 1. Presets for the environment named by `ENVIRONMENT` / `ENV` / `RUST_ENV`
//! 2. An optional TOML file
//! 3. `LINKUP__*` environment variables, `__` separating nested keys
//!    (e.g. `LINKUP__OTP__LOGIN_EMAIL__TTL_SECONDS=45`)
//!
//! A `.env` file is loaded into the process environment first.

use std::path::Path;

use ::config::{Config, Environment, File, FileFormat};
use lu_shared::AppConfig;
use tracing::{debug, info};

use crate::InfrastructureError;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "LINKUP";

/// Load and validate the application configuration
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok();
    let defaults = AppConfig::from_env();
    info!(environment = %defaults.environment, "Loading configuration");

    let mut builder = Config::builder().add_source(Config::try_from(&defaults)?);
    if let Some(path) = path {
        debug!(path = %path.display(), "Adding configuration file");
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate().map_err(InfrastructureError::Config)?;
    Ok(config)
}
