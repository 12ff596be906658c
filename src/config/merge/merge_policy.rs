//! Merge rules: defaults applied before any file or environment source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

pub const DEFAULT_API_ADDRESS: &str = "https://app.terraform.io";
pub const DEFAULT_VALIDATE_TIMEOUT_MS: u64 = 5_000;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("api.address", DEFAULT_API_ADDRESS)?
        .set_default("routing.validate", "off")?
        .set_default("routing.validate_timeout_ms", DEFAULT_VALIDATE_TIMEOUT_MS as i64)
}
