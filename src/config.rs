//! Configuration System
//!
//! Layered configuration for the client: built-in defaults, the global file,
//! the working-directory file, then `TFCTL__*` environment variables. The
//! routing section carries the keyword table and extra catalog commands so
//! that routing and help are driven by the same data.

use crate::catalog::Catalog;
use crate::logging::LoggingConfig;
use crate::router::KeywordTable;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use merge::merge_policy::{DEFAULT_API_ADDRESS, DEFAULT_VALIDATE_TIMEOUT_MS};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TfctlConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API settings, used only by resource validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default)]
    pub token: Option<String>,
}

fn default_address() -> String {
    DEFAULT_API_ADDRESS.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            token: None,
        }
    }
}

/// What to do with an addressed organization or workspace before dispatch.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ValidateMode {
    /// Skip validation
    #[default]
    Off,
    /// Log a warning and dispatch anyway
    Warn,
    /// Abort before dispatch
    Strict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    #[serde(default)]
    pub validate: ValidateMode,

    #[serde(default = "default_validate_timeout_ms")]
    pub validate_timeout_ms: u64,

    /// Additional canonical command paths registered alongside the built-in catalog.
    #[serde(default)]
    pub extra_commands: Vec<String>,

    #[serde(default)]
    pub keywords: KeywordTable,
}

fn default_validate_timeout_ms() -> u64 {
    DEFAULT_VALIDATE_TIMEOUT_MS
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            validate: ValidateMode::default(),
            validate_timeout_ms: default_validate_timeout_ms(),
            extra_commands: Vec::new(),
            keywords: KeywordTable::default(),
        }
    }
}

impl RoutingConfig {
    pub fn validate_timeout(&self) -> Duration {
        Duration::from_millis(self.validate_timeout_ms)
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::with_extra_commands(&self.extra_commands)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Api(String),
    Routing(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Api(msg) => write!(f, "api: {}", msg),
            ValidationError::Routing(msg) => write!(f, "routing: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TfctlConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let address = self.api.address.trim();
        if address.is_empty() {
            errors.push(ValidationError::Api("address cannot be empty".to_string()));
        } else if !address.starts_with("http://") && !address.starts_with("https://") {
            errors.push(ValidationError::Api(format!(
                "address must be an http(s) URL, got '{}'",
                address
            )));
        }

        if self.routing.validate_timeout_ms == 0 {
            errors.push(ValidationError::Routing(
                "validate_timeout_ms must be greater than zero".to_string(),
            ));
        }

        let keywords = &self.routing.keywords;
        if keywords.help_markers.is_empty() {
            errors.push(ValidationError::Routing(
                "keywords.help_markers cannot be empty".to_string(),
            ));
        }
        if let Some(marker) = keywords.help_markers.iter().find(|m| !m.starts_with('-')) {
            errors.push(ValidationError::Routing(format!(
                "help marker '{}' must start with '-'",
                marker
            )));
        }

        // Every rewrite must land on a registered command root.
        let registry = self.routing.catalog().registry();
        let mut missing: Vec<&str> = keywords
            .nouns()
            .filter(|noun| !registry.has_root(noun))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        for noun in missing {
            errors.push(ValidationError::Routing(format!(
                "keyword noun '{}' is not a registered command",
                noun
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
