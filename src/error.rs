//! Error types for the tfctl client.

use std::time::Duration;
use thiserror::Error;

/// Kind of remote resource an address names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Organization,
    Workspace,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Organization => write!(f, "organization"),
            ResourceKind::Workspace => write!(f, "workspace"),
        }
    }
}

/// Failure reported by a resource-existence lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("not found")]
    NotFound,

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("timed out after {0:?}")]
    TimedOut(Duration),
}

/// Routing errors. Translation itself never produces one.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("{kind} not found: {name}: {source}")]
    ResourceNotFound {
        kind: ResourceKind,
        name: String,
        #[source]
        source: LookupError,
    },
}

/// Harness-level errors surfaced by the binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Dispatch error: {0}")]
    Dispatch(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
