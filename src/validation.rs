//! Resource-existence validation.
//!
//! An injected capability the router exposes to callers that want to check an
//! addressed organization or workspace before dispatch. Translation never
//! calls it.

use crate::error::LookupError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::collections::HashSet;
use std::time::Duration;

#[async_trait]
pub trait ResourceValidator: Send + Sync {
    async fn organization_exists(&self, name: &str) -> Result<(), LookupError>;

    async fn workspace_exists(&self, org: &str, name: &str) -> Result<(), LookupError>;
}

/// Validator that accepts everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopValidator;

#[async_trait]
impl ResourceValidator for NoopValidator {
    async fn organization_exists(&self, _name: &str) -> Result<(), LookupError> {
        Ok(())
    }

    async fn workspace_exists(&self, _org: &str, _name: &str) -> Result<(), LookupError> {
        Ok(())
    }
}

/// In-memory validator over a fixed set of organizations and workspaces.
#[derive(Debug, Default, Clone)]
pub struct StaticValidator {
    organizations: HashSet<String>,
    workspaces: HashSet<(String, String)>,
}

impl StaticValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organization(mut self, name: &str) -> Self {
        self.organizations.insert(name.to_string());
        self
    }

    /// Registers the workspace and its organization.
    pub fn with_workspace(mut self, org: &str, name: &str) -> Self {
        self.organizations.insert(org.to_string());
        self.workspaces.insert((org.to_string(), name.to_string()));
        self
    }
}

#[async_trait]
impl ResourceValidator for StaticValidator {
    async fn organization_exists(&self, name: &str) -> Result<(), LookupError> {
        if self.organizations.contains(name) {
            Ok(())
        } else {
            Err(LookupError::NotFound)
        }
    }

    async fn workspace_exists(&self, org: &str, name: &str) -> Result<(), LookupError> {
        if self
            .workspaces
            .contains(&(org.to_string(), name.to_string()))
        {
            Ok(())
        } else {
            Err(LookupError::NotFound)
        }
    }
}

const VALIDATOR_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const VALIDATOR_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Validator backed by the remote resource API.
pub struct HttpValidator {
    client: Client,
    address: String,
    token: Option<String>,
}

impl HttpValidator {
    pub fn new(address: &str, token: Option<String>) -> Result<Self, LookupError> {
        let client = Client::builder()
            .connect_timeout(VALIDATOR_HTTP_CONNECT_TIMEOUT)
            .timeout(VALIDATOR_HTTP_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LookupError::RequestFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            address: address.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn organization_url(&self, org: &str) -> String {
        format!("{}/api/v2/organizations/{}", self.address, org)
    }

    pub fn workspace_url(&self, org: &str, name: &str) -> String {
        format!("{}/workspaces/{}", self.organization_url(org), name)
    }

    async fn probe(&self, url: &str) -> Result<(), LookupError> {
        let mut request = self
            .client
            .get(url)
            .header("Content-Type", "application/vnd.api+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(url, "Probing resource");
        let response = request.send().await.map_err(map_http_error)?;
        status_to_result(response.status())
    }
}

#[async_trait]
impl ResourceValidator for HttpValidator {
    async fn organization_exists(&self, name: &str) -> Result<(), LookupError> {
        self.probe(&self.organization_url(name)).await
    }

    async fn workspace_exists(&self, org: &str, name: &str) -> Result<(), LookupError> {
        self.probe(&self.workspace_url(org, name)).await
    }
}

fn status_to_result(status: StatusCode) -> Result<(), LookupError> {
    match status.as_u16() {
        200..=299 => Ok(()),
        404 => Err(LookupError::NotFound),
        401 | 403 => Err(LookupError::Unauthorized(format!("status {}", status))),
        _ => Err(LookupError::RequestFailed(format!("status {}", status))),
    }
}

fn map_http_error(error: reqwest::Error) -> LookupError {
    if error.is_timeout() {
        LookupError::RequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        LookupError::RequestFailed(format!("Connection error: {}", error))
    } else {
        LookupError::RequestFailed(format!("HTTP error: {}", error))
    }
}
