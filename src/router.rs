//! Argument router: rewrites resource addresses into canonical commands.
//!
//! `acme prod run-123 apply` becomes `run apply -id=run-123`. Vectors that
//! already start with a known command, a flag, or a reserved token pass
//! through unchanged, and so does any address shape no rule recognizes.

use crate::error::{LookupError, ResourceKind, RouteError};
use crate::registry::{self, CommandRegistry};
use crate::validation::{NoopValidator, ResourceValidator};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

mod keywords;
mod rules;

pub use keywords::{KeywordTable, RunAction, RunScope, WorkspaceCollection};

use rules::{Address, RULES};

/// Outcome of routing an argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    PassThrough,
    Rewrite(Vec<String>),
}

pub struct ArgumentRouter {
    registry: Option<Arc<CommandRegistry>>,
    keywords: Arc<KeywordTable>,
    validator: Arc<dyn ResourceValidator>,
}

impl ArgumentRouter {
    /// Router over `registry` with the default keyword table and no validation.
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self {
            registry: Some(registry),
            keywords: Arc::new(KeywordTable::default()),
            validator: Arc::new(NoopValidator),
        }
    }

    /// Router with no registry: every first token is a candidate organization.
    pub fn without_registry() -> Self {
        Self {
            registry: None,
            keywords: Arc::new(KeywordTable::default()),
            validator: Arc::new(NoopValidator),
        }
    }

    pub fn with_keywords(mut self, keywords: KeywordTable) -> Self {
        self.keywords = Arc::new(keywords);
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn ResourceValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn registry(&self) -> Option<&CommandRegistry> {
        self.registry.as_deref()
    }

    /// Decide how `args` should be routed.
    pub fn route<S: AsRef<str>>(&self, args: &[S]) -> RouteDecision {
        let args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();

        let Some(first) = args.first() else {
            return RouteDecision::PassThrough;
        };
        if first.starts_with('-') {
            return RouteDecision::PassThrough;
        }
        if registry::has_root(self.registry(), first) || self.keywords.is_pass_through(first) {
            debug!(command = %first, "Known command root, passing through");
            return RouteDecision::PassThrough;
        }

        let Some(address) = Address::parse(&args, &self.keywords) else {
            return RouteDecision::PassThrough;
        };
        for rule in RULES {
            if let Some(decision) = (rule.apply)(&address, &self.keywords) {
                debug!(rule = rule.name, ?decision, "Address routed");
                return decision;
            }
        }

        debug!(org = address.org, "No rule matched address, passing through");
        RouteDecision::PassThrough
    }

    /// Translate `args` into the canonical argument vector.
    pub fn translate<S: AsRef<str>>(&self, args: &[S]) -> Vec<String> {
        match self.route(args) {
            RouteDecision::Rewrite(rewritten) => rewritten,
            RouteDecision::PassThrough => args.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }

    /// Check that an organization exists, bounded by `timeout`.
    pub async fn validate_organization(
        &self,
        name: &str,
        timeout: Duration,
    ) -> Result<(), RouteError> {
        let result = tokio::time::timeout(timeout, self.validator.organization_exists(name))
            .await
            .unwrap_or(Err(LookupError::TimedOut(timeout)));
        result.map_err(|source| RouteError::ResourceNotFound {
            kind: ResourceKind::Organization,
            name: name.to_string(),
            source,
        })
    }

    /// Check that a workspace exists within `org`, bounded by `timeout`.
    pub async fn validate_workspace(
        &self,
        org: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<(), RouteError> {
        let result = tokio::time::timeout(timeout, self.validator.workspace_exists(org, name))
            .await
            .unwrap_or(Err(LookupError::TimedOut(timeout)));
        result.map_err(|source| RouteError::ResourceNotFound {
            kind: ResourceKind::Workspace,
            name: format!("{}/{}", org, name),
            source,
        })
    }
}
