//! CLI route: run context that routes, dispatches, validates and renders.

use crate::catalog::{Catalog, ORGANIZATION_CONTEXT};
use crate::cli::help::{
    format_catalog, format_noun_help, format_organization_context, format_workspace_context,
};
use crate::cli::output::format_invocation;
use crate::cli::OutputFormat;
use crate::config::{TfctlConfig, ValidateMode};
use crate::dispatch::{parse_invocation, Invocation};
use crate::error::CliError;
use crate::registry::CommandRegistry;
use crate::router::ArgumentRouter;
use crate::validation::{HttpValidator, ResourceValidator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Runtime context for CLI execution, built once from configuration.
pub struct RunContext {
    router: ArgumentRouter,
    registry: Arc<CommandRegistry>,
    catalog: Catalog,
    validate: ValidateMode,
    validate_timeout: Duration,
    format: OutputFormat,
}

impl RunContext {
    /// Create run context from configuration. `validate` overrides the configured mode.
    pub fn new(
        config: &TfctlConfig,
        format: OutputFormat,
        validate: Option<ValidateMode>,
    ) -> Result<Self, CliError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            CliError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        let catalog = config.routing.catalog();
        let registry = Arc::new(catalog.registry());
        let validate = validate.unwrap_or(config.routing.validate);

        let mut router = ArgumentRouter::new(Arc::clone(&registry))
            .with_keywords(config.routing.keywords.clone());
        if validate != ValidateMode::Off {
            let validator = HttpValidator::new(&config.api.address, config.api.token.clone())
                .map_err(|e| CliError::Config(e.to_string()))?;
            router = router.with_validator(Arc::new(validator));
        }
        debug!(
            roots = registry.root_count(),
            validate = ?validate,
            "Run context initialized"
        );

        Ok(Self {
            router,
            registry,
            catalog,
            validate,
            validate_timeout: config.routing.validate_timeout(),
            format,
        })
    }

    /// Replace the resource validator, e.g. with an offline one.
    pub fn with_validator(mut self, validator: Arc<dyn ResourceValidator>) -> Self {
        self.router = self.router.with_validator(validator);
        self
    }

    pub fn router(&self) -> &ArgumentRouter {
        &self.router
    }

    /// Route and render one argument vector.
    pub async fn execute(&self, args: &[String]) -> Result<String, CliError> {
        let keywords = self.router.keywords();
        if args.is_empty() || (args.len() == 1 && keywords.is_help(&args[0])) {
            return Ok(format_catalog(&self.catalog));
        }

        let translated = self.router.translate(args);
        let rewritten = translated.as_slice() != args;
        if rewritten {
            info!(from = ?args, to = ?translated, "Rewrote resource address");
        }

        let invocation = parse_invocation(&translated, &self.registry, keywords)?;
        if rewritten {
            self.check_address(&invocation).await?;
        }

        if invocation.is_context() {
            return Ok(self.format_context(&invocation));
        }
        if invocation.help {
            return Ok(format_noun_help(&self.catalog, &invocation.command));
        }
        format_invocation(&invocation, self.format)
    }

    fn format_context(&self, invocation: &Invocation) -> String {
        let org = invocation.organization().unwrap_or_default();
        if invocation.command[0] == ORGANIZATION_CONTEXT {
            format_organization_context(&self.router, org)
        } else {
            let workspace = invocation.workspace().unwrap_or_default();
            format_workspace_context(&self.router, org, workspace)
        }
    }

    async fn check_address(&self, invocation: &Invocation) -> Result<(), CliError> {
        if self.validate == ValidateMode::Off {
            return Ok(());
        }
        let result = match (invocation.organization(), invocation.workspace()) {
            (Some(org), Some(workspace)) => {
                self.router
                    .validate_workspace(org, workspace, self.validate_timeout)
                    .await
            }
            (Some(org), None) => {
                self.router
                    .validate_organization(org, self.validate_timeout)
                    .await
            }
            _ => return Ok(()),
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) if self.validate == ValidateMode::Warn => {
                warn!(error = %e, "Address validation failed, dispatching anyway");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
