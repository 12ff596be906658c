//! Resource validation through the router: wrapping, timeouts, and translation independence.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tfctl::catalog::Catalog;
use tfctl::error::{LookupError, ResourceKind, RouteError};
use tfctl::router::ArgumentRouter;
use tfctl::validation::{ResourceValidator, StaticValidator};

/// Counts calls and never answers within the test timeout.
#[derive(Default)]
struct SlowValidator {
    calls: AtomicUsize,
}

#[async_trait]
impl ResourceValidator for SlowValidator {
    async fn organization_exists(&self, _name: &str) -> Result<(), LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(())
    }

    async fn workspace_exists(&self, _org: &str, _name: &str) -> Result<(), LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(())
    }
}

fn router_with(validator: Arc<dyn ResourceValidator>) -> ArgumentRouter {
    ArgumentRouter::new(Arc::new(Catalog::default().registry())).with_validator(validator)
}

#[tokio::test]
async fn test_translation_never_calls_validator() {
    let validator = Arc::new(SlowValidator::default());
    let router = router_with(validator.clone());

    let routed = router.translate(&["acme", "prod", "run-1", "apply"]);
    assert_eq!(routed, vec!["run", "apply", "-id=run-1"]);
    assert_eq!(validator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_validation_times_out() {
    let router = router_with(Arc::new(SlowValidator::default()));
    let err = router
        .validate_organization("acme", Duration::from_millis(20))
        .await
        .unwrap_err();

    let RouteError::ResourceNotFound { kind, name, source } = err;
    assert_eq!(kind, ResourceKind::Organization);
    assert_eq!(name, "acme");
    assert!(matches!(source, LookupError::TimedOut(_)));
}

#[tokio::test]
async fn test_missing_organization_is_reported_by_name() {
    let router = router_with(Arc::new(StaticValidator::new().with_organization("acme")));
    let timeout = Duration::from_secs(1);

    assert!(router.validate_organization("acme", timeout).await.is_ok());
    let err = router
        .validate_organization("hashi", timeout)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "organization not found: hashi: not found");
}

#[tokio::test]
async fn test_default_router_accepts_everything() {
    let router = ArgumentRouter::without_registry();
    let timeout = Duration::from_millis(50);
    assert!(router.validate_organization("anything", timeout).await.is_ok());
    assert!(router.validate_workspace("a", "b", timeout).await.is_ok());
}
