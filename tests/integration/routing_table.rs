//! Routing behavior through the public API, with the registry built from the default catalog.

use std::sync::Arc;
use tfctl::catalog::Catalog;
use tfctl::registry::{self, CommandRegistry};
use tfctl::router::{ArgumentRouter, RouteDecision};

fn router() -> ArgumentRouter {
    ArgumentRouter::new(Arc::new(Catalog::default().registry()))
}

fn assert_routes(input: &[&str], expected: &[&str]) {
    assert_eq!(
        router().translate(input),
        expected.to_vec(),
        "routing {:?}",
        input
    );
}

#[test]
fn test_documented_routes() {
    let cases: &[(&[&str], &[&str])] = &[
        (&["acme"], &["organization", "show", "-name=acme"]),
        (&["acme", "teams"], &["team", "list", "-org=acme"]),
        (&["acme", "teams", "create"], &["team", "create", "-org=acme"]),
        (&["acme", "prod"], &["workspace", "read", "-org=acme", "-name=prod"]),
        (&["acme", "prod", "run-123"], &["run", "show", "-id=run-123"]),
        (&["acme", "prod", "run-123", "apply"], &["run", "apply", "-id=run-123"]),
        (&["acme", "prod", "run-123", "plan"], &["plan", "read", "-id=run-123"]),
        (&["acme", "-h"], &["organization:context", "-org=acme"]),
        (
            &["acme", "prod", "-h"],
            &["workspace:context", "-org=acme", "-workspace=prod"],
        ),
        (&["acme", "teams", "-h"], &["team", "-h"]),
        (
            &["acme", "prod", "runs", "run-123", "comments"],
            &["comment", "list", "-run-id=run-123"],
        ),
        (
            &["acme", "prod", "run-123", "outputs"],
            &["state", "outputs", "-org=acme", "-workspace=prod"],
        ),
        (
            &["acme", "-h", "prod"],
            &["workspace:context", "-org=acme", "-workspace=prod"],
        ),
        (
            &["acme", "prod", "-h", "runs"],
            &["run", "list", "-org=acme", "-workspace=prod", "-h"],
        ),
        (&["acme", "prod", "teams"], &["acme", "prod", "teams"]),
    ];
    for (input, expected) in cases {
        assert_routes(input, expected);
    }
}

#[test]
fn test_every_catalog_root_passes_through() {
    let catalog = Catalog::default();
    let router = router();
    for path in catalog.paths() {
        let args: Vec<&str> = path.split_whitespace().collect();
        assert_eq!(router.route(args.as_slice()), RouteDecision::PassThrough, "{}", path);
    }
}

#[test]
fn test_registry_membership_matches_catalog() {
    let catalog = Catalog::default();
    let registry = catalog.registry();
    for path in catalog.paths() {
        let first = path.split_whitespace().next().unwrap();
        assert!(registry.has_root(first), "{}", first);
    }
    for token in ["acme", "list", "teams", "runs", "run-123"] {
        assert!(!registry.has_root(token), "{}", token);
    }
    assert!(!registry::has_root(None, "workspace"));
    assert!(!CommandRegistry::default().has_root("workspace"));
}

#[test]
fn test_flags_keep_their_order() {
    assert_routes(
        &["acme", "prod", "runs", "-status=applied", "-limit=5"],
        &[
            "run",
            "list",
            "-org=acme",
            "-workspace=prod",
            "-status=applied",
            "-limit=5",
        ],
    );
}

#[test]
fn test_custom_catalog_root_is_not_an_organization() {
    let catalog = Catalog::with_extra_commands(["registry module list"]);
    let router = ArgumentRouter::new(Arc::new(catalog.registry()));
    assert_eq!(
        router.translate(&["registry", "module", "list"]),
        vec!["registry", "module", "list"]
    );
    assert_eq!(
        router.translate(&["registry"]),
        vec!["registry"]
    );
}
