//! Configuration driving routing: keyword tables and extra commands from a file.

use std::sync::Arc;
use tempfile::TempDir;
use tfctl::config::{ConfigLoader, ValidateMode};
use tfctl::router::ArgumentRouter;

#[test]
fn test_configured_keywords_drive_routing() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tfctl.toml");

    std::fs::write(
        &config_file,
        r#"
[routing]
extra_commands = ["module list", "module show"]

[routing.keywords]
pass_through = ["help", "shell"]

[routing.keywords.organization_collections]
modules = "module"
teams = "team"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.routing.validate, ValidateMode::Off);

    let catalog = config.routing.catalog();
    let router = ArgumentRouter::new(Arc::new(catalog.registry()))
        .with_keywords(config.routing.keywords.clone());

    assert_eq!(
        router.translate(&["acme", "modules"]),
        vec!["module", "list", "-org=acme"]
    );
    assert_eq!(
        router.translate(&["acme", "modules", "show"]),
        vec!["module", "show", "-org=acme"]
    );
    // No longer a keyword: read as a workspace name.
    assert_eq!(
        router.translate(&["acme", "projects"]),
        vec!["workspace", "read", "-org=acme", "-name=projects"]
    );
    assert_eq!(router.translate(&["shell"]), vec!["shell"]);
    assert_eq!(router.translate(&["module", "list"]), vec!["module", "list"]);
}

#[test]
fn test_keyword_noun_without_command_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tfctl.toml");

    std::fs::write(
        &config_file,
        r#"
[routing.keywords.organization_collections]
modules = "module"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("module"));
}
