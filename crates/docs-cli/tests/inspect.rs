use std::path::PathBuf;

use docs_cli::config::{ConfigOverrides, load_site_config};
use docs_cli::inspect::{resolve_path, route_rows, spy};
use docs_model::PhpVersion;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "laravel-docs-cli-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn routes_listing() {
    insta::assert_json_snapshot!(route_rows(), @r#"
    [
      {
        "path": "/",
        "title": "Deployment Guide",
        "output": "index.html"
      },
      {
        "path": "/troubleshooting",
        "title": "Troubleshooting",
        "output": "troubleshooting/index.html"
      },
      {
        "path": "/commands",
        "title": "Useful Commands",
        "output": "commands/index.html"
      },
      {
        "path": "/integration",
        "title": "Integrations",
        "output": "integration/index.html"
      },
      {
        "path": "/integration/notifications",
        "title": "Push Notifications",
        "output": "integration/notifications/index.html"
      },
      {
        "path": "*",
        "title": "Not Found",
        "output": "404.html"
      }
    ]
    "#);
}

#[test]
fn spy_reports_active_offset() {
    let outcome = spy(&[0.0, 100.0, 300.0], 250.0, 150.0);
    assert_eq!(outcome.effective, 400.0);
    assert_eq!(outcome.index, Some(2));
    assert_eq!(outcome.offset, Some(300.0));

    let outcome = spy(&[200.0, 400.0], 0.0, 150.0);
    assert_eq!(outcome.index, None);
    assert_eq!(outcome.offset, None);
}

#[test]
fn resolve_reports_version_tree() {
    let resolution = resolve_path("/docs/php-8.2/commands", Some("/docs/"));
    assert_eq!(resolution.route, "Useful Commands");
    assert_eq!(resolution.version, Some(PhpVersion::Php82));
    assert_eq!(resolution.href, "/docs/php-8.2/commands/");

    let missing = resolve_path("/docs/nowhere", Some("/docs/"));
    assert_eq!(missing.route, "Not Found");
    assert_eq!(missing.href, "/docs/404.html");
}

#[test]
fn flags_override_config_file() {
    let dir = unique_temp_dir("config");
    let path = dir.join("site.toml");
    std::fs::write(
        &path,
        "site_name = \"Ops Handbook\"\nbase_path = \"/handbook/\"\ndefault_version = \"8.2\"\n",
    )
    .unwrap();

    let from_file = load_site_config(Some(&path), &ConfigOverrides::default()).unwrap();
    assert_eq!(from_file.site_name, "Ops Handbook");
    assert_eq!(from_file.base_path, "/handbook/");
    assert_eq!(from_file.default_version, PhpVersion::Php82);

    let overrides = ConfigOverrides {
        base_path: Some("/docs/".to_string()),
        default_version: Some(PhpVersion::Php83),
    };
    let merged = load_site_config(Some(&path), &overrides).unwrap();
    assert_eq!(merged.base_path, "/docs/");
    assert_eq!(merged.default_version, PhpVersion::Php83);
    assert_eq!(merged.site_name, "Ops Handbook");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = unique_temp_dir("missing");
    let err = load_site_config(Some(&dir.join("absent.toml")), &ConfigOverrides::default())
        .unwrap_err();
    assert!(format!("{err:#}").contains("read config"));
    std::fs::remove_dir_all(&dir).unwrap();
}
