use std::path::PathBuf;

use chrono::NaiveDate;
use docs_content::page_for;
use docs_core::VersionStore;
use docs_model::{PhpVersion, Route, SiteConfig, VersionState};
use docs_render::{RenderContext, SiteBuilder, render_page, render_version};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "laravel-docs-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
}

fn context(version: PhpVersion) -> RenderContext {
    RenderContext::new(SiteConfig::default(), date()).with_version(version)
}

fn render(route: Route, version: PhpVersion) -> String {
    render_page(&page_for(route, version, date()), &context(version)).unwrap()
}

#[test]
fn rendering_is_deterministic() {
    for version in PhpVersion::ALL {
        for route in Route::all() {
            assert_eq!(render(*route, version), render(*route, version));
        }
    }
}

#[test]
fn guide_renders_every_section_and_copyable_code() {
    let html = render(Route::Home, PhpVersion::Php83);
    assert!(html.starts_with("<!DOCTYPE html>"));
    for id in ["notes", "login", "nginx", "php", "final"] {
        assert!(html.contains(&format!("<section id=\"{id}\"")), "missing {id}");
    }
    assert!(html.contains("class=\"copy-button\" data-copy=\"sudo apt install nginx -y\""));
    assert!(html.contains("<a class=\"start-reading\" href=\"#notes\">"));
    assert!(html.contains("<footer id=\"contact\""));
    assert!(html.contains("© 2026 Laravel Server Documentation. All rights reserved."));
}

#[test]
fn version_trees_show_their_own_commands() {
    let html = render(Route::Troubleshooting, PhpVersion::Php82);
    assert!(html.contains("php8.2-fpm"));
    assert!(!html.contains("php8.3-fpm"));
    assert!(html.contains("data-php-version=\"8.2\""));
}

#[test]
fn version_switcher_links_same_page_in_each_tree() {
    let html = render(Route::Commands, PhpVersion::Php82);
    assert!(html.contains("href=\"/commands/\" class=\"version-option\""));
    assert!(html.contains("href=\"/php-8.2/commands/\" class=\"version-option active\""));
}

#[test]
fn base_path_prefixes_links() {
    let config = SiteConfig {
        base_path: "/docs".to_string(),
        ..SiteConfig::default()
    };
    let ctx = RenderContext::new(config, date());
    let html = render_page(&page_for(Route::NotFound, PhpVersion::Php83, date()), &ctx).unwrap();
    assert!(html.contains("<a href=\"/docs/\">Return to Home</a>"));
    assert!(html.contains("href=\"/docs/#notes\""));
}

#[test]
fn notifications_page_has_grouped_menu_and_active_tab() {
    let html = render(Route::IntegrationNotifications, PhpVersion::Php83);
    assert!(html.contains("data-scroll-spy=\"grouped\""));
    assert!(html.contains("open=\"open\""));
    assert!(html.contains("class=\"tab active\""));
    assert!(html.contains("<span class=\"soon\">Soon</span>"));
    assert!(html.contains("Updated: January 5, 2026"));
}

#[test]
fn integration_home_has_no_on_this_page_menu() {
    let html = render(Route::Integration, PhpVersion::Php83);
    assert!(!html.contains("data-scroll-spy"));
    assert!(html.contains("<a href=\"/integration/notifications/\">Read the guide</a>"));
}

#[test]
fn non_default_tree_paths() {
    let pages = render_version(&context(PhpVersion::Php83), PhpVersion::Php82).unwrap();
    let paths: Vec<String> = pages
        .iter()
        .map(|page| page.path.display().to_string())
        .collect();
    insta::assert_json_snapshot!(paths, @r#"
    [
      "php-8.2/index.html",
      "php-8.2/troubleshooting/index.html",
      "php-8.2/commands/index.html",
      "php-8.2/integration/index.html",
      "php-8.2/integration/notifications/index.html"
    ]
    "#);
}

#[test]
fn build_writes_every_tree_and_restores_selection() {
    let out_dir = unique_temp_dir("build");
    let builder = SiteBuilder::new(RenderContext::new(SiteConfig::default(), date()));
    let mut store =
        VersionStore::new(VersionState::new(PhpVersion::Php82, PhpVersion::ALL.to_vec()).unwrap());

    let report = builder.build(&mut store, &out_dir).unwrap();

    assert_eq!(store.current(), PhpVersion::Php82);
    assert_eq!(store.subscriber_count(), 0);
    assert_eq!(report.pages.len(), Route::all().len() * 2 + 1);
    assert!(out_dir.join("index.html").is_file());
    assert!(out_dir.join("404.html").is_file());
    assert!(out_dir.join("php-8.2/commands/index.html").is_file());
    assert!(!out_dir.join("php-8.2/404.html").exists());
    assert!(report.total_bytes() > 0);

    let written = std::fs::read_to_string(out_dir.join("php-8.2/index.html")).unwrap();
    assert!(written.contains("php8.2-fpm"));

    std::fs::remove_dir_all(&out_dir).unwrap();
}

#[test]
fn build_requires_the_root_version() {
    let out_dir = unique_temp_dir("no-root");
    let builder = SiteBuilder::new(RenderContext::new(SiteConfig::default(), date()));
    let mut store =
        VersionStore::new(VersionState::new(PhpVersion::Php82, vec![PhpVersion::Php82]).unwrap());

    let err = builder.build(&mut store, &out_dir).unwrap_err();

    assert!(err.to_string().contains("default PHP 8.3"), "{err}");
    assert!(!out_dir.exists());
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn build_with_single_root_version_writes_root_and_not_found() {
    let out_dir = unique_temp_dir("single");
    let config = SiteConfig {
        default_version: PhpVersion::Php82,
        ..SiteConfig::default()
    };
    let builder = SiteBuilder::new(RenderContext::new(config, date()));
    let mut store =
        VersionStore::new(VersionState::new(PhpVersion::Php82, vec![PhpVersion::Php82]).unwrap());

    let report = builder.build(&mut store, &out_dir).unwrap();

    assert_eq!(report.pages.len(), Route::all().len() + 1);
    assert!(out_dir.join("index.html").is_file());
    assert!(out_dir.join("404.html").is_file());
    assert!(!out_dir.join("php-8.2").exists());

    std::fs::remove_dir_all(&out_dir).unwrap();
}

#[test]
fn pages_without_groups_get_a_flat_menu() {
    let html = render(Route::Commands, PhpVersion::Php83);
    assert!(html.contains("data-scroll-spy=\"flat\""));
    assert!(html.contains("<a href=\"#quick-reference\" data-section=\"quick-reference\">"));
    assert!(!html.contains("section-group"));
}
