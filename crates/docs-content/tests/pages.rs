//! Content coverage across routes and PHP versions.

use chrono::NaiveDate;
use docs_content::{format_updated, navbar_sections, page_for, quick_reference_rows};
use docs_model::{PhpVersion, Route};

fn updated_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
}

fn anchor_ids(route: Route, version: PhpVersion) -> Vec<String> {
    page_for(route, version, updated_on())
        .anchors()
        .into_iter()
        .map(|anchor| anchor.id)
        .collect()
}

#[test]
fn every_route_builds_for_every_version() {
    for version in PhpVersion::ALL {
        for route in Route::all().iter().copied().chain([Route::NotFound]) {
            let page = page_for(route, version, updated_on());
            assert_eq!(page.route, route);
            assert!(!page.title.is_empty());
        }
    }
}

#[test]
fn anchor_lists() {
    let version = PhpVersion::Php83;
    assert_eq!(
        anchor_ids(Route::Home, version),
        [
            "notes", "login", "nginx", "php", "mysql", "composer", "github", "laravel", "domain",
            "ssl", "final"
        ]
    );
    assert_eq!(
        anchor_ids(Route::Troubleshooting, version),
        [
            "permission-denied",
            "storage-not-found",
            "php-fpm-error",
            "check-web-server"
        ]
    );
    assert_eq!(
        anchor_ids(Route::Commands, version),
        [
            "database-reset",
            "cache-clearing",
            "verification",
            "quick-reference"
        ]
    );
    assert!(anchor_ids(Route::Integration, version).is_empty());
    assert_eq!(anchor_ids(Route::IntegrationNotifications, version).len(), 13);
}

#[test]
fn anchors_do_not_depend_on_version() {
    for route in Route::all() {
        assert_eq!(
            anchor_ids(*route, PhpVersion::Php83),
            anchor_ids(*route, PhpVersion::Php82)
        );
    }
}

#[test]
fn version_pages_never_mention_the_other_fpm_service() {
    for version in PhpVersion::ALL {
        let other = PhpVersion::ALL
            .into_iter()
            .find(|candidate| *candidate != version)
            .unwrap();
        for route in Route::all() {
            let page = page_for(*route, version, updated_on());
            for block in page.code_blocks() {
                assert!(
                    !block.code.contains(&other.fpm_service()),
                    "{route:?} for PHP {version} mentions {}",
                    other.fpm_service()
                );
            }
        }
    }
}

#[test]
fn updated_badge_uses_long_date() {
    assert_eq!(format_updated(updated_on()), "January 5, 2026");
    let page = page_for(Route::Integration, PhpVersion::Php83, updated_on());
    assert_eq!(
        page.header.and_then(|header| header.updated).as_deref(),
        Some("January 5, 2026")
    );
}

#[test]
fn navbar_sections_snapshot() {
    let sections = navbar_sections();
    insta::assert_json_snapshot!(&sections[..3], @r#"
    [
      {
        "id": "notes",
        "label": "Important Notes"
      },
      {
        "id": "login",
        "label": "Server Login"
      },
      {
        "id": "nginx",
        "label": "Install Nginx"
      }
    ]
    "#);
}

#[test]
fn quick_reference_rows_for_php82() {
    let rows = quick_reference_rows(PhpVersion::Php82);
    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(json[4]["command"], "sudo systemctl restart php8.2-fpm");
    assert_eq!(json[4]["description"], "Restart PHP-FPM");
}
