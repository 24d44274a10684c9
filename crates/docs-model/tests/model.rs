//! Tests for docs-model types.

use docs_model::{
    Anchor, DocsError, PerVersion, PhpVersion, Route, SectionGroup, SiteConfig, VersionState,
};

#[test]
fn every_available_version_can_be_selected() {
    let mut state = VersionState::default();
    for version in state.available().to_vec() {
        state.select(version).expect("available version");
        assert_eq!(state.current(), version);
    }
}

#[test]
fn unavailable_selection_reports_available_set() {
    let mut state = VersionState::new(PhpVersion::Php82, vec![PhpVersion::Php82]).unwrap();
    let err = state.select(PhpVersion::Php83).unwrap_err();
    assert_eq!(err.to_string(), "PHP 8.3 is not available (available: 8.2)");
    assert_eq!(state.current(), PhpVersion::Php82);
}

#[test]
fn unknown_version_message() {
    let err = "9.9".parse::<PhpVersion>().unwrap_err();
    assert!(matches!(err, DocsError::UnknownVersion(ref raw) if raw == "9.9"));
    assert_eq!(err.to_string(), "unknown PHP version: 9.9");
}

#[test]
fn per_version_covers_every_release() {
    let table = PerVersion::new("a", "b");
    let collected: Vec<(PhpVersion, &str)> = table.iter().map(|(v, s)| (v, *s)).collect();
    assert_eq!(
        collected,
        vec![(PhpVersion::Php83, "a"), (PhpVersion::Php82, "b")]
    );
}

#[test]
fn php_version_serializes_as_dotted_string() {
    let json = serde_json::to_string(&PhpVersion::Php82).expect("serialize version");
    assert_eq!(json, "\"8.2\"");
    let round: PhpVersion = serde_json::from_str("\"8.3\"").expect("deserialize version");
    assert_eq!(round, PhpVersion::Php83);
}

#[test]
fn section_group_membership() {
    let group = SectionGroup::new(
        "getting-started",
        "Getting Started",
        vec![
            Anchor::new("introduction", "Introduction"),
            Anchor::new("outdated-notes", "Outdated Tutorials"),
        ],
    );
    assert!(group.contains("outdated-notes"));
    assert!(!group.contains("firebase-setup"));
}

#[test]
fn route_output_files_are_unique() {
    let mut files: Vec<&str> = Route::all().iter().map(Route::output_file).collect();
    files.push(Route::NotFound.output_file());
    let count = files.len();
    files.sort_unstable();
    files.dedup();
    assert_eq!(files.len(), count);
}

#[test]
fn config_round_trips_through_json() {
    let config = SiteConfig::default();
    let json = serde_json::to_string(&config).expect("serialize config");
    let round: SiteConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(round, config);
}
