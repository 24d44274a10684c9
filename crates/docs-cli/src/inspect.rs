//! Lookups behind the inspection subcommands.

use docs_core::{Router, active_index};
use docs_model::{Route, SiteConfig};

use crate::types::{Resolution, RouteRow, SpyOutcome};

pub fn route_rows() -> Vec<RouteRow> {
    Route::all()
        .iter()
        .chain(std::iter::once(&Route::NotFound))
        .map(|route| RouteRow {
            path: route.path(),
            title: route.name(),
            output: route.output_file(),
        })
        .collect()
}

/// Resolve `path` against `base_path`, or the configured default when `None`.
pub fn resolve_path(path: &str, base_path: Option<&str>) -> Resolution {
    let config = SiteConfig::default();
    let router = Router::new(base_path.unwrap_or(&config.base_path))
        .with_default_version(config.default_version);
    let resolved = router.resolve(path);
    Resolution {
        route: resolved.route.name(),
        version: resolved.version,
        href: router.href(resolved.route, resolved.version),
    }
}

pub fn spy(offsets: &[f64], scroll_y: f64, threshold: f64) -> SpyOutcome {
    let tops: Vec<Option<f64>> = offsets.iter().copied().map(Some).collect();
    let index = active_index(scroll_y, &tops, threshold);
    SpyOutcome {
        effective: scroll_y + threshold,
        index,
        offset: index.map(|index| offsets[index]),
    }
}
