//! Site routes.

use serde::{Deserialize, Serialize};

/// A page of the site.
///
/// `NotFound` is the catch-all for every path that matches nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Troubleshooting,
    Commands,
    Integration,
    IntegrationNotifications,
    NotFound,
}

impl Route {
    /// Routable pages in navigation order (excludes `NotFound`).
    pub const fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::Troubleshooting,
            Route::Commands,
            Route::Integration,
            Route::IntegrationNotifications,
        ]
    }

    /// Path pattern relative to the site base. `NotFound` matches `*`.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Troubleshooting => "/troubleshooting",
            Route::Commands => "/commands",
            Route::Integration => "/integration",
            Route::IntegrationNotifications => "/integration/notifications",
            Route::NotFound => "*",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Deployment Guide",
            Route::Troubleshooting => "Troubleshooting",
            Route::Commands => "Useful Commands",
            Route::Integration => "Integrations",
            Route::IntegrationNotifications => "Push Notifications",
            Route::NotFound => "Not Found",
        }
    }

    /// File written for this route inside a version tree.
    pub fn output_file(&self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::Troubleshooting => "troubleshooting/index.html",
            Route::Commands => "commands/index.html",
            Route::Integration => "integration/index.html",
            Route::IntegrationNotifications => "integration/notifications/index.html",
            Route::NotFound => "404.html",
        }
    }

    /// Match a path that has already been stripped of base path and version prefix.
    ///
    /// Trailing slashes and a final `index.html` are ignored.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix("index.html").unwrap_or(trimmed);
        let trimmed = trimmed.trim_matches('/');
        match trimmed {
            "" => Route::Home,
            "troubleshooting" => Route::Troubleshooting,
            "commands" => Route::Commands,
            "integration" => Route::Integration,
            "integration/notifications" => Route::IntegrationNotifications,
            _ => Route::NotFound,
        }
    }

    pub fn is_integration(&self) -> bool {
        matches!(self, Route::Integration | Route::IntegrationNotifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_round_trips_every_route() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), *route);
        }
    }

    #[test]
    fn test_from_path_tolerates_slashes_and_index() {
        assert_eq!(Route::from_path("/commands/"), Route::Commands);
        assert_eq!(Route::from_path("commands"), Route::Commands);
        assert_eq!(
            Route::from_path("/integration/notifications/index.html"),
            Route::IntegrationNotifications
        );
        assert_eq!(Route::from_path("/index.html"), Route::Home);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/integration/email"), Route::NotFound);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
    }
}
