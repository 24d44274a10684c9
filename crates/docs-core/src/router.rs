//! URL resolution for the static site.
//!
//! Every PHP version gets its own copy of the route tree. The default version
//! lives directly under the base path and the others under `php-<ver>/`:
//!
//! ```text
//! /docs/                      Home, default version
//! /docs/commands/             Commands, default version
//! /docs/php-8.2/commands/     Commands, PHP 8.2
//! ```

use docs_model::{PhpVersion, Route};
use tracing::debug;

/// Result of [`Router::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub route: Route,
    /// Version tree named in the URL; `None` for the default tree.
    pub version: Option<PhpVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    base_path: String,
    default_version: PhpVersion,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(docs_model::default_base_path())
    }
}

impl Router {
    /// Router mounted at `base_path`, normalized to `/segment/.../` form.
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: normalize_base_path(base_path),
            default_version: PhpVersion::default(),
        }
    }

    /// Set the version served from the unprefixed tree.
    #[must_use]
    pub fn with_default_version(mut self, version: PhpVersion) -> Self {
        self.default_version = version;
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn default_version(&self) -> PhpVersion {
        self.default_version
    }

    /// Map a request path to a route and version tree.
    ///
    /// Paths outside the base path, unknown version prefixes, the default
    /// version's own prefix (that tree is served unprefixed) and unknown pages
    /// all resolve to [`Route::NotFound`].
    pub fn resolve(&self, path: &str) -> Resolved {
        let path = path.split(['?', '#']).next().unwrap_or_default().trim();
        let base_without_slash = self.base_path.trim_end_matches('/');

        let relative = if let Some(rest) = path.strip_prefix(&self.base_path) {
            rest
        } else if path == base_without_slash {
            ""
        } else {
            debug!(path, base_path = %self.base_path, "path outside base path");
            return Resolved {
                route: Route::NotFound,
                version: None,
            };
        };

        let (first, remainder) = relative.split_once('/').unwrap_or((relative, ""));
        let resolved = if first.starts_with("php-") {
            match first.parse::<PhpVersion>() {
                Ok(version) if version == self.default_version => Resolved {
                    route: Route::NotFound,
                    version: None,
                },
                Ok(version) => Resolved {
                    route: Route::from_path(remainder),
                    version: Some(version),
                },
                Err(_) => Resolved {
                    route: Route::NotFound,
                    version: None,
                },
            }
        } else {
            Resolved {
                route: Route::from_path(relative),
                version: None,
            }
        };
        debug!(path, route = ?resolved.route, version = ?resolved.version, "resolved path");
        resolved
    }

    /// Link to `route` in the tree for `version` (`None` for the default tree).
    ///
    /// Directory routes end with `/`. The not-found page only exists at the
    /// site root.
    pub fn href(&self, route: Route, version: Option<PhpVersion>) -> String {
        let mut href = self.base_path.clone();
        if route == Route::NotFound {
            href.push_str(route.output_file());
            return href;
        }
        if let Some(version) = version.filter(|version| *version != self.default_version) {
            href.push_str(&version.path_segment());
            href.push('/');
        }
        href.push_str(route_dir(route));
        href
    }

    /// Output directory (relative to the site root) for a version tree.
    pub fn tree_dir(&self, version: PhpVersion) -> Option<String> {
        (version != self.default_version).then(|| version.path_segment())
    }
}

fn route_dir(route: Route) -> &'static str {
    let file = route.output_file();
    file.strip_suffix("index.html").unwrap_or(file)
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
