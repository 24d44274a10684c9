use chrono::{Datelike, NaiveDate};
use docs_core::Router;
use docs_model::{PhpVersion, Route, SiteConfig};

/// Everything a page needs besides its own content.
///
/// The date stands in for "today" so that output only changes when the
/// inputs do.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub config: SiteConfig,
    pub router: Router,
    pub date: NaiveDate,
    /// Version the page is rendered for.
    pub version: PhpVersion,
    /// Versions offered by the switcher, in display order.
    pub available: Vec<PhpVersion>,
}

impl RenderContext {
    pub fn new(config: SiteConfig, date: NaiveDate) -> Self {
        let router = Router::new(&config.base_path).with_default_version(config.default_version);
        let version = config.default_version;
        Self {
            config,
            router,
            date,
            version,
            available: PhpVersion::ALL.to_vec(),
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: PhpVersion) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_available(mut self, available: Vec<PhpVersion>) -> Self {
        self.available = available;
        self
    }

    /// Link to `route` in the tree being rendered.
    pub fn href(&self, route: Route) -> String {
        self.router.href(route, Some(self.version))
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
