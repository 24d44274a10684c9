//! Rendering whole version trees and writing them to disk.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use docs_content::page_for;
use docs_core::{SubscriberId, VersionStore};
use docs_model::{PhpVersion, Route};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::context::RenderContext;
use crate::page::render_page;

/// One rendered page of a version tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub route: Route,
    pub version: PhpVersion,
    /// Output path relative to the site root.
    pub path: PathBuf,
    pub html: String,
}

/// File written by [`SiteBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenPage {
    pub version: PhpVersion,
    pub route: Route,
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub pages: Vec<WrittenPage>,
}

impl BuildReport {
    pub fn total_bytes(&self) -> usize {
        self.pages.iter().map(|page| page.bytes).sum()
    }
}

/// Output path of `route` in the tree for `version`.
fn output_path(ctx: &RenderContext, route: Route, version: PhpVersion) -> PathBuf {
    let mut path = PathBuf::new();
    if route != Route::NotFound
        && let Some(dir) = ctx.router.tree_dir(version)
    {
        path.push(dir);
    }
    path.push(route.output_file());
    path
}

/// Render every routable page for `version`.
///
/// The not-found page is only part of the default tree.
pub fn render_version(ctx: &RenderContext, version: PhpVersion) -> Result<Vec<RenderedPage>> {
    let ctx = ctx.clone().with_version(version);
    let mut routes = Route::all().to_vec();
    if version == ctx.router.default_version() {
        routes.push(Route::NotFound);
    }

    let mut pages = Vec::with_capacity(routes.len());
    for route in routes {
        let page = page_for(route, version, ctx.date);
        let html = render_page(&page, &ctx)
            .with_context(|| format!("render {} for PHP {version}", route.name()))?;
        pages.push(RenderedPage {
            route,
            version,
            path: output_path(&ctx, route, version),
            html,
        });
    }
    debug!(php_version = %version, pages = pages.len(), "rendered version tree");
    Ok(pages)
}

/// Keeps rendered version trees in step with a [`VersionStore`].
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    ctx: RenderContext,
    cache: Rc<RefCell<HashMap<PhpVersion, Vec<RenderedPage>>>>,
}

impl SiteBuilder {
    pub fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            cache: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Render the store's current version now and again after every change.
    pub fn subscribe(&self, store: &mut VersionStore) -> SubscriberId {
        let ctx = self.ctx.clone().with_available(store.available().to_vec());
        rerender(&ctx, &self.cache, store.current());

        let cache = Rc::clone(&self.cache);
        store.subscribe(move |version| rerender(&ctx, &cache, version))
    }

    /// Pages rendered so far for `version`.
    pub fn rendered(&self, version: PhpVersion) -> Option<Vec<RenderedPage>> {
        self.cache.borrow().get(&version).cloned()
    }

    /// Render every available version and write the site under `out_dir`.
    ///
    /// Each version is reached by selecting it on `store`; the original
    /// selection is restored afterwards. The store must offer the context's
    /// default version, which provides the site root and `404.html`.
    pub fn build(&self, store: &mut VersionStore, out_dir: &Path) -> Result<BuildReport> {
        let default_version = self.ctx.router.default_version();
        if !store.available().contains(&default_version) {
            bail!(
                "default PHP {default_version} is not among the available versions ({})",
                store
                    .available()
                    .iter()
                    .map(PhpVersion::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        let original = store.current();
        let subscription = self.subscribe(store);

        let versions = store.available().to_vec();
        let mut selected = Ok(());
        for version in &versions {
            if let Err(error) = store.select(*version) {
                selected = Err(error);
                break;
            }
        }
        let restored = store.select(original);
        store.unsubscribe(subscription);
        selected.context("select PHP version")?;
        restored.context("restore PHP version")?;

        info!(out_dir = %out_dir.display(), versions = versions.len(), "writing site");
        let mut written = Vec::new();
        for version in &versions {
            let pages = self
                .rendered(*version)
                .with_context(|| format!("PHP {version} was not rendered"))?;
            for page in pages {
                written.push(write_page(out_dir, &page)?);
            }
        }
        info!(pages = written.len(), "site written");
        Ok(BuildReport {
            out_dir: out_dir.to_path_buf(),
            pages: written,
        })
    }
}

fn rerender(
    ctx: &RenderContext,
    cache: &RefCell<HashMap<PhpVersion, Vec<RenderedPage>>>,
    version: PhpVersion,
) {
    match render_version(ctx, version) {
        Ok(pages) => {
            cache.borrow_mut().insert(version, pages);
        }
        Err(err) => error!(php_version = %version, error = %err, "render failed"),
    }
}

fn write_page(out_dir: &Path, page: &RenderedPage) -> Result<WrittenPage> {
    let path = out_dir.join(&page.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&path, &page.html).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), bytes = page.html.len(), "wrote page");
    Ok(WrittenPage {
        version: page.version,
        route: page.route,
        path,
        bytes: page.html.len(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use docs_model::SiteConfig;

    use super::*;

    fn ctx() -> RenderContext {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        RenderContext::new(SiteConfig::default(), date)
    }

    #[test]
    fn default_tree_includes_not_found() {
        let pages = render_version(&ctx(), PhpVersion::Php83).unwrap();
        let routes: Vec<Route> = pages.iter().map(|page| page.route).collect();
        assert!(routes.contains(&Route::NotFound));
        assert_eq!(pages.len(), Route::all().len() + 1);
    }

    #[test]
    fn other_trees_live_under_version_dir() {
        let pages = render_version(&ctx(), PhpVersion::Php82).unwrap();
        assert_eq!(pages.len(), Route::all().len());
        for page in &pages {
            assert!(page.path.starts_with("php-8.2"), "{}", page.path.display());
        }
    }

    #[test]
    fn subscription_rerenders_on_selection() {
        let builder = SiteBuilder::new(ctx());
        let mut store = VersionStore::default();
        builder.subscribe(&mut store);
        assert!(builder.rendered(PhpVersion::Php83).is_some());
        assert!(builder.rendered(PhpVersion::Php82).is_none());

        store.select(PhpVersion::Php82).unwrap();
        let pages = builder.rendered(PhpVersion::Php82).unwrap();
        assert!(pages.iter().all(|page| page.version == PhpVersion::Php82));
    }
}
