//! Layout rules for the integration area.
//!
//! The integration pages share a left tab list and a right "On this page"
//! menu. Child pages publish their anchors into an [`OnThisPage`] registry
//! while they are mounted.

use std::cell::RefCell;
use std::rc::Rc;

use docs_model::{Anchor, Route, SectionGroup};
use tracing::debug;

use crate::viewport::{ScrollBehavior, ScrollHost};

/// Entry in the integration tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationTab {
    pub id: &'static str,
    pub label: &'static str,
    /// Route the tab links to; `None` for integrations that are not published yet.
    pub route: Option<Route>,
    /// Lucide icon name.
    pub icon: &'static str,
}

impl IntegrationTab {
    pub fn is_coming_soon(&self) -> bool {
        self.route.is_none()
    }
}

pub const INTEGRATION_TABS: [IntegrationTab; 3] = [
    IntegrationTab {
        id: "introduction",
        label: "Introduction",
        route: Some(Route::Integration),
        icon: "home",
    },
    IntegrationTab {
        id: "notifications",
        label: "Notifications",
        route: Some(Route::IntegrationNotifications),
        icon: "bell",
    },
    IntegrationTab {
        id: "email",
        label: "Email",
        route: None,
        icon: "mail",
    },
];

/// Whether a site-relative path is the integration introduction.
pub fn is_integration_home(path: &str) -> bool {
    path == "/integration" || path == "/integration/"
}

/// Whether `tab` is highlighted for the site-relative `path`.
///
/// The introduction tab matches its own path exactly; the others match any
/// path that contains theirs.
pub fn is_tab_active(tab: &IntegrationTab, path: &str) -> bool {
    let Some(route) = tab.route else {
        return false;
    };
    if route == Route::Integration {
        return is_integration_home(path);
    }
    path.contains(route.path()) && route.path() != Route::Integration.path()
}

#[derive(Debug, Default)]
struct Registered {
    sections: Vec<Anchor>,
    groups: Vec<SectionGroup>,
    generation: u64,
}

/// Anchors published by the currently mounted integration page.
#[derive(Debug, Clone, Default)]
pub struct OnThisPage {
    inner: Rc<RefCell<Registered>>,
}

impl OnThisPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a page's anchors until the returned guard is dropped.
    #[must_use = "dropping the guard clears the menu"]
    pub fn mount(&self, sections: Vec<Anchor>, groups: Vec<SectionGroup>) -> SectionMount {
        let mut inner = self.inner.borrow_mut();
        inner.generation += 1;
        debug!(
            sections = sections.len(),
            groups = groups.len(),
            "mounted on-this-page sections"
        );
        inner.sections = sections;
        inner.groups = groups;
        SectionMount {
            registry: Rc::clone(&self.inner),
            generation: inner.generation,
        }
    }

    pub fn sections(&self) -> Vec<Anchor> {
        self.inner.borrow().sections.clone()
    }

    pub fn groups(&self) -> Vec<SectionGroup> {
        self.inner.borrow().groups.clone()
    }

    /// The right-hand menu is shown for child pages that registered groups.
    pub fn shows_sidebar(&self, path: &str) -> bool {
        !self.inner.borrow().groups.is_empty() && !is_integration_home(path)
    }
}

/// Keeps a page's anchors registered in [`OnThisPage`].
#[derive(Debug)]
pub struct SectionMount {
    registry: Rc<RefCell<Registered>>,
    generation: u64,
}

impl Drop for SectionMount {
    fn drop(&mut self) {
        let mut inner = self.registry.borrow_mut();
        // A newer mount owns the registry now.
        if inner.generation == self.generation {
            inner.sections.clear();
            inner.groups.clear();
        }
    }
}

/// Navigation to a new route starts at the top of the page.
pub fn enter_route<H: ScrollHost + ?Sized>(host: &H) {
    host.scroll_to_top(ScrollBehavior::Instant);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::MemoryViewport;

    fn tab(id: &str) -> &'static IntegrationTab {
        INTEGRATION_TABS
            .iter()
            .find(|tab| tab.id == id)
            .unwrap()
    }

    #[test]
    fn introduction_tab_matches_exact_paths() {
        assert!(is_tab_active(tab("introduction"), "/integration"));
        assert!(is_tab_active(tab("introduction"), "/integration/"));
        assert!(!is_tab_active(tab("introduction"), "/integration/notifications"));
    }

    #[test]
    fn child_tabs_match_contained_paths() {
        assert!(is_tab_active(tab("notifications"), "/integration/notifications"));
        assert!(is_tab_active(tab("notifications"), "/integration/notifications/"));
        assert!(!is_tab_active(tab("notifications"), "/integration"));
    }

    #[test]
    fn coming_soon_tab_is_never_active() {
        let email = tab("email");
        assert!(email.is_coming_soon());
        assert!(!is_tab_active(email, "/integration/email"));
    }

    #[test]
    fn mount_guard_clears_on_drop() {
        let registry = OnThisPage::new();
        let groups = vec![SectionGroup::new(
            "setup",
            "Setup",
            vec![Anchor::new("introduction", "Introduction")],
        )];
        {
            let _mount = registry.mount(groups[0].sections.clone(), groups.clone());
            assert_eq!(registry.sections().len(), 1);
            assert!(registry.shows_sidebar("/integration/notifications"));
            assert!(!registry.shows_sidebar("/integration"));
        }
        assert!(registry.sections().is_empty());
        assert!(!registry.shows_sidebar("/integration/notifications"));
    }

    #[test]
    fn stale_guard_does_not_clear_newer_mount() {
        let registry = OnThisPage::new();
        let first = registry.mount(vec![Anchor::new("a", "A")], Vec::new());
        let _second = registry.mount(vec![Anchor::new("b", "B")], Vec::new());
        drop(first);
        assert_eq!(registry.sections(), vec![Anchor::new("b", "B")]);
    }

    #[test]
    fn entering_route_scrolls_to_top() {
        let viewport = MemoryViewport::new();
        viewport.scroll_to(900.0);
        enter_route(&viewport);
        assert_eq!(viewport.scroll_y(), 0.0);
    }
}
