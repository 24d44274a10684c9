//! [`ScrollHost`] over the browser window.

use std::rc::Rc;

use docs_model::{Anchor, SectionGroup};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, HtmlElement, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::scroll_spy::ScrollSpyBinding;
use crate::sidebar::group_has_active;
use crate::viewport::{ScrollBehavior, ScrollHost};

fn to_web(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    }
}

/// The page's `window`.
#[derive(Debug, Clone)]
pub struct WindowScrollHost {
    window: Window,
    document: Document,
}

/// Registered `scroll` handler. Keeps the JS closure alive until removed.
pub struct WindowListener {
    closure: Closure<dyn FnMut()>,
}

impl WindowScrollHost {
    /// `None` outside a browsing context.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            warn!(selector, "invalid selector");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    /// Mark the menu entries for `active` and the group headers holding it.
    pub fn highlight(&self, active: Option<&str>, groups: &[SectionGroup]) {
        for link in self.query_all("a[data-section]") {
            let section = link.get_attribute("data-section");
            set_class(&link, "active", active.is_some() && section.as_deref() == active);
        }
        for details in self.query_all("details[data-group]") {
            let Some(group_id) = details.get_attribute("data-group") else {
                continue;
            };
            let lit = groups
                .iter()
                .find(|group| group.id == group_id)
                .is_some_and(|group| group_has_active(group, active));
            if let Ok(Some(summary)) = details.query_selector("summary.group-header") {
                set_class(&summary, "active", lit);
            }
        }
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(error) = element.class_list().toggle_with_force(class, on) {
        warn!(?error, class, "failed to update class");
    }
}

impl ScrollHost for WindowScrollHost {
    type Listener = WindowListener;

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.element(id).map(|element| f64::from(element.offset_top()))
    }

    fn scroll_into_view(&self, id: &str, behavior: ScrollBehavior) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(to_web(behavior));
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_top(&self, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(to_web(behavior));
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn add_scroll_listener(&self, callback: Box<dyn FnMut()>) -> WindowListener {
        let closure = Closure::wrap(callback);
        if let Err(error) = self
            .window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            warn!(?error, "failed to register scroll listener");
        }
        WindowListener { closure }
    }

    fn remove_scroll_listener(&self, listener: WindowListener) {
        if let Err(error) = self.window.remove_event_listener_with_callback(
            "scroll",
            listener.closure.as_ref().unchecked_ref(),
        ) {
            warn!(?error, "failed to remove scroll listener");
        }
    }
}

/// Track `anchors` against the window for as long as the binding lives,
/// keeping the menu highlight in step with the active section.
pub fn mount_scroll_spy(
    anchors: Vec<Anchor>,
    groups: Vec<SectionGroup>,
) -> Option<ScrollSpyBinding<WindowScrollHost>> {
    let host = Rc::new(WindowScrollHost::new()?);
    let binding = ScrollSpyBinding::attach(Rc::clone(&host), anchors);
    host.highlight(binding.active_section().as_deref(), &groups);

    let weak = Rc::downgrade(&host);
    binding.on_change(move |active| {
        if let Some(host) = weak.upgrade() {
            host.highlight(active, &groups);
        }
    });
    Some(binding)
}
