//! Scrollable host abstraction.
//!
//! [`ScrollHost`] is the seam between navigation logic and whatever actually
//! scrolls: the browser window in a wasm build, or [`MemoryViewport`] for
//! headless use and tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

/// How a programmatic scroll should move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Something with a vertical scroll position and addressable sections.
pub trait ScrollHost {
    /// Registration token returned by [`ScrollHost::add_scroll_listener`].
    type Listener;

    /// Current vertical scroll offset in pixels.
    fn scroll_y(&self) -> f64;

    /// Document offset of the element with `id`, if it is rendered.
    fn offset_top(&self, id: &str) -> Option<f64>;

    /// Scroll the element with `id` into view. Returns `false` if it is not rendered.
    fn scroll_into_view(&self, id: &str, behavior: ScrollBehavior) -> bool;

    fn scroll_to_top(&self, behavior: ScrollBehavior);

    fn add_scroll_listener(&self, callback: Box<dyn FnMut()>) -> Self::Listener;

    fn remove_scroll_listener(&self, listener: Self::Listener);
}

/// Smooth-scroll to a section. Missing sections are ignored.
pub fn scroll_to_section<H: ScrollHost + ?Sized>(host: &H, id: &str) -> bool {
    let found = host.scroll_into_view(id, ScrollBehavior::Smooth);
    if !found {
        debug!(section_id = %id, "scroll target not rendered");
    }
    found
}

/// Token for a [`MemoryViewport`] listener.
#[derive(Debug, PartialEq, Eq)]
pub struct MemoryListener(u64);

type Listeners = Vec<(u64, Box<dyn FnMut()>)>;

/// In-memory scroll host.
///
/// Sections are placed at fixed document offsets; scrolling updates the
/// position and dispatches to listeners the way a window `scroll` event does.
/// Listeners may scroll the viewport or add and remove listeners while being
/// dispatched; a scroll made from inside a listener is not delivered back to
/// the listeners of the running dispatch.
#[derive(Default)]
pub struct MemoryViewport {
    scroll_y: Cell<f64>,
    offsets: RefCell<BTreeMap<String, f64>>,
    listeners: RefCell<Listeners>,
    next_listener: Cell<u64>,
    /// Listeners taken out by the dispatches in progress.
    in_flight: Cell<usize>,
    dispatch_depth: Cell<usize>,
    /// Ids removed while a dispatch was running.
    removed: RefCell<Vec<u64>>,
}

impl fmt::Debug for MemoryViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryViewport")
            .field("scroll_y", &self.scroll_y.get())
            .field("offsets", &self.offsets.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl MemoryViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Viewport with sections already placed.
    pub fn with_sections<'a>(sections: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let viewport = Self::new();
        for (id, top) in sections {
            viewport.place(id, top);
        }
        viewport
    }

    /// Render (or move) a section at `top`.
    pub fn place(&self, id: &str, top: f64) {
        self.offsets.borrow_mut().insert(id.to_string(), top);
    }

    /// Stop rendering a section.
    pub fn remove(&self, id: &str) {
        self.offsets.borrow_mut().remove(id);
    }

    /// Scroll to `y` and dispatch a scroll event.
    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y.max(0.0));
        self.dispatch();
    }

    pub fn listener_count(&self) -> usize {
        let removed = self.removed.borrow().len();
        (self.listeners.borrow().len() + self.in_flight.get()).saturating_sub(removed)
    }

    fn is_removed(&self, id: u64) -> bool {
        self.removed.borrow().contains(&id)
    }

    fn dispatch(&self) {
        let mut running = std::mem::take(&mut *self.listeners.borrow_mut());
        self.in_flight.set(self.in_flight.get() + running.len());
        self.dispatch_depth.set(self.dispatch_depth.get() + 1);

        for (id, callback) in &mut running {
            if !self.is_removed(*id) {
                callback();
            }
        }

        self.dispatch_depth.set(self.dispatch_depth.get() - 1);
        self.in_flight.set(self.in_flight.get() - running.len());
        running.retain(|(id, _)| !self.is_removed(*id));
        let mut listeners = self.listeners.borrow_mut();
        running.append(&mut listeners);
        *listeners = running;
        if self.dispatch_depth.get() == 0 {
            self.removed.borrow_mut().clear();
        }
    }
}

impl ScrollHost for MemoryViewport {
    type Listener = MemoryListener;

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.offsets.borrow().get(id).copied()
    }

    fn scroll_into_view(&self, id: &str, _behavior: ScrollBehavior) -> bool {
        let Some(top) = self.offset_top(id) else {
            return false;
        };
        self.scroll_to(top);
        true
    }

    fn scroll_to_top(&self, _behavior: ScrollBehavior) {
        self.scroll_to(0.0);
    }

    fn add_scroll_listener(&self, callback: Box<dyn FnMut()>) -> MemoryListener {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, callback));
        MemoryListener(id)
    }

    fn remove_scroll_listener(&self, listener: MemoryListener) {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != listener.0);
        if listeners.len() == before && self.dispatch_depth.get() > 0 {
            // Taken out by a running dispatch.
            self.removed.borrow_mut().push(listener.0);
        }
    }
}
