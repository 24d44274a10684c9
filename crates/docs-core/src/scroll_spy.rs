//! Scroll-spy: which section is in view.
//!
//! [`active_index`] is the whole algorithm. [`ScrollSpy`] adds memory of the
//! last answer and [`ScrollSpyBinding`] wires it to a [`ScrollHost`] for as
//! long as the binding lives.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use docs_model::Anchor;
use tracing::trace;

use crate::viewport::{ScrollHost, scroll_to_section};

/// Height of the fixed navbar plus breathing room, in pixels.
pub const HEADER_OFFSET: f64 = 150.0;

/// Index of the last section whose top is at or above `scroll_y + threshold`.
///
/// `None` entries are sections that are not rendered and never match.
pub fn active_index(scroll_y: f64, offsets: &[Option<f64>], threshold: f64) -> Option<usize> {
    let effective = scroll_y + threshold;
    offsets
        .iter()
        .rposition(|top| top.is_some_and(|top| top <= effective))
}

/// Active section tracker for one page.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    anchors: Vec<Anchor>,
    active: Option<String>,
    threshold: f64,
}

impl ScrollSpy {
    pub fn new(anchors: Vec<Anchor>) -> Self {
        Self {
            anchors,
            active: None,
            threshold: HEADER_OFFSET,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute from the host's scroll position.
    ///
    /// When no section qualifies the previous answer is kept.
    pub fn update<H: ScrollHost + ?Sized>(&mut self, host: &H) -> Option<&str> {
        self.refresh(host);
        self.active.as_deref()
    }

    /// Like [`ScrollSpy::update`], returning whether the active section changed.
    pub fn refresh<H: ScrollHost + ?Sized>(&mut self, host: &H) -> bool {
        let offsets: Vec<Option<f64>> = self
            .anchors
            .iter()
            .map(|anchor| host.offset_top(&anchor.id))
            .collect();
        let Some(index) = active_index(host.scroll_y(), &offsets, self.threshold) else {
            return false;
        };
        let id = &self.anchors[index].id;
        if self.active.as_deref() == Some(id.as_str()) {
            return false;
        }
        trace!(section_id = %id, "active section changed");
        self.active = Some(id.clone());
        true
    }
}

type ChangeHook = Box<dyn FnMut(Option<&str>)>;

/// A [`ScrollSpy`] subscribed to a host's scroll events.
///
/// The listener is registered by [`ScrollSpyBinding::attach`] and removed when
/// the binding is dropped.
pub struct ScrollSpyBinding<H: ScrollHost + 'static> {
    host: Rc<H>,
    spy: Rc<RefCell<ScrollSpy>>,
    on_change: Rc<RefCell<Option<ChangeHook>>>,
    listener: Option<H::Listener>,
}

impl<H: ScrollHost + 'static> fmt::Debug for ScrollSpyBinding<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSpyBinding")
            .field("spy", &self.spy.borrow())
            .field("listening", &self.listener.is_some())
            .finish()
    }
}

impl<H: ScrollHost + 'static> ScrollSpyBinding<H> {
    /// Start tracking `anchors` on `host`, resolving the active section immediately.
    ///
    /// An empty anchor list registers no listener.
    pub fn attach(host: Rc<H>, anchors: Vec<Anchor>) -> Self {
        Self::attach_with_threshold(host, anchors, HEADER_OFFSET)
    }

    pub fn attach_with_threshold(host: Rc<H>, anchors: Vec<Anchor>, threshold: f64) -> Self {
        let is_empty = anchors.is_empty();
        let spy = Rc::new(RefCell::new(ScrollSpy::new(anchors).with_threshold(threshold)));
        let on_change: Rc<RefCell<Option<ChangeHook>>> = Rc::new(RefCell::new(None));
        if is_empty {
            return Self {
                host,
                spy,
                on_change,
                listener: None,
            };
        }

        spy.borrow_mut().update(host.as_ref());

        let host_weak: Weak<H> = Rc::downgrade(&host);
        let spy_ref = Rc::clone(&spy);
        let hook_ref = Rc::clone(&on_change);
        let listener = host.add_scroll_listener(Box::new(move || {
            let Some(host) = host_weak.upgrade() else {
                return;
            };
            let active = {
                let mut spy = spy_ref.borrow_mut();
                if !spy.refresh(host.as_ref()) {
                    return;
                }
                spy.active().map(str::to_string)
            };
            // A hook that scrolls synchronously must not re-enter itself.
            if let Ok(mut hook) = hook_ref.try_borrow_mut()
                && let Some(hook) = hook.as_mut()
            {
                hook(active.as_deref());
            }
        }));

        Self {
            host,
            spy,
            on_change,
            listener: Some(listener),
        }
    }

    /// Call `hook` with the new active section each time it changes.
    ///
    /// Replaces any previous hook. The section active when the hook is
    /// installed is not reported; read it with [`ScrollSpyBinding::active_section`].
    pub fn on_change(&self, hook: impl FnMut(Option<&str>) + 'static) {
        *self.on_change.borrow_mut() = Some(Box::new(hook));
    }

    pub fn active_section(&self) -> Option<String> {
        self.spy.borrow().active().map(str::to_string)
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        self.spy.borrow().anchors().to_vec()
    }

    /// Smooth-scroll to `id`. Returns `false` if the section is not rendered.
    pub fn scroll_to(&self, id: &str) -> bool {
        scroll_to_section(self.host.as_ref(), id)
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }
}

impl<H: ScrollHost + 'static> Drop for ScrollSpyBinding<H> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.remove_scroll_listener(listener);
        }
    }
}
