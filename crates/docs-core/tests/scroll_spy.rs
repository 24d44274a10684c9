//! Scroll-spy behaviour against an in-memory viewport.

use std::cell::RefCell;
use std::rc::Rc;

use docs_core::{
    HEADER_OFFSET, MemoryViewport, ScrollHost, ScrollSpyBinding, active_index, group_has_active,
    scroll_to_section,
};
use docs_model::{Anchor, SectionGroup};

fn guide_anchors() -> Vec<Anchor> {
    vec![
        Anchor::new("notes", "Notes"),
        Anchor::new("login", "Login"),
        Anchor::new("nginx", "Nginx"),
    ]
}

fn guide_viewport() -> Rc<MemoryViewport> {
    Rc::new(MemoryViewport::with_sections([
        ("notes", 0.0),
        ("login", 100.0),
        ("nginx", 300.0),
    ]))
}

#[test]
fn resolver_fixture() {
    let offsets = [Some(0.0), Some(100.0), Some(300.0)];
    assert_eq!(active_index(250.0, &offsets, HEADER_OFFSET), Some(2));
    assert_eq!(active_index(100.0, &offsets, HEADER_OFFSET), Some(1));
    assert_eq!(active_index(0.0, &offsets, HEADER_OFFSET), Some(1));
    assert_eq!(
        active_index(0.0, &[Some(200.0), Some(400.0)], HEADER_OFFSET),
        None
    );
}

#[test]
fn binding_resolves_on_attach_and_follows_scrolling() {
    let viewport = guide_viewport();
    viewport.scroll_to(100.0);
    let binding = ScrollSpyBinding::attach(Rc::clone(&viewport), guide_anchors());
    assert_eq!(binding.active_section().as_deref(), Some("login"));

    viewport.scroll_to(250.0);
    assert_eq!(binding.active_section().as_deref(), Some("nginx"));

    viewport.scroll_to(0.0);
    assert_eq!(binding.active_section().as_deref(), Some("login"));

    viewport.place("login", 600.0);
    viewport.place("nginx", 900.0);
    viewport.scroll_to(0.0);
    assert_eq!(binding.active_section().as_deref(), Some("notes"));
}

#[test]
fn binding_scroll_to_updates_active_section() {
    let viewport = guide_viewport();
    let binding = ScrollSpyBinding::attach(Rc::clone(&viewport), guide_anchors());
    assert!(binding.scroll_to("nginx"));
    assert_eq!(binding.active_section().as_deref(), Some("nginx"));
    assert!(!binding.scroll_to("contact"));
    assert_eq!(binding.active_section().as_deref(), Some("nginx"));
}

#[test]
fn reattaching_does_not_accumulate_listeners() {
    let viewport = guide_viewport();
    for _ in 0..3 {
        let binding = ScrollSpyBinding::attach(Rc::clone(&viewport), guide_anchors());
        assert_eq!(viewport.listener_count(), 1);
        drop(binding);
        assert_eq!(viewport.listener_count(), 0);
    }
}

#[test]
fn empty_anchor_list_registers_nothing() {
    let viewport = guide_viewport();
    let binding = ScrollSpyBinding::attach(Rc::clone(&viewport), Vec::new());
    assert_eq!(viewport.listener_count(), 0);
    viewport.scroll_to(400.0);
    assert_eq!(binding.active_section(), None);
}

#[test]
fn custom_threshold() {
    let viewport = guide_viewport();
    viewport.scroll_to(50.0);
    let binding = ScrollSpyBinding::attach_with_threshold(Rc::clone(&viewport), guide_anchors(), 0.0);
    assert_eq!(binding.active_section().as_deref(), Some("notes"));
}

#[test]
fn change_hook_fires_once_per_change() {
    let viewport = guide_viewport();
    let binding = ScrollSpyBinding::attach(Rc::clone(&viewport), guide_anchors());
    assert_eq!(binding.active_section().as_deref(), Some("login"));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    binding.on_change(move |active| log.borrow_mut().push(active.map(str::to_string)));

    viewport.scroll_to(50.0);
    viewport.scroll_to(250.0);
    viewport.scroll_to(260.0);
    viewport.scroll_to(0.0);

    assert_eq!(
        *seen.borrow(),
        vec![Some("nginx".to_string()), Some("login".to_string())]
    );
}

#[test]
fn change_hook_drives_group_highlight() {
    let viewport = guide_viewport();
    let groups = vec![
        SectionGroup::new("start", "Start", guide_anchors()[..2].to_vec()),
        SectionGroup::new("server", "Server", guide_anchors()[2..].to_vec()),
    ];
    let binding = ScrollSpyBinding::attach(Rc::clone(&viewport), guide_anchors());

    let highlighted = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&highlighted);
    binding.on_change(move |active| {
        let lit: Vec<String> = groups
            .iter()
            .filter(|group| group_has_active(group, active))
            .map(|group| group.id.clone())
            .collect();
        log.borrow_mut().push(lit);
    });

    viewport.scroll_to(400.0);
    assert_eq!(*highlighted.borrow(), vec![vec!["server".to_string()]]);
}

#[test]
fn change_hook_may_scroll_the_viewport() {
    let viewport = guide_viewport();
    let binding = ScrollSpyBinding::attach(Rc::clone(&viewport), guide_anchors());
    let target = Rc::downgrade(&viewport);
    binding.on_change(move |active| {
        if active == Some("nginx")
            && let Some(viewport) = target.upgrade()
        {
            scroll_to_section(viewport.as_ref(), "notes");
        }
    });

    viewport.scroll_to(300.0);
    assert_eq!(viewport.scroll_y(), 0.0);
    assert_eq!(viewport.listener_count(), 1);

    viewport.scroll_to(10.0);
    assert_eq!(binding.active_section().as_deref(), Some("login"));
}
