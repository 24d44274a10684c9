//! Version store contract.

use std::cell::RefCell;
use std::rc::Rc;

use docs_core::VersionStore;
use docs_model::{DocsError, PhpVersion, VersionState};

#[test]
fn select_then_current_for_every_available_version() {
    let mut store = VersionStore::default();
    for version in store.available().to_vec() {
        store.select(version).expect("available version");
        assert_eq!(store.current(), version);
    }
}

#[test]
fn unavailable_selection_is_rejected_without_notification() {
    let state = VersionState::new(PhpVersion::Php83, vec![PhpVersion::Php83]).unwrap();
    let mut store = VersionStore::new(state);
    let notified = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notified);
    store.subscribe(move |version| sink.borrow_mut().push(version));

    let err = store.select(PhpVersion::Php82).unwrap_err();
    assert!(matches!(
        err,
        DocsError::UnavailableVersion {
            requested: PhpVersion::Php82,
            ..
        }
    ));
    assert_eq!(store.current(), PhpVersion::Php83);
    assert!(notified.borrow().is_empty());
}

#[test]
fn subscribers_receive_each_change_once() {
    let mut store = VersionStore::default();
    let notified = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notified);
    store.subscribe(move |version| sink.borrow_mut().push(version));

    store.select(PhpVersion::Php82).unwrap();
    store.select(PhpVersion::Php82).unwrap();
    store.select(PhpVersion::Php83).unwrap();
    assert_eq!(
        *notified.borrow(),
        vec![PhpVersion::Php82, PhpVersion::Php83]
    );
}
