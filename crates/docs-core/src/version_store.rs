//! Observable PHP version selection.
//!
//! The store is owned by whoever drives the UI and lent out by reference;
//! views that depend on the version subscribe and are called back
//! synchronously whenever the selection changes.

use std::fmt;

use docs_model::{PhpVersion, Result, VersionState};
use tracing::{debug, warn};

/// Handle returned by [`VersionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(PhpVersion)>;

/// Current PHP version plus change subscribers.
pub struct VersionStore {
    state: VersionState,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_id: u64,
}

impl Default for VersionStore {
    fn default() -> Self {
        Self::new(VersionState::default())
    }
}

impl fmt::Debug for VersionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl VersionStore {
    pub fn new(state: VersionState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn current(&self) -> PhpVersion {
        self.state.current()
    }

    pub fn available(&self) -> &[PhpVersion] {
        self.state.available()
    }

    pub fn state(&self) -> &VersionState {
        &self.state
    }

    /// Select a version and notify subscribers if it changed.
    ///
    /// Returns whether the selection changed. Versions outside the available
    /// set are rejected with [`docs_model::DocsError::UnavailableVersion`] and
    /// nobody is notified.
    pub fn select(&mut self, version: PhpVersion) -> Result<bool> {
        let changed = match self.state.select(version) {
            Ok(changed) => changed,
            Err(error) => {
                warn!(requested = %version, "rejected PHP version selection");
                return Err(error);
            }
        };
        if changed {
            debug!(
                php_version = %version,
                subscriber_count = self.subscribers.len(),
                "PHP version changed"
            );
            for (_, subscriber) in &mut self.subscribers {
                subscriber(version);
            }
        }
        Ok(changed)
    }

    /// Register a callback invoked with the new version after every change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(PhpVersion) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
