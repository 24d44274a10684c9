//! Navigation state for the Laravel server docs.
//!
//! Everything here is plain single-threaded state. Hosting environments plug
//! in through [`ScrollHost`]; the `browser` feature provides one for the
//! window of a wasm build.

#[cfg(feature = "browser")]
pub mod browser;
pub mod integration;
pub mod router;
pub mod scroll_spy;
pub mod sidebar;
pub mod version_store;
pub mod viewport;

pub use integration::{
    INTEGRATION_TABS, IntegrationTab, OnThisPage, SectionMount, enter_route, is_integration_home,
    is_tab_active,
};
pub use router::{Resolved, Router};
pub use scroll_spy::{HEADER_OFFSET, ScrollSpy, ScrollSpyBinding, active_index};
pub use sidebar::{ExpandedGroups, group_has_active};
pub use version_store::{SubscriberId, VersionStore};
pub use viewport::{MemoryListener, MemoryViewport, ScrollBehavior, ScrollHost, scroll_to_section};
