//! Pre-authored pages of the Laravel server docs.
//!
//! Pages are assembled on demand for a PHP version. Only a handful of
//! commands actually differ between versions; those live in [`variants`].

pub mod commands;
pub mod guide;
pub mod integration;
pub mod not_found;
pub mod notifications;
pub mod troubleshooting;
pub mod variants;

use chrono::NaiveDate;
use docs_model::{Anchor, Page, PhpVersion, Route};

pub use commands::commands_page;
pub use guide::{COMPOSER_VERSION, GUIDE_ANCHORS, guide_page};
pub use integration::integration_intro_page;
pub use not_found::not_found_page;
pub use notifications::{notification_groups, notifications_page};
pub use troubleshooting::troubleshooting_page;
pub use variants::{QuickReference, VersionContent};

/// Long-form date used in "Updated" badges (`October 19, 2026`).
pub fn format_updated(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Build the page for `route` as it reads for `version`.
pub fn page_for(route: Route, version: PhpVersion, updated_on: NaiveDate) -> Page {
    let updated = format_updated(updated_on);
    match route {
        Route::Home => guide_page(version),
        Route::Troubleshooting => troubleshooting_page(version),
        Route::Commands => commands_page(version),
        Route::Integration => integration_intro_page(&updated),
        Route::IntegrationNotifications => notifications_page(&updated),
        Route::NotFound => not_found_page(),
    }
}

/// Quick reference table rows for `version`.
pub fn quick_reference_rows(version: PhpVersion) -> Vec<QuickReference> {
    variants::quick_reference_commands().get(version).clone()
}

/// Entries of the navbar "Sections" menu; they point into the guide.
pub fn navbar_sections() -> Vec<Anchor> {
    GUIDE_ANCHORS
        .iter()
        .map(|(id, label)| Anchor::new(*id, *label))
        .collect()
}
