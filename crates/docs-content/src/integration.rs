//! Integration area landing page.

use docs_model::{Block, Callout, HeaderStyle, Inline, Page, PageHeader, Route, Tone};

pub fn integration_intro_page(updated: &str) -> Page {
    Page::new(
        Route::Integration,
        "Integration - Laravel Server Docs",
        "Integration guides for Laravel including notifications, email, and more. Updated documentation with modern best practices.",
    )
    .with_header(
        PageHeader::new(
            HeaderStyle::Banner,
            "Laravel Integrations",
            "Comprehensive guides for integrating essential services into your Laravel application. Including push notifications, email services, and more.",
        )
        .with_updated(updated),
    )
    .with_lead(vec![
        Block::Callout(Callout::new(
            Tone::Warning,
            Some("Why Up-to-Date Documentation Matters"),
            vec![
                Block::Paragraph(vec![
                    Inline::text("Many Laravel integration tutorials online are "),
                    Inline::strong("outdated"),
                    Inline::text(
                        " and recommend installing unnecessary packages or using deprecated methods.",
                    ),
                ]),
                Block::bullets(&[
                    "Version conflicts and dependency issues",
                    "Security vulnerabilities from unmaintained packages",
                    "Wasted time debugging deprecated code",
                ]),
            ],
        )),
        Block::heading(2, "Available Integrations"),
        Block::Callout(Callout::new(
            Tone::Info,
            Some("Push Notifications"),
            vec![
                Block::text("Firebase Cloud Messaging (FCM) setup with Laravel."),
                Block::Paragraph(vec![
                    Inline::code("Firebase"),
                    Inline::text(" "),
                    Inline::code("Laravel"),
                ]),
                Block::Paragraph(vec![Inline::route(
                    Route::IntegrationNotifications,
                    "Read the guide",
                )]),
            ],
        )),
        Block::Callout(Callout::new(
            Tone::Neutral,
            Some("Email Services"),
            vec![
                Block::text("Configure email sending with various providers."),
                Block::note("Coming Soon"),
            ],
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_has_no_anchors() {
        let page = integration_intro_page("October 19, 2026");
        assert!(page.anchors().is_empty());
        assert!(page.groups.is_empty());
        assert!(!page.lead.is_empty());
    }
}
