//! Navigation and footer around the page body.

use anyhow::Result;
use docs_content::navbar_sections;
use docs_core::{ExpandedGroups, INTEGRATION_TABS, is_integration_home, is_tab_active};
use docs_model::{Anchor, Page, Route, SectionGroup};

use crate::common::HtmlWriter;
use crate::context::RenderContext;

/// Top-level pages linked from the navbar.
const NAV_ROUTES: [Route; 4] = [
    Route::Home,
    Route::Troubleshooting,
    Route::Commands,
    Route::Integration,
];

fn nav_is_active(nav: Route, current: Route) -> bool {
    nav == current || (nav == Route::Integration && current.is_integration())
}

pub(crate) fn write_navbar(html: &mut HtmlWriter, page: &Page, ctx: &RenderContext) -> Result<()> {
    html.start("nav", &[("class", "navbar")])?;
    let home = ctx.href(Route::Home);
    html.start("a", &[("class", "logo"), ("href", &home)])?;
    html.icon("server")?;
    html.text(&ctx.config.site_name)?;
    html.end("a")?;

    html.start("ul", &[("class", "nav-links")])?;
    for route in NAV_ROUTES {
        let href = ctx.href(route);
        let mut attrs = vec![("href", href.as_str())];
        if nav_is_active(route, page.route) {
            attrs.push(("class", "active"));
            attrs.push(("aria-current", "page"));
        }
        html.start("li", &[])?;
        html.text_element("a", &attrs, route.name())?;
        html.end("li")?;
    }

    html.start("li", &[])?;
    html.start("details", &[("class", "sections-menu")])?;
    html.start("summary", &[])?;
    html.text("Sections")?;
    html.icon("chevron-down")?;
    html.end("summary")?;
    html.start("ul", &[])?;
    for anchor in navbar_sections() {
        let href = format!("{home}#{}", anchor.id);
        html.start("li", &[])?;
        html.text_element(
            "a",
            &[("href", &href), ("data-section", &anchor.id)],
            &anchor.label,
        )?;
        html.end("li")?;
    }
    html.end("ul")?;
    html.end("details")?;
    html.end("li")?;

    html.start("li", &[])?;
    html.text_element("a", &[("href", "#contact")], "Contact Me")?;
    html.end("li")?;
    html.end("ul")?;

    write_version_switcher(html, page, ctx)?;
    html.end("nav")
}

/// Links to the current page in every available version tree.
fn write_version_switcher(html: &mut HtmlWriter, page: &Page, ctx: &RenderContext) -> Result<()> {
    // The not-found page only exists once; switch to each tree's home instead.
    let target = if page.route == Route::NotFound {
        Route::Home
    } else {
        page.route
    };
    html.start(
        "div",
        &[
            ("class", "version-switcher"),
            ("role", "group"),
            ("aria-label", "PHP version"),
        ],
    )?;
    for version in &ctx.available {
        let href = ctx.router.href(target, Some(*version));
        let label = format!("PHP {version}");
        let class = if *version == ctx.version {
            "version-option active"
        } else {
            "version-option"
        };
        html.text_element(
            "a",
            &[
                ("href", &href),
                ("class", class),
                ("data-php-version", version.as_str()),
            ],
            &label,
        )?;
    }
    html.end("div")
}

/// Left tab list shared by the integration pages.
pub(crate) fn write_integration_tabs(
    html: &mut HtmlWriter,
    page: &Page,
    ctx: &RenderContext,
) -> Result<()> {
    if !page.route.is_integration() {
        return Ok(());
    }
    html.start("aside", &[("class", "integration-tabs")])?;
    html.start("nav", &[("aria-label", "Integrations")])?;
    html.start("ul", &[])?;
    for tab in &INTEGRATION_TABS {
        html.start("li", &[])?;
        match tab.route {
            Some(route) => {
                let href = ctx.href(route);
                let class = if is_tab_active(tab, page.route.path()) {
                    "tab active"
                } else {
                    "tab"
                };
                html.start("a", &[("href", &href), ("class", class)])?;
                html.icon(tab.icon)?;
                html.text(tab.label)?;
                html.end("a")?;
            }
            None => {
                html.start(
                    "span",
                    &[("class", "tab disabled"), ("aria-disabled", "true")],
                )?;
                html.icon(tab.icon)?;
                html.text(tab.label)?;
                html.text_element("span", &[("class", "soon")], "Soon")?;
                html.end("span")?;
            }
        }
        html.end("li")?;
    }
    html.end("ul")?;
    html.end("nav")?;
    html.end("aside")
}

/// Right-hand "On this page" menu.
///
/// Pages with section groups get collapsible groups; other pages with anchors
/// get a flat list. The integration home has no menu. Nothing is marked
/// active here; the scroll-spy highlights entries in the browser.
pub(crate) fn write_on_this_page(html: &mut HtmlWriter, page: &Page) -> Result<()> {
    if is_integration_home(page.route.path()) {
        return Ok(());
    }
    let anchors = page.anchors();
    if !page.groups.is_empty() {
        html.start(
            "aside",
            &[("class", "on-this-page"), ("data-scroll-spy", "grouped")],
        )?;
        html.text_element("p", &[("class", "on-this-page-title")], "On this page")?;
        write_groups(html, &page.groups)?;
        html.end("aside")
    } else if !anchors.is_empty() {
        html.start(
            "aside",
            &[("class", "on-this-page"), ("data-scroll-spy", "flat")],
        )?;
        html.text_element("p", &[("class", "on-this-page-title")], "On this page")?;
        write_anchor_list(html, &anchors)?;
        html.end("aside")
    } else {
        Ok(())
    }
}

fn write_groups(html: &mut HtmlWriter, groups: &[SectionGroup]) -> Result<()> {
    let expanded = ExpandedGroups::all_expanded(groups);
    for group in groups {
        let mut attrs = vec![("class", "section-group"), ("data-group", group.id.as_str())];
        if expanded.is_expanded(&group.id) {
            attrs.push(("open", "open"));
        }
        html.start("details", &attrs)?;
        html.text_element("summary", &[("class", "group-header")], &group.label)?;
        write_anchor_list(html, &group.sections)?;
        html.end("details")?;
    }
    Ok(())
}

fn write_anchor_list(html: &mut HtmlWriter, anchors: &[Anchor]) -> Result<()> {
    html.start("ul", &[])?;
    for anchor in anchors {
        let href = format!("#{}", anchor.id);
        html.start("li", &[])?;
        html.text_element(
            "a",
            &[("href", &href), ("data-section", &anchor.id)],
            &anchor.label,
        )?;
        html.end("li")?;
    }
    html.end("ul")
}

fn social_icon(label: &str) -> &'static str {
    match label.to_ascii_lowercase().as_str() {
        "facebook" => "facebook",
        "github" => "github",
        "linkedin" => "linkedin",
        "email" => "mail",
        "phone" => "phone",
        _ => "link",
    }
}

pub(crate) fn write_footer(html: &mut HtmlWriter, ctx: &RenderContext) -> Result<()> {
    html.start("footer", &[("id", "contact"), ("class", "footer")])?;
    html.start("div", &[("class", "hire-me")])?;
    html.start("h3", &[])?;
    html.text("Want to ")?;
    html.text_element("span", &[("class", "accent")], "Hire Me")?;
    html.text("?")?;
    html.end("h3")?;
    html.text_element(
        "p",
        &[],
        "I'm available for freelance projects. Feel free to reach out through any of the channels below.",
    )?;
    html.end("div")?;

    html.start("div", &[("class", "social-links")])?;
    for link in &ctx.config.social_links {
        html.start(
            "a",
            &[
                ("href", &link.href),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
                ("aria-label", &link.label),
                ("title", &link.placeholder),
            ],
        )?;
        html.icon(social_icon(&link.label))?;
        html.text_element("span", &[], &link.label)?;
        html.end("a")?;
    }
    html.end("div")?;

    html.start("div", &[("class", "copyright")])?;
    html.text_element(
        "p",
        &[],
        &format!(
            "© {} Laravel Server Documentation. All rights reserved.",
            ctx.year()
        ),
    )?;
    html.text_element("p", &[], "Made with ❤️ for the developer community")?;
    html.end("div")?;
    html.end("footer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_nav_entry_covers_child_pages() {
        assert!(nav_is_active(Route::Integration, Route::IntegrationNotifications));
        assert!(nav_is_active(Route::Commands, Route::Commands));
        assert!(!nav_is_active(Route::Home, Route::Commands));
    }

    #[test]
    fn unknown_social_labels_get_generic_icon() {
        assert_eq!(social_icon("GitHub"), "github");
        assert_eq!(social_icon("Email"), "mail");
        assert_eq!(social_icon("Mastodon"), "link");
    }
}
