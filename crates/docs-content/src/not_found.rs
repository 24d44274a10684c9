use docs_model::{Block, HeaderStyle, Inline, Page, PageHeader, Route};

pub fn not_found_page() -> Page {
    Page::new(
        Route::NotFound,
        "Page Not Found | Laravel Server Docs",
        "The page you are looking for does not exist.",
    )
    .with_header(PageHeader::new(HeaderStyle::Banner, "404", "Oops! Page not found"))
    .with_lead(vec![Block::Paragraph(vec![Inline::route(
        Route::Home,
        "Return to Home",
    )])])
}
