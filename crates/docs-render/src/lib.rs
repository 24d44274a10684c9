//! HTML output for the Laravel server docs.
//!
//! [`render_page`] turns one [`docs_model::Page`] into a standalone HTML5
//! document. [`SiteBuilder`] renders a tree per PHP version and writes the
//! static site.

mod chrome;
pub mod common;
pub mod context;
pub mod page;
pub mod site;

pub use common::HtmlWriter;
pub use context::RenderContext;
pub use page::render_page;
pub use site::{BuildReport, RenderedPage, SiteBuilder, WrittenPage, render_version};
