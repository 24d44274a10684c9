//! Page body: header, lead and sections.

use anyhow::Result;
use docs_model::{
    Block, Callout, CodeBlock, HeaderStyle, Inline, Page, PageHeader, Section, Table,
};

use crate::chrome;
use crate::common::HtmlWriter;
use crate::context::RenderContext;

/// Render a complete HTML document for `page`.
pub fn render_page(page: &Page, ctx: &RenderContext) -> Result<String> {
    let mut html = HtmlWriter::new();
    html.doctype()?;
    html.start("html", &[("lang", "en")])?;
    write_head(&mut html, page)?;

    html.start(
        "body",
        &[
            ("data-php-version", ctx.version.as_str()),
            ("data-route", page.route.path()),
        ],
    )?;
    chrome::write_navbar(&mut html, page, ctx)?;

    html.start("div", &[("class", "layout")])?;
    chrome::write_integration_tabs(&mut html, page, ctx)?;
    html.start("main", &[("id", "content"), ("class", "content")])?;
    if let Some(header) = &page.header {
        write_header(&mut html, header, ctx)?;
    }
    write_blocks(&mut html, &page.lead, ctx)?;
    for section in &page.sections {
        write_section(&mut html, section, ctx)?;
    }
    html.end("main")?;
    chrome::write_on_this_page(&mut html, page)?;
    html.end("div")?;

    chrome::write_footer(&mut html, ctx)?;
    html.end("body")?;
    html.end("html")?;
    html.into_string()
}

fn write_head(html: &mut HtmlWriter, page: &Page) -> Result<()> {
    html.start("head", &[])?;
    html.void("meta", &[("charset", "utf-8")])?;
    html.void(
        "meta",
        &[
            ("name", "viewport"),
            ("content", "width=device-width, initial-scale=1"),
        ],
    )?;
    html.text_element("title", &[], &page.title)?;
    html.void(
        "meta",
        &[("name", "description"), ("content", &page.description)],
    )?;
    if let Some(keywords) = &page.keywords {
        html.void("meta", &[("name", "keywords"), ("content", keywords)])?;
    }
    html.end("head")
}

fn write_header(html: &mut HtmlWriter, header: &PageHeader, ctx: &RenderContext) -> Result<()> {
    let class = match header.style {
        HeaderStyle::Hero => "hero",
        HeaderStyle::Banner => "page-header",
    };
    html.start("header", &[("class", class)])?;
    if let Some(icon) = &header.icon {
        html.start("div", &[("class", "header-icon")])?;
        html.icon(icon)?;
        html.end("div")?;
    }
    html.text_element("h1", &[], &header.title)?;
    html.text_element("p", &[("class", "subtitle")], &header.subtitle)?;

    if !header.badges.is_empty() || header.updated.is_some() {
        html.start("div", &[("class", "badges")])?;
        for badge in &header.badges {
            html.text_element("span", &[("class", "badge")], badge)?;
        }
        if let Some(updated) = &header.updated {
            html.start("span", &[("class", "badge badge-live")])?;
            html.empty_element("span", &[("class", "pulse")])?;
            html.text(&format!("Updated: {updated}"))?;
            html.end("span")?;
        }
        html.end("div")?;
    }

    if let Some(notice) = &header.notice {
        html.start("p", &[("class", "notice")])?;
        html.icon("info")?;
        write_inlines(html, notice, ctx)?;
        html.end("p")?;
    }

    if let Some(anchor) = &header.start_anchor {
        let href = format!("#{anchor}");
        html.start("a", &[("class", "start-reading"), ("href", &href)])?;
        html.text("Start Reading")?;
        html.icon("chevron-down")?;
        html.end("a")?;
    }
    html.end("header")
}

fn write_section(html: &mut HtmlWriter, section: &Section, ctx: &RenderContext) -> Result<()> {
    let class = format!("doc-section variant-{}", section.variant.as_str());
    html.start("section", &[("id", &section.id), ("class", &class)])?;
    html.start("h2", &[])?;
    if let Some(icon) = &section.icon {
        html.icon(icon)?;
    }
    html.text(&section.title)?;
    html.end("h2")?;
    write_blocks(html, &section.blocks, ctx)?;
    html.end("section")
}

fn write_blocks(html: &mut HtmlWriter, blocks: &[Block], ctx: &RenderContext) -> Result<()> {
    for block in blocks {
        write_block(html, block, ctx)?;
    }
    Ok(())
}

fn write_block(html: &mut HtmlWriter, block: &Block, ctx: &RenderContext) -> Result<()> {
    match block {
        Block::Paragraph(inlines) => {
            html.start("p", &[])?;
            write_inlines(html, inlines, ctx)?;
            html.end("p")
        }
        Block::Note(inlines) => {
            html.start("p", &[("class", "note")])?;
            write_inlines(html, inlines, ctx)?;
            html.end("p")
        }
        Block::Heading { level, text } => {
            let tag = format!("h{}", (*level).clamp(2, 6));
            html.text_element(&tag, &[], text)
        }
        Block::Code(code) => write_code_block(html, code),
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            html.start(tag, &[])?;
            for item in items {
                html.start("li", &[])?;
                write_inlines(html, item, ctx)?;
                html.end("li")?;
            }
            html.end(tag)
        }
        Block::Table(table) => write_table(html, table, ctx),
        Block::Callout(callout) => write_callout(html, callout, ctx),
    }
}

/// Code sample with a language label and a copy button.
fn write_code_block(html: &mut HtmlWriter, code: &CodeBlock) -> Result<()> {
    html.start("div", &[("class", "code-block")])?;
    html.start("div", &[("class", "code-header")])?;
    html.text_element("span", &[("class", "code-language")], &code.language)?;
    html.start(
        "button",
        &[
            ("type", "button"),
            ("class", "copy-button"),
            ("data-copy", &code.code),
            ("aria-label", "Copy code"),
        ],
    )?;
    html.icon("copy")?;
    html.end("button")?;
    html.end("div")?;
    let class = format!("language-{}", code.language);
    html.start("pre", &[])?;
    html.text_element("code", &[("class", &class)], &code.code)?;
    html.end("pre")?;
    html.end("div")
}

fn write_table(html: &mut HtmlWriter, table: &Table, ctx: &RenderContext) -> Result<()> {
    html.start("div", &[("class", "table-wrapper")])?;
    html.start("table", &[])?;
    html.start("thead", &[])?;
    html.start("tr", &[])?;
    for header in &table.headers {
        html.text_element("th", &[], header)?;
    }
    html.end("tr")?;
    html.end("thead")?;
    html.start("tbody", &[])?;
    for row in &table.rows {
        html.start("tr", &[])?;
        for cell in row {
            html.start("td", &[])?;
            write_inlines(html, cell, ctx)?;
            html.end("td")?;
        }
        html.end("tr")?;
    }
    html.end("tbody")?;
    html.end("table")?;
    html.end("div")
}

fn write_callout(html: &mut HtmlWriter, callout: &Callout, ctx: &RenderContext) -> Result<()> {
    let class = format!("callout callout-{}", callout.tone.as_str());
    html.start("div", &[("class", &class)])?;
    if let Some(title) = &callout.title {
        html.text_element("p", &[("class", "callout-title")], title)?;
    }
    write_blocks(html, &callout.blocks, ctx)?;
    html.end("div")
}

fn write_inlines(html: &mut HtmlWriter, inlines: &[Inline], ctx: &RenderContext) -> Result<()> {
    for inline in inlines {
        write_inline(html, inline, ctx)?;
    }
    Ok(())
}

fn write_inline(html: &mut HtmlWriter, inline: &Inline, ctx: &RenderContext) -> Result<()> {
    match inline {
        Inline::Text(text) => html.text(text),
        Inline::Strong(text) => html.text_element("strong", &[], text),
        Inline::Emphasis(text) => html.text_element("em", &[], text),
        Inline::Code(text) => html.text_element("code", &[("class", "inline-code")], text),
        Inline::Link { href, text } if href.starts_with("http") => html.text_element(
            "a",
            &[
                ("href", href),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
            ],
            text,
        ),
        Inline::Link { href, text } => html.text_element("a", &[("href", href)], text),
        Inline::RouteLink { route, text } => {
            let href = ctx.href(*route);
            html.text_element("a", &[("href", &href)], text)
        }
    }
}
