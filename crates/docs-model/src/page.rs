//! Page content tree.
//!
//! A [`Page`] is a list of [`Section`]s, each of which is a list of
//! [`Block`]s. Pages are assembled per PHP version by the content crate and
//! turned into HTML by the renderer; nothing here knows about markup.

use serde::{Deserialize, Serialize};

use crate::anchor::{Anchor, SectionGroup};
use crate::route::Route;

/// A fully assembled page for one PHP version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub route: Route,
    /// Document title (`<title>`).
    pub title: String,
    /// Meta description.
    pub description: String,
    pub keywords: Option<String>,
    pub header: Option<PageHeader>,
    /// Content shown before the first section, outside any anchor.
    pub lead: Vec<Block>,
    pub sections: Vec<Section>,
    /// Grouping of the section anchors for the "On this page" menu.
    pub groups: Vec<SectionGroup>,
}

impl Page {
    pub fn new(route: Route, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            route,
            title: title.into(),
            description: description.into(),
            keywords: None,
            header: None,
            lead: Vec::new(),
            sections: Vec::new(),
            groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: PageHeader) -> Self {
        self.header = Some(header);
        self
    }

    #[must_use]
    pub fn with_lead(mut self, blocks: Vec<Block>) -> Self {
        self.lead = blocks;
        self
    }

    #[must_use]
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    #[must_use]
    pub fn with_groups(mut self, groups: Vec<SectionGroup>) -> Self {
        self.groups = groups;
        self
    }

    /// Section anchors in document order.
    pub fn anchors(&self) -> Vec<Anchor> {
        self.sections.iter().map(Section::anchor).collect()
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Every code block on the page, including ones nested in callouts.
    pub fn code_blocks(&self) -> Vec<&CodeBlock> {
        let mut out = Vec::new();
        collect_code(&self.lead, &mut out);
        for section in &self.sections {
            collect_code(&section.blocks, &mut out);
        }
        out
    }
}

fn collect_code<'a>(blocks: &'a [Block], out: &mut Vec<&'a CodeBlock>) {
    for block in blocks {
        match block {
            Block::Code(code) => out.push(code),
            Block::Callout(callout) => collect_code(&callout.blocks, out),
            _ => {}
        }
    }
}

/// Visual treatment of a page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderStyle {
    /// Full-height landing hero with a "start reading" link.
    Hero,
    /// Compact centered title block.
    Banner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHeader {
    pub style: HeaderStyle,
    pub title: String,
    pub subtitle: String,
    pub icon: Option<String>,
    pub badges: Vec<String>,
    /// Info strip under the header (e.g. which PHP version is shown).
    pub notice: Option<Vec<Inline>>,
    /// Anchor the "start reading" link scrolls to.
    pub start_anchor: Option<String>,
    /// "Updated" date shown as a live badge.
    pub updated: Option<String>,
}

impl PageHeader {
    pub fn new(style: HeaderStyle, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            style,
            title: title.into(),
            subtitle: subtitle.into(),
            icon: None,
            badges: Vec::new(),
            notice: None,
            start_anchor: None,
            updated: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    #[must_use]
    pub fn with_badges(mut self, badges: Vec<String>) -> Self {
        self.badges = badges;
        self
    }

    #[must_use]
    pub fn with_notice(mut self, notice: Vec<Inline>) -> Self {
        self.notice = Some(notice);
        self
    }

    #[must_use]
    pub fn with_start_anchor(mut self, anchor: &str) -> Self {
        self.start_anchor = Some(anchor.to_string());
        self
    }

    #[must_use]
    pub fn with_updated(mut self, date: impl Into<String>) -> Self {
        self.updated = Some(date.into());
        self
    }
}

/// Framing of a section card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionVariant {
    #[default]
    Default,
    Warning,
    Info,
}

impl SectionVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionVariant::Default => "default",
            SectionVariant::Warning => "warning",
            SectionVariant::Info => "info",
        }
    }
}

/// A titled, anchorable region of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// Shorter label used in menus; defaults to the title.
    pub nav_label: String,
    /// Lucide icon name.
    pub icon: Option<String>,
    pub variant: SectionVariant,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            nav_label: title.clone(),
            title,
            icon: None,
            variant: SectionVariant::Default,
            blocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn nav_label(mut self, label: impl Into<String>) -> Self {
        self.nav_label = label.into();
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: SectionVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn anchor(&self) -> Anchor {
        Anchor::new(self.id.clone(), self.nav_label.clone())
    }
}

/// Block-level content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Vec<Inline>),
    /// De-emphasized paragraph (expected output, hints).
    Note(Vec<Inline>),
    Heading { level: u8, text: String },
    Code(CodeBlock),
    List { ordered: bool, items: Vec<Vec<Inline>> },
    Table(Table),
    Callout(Callout),
}

impl Block {
    /// Paragraph made of a single text run.
    pub fn text(text: impl Into<String>) -> Self {
        Block::Paragraph(vec![Inline::Text(text.into())])
    }

    pub fn note(text: impl Into<String>) -> Self {
        Block::Note(vec![Inline::Text(text.into())])
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    /// Shell code block.
    pub fn code(code: impl Into<String>) -> Self {
        Block::Code(CodeBlock::new(code))
    }

    pub fn code_in(language: &str, code: impl Into<String>) -> Self {
        Block::Code(CodeBlock::new(code).with_language(language))
    }

    /// Unordered list of plain-text items.
    pub fn bullets(items: &[&str]) -> Self {
        Block::List {
            ordered: false,
            items: items
                .iter()
                .map(|item| vec![Inline::Text((*item).to_string())])
                .collect(),
        }
    }
}

/// Copyable code sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub code: String,
    pub language: String,
}

impl CodeBlock {
    pub const DEFAULT_LANGUAGE: &'static str = "bash";

    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: Self::DEFAULT_LANGUAGE.to_string(),
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Vec<Inline>>>,
}

/// Color/intent of a callout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callout {
    pub tone: Tone,
    pub title: Option<String>,
    pub blocks: Vec<Block>,
}

impl Callout {
    pub fn new(tone: Tone, title: Option<&str>, blocks: Vec<Block>) -> Self {
        Self {
            tone,
            title: title.map(str::to_string),
            blocks,
        }
    }
}

/// Inline text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    Text(String),
    Strong(String),
    Emphasis(String),
    Code(String),
    Link { href: String, text: String },
    /// Link to another page of the site, resolved against the version tree
    /// being rendered.
    RouteLink { route: Route, text: String },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Inline::Strong(text.into())
    }

    pub fn em(text: impl Into<String>) -> Self {
        Inline::Emphasis(text.into())
    }

    pub fn code(text: impl Into<String>) -> Self {
        Inline::Code(text.into())
    }

    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Inline::Link {
            href: href.into(),
            text: text.into(),
        }
    }

    pub fn route(route: Route, text: impl Into<String>) -> Self {
        Inline::RouteLink {
            route,
            text: text.into(),
        }
    }
}
