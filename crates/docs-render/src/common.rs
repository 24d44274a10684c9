//! Markup writing helpers shared by the page and chrome renderers.

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Attribute list for an element.
pub type Attrs<'a> = &'a [(&'a str, &'a str)];

/// HTML document under construction.
///
/// Output is written without indentation so that `<pre>` content is kept
/// byte for byte.
pub struct HtmlWriter {
    xml: Writer<Vec<u8>>,
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self {
            xml: Writer::new(Vec::new()),
        }
    }

    pub fn doctype(&mut self) -> Result<()> {
        self.xml
            .write_event(Event::DocType(BytesText::from_escaped("html")))?;
        Ok(())
    }

    pub fn start(&mut self, name: &str, attrs: Attrs<'_>) -> Result<()> {
        self.xml.write_event(Event::Start(tag(name, attrs)))?;
        Ok(())
    }

    pub fn end(&mut self, name: &str) -> Result<()> {
        self.xml.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Void element such as `<meta>` or `<link>`.
    pub fn void(&mut self, name: &str, attrs: Attrs<'_>) -> Result<()> {
        self.xml.write_event(Event::Empty(tag(name, attrs)))?;
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        self.xml.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Element holding only text.
    pub fn text_element(&mut self, name: &str, attrs: Attrs<'_>, text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    /// Element with no content that still needs a closing tag (`<i></i>`).
    pub fn empty_element(&mut self, name: &str, attrs: Attrs<'_>) -> Result<()> {
        self.start(name, attrs)?;
        self.end(name)
    }

    /// Lucide icon placeholder.
    pub fn icon(&mut self, name: &str) -> Result<()> {
        self.empty_element("i", &[("data-lucide", name), ("aria-hidden", "true")])
    }

    pub fn into_string(self) -> Result<String> {
        String::from_utf8(self.xml.into_inner()).context("rendered HTML is not UTF-8")
    }
}

fn tag<'a>(name: &'a str, attrs: Attrs<'_>) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for (key, value) in attrs {
        start.push_attribute((*key, *value));
    }
    start
}
