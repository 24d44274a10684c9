//! In-page navigation anchors.

use serde::{Deserialize, Serialize};

/// A named, scrollable region of a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    /// Element id the region is rendered with.
    pub id: String,
    /// Text shown in navigation menus.
    pub label: String,
}

impl Anchor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Anchors shown together under one collapsible heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionGroup {
    pub id: String,
    pub label: String,
    pub sections: Vec<Anchor>,
}

impl SectionGroup {
    pub fn new(id: impl Into<String>, label: impl Into<String>, sections: Vec<Anchor>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sections,
        }
    }

    /// Whether an anchor with `id` belongs to this group.
    pub fn contains(&self, id: &str) -> bool {
        self.sections.iter().any(|section| section.id == id)
    }
}
