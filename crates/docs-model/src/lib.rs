pub mod anchor;
pub mod config;
pub mod error;
pub mod page;
pub mod route;
pub mod version;

pub use anchor::{Anchor, SectionGroup};
pub use config::{SiteConfig, SocialLink, default_base_path};
pub use error::{DocsError, Result};
pub use page::{
    Block, Callout, CodeBlock, HeaderStyle, Inline, Page, PageHeader, Section, SectionVariant,
    Table, Tone,
};
pub use route::Route;
pub use version::{PerVersion, PhpVersion, VersionState};
