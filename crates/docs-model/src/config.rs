//! Site configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DocsError, Result};
use crate::version::PhpVersion;

/// Base path baked in at build time, `/` when `DOCS_BASE_PATH` is unset.
pub fn default_base_path() -> &'static str {
    option_env!("DOCS_BASE_PATH").unwrap_or("/")
}

/// Footer contact link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// Human readable handle shown in tooltips.
    pub placeholder: String,
}

impl SocialLink {
    fn new(label: &str, href: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            placeholder: placeholder.to_string(),
        }
    }
}

/// Settings for a site build. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub base_path: String,
    /// Version rendered at the root of the output tree.
    pub default_version: PhpVersion,
    pub social_links: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Laravel Server Docs".to_string(),
            base_path: default_base_path().to_string(),
            default_version: PhpVersion::default(),
            social_links: vec![
                SocialLink::new("Facebook", "#", "facebook.com/yourprofile"),
                SocialLink::new("GitHub", "#", "github.com/yourprofile"),
                SocialLink::new("LinkedIn", "#", "linkedin.com/in/yourprofile"),
                SocialLink::new("Email", "mailto:your@email.com", "your@email.com"),
                SocialLink::new("Phone", "tel:+1234567890", "+1 234 567 890"),
            ],
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document; missing keys fall back to defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|error| DocsError::Config(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = SiteConfig::from_toml_str(
            r#"
base_path = "/docs/"
default_version = "8.2"

[[social_links]]
label = "GitHub"
href = "https://github.com/me"
placeholder = "github.com/me"
"#,
        )
        .unwrap();
        assert_eq!(config.base_path, "/docs/");
        assert_eq!(config.default_version, PhpVersion::Php82);
        assert_eq!(config.social_links.len(), 1);
        assert_eq!(config.site_name, "Laravel Server Docs");
    }

    #[test]
    fn unknown_version_is_config_error() {
        let err = SiteConfig::from_toml_str("default_version = \"7.4\"").unwrap_err();
        assert!(matches!(err, DocsError::Config(_)));
    }
}
