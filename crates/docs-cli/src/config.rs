//! Site configuration assembly.
//!
//! Precedence: command line flag, then config file, then the base path baked
//! in at build time (`DOCS_BASE_PATH`), then built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use docs_model::{PhpVersion, SiteConfig};
use tracing::debug;

/// Command line overrides for [`SiteConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_path: Option<String>,
    pub default_version: Option<PhpVersion>,
}

pub fn load_site_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<SiteConfig> {
    let mut config = match path {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            SiteConfig::from_toml_str(&source)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => SiteConfig::default(),
    };
    if let Some(base_path) = &overrides.base_path {
        config.base_path.clone_from(base_path);
    }
    if let Some(version) = overrides.default_version {
        config.default_version = version;
    }
    debug!(
        base_path = %config.base_path,
        default_version = %config.default_version,
        "site config loaded"
    );
    Ok(config)
}
