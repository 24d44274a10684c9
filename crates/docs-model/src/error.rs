use thiserror::Error;

use crate::version::PhpVersion;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown PHP version: {0}")]
    UnknownVersion(String),

    #[error("PHP {requested} is not available (available: {available})")]
    UnavailableVersion {
        requested: PhpVersion,
        available: String,
    },

    #[error("invalid version state: {0}")]
    InvalidVersionState(String),

    #[error("invalid site config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DocsError>;
