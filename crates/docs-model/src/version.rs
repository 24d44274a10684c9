//! PHP version selection types.
//!
//! Content on the site is authored once per supported PHP release. These
//! types keep that set closed: [`PhpVersion`] enumerates the releases,
//! [`VersionState`] tracks which one is selected, and [`PerVersion`] holds one
//! value for every release so that a missing variant is a compile error
//! rather than an empty string at render time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DocsError, Result};

/// Supported PHP release.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhpVersion {
    /// PHP 8.3, the default selection.
    #[default]
    #[serde(rename = "8.3")]
    Php83,

    /// PHP 8.2.
    #[serde(rename = "8.2")]
    Php82,
}

impl PhpVersion {
    /// Every supported release, newest first.
    pub const ALL: [PhpVersion; 2] = [PhpVersion::Php83, PhpVersion::Php82];

    /// Returns the version as written in package names (`8.3`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PhpVersion::Php83 => "8.3",
            PhpVersion::Php82 => "8.2",
        }
    }

    /// systemd unit / apt package of the FPM daemon (`php8.3-fpm`).
    pub fn fpm_service(&self) -> String {
        format!("php{}-fpm", self.as_str())
    }

    /// FastCGI socket that nginx proxies to.
    pub fn fpm_socket(&self) -> String {
        format!("unix:/run/php/php{}-fpm.sock", self.as_str())
    }

    /// URL path segment used for the version tree (`php-8.3`).
    pub fn path_segment(&self) -> String {
        format!("php-{}", self.as_str())
    }
}

impl fmt::Display for PhpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PhpVersion {
    type Err = DocsError;

    /// Accepts `8.3`, `php8.3` and `php-8.3`, case-insensitive.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let bare = normalized
            .strip_prefix("php-")
            .or_else(|| normalized.strip_prefix("php"))
            .unwrap_or(&normalized);

        match bare.trim() {
            "8.3" => Ok(PhpVersion::Php83),
            "8.2" => Ok(PhpVersion::Php82),
            _ => Err(DocsError::UnknownVersion(s.to_string())),
        }
    }
}

/// Selected version plus the ordered set it may be chosen from.
///
/// The selected version is always a member of the available set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionState {
    current: PhpVersion,
    available: Vec<PhpVersion>,
}

impl Default for VersionState {
    fn default() -> Self {
        Self {
            current: PhpVersion::Php83,
            available: PhpVersion::ALL.to_vec(),
        }
    }
}

impl VersionState {
    /// Build a state, checking that `current` is offered and the set has no duplicates.
    pub fn new(current: PhpVersion, available: Vec<PhpVersion>) -> Result<Self> {
        if available.is_empty() {
            return Err(DocsError::InvalidVersionState(
                "no versions available".to_string(),
            ));
        }
        for (idx, version) in available.iter().enumerate() {
            if available[..idx].contains(version) {
                return Err(DocsError::InvalidVersionState(format!(
                    "PHP {version} listed more than once"
                )));
            }
        }
        if !available.contains(&current) {
            return Err(DocsError::InvalidVersionState(format!(
                "current PHP {current} is not in the available set"
            )));
        }
        Ok(Self { current, available })
    }

    pub fn current(&self) -> PhpVersion {
        self.current
    }

    pub fn available(&self) -> &[PhpVersion] {
        &self.available
    }

    pub fn is_available(&self, version: PhpVersion) -> bool {
        self.available.contains(&version)
    }

    /// Select `version`.
    ///
    /// Returns `Ok(true)` when the selection changed and `Ok(false)` when it
    /// was already current. A version outside the available set is rejected
    /// and the state is left untouched.
    pub fn select(&mut self, version: PhpVersion) -> Result<bool> {
        if !self.is_available(version) {
            return Err(DocsError::UnavailableVersion {
                requested: version,
                available: self.available_label(),
            });
        }
        if self.current == version {
            return Ok(false);
        }
        self.current = version;
        Ok(true)
    }

    fn available_label(&self) -> String {
        self.available
            .iter()
            .map(PhpVersion::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One value per [`PhpVersion`].
///
/// Lookups go through an exhaustive `match`, so adding a release forces every
/// content table to grow a field for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PerVersion<T> {
    pub php83: T,
    pub php82: T,
}

impl<T> PerVersion<T> {
    pub const fn new(php83: T, php82: T) -> Self {
        Self { php83, php82 }
    }

    /// Build every variant from a function of the version.
    pub fn from_fn(mut f: impl FnMut(PhpVersion) -> T) -> Self {
        Self {
            php83: f(PhpVersion::Php83),
            php82: f(PhpVersion::Php82),
        }
    }

    pub fn get(&self, version: PhpVersion) -> &T {
        match version {
            PhpVersion::Php83 => &self.php83,
            PhpVersion::Php82 => &self.php82,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerVersion<U> {
        PerVersion {
            php83: f(self.php83),
            php82: f(self.php82),
        }
    }

    /// Iterate `(version, value)` pairs in [`PhpVersion::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PhpVersion, &T)> {
        PhpVersion::ALL
            .into_iter()
            .map(move |version| (version, self.get(version)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_php_version_from_str() {
        assert_eq!("8.3".parse::<PhpVersion>().unwrap(), PhpVersion::Php83);
        assert_eq!("php8.2".parse::<PhpVersion>().unwrap(), PhpVersion::Php82);
        assert_eq!(" PHP-8.3 ".parse::<PhpVersion>().unwrap(), PhpVersion::Php83);
        assert!("7.4".parse::<PhpVersion>().is_err());
        assert!("".parse::<PhpVersion>().is_err());
    }

    #[test]
    fn test_php_version_derived_names() {
        assert_eq!(PhpVersion::Php82.fpm_service(), "php8.2-fpm");
        assert_eq!(
            PhpVersion::Php83.fpm_socket(),
            "unix:/run/php/php8.3-fpm.sock"
        );
        assert_eq!(PhpVersion::Php83.path_segment(), "php-8.3");
    }

    #[test]
    fn test_default_state() {
        let state = VersionState::default();
        assert_eq!(state.current(), PhpVersion::Php83);
        assert_eq!(state.available(), &[PhpVersion::Php83, PhpVersion::Php82]);
    }

    #[test]
    fn test_state_rejects_current_outside_available() {
        let err = VersionState::new(PhpVersion::Php82, vec![PhpVersion::Php83]).unwrap_err();
        assert!(matches!(err, DocsError::InvalidVersionState(_)));
    }

    #[test]
    fn test_state_rejects_duplicates_and_empty() {
        assert!(VersionState::new(PhpVersion::Php83, vec![]).is_err());
        assert!(
            VersionState::new(
                PhpVersion::Php83,
                vec![PhpVersion::Php83, PhpVersion::Php83]
            )
            .is_err()
        );
    }

    #[test]
    fn test_select_unavailable_keeps_current() {
        let mut state = VersionState::new(PhpVersion::Php83, vec![PhpVersion::Php83]).unwrap();
        let err = state.select(PhpVersion::Php82).unwrap_err();
        assert!(matches!(
            err,
            DocsError::UnavailableVersion {
                requested: PhpVersion::Php82,
                ..
            }
        ));
        assert_eq!(state.current(), PhpVersion::Php83);
    }

    #[test]
    fn test_select_reports_change() {
        let mut state = VersionState::default();
        assert!(!state.select(PhpVersion::Php83).unwrap());
        assert!(state.select(PhpVersion::Php82).unwrap());
        assert_eq!(state.current(), PhpVersion::Php82);
    }

    #[test]
    fn test_per_version_lookup() {
        let sockets = PerVersion::from_fn(|v| v.fpm_socket());
        assert_eq!(
            sockets.get(PhpVersion::Php82),
            "unix:/run/php/php8.2-fpm.sock"
        );
        let lengths = sockets.map(|s| s.len());
        assert_eq!(lengths.php83, lengths.php82);
        let versions: Vec<PhpVersion> = lengths.iter().map(|(v, _)| v).collect();
        assert_eq!(versions, PhpVersion::ALL.to_vec());
    }
}
