use docs_model::PhpVersion;
use serde::Serialize;

/// One line of `laravel-docs routes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRow {
    pub path: &'static str,
    pub title: &'static str,
    pub output: &'static str,
}

/// Answer of `laravel-docs resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub route: &'static str,
    /// `None` for the default tree.
    pub version: Option<PhpVersion>,
    pub href: String,
}

/// Answer of `laravel-docs spy`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpyOutcome {
    pub effective: f64,
    pub index: Option<usize>,
    pub offset: Option<f64>,
}
