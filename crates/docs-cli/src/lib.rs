//! Library side of the `laravel-docs` command.

pub mod config;
pub mod inspect;
pub mod logging;
pub mod types;
