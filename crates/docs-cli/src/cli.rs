//! CLI argument definitions for the docs builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use docs_core::HEADER_OFFSET;
use docs_model::PhpVersion;

#[derive(Parser)]
#[command(
    name = "laravel-docs",
    version,
    about = "Laravel Server Docs - build the deployment guide as a static site",
    long_about = "Build the Laravel production deployment guide as a static site.\n\n\
                  Renders one page tree per PHP version (8.3 and 8.2) and exposes\n\
                  the routing and scroll-spy lookups for inspection."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render every page for every PHP version and write the site.
    Build(BuildArgs),

    /// List the site routes.
    Routes,

    /// Print the quick reference commands for a PHP version.
    Commands(CommandsArgs),

    /// Show which page and version tree a URL path maps to.
    Resolve(ResolveArgs),

    /// Show which section the scroll-spy highlights for a scroll position.
    Spy(SpyArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Output directory for the generated site.
    #[arg(long = "out-dir", value_name = "DIR", default_value = "dist")]
    pub out_dir: PathBuf,

    /// Site configuration file (TOML).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL prefix the site is served under (overrides the config file).
    #[arg(long = "base-path", value_name = "PATH")]
    pub base_path: Option<String>,

    /// PHP version rendered at the site root (overrides the config file).
    #[arg(long = "php", value_name = "VERSION")]
    pub php: Option<PhpVersion>,
}

#[derive(Parser)]
pub struct CommandsArgs {
    /// PHP version (8.3 or 8.2).
    #[arg(long = "php", value_name = "VERSION", default_value = "8.3")]
    pub php: PhpVersion,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Request path, e.g. /docs/php-8.2/commands/.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// URL prefix the site is served under.
    #[arg(long = "base-path", value_name = "PATH")]
    pub base_path: Option<String>,
}

#[derive(Parser)]
pub struct SpyArgs {
    /// Section top offsets in document order, comma separated.
    #[arg(
        long = "offsets",
        value_name = "PX",
        value_delimiter = ',',
        num_args = 1..,
        required = true
    )]
    pub offsets: Vec<f64>,

    /// Current vertical scroll position.
    #[arg(long = "scroll-y", value_name = "PX")]
    pub scroll_y: f64,

    /// Distance below the viewport top at which a section becomes active.
    #[arg(long = "threshold", value_name = "PX", default_value_t = HEADER_OFFSET)]
    pub threshold: f64,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
