use anyhow::{Context, Result};
use chrono::Local;
use docs_content::quick_reference_rows;
use docs_core::VersionStore;
use docs_model::{PhpVersion, VersionState};
use docs_render::{BuildReport, RenderContext, SiteBuilder};
use tracing::{info, info_span};

use docs_cli::config::{ConfigOverrides, load_site_config};
use docs_cli::inspect::{resolve_path, route_rows, spy};

use crate::cli::{BuildArgs, CommandsArgs, ResolveArgs, SpyArgs};
use crate::summary::{print_commands, print_resolution, print_routes, print_spy};

pub fn run_build(args: &BuildArgs) -> Result<BuildReport> {
    let span = info_span!("build", out_dir = %args.out_dir.display());
    let _guard = span.enter();

    let overrides = ConfigOverrides {
        base_path: args.base_path.clone(),
        default_version: args.php,
    };
    let config = load_site_config(args.config.as_deref(), &overrides)?;
    let state = VersionState::new(config.default_version, PhpVersion::ALL.to_vec())
        .context("initial version state")?;
    let mut store = VersionStore::new(state);

    let date = Local::now().date_naive();
    info!(base_path = %config.base_path, %date, "building site");
    let builder = SiteBuilder::new(RenderContext::new(config, date));
    builder.build(&mut store, &args.out_dir)
}

pub fn run_routes() -> Result<()> {
    print_routes(&route_rows());
    Ok(())
}

pub fn run_commands(args: &CommandsArgs) -> Result<()> {
    print_commands(args.php, &quick_reference_rows(args.php));
    Ok(())
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    print_resolution(&resolve_path(&args.path, args.base_path.as_deref()));
    Ok(())
}

pub fn run_spy(args: &SpyArgs) -> Result<()> {
    print_spy(&spy(&args.offsets, args.scroll_y, args.threshold));
    Ok(())
}
