// anchorpatch/src/main.rs
//! anchorpatch entry point.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io;

use anchorpatch::cli::{Cli, Commands};
use anchorpatch::commands::{apply, recipes};
use anchorpatch::logger;
use anchorpatch::ui::theme::build_theme_map;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logger::init_logger(cli.log_level_override());
    info!("anchorpatch started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = build_theme_map(cli.theme.as_ref()).context("Theme error")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Apply(cmd) => apply::run_apply(cmd, &theme_map, cli.quiet, &mut out),
        Commands::List => recipes::run_list(&mut out),
        Commands::Show { recipe } => recipes::run_show(recipe, &mut out),
    }
}
