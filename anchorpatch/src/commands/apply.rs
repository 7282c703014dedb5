//! `apply` command: load a recipe, patch its target, report.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};

use anchorpatch_core::{
    EngineOptions, LiteralEngine, PatchFileOptions, PatchRecipe, PatchReport, load_recipe_by_name,
    patch_file,
};

use crate::cli::ApplyCommand;
use crate::ui::theme::ThemeMap;
use crate::ui::{diff_viewer, output_format, patch_summary};

/// Printed to stdout after every successful run, matched or not.
pub const DONE_MESSAGE: &str = "Done";

fn resolve_recipe(cmd: &ApplyCommand) -> Result<PatchRecipe> {
    match (&cmd.recipe_file, &cmd.recipe) {
        (Some(path), _) => PatchRecipe::load_from_file(path),
        (None, Some(name)) => load_recipe_by_name(name),
        (None, None) => anyhow::bail!("No recipe given; pass a recipe name or --recipe-file."),
    }
}

/// Runs the `apply` command, writing the diff and `Done` to `out`.
pub fn run_apply<W: Write>(
    cmd: &ApplyCommand,
    theme_map: &ThemeMap,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let mut recipe = resolve_recipe(cmd)?;
    recipe.set_active_rules(&cmd.skip);

    let target = match &cmd.target {
        Some(path) => path.clone(),
        None => recipe.resolve_target(&cmd.root),
    };
    info!("Applying recipe '{}' to {}", recipe.name, target.display());

    let engine = LiteralEngine::with_options(
        recipe.rules.clone(),
        EngineOptions { strict: cmd.strict },
    )?;
    let result = patch_file(&target, &engine, PatchFileOptions { dry_run: cmd.dry_run })
        .with_context(|| format!("Failed to apply recipe '{}'", recipe.name))?;

    let stderr_supports_color = io::stderr().is_terminal();
    debug!(
        "{} of {} rules matched.",
        result.summary.applied_count(),
        result.summary.outcomes.len()
    );
    for outcome in result.summary.noop_rules() {
        info!("Rule '{}' matched nothing in {}.", outcome.rule_name, target.display());
    }
    if !result.changed() {
        info!("No rule changed {}; content is identical.", target.display());
    }
    if cmd.dry_run && !quiet {
        output_format::print_info_message(
            &mut io::stderr(),
            &format!("Dry run: {} was not modified.", target.display()),
            theme_map,
            stderr_supports_color,
        )?;
    }

    if cmd.diff {
        let supports_color = io::stdout().is_terminal();
        diff_viewer::print_diff(
            &result.original,
            &result.summary.content,
            out,
            theme_map,
            supports_color,
        )?;
    }

    if cmd.summary && !quiet {
        patch_summary::print_summary(
            &result.summary.outcomes,
            &mut io::stderr(),
            theme_map,
            stderr_supports_color,
        )?;
    }

    if let Some(report_path) = &cmd.report {
        PatchReport::new(&recipe.name, &target, &result.original, &result.summary, result.written)
            .write_json(report_path)?;
        info!("Report written to {}", report_path.display());
    }

    writeln!(out, "{}", DONE_MESSAGE)?;
    Ok(())
}
