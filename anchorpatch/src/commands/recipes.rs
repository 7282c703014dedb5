//! `list` and `show` commands.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use std::io::Write;

use anchorpatch_core::{builtin_recipes, load_recipe_by_name};

/// Prints a table of the built-in recipes.
pub fn run_list<W: Write>(out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec!["Recipe", "Target", "Rules", "Description"]);

    for recipe in builtin_recipes() {
        table.add_row(vec![
            recipe.name.clone(),
            recipe.target.display().to_string(),
            recipe.rules.len().to_string(),
            recipe.description.clone().unwrap_or_default(),
        ]);
    }

    writeln!(out, "{}", table)?;
    Ok(())
}

/// Prints a recipe, resolved the same way `apply` resolves it, as YAML.
pub fn run_show<W: Write>(name_or_path: &str, out: &mut W) -> Result<()> {
    let recipe = load_recipe_by_name(name_or_path)?;
    let yaml = serde_yaml::to_string(&recipe)
        .with_context(|| format!("Failed to serialize recipe '{}'", recipe.name))?;
    write!(out, "{}", yaml)?;
    Ok(())
}
