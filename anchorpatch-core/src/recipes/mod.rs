//! Built-in recipes and recipe lookup.
//!
//! The built-in rule text is kept as Rust string literals rather than YAML so
//! every byte of each anchor, trailing whitespace included, survives as written.
//!
//! License: MIT OR APACHE 2.0

mod backend;
mod collections;

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use crate::config::{PatchRecipe, ReplacementRule};
use crate::errors::PatchError;

/// Compile-time form of a [`ReplacementRule`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuiltinRule {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub anchor: &'static str,
    pub replacement: &'static str,
}

impl From<&BuiltinRule> for ReplacementRule {
    fn from(rule: &BuiltinRule) -> Self {
        ReplacementRule {
            name: rule.name.to_string(),
            description: rule.description.map(str::to_string),
            anchor: rule.anchor.to_string(),
            replacement: rule.replacement.to_string(),
        }
    }
}

/// Names of every recipe compiled into the binary, in listing order.
pub const BUILTIN_RECIPE_NAMES: &[&str] = &["collections", "backend"];

fn build(name: &str, description: &str, target: &str, rules: &[BuiltinRule]) -> PatchRecipe {
    PatchRecipe {
        name: name.to_string(),
        description: Some(description.to_string()),
        target: PathBuf::from(target),
        rules: rules.iter().map(ReplacementRule::from).collect(),
    }
}

/// Returns the built-in recipe called `name`, if there is one.
pub fn builtin_recipe(name: &str) -> Option<PatchRecipe> {
    match name {
        "collections" => Some(build(
            "collections",
            collections::DESCRIPTION,
            collections::TARGET,
            collections::RULES,
        )),
        "backend" => Some(build(
            "backend",
            backend::DESCRIPTION,
            backend::TARGET,
            backend::RULES,
        )),
        _ => None,
    }
}

/// All built-in recipes.
pub fn builtin_recipes() -> Vec<PatchRecipe> {
    BUILTIN_RECIPE_NAMES
        .iter()
        .filter_map(|name| builtin_recipe(name))
        .collect()
}

/// Locations searched for `<name>.yaml` when a name is neither built in nor a path.
pub fn recipe_candidate_paths(name: &str) -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".anchorpatch").join("recipes")),
        dirs::config_dir().map(|p| p.join("anchorpatch").join("recipes")),
        Some(PathBuf::from("./recipes")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(format!("{}.yaml", name)))
        .collect()
}

/// Resolves a recipe by built-in name, file path, or search-path name, in that order.
pub fn load_recipe_by_name(name_or_path: &str) -> Result<PatchRecipe> {
    if let Some(recipe) = builtin_recipe(name_or_path) {
        debug!("Using built-in recipe '{}'.", name_or_path);
        return Ok(recipe);
    }

    let path = Path::new(name_or_path);
    let path_to_load = if path.is_file() {
        debug!("Loading recipe directly from path: {}", path.display());
        path.to_path_buf()
    } else {
        recipe_candidate_paths(name_or_path)
            .into_iter()
            .find(|p| p.exists())
            .ok_or_else(|| PatchError::UnknownRecipe(name_or_path.to_string()))?
    };

    PatchRecipe::load_from_file(&path_to_load)
        .with_context(|| format!("Failed to load recipe '{}'", name_or_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_keep_rule_counts_and_targets() {
        let collections = builtin_recipe("collections").unwrap();
        assert_eq!(collections.rules.len(), 17);
        assert_eq!(
            collections.target,
            PathBuf::from("app/components/CollectionsProvider.tsx")
        );

        let backend = builtin_recipe("backend").unwrap();
        assert_eq!(backend.rules.len(), 2);
        assert_eq!(backend.target, PathBuf::from("src-tauri/src/lib.rs"));
    }

    #[test]
    fn builtins_pass_validation() {
        for recipe in builtin_recipes() {
            recipe.validate().unwrap();
        }
    }

    #[test]
    fn backend_insertion_reemits_its_anchor() {
        let backend = builtin_recipe("backend").unwrap();
        let insert = &backend.rules[0];
        assert!(insert.replacement.starts_with("\n\n/// Gets the current demo request count"));
        assert!(insert.replacement.ends_with(&format!("{}\n", insert.anchor)));
    }

    #[test]
    fn collections_rule_text_keeps_trailing_whitespace() {
        let collections = builtin_recipe("collections").unwrap();
        let save = collections
            .rules
            .iter()
            .find(|r| r.name == "demo-save-request")
            .unwrap();
        assert!(save.replacement.contains("prev.map(c => \n"));
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = load_recipe_by_name("definitely-not-a-recipe-xyz").unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-recipe-xyz"));
    }
}
