//! Configuration management for `anchorpatch-core`.
//!
//! Defines replacement rules and the recipes that bundle them with a target
//! file, plus YAML loading and validation.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A single literal substitution.
///
/// Every occurrence of `anchor` in the buffer is replaced by `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReplacementRule {
    /// Identifier used in logs, summaries and `--skip`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Exact text to search for.
    pub anchor: String,
    /// Exact text substituted for every match of `anchor`.
    pub replacement: String,
}

impl ReplacementRule {
    pub fn new(
        name: impl Into<String>,
        anchor: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            anchor: anchor.into(),
            replacement: replacement.into(),
        }
    }
}

/// An ordered rule list bound to the file it patches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatchRecipe {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Path of the patched file, relative to the project root unless absolute.
    pub target: PathBuf,
    #[serde(default)]
    pub rules: Vec<ReplacementRule>,
}

impl PatchRecipe {
    /// Loads a recipe from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading recipe from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe file {}", path.display()))?;
        let recipe: PatchRecipe = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse recipe file {}", path.display()))?;

        recipe.validate()?;
        info!(
            "Loaded recipe '{}' with {} rules from {}.",
            recipe.name,
            recipe.rules.len(),
            path.display()
        );
        Ok(recipe)
    }

    /// Checks that every rule has a name and a non-empty anchor, and that names are unique.
    pub fn validate(&self) -> Result<()> {
        let errors = rule_errors(&self.rules);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!(
                "Recipe '{}' failed validation:\n{}",
                self.name,
                errors.join("\n")
            ))
        }
    }

    /// Drops the named rules, keeping the rest in their original order.
    pub fn set_active_rules(&mut self, skip_rules: &[String]) {
        let skip_set: HashSet<&str> = skip_rules.iter().map(String::as_str).collect();
        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in skip_set.difference(&all_rule_names) {
            warn!("Rule '{}' in skip list does not exist in recipe '{}'.", rule_name, self.name);
        }

        debug!("Rules before filtering: {}", self.rules.len());
        self.rules.retain(|rule| !skip_set.contains(rule.name.as_str()));
        debug!("Rules after filtering: {}", self.rules.len());
    }

    /// Resolves `target` against `root` unless it is already absolute.
    pub fn resolve_target(&self, root: &Path) -> PathBuf {
        if self.target.is_absolute() {
            self.target.clone()
        } else {
            root.join(&self.target)
        }
    }
}

fn rule_errors(rules: &[ReplacementRule]) -> Vec<String> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.anchor.is_empty() {
            errors.push(format!("Rule '{}' has an empty `anchor` field.", rule.name));
        }
    }

    errors
}
