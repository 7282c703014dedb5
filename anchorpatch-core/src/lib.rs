// anchorpatch-core/src/lib.rs
//! # anchorpatch Core Library
//!
//! `anchorpatch-core` applies ordered lists of literal find/replace rules to
//! text. A rule is an `(anchor, replacement)` pair; rules run strictly in order
//! and each one operates on the output of every rule before it.
//!
//! ## Modules
//!
//! * `config`: `ReplacementRule` and `PatchRecipe`, YAML loading and validation.
//! * `engine`: the `PatchEngine` trait and `EngineOptions`.
//! * `engines`: concrete engines, currently `LiteralEngine`.
//! * `headless`: the read → patch → write pipeline for a single file.
//! * `outcome`: per-rule outcomes, summaries and JSON reports.
//! * `recipes`: the built-in recipes and recipe lookup by name.
//!
//! ## Usage Example
//!
//! ```rust
//! use anchorpatch_core::{headless_patch_string, ReplacementRule};
//!
//! let rules = vec![
//!     ReplacementRule::new("add-flag", "const { user } = useAuth();", "const { user, isDemo } = useAuth();"),
//!     ReplacementRule::new("absent", "never present", "ignored"),
//! ];
//! let out = headless_patch_string(rules, "const { user } = useAuth();").unwrap();
//! assert_eq!(out, "const { user, isDemo } = useAuth();");
//! ```
//!
//! ## Matching semantics
//!
//! Every occurrence of an anchor is replaced, so an anchor that is not unique
//! rewrites more than one place. An anchor that does not occur is skipped
//! silently unless the engine is built with `EngineOptions::strict()`.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod outcome;
pub mod recipes;

pub use config::{PatchRecipe, ReplacementRule};

pub use errors::PatchError;

pub use engine::{EngineOptions, PatchEngine};

pub use engines::literal_engine::{apply_rules, LiteralEngine};

pub use headless::{headless_patch_string, patch_file, FilePatch, PatchFileOptions};

pub use outcome::{content_digest, PatchReport, PatchSummary, RuleOutcome};

pub use recipes::{
    builtin_recipe, builtin_recipes, load_recipe_by_name, recipe_candidate_paths,
    BUILTIN_RECIPE_NAMES,
};
