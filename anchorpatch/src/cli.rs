//! This file defines the command-line interface (CLI) for anchorpatch,
//! including all available commands and their arguments.

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "anchorpatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Apply ordered literal find/replace recipes to source files",
    long_about = "anchorpatch reads a file whole, applies an ordered list of exact substring replacements (each rule seeing the output of the ones before it), and writes the file back in place. Anchors that are not found are skipped silently unless --strict is given.",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[arg(long, short = 'q', global = true, help = "Suppress informational messages and logs.")]
    pub quiet: bool,

    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    #[arg(long = "theme", value_name = "FILE", global = true, help = "Path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level forced by the global flags, if any; `None` leaves it to `RUST_LOG`.
    ///
    /// `--disable-debug` caps output at the default `warn` level, so it never
    /// shows more than a run without any flag.
    pub fn log_level_override(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Off)
        } else if self.disable_debug {
            Some(LevelFilter::Warn)
        } else if self.debug {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Applies a recipe to its target file.
    #[command(about = "Apply a recipe to its target file, rewriting it in place.")]
    Apply(ApplyCommand),

    /// Lists the built-in recipes.
    #[command(about = "List the built-in recipes.")]
    List,

    /// Prints a recipe's rules as YAML.
    #[command(about = "Print a recipe as YAML.")]
    Show {
        #[arg(value_name = "RECIPE", help = "Built-in recipe name, recipe file path, or recipe name on the search path.")]
        recipe: String,
    },
}

/// Arguments for the `apply` command.
#[derive(Parser, Debug)]
pub struct ApplyCommand {
    #[arg(
        value_name = "RECIPE",
        required_unless_present = "recipe_file",
        conflicts_with = "recipe_file",
        help = "Built-in recipe name (collections, backend) or a recipe name on the search path."
    )]
    pub recipe: Option<String>,

    #[arg(long = "recipe-file", short = 'f', value_name = "FILE", help = "Load the recipe from a YAML file.")]
    pub recipe_file: Option<PathBuf>,

    /// Directory the recipe's relative target is resolved against.
    #[arg(long, short = 'r', value_name = "DIR", default_value = ".", help = "Project root the recipe target is relative to.")]
    pub root: PathBuf,

    #[arg(long, short = 't', value_name = "FILE", help = "Patch this file instead of the recipe's target.")]
    pub target: Option<PathBuf>,

    #[arg(long, short = 'x', value_name = "RULE", value_delimiter = ',', help = "Skip these rule names (comma-separated).")]
    pub skip: Vec<String>,

    #[arg(long, help = "Fail without writing if any rule's anchor is missing.")]
    pub strict: bool,

    #[arg(long = "dry-run", short = 'n', help = "Compute the result without writing the file.")]
    pub dry_run: bool,

    #[arg(long, short = 'D', help = "Print a unified diff of the changes.")]
    pub diff: bool,

    #[arg(long, short = 's', help = "Print how many times each rule matched.")]
    pub summary: bool,

    #[arg(long, value_name = "FILE", help = "Write a JSON report of the run to FILE.")]
    pub report: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn apply_parses_skip_list() {
        let cli = Cli::parse_from(["anchorpatch", "apply", "collections", "--skip", "a,b", "--strict"]);
        match cli.command {
            Commands::Apply(cmd) => {
                assert_eq!(cmd.recipe.as_deref(), Some("collections"));
                assert_eq!(cmd.skip, vec!["a".to_string(), "b".to_string()]);
                assert!(cmd.strict);
                assert_eq!(cmd.root, PathBuf::from("."));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn apply_requires_a_recipe() {
        assert!(Cli::try_parse_from(["anchorpatch", "apply"]).is_err());
        assert!(Cli::try_parse_from(["anchorpatch", "apply", "backend", "-f", "r.yaml"]).is_err());
    }

    #[test]
    fn log_flags_map_to_levels() {
        let level = |args: &[&str]| Cli::parse_from(args.iter().copied()).log_level_override();
        assert_eq!(level(&["anchorpatch", "list"]), None);
        assert_eq!(level(&["anchorpatch", "-d", "list"]), Some(LevelFilter::Debug));
        assert_eq!(level(&["anchorpatch", "--disable-debug", "list"]), Some(LevelFilter::Warn));
        assert_eq!(level(&["anchorpatch", "-d", "--disable-debug", "list"]), Some(LevelFilter::Warn));
        assert_eq!(level(&["anchorpatch", "-q", "-d", "list"]), Some(LevelFilter::Off));
    }
}
