//! errors.rs - Custom error types for the anchorpatch-core library.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error types produced by `anchorpatch-core`.
///
/// Marked `#[non_exhaustive]` so variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PatchError {
    #[error("Failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rule '{0}' has an empty anchor")]
    EmptyAnchor(String),

    #[error("Duplicate rule name found: '{0}'")]
    DuplicateRule(String),

    #[error("Anchor for rule '{rule}' was not found in the current buffer")]
    AnchorNotFound { rule: String },

    #[error("Unknown recipe '{0}': not built in, not a file, and not found in any recipe directory")]
    UnknownRecipe(String),
}
