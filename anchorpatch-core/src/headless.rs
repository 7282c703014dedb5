// anchorpatch-core/src/headless.rs
//! Convenience wrappers for running an engine without the CLI.
//!
//! [`patch_file`] is the load → transform → store pipeline; the file is read
//! whole, patched in memory, and overwritten whole. Nothing is backed up.

use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::config::ReplacementRule;
use crate::engine::{EngineOptions, PatchEngine};
use crate::engines::literal_engine::LiteralEngine;
use crate::errors::PatchError;
use crate::outcome::PatchSummary;

#[derive(Debug, Clone, Copy, Default)]
pub struct PatchFileOptions {
    /// Compute the result but leave the file untouched.
    pub dry_run: bool,
}

/// What [`patch_file`] read and produced.
#[derive(Debug, Clone)]
pub struct FilePatch {
    pub original: String,
    pub summary: PatchSummary,
    pub written: bool,
}

impl FilePatch {
    pub fn changed(&self) -> bool {
        self.original != self.summary.content
    }
}

/// Reads `path`, runs `engine` over its content and writes the result back.
///
/// The write happens even when no rule matched. Any engine error (strict
/// mode) aborts before the file is touched.
pub fn patch_file(
    path: &Path,
    engine: &dyn PatchEngine,
    options: PatchFileOptions,
) -> Result<FilePatch, PatchError> {
    info!("Reading {}", path.display());
    let original = fs::read_to_string(path).map_err(|source| PatchError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;

    let summary = engine.patch(&original)?;
    debug!(
        "{} of {} rules matched in {}.",
        summary.applied_count(),
        summary.outcomes.len(),
        path.display()
    );

    if options.dry_run {
        info!("Dry run; {} left unchanged.", path.display());
        return Ok(FilePatch {
            original,
            summary,
            written: false,
        });
    }

    fs::write(path, &summary.content).map_err(|source| PatchError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {}", path.display());

    Ok(FilePatch {
        original,
        summary,
        written: true,
    })
}

/// One-shot patch of an in-memory string with default engine options.
pub fn headless_patch_string(
    rules: Vec<ReplacementRule>,
    content: &str,
) -> Result<String, PatchError> {
    let engine = LiteralEngine::with_options(rules, EngineOptions::default())?;
    Ok(engine.patch(content)?.content)
}
