//! Records of what a patch run did.
//!
//! A [`RuleOutcome`] per rule, a [`PatchSummary`] per buffer, and a
//! serializable [`PatchReport`] per file run.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// How many times one rule's anchor was replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub rule_name: String,
    pub occurrences: usize,
}

impl RuleOutcome {
    /// A rule that matched nothing left the buffer untouched.
    pub fn is_noop(&self) -> bool {
        self.occurrences == 0
    }
}

/// Result of running every rule over one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSummary {
    pub content: String,
    pub outcomes: Vec<RuleOutcome>,
}

impl PatchSummary {
    pub fn applied_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_noop()).count()
    }

    pub fn noop_rules(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| o.is_noop())
    }
}

/// Hex-encoded SHA-256 of `content`.
pub fn content_digest(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// Machine-readable record of a single file run.
#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    pub recipe: String,
    pub target: PathBuf,
    pub before_sha256: String,
    pub after_sha256: String,
    pub written: bool,
    pub generated_at: DateTime<Utc>,
    pub rules: Vec<RuleOutcome>,
}

impl PatchReport {
    pub fn new(
        recipe: &str,
        target: &Path,
        original: &str,
        summary: &PatchSummary,
        written: bool,
    ) -> Self {
        Self {
            recipe: recipe.to_string(),
            target: target.to_path_buf(),
            before_sha256: content_digest(original),
            after_sha256: content_digest(&summary.content),
            written,
            generated_at: Utc::now(),
            rules: summary.outcomes.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize patch report")
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write patch report {}", path.display()))
    }
}
