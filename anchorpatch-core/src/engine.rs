//! Defines the core `PatchEngine` trait.
//!
//! The trait decouples the command layer from how a rule list is applied to
//! a buffer, so the CLI and the headless helpers drive any engine the same way.
//!
//! License: MIT OR APACHE 2.0

use crate::config::ReplacementRule;
use crate::errors::PatchError;
use crate::outcome::PatchSummary;

/// Options that change how an engine treats its rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Fail when any rule's anchor is missing instead of skipping it.
    pub strict: bool,
}

impl EngineOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

pub trait PatchEngine: Send + Sync {
    /// Applies every rule, in order, to `content`.
    ///
    /// Each rule sees the output of all rules before it. Returns the final
    /// buffer together with one outcome per rule.
    fn patch(&self, content: &str) -> Result<PatchSummary, PatchError>;

    /// The rules this engine applies, in application order.
    fn rules(&self) -> &[ReplacementRule];

    fn options(&self) -> &EngineOptions;
}
