// anchorpatch-core/src/engines/literal_engine.rs
//! A `PatchEngine` that performs exact substring replacement.
//!
//! Rules are folded over the buffer left to right. Each rule replaces every
//! occurrence of its anchor; an anchor that is absent leaves the buffer as is
//! unless the engine runs in strict mode.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::collections::HashSet;

use crate::config::ReplacementRule;
use crate::engine::{EngineOptions, PatchEngine};
use crate::errors::PatchError;
use crate::outcome::{PatchSummary, RuleOutcome};

#[derive(Debug, Clone)]
pub struct LiteralEngine {
    rules: Vec<ReplacementRule>,
    options: EngineOptions,
}

impl LiteralEngine {
    pub fn new(rules: Vec<ReplacementRule>) -> Result<Self, PatchError> {
        Self::with_options(rules, EngineOptions::default())
    }

    pub fn with_options(
        rules: Vec<ReplacementRule>,
        options: EngineOptions,
    ) -> Result<Self, PatchError> {
        check_rules(&rules)?;
        debug!(
            "LiteralEngine ready with {} rules (strict: {}).",
            rules.len(),
            options.strict
        );
        Ok(Self { rules, options })
    }
}

impl PatchEngine for LiteralEngine {
    fn patch(&self, content: &str) -> Result<PatchSummary, PatchError> {
        let mut buffer = content.to_string();
        let mut outcomes = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let outcome = apply_rule(&mut buffer, rule);
            if outcome.is_noop() {
                if self.options.strict {
                    return Err(PatchError::AnchorNotFound {
                        rule: rule.name.clone(),
                    });
                }
                debug!("Rule '{}' matched nothing; skipped.", rule.name);
            }
            outcomes.push(outcome);
        }

        Ok(PatchSummary {
            content: buffer,
            outcomes,
        })
    }

    fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    fn options(&self) -> &EngineOptions {
        &self.options
    }
}

/// Applies `rules` in order without validation or strictness.
///
/// This is the bare fold: rules with an empty anchor are skipped, everything
/// else behaves exactly like [`LiteralEngine`] in its default mode.
pub fn apply_rules(content: &str, rules: &[ReplacementRule]) -> (String, Vec<RuleOutcome>) {
    let mut buffer = content.to_string();
    let outcomes = rules
        .iter()
        .map(|rule| apply_rule(&mut buffer, rule))
        .collect();
    (buffer, outcomes)
}

fn apply_rule(buffer: &mut String, rule: &ReplacementRule) -> RuleOutcome {
    // An empty needle matches between every character; never let it through.
    let occurrences = if rule.anchor.is_empty() {
        0
    } else {
        buffer.matches(rule.anchor.as_str()).count()
    };

    if occurrences > 0 {
        *buffer = buffer.replace(rule.anchor.as_str(), &rule.replacement);
        if occurrences > 1 {
            debug!(
                "Rule '{}' anchor occurred {} times; all replaced.",
                rule.name, occurrences
            );
        } else {
            debug!("Rule '{}' applied.", rule.name);
        }
    }

    RuleOutcome {
        rule_name: rule.name.clone(),
        occurrences,
    }
}

fn check_rules(rules: &[ReplacementRule]) -> Result<(), PatchError> {
    let mut names = HashSet::new();
    for rule in rules {
        if rule.anchor.is_empty() {
            return Err(PatchError::EmptyAnchor(rule.name.clone()));
        }
        if !names.insert(rule.name.as_str()) {
            return Err(PatchError::DuplicateRule(rule.name.clone()));
        }
    }
    Ok(())
}
