// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;

use mklite_core::{Makefile, Rule};

use crate::error::EngineError;

/// Implements the six-step freshness algorithm of spec §4.6.
pub fn is_stale(rule: &Rule, makefile: &Makefile) -> Result<bool, EngineError> {
    // Step 1: a rule with no targets is always stale.
    if rule.targets.is_empty() {
        return Ok(true);
    }

    // Step 2 + 3: stat every target; missing or directory targets make
    // the rule stale (a directory target is treated as symbolic/phony).
    let mut metas = Vec::with_capacity(rule.targets.len());
    for target in &rule.targets {
        match fs::metadata(target) {
            Ok(meta) if meta.is_dir() => return Ok(true),
            Ok(meta) => metas.push(meta),
            Err(_) => return Ok(true),
        }
    }

    // Step 4: no sources and every target exists as a file.
    if rule.sources.is_empty() {
        return Ok(false);
    }

    // Step 5: compare the oldest target mtime against every source.
    let oldest_target_mtime = metas
        .iter()
        .map(|m| m.modified())
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .min()
        .expect("rule.targets is non-empty, checked in step 1");

    for source in &rule.sources {
        match fs::metadata(source) {
            Ok(meta) => {
                if meta.modified()? > oldest_target_mtime {
                    return Ok(true);
                }
            }
            Err(_) => {
                if makefile.rule_for_target(source).is_none() {
                    return Err(EngineError::MissingDependency {
                        target: rule.primary_target().unwrap_or_default().to_string(),
                        source: source.clone(),
                    });
                }
            }
        }
    }

    // Step 6.
    Ok(false)
}

#[cfg(test)]
#[path = "freshness_tests.rs"]
mod tests;
