// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive `resolve(target)` (spec §4.6): the DAG walk, freshness
//! check, and recipe execution, driven from a single root target.

use std::fs;
use std::path::Path;

use mklite_core::{BuiltSet, Makefile, Rule, VariableStore, VisitingSet};
use mklite_expand::Expander;
use mklite_shell::ShellRunner;

use crate::error::EngineError;
use crate::freshness::is_stale;

/// Owns the transient [`VisitingSet`]/[`BuiltSet`] for a single build
/// invocation and drives `resolve` against a borrowed [`Makefile`] and
/// [`VariableStore`] (read-only during execution, per spec §5: "the
/// Variable Store is... read-only during pass 2 and during execution").
pub struct BuildEngine<'a> {
    makefile: &'a Makefile,
    store: &'a VariableStore,
    visiting: VisitingSet,
    built: BuiltSet,
}

impl<'a> BuildEngine<'a> {
    pub fn new(makefile: &'a Makefile, store: &'a VariableStore) -> Self {
        Self {
            makefile,
            store,
            visiting: VisitingSet::new(),
            built: BuiltSet::new(),
        }
    }

    /// Resolves `target`: recurses into its sources in declared order,
    /// runs its recipe if stale, and marks it (and its sibling targets,
    /// for a multi-target rule) built.
    ///
    /// A target with no rule is accepted only if it already exists as a
    /// regular file on disk; otherwise this is the fatal "don't know how
    /// to make target" case.
    pub fn build(&mut self, target: &str) -> Result<(), EngineError> {
        if self.built.is_built(target) {
            return Ok(());
        }

        self.visiting.enter(target)?;

        match self.makefile.rule_for_target(target) {
            Some(rule) => {
                for source in &rule.sources {
                    self.build(source)?;
                }

                if is_stale(rule, self.makefile)? {
                    self.execute_recipe(rule)?;
                } else {
                    tracing::debug!(target, "up to date");
                }

                for built_target in &rule.targets {
                    self.built.mark(built_target);
                }
            }
            None => {
                if Path::new(target).exists() {
                    self.built.mark(target);
                } else {
                    return Err(EngineError::UnknownTarget {
                        target: target.to_string(),
                    });
                }
            }
        }

        self.visiting.leave(target);
        Ok(())
    }

    /// Runs a rule's recipe (spec §4.6 "Recipe execution"): parent
    /// directories first, then each line in order, expanded against the
    /// current store just before it runs.
    fn execute_recipe(&self, rule: &Rule) -> Result<(), EngineError> {
        for target in &rule.targets {
            create_parent_dirs(target)?;
        }

        let expander = Expander::new(self.store);
        let runner = ShellRunner::new().env(self.store.materialized_env());
        let primary = rule.primary_target().unwrap_or_default();

        tracing::info!(target = primary, "building");

        for raw_line in &rule.recipe {
            let trimmed = raw_line.trim_start();
            if trimmed.is_empty() {
                continue;
            }

            let (suppressed, command) = match trimmed.strip_prefix('@') {
                Some(rest) => (true, rest),
                None => (false, trimmed),
            };

            let expanded = expander
                .expand(command)
                .map_err(|source| EngineError::Expand {
                    target: primary.to_string(),
                    source,
                })?;

            if !suppressed {
                println!("{expanded}");
            }

            runner
                .run_inherited(&expanded)
                .map_err(|source| EngineError::RecipeFailed {
                    target: primary.to_string(),
                    source,
                })?;
        }

        Ok(())
    }
}

fn create_parent_dirs(target: &str) -> Result<(), EngineError> {
    if let Some(parent) = Path::new(target).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
