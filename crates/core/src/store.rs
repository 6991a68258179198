// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The variable store (S2): a name → [`Variable`] mapping with
//! tier-based write precedence, plus a memoized materialized environment
//! for sub-processes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use crate::origin::{Origin, OriginTier};
use crate::variable::Variable;

/// Holds every variable currently known to a single run: the process
/// environment it was seeded with, plus everything assigned while
/// parsing the makefile.
///
/// Mutation is monotonic with respect to tier: once a name
/// is set at tier `T`, later writes only take effect at tier `>= T`
/// (`MakefileConditional` is the one exception — see [`VariableStore::set`]).
#[derive(Debug, Default)]
pub struct VariableStore {
    vars: HashMap<String, Variable>,
    /// Materialized sub-process environment, invalidated on every `set`.
    /// `RefCell` because materialization is a read-side cache, not state
    /// that changes the store's observable behavior.
    env_cache: RefCell<Option<HashMap<String, String>>>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with the process environment at [`OriginTier::ShellEnv`].
    pub fn seed_from_process_env(&mut self) {
        for (name, value) in std::env::vars() {
            self.vars.insert(
                name.clone(),
                Variable::new(name, value, Origin::shell_env()),
            );
        }
        self.invalidate_cache();
    }

    /// Applies the tiered set policy for an assignment at `tier`.
    ///
    /// - `MakefileConditional` (`?=`) writes only if `name` is absent at
    ///   any tier.
    /// - Every other tier writes if `name` is absent, or if `tier` is
    ///   greater than or equal to the existing entry's tier.
    /// - A `MakefileUnconditional` write that overwrites an existing
    ///   `MakefileUnconditional` entry emits a warning naming both
    ///   locations — informational only, it never
    ///   blocks the write.
    pub fn set(&mut self, name: &str, value: impl Into<String>, origin: Origin) {
        let tier = origin.tier;
        let value = value.into();

        let accepted = match self.vars.get(name) {
            None => true,
            Some(existing) => match tier {
                OriginTier::MakefileConditional => false,
                _ => tier >= existing.origin.tier,
            },
        };

        if !accepted {
            return;
        }

        if tier == OriginTier::MakefileUnconditional {
            if let Some(existing) = self.vars.get(name) {
                if existing.origin.tier == OriginTier::MakefileUnconditional {
                    tracing::warn!(
                        variable = name,
                        new_location = %origin.location(),
                        previous_location = %existing.origin.location(),
                        "variable redefined",
                    );
                }
            }
        }

        self.vars
            .insert(name.to_string(), Variable::new(name, value, origin));
        self.invalidate_cache();
    }

    /// Returns the currently stored value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|v| v.value.as_str())
    }

    /// Returns the full [`Variable`] record (value + origin) for `name`.
    pub fn get_variable(&self, name: &str) -> Option<&Variable> {
        self.vars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    fn invalidate_cache(&mut self) {
        *self.env_cache.borrow_mut() = None;
    }

    /// Materializes the environment to hand to a sub-process: every
    /// stored name maps to its current value. The result is cached and
    /// only recomputed after the next `set`; the environment handed to a
    /// sub-process must stay stable within a single run.
    pub fn materialized_env(&self) -> HashMap<String, String> {
        if let Some(cached) = self.env_cache.borrow().as_ref() {
            return cached.clone();
        }
        let materialized: HashMap<String, String> = self
            .vars
            .iter()
            .map(|(k, v)| (k.clone(), v.value.clone()))
            .collect();
        *self.env_cache.borrow_mut() = Some(materialized.clone());
        materialized
    }

    /// Loads a `load_env`-style file's already-parsed `(name, value, line)`
    /// entries, written at [`OriginTier::EnvFile`] with `file` plus each
    /// entry's own line number as origin.
    ///
    /// A missing file is not an error: `load_env` references are
    /// silently ignored when absent. Line-splitting and
    /// quote-trimming are the caller's job (the parser crate, which has
    /// the tokenizer dependency); this is the storage half only.
    pub fn load_env_entries(
        &mut self,
        entries: impl IntoIterator<Item = (String, String, usize)>,
        file: &Path,
    ) {
        for (name, value, line) in entries {
            self.set(&name, value, Origin::new(OriginTier::EnvFile, file, line));
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
