// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cycle detection and memoization for the dependency DAG walk.

use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("circular dependency: {target} is already being resolved")]
pub struct CircularDependencyError {
    pub target: String,
}

/// Targets currently on the resolution stack.
///
/// Invariant: membership implies on-stack; re-entering a
/// target already in the set is a fatal error rather than a no-op, since
/// it means the DAG has a cycle.
#[derive(Debug, Default)]
pub struct VisitingSet {
    active: HashSet<String>,
}

impl VisitingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `target` as entering resolution. Callers remove it again
    /// with [`VisitingSet::leave`] once resolution completes; a build
    /// that aborts partway through (a recipe failure, a deeper cycle)
    /// simply never calls `leave` for the targets still on the stack,
    /// which is harmless since the whole build is aborting anyway.
    pub fn enter(&mut self, target: &str) -> Result<(), CircularDependencyError> {
        if !self.active.insert(target.to_string()) {
            return Err(CircularDependencyError {
                target: target.to_string(),
            });
        }
        Ok(())
    }

    pub fn leave(&mut self, target: &str) {
        self.active.remove(target);
    }
}

/// Targets whose rule has already been fully evaluated in this
/// invocation of the build engine.
///
/// Idempotent: `mark` on an already-built target is a no-op,
/// and `is_built` lets the resolver short-circuit repeat visits (a
/// diamond dependency is only built once).
#[derive(Debug, Default)]
pub struct BuiltSet {
    built: HashSet<String>,
}

impl BuiltSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_built(&self, target: &str) -> bool {
        self.built.contains(target)
    }

    pub fn mark(&mut self, target: &str) {
        self.built.insert(target.to_string());
    }
}
