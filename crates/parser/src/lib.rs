// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Two-pass parser (S5): turns a root makefile (and any files it
//! `include`s) into a [`mklite_core::Makefile`] and a populated
//! [`mklite_core::VariableStore`].

mod error;
mod pass1;
mod pass2;
mod raw_line;
mod raw_rule;
mod reader;

use std::path::Path;

use mklite_core::{Makefile, VariableStore};

pub use error::ParseError;

/// Parses `root` (and its transitive `include`s) into a [`Makefile`] and
/// the [`VariableStore`] populated along the way, starting from the
/// process environment (spec §3: "initialized with all process
/// environment entries at Origin tier `ShellEnv`").
pub fn parse(root: &Path) -> Result<(Makefile, VariableStore), ParseError> {
    let mut store = VariableStore::new();
    store.seed_from_process_env();

    let lines = reader::read_root(root)?;
    let joined = reader::join_continuations(lines);
    let raw_rules = pass1::run(&joined, &mut store)?;
    let makefile = pass2::run(raw_rules, &store)?;

    Ok((makefile, store))
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
