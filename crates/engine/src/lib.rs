// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Build engine (S6): walks the dependency DAG from a chosen root target,
//! evaluates freshness over multi-target rules, creates parent
//! directories, and executes recipes through [`mklite_shell`] with
//! per-command expansion by [`mklite_expand`].

mod error;
mod freshness;
mod resolve;

pub use error::EngineError;
pub use resolve::BuildEngine;
