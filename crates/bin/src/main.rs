// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! mklite - a build automation tool with implicit phony targets,
//! indentation-only recipe recognition, single-unit multi-target rules,
//! and automatic parent directory creation.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod error;
mod logging;

use std::path::{Path, PathBuf};

use clap::Parser;
use mklite_engine::BuildEngine;

use crate::error::CliError;

const DEFAULT_MAKEFILE: &str = "Makefile.mk-lite";

/// A build automation tool that reads a rules-and-variables file,
/// computes a dependency DAG over named targets, and executes shell
/// recipes on behalf of stale targets.
#[derive(Parser)]
#[command(name = "mklite", version, about)]
struct Cli {
    /// Target to build. Defaults to the first target of the first rule.
    target: Option<String>,
}

fn main() {
    logging::init();

    let cli = Cli::parse();

    if let Err(err) = run(cli.target.as_deref()) {
        eprintln!("mklite: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(requested_target: Option<&str>) -> Result<(), CliError> {
    let root: PathBuf = Path::new(DEFAULT_MAKEFILE).to_path_buf();

    let (makefile, store) = mklite_parser::parse(&root)?;

    // An empty makefile declares no rules at all, so any requested target
    // (explicit or default) is treated as "no target found" rather than
    // the build-time "don't know how to make target" dependency failure
    // that applies once at least one rule exists.
    if makefile.is_empty() {
        return Err(CliError::NoTarget);
    }

    let target = match requested_target {
        Some(t) => t.to_string(),
        None => makefile
            .default_target()
            .map(str::to_string)
            .ok_or(CliError::NoTarget)?,
    };

    let mut engine = BuildEngine::new(&makefile, &store);
    engine.build(&target)?;

    Ok(())
}
