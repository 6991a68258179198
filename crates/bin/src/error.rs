// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use mklite_engine::EngineError;
use mklite_parser::ParseError;
use thiserror::Error;

/// The top-level error the binary can fail with, flattening every
/// library crate's error type so `main` has one place to map to an exit
/// code (spec §7: "errors... propagate to the top-level driver with
/// precise origin... included where known").
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("no target found: the makefile declares no rules")]
    NoTarget,
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl CliError {
    /// Maps an error to the exit code of spec §6/§7: `2` for parse-time
    /// failures (including "no target found"), `1` for build-time
    /// failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(_) | CliError::NoTarget => 2,
            CliError::Engine(_) => 1,
        }
    }
}
