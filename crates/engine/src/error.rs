// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use mklite_core::CircularDependencyError;
use mklite_expand::ExpandError;
use mklite_shell::ShellError;
use thiserror::Error;

/// Errors raised while walking the dependency graph and executing recipes.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("don't know how to make target '{target}'")]
    UnknownTarget { target: String },
    #[error("{0}")]
    CircularDependency(#[from] CircularDependencyError),
    #[error("missing dependency '{source}' for target '{target}'")]
    MissingDependency { target: String, source: String },
    #[error("recipe for target '{target}' failed: {source}")]
    RecipeFailed {
        target: String,
        #[source]
        source: ShellError,
    },
    #[error("target '{target}': {source}")]
    Expand {
        target: String,
        #[source]
        source: ExpandError,
    },
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
