// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use mklite_shell::ShellError;
use thiserror::Error;

/// Errors raised while expanding a string.
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("unmatched parenthesis in `$(...)`")]
    UnmatchedParen,
    #[error("circular reference to variable `{name}`")]
    CircularReference { name: String },
    #[error("unsupported function `{name}` in $(...)")]
    UnsupportedFunction { name: String },
    #[error("sub-shell invocation failed: {0}")]
    Shell(#[from] ShellError),
}
