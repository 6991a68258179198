// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors raised while running a command through the sub-shell.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to launch shell for command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("command `{command}` exited with status {status}: {stderr}")]
    NonZeroExit {
        command: String,
        status: i32,
        stderr: String,
    },
    #[error("command `{command}` terminated by signal")]
    Signal { command: String },
}
