// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::ShellError;

/// Captured output of a `$(shell …)` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutput {
    pub stdout: String,
}

/// Runs command strings through a POSIX shell (`sh -c <command>`) with a
/// caller-supplied environment.
///
/// Built with the same borrow-then-configure pattern used elsewhere in
/// the workspace: construct with [`ShellRunner::new`], narrow it with the
/// builder methods, then call [`capture`](ShellRunner::capture) for
/// `$(shell …)` substitutions or [`run_inherited`](ShellRunner::run_inherited)
/// for recipe lines.
#[derive(Debug, Default)]
pub struct ShellRunner {
    cwd: Option<PathBuf>,
    env: HashMap<String, String>,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.cwd = Some(path.into());
        self
    }

    pub fn env(mut self, vars: HashMap<String, String>) -> Self {
        self.env = vars;
        self
    }

    fn base_command(&self, command: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd.env_clear();
        cmd.envs(&self.env);
        cmd
    }

    /// Runs `command`, capturing standard output for a `$(shell …)`
    /// substitution. Trailing CR/LF characters are stripped. Standard
    /// error is captured too and surfaced via `tracing::debug!` (spec:
    /// "optionally surfaced to a diagnostic stream in debug mode"); a
    /// non-zero exit status is always an error here, since S3 has no way
    /// to represent a partial substitution.
    pub fn capture(&self, command: &str) -> Result<ShellOutput, ShellError> {
        let mut cmd = self.base_command(command);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output().map_err(|source| ShellError::Spawn {
            command: command.to_string(),
            source,
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !stderr.is_empty() {
            tracing::debug!(command, stderr = %stderr, "shell command wrote to stderr");
        }

        match output.status.code() {
            Some(0) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                Ok(ShellOutput {
                    stdout: trim_trailing_newline(&stdout).to_string(),
                })
            }
            Some(status) => Err(ShellError::NonZeroExit {
                command: command.to_string(),
                status,
                stderr,
            }),
            None => Err(ShellError::Signal {
                command: command.to_string(),
            }),
        }
    }

    /// Runs `command` with stdout/stderr connected through to the
    /// caller's own streams, for recipe lines. Waits synchronously for
    /// completion; a non-zero exit is reported so the build engine can
    /// fail the build immediately.
    pub fn run_inherited(&self, command: &str) -> Result<(), ShellError> {
        let mut cmd = self.base_command(command);
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().map_err(|source| ShellError::Spawn {
            command: command.to_string(),
            source,
        })?;

        match status.code() {
            Some(0) => Ok(()),
            Some(status) => Err(ShellError::NonZeroExit {
                command: command.to_string(),
                status,
                stderr: String::new(),
            }),
            None => Err(ShellError::Signal {
                command: command.to_string(),
            }),
        }
    }
}

fn trim_trailing_newline(s: &str) -> &str {
    s.trim_end_matches(['\r', '\n'])
}
