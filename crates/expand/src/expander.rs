// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashSet;
use std::path::PathBuf;

use mklite_core::VariableStore;
use mklite_shell::ShellRunner;
use mklite_tokenizer::EscapeMode;

use crate::error::ExpandError;
use crate::functions::is_unsupported;

/// Recursion depth past which a `$(...)` nest is treated as a runaway
/// chain rather than legitimate nesting (spec: "a bounded stack, e.g.
/// ≤1024, with clear error is sufficient").
const MAX_DEPTH: usize = 1024;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Recursively expands strings against a [`VariableStore`], dispatching
/// `$(shell …)` segments and implicit shell fallbacks to a freshly built
/// [`ShellRunner`] per call, so each invocation observes the store's
/// current materialized environment.
pub struct Expander<'a> {
    store: &'a VariableStore,
    cwd: Option<PathBuf>,
    suppress_shell: bool,
    escape_mode: EscapeMode,
}

impl<'a> Expander<'a> {
    pub fn new(store: &'a VariableStore) -> Self {
        Self {
            store,
            cwd: None,
            suppress_shell: false,
            escape_mode: EscapeMode::Strip,
        }
    }

    pub fn cwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.cwd = Some(path.into());
        self
    }

    /// Disables `$(shell …)` dispatch, returning an empty string instead.
    /// Set while the variable store is materializing its environment, so
    /// that expansion can't recursively trigger another materialization
    /// (spec §4.3, §6: the re-entrance guard).
    pub fn suppress_shell(mut self, suppress: bool) -> Self {
        self.suppress_shell = suppress;
        self
    }

    /// Keeps backslash escapes in the output instead of stripping them, so
    /// a caller doing its own structural scan afterwards (splitting a rule
    /// header on `:`) can still tell an escaped separator from a real one.
    /// The caller is responsible for a final [`mklite_tokenizer::unescape`]
    /// pass over whatever substrings it pulls out.
    pub fn preserve_escapes(mut self, preserve: bool) -> Self {
        self.escape_mode = if preserve {
            EscapeMode::Preserve
        } else {
            EscapeMode::Strip
        };
        self
    }

    /// Expands `input` with no variable currently being assigned.
    pub fn expand(&self, input: &str) -> Result<String, ExpandError> {
        let mut visiting = HashSet::new();
        self.expand_at(input, &mut visiting, 0)
    }

    /// Expands the right-hand side of an assignment to `name`, so a
    /// direct self-reference (`X = $(X)`) is caught as circular instead
    /// of silently resolving to an empty string.
    pub fn expand_assigning(&self, input: &str, name: &str) -> Result<String, ExpandError> {
        let mut visiting = HashSet::new();
        visiting.insert(name.to_string());
        self.expand_at(input, &mut visiting, 0)
    }

    fn expand_at(
        &self,
        input: &str,
        visiting: &mut HashSet<String>,
        depth: usize,
    ) -> Result<String, ExpandError> {
        if depth > MAX_DEPTH {
            return Err(ExpandError::UnmatchedParen);
        }

        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(next) = chars.next() {
                        if self.escape_mode == EscapeMode::Preserve {
                            out.push('\\');
                        }
                        out.push(next);
                    }
                }
                '$' => match chars.peek().copied() {
                    Some('$') => {
                        chars.next();
                        out.push('$');
                    }
                    Some('(') => {
                        chars.next();
                        let body = Self::take_balanced(&mut chars)?;
                        let expanded_body = self.expand_at(&body, visiting, depth + 1)?;
                        out.push_str(&self.dispatch(&expanded_body, visiting, depth)?);
                    }
                    Some(next) if is_name_char(next) => {
                        let mut name = String::new();
                        while let Some(&n) = chars.peek() {
                            if is_name_char(n) {
                                name.push(n);
                                chars.next();
                            } else {
                                break;
                            }
                        }
                        out.push_str(&self.lookup(&name, visiting)?);
                    }
                    _ => out.push('$'),
                },
                other => out.push(other),
            }
        }

        Ok(out)
    }

    /// Consumes characters up to the matching closing `)`, balancing any
    /// nested pairs, returning the body between the opening and that
    /// close (exclusive of both parens). A backslash protects whatever
    /// follows it from being read as a delimiter, so `\)`/`\(` inside the
    /// body never shift `depth`; the escaped pair is copied through
    /// untouched and resolved by the recursive `expand_at` call on `body`.
    fn take_balanced(
        chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    ) -> Result<String, ExpandError> {
        let mut depth = 1usize;
        let mut body = String::new();
        loop {
            match chars.next() {
                Some('\\') => {
                    body.push('\\');
                    if let Some(next) = chars.next() {
                        body.push(next);
                    }
                }
                Some('(') => {
                    depth += 1;
                    body.push('(');
                }
                Some(')') => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(body);
                    }
                    body.push(')');
                }
                Some(other) => body.push(other),
                None => return Err(ExpandError::UnmatchedParen),
            }
        }
    }

    fn lookup(&self, name: &str, visiting: &HashSet<String>) -> Result<String, ExpandError> {
        if visiting.contains(name) {
            return Err(ExpandError::CircularReference {
                name: name.to_string(),
            });
        }
        Ok(self.store.get(name).unwrap_or("").to_string())
    }

    /// Dispatches an already-expanded `$(BODY)` payload per spec §4.3.
    fn dispatch(
        &self,
        body: &str,
        visiting: &HashSet<String>,
        depth: usize,
    ) -> Result<String, ExpandError> {
        let first_token = body.split_whitespace().next().unwrap_or("");
        if is_unsupported(first_token) {
            return Err(ExpandError::UnsupportedFunction {
                name: first_token.to_string(),
            });
        }

        if let Some(rest) = body.strip_prefix("shell ") {
            return self.run_shell(rest, visiting, depth);
        }

        if self.store.contains(body) {
            return self.lookup(body, visiting);
        }

        self.run_shell(body, visiting, depth)
    }

    fn run_shell(
        &self,
        command: &str,
        _visiting: &HashSet<String>,
        _depth: usize,
    ) -> Result<String, ExpandError> {
        if self.suppress_shell {
            return Ok(String::new());
        }

        let mut runner = ShellRunner::new().env(self.store.materialized_env());
        if let Some(cwd) = &self.cwd {
            runner = runner.cwd(cwd.clone());
        }

        tracing::debug!(command, "evaluating $(shell ...)");
        let output = runner.capture(command)?;
        Ok(output.stdout)
    }
}

#[cfg(test)]
#[path = "expander_tests.rs"]
mod tests;
