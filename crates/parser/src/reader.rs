// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive file reading, `include` expansion, and line-continuation
//! joining — the first half of pass 1 (spec §4.5, steps 1–3).

use std::fs;
use std::path::Path;

use mklite_core::IncludeStack;
use mklite_tokenizer::{ends_in_unescaped_backslash, strip_comment, trim_matched_quotes};

use crate::error::ParseError;
use crate::raw_line::RawLine;

/// Reads `root` and every file it (recursively) `include`s into one flat,
/// comment-stripped line list, in file order with `include`s inlined.
pub fn read_root(root: &Path) -> Result<Vec<RawLine>, ParseError> {
    let mut stack = IncludeStack::new();
    let mut lines = Vec::new();
    read_file(root, &mut stack, &mut lines)?;
    Ok(lines)
}

fn read_file(path: &Path, stack: &mut IncludeStack, out: &mut Vec<RawLine>) -> Result<(), ParseError> {
    let canonical = path.canonicalize().map_err(|source| ParseError::Io {
        file: path.to_path_buf(),
        line: 0,
        source,
    })?;
    stack.push(&canonical)?;

    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        file: path.to_path_buf(),
        line: 0,
        source,
    })?;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let (content, ambiguous) = strip_comment(raw);
        if ambiguous {
            stack.pop();
            return Err(ParseError::AmbiguousCommentContinuation {
                file: path.to_path_buf(),
                line: line_no,
            });
        }

        if let Some(rest) = content.trim_start().strip_prefix("include ") {
            let include_path = trim_matched_quotes(rest.trim());
            let resolved = path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(include_path);

            if !resolved.exists() {
                let is_env_file = resolved.extension().is_some_and(|ext| ext == "env");
                if is_env_file {
                    continue;
                }
                stack.pop();
                return Err(ParseError::Io {
                    file: resolved,
                    line: line_no,
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }

            read_file(&resolved, stack, out)?;
            continue;
        }

        out.push(RawLine::new(content.to_string(), path.to_path_buf(), line_no));
    }

    stack.pop();
    Ok(())
}

/// Joins any line ending in an unescaped backslash with the line that
/// follows it in the flat list (spec §4.5 step 3). The joined line keeps
/// the origin of its first physical line; a trailing backslash with no
/// following line is simply dropped.
pub fn join_continuations(lines: Vec<RawLine>) -> Vec<RawLine> {
    let mut out: Vec<RawLine> = Vec::with_capacity(lines.len());
    let mut iter = lines.into_iter().peekable();

    while let Some(mut current) = iter.next() {
        while !current.content.is_empty() && ends_in_unescaped_backslash(&current.content) {
            current.content.pop();
            match iter.next() {
                Some(next) => current.content.push_str(&next.content),
                None => break,
            }
        }
        out.push(current);
    }

    out
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
