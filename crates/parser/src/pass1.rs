// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pass 1 (spec §4.5): classify every joined line as empty, a rule
//! header (plus its recipe), a variable assignment, a `load_env`
//! directive, or an error, and populate the [`VariableStore`] as we go.

use std::fs;
use std::path::Path;

use mklite_core::{Origin, OriginTier, VariableStore};
use mklite_expand::Expander;
use mklite_tokenizer::{find_unescaped, strip_comment, trim_matched_quotes};

use crate::error::ParseError;
use crate::raw_line::RawLine;
use crate::raw_rule::RawRule;

fn is_indented(content: &str) -> bool {
    content.starts_with(' ') || content.starts_with('\t')
}

/// Runs pass 1 over the fully joined line list, returning the raw rules
/// collected along the way. Assignments and `load_env` directives are
/// applied to `store` as they're encountered (S2 writes are eager).
pub fn run(lines: &[RawLine], store: &mut VariableStore) -> Result<Vec<RawRule>, ParseError> {
    let mut rules = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];
        let content = &line.content;

        if content.trim().is_empty() {
            i += 1;
            continue;
        }

        if is_indented(content) {
            return Err(ParseError::UnexpectedIndent {
                file: line.file.clone(),
                line: line.line,
            });
        }

        let trimmed = content.trim_start();
        if let Some(rest) = trimmed.strip_prefix("load_env ") {
            process_load_env(rest.trim(), &line.file, line.line, store)?;
            i += 1;
            continue;
        }

        let colon_idx = find_unescaped(content, |c| c == ':');
        let eq_idx = find_unescaped(content, |c| c == '=');

        let is_header = match (colon_idx, eq_idx) {
            (Some(c), Some(e)) => c < e,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if is_header {
            let colon = colon_idx.expect("header implies a colon");
            let rest_after = &content[colon + 1..];
            if find_unescaped(rest_after, |c| c == ':').is_some() {
                return Err(ParseError::MultipleColonsInHeader {
                    file: line.file.clone(),
                    line: line.line,
                });
            }

            let mut recipe = Vec::new();
            let mut j = i + 1;
            while j < lines.len() {
                let next = &lines[j];
                if next.content.trim().is_empty() || !is_indented(&next.content) {
                    break;
                }
                recipe.push(next.content.clone());
                j += 1;
            }

            rules.push(RawRule {
                header: content.clone(),
                recipe,
                origin_file: line.file.clone(),
                origin_line: line.line,
            });
            i = j;
            continue;
        }

        if eq_idx.is_some() {
            process_assignment(content, &line.file, line.line, store)?;
            i += 1;
            continue;
        }

        return Err(ParseError::Unrecognized {
            file: line.file.clone(),
            line: line.line,
        });
    }

    Ok(rules)
}

fn process_assignment(
    content: &str,
    file: &Path,
    line: usize,
    store: &mut VariableStore,
) -> Result<(), ParseError> {
    let eq_idx = find_unescaped(content, |c| c == '=').expect("caller found an unescaped =");
    let (before_eq, conditional) = if eq_idx > 0 && content.as_bytes()[eq_idx - 1] == b'?' {
        (&content[..eq_idx - 1], true)
    } else {
        (&content[..eq_idx], false)
    };
    let raw_value = &content[eq_idx + 1..];

    let name = before_eq
        .trim()
        .split_whitespace()
        .last()
        .unwrap_or("")
        .to_string();

    let tier = if conditional {
        OriginTier::MakefileConditional
    } else {
        OriginTier::MakefileUnconditional
    };

    let expander = Expander::new(store);
    let value = expander
        .expand_assigning(raw_value.trim(), &name)
        .map_err(|source| ParseError::Expand {
            file: file.to_path_buf(),
            line,
            source,
        })?;

    store.set(&name, value, Origin::new(tier, file, line));
    Ok(())
}

fn process_load_env(
    path_raw: &str,
    including_file: &Path,
    including_line: usize,
    store: &mut VariableStore,
) -> Result<(), ParseError> {
    let relative = trim_matched_quotes(path_raw);
    let resolved = including_file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(relative);

    if !resolved.exists() {
        return Ok(());
    }

    let text = fs::read_to_string(&resolved).map_err(|source| ParseError::Io {
        file: resolved.clone(),
        line: including_line,
        source,
    })?;

    let mut entries = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let (content, _) = strip_comment(raw);
        if content.trim().is_empty() {
            continue;
        }

        let eq_idx = match find_unescaped(content, |c| c == '=') {
            Some(idx) => idx,
            None => continue,
        };
        let key = content[..eq_idx]
            .trim()
            .split_whitespace()
            .last()
            .unwrap_or("")
            .to_string();
        let value = trim_matched_quotes(content[eq_idx + 1..].trim()).to_string();
        entries.push((key, value, line_no));
    }

    store.load_env_entries(entries, &resolved);
    Ok(())
}

#[cfg(test)]
#[path = "pass1_tests.rs"]
mod tests;
