// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pass 2 (spec §4.5): expand each raw rule's header and split it into
//! targets and sources.

use mklite_core::{Makefile, Rule, VariableStore};
use mklite_expand::Expander;
use mklite_tokenizer::{split_unescaped, unescape, EscapeMode};

use crate::error::ParseError;
use crate::raw_rule::RawRule;

pub fn run(raw_rules: Vec<RawRule>, store: &VariableStore) -> Result<Makefile, ParseError> {
    let mut makefile = Makefile::new();
    // Escapes are preserved through expansion so the `:` split below can
    // still distinguish a real separator from an escaped one (`out\:put`);
    // each resulting token gets its own final strip pass afterwards.
    let expander = Expander::new(store).preserve_escapes(true);

    for raw in raw_rules {
        let expanded_header =
            expander
                .expand(&raw.header)
                .map_err(|source| ParseError::Expand {
                    file: raw.origin_file.clone(),
                    line: raw.origin_line,
                    source,
                })?;

        let (left, right, _) = split_unescaped(&expanded_header, ':');
        let targets: Vec<String> = left
            .split_whitespace()
            .map(|t| unescape(t, EscapeMode::Strip))
            .collect();
        let sources: Vec<String> = right
            .split_whitespace()
            .map(|s| unescape(s, EscapeMode::Strip))
            .collect();

        if targets.is_empty() {
            return Err(ParseError::EmptyTargets {
                file: raw.origin_file,
                line: raw.origin_line,
            });
        }

        makefile.add_rule(Rule::new(
            targets,
            sources,
            raw.recipe,
            raw.origin_file,
            raw.origin_line,
        ));
    }

    Ok(makefile)
}

#[cfg(test)]
#[path = "pass2_tests.rs"]
mod tests;
