// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Escape-aware scans over a line of input.

use crate::escape::EscapeMode;

/// Returns the byte index of the first character in `s` for which `pred`
/// returns `true` and that is not protected by a preceding unescaped
/// backslash.
///
/// Honors the universal escape rule: a backslash always protects exactly
/// the next character (consuming both), so `pred` is never tested against
/// an escaped character, and `\\` is consumed as a pair — the second
/// backslash can never itself match `pred` as an "unescaped" one.
///
/// This is the one primitive [`split_unescaped`], [`strip_comment`], and
/// the parser/expander crates all build their own scans on top of.
pub fn find_unescaped(s: &str, pred: impl Fn(char) -> bool) -> Option<usize> {
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            chars.next();
            continue;
        }
        if pred(c) {
            return Some(i);
        }
    }
    None
}

/// Splits `s` at the first unescaped occurrence of `sep`.
///
/// Returns `(left, right, true)` with `sep` itself dropped, or
/// `(s, "", false)` if `sep` never appears unescaped.
pub fn split_unescaped(s: &str, sep: char) -> (&str, &str, bool) {
    match find_unescaped(s, |c| c == sep) {
        Some(idx) => (&s[..idx], &s[idx + sep.len_utf8()..], true),
        None => (s, "", false),
    }
}

/// Strips a trailing `#`-comment from `line`.
///
/// Returns the content before the first unescaped `#` (or the whole line,
/// if there is no comment), plus a flag that is `true` when a comment was
/// found and its text (the comment through end-of-line) itself ends in an
/// unescaped backslash — an ambiguous line continuation inside a comment
/// that callers should reject.
pub fn strip_comment(line: &str) -> (&str, bool) {
    match find_unescaped(line, |c| c == '#') {
        Some(idx) => (&line[..idx], ends_in_unescaped_backslash(line)),
        None => (line, false),
    }
}

/// Returns true when `s` ends in a run of backslashes of odd length — the
/// final backslash is unescaped and, in line-oriented contexts, signals a
/// continuation onto the next line.
pub fn ends_in_unescaped_backslash(s: &str) -> bool {
    let run = s.chars().rev().take_while(|&c| c == '\\').count();
    run % 2 == 1
}

/// Strips exactly one surrounding pair of matching `'...'` or `"..."`
/// quotes from `s`, if present. Anything else is returned unchanged.
pub fn trim_matched_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'\'' || first == b'"') && first == last {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Resolves every `\X` in `s` to a literal `X` under [`EscapeMode::Strip`];
/// `\\` resolves to `\`. Under [`EscapeMode::Preserve`], `s` is returned
/// unchanged, since a primitive that only scans (never rewrites) preserves
/// escapes for the next pass by definition.
pub fn unescape(s: &str, mode: EscapeMode) -> String {
    match mode {
        EscapeMode::Preserve => s.to_string(),
        EscapeMode::Strip => {
            let mut out = String::with_capacity(s.len());
            let mut chars = s.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    if let Some(next) = chars.next() {
                        out.push(next);
                    }
                    continue;
                }
                out.push(c);
            }
            out
        }
    }
}
