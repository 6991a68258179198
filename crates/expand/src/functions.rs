// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The rejected function-call vocabulary: names this tool recognizes
//! only well enough to reject with a clear diagnostic, rather than
//! silently treating them as a shell command or an unknown variable.

pub const UNSUPPORTED_FUNCTIONS: &[&str] = &[
    "subst",
    "patsubst",
    "strip",
    "findstring",
    "filter",
    "filter-out",
    "sort",
    "word",
    "words",
    "wordlist",
    "firstword",
    "lastword",
    "dir",
    "notdir",
    "suffix",
    "basename",
    "addsuffix",
    "addprefix",
    "join",
    "foreach",
    "if",
    "or",
    "and",
    "call",
    "origin",
    "value",
    "info",
    "warning",
    "error",
];

pub fn is_unsupported(name: &str) -> bool {
    UNSUPPORTED_FUNCTIONS.contains(&name)
}
