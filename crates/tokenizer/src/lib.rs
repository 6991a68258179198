// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Escape-aware scanning primitives shared by the parser and expander.
//!
//! A single rule governs every scan in this crate: a backslash before any
//! character strips that character of whatever special meaning the current
//! pass would otherwise give it; `\\` yields a literal `\`. Two output modes
//! select how the backslash itself is handled once an escape is recognized:
//!
//! - [`EscapeMode::Strip`] drops the backslash from the output, leaving only
//!   the literal character. Used when producing a final value.
//! - [`EscapeMode::Preserve`] keeps the backslash in the output so a later
//!   pass can still tell an escaped character from an unescaped one.
//!
//! None of the functions here can fail — callers interpret the results.

mod escape;
mod scan;

pub use escape::EscapeMode;
pub use scan::{
    ends_in_unescaped_backslash, find_unescaped, split_unescaped, strip_comment,
    trim_matched_quotes, unescape,
};
