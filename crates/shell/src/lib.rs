// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Sub-shell runner (S4): runs a command string through a POSIX shell
//! with a fully materialized environment, synchronously.
//!
//! This crate does no parsing and no expansion of its own — by the time
//! a command string reaches [`ShellRunner::run`] it is ready to hand to
//! `sh -c` verbatim.

mod error;
mod runner;

pub use error::ShellError;
pub use runner::{ShellOutput, ShellRunner};
