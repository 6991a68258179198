// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic stream setup (spec §6): `MAKE_LITE_LOG_LEVEL=DEBUG` turns
//! on the verbose shell-command/capture/up-to-date trace described
//! throughout spec §4; anything else is quiet by default, since the
//! recipe echo itself already goes to stdout via `println!`, not
//! through `tracing`.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let default_level = match std::env::var("MAKE_LITE_LOG_LEVEL").as_deref() {
        Ok("DEBUG") => "debug",
        _ => "warn",
    };

    // RUST_LOG still works as an escape hatch for implementers debugging
    // the tool itself, without disturbing MAKE_LITE_LOG_LEVEL's contract.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
