// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing setup for the demos.

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber.
///
/// `verbose` forces `debug`; otherwise `RUST_LOG` is honored, falling back to
/// `info`. Calling this more than once is harmless.
pub fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .ok();
}
