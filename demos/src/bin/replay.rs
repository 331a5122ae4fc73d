// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a scripted gesture session.
//!
//! The script runs on a gesture thread; close and tap requests are handled
//! on the main thread, once per frame.
//!
//! Run:
//! - `cargo run -p pinchview_demos --bin replay -- [--verbose] [SCRIPT.json]`

use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use pinchview_demos::logging::init_tracing;
use pinchview_demos::script::{Script, replay};
use pinchview_dispatch::request_channel;
use tracing::info;

const FRAME: f64 = 1.0 / 60.0;

const DEFAULT_SCRIPT: &str = include_str!("../../scripts/zoom_and_pan.json");

fn main() -> Result<()> {
    let mut verbose = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ => path = Some(arg),
        }
    }
    init_tracing(verbose);

    let json = match &path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading script {path}"))?
        }
        None => DEFAULT_SCRIPT.to_owned(),
    };
    let script = Script::from_json(&json).context("parsing script")?;

    let closed = Rc::new(Cell::new(false));
    let taps = Rc::new(Cell::new(0_u32));
    let (sender, receiver) = request_channel();
    let mut receiver = receiver
        .on_request_close({
            let closed = Rc::clone(&closed);
            move || {
                info!("viewer asked to close");
                closed.set(true);
            }
        })
        .on_single_tap({
            let taps = Rc::clone(&taps);
            move || {
                info!("single tap");
                taps.set(taps.get() + 1);
            }
        });

    let gestures = thread::Builder::new()
        .name("gestures".into())
        .spawn(move || replay(&script, sender, FRAME))
        .context("spawning gesture thread")?;

    while !gestures.is_finished() {
        receiver.dispatch_pending();
        thread::sleep(Duration::from_millis(16));
    }
    let state = gestures
        .join()
        .map_err(|_| anyhow::anyhow!("gesture thread panicked"))??;
    receiver.dispatch_pending();

    info!(
        scale = state.scale,
        translate_x = state.translate_x,
        translate_y = state.translate_y,
        closed = closed.get(),
        taps = taps.get(),
        "session finished"
    );
    Ok(())
}
