// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless PinchView demos.
//!
//! Replays scripted gesture sessions against a [`GestureInterpreter`] and a
//! small frame-stepped animation executor, so the whole loop can be observed
//! from a terminal:
//!
//! - [`script`]: the JSON script format and the replay loop.
//! - [`executor`]: a toy animation executor for [`AnimationDirective`]s.
//! - [`logging`]: `tracing-subscriber` setup.
//!
//! Run:
//! - `cargo run -p pinchview_demos --bin replay -- demos/scripts/zoom_and_pan.json`
//! - `RUST_LOG=debug cargo run -p pinchview_demos --bin replay` for the settle decisions.
//!
//! [`GestureInterpreter`]: pinchview_gesture::GestureInterpreter
//! [`AnimationDirective`]: pinchview_gesture::AnimationDirective

pub mod executor;
pub mod logging;
pub mod script;
