// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted gesture sessions.
//!
//! A script is a JSON document naming the viewport, the image's intrinsic
//! size, an optional [`ViewerConfig`] and a list of steps:
//!
//! ```json
//! {
//!   "viewport": { "width": 400.0, "height": 800.0 },
//!   "image": { "width": 4000.0, "height": 3000.0 },
//!   "steps": [
//!     { "event": { "DoubleTap": { "position": { "x": 100.0, "y": 150.0 } } } },
//!     { "wait": { "ms": 500.0 } },
//!     { "resize": { "width": 800.0, "height": 400.0 } }
//!   ]
//! }
//! ```

use kurbo::Size;
use pinchview_dispatch::{GestureSession, RequestSender};
use pinchview_gesture::{
    ConfigError, GestureEvent, GestureInterpreter, TransformState, ViewerConfig,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::executor::Executor;

/// Upper bound on frames spent waiting for animations to finish.
const MAX_SETTLE_FRAMES: u32 = 10_000;

/// A scripted session.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Viewport at the start of the session.
    pub viewport: Size,
    /// Intrinsic size of the image.
    pub image: Size,
    /// Engine configuration; defaults apply to missing fields.
    #[serde(default)]
    pub config: ViewerConfig,
    /// What happens, in order.
    pub steps: Vec<Step>,
}

/// One scripted step.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Deliver a gesture event, then run one frame.
    Event(GestureEvent),
    /// Let animations run for a while.
    Wait {
        /// Duration in milliseconds.
        ms: f64,
    },
    /// Change the viewport, as on device rotation.
    Resize(Size),
}

impl Script {
    /// Parses a script from JSON.
    ///
    /// # Errors
    ///
    /// Returns the parser's error if `json` is not a valid script.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Plays `script` frame by frame, forwarding requests to `requests`.
///
/// Animations are given up to [`MAX_SETTLE_FRAMES`] frames to finish after
/// the last step. Returns the final transform.
///
/// # Errors
///
/// Returns [`ConfigError`] if the script's configuration is invalid.
pub fn replay(
    script: &Script,
    requests: RequestSender,
    frame: f64,
) -> Result<TransformState, ConfigError> {
    let interpreter = GestureInterpreter::with_config(script.viewport, script.image, script.config)?;
    info!(fitted = ?interpreter.fitted_size(), "replaying {} steps", script.steps.len());

    let mut session = GestureSession::new(interpreter, requests);
    let mut executor = Executor::new();

    for step in &script.steps {
        match *step {
            Step::Event(event) => {
                let directives = session.handle(event);
                executor.start(&directives);
                executor.step(session.interpreter_mut(), frame);
            }
            Step::Wait { ms } => {
                let mut elapsed = 0.0;
                while elapsed < ms / 1000.0 && !executor.is_idle() {
                    executor.step(session.interpreter_mut(), frame);
                    elapsed += frame;
                }
            }
            Step::Resize(viewport) => session.interpreter_mut().set_viewport(viewport),
        }
        debug!(state = ?session.interpreter().state(), phase = ?session.interpreter().phase());
    }

    let mut frames = 0;
    while !executor.is_idle() && frames < MAX_SETTLE_FRAMES {
        executor.step(session.interpreter_mut(), frame);
        frames += 1;
    }
    Ok(session.interpreter().state())
}
