// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A frame-stepped animation executor.
//!
//! Settles approach their target exponentially; decays lose velocity at
//! [`DEFAULT_DECELERATION`] per millisecond and stop at their clamp. Each
//! step writes the new values back into the interpreter.

use pinchview_gesture::{
    AnimationDirective, DEFAULT_DECELERATION, Directives, GestureInterpreter, TransformField,
};
use tracing::trace;

/// Rate of the exponential approach used for settles, per second.
pub const SETTLE_SPEED: f64 = 14.0;

/// Distance from the target at which a settle snaps and finishes.
const SETTLE_EPSILON: f64 = 1e-3;

/// Speed, in units per second, below which a decay finishes.
const DECAY_STOP_SPEED: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Settle { target: f64 },
    Decay { velocity: f64, min: f64, max: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Track {
    field: TransformField,
    motion: Motion,
}

/// Runs settle and decay animations for one viewer.
#[derive(Clone, Debug, Default)]
pub struct Executor {
    tracks: Vec<Track>,
}

impl Executor {
    /// Creates an idle executor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts or cancels animations for each directive.
    ///
    /// A new directive for a field replaces its running animation. `Instant`
    /// only cancels, since the interpreter has already applied the value.
    pub fn start(&mut self, directives: &Directives) {
        for d in directives {
            self.tracks.retain(|t| t.field != d.field);
            let motion = match d.directive {
                AnimationDirective::Instant(_) => continue,
                AnimationDirective::SettleTo(target) => Motion::Settle { target },
                AnimationDirective::DecayWithClamp { velocity, min, max } => {
                    Motion::Decay { velocity, min, max }
                }
            };
            self.tracks.push(Track {
                field: d.field,
                motion,
            });
        }
    }

    /// Returns `true` when nothing is animating.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Advances every animation by `dt` seconds and writes the results into
    /// `viewer`.
    ///
    /// Returns the number of animations that finished during this step.
    pub fn step(&mut self, viewer: &mut GestureInterpreter, dt: f64) -> usize {
        let before = self.tracks.len();
        self.tracks.retain_mut(|track| {
            // Superseded by a live gesture.
            if !viewer.in_flight().contains(track.field.into()) {
                return false;
            }
            let current = viewer.state().get(track.field);
            let (value, done) = advance(&mut track.motion, current, dt);
            if done {
                trace!(field = ?track.field, value, "animation finished");
                viewer.finish_animation(track.field, value);
            } else {
                viewer.apply_animation_frame(track.field, value);
            }
            !done
        });
        before - self.tracks.len()
    }
}

fn advance(motion: &mut Motion, current: f64, dt: f64) -> (f64, bool) {
    match motion {
        Motion::Settle { target } => {
            let next = *target + (current - *target) * (-SETTLE_SPEED * dt).exp();
            if (next - *target).abs() < SETTLE_EPSILON {
                (*target, true)
            } else {
                (next, false)
            }
        }
        Motion::Decay { velocity, min, max } => {
            *velocity *= DEFAULT_DECELERATION.powf(dt * 1000.0);
            let next = (current + *velocity * dt).clamp(*min, *max);
            let pinned = next <= *min || next >= *max;
            (next, pinned || velocity.abs() < DECAY_STOP_SPEED)
        }
    }
}
