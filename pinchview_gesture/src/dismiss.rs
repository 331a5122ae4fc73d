// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe-to-dismiss classification.
//!
//! A pan at baseline zoom that travels far enough upward (negative Y) and is
//! either fast or long is treated as a request to close the viewer.
//!
//! ```
//! use kurbo::Vec2;
//! use pinchview_gesture::{DismissPolicy, PanEnd};
//!
//! let policy = DismissPolicy::default();
//! let fling = PanEnd {
//!     translation: Vec2::new(0.0, -60.0),
//!     velocity: Vec2::new(0.0, -2500.0),
//! };
//! assert!(policy.should_dismiss(1.0, &fling));
//! // Zoomed in, the same pan only moves the image.
//! assert!(!policy.should_dismiss(2.0, &fling));
//! ```

use crate::event::PanEnd;

/// Thresholds for the dismiss gesture.
///
/// All values are negative: they describe upward travel and velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DismissPolicy {
    /// Vertical translation the pan must go beyond before anything else is
    /// considered.
    pub min_travel: f64,
    /// Vertical release velocity that makes the pan a fling.
    pub fling_velocity: f64,
    /// Vertical translation that dismisses regardless of velocity.
    pub long_travel: f64,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self {
            min_travel: -50.0,
            fling_velocity: -2000.0,
            long_travel: -200.0,
        }
    }
}

impl DismissPolicy {
    /// Returns `true` if a pan ending with `end` at `scale` should close the
    /// viewer.
    ///
    /// Only applies at exactly baseline zoom (`scale == 1.0`).
    #[must_use]
    pub fn should_dismiss(&self, scale: f64, end: &PanEnd) -> bool {
        let ty = end.translation.y;
        scale == 1.0
            && ty < self.min_travel
            && (end.velocity.y < self.fling_velocity || ty < self.long_travel)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::DismissPolicy;
    use crate::event::PanEnd;

    fn pan(ty: f64, vy: f64) -> PanEnd {
        PanEnd {
            translation: Vec2::new(0.0, ty),
            velocity: Vec2::new(0.0, vy),
        }
    }

    #[test]
    fn fast_short_swipe_dismisses() {
        assert!(DismissPolicy::default().should_dismiss(1.0, &pan(-60.0, -2500.0)));
    }

    #[test]
    fn slow_short_swipe_does_not_dismiss() {
        assert!(!DismissPolicy::default().should_dismiss(1.0, &pan(-60.0, -100.0)));
    }

    #[test]
    fn slow_long_swipe_dismisses() {
        assert!(DismissPolicy::default().should_dismiss(1.0, &pan(-201.0, 0.0)));
    }

    #[test]
    fn fast_swipe_below_min_travel_does_not_dismiss() {
        assert!(!DismissPolicy::default().should_dismiss(1.0, &pan(-50.0, -5000.0)));
        assert!(!DismissPolicy::default().should_dismiss(1.0, &pan(-10.0, -5000.0)));
    }

    #[test]
    fn downward_swipe_does_not_dismiss() {
        assert!(!DismissPolicy::default().should_dismiss(1.0, &pan(300.0, 3000.0)));
    }

    #[test]
    fn only_at_baseline_zoom() {
        let policy = DismissPolicy::default();
        assert!(!policy.should_dismiss(0.9, &pan(-300.0, -3000.0)));
        assert!(!policy.should_dismiss(1.5, &pan(-300.0, -3000.0)));
    }
}
