// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use core::fmt;

use crate::dismiss::DismissPolicy;

/// Zoom level reached by double tap and the upper bound scale settles back to.
pub const MAX_ZOOM_SCALE: f64 = 3.0;

/// Tunables for a [`GestureInterpreter`](crate::GestureInterpreter).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Largest resting scale. Double tap always zooms to exactly this value.
    pub max_zoom_scale: f64,
    /// Swipe-to-dismiss thresholds.
    pub dismiss: DismissPolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_zoom_scale: MAX_ZOOM_SCALE,
            dismiss: DismissPolicy::default(),
        }
    }
}

impl ViewerConfig {
    /// Checks that the configuration describes a usable engine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaxZoomBelowOne`] if `max_zoom_scale` is below
    /// `1.0` or not finite, and [`ConfigError::DismissThresholdNotNegative`] if a
    /// dismiss threshold would point downward.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_zoom_scale.is_finite() || self.max_zoom_scale < 1.0 {
            return Err(ConfigError::MaxZoomBelowOne(self.max_zoom_scale));
        }
        let d = &self.dismiss;
        for (name, value) in [
            ("min_travel", d.min_travel),
            ("fling_velocity", d.fling_velocity),
            ("long_travel", d.long_travel),
        ] {
            if value.is_nan() || value >= 0.0 {
                return Err(ConfigError::DismissThresholdNotNegative { name, value });
            }
        }
        Ok(())
    }
}

/// Error returned by [`ViewerConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `max_zoom_scale` must be a finite value of at least `1.0`.
    MaxZoomBelowOne(f64),
    /// Dismiss thresholds describe upward motion and must be negative.
    DismissThresholdNotNegative {
        /// Name of the offending field.
        name: &'static str,
        /// Its value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxZoomBelowOne(v) => {
                write!(f, "max zoom scale must be finite and at least 1, got {v}")
            }
            Self::DismissThresholdNotNegative { name, value } => {
                write!(f, "dismiss threshold `{name}` must be negative, got {value}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
