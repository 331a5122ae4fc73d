// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Legal translation range along one axis.
///
/// The range is always symmetric around zero: a centered image can move by
/// half of its overflow in either direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisBounds {
    /// Smallest allowed translation (`<= 0`).
    pub min: f64,
    /// Largest allowed translation (`>= 0`).
    pub max: f64,
}

impl AxisBounds {
    /// Bounds that allow no movement at all.
    pub const LOCKED: Self = Self { min: 0.0, max: 0.0 };

    /// Computes the bounds for one axis.
    ///
    /// `fitted` is the fitted image dimension on this axis, `viewport` the
    /// viewport dimension. When the scaled image fits inside the viewport the
    /// axis is [`LOCKED`](Self::LOCKED); otherwise only the overflow is
    /// pannable.
    #[must_use]
    pub fn for_axis(fitted: f64, scale: f64, viewport: f64) -> Self {
        let extent = fitted * scale;
        if extent <= viewport {
            return Self::LOCKED;
        }
        let half_overflow = (extent - viewport) / 2.0;
        Self {
            min: -half_overflow,
            max: half_overflow,
        }
    }

    /// Clamps `value` into `[min, max]`.
    ///
    /// Unlike [`f64::clamp`] this never panics, even for NaN bounds.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }

    /// Returns `true` if `value` lies in `[min, max]`.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if no movement is allowed on this axis.
    #[must_use]
    pub fn is_locked(self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }
}

/// Legal translation range on both axes for a given scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TranslationBounds {
    /// Horizontal range.
    pub x: AxisBounds,
    /// Vertical range.
    pub y: AxisBounds,
}

impl TranslationBounds {
    /// Computes bounds for an image of size `fitted` (at scale `1.0`) drawn at
    /// `scale` inside `viewport`.
    #[must_use]
    pub fn new(fitted: Size, scale: f64, viewport: Size) -> Self {
        Self {
            x: AxisBounds::for_axis(fitted.width, scale, viewport.width),
            y: AxisBounds::for_axis(fitted.height, scale, viewport.height),
        }
    }

    /// Clamps both components of `translation` into these bounds.
    #[must_use]
    pub fn clamp(self, translation: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp(translation.x), self.y.clamp(translation.y))
    }

    /// Returns `true` if `translation` lies within these bounds on both axes.
    #[must_use]
    pub fn contains(self, translation: Vec2) -> bool {
        self.x.contains(translation.x) && self.y.contains(translation.y)
    }
}

/// Computes the translation bounds for `fitted` at `scale` inside `viewport`.
///
/// Shorthand for [`TranslationBounds::new`].
#[must_use]
pub fn bounds(fitted: Size, scale: f64, viewport: Size) -> TranslationBounds {
    TranslationBounds::new(fitted, scale, viewport)
}
