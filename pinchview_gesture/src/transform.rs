// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live transform of the image layer and the per-gesture snapshot.

use kurbo::{Affine, Size, Vec2};

/// One animatable component of a [`TransformState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformField {
    /// Uniform scale of the image layer.
    Scale,
    /// Horizontal offset of the image center from the viewport center.
    TranslateX,
    /// Vertical offset of the image center from the viewport center.
    TranslateY,
}

impl TransformField {
    /// All fields, in directive emission order.
    pub const ALL: [Self; 3] = [Self::Scale, Self::TranslateX, Self::TranslateY];
}

bitflags::bitflags! {
    /// A set of [`TransformField`]s, used to track in-flight animations.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TransformFields: u8 {
        /// [`TransformField::Scale`].
        const SCALE       = 0b0000_0001;
        /// [`TransformField::TranslateX`].
        const TRANSLATE_X = 0b0000_0010;
        /// [`TransformField::TranslateY`].
        const TRANSLATE_Y = 0b0000_0100;
    }
}

impl From<TransformField> for TransformFields {
    fn from(field: TransformField) -> Self {
        match field {
            TransformField::Scale => Self::SCALE,
            TransformField::TranslateX => Self::TRANSLATE_X,
            TransformField::TranslateY => Self::TRANSLATE_Y,
        }
    }
}

/// Scale and translation of the image layer.
///
/// The scale is applied about the image center, and the translation moves
/// the image center away from the viewport center. Scale may leave
/// `[1, max_zoom]` while a pinch is live; it returns there once the engine is
/// at rest.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformState {
    /// Uniform scale relative to the fitted size.
    pub scale: f64,
    /// Horizontal translation in view units.
    pub translate_x: f64,
    /// Vertical translation in view units.
    pub translate_y: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformState {
    /// The baseline transform: fitted, centered, unzoomed.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Returns the value of one field.
    #[must_use]
    pub fn get(&self, field: TransformField) -> f64 {
        match field {
            TransformField::Scale => self.scale,
            TransformField::TranslateX => self.translate_x,
            TransformField::TranslateY => self.translate_y,
        }
    }

    /// Sets the value of one field.
    pub fn set(&mut self, field: TransformField, value: f64) {
        match field {
            TransformField::Scale => self.scale = value,
            TransformField::TranslateX => self.translate_x = value,
            TransformField::TranslateY => self.translate_y = value,
        }
    }

    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Returns the affine transform mapping image-local coordinates (the
    /// fitted box, origin at its top-left corner) into viewport coordinates.
    ///
    /// The fitted box is centered in the viewport, scaled about its own
    /// center, then translated.
    ///
    /// ```rust
    /// use kurbo::{Point, Size};
    /// use pinchview_gesture::TransformState;
    ///
    /// let fitted = Size::new(300.0, 400.0);
    /// let viewport = Size::new(400.0, 800.0);
    /// let state = TransformState { scale: 2.0, translate_x: 10.0, translate_y: 0.0 };
    ///
    /// // The image center lands on the viewport center plus the translation.
    /// let center = state.image_transform(fitted, viewport) * Point::new(150.0, 200.0);
    /// assert_eq!(center, Point::new(210.0, 400.0));
    /// ```
    #[must_use]
    pub fn image_transform(&self, fitted: Size, viewport: Size) -> Affine {
        let viewport_center = viewport.to_vec2() / 2.0;
        let image_center = fitted.to_vec2() / 2.0;
        Affine::translate(viewport_center + self.translation())
            * Affine::scale(self.scale)
            * Affine::translate(-image_center)
    }
}

/// Transform values captured at the start of a gesture.
///
/// Pinch start records the scale; pan start records the translation. Every
/// update within that gesture is computed from these values rather than from
/// the live state, so sequential updates never compound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSnapshot {
    /// Scale when the current pinch started.
    pub scale: f64,
    /// Horizontal translation when the current pan started.
    pub translate_x: f64,
    /// Vertical translation when the current pan started.
    pub translate_y: f64,
}

impl Default for GestureSnapshot {
    fn default() -> Self {
        Self::capture(&TransformState::IDENTITY)
    }
}

impl GestureSnapshot {
    /// Captures every field of `state`.
    #[must_use]
    pub fn capture(state: &TransformState) -> Self {
        Self {
            scale: state.scale,
            translate_x: state.translate_x,
            translate_y: state.translate_y,
        }
    }

    /// Records the scale at pinch start.
    pub fn save_scale(&mut self, state: &TransformState) {
        self.scale = state.scale;
    }

    /// Records the translation at pan start.
    pub fn save_translation(&mut self, state: &TransformState) {
        self.translate_x = state.translate_x;
        self.translate_y = state.translate_y;
    }
}
