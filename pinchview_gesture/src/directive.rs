// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative animation instructions for an external animation executor.
//!
//! The engine never interpolates anything itself. For each field it changes it
//! emits one [`AnimationDirective`] describing *where* the value should go:
//!
//! - [`AnimationDirective::Instant`]: jump to a value now, replacing any
//!   animation still running on that field. Used while a gesture is live.
//! - [`AnimationDirective::SettleTo`]: animate to a fixed target with whatever
//!   timing curve the executor prefers.
//! - [`AnimationDirective::DecayWithClamp`]: continue with the release velocity,
//!   slowing down, and never leave `[min, max]`.
//!
//! Executors report progress back through
//! [`GestureInterpreter::apply_animation_frame`](crate::GestureInterpreter::apply_animation_frame)
//! and [`GestureInterpreter::finish_animation`](crate::GestureInterpreter::finish_animation).

use smallvec::SmallVec;

use crate::transform::{TransformField, TransformFields};

/// Per-millisecond velocity retention of the default decay curve.
///
/// Matches the default deceleration of common mobile momentum scrolling.
pub const DEFAULT_DECELERATION: f64 = 0.998;

/// What the executor should do with one field.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationDirective {
    /// Set the value immediately.
    Instant(f64),
    /// Animate to the given value.
    SettleTo(f64),
    /// Momentum animation from the current value.
    DecayWithClamp {
        /// Release velocity in view units per second.
        velocity: f64,
        /// Lower clamp.
        min: f64,
        /// Upper clamp.
        max: f64,
    },
}

impl AnimationDirective {
    /// Returns `true` if the directive needs the executor to run frames.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        !matches!(self, Self::Instant(_))
    }

    /// Predicts where the field comes to rest, starting from `current`.
    ///
    /// For decays this projects the default exponential decay
    /// ([`DEFAULT_DECELERATION`]) to its end and clamps it.
    #[must_use]
    pub fn resting_value(&self, current: f64) -> f64 {
        match *self {
            Self::Instant(value) | Self::SettleTo(value) => value,
            Self::DecayWithClamp { velocity, min, max } => {
                let travel =
                    velocity / 1000.0 * DEFAULT_DECELERATION / (1.0 - DEFAULT_DECELERATION);
                let end = current + travel;
                if end > max {
                    max
                } else if end < min {
                    min
                } else {
                    end
                }
            }
        }
    }
}

/// A directive bound to the field it drives.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDirective {
    /// Target field.
    pub field: TransformField,
    /// What to do with it.
    pub directive: AnimationDirective,
}

/// Directives produced by one event, at most one per field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Directives {
    items: SmallVec<[FieldDirective; 3]>,
}

impl Directives {
    /// Adds a directive, replacing an earlier one for the same field.
    pub fn set(&mut self, field: TransformField, directive: AnimationDirective) {
        if let Some(existing) = self.items.iter_mut().find(|d| d.field == field) {
            existing.directive = directive;
        } else {
            self.items.push(FieldDirective { field, directive });
        }
    }

    /// Returns the directive for `field`, if any.
    #[must_use]
    pub fn get(&self, field: TransformField) -> Option<AnimationDirective> {
        self.items
            .iter()
            .find(|d| d.field == field)
            .map(|d| d.directive)
    }

    /// Returns all directives in emission order.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldDirective] {
        &self.items
    }

    /// Returns `true` if there are no directives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of directives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Fields that will be animated by the executor.
    #[must_use]
    pub fn animated_fields(&self) -> TransformFields {
        self.items
            .iter()
            .filter(|d| d.directive.is_animated())
            .fold(TransformFields::empty(), |acc, d| acc | d.field.into())
    }

    /// Fields that are set immediately.
    #[must_use]
    pub fn instant_fields(&self) -> TransformFields {
        self.items
            .iter()
            .filter(|d| !d.directive.is_animated())
            .fold(TransformFields::empty(), |acc, d| acc | d.field.into())
    }

    /// Iterates over the directives.
    pub fn iter(&self) -> core::slice::Iter<'_, FieldDirective> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Directives {
    type Item = &'a FieldDirective;
    type IntoIter = core::slice::Iter<'a, FieldDirective>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
