// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events and output notifications.

use kurbo::{Point, Vec2};

/// Release data of a pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanEnd {
    /// Total translation since pan start, in view units.
    pub translation: Vec2,
    /// Release velocity, in view units per second.
    pub velocity: Vec2,
}

/// A recognized gesture event, in the image container's local space.
///
/// Events arrive already recognized by the platform's gesture source. Start
/// events always precede the updates and the end of the same gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureEvent {
    /// Two fingers went down.
    PinchStart,
    /// Pinch moved; `ratio` is the cumulative scale factor since pinch start.
    PinchUpdate {
        /// Scale factor relative to pinch start.
        ratio: f64,
    },
    /// Pinch released with a final cumulative ratio.
    PinchEnd {
        /// Scale factor relative to pinch start.
        ratio: f64,
    },
    /// A pan began.
    PanStart,
    /// Pan moved; `translation` is cumulative since pan start.
    PanUpdate {
        /// Offset since pan start.
        translation: Vec2,
    },
    /// Pan released.
    PanEnd(PanEnd),
    /// A single tap that no other gesture claimed.
    SingleTap,
    /// A double tap at `position`.
    DoubleTap {
        /// Tap location in the image container's local space.
        position: Point,
    },
}

/// A notification for the host, to be delivered on its UI thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewerRequest {
    /// The user swiped the image away; the viewer should close.
    Close,
    /// The user tapped once.
    SingleTap,
}
