// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pinchview_geometry --heading-base-level=0

//! PinchView Geometry: image fitting and pan bounds for a zoomable image layer.
//!
//! This crate provides the pure, stateless geometry behind a single zoomable
//! image shown inside a viewport. It focuses on:
//! - Fitting an image's intrinsic size into a viewport while preserving its
//!   aspect ratio ([`fit`]).
//! - Computing the legal translation range of the image layer at a given
//!   scale ([`bounds`]).
//! - Finding the translation that keeps a tapped point in view after zooming
//!   ([`anchored_translation`]).
//!
//! It does **not** track any gesture or animation state. Callers are expected
//! to:
//! - Recompute the fitted size whenever the viewport changes (for example on
//!   device rotation).
//! - Recompute bounds whenever the scale changes; they are cheap and are
//!   not meant to be cached across scale changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use pinchview_geometry::{bounds, fit};
//!
//! // A 4:3 landscape photo on a 400x800 portrait screen.
//! let viewport = Size::new(400.0, 800.0);
//! let fitted = fit(viewport, Size::new(4000.0, 3000.0));
//! assert_eq!(fitted, Size::new(400.0, 300.0));
//!
//! // At 2x the image is 800 wide, so 200 units of play on each side of X,
//! // while 600 high still fits: no vertical panning.
//! let b = bounds(fitted, 2.0, viewport);
//! assert_eq!((b.x.min, b.x.max), (-200.0, 200.0));
//! assert_eq!((b.y.min, b.y.max), (0.0, 0.0));
//! assert_eq!(b.clamp(Vec2::new(500.0, 50.0)), Vec2::new(200.0, 0.0));
//! ```
//!
//! ## Coordinate conventions
//!
//! - Sizes are in view units (typically logical pixels).
//! - Translations are offsets of the image center from the viewport center,
//!   so a centered image has translation `(0, 0)` and bounds are always
//!   symmetric around zero.
//!
//! Inputs are assumed to be positive and finite. Zero or negative sizes are
//! outside the contract and yield unspecified (possibly NaN) geometry.
//!
//! This crate is `no_std`.

#![no_std]

mod anchor;
mod bounds;
mod fit;

pub use anchor::anchored_translation;
pub use bounds::{AxisBounds, TranslationBounds, bounds};
pub use fit::{Fit, FitAxis, fit, fit_with_axis};
