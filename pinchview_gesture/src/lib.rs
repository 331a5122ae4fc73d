// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pinchview_gesture --heading-base-level=0

//! PinchView Gesture: turn pinch, pan and tap events into a bounded image transform.
//!
//! This crate is the headless core of a zoomable image viewer. A
//! [`GestureInterpreter`] consumes already-recognized [`GestureEvent`]s and
//! keeps a [`TransformState`] (scale plus X/Y translation) within the limits
//! computed by [`pinchview_geometry`]. For each event it returns an
//! [`Outcome`]:
//!
//! - One [`AnimationDirective`] per changed field, telling an external
//!   animation executor to jump, settle or decay.
//! - Optionally a [`ViewerRequest`] (close or single tap) that the host should
//!   deliver on its UI thread.
//!
//! The crate does not render, decode images, recognize raw touches, or run
//! animations. Hosts are expected to:
//!
//! - Feed gesture events in delivery order. Start events precede the updates
//!   and end of their gesture.
//! - Hand directives to their animation system and report progress back with
//!   [`GestureInterpreter::apply_animation_frame`] and
//!   [`GestureInterpreter::finish_animation`].
//! - Forward [`ViewerRequest`]s to the UI thread (see `pinchview_dispatch`).
//!
//! ## Gesture rules
//!
//! - **Pinch** scales relative to the scale at pinch start and is not clamped
//!   while live.
//! - **Pan** moves relative to the translation at pan start. Below baseline
//!   zoom only vertical movement is allowed; at baseline the vertical axis is
//!   free so the image can be pulled away; when zoomed both axes are clamped.
//! - **Release** settles the transform: a long or fast upward pull at
//!   baseline closes the viewer; otherwise the image springs back, returns to
//!   the zoom limits, or keeps its momentum inside the bounds.
//! - **Double tap** zooms to [`ViewerConfig::max_zoom_scale`] around the
//!   tapped point, or back out when already zoomed.
//! - **Taps** are ignored while a pinch or pan is live.
//!
//! ## Example: swipe to dismiss
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use pinchview_gesture::{GestureEvent, GestureInterpreter, PanEnd, ViewerRequest};
//!
//! let mut viewer = GestureInterpreter::new(Size::new(400.0, 800.0), Size::new(1600.0, 1200.0));
//!
//! viewer.handle(GestureEvent::PanStart);
//! viewer.handle(GestureEvent::PanUpdate { translation: Vec2::new(0.0, -60.0) });
//! let out = viewer.handle(GestureEvent::PanEnd(PanEnd {
//!     translation: Vec2::new(0.0, -60.0),
//!     velocity: Vec2::new(0.0, -2500.0),
//! }));
//!
//! assert_eq!(out.request, Some(ViewerRequest::Close));
//! assert!(out.directives.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and tracing with the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for events, directives and
//!   configuration.
//!
//! Decisions are logged through `tracing` at `debug` level, and every event at
//! `trace` level.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
pub mod directive;
pub mod dismiss;
mod event;
mod interpreter;
mod transform;

pub use config::{ConfigError, MAX_ZOOM_SCALE, ViewerConfig};
pub use directive::{AnimationDirective, DEFAULT_DECELERATION, Directives, FieldDirective};
pub use dismiss::DismissPolicy;
pub use event::{GestureEvent, PanEnd, ViewerRequest};
pub use interpreter::{GestureInterpreter, GesturePhase, Outcome};
pub use transform::{GestureSnapshot, TransformField, TransformFields, TransformState};
