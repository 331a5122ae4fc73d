// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.

use kurbo::{Point, Size, Vec2};
use pinchview_geometry::{TranslationBounds, anchored_translation, fit};
use tracing::{debug, trace};

use crate::config::{ConfigError, ViewerConfig};
use crate::directive::{AnimationDirective, Directives};
use crate::event::{GestureEvent, PanEnd, ViewerRequest};
use crate::transform::{GestureSnapshot, TransformField, TransformFields, TransformState};

/// Dominant activity of a [`GestureInterpreter`].
///
/// Pinch and pan compose, so both may be live at once; [`GesturePhase::PinchActive`]
/// wins in that case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// Nothing is happening; the transform is at rest.
    Idle,
    /// A pinch is in progress (possibly together with a pan).
    PinchActive,
    /// A pan is in progress.
    PanActive,
    /// Animating toward a double-tap target.
    DoubleTapZooming,
    /// Settling or decaying after a gesture ended.
    SettlingOrDecaying,
}

/// Result of feeding one event to the interpreter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outcome {
    /// One directive per field that changed.
    pub directives: Directives,
    /// Notification for the host, if any.
    pub request: Option<ViewerRequest>,
}

impl Outcome {
    /// Returns `true` if the event produced nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.request.is_none()
    }

    /// Shorthand for `self.directives.get(field)`.
    #[must_use]
    pub fn directive(&self, field: TransformField) -> Option<AnimationDirective> {
        self.directives.get(field)
    }
}

/// Converts gesture events into a bounded image transform.
///
/// The interpreter owns the live [`TransformState`]. Every event is applied
/// synchronously and returns an [`Outcome`] describing how each changed field
/// should be animated, and whether the host should be notified.
///
/// ## Minimal example
///
/// ```
/// use kurbo::{Point, Size};
/// use pinchview_gesture::{AnimationDirective, GestureEvent, GestureInterpreter, TransformField};
///
/// let mut viewer = GestureInterpreter::new(Size::new(400.0, 800.0), Size::new(300.0, 400.0));
/// assert_eq!(viewer.fitted_size(), Size::new(400.0, 1600.0 / 3.0));
///
/// let out = viewer.handle(GestureEvent::DoubleTap { position: Point::new(200.0, 800.0 / 3.0) });
/// assert_eq!(out.directive(TransformField::Scale), Some(AnimationDirective::SettleTo(3.0)));
/// assert_eq!(out.directive(TransformField::TranslateX), Some(AnimationDirective::SettleTo(0.0)));
/// ```
#[derive(Clone, Debug)]
pub struct GestureInterpreter {
    config: ViewerConfig,
    viewport: Size,
    intrinsic: Size,
    fitted: Size,
    state: TransformState,
    snapshot: GestureSnapshot,
    pinching: bool,
    panning: bool,
    /// Release data of the pan in the current composed gesture.
    pan_end: Option<PanEnd>,
    in_flight: TransformFields,
    double_tap_in_flight: bool,
}

impl GestureInterpreter {
    /// Creates an interpreter with the default [`ViewerConfig`].
    ///
    /// Both sizes must be positive.
    #[must_use]
    pub fn new(viewport: Size, intrinsic: Size) -> Self {
        Self::build(viewport, intrinsic, ViewerConfig::default())
    }

    /// Creates an interpreter with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`ViewerConfig::validate`].
    pub fn with_config(
        viewport: Size,
        intrinsic: Size,
        config: ViewerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(viewport, intrinsic, config))
    }

    fn build(viewport: Size, intrinsic: Size, config: ViewerConfig) -> Self {
        Self {
            config,
            viewport,
            intrinsic,
            fitted: fit(viewport, intrinsic),
            state: TransformState::IDENTITY,
            snapshot: GestureSnapshot::default(),
            pinching: false,
            panning: false,
            pan_end: None,
            in_flight: TransformFields::empty(),
            double_tap_in_flight: false,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Returns the current viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the image's intrinsic size.
    #[must_use]
    pub fn intrinsic_size(&self) -> Size {
        self.intrinsic
    }

    /// Returns the fitted image size for the current viewport.
    #[must_use]
    pub fn fitted_size(&self) -> Size {
        self.fitted
    }

    /// Returns the live transform.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Returns the snapshot taken at the most recent gesture start.
    #[must_use]
    pub fn snapshot(&self) -> GestureSnapshot {
        self.snapshot
    }

    /// Fields with an animation still running in the executor.
    #[must_use]
    pub fn in_flight(&self) -> TransformFields {
        self.in_flight
    }

    /// Returns the dominant activity.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.pinching {
            GesturePhase::PinchActive
        } else if self.panning {
            GesturePhase::PanActive
        } else if self.in_flight.is_empty() {
            GesturePhase::Idle
        } else if self.double_tap_in_flight {
            GesturePhase::DoubleTapZooming
        } else {
            GesturePhase::SettlingOrDecaying
        }
    }

    /// Returns `true` if no gesture is live and no animation is in flight.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.phase() == GesturePhase::Idle
    }

    /// Translation bounds at the live scale.
    #[must_use]
    pub fn bounds(&self) -> TranslationBounds {
        self.bounds_at(self.state.scale)
    }

    fn bounds_at(&self, scale: f64) -> TranslationBounds {
        TranslationBounds::new(self.fitted, scale, self.viewport)
    }

    /// Updates the viewport size (for example after a rotation) and refits the
    /// image.
    ///
    /// The live transform is left untouched; the next pan clamps against the
    /// new bounds.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.fitted = fit(viewport, self.intrinsic);
        debug!(?viewport, fitted = ?self.fitted, "viewport changed");
    }

    /// Returns to the baseline transform for a new image session.
    pub fn reset(&mut self) {
        self.state = TransformState::IDENTITY;
        self.snapshot = GestureSnapshot::default();
        self.pinching = false;
        self.panning = false;
        self.pan_end = None;
        self.in_flight = TransformFields::empty();
        self.double_tap_in_flight = false;
    }

    /// Writes a value produced by the animation executor.
    ///
    /// Frames for fields that are not in flight are ignored: an
    /// [`AnimationDirective::Instant`] has superseded that animation.
    pub fn apply_animation_frame(&mut self, field: TransformField, value: f64) {
        if self.in_flight.contains(field.into()) {
            self.state.set(field, value);
        }
    }

    /// Marks the animation on `field` as finished at `value`.
    pub fn finish_animation(&mut self, field: TransformField, value: f64) {
        if !self.in_flight.contains(field.into()) {
            return;
        }
        self.state.set(field, value);
        self.in_flight.remove(field.into());
        if self.in_flight.is_empty() {
            self.double_tap_in_flight = false;
            trace!(state = ?self.state, "at rest");
        }
    }

    /// Applies one gesture event.
    pub fn handle(&mut self, event: GestureEvent) -> Outcome {
        trace!(?event, "gesture event");
        let mut out = Outcome::default();
        let from_double_tap = matches!(event, GestureEvent::DoubleTap { .. });
        match event {
            GestureEvent::PinchStart => self.pinch_start(),
            GestureEvent::PinchUpdate { ratio } => self.pinch_update(ratio, &mut out),
            GestureEvent::PinchEnd { ratio } => self.pinch_end(ratio, &mut out),
            GestureEvent::PanStart => self.pan_start(),
            GestureEvent::PanUpdate { translation } => self.pan_update(translation, &mut out),
            GestureEvent::PanEnd(end) => self.pan_end(end, &mut out),
            GestureEvent::SingleTap => self.single_tap(&mut out),
            GestureEvent::DoubleTap { position } => self.double_tap(position, &mut out),
        }
        self.commit(&out, from_double_tap);
        out
    }

    fn gesture_active(&self) -> bool {
        self.pinching || self.panning
    }

    fn pinch_start(&mut self) {
        if !self.gesture_active() {
            self.pan_end = None;
        }
        self.pinching = true;
        self.snapshot.save_scale(&self.state);
    }

    fn pinch_update(&mut self, ratio: f64, out: &mut Outcome) {
        if !self.pinching {
            return;
        }
        // Left unclamped while live; settling happens at gesture end.
        self.state.scale = self.snapshot.scale * ratio;
        out.directives
            .set(TransformField::Scale, AnimationDirective::Instant(self.state.scale));
    }

    fn pinch_end(&mut self, ratio: f64, out: &mut Outcome) {
        if !self.pinching {
            return;
        }
        self.pinch_update(ratio, out);
        self.pinching = false;
        if !self.panning {
            self.settle(out);
        }
    }

    fn pan_start(&mut self) {
        if !self.gesture_active() {
            self.pan_end = None;
        }
        self.panning = true;
        self.snapshot.save_translation(&self.state);
    }

    fn pan_update(&mut self, translation: Vec2, out: &mut Outcome) {
        if !self.panning {
            return;
        }
        let scale = self.state.scale;
        let target_x = self.snapshot.translate_x + translation.x;
        let target_y = self.snapshot.translate_y + translation.y;

        if scale < 1.0 {
            // Horizontal stays locked below baseline; vertical follows the finger.
            self.set_instant(TransformField::TranslateY, target_y, out);
            return;
        }

        let bounds = self.bounds_at(scale);
        self.set_instant(TransformField::TranslateX, bounds.x.clamp(target_x), out);
        let y = if scale > 1.0 {
            bounds.y.clamp(target_y)
        } else {
            // Unclamped at exactly baseline so the image can be pulled away.
            target_y
        };
        self.set_instant(TransformField::TranslateY, y, out);
    }

    fn pan_end(&mut self, end: PanEnd, out: &mut Outcome) {
        if !self.panning {
            return;
        }
        self.panning = false;
        self.pan_end = Some(end);
        if !self.pinching {
            self.settle(out);
        }
    }

    /// Decides how the transform comes to rest once the composed pinch/pan
    /// gesture has fully ended.
    fn settle(&mut self, out: &mut Outcome) {
        let end = self.pan_end.take().unwrap_or_default();
        let scale = self.state.scale;
        let max_zoom = self.config.max_zoom_scale;

        if scale == 1.0 {
            if self.config.dismiss.should_dismiss(scale, &end) {
                debug!(
                    translation_y = end.translation.y,
                    velocity_y = end.velocity.y,
                    "dismiss requested"
                );
                out.request = Some(ViewerRequest::Close);
                return;
            }
            debug!("settling translation back to center");
            Self::settle_translation(out);
        } else if scale < 1.0 {
            debug!(scale, "settling back to baseline");
            Self::settle_to_baseline(out);
        } else if scale > max_zoom {
            // Translation is not re-clamped here.
            debug!(scale, max_zoom, "settling back to max zoom");
            out.directives
                .set(TransformField::Scale, AnimationDirective::SettleTo(max_zoom));
        } else {
            let bounds = self.bounds_at(scale);
            debug!(scale, velocity = ?end.velocity, "decaying within bounds");
            out.directives.set(
                TransformField::TranslateX,
                AnimationDirective::DecayWithClamp {
                    velocity: end.velocity.x,
                    min: bounds.x.min,
                    max: bounds.x.max,
                },
            );
            out.directives.set(
                TransformField::TranslateY,
                AnimationDirective::DecayWithClamp {
                    velocity: end.velocity.y,
                    min: bounds.y.min,
                    max: bounds.y.max,
                },
            );
        }
    }

    fn single_tap(&self, out: &mut Outcome) {
        if self.gesture_active() {
            trace!("single tap claimed by pinch/pan");
            return;
        }
        out.request = Some(ViewerRequest::SingleTap);
    }

    fn double_tap(&self, position: Point, out: &mut Outcome) {
        if self.gesture_active() {
            trace!("double tap claimed by pinch/pan");
            return;
        }
        if self.state.scale > 1.0 {
            debug!("double tap: zooming out");
            Self::settle_to_baseline(out);
            return;
        }

        let max_zoom = self.config.max_zoom_scale;
        let target = anchored_translation(self.fitted, max_zoom, self.viewport, position);
        debug!(?position, ?target, "double tap: zooming in");
        out.directives
            .set(TransformField::Scale, AnimationDirective::SettleTo(max_zoom));
        out.directives
            .set(TransformField::TranslateX, AnimationDirective::SettleTo(target.x));
        out.directives
            .set(TransformField::TranslateY, AnimationDirective::SettleTo(target.y));
    }

    fn settle_translation(out: &mut Outcome) {
        out.directives
            .set(TransformField::TranslateX, AnimationDirective::SettleTo(0.0));
        out.directives
            .set(TransformField::TranslateY, AnimationDirective::SettleTo(0.0));
    }

    fn settle_to_baseline(out: &mut Outcome) {
        out.directives
            .set(TransformField::Scale, AnimationDirective::SettleTo(1.0));
        Self::settle_translation(out);
    }

    fn set_instant(&mut self, field: TransformField, value: f64, out: &mut Outcome) {
        self.state.set(field, value);
        out.directives.set(field, AnimationDirective::Instant(value));
    }

    /// Tracks which fields the executor is now animating.
    fn commit(&mut self, out: &Outcome, from_double_tap: bool) {
        self.in_flight.remove(out.directives.instant_fields());
        let animated = out.directives.animated_fields();
        if !animated.is_empty() {
            self.in_flight |= animated;
            self.double_tap_in_flight = from_double_tap;
        } else if self.in_flight.is_empty() {
            self.double_tap_in_flight = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{GestureInterpreter, GesturePhase};
    use crate::directive::AnimationDirective;
    use crate::event::{GestureEvent, PanEnd, ViewerRequest};
    use crate::transform::{TransformField, TransformFields};

    fn viewer() -> GestureInterpreter {
        // Fits to 300x400 inside 400x800.
        let v = GestureInterpreter::new(Size::new(400.0, 800.0), Size::new(300.0, 800.0));
        assert_eq!(v.fitted_size(), Size::new(300.0, 800.0));
        v
    }

    fn pan_end(tx: f64, ty: f64, vx: f64, vy: f64) -> GestureEvent {
        GestureEvent::PanEnd(PanEnd {
            translation: Vec2::new(tx, ty),
            velocity: Vec2::new(vx, vy),
        })
    }

    #[test]
    fn pinch_update_is_relative_to_snapshot() {
        let mut v = viewer();
        v.handle(GestureEvent::PinchStart);
        v.handle(GestureEvent::PinchUpdate { ratio: 1.5 });
        let out = v.handle(GestureEvent::PinchUpdate { ratio: 2.0 });
        assert_eq!(v.state().scale, 2.0);
        assert_eq!(
            out.directive(TransformField::Scale),
            Some(AnimationDirective::Instant(2.0))
        );
        assert_eq!(v.phase(), GesturePhase::PinchActive);
    }

    #[test]
    fn pinch_is_not_clamped_while_live() {
        let mut v = viewer();
        v.handle(GestureEvent::PinchStart);
        v.handle(GestureEvent::PinchUpdate { ratio: 5.0 });
        assert_eq!(v.state().scale, 5.0);
        v.handle(GestureEvent::PinchUpdate { ratio: 0.4 });
        assert_eq!(v.state().scale, 0.4);
    }

    #[test]
    fn updates_without_start_are_ignored() {
        let mut v = viewer();
        assert!(v.handle(GestureEvent::PinchUpdate { ratio: 2.0 }).is_empty());
        assert!(
            v.handle(GestureEvent::PanUpdate {
                translation: Vec2::new(10.0, 10.0)
            })
            .is_empty()
        );
        assert!(v.handle(pan_end(0.0, -300.0, 0.0, -3000.0)).is_empty());
        assert_eq!(v.state().scale, 1.0);
    }

    #[test]
    fn pan_below_baseline_locks_x() {
        let mut v = viewer();
        v.handle(GestureEvent::PinchStart);
        v.handle(GestureEvent::PinchUpdate { ratio: 0.5 });
        v.handle(GestureEvent::PanStart);
        let out = v.handle(GestureEvent::PanUpdate {
            translation: Vec2::new(80.0, 120.0),
        });
        assert_eq!(v.state().translate_x, 0.0);
        assert_eq!(v.state().translate_y, 120.0);
        assert_eq!(out.directive(TransformField::TranslateX), None);
    }

    #[test]
    fn pan_at_baseline_clamps_x_but_not_y() {
        let mut v = viewer();
        v.handle(GestureEvent::PanStart);
        v.handle(GestureEvent::PanUpdate {
            translation: Vec2::new(80.0, -120.0),
        });
        // Image is narrower than the viewport: X has no play.
        assert_eq!(v.state().translate_x, 0.0);
        assert_eq!(v.state().translate_y, -120.0);
    }

    #[test]
    fn pan_when_zoomed_clamps_both_axes() {
        let mut v = viewer();
        v.handle(GestureEvent::PinchStart);
        v.handle(GestureEvent::PinchUpdate { ratio: 2.0 });
        v.handle(GestureEvent::PanStart);
        v.handle(GestureEvent::PanUpdate {
            translation: Vec2::new(1000.0, -1000.0),
        });
        // 600x1600 inside 400x800.
        assert_eq!(v.state().translate_x, 100.0);
        assert_eq!(v.state().translate_y, -400.0);
        assert!(v.bounds().contains(v.state().translation()));
    }

    #[test]
    fn composed_gesture_settles_once_after_last_end() {
        let mut v = viewer();
        v.handle(GestureEvent::PinchStart);
        v.handle(GestureEvent::PanStart);
        v.handle(GestureEvent::PinchUpdate { ratio: 4.0 });
        let out = v.handle(pan_end(0.0, 0.0, 0.0, 0.0));
        assert!(out.is_empty(), "pinch still live: {out:?}");

        let out = v.handle(GestureEvent::PinchEnd { ratio: 4.0 });
        assert_eq!(
            out.directive(TransformField::Scale),
            Some(AnimationDirective::SettleTo(3.0))
        );
        assert_eq!(out.directive(TransformField::TranslateX), None);
        assert_eq!(v.phase(), GesturePhase::SettlingOrDecaying);
    }

    #[test]
    fn pinch_only_end_uses_zero_velocity() {
        let mut v = viewer();
        v.handle(GestureEvent::PinchStart);
        let out = v.handle(GestureEvent::PinchEnd { ratio: 2.0 });
        assert_eq!(
            out.directive(TransformField::TranslateX),
            Some(AnimationDirective::DecayWithClamp {
                velocity: 0.0,
                min: -100.0,
                max: 100.0,
            })
        );
        assert_eq!(out.directive(TransformField::Scale), Some(AnimationDirective::Instant(2.0)));
    }

    #[test]
    fn taps_are_claimed_by_live_gestures() {
        let mut v = viewer();
        v.handle(GestureEvent::PanStart);
        assert!(v.handle(GestureEvent::SingleTap).is_empty());
        assert!(
            v.handle(GestureEvent::DoubleTap {
                position: Point::new(10.0, 10.0)
            })
            .is_empty()
        );
    }

    #[test]
    fn single_tap_requests_notification_without_changes() {
        let mut v = viewer();
        let out = v.handle(GestureEvent::SingleTap);
        assert_eq!(out.request, Some(ViewerRequest::SingleTap));
        assert!(out.directives.is_empty());
        assert!(v.is_at_rest());
    }

    #[test]
    fn animation_writeback_and_rest() {
        let mut v = viewer();
        v.handle(GestureEvent::DoubleTap {
            position: Point::new(150.0, 400.0),
        });
        assert_eq!(v.phase(), GesturePhase::DoubleTapZooming);
        assert_eq!(v.in_flight(), TransformFields::all());

        v.apply_animation_frame(TransformField::Scale, 2.0);
        assert_eq!(v.state().scale, 2.0);

        for field in TransformField::ALL {
            let target = if field == TransformField::Scale { 3.0 } else { 0.0 };
            v.finish_animation(field, target);
        }
        assert!(v.is_at_rest());
        assert_eq!(v.state().scale, 3.0);
    }

    #[test]
    fn instant_supersedes_running_animation() {
        let mut v = viewer();
        v.handle(GestureEvent::DoubleTap {
            position: Point::new(150.0, 400.0),
        });
        v.handle(GestureEvent::PinchStart);
        v.handle(GestureEvent::PinchUpdate { ratio: 1.0 });
        assert!(!v.in_flight().contains(TransformFields::SCALE));

        // A late frame from the cancelled zoom must not overwrite the pinch.
        v.apply_animation_frame(TransformField::Scale, 2.5);
        assert_eq!(v.state().scale, 1.0);
    }

    #[test]
    fn viewport_change_refits() {
        let mut v = GestureInterpreter::new(Size::new(400.0, 800.0), Size::new(4000.0, 3000.0));
        assert_eq!(v.fitted_size(), Size::new(400.0, 300.0));
        v.set_viewport(Size::new(800.0, 400.0));
        assert_eq!(v.fitted_size(), Size::new(800.0, 600.0));
        assert_eq!(v.viewport(), Size::new(800.0, 400.0));
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut v = viewer();
        v.handle(GestureEvent::PinchStart);
        v.handle(GestureEvent::PinchUpdate { ratio: 2.0 });
        v.reset();
        assert!(v.is_at_rest());
        assert_eq!(v.state().scale, 1.0);
        assert_eq!(v.snapshot().scale, 1.0);
    }
}
