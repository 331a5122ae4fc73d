// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::bounds::TranslationBounds;

/// Translation that brings `anchor` toward the viewport center when zooming
/// the fitted image to `scale`.
///
/// `anchor` is in the image's local space at scale `1.0`, so the fitted
/// center is `fitted / 2`. The result is clamped into the bounds at `scale`,
/// which keeps the image edges from pulling away from the viewport edges.
#[must_use]
pub fn anchored_translation(fitted: Size, scale: f64, viewport: Size, anchor: Point) -> Vec2 {
    let center = fitted.to_vec2() / 2.0;
    let offset = Vec2::new(center.x - anchor.x, center.y - anchor.y) * scale;
    TranslationBounds::new(fitted, scale, viewport).clamp(offset)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::anchored_translation;

    #[test]
    fn center_anchor_needs_no_offset() {
        let t = anchored_translation(
            Size::new(300.0, 400.0),
            3.0,
            Size::new(400.0, 800.0),
            Point::new(150.0, 200.0),
        );
        assert_eq!(t, Vec2::ZERO);
    }

    #[test]
    fn off_center_anchor_is_scaled() {
        // 900x1200 at 3x inside 400x800: bounds are +-250 and +-200.
        let t = anchored_translation(
            Size::new(300.0, 400.0),
            3.0,
            Size::new(400.0, 800.0),
            Point::new(100.0, 230.0),
        );
        assert_eq!(t, Vec2::new(150.0, -90.0));
    }

    #[test]
    fn corner_anchor_is_clamped() {
        let t = anchored_translation(
            Size::new(300.0, 400.0),
            3.0,
            Size::new(400.0, 800.0),
            Point::ZERO,
        );
        assert_eq!(t, Vec2::new(250.0, 200.0));
    }

    #[test]
    fn axis_that_still_fits_stays_centered() {
        // 300x100 at 2x is 600x200: Y still fits inside 800.
        let t = anchored_translation(
            Size::new(300.0, 100.0),
            2.0,
            Size::new(400.0, 800.0),
            Point::new(150.0, 0.0),
        );
        assert_eq!(t, Vec2::new(0.0, 0.0));
    }
}
