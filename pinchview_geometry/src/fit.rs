// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Which rule produced a fitted size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitAxis {
    /// Square image fitted to the smaller viewport dimension on both axes.
    Square,
    /// Width matches the viewport width; height follows the aspect ratio.
    Width,
    /// Height matches the viewport height; width follows the aspect ratio.
    Height,
}

/// Result of [`fit_with_axis`]: the fitted size and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    /// On-screen size of the image at scale `1.0`.
    pub size: Size,
    /// Rule that produced [`Fit::size`].
    pub axis: FitAxis,
}

/// Computes the displayed size of an image inside `viewport`, preserving the
/// aspect ratio of `intrinsic`.
///
/// See [`fit_with_axis`] for the selection rules.
#[must_use]
pub fn fit(viewport: Size, intrinsic: Size) -> Size {
    fit_with_axis(viewport, intrinsic).size
}

/// Computes the fitted size and reports which axis it was fitted to.
///
/// - Square images become a square with the side of the smaller viewport
///   dimension.
/// - Landscape images are fitted to the viewport width.
/// - Other images are fitted to the viewport height, unless that would make
///   them wider than the viewport, in which case they fall back to the
///   viewport width.
#[must_use]
pub fn fit_with_axis(viewport: Size, intrinsic: Size) -> Fit {
    debug_assert!(
        intrinsic.width > 0.0 && intrinsic.height > 0.0,
        "intrinsic size must be positive, got {intrinsic:?}"
    );

    if intrinsic.width == intrinsic.height {
        let side = viewport.width.min(viewport.height);
        return Fit {
            size: Size::new(side, side),
            axis: FitAxis::Square,
        };
    }

    let by_width = Fit {
        size: Size::new(
            viewport.width,
            proportional(intrinsic.width, viewport.width, intrinsic.height),
        ),
        axis: FitAxis::Width,
    };

    if intrinsic.width > intrinsic.height {
        return by_width;
    }

    let by_height = Fit {
        size: Size::new(
            proportional(intrinsic.height, viewport.height, intrinsic.width),
            viewport.height,
        ),
        axis: FitAxis::Height,
    };

    if by_height.size.width > viewport.width {
        by_width
    } else {
        by_height
    }
}

/// If `from` maps to `to`, returns what `value` maps to.
fn proportional(from: f64, to: f64, value: f64) -> f64 {
    (to * value) / from
}
