// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal computation: scroll deltas that bring a rectangle into view.

use kurbo::{Rect, Vec2};

/// The scroll delta that brings `target` into `viewport`, or `None` when it
/// is already fully visible.
///
/// Per axis: a target past the viewport's far edge aligns far edges; else a
/// target before the near edge aligns near edges. A target larger than the
/// viewport therefore ends up with its far edge aligned. Both rectangles
/// are in the same coordinate space; the host adds the delta to its scroll
/// offset (the viewport's origin) and performs the actual scrolling.
///
/// ```rust
/// use kurbo::Rect;
/// use waymark_nav::reveal;
///
/// let viewport = Rect::new(0.0, 100.0, 800.0, 700.0);
///
/// // A target below the viewport scrolls down just enough.
/// let below = Rect::new(10.0, 760.0, 60.0, 790.0);
/// assert_eq!(reveal(viewport, below).unwrap().y, 90.0);
///
/// // A visible target needs no scrolling.
/// let visible = Rect::new(10.0, 200.0, 60.0, 250.0);
/// assert!(reveal(viewport, visible).is_none());
/// ```
#[must_use]
pub fn reveal(viewport: Rect, target: Rect) -> Option<Vec2> {
    let dx = axis_delta(viewport.x0, viewport.x1, target.x0, target.x1);
    let dy = axis_delta(viewport.y0, viewport.y1, target.y0, target.y1);
    (dx != 0.0 || dy != 0.0).then_some(Vec2::new(dx, dy))
}

fn axis_delta(view_min: f64, view_max: f64, min: f64, max: f64) -> f64 {
    if max > view_max {
        max - view_max
    } else if min < view_min {
        min - view_min
    } else {
        0.0
    }
}
