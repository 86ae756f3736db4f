// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking helpers: element-relative position, angle and distance.
//!
//! The free functions are stateless and map a client-space position into the
//! normalized space of an element's bounding box, where the box spans
//! `[-1, 1]` on both axes and the center is the origin.
//!
//! [`HoverTracker`] wraps them for the common "follow the hovering pointer"
//! interaction: enter, move, leave, with an optional reset on leave.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_gesture::tracker;
//!
//! let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
//! let reading = tracker::track(Point::new(200.0, 50.0), bounds);
//! assert_eq!(reading.position, Point::new(1.0, 0.0));
//! assert_eq!(reading.angle, 0.0);
//! assert!(tracker::is_inside(Point::new(200.0, 100.0), bounds));
//! ```
//!
//! A zero-sized element has no meaningful normalized space. In that case the
//! helpers return `NaN` components and leave the decision to the caller.

use core::f64::consts::SQRT_2;

use kurbo::{Point, Rect, Vec2};

/// Angle and normalized distance of a point relative to the origin.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Polar {
    /// Angle in degrees, `atan2(y, x)`, in `(-180, 180]`.
    pub angle: f64,
    /// Euclidean length divided by `sqrt(2)`, so the corner of the unit box is `1`.
    pub distance: f64,
}

/// A pointer reading in element-normalized space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct TrackedPointer {
    /// Position in `[-1, 1]` on both axes for points inside the element.
    pub position: Point,
    /// See [`Polar::angle`].
    pub angle: f64,
    /// See [`Polar::distance`].
    pub distance: f64,
}

/// Maps a client-space position into the element's normalized `[-1, 1]` box.
///
/// Returns `NaN` coordinates for an element with zero (or non-finite) width or height.
#[must_use]
pub fn normalized_position(client: Point, bounds: Rect) -> Point {
    let bounds = bounds.abs();
    let (width, height) = (bounds.width(), bounds.height());
    if !is_extent(width) || !is_extent(height) {
        return Point::new(f64::NAN, f64::NAN);
    }
    Point::new(
        ((client.x - bounds.x0) / width) * 2.0 - 1.0,
        ((client.y - bounds.y0) / height) * 2.0 - 1.0,
    )
}

/// Computes the angle (degrees) and the `sqrt(2)`-normalized distance of `p`.
///
/// `NaN` inputs propagate to both outputs.
#[must_use]
pub fn angle_and_distance(p: Point) -> Polar {
    let v = p.to_vec2();
    Polar {
        angle: v.atan2().to_degrees(),
        distance: v.hypot() / SQRT_2,
    }
}

/// Normalizes `client` against `bounds` and computes its angle and distance.
#[must_use]
pub fn track(client: Point, bounds: Rect) -> TrackedPointer {
    let position = normalized_position(client, bounds);
    let Polar { angle, distance } = angle_and_distance(position);
    TrackedPointer {
        position,
        angle,
        distance,
    }
}

/// Inclusive containment test: points on the element's edges count as inside.
#[must_use]
pub fn is_inside(client: Point, bounds: Rect) -> bool {
    let bounds = bounds.abs();
    client.x >= bounds.x0 && client.x <= bounds.x1 && client.y >= bounds.y0 && client.y <= bounds.y1
}

/// Angle in degrees of a displacement vector.
pub(crate) fn angle_of(v: Vec2) -> f64 {
    v.atan2().to_degrees()
}

fn is_extent(len: f64) -> bool {
    len.is_finite() && len > 0.0
}

/// Follows a single hovering pointer across an element.
///
/// ## Usage
///
/// 1) Call [`HoverTracker::enter`] when the pointer enters the element.
/// 2) Call [`HoverTracker::move_to`] on every move to get a fresh reading.
/// 3) Call [`HoverTracker::leave`] when it leaves. With `reset_on_leave` set,
///    this yields a zeroed reading so consumers can snap back to rest.
#[derive(Clone, Debug)]
pub struct HoverTracker {
    bounds: Rect,
    reset_on_leave: bool,
    hovering: bool,
    last: Option<TrackedPointer>,
}

impl HoverTracker {
    /// Creates a tracker for an element occupying `bounds` in client space.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            reset_on_leave: false,
            hovering: false,
            last: None,
        }
    }

    /// Sets whether [`HoverTracker::leave`] produces a zeroed reading.
    #[must_use]
    pub fn with_reset_on_leave(mut self, reset: bool) -> Self {
        self.reset_on_leave = reset;
        self
    }

    /// Updates the element bounds, for example after a layout change.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Returns the element bounds in client space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Marks the pointer as hovering.
    pub fn enter(&mut self) {
        self.hovering = true;
    }

    /// Records a move and returns the new reading.
    ///
    /// A move without a preceding [`HoverTracker::enter`] implies one.
    pub fn move_to(&mut self, client: Point) -> TrackedPointer {
        self.hovering = true;
        let reading = track(client, self.bounds);
        self.last = Some(reading);
        reading
    }

    /// Marks the pointer as gone.
    ///
    /// Returns a zeroed reading when `reset_on_leave` is set, otherwise `None`
    /// and the last reading is kept.
    pub fn leave(&mut self) -> Option<TrackedPointer> {
        self.hovering = false;
        if self.reset_on_leave {
            let rest = TrackedPointer::default();
            self.last = Some(rest);
            Some(rest)
        } else {
            None
        }
    }

    /// Returns `true` between enter and leave.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Returns the most recent reading, if any.
    #[must_use]
    pub fn last(&self) -> Option<TrackedPointer> {
        self.last
    }
}
