// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe classification: directional, thresholded, time-boxed motion.
//!
//! [`classify`] runs once over the finalized contacts of a gesture:
//!
//! 1) If any contact took longer than `max_duration_ms` from its origin to its
//!    last sample, the swipe fails with [`SwipeFailureReason::TimeoutExceeded`].
//! 2) Each contact contributes at most one direction, taken from the dominant
//!    axis of its final displacement. Equal magnitudes count as horizontal.
//!    The displacement must reach the distance threshold on that axis.
//! 3) No direction: [`SwipeFailureReason::InsufficientDistance`].
//! 4) Several distinct directions under [`Strictness::Strict`]:
//!    [`SwipeFailureReason::AmbiguousDirection`].
//! 5) Otherwise one [`Swipe`] per distinct direction, in the order the
//!    directions were first detected.
//!
//! The threshold is clamped to half the element's extent on each axis, so a
//! short element never demands a swipe longer than itself.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::swipe::{self, SwipeConfig, SwipeDirection};
//! use understory_gesture::{GestureConfig, GestureRecognizer, PointerEvent, PointerKind, Transition};
//!
//! let mut recognizer = GestureRecognizer::new(GestureConfig::default());
//! let touch = PointerKind::Touch;
//! recognizer.handle(&PointerEvent::down(1, touch, Point::new(0.0, 0.0), 0));
//! recognizer.handle(&PointerEvent::moved(1, touch, Point::new(150.0, 0.0), 200));
//! let Some(Transition::Ended { contacts, .. }) =
//!     recognizer.handle(&PointerEvent::up(1, touch, Point::new(150.0, 0.0), 200))
//! else {
//!     unreachable!()
//! };
//!
//! let swipes = swipe::classify(&contacts, &SwipeConfig::default(), None).unwrap();
//! assert_eq!(swipes[0].direction, SwipeDirection::Right);
//! assert_eq!(swipes[0].elapsed_ms, 200);
//! ```

use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Vec2};
use smallvec::SmallVec;

use crate::classifier::{Classifier, ClassifyContext};
use crate::contact::ContactSet;
use crate::event::GestureEvent;
use crate::pointer::PointerId;

/// Direction of a recognized swipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
    /// Towards negative y.
    Up,
    /// Towards positive y.
    Down,
}

/// How multiple contacts must agree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strictness {
    /// All detected directions must be the same.
    #[default]
    Strict,
    /// Every distinct detected direction is reported.
    Flexible,
}

/// Swipe thresholds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Minimum travel along the dominant axis, in device-independent pixels.
    pub min_distance: f64,
    /// Maximum time from a contact's origin to its last sample.
    pub max_duration_ms: u64,
    /// See [`Strictness`].
    pub strictness: Strictness,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_distance: 100.0,
            max_duration_ms: 1000,
            strictness: Strictness::Strict,
        }
    }
}

impl SwipeConfig {
    /// Sets the minimum travel. Negative values are treated as `0`.
    #[must_use]
    pub fn with_min_distance(mut self, distance: f64) -> Self {
        self.min_distance = distance;
        self
    }

    /// Sets the maximum duration.
    #[must_use]
    pub fn with_max_duration_ms(mut self, ms: u64) -> Self {
        self.max_duration_ms = ms;
        self
    }

    /// Sets the strictness.
    #[must_use]
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }
}

/// A recognized swipe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Swipe {
    /// Direction.
    pub direction: SwipeDirection,
    /// The first contact (in arrival order) that swiped this way.
    pub id: PointerId,
    /// That contact's final displacement from its origin.
    pub delta: Vec2,
    /// That contact's origin-to-last-sample time.
    pub elapsed_ms: u64,
    /// How many contacts swiped this way.
    pub contacts: usize,
}

/// Why a gesture was not a swipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeFailureReason {
    /// Some contact exceeded `max_duration_ms`.
    TimeoutExceeded,
    /// No contact travelled far enough.
    InsufficientDistance,
    /// Contacts disagreed under [`Strictness::Strict`].
    AmbiguousDirection,
}

impl SwipeFailureReason {
    /// The reason code carried by `swipe-fail`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TimeoutExceeded => "timeout-exceeded",
            Self::InsufficientDistance => "insufficient-distance",
            Self::AmbiguousDirection => "ambiguous-direction",
        }
    }
}

/// A classification failure with the measurements that caused it.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeFailure {
    /// Failure reason.
    pub reason: SwipeFailureReason,
    /// Longest origin-to-last-sample time over all contacts.
    pub elapsed_ms: u64,
    /// Directions detected before failing; empty unless ambiguous.
    pub directions: SmallVec<[SwipeDirection; 4]>,
}

impl SwipeFailure {
    fn new(reason: SwipeFailureReason, elapsed_ms: u64) -> Self {
        Self {
            reason,
            elapsed_ms,
            directions: SmallVec::new(),
        }
    }
}

impl fmt::Display for SwipeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SwipeFailureReason::TimeoutExceeded => {
                write!(f, "swipe took {} ms", self.elapsed_ms)
            }
            SwipeFailureReason::InsufficientDistance => {
                f.write_str("no contact travelled far enough to swipe")
            }
            SwipeFailureReason::AmbiguousDirection => {
                write!(f, "contacts swiped in different directions: {:?}", self.directions)
            }
        }
    }
}

impl core::error::Error for SwipeFailure {}

/// Per-axis distance threshold: `min_distance`, clamped to half the
/// element's width and height when those are known and positive.
#[must_use]
pub fn effective_threshold(min_distance: f64, bounds: Option<Rect>) -> Vec2 {
    let min_distance = min_distance.max(0.0);
    let Some(bounds) = bounds.map(|b| b.abs()) else {
        return Vec2::new(min_distance, min_distance);
    };
    let clamp = |extent: f64| {
        if extent.is_finite() && extent > 0.0 {
            min_distance.min(extent / 2.0)
        } else {
            min_distance
        }
    };
    Vec2::new(clamp(bounds.width()), clamp(bounds.height()))
}

/// Direction of a final displacement against a per-axis threshold.
///
/// The dominant axis is chosen by magnitude, horizontal on ties. Within an
/// axis the negative direction is tested first, so with a zero threshold a
/// contact that never moved reads as [`SwipeDirection::Left`].
#[must_use]
pub fn direction_of(delta: Vec2, threshold: Vec2) -> Option<SwipeDirection> {
    if delta.x.abs() >= delta.y.abs() {
        if delta.x <= -threshold.x {
            Some(SwipeDirection::Left)
        } else if delta.x >= threshold.x {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    } else if delta.y <= -threshold.y {
        Some(SwipeDirection::Up)
    } else if delta.y >= threshold.y {
        Some(SwipeDirection::Down)
    } else {
        None
    }
}

/// Classifies the finalized contacts of a gesture.
pub fn classify(
    contacts: &ContactSet,
    config: &SwipeConfig,
    bounds: Option<Rect>,
) -> Result<Vec<Swipe>, SwipeFailure> {
    let worst_elapsed = contacts
        .iter()
        .map(|c| c.elapsed_ms())
        .max()
        .unwrap_or(0);
    if worst_elapsed > config.max_duration_ms {
        return Err(SwipeFailure::new(
            SwipeFailureReason::TimeoutExceeded,
            worst_elapsed,
        ));
    }

    let threshold = effective_threshold(config.min_distance, bounds);
    let mut swipes: Vec<Swipe> = Vec::new();
    for contact in contacts {
        let delta = contact.delta();
        let Some(direction) = direction_of(delta, threshold) else {
            continue;
        };
        if let Some(existing) = swipes.iter_mut().find(|s| s.direction == direction) {
            existing.contacts += 1;
        } else {
            swipes.push(Swipe {
                direction,
                id: contact.id(),
                delta,
                elapsed_ms: contact.elapsed_ms(),
                contacts: 1,
            });
        }
    }

    if swipes.is_empty() {
        return Err(SwipeFailure::new(
            SwipeFailureReason::InsufficientDistance,
            worst_elapsed,
        ));
    }
    if swipes.len() > 1 && config.strictness == Strictness::Strict {
        return Err(SwipeFailure {
            reason: SwipeFailureReason::AmbiguousDirection,
            elapsed_ms: worst_elapsed,
            directions: swipes.iter().map(|s| s.direction).collect(),
        });
    }
    Ok(swipes)
}

/// Emits `swipe-*` or `swipe-fail` when a gesture ends.
#[derive(Clone, Debug, Default)]
pub struct SwipeClassifier {
    config: SwipeConfig,
}

impl SwipeClassifier {
    /// Creates a classifier with the given thresholds.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self { config }
    }

    /// The thresholds.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }
}

impl Classifier for SwipeClassifier {
    fn gesture_ended(&mut self, cx: &ClassifyContext<'_>, out: &mut Vec<GestureEvent>) {
        match classify(cx.contacts, &self.config, cx.bounds) {
            Ok(swipes) => out.extend(swipes.into_iter().map(GestureEvent::Swipe)),
            Err(failure) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(reason = failure.reason.code(), %failure, "swipe failed");
                out.push(GestureEvent::SwipeFailed(failure));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GestureConfig;
    use crate::pointer::{PointerEvent, PointerKind};
    use crate::recognizer::{GestureRecognizer, Transition};
    use kurbo::Point;

    /// Runs each `(dx, dy)` path as a separate contact starting at the origin,
    /// all lifting at `t_end`.
    fn finished(paths: &[(f64, f64)], t_end: u64) -> ContactSet {
        let config = GestureConfig::default().with_required_contacts(paths.len() as i64);
        let mut r = GestureRecognizer::new(config);
        let touch = PointerKind::Touch;
        for (i, _) in paths.iter().enumerate() {
            r.handle(&PointerEvent::down(i as u64, touch, Point::ORIGIN, 0));
        }
        for (i, &(dx, dy)) in paths.iter().enumerate() {
            r.handle(&PointerEvent::moved(i as u64, touch, Point::new(dx, dy), t_end));
        }
        match r.handle(&PointerEvent::up(0, touch, Point::new(paths[0].0, paths[0].1), t_end)) {
            Some(Transition::Ended { contacts, .. }) => contacts,
            other => panic!("expected end, got {other:?}"),
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let config = SwipeConfig::default();
        let swipes = classify(&finished(&[(100.0, 0.0)], 100), &config, None).unwrap();
        assert_eq!(swipes[0].direction, SwipeDirection::Right);

        let failure = classify(&finished(&[(99.0, 0.0)], 100), &config, None).unwrap_err();
        assert_eq!(failure.reason, SwipeFailureReason::InsufficientDistance);
    }

    #[test]
    fn all_four_directions() {
        let config = SwipeConfig::default();
        for ((dx, dy), expected) in [
            ((-120.0, 10.0), SwipeDirection::Left),
            ((120.0, -10.0), SwipeDirection::Right),
            ((10.0, -120.0), SwipeDirection::Up),
            ((-10.0, 120.0), SwipeDirection::Down),
        ] {
            let swipes = classify(&finished(&[(dx, dy)], 50), &config, None).unwrap();
            assert_eq!(swipes.len(), 1);
            assert_eq!(swipes[0].direction, expected, "delta ({dx}, {dy})");
        }
    }

    #[test]
    fn diagonal_tie_prefers_horizontal() {
        assert_eq!(
            direction_of(Vec2::new(-150.0, 150.0), Vec2::new(100.0, 100.0)),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn dominant_axis_below_threshold_does_not_fall_back() {
        // Vertical dominates but falls short; horizontal is never considered.
        assert_eq!(
            direction_of(Vec2::new(90.0, 95.0), Vec2::new(50.0, 100.0)),
            None
        );
    }

    #[test]
    fn zero_threshold_reads_stationary_contact_as_left() {
        assert_eq!(
            direction_of(Vec2::ZERO, Vec2::ZERO),
            Some(SwipeDirection::Left)
        );
        assert_eq!(
            direction_of(Vec2::new(0.0, 0.5), Vec2::ZERO),
            Some(SwipeDirection::Down)
        );
        // With a positive threshold a stationary contact is not a swipe.
        assert_eq!(direction_of(Vec2::ZERO, Vec2::new(1.0, 1.0)), None);
    }

    #[test]
    fn timeout_wins_over_distance() {
        let config = SwipeConfig::default();
        let failure = classify(&finished(&[(500.0, 0.0)], 1001), &config, None).unwrap_err();
        assert_eq!(failure.reason, SwipeFailureReason::TimeoutExceeded);
        assert_eq!(failure.elapsed_ms, 1001);

        assert!(classify(&finished(&[(500.0, 0.0)], 1000), &config, None).is_ok());
    }

    #[test]
    fn threshold_clamps_to_half_extent() {
        let bounds = Rect::new(0.0, 0.0, 120.0, 60.0);
        assert_eq!(effective_threshold(100.0, Some(bounds)), Vec2::new(60.0, 30.0));
        assert_eq!(effective_threshold(20.0, Some(bounds)), Vec2::new(20.0, 20.0));
        assert_eq!(effective_threshold(-5.0, None), Vec2::ZERO);

        let swipes = classify(
            &finished(&[(0.0, 35.0)], 100),
            &SwipeConfig::default(),
            Some(bounds),
        )
        .unwrap();
        assert_eq!(swipes[0].direction, SwipeDirection::Down);
    }

    #[test]
    fn degenerate_bounds_do_not_clamp() {
        let flat = Rect::new(0.0, 0.0, 0.0, 300.0);
        assert_eq!(effective_threshold(100.0, Some(flat)), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn agreeing_contacts_collapse_into_one_swipe() {
        let swipes = classify(
            &finished(&[(-150.0, 0.0), (-130.0, 5.0), (0.0, 0.0)], 100),
            &SwipeConfig::default(),
            None,
        )
        .unwrap();
        assert_eq!(swipes.len(), 1);
        assert_eq!(swipes[0].direction, SwipeDirection::Left);
        assert_eq!(swipes[0].contacts, 2);
        assert_eq!(swipes[0].id, PointerId(0));
        assert_eq!(swipes[0].delta, Vec2::new(-150.0, 0.0));
    }

    #[test]
    fn strict_rejects_disagreement_flexible_reports_both() {
        let contacts = finished(&[(150.0, 0.0), (0.0, 150.0)], 100);

        let failure = classify(&contacts, &SwipeConfig::default(), None).unwrap_err();
        assert_eq!(failure.reason, SwipeFailureReason::AmbiguousDirection);
        assert_eq!(
            failure.directions.as_slice(),
            &[SwipeDirection::Right, SwipeDirection::Down]
        );

        let flexible = SwipeConfig::default().with_strictness(Strictness::Flexible);
        let swipes = classify(&contacts, &flexible, None).unwrap();
        let directions: Vec<_> = swipes.iter().map(|s| s.direction).collect();
        assert_eq!(directions, [SwipeDirection::Right, SwipeDirection::Down]);
        assert_eq!(swipes[1].id, PointerId(1));
    }

    #[test]
    fn failure_codes() {
        assert_eq!(SwipeFailureReason::TimeoutExceeded.code(), "timeout-exceeded");
        assert_eq!(
            SwipeFailureReason::InsufficientDistance.code(),
            "insufficient-distance"
        );
        assert_eq!(
            SwipeFailureReason::AmbiguousDirection.code(),
            "ambiguous-direction"
        );
    }

    #[test]
    fn classifier_pushes_failure_event() {
        let contacts = finished(&[(10.0, 0.0)], 10);
        let event = PointerEvent::up(0, PointerKind::Touch, Point::new(10.0, 0.0), 10);
        let cx = ClassifyContext {
            contacts: &contacts,
            bounds: None,
            event: &event,
        };
        let mut out = Vec::new();
        SwipeClassifier::default().gesture_ended(&cx, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name(), "swipe-fail");
    }
}
