// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic output events.
//!
//! Every event carries a structured payload. [`GestureEvent::name`] gives the
//! kebab-case name a web host would dispatch it under.

use kurbo::{Point, Vec2};

use crate::pan::Pan;
use crate::pointer::PointerId;
use crate::swipe::{Swipe, SwipeDirection, SwipeFailure};

/// Payload of `gesture-start`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureStart {
    /// Contacts tracked when the gesture activated.
    pub contacts: usize,
    /// The primary contact, if designated.
    pub primary: Option<PointerId>,
    /// Mean position of the contacts.
    pub centroid: Point,
    /// Timestamp of the activating pointer-down.
    pub time_ms: u64,
}

/// Payload of `gesture-update`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureUpdate {
    /// The contact that moved.
    pub id: PointerId,
    /// Its new client-space position.
    pub position: Point,
    /// Displacement from its origin.
    pub delta: Vec2,
    /// Length of `delta`.
    pub distance: f64,
    /// Angle of `delta` in degrees.
    pub angle: f64,
    /// Timestamp of the move.
    pub time_ms: u64,
}

/// Payload of `gesture-end`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureEnd {
    /// The contact whose loss ended the gesture.
    pub by: PointerId,
    /// Contacts tracked when the gesture ended.
    pub contacts: usize,
    /// Longest origin-to-last-sample time over all contacts.
    pub elapsed_ms: u64,
    /// Timestamp of the ending event.
    pub time_ms: u64,
}

/// Discriminant of [`GestureEvent`], used to filter listeners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureEventKind {
    /// `gesture-start`
    GestureStart,
    /// `gesture-update`
    GestureUpdate,
    /// `gesture-end`
    GestureEnd,
    /// `swipe-left`
    SwipeLeft,
    /// `swipe-right`
    SwipeRight,
    /// `swipe-up`
    SwipeUp,
    /// `swipe-down`
    SwipeDown,
    /// `swipe-fail`
    SwipeFail,
    /// `pan`
    Pan,
}

impl GestureEventKind {
    /// The event name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GestureStart => "gesture-start",
            Self::GestureUpdate => "gesture-update",
            Self::GestureEnd => "gesture-end",
            Self::SwipeLeft => "swipe-left",
            Self::SwipeRight => "swipe-right",
            Self::SwipeUp => "swipe-up",
            Self::SwipeDown => "swipe-down",
            Self::SwipeFail => "swipe-fail",
            Self::Pan => "pan",
        }
    }
}

impl From<SwipeDirection> for GestureEventKind {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Self::SwipeLeft,
            SwipeDirection::Right => Self::SwipeRight,
            SwipeDirection::Up => Self::SwipeUp,
            SwipeDirection::Down => Self::SwipeDown,
        }
    }
}

/// A semantic event delivered to listeners.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// The gesture activated.
    Start(GestureStart),
    /// A contact moved while active.
    Update(GestureUpdate),
    /// The gesture ended.
    End(GestureEnd),
    /// A swipe was recognized.
    Swipe(Swipe),
    /// The motion did not qualify as a swipe.
    SwipeFailed(SwipeFailure),
    /// Incremental pan movement.
    Pan(Pan),
}

impl GestureEvent {
    /// The event's discriminant.
    #[must_use]
    pub fn kind(&self) -> GestureEventKind {
        match self {
            Self::Start(_) => GestureEventKind::GestureStart,
            Self::Update(_) => GestureEventKind::GestureUpdate,
            Self::End(_) => GestureEventKind::GestureEnd,
            Self::Swipe(swipe) => swipe.direction.into(),
            Self::SwipeFailed(_) => GestureEventKind::SwipeFail,
            Self::Pan(_) => GestureEventKind::Pan,
        }
    }

    /// The event name, e.g. `swipe-left`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}
