// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classifier seam: components that turn lifecycle transitions into semantic events.
//!
//! A [`GestureHost`](crate::GestureHost) drives any number of classifiers
//! over one recognizer. Classifiers see the contact set read-only and push
//! their output into the host's event queue, after the lifecycle event that
//! triggered them.
//!
//! ```
//! use understory_gesture::{Classifier, ClassifyContext, GestureEvent, PointerId};
//!
//! /// Counts updates; emits nothing.
//! #[derive(Debug, Default)]
//! struct Counter(usize);
//!
//! impl Classifier for Counter {
//!     fn gesture_updated(&mut self, _cx: &ClassifyContext<'_>, _id: PointerId, _out: &mut Vec<GestureEvent>) {
//!         self.0 += 1;
//!     }
//! }
//! ```

use alloc::vec::Vec;

use kurbo::Rect;

use crate::contact::ContactSet;
use crate::event::GestureEvent;
use crate::pointer::{PointerEvent, PointerId};

/// What a classifier may look at.
#[derive(Copy, Clone, Debug)]
pub struct ClassifyContext<'a> {
    /// The session's contacts. At end, the finalized set.
    pub contacts: &'a ContactSet,
    /// Element bounds in client space, if the host knows them.
    pub bounds: Option<Rect>,
    /// The pointer event that caused the transition.
    pub event: &'a PointerEvent,
}

/// Hooks invoked by the host for each lifecycle transition.
///
/// All hooks default to doing nothing.
pub trait Classifier {
    /// The gesture activated.
    fn gesture_started(&mut self, _cx: &ClassifyContext<'_>, _out: &mut Vec<GestureEvent>) {}

    /// Contact `id` moved while active.
    fn gesture_updated(
        &mut self,
        _cx: &ClassifyContext<'_>,
        _id: PointerId,
        _out: &mut Vec<GestureEvent>,
    ) {
    }

    /// The gesture ended; `cx.contacts` is the finalized set.
    fn gesture_ended(&mut self, _cx: &ClassifyContext<'_>, _out: &mut Vec<GestureEvent>) {}
}
