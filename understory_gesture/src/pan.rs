// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan classification: continuous movement deltas while a gesture is active.
//!
//! ## Usage
//!
//! 1) Add a [`PanClassifier`] to a [`GestureHost`](crate::GestureHost).
//! 2) On every gesture update it emits a [`Pan`] with the movement since the
//!    previous sample of the contact, plus the total offset from its origin.
//! 3) Consumers apply the delta directly, e.g. scroll-by or draw-to.
//!
//! With [`PanSource::Primary`] (the default) only updates of the primary
//! contact produce pans, so a two-finger pan emits one stream, not two.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture::pan::PanClassifier;
//! use understory_gesture::{GestureConfig, GestureEvent, GestureHost, PointerEvent, PointerKind};
//!
//! let mut host = GestureHost::new(GestureConfig::default());
//! host.add_classifier(Box::new(PanClassifier::default()));
//!
//! let mouse = PointerKind::Mouse;
//! host.handle(&PointerEvent::down(1, mouse, Point::new(10.0, 20.0), 0));
//! host.handle(&PointerEvent::moved(1, mouse, Point::new(15.0, 25.0), 16));
//! let events = host.handle(&PointerEvent::moved(1, mouse, Point::new(18.0, 29.0), 32));
//!
//! let Some(GestureEvent::Pan(pan)) = events.last() else { panic!("expected pan") };
//! assert_eq!(pan.delta, Vec2::new(3.0, 4.0));
//! assert_eq!(pan.total, Vec2::new(8.0, 9.0));
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::classifier::{Classifier, ClassifyContext};
use crate::contact::Contact;
use crate::event::GestureEvent;
use crate::pointer::PointerId;

/// Which contact's movement drives pan events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanSource {
    /// Only the primary contact; updates of other contacts are skipped.
    #[default]
    Primary,
    /// Whichever contact produced the update.
    UpdatedContact,
}

/// Payload of `pan`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pan {
    /// The contact that moved.
    pub id: PointerId,
    /// Movement since the previous sample.
    pub delta: Vec2,
    /// Offset from the contact's origin.
    pub total: Vec2,
    /// Current client-space position.
    pub position: Point,
    /// Timestamp of the latest sample.
    pub time_ms: u64,
}

/// Computes the latest pan step of a contact.
///
/// Returns `None` until the contact has at least two samples.
#[must_use]
pub fn pan_step(contact: &Contact) -> Option<Pan> {
    let delta = contact.step()?;
    let latest = contact.latest();
    Some(Pan {
        id: contact.id(),
        delta,
        total: latest.delta,
        position: latest.position,
        time_ms: latest.time_ms,
    })
}

/// Emits `pan` on gesture updates.
#[derive(Clone, Debug, Default)]
pub struct PanClassifier {
    source: PanSource,
}

impl PanClassifier {
    /// Creates a classifier reading from `source`.
    #[must_use]
    pub fn new(source: PanSource) -> Self {
        Self { source }
    }

    /// The configured source.
    #[must_use]
    pub fn source(&self) -> PanSource {
        self.source
    }
}

impl Classifier for PanClassifier {
    fn gesture_updated(
        &mut self,
        cx: &ClassifyContext<'_>,
        id: PointerId,
        out: &mut Vec<GestureEvent>,
    ) {
        if self.source == PanSource::Primary && !cx.contacts.is_primary(id) {
            return;
        }
        if let Some(pan) = cx.contacts.get(id).and_then(pan_step) {
            out.push(GestureEvent::Pan(pan));
        }
    }
}
