// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture lifecycle engine: admission, contact tracking and start/update/end.
//!
//! [`GestureRecognizer`] is a synchronous state machine. Feed it every pointer
//! event in delivery order with [`GestureRecognizer::handle`]; it returns a
//! [`Transition`] when the gesture starts, updates or ends.
//!
//! ## States
//!
//! - **Idle**: no contacts.
//! - **Accumulating**: some, but fewer than `required_contacts`, contacts are
//!   down. Losing one just removes it.
//! - **Active**: entered the instant the contact count reaches
//!   `required_contacts`. Moves produce [`Transition::Updated`]; losing a
//!   contact (subject to [`EndPolicy`]) produces [`Transition::Ended`] and
//!   returns the recognizer to Idle.
//!
//! Events that do not apply (moves of untracked ids, duplicate downs,
//! disallowed devices or buttons) are dropped without a transition.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::{GestureConfig, GestureRecognizer, PointerEvent, PointerKind, Transition};
//!
//! let mut recognizer = GestureRecognizer::new(GestureConfig::default());
//! let touch = PointerKind::Touch;
//!
//! let t = recognizer.handle(&PointerEvent::down(1, touch, Point::new(0.0, 0.0), 0));
//! assert_eq!(t, Some(Transition::Started));
//!
//! let t = recognizer.handle(&PointerEvent::moved(1, touch, Point::new(40.0, 0.0), 16));
//! assert!(matches!(t, Some(Transition::Updated(_))));
//!
//! let t = recognizer.handle(&PointerEvent::up(1, touch, Point::new(80.0, 0.0), 32));
//! let Some(Transition::Ended { contacts, .. }) = t else { panic!("expected end") };
//! assert_eq!(contacts.len(), 1);
//! assert!(recognizer.contacts().is_empty());
//! ```

use core::fmt;

use crate::config::{EndPolicy, GestureConfig, UpdatePolicy};
use crate::contact::{Contact, ContactSet};
use crate::pointer::{PointerButton, PointerEvent, PointerId, PointerKind, PointerPhase};

/// Coarse lifecycle state of a [`GestureRecognizer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GestureState {
    /// No contacts.
    Idle,
    /// Fewer contacts than required.
    Accumulating,
    /// The gesture is running.
    Active,
}

/// A lifecycle change produced by a pointer event.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// The contact count reached `required_contacts`.
    Started,
    /// A tracked contact moved while active.
    Updated(PointerId),
    /// The gesture ended.
    Ended {
        /// The contact whose loss ended the gesture.
        by: PointerId,
        /// The finalized contacts, detached from the recognizer.
        contacts: ContactSet,
    },
}

/// Why a pointer-down was not admitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The session already tracks as many contacts as it accepts.
    Full,
    /// The pointer is already tracked.
    Duplicate,
    /// The device type is not in `allowed_kinds`.
    KindNotAllowed(PointerKind),
    /// A mouse or pen pressed a button other than the configured one.
    ButtonNotAllowed(PointerButton),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("contact limit reached"),
            Self::Duplicate => f.write_str("pointer is already tracked"),
            Self::KindNotAllowed(kind) => write!(f, "device type {kind:?} is not allowed"),
            Self::ButtonNotAllowed(button) => write!(f, "button {} is not allowed", button.0),
        }
    }
}

impl core::error::Error for Rejection {}

/// Tracks contacts and drives the gesture lifecycle.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    contacts: ContactSet,
    active: bool,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config: config.normalized(),
            contacts: ContactSet::new(),
            active: false,
        }
    }

    /// The effective configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns `true` while the gesture is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        if self.active {
            GestureState::Active
        } else if self.contacts.is_empty() {
            GestureState::Idle
        } else {
            GestureState::Accumulating
        }
    }

    /// The live contacts.
    #[must_use]
    pub fn contacts(&self) -> &ContactSet {
        &self.contacts
    }

    /// Number of live contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` if no contacts are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Checks whether a pointer-down would be admitted, without changing state.
    pub fn admit(&self, event: &PointerEvent) -> Result<(), Rejection> {
        let limit = if self.active {
            self.config.max_contacts
        } else {
            self.config.required_contacts
        };
        if self.contacts.len() >= limit {
            return Err(Rejection::Full);
        }
        if self.contacts.contains(event.id) {
            return Err(Rejection::Duplicate);
        }
        if !self.config.allowed_kinds.allows(event.kind) {
            return Err(Rejection::KindNotAllowed(event.kind));
        }
        if let Some(required) = self.required_button(event.kind)
            && event.button != required
        {
            return Err(Rejection::ButtonNotAllowed(event.button));
        }
        Ok(())
    }

    /// Processes one pointer event.
    pub fn handle(&mut self, event: &PointerEvent) -> Option<Transition> {
        match event.phase {
            PointerPhase::Down => self.on_down(event),
            PointerPhase::Move => self.on_move(event),
            PointerPhase::Up => self.on_up(event),
            PointerPhase::Leave => self.on_leave(event),
        }
    }

    /// Drops every contact without ending the gesture.
    ///
    /// Used when the recognizer is disconnected from its source.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        if !self.contacts.is_empty() {
            tracing::debug!(contacts = self.contacts.len(), active = self.active, "gesture reset");
        }
        self.contacts = ContactSet::new();
        self.active = false;
    }

    fn on_down(&mut self, event: &PointerEvent) -> Option<Transition> {
        if let Err(_reason) = self.admit(event) {
            #[cfg(feature = "tracing")]
            tracing::trace!(id = event.id.0, reason = %_reason, "pointer-down rejected");
            return None;
        }
        self.contacts.insert(Contact::new(
            event.id,
            event.kind,
            event.button,
            event.position,
            event.time_ms,
        ));
        self.contacts.designate_primary(self.config.primary_index);

        if !self.active && self.contacts.len() == self.config.required_contacts {
            self.active = true;
            #[cfg(feature = "tracing")]
            tracing::debug!(contacts = self.contacts.len(), "gesture started");
            return Some(Transition::Started);
        }
        None
    }

    fn on_move(&mut self, event: &PointerEvent) -> Option<Transition> {
        let Some(contact) = self.contacts.get_mut(event.id) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(id = event.id.0, "move of untracked pointer ignored");
            return None;
        };
        contact.push(event.position, event.time_ms);

        if !self.active {
            return None;
        }
        if self.config.update_policy == UpdatePolicy::PrimaryOnly
            && !self.contacts.is_primary(event.id)
        {
            return None;
        }
        Some(Transition::Updated(event.id))
    }

    fn on_up(&mut self, event: &PointerEvent) -> Option<Transition> {
        let required = self.required_button(event.kind);
        let contact = self.contacts.get_mut(event.id)?;
        contact.release(event.button);
        if let Some(required) = required
            && event.button != PointerButton::NONE
            && event.button != required
        {
            // Another button of a chorded press; the admitted one is still held.
            return None;
        }
        contact.push(event.position, event.time_ms);
        self.lose(event.id)
    }

    fn on_leave(&mut self, event: &PointerEvent) -> Option<Transition> {
        if !self.contacts.contains(event.id) {
            return None;
        }
        self.lose(event.id)
    }

    fn lose(&mut self, id: PointerId) -> Option<Transition> {
        if !self.active {
            self.contacts.remove(id);
            self.contacts.designate_primary(self.config.primary_index);
            return None;
        }

        let ends = match self.config.end_policy {
            EndPolicy::AnyContactLoss => true,
            EndPolicy::BelowRequired => {
                self.contacts.is_primary(id)
                    || self.contacts.len() - 1 < self.config.required_contacts
            }
        };
        if !ends {
            self.contacts.remove(id);
            return None;
        }

        self.active = false;
        let contacts = core::mem::take(&mut self.contacts);
        #[cfg(feature = "tracing")]
        tracing::debug!(by = id.0, contacts = contacts.len(), "gesture ended");
        Some(Transition::Ended { by: id, contacts })
    }

    fn required_button(&self, kind: PointerKind) -> Option<PointerButton> {
        match kind {
            PointerKind::Mouse => Some(self.config.mouse_button),
            PointerKind::Pen => Some(self.config.pen_button),
            PointerKind::Touch | PointerKind::Unknown => None,
        }
    }
}
