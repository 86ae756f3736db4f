// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer configuration.

use crate::pointer::{PointerButton, PointerKinds};

/// Which pointer-moves produce a gesture update while the gesture is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdatePolicy {
    /// Moves of any tracked contact produce an update.
    #[default]
    AnyContact,
    /// Only moves of the primary contact produce an update.
    ///
    /// Other contacts still record their history.
    PrimaryOnly,
}

/// When the loss of a contact ends an active gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndPolicy {
    /// Any tracked contact lifting or leaving ends the gesture.
    #[default]
    AnyContactLoss,
    /// Extra contacts may come and go; the gesture ends when the primary
    /// contact is lost or fewer than the required number remain.
    BelowRequired,
}

/// Options for a [`GestureRecognizer`](crate::GestureRecognizer).
///
/// Construction never fails: out-of-range values are coerced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Contacts needed to activate. `0` means the gesture never activates.
    pub required_contacts: usize,
    /// Upper bound on tracked contacts while active. Never below `required_contacts`.
    pub max_contacts: usize,
    /// Device types admitted on pointer-down.
    pub allowed_kinds: PointerKinds,
    /// The button a mouse pointer-down must use.
    pub mouse_button: PointerButton,
    /// The button a pen pointer-down must use.
    pub pen_button: PointerButton,
    /// Arrival position of the primary contact.
    pub primary_index: usize,
    /// See [`UpdatePolicy`].
    pub update_policy: UpdatePolicy,
    /// See [`EndPolicy`].
    pub end_policy: EndPolicy,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            required_contacts: 1,
            max_contacts: 1,
            allowed_kinds: PointerKinds::all(),
            mouse_button: PointerButton::MAIN,
            pen_button: PointerButton::MAIN,
            primary_index: 0,
            update_policy: UpdatePolicy::default(),
            end_policy: EndPolicy::default(),
        }
    }
}

impl GestureConfig {
    /// Sets the number of contacts needed to activate.
    ///
    /// Negative counts are coerced to `0`. `max_contacts` follows the new
    /// count unless it was raised above the previous one with
    /// [`with_max_contacts`](Self::with_max_contacts).
    #[must_use]
    pub fn with_required_contacts(mut self, count: i64) -> Self {
        let previous = self.required_contacts;
        self.required_contacts = usize::try_from(count.max(0)).unwrap_or(usize::MAX);
        self.max_contacts = if self.max_contacts <= previous {
            self.required_contacts
        } else {
            self.max_contacts.max(self.required_contacts)
        };
        self
    }

    /// Allows up to `count` contacts while active.
    ///
    /// Values below `required_contacts` are raised to it.
    #[must_use]
    pub fn with_max_contacts(mut self, count: usize) -> Self {
        self.max_contacts = count;
        self.normalized()
    }

    /// Restricts admitted device types.
    #[must_use]
    pub fn with_allowed_kinds(mut self, kinds: PointerKinds) -> Self {
        self.allowed_kinds = kinds;
        self
    }

    /// Sets the required mouse button.
    #[must_use]
    pub fn with_mouse_button(mut self, button: PointerButton) -> Self {
        self.mouse_button = button;
        self
    }

    /// Sets the required pen button.
    #[must_use]
    pub fn with_pen_button(mut self, button: PointerButton) -> Self {
        self.pen_button = button;
        self
    }

    /// Sets the arrival position of the primary contact.
    ///
    /// Positions past the last admissible contact are clamped when the
    /// configuration is [normalized](Self::normalized).
    #[must_use]
    pub fn with_primary_index(mut self, index: usize) -> Self {
        self.primary_index = index;
        self
    }

    /// Sets the update policy.
    #[must_use]
    pub fn with_update_policy(mut self, policy: UpdatePolicy) -> Self {
        self.update_policy = policy;
        self
    }

    /// Sets the end policy.
    #[must_use]
    pub fn with_end_policy(mut self, policy: EndPolicy) -> Self {
        self.end_policy = policy;
        self
    }

    /// Returns a copy with `max_contacts >= required_contacts` and
    /// `primary_index < max_contacts` (or `0` when no contact is admitted).
    ///
    /// Applied by the recognizer, so direct field writes are coerced too.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.max_contacts = self.max_contacts.max(self.required_contacts);
        self.primary_index = self.primary_index.min(self.max_contacts.saturating_sub(1));
        self
    }
}
