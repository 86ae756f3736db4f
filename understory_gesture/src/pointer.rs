// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input vocabulary.
//!
//! These types describe the raw events the recognizer consumes. They mirror
//! the shape of DOM pointer events (`pointerId`, `pointerType`, `button`,
//! client coordinates) so that adapters from `winit`, `ui-events` or a web
//! host are a field-by-field copy.

use core::fmt;

use bitflags::bitflags;
use kurbo::Point;

/// Opaque pointer identifier, unique among currently live contacts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerId(pub u64);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The device that produced a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    /// A mouse or trackpad cursor.
    Mouse,
    /// A stylus.
    Pen,
    /// A finger on a touch surface.
    Touch,
    /// Anything the host could not classify.
    #[default]
    Unknown,
}

impl PointerKind {
    /// Returns the single-kind set for this device type.
    #[must_use]
    pub const fn as_set(self) -> PointerKinds {
        match self {
            Self::Mouse => PointerKinds::MOUSE,
            Self::Pen => PointerKinds::PEN,
            Self::Touch => PointerKinds::TOUCH,
            Self::Unknown => PointerKinds::UNKNOWN,
        }
    }
}

bitflags! {
    /// A set of allowed device types.
    ///
    /// [`PointerKinds::all`] accepts every device.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PointerKinds: u8 {
        /// Mouse pointers.
        const MOUSE = 1 << 0;
        /// Pen pointers.
        const PEN = 1 << 1;
        /// Touch pointers.
        const TOUCH = 1 << 2;
        /// Unclassified pointers.
        const UNKNOWN = 1 << 3;
    }
}

impl Default for PointerKinds {
    fn default() -> Self {
        Self::all()
    }
}

impl PointerKinds {
    /// Returns `true` if `kind` is a member of this set.
    #[must_use]
    pub fn allows(self, kind: PointerKind) -> bool {
        self.contains(kind.as_set())
    }
}

/// A DOM-style button code.
///
/// `0` is the main button (left mouse button, pen contact, touch), `1`
/// auxiliary, `2` secondary, `3`/`4` back/forward. Moves that change no
/// button carry [`PointerButton::NONE`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerButton(pub i16);

impl PointerButton {
    /// No button change.
    pub const NONE: Self = Self(-1);
    /// Main button: left mouse button, pen tip, or touch contact.
    pub const MAIN: Self = Self(0);
    /// Auxiliary button, usually the wheel.
    pub const AUXILIARY: Self = Self(1);
    /// Secondary button, usually the right mouse button.
    pub const SECONDARY: Self = Self(2);
    /// Browser back.
    pub const BACK: Self = Self(3);
    /// Browser forward.
    pub const FORWARD: Self = Self(4);
}

impl Default for PointerButton {
    fn default() -> Self {
        Self::MAIN
    }
}

/// Which part of a pointer's lifecycle an event reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// A button was pressed or a contact touched down.
    Down,
    /// The pointer moved.
    Move,
    /// A button was released or a contact lifted.
    Up,
    /// The pointer left the element.
    Leave,
}

/// A single pointer event as delivered by the host element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Lifecycle phase.
    pub phase: PointerPhase,
    /// Pointer identity.
    pub id: PointerId,
    /// Device type.
    pub kind: PointerKind,
    /// Button that changed state.
    pub button: PointerButton,
    /// Client-space position.
    pub position: Point,
    /// Wall-clock timestamp in milliseconds, captured at receipt.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates an event with the main button.
    #[must_use]
    pub fn new(
        phase: PointerPhase,
        id: PointerId,
        kind: PointerKind,
        position: Point,
        time_ms: u64,
    ) -> Self {
        let button = match phase {
            PointerPhase::Move | PointerPhase::Leave => PointerButton::NONE,
            PointerPhase::Down | PointerPhase::Up => PointerButton::MAIN,
        };
        Self {
            phase,
            id,
            kind,
            button,
            position,
            time_ms,
        }
    }

    /// Shorthand for a main-button pointer-down.
    #[must_use]
    pub fn down(id: u64, kind: PointerKind, position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Down, PointerId(id), kind, position, time_ms)
    }

    /// Shorthand for a pointer-move.
    #[must_use]
    pub fn moved(id: u64, kind: PointerKind, position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Move, PointerId(id), kind, position, time_ms)
    }

    /// Shorthand for a main-button pointer-up.
    #[must_use]
    pub fn up(id: u64, kind: PointerKind, position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Up, PointerId(id), kind, position, time_ms)
    }

    /// Shorthand for a pointer-leave.
    #[must_use]
    pub fn leave(id: u64, kind: PointerKind, position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Leave, PointerId(id), kind, position, time_ms)
    }

    /// Replaces the button code.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}
