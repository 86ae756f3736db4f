// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: pointer gesture recognition for UI.
//!
//! This crate turns low-level pointer events (down, move, up, leave; from
//! mouse, pen or touch; possibly several contacts at once) into semantic
//! gestures such as swipes and pans.
//!
//! It is split into small layers:
//!
//! - [`tracker`]: stateless helpers mapping client positions into an element's
//!   normalized space, plus a hover tracker.
//! - [`contact`]: per-contact history, every sample measured from the origin.
//! - [`recognizer`]: the lifecycle engine. Admits contacts, activates when
//!   enough are down, reports updates, ends when a contact is lost.
//! - [`swipe`] and [`pan`]: classifiers that consume the contact set and emit
//!   semantic events or a structured failure.
//! - [`host`]: wires a recognizer to classifiers and to listeners.
//!
//! The crate does not assume any particular UI framework or event loop.
//! Callers translate their platform events into [`PointerEvent`]s, supplying
//! the timestamp themselves, and feed them in delivery order.
//!
//! ## Recognizer lifecycle
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::{GestureConfig, GestureRecognizer, PointerEvent, PointerKind, Transition};
//!
//! // A two-finger gesture.
//! let mut recognizer = GestureRecognizer::new(GestureConfig::default().with_required_contacts(2));
//! let touch = PointerKind::Touch;
//!
//! assert_eq!(recognizer.handle(&PointerEvent::down(1, touch, Point::new(0.0, 0.0), 0)), None);
//! assert_eq!(
//!     recognizer.handle(&PointerEvent::down(2, touch, Point::new(40.0, 0.0), 5)),
//!     Some(Transition::Started)
//! );
//! assert!(recognizer.is_active());
//!
//! // Losing either finger ends the whole gesture and clears every contact.
//! let ended = recognizer.handle(&PointerEvent::up(2, touch, Point::new(40.0, 0.0), 90));
//! assert!(matches!(ended, Some(Transition::Ended { .. })));
//! assert!(recognizer.contacts().is_empty());
//! ```
//!
//! ## Swipes through a host
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::swipe::{SwipeClassifier, SwipeConfig, Strictness};
//! use understory_gesture::{GestureConfig, GestureEvent, GestureHost, PointerEvent, PointerKind};
//!
//! let mut host = GestureHost::new(GestureConfig::default());
//! host.add_classifier(Box::new(SwipeClassifier::new(
//!     SwipeConfig::default().with_strictness(Strictness::Flexible),
//! )));
//!
//! let touch = PointerKind::Touch;
//! host.handle(&PointerEvent::down(1, touch, Point::new(0.0, 0.0), 0));
//! host.handle(&PointerEvent::moved(1, touch, Point::new(0.0, -150.0), 100));
//! let events = host.handle(&PointerEvent::up(1, touch, Point::new(0.0, -150.0), 100));
//!
//! let names: Vec<_> = events.iter().map(GestureEvent::name).collect();
//! assert_eq!(names, ["gesture-end", "swipe-up"]);
//! ```
//!
//! ## Failure semantics
//!
//! Event processing never panics and never returns an error. Events that do
//! not apply are dropped; the only failure reported to callers is a swipe
//! classification failure, delivered as a `swipe-fail` event carrying a
//! [`swipe::SwipeFailureReason`].
//!
//! ## Features
//!
//! - `std` (default): use the standard library float routines.
//! - `libm`: float routines for `no_std` builds.
//! - `tracing`: log admission decisions and lifecycle transitions with `tracing`.
//! - `serde`: derive `Serialize`/`Deserialize` for configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod classifier;
pub mod config;
pub mod contact;
pub mod event;
pub mod host;
pub mod pan;
pub mod pointer;
pub mod recognizer;
pub mod swipe;
pub mod tracker;

pub use classifier::{Classifier, ClassifyContext};
pub use config::{EndPolicy, GestureConfig, UpdatePolicy};
pub use contact::{Contact, ContactSet, Sample};
pub use event::{GestureEnd, GestureEvent, GestureEventKind, GestureStart, GestureUpdate};
pub use host::{GestureHost, ListenerId};
pub use pointer::{PointerButton, PointerEvent, PointerId, PointerKind, PointerKinds, PointerPhase};
pub use recognizer::{GestureRecognizer, GestureState, Rejection, Transition};
