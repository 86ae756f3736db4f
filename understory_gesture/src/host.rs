// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture host: one recognizer, its classifiers, and the listeners they feed.
//!
//! The host stands in for the UI element a recognizer is attached to. It
//! knows the element's bounds, forwards pointer events to the recognizer
//! while connected, runs classifiers on each transition, and delivers the
//! resulting [`GestureEvent`]s to registered listeners synchronously.
//!
//! Per pointer event, events are emitted in this order:
//!
//! - `gesture-start`, then classifier output for the start.
//! - `gesture-update`, then classifier output (e.g. `pan`).
//! - `gesture-end`, then classifier output (e.g. `swipe-right` or `swipe-fail`).
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use understory_gesture::swipe::{SwipeClassifier, SwipeConfig};
//! use understory_gesture::{GestureConfig, GestureEventKind, GestureHost, PointerEvent, PointerKind};
//!
//! let mut host = GestureHost::new(GestureConfig::default())
//!     .with_bounds(Rect::new(0.0, 0.0, 400.0, 300.0));
//! host.add_classifier(Box::new(SwipeClassifier::new(SwipeConfig::default())));
//!
//! let swiped = Rc::new(RefCell::new(0));
//! let counter = Rc::clone(&swiped);
//! host.add_listener_for(GestureEventKind::SwipeLeft, move |_| *counter.borrow_mut() += 1);
//!
//! let touch = PointerKind::Touch;
//! host.handle(&PointerEvent::down(3, touch, Point::new(300.0, 100.0), 0));
//! host.handle(&PointerEvent::moved(3, touch, Point::new(150.0, 110.0), 120));
//! host.handle(&PointerEvent::up(3, touch, Point::new(150.0, 110.0), 130));
//!
//! assert_eq!(*swiped.borrow(), 1);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::classifier::{Classifier, ClassifyContext};
use crate::config::GestureConfig;
use crate::event::{GestureEnd, GestureEvent, GestureEventKind, GestureStart, GestureUpdate};
use crate::pointer::PointerEvent;
use crate::recognizer::{GestureRecognizer, Transition};

/// Handle returned by listener registration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type Listener = Box<dyn FnMut(&GestureEvent)>;

struct Registration {
    id: ListenerId,
    filter: Option<GestureEventKind>,
    listener: Listener,
}

/// Owns a recognizer and dispatches its semantic events.
pub struct GestureHost {
    recognizer: GestureRecognizer,
    classifiers: Vec<Box<dyn Classifier>>,
    listeners: Vec<Registration>,
    next_listener: u32,
    bounds: Option<Rect>,
    connected: bool,
    emitted: Vec<GestureEvent>,
}

impl fmt::Debug for GestureHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureHost")
            .field("recognizer", &self.recognizer)
            .field("classifiers", &self.classifiers.len())
            .field("listeners", &self.listeners.len())
            .field("next_listener", &self.next_listener)
            .field("bounds", &self.bounds)
            .field("connected", &self.connected)
            .field("emitted", &self.emitted)
            .finish()
    }
}

impl GestureHost {
    /// Creates a connected host with no classifiers or listeners.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            recognizer: GestureRecognizer::new(config),
            classifiers: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
            bounds: None,
            connected: true,
            emitted: Vec::new(),
        }
    }

    /// Sets the element bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Updates the element bounds, for example after a layout change.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// The element bounds in client space, if known.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// The underlying recognizer.
    #[must_use]
    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    /// Adds a classifier. Classifiers run in insertion order.
    pub fn add_classifier(&mut self, classifier: Box<dyn Classifier>) {
        self.classifiers.push(classifier);
    }

    /// Registers a listener for every event.
    pub fn add_listener(&mut self, listener: impl FnMut(&GestureEvent) + 'static) -> ListenerId {
        self.register(None, Box::new(listener))
    }

    /// Registers a listener for one kind of event.
    pub fn add_listener_for(
        &mut self,
        kind: GestureEventKind,
        listener: impl FnMut(&GestureEvent) + 'static,
    ) -> ListenerId {
        self.register(Some(kind), Box::new(listener))
    }

    /// Unregisters a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|r| r.id != id);
        self.listeners.len() != before
    }

    /// Resumes processing pointer events.
    pub fn connect(&mut self) {
        #[cfg(feature = "tracing")]
        if !self.connected {
            tracing::debug!("gesture host connected");
        }
        self.connected = true;
    }

    /// Stops processing pointer events and drops live contacts.
    ///
    /// This is a hard stop: no `gesture-end` is emitted.
    pub fn disconnect(&mut self) {
        #[cfg(feature = "tracing")]
        if self.connected {
            tracing::debug!(contacts = self.recognizer.len(), "gesture host disconnected");
        }
        self.connected = false;
        self.recognizer.reset();
        self.emitted.clear();
    }

    /// Returns `true` while pointer events are processed.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Processes one pointer event, delivers the resulting events to
    /// listeners, and returns them.
    pub fn handle(&mut self, event: &PointerEvent) -> &[GestureEvent] {
        self.emitted.clear();
        if !self.connected {
            return &self.emitted;
        }
        let Some(transition) = self.recognizer.handle(event) else {
            return &self.emitted;
        };

        match transition {
            Transition::Started => {
                let contacts = self.recognizer.contacts();
                self.emitted.push(GestureEvent::Start(GestureStart {
                    contacts: contacts.len(),
                    primary: contacts.primary(),
                    centroid: contacts.centroid().unwrap_or(event.position),
                    time_ms: event.time_ms,
                }));
                let cx = ClassifyContext {
                    contacts,
                    bounds: self.bounds,
                    event,
                };
                for classifier in &mut self.classifiers {
                    classifier.gesture_started(&cx, &mut self.emitted);
                }
            }
            Transition::Updated(id) => {
                let contacts = self.recognizer.contacts();
                if let Some(contact) = contacts.get(id) {
                    let sample = contact.latest();
                    self.emitted.push(GestureEvent::Update(GestureUpdate {
                        id,
                        position: sample.position,
                        delta: sample.delta,
                        distance: sample.distance,
                        angle: sample.angle,
                        time_ms: sample.time_ms,
                    }));
                }
                let cx = ClassifyContext {
                    contacts,
                    bounds: self.bounds,
                    event,
                };
                for classifier in &mut self.classifiers {
                    classifier.gesture_updated(&cx, id, &mut self.emitted);
                }
            }
            Transition::Ended { by, contacts } => {
                self.emitted.push(GestureEvent::End(GestureEnd {
                    by,
                    contacts: contacts.len(),
                    elapsed_ms: contacts.iter().map(|c| c.elapsed_ms()).max().unwrap_or(0),
                    time_ms: event.time_ms,
                }));
                let cx = ClassifyContext {
                    contacts: &contacts,
                    bounds: self.bounds,
                    event,
                };
                for classifier in &mut self.classifiers {
                    classifier.gesture_ended(&cx, &mut self.emitted);
                }
            }
        }

        for ev in &self.emitted {
            let kind = ev.kind();
            for registration in &mut self.listeners {
                if registration.filter.is_none_or(|k| k == kind) {
                    (registration.listener)(ev);
                }
            }
        }
        &self.emitted
    }

    fn register(&mut self, filter: Option<GestureEventKind>, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener = self.next_listener.wrapping_add(1);
        self.listeners.push(Registration {
            id,
            filter,
            listener,
        });
        id
    }
}
