// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-contact state: identity, device, held buttons and sampled history.
//!
//! Every [`Contact`] starts with an origin [`Sample`] taken at pointer-down.
//! Later samples are appended in delivery order and carry their displacement,
//! distance and angle relative to that origin, so classifiers never need to
//! re-walk the history to answer "how far has this contact travelled".

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::pointer::{PointerButton, PointerId, PointerKind};
use crate::tracker::angle_of;

/// One recorded position of a contact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    /// Client-space position.
    pub position: Point,
    /// Displacement from the origin sample.
    pub delta: Vec2,
    /// Length of [`Sample::delta`].
    pub distance: f64,
    /// Angle of [`Sample::delta`] in degrees.
    pub angle: f64,
    /// Timestamp in milliseconds.
    pub time_ms: u64,
}

impl Sample {
    /// Creates an origin sample: all deltas are zero.
    #[must_use]
    pub fn origin(position: Point, time_ms: u64) -> Self {
        Self {
            position,
            delta: Vec2::ZERO,
            distance: 0.0,
            angle: 0.0,
            time_ms,
        }
    }

    /// Creates a sample measured against `origin`.
    #[must_use]
    pub fn relative_to(origin: Point, position: Point, time_ms: u64) -> Self {
        let delta = position - origin;
        Self {
            position,
            delta,
            distance: delta.hypot(),
            angle: angle_of(delta),
            time_ms,
        }
    }
}

/// An actively tracked pointer participating in a potential gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    id: PointerId,
    kind: PointerKind,
    buttons_down: SmallVec<[PointerButton; 2]>,
    history: Vec<Sample>,
}

impl Contact {
    /// Creates a contact from its pointer-down.
    #[must_use]
    pub fn new(
        id: PointerId,
        kind: PointerKind,
        button: PointerButton,
        position: Point,
        time_ms: u64,
    ) -> Self {
        let mut buttons_down = SmallVec::new();
        if button != PointerButton::NONE {
            buttons_down.push(button);
        }
        let mut history = Vec::with_capacity(16);
        history.push(Sample::origin(position, time_ms));
        Self {
            id,
            kind,
            buttons_down,
            history,
        }
    }

    /// Pointer identity.
    #[must_use]
    pub fn id(&self) -> PointerId {
        self.id
    }

    /// Device type.
    #[must_use]
    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    /// Buttons currently held, in press order.
    #[must_use]
    pub fn buttons_down(&self) -> &[PointerButton] {
        &self.buttons_down
    }

    /// Returns `true` if `button` is currently held.
    #[must_use]
    pub fn is_held(&self, button: PointerButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// All samples, origin first.
    #[must_use]
    pub fn history(&self) -> &[Sample] {
        &self.history
    }

    /// The origin sample.
    #[must_use]
    pub fn origin(&self) -> &Sample {
        &self.history[0]
    }

    /// The most recent sample.
    #[must_use]
    pub fn latest(&self) -> &Sample {
        // History is seeded with the origin and never shrinks.
        &self.history[self.history.len() - 1]
    }

    /// The sample before the most recent one, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&Sample> {
        let len = self.history.len();
        len.checked_sub(2).map(|i| &self.history[i])
    }

    /// Displacement of the most recent sample from the origin.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.latest().delta
    }

    /// Incremental displacement between the two most recent samples.
    #[must_use]
    pub fn step(&self) -> Option<Vec2> {
        self.previous()
            .map(|prev| self.latest().position - prev.position)
    }

    /// Time between the origin and the most recent sample.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.latest().time_ms.saturating_sub(self.origin().time_ms)
    }

    /// Displacement of the sample at `index` from the origin.
    #[must_use]
    pub fn delta_at(&self, index: usize) -> Option<Vec2> {
        self.history.get(index).map(|s| s.delta)
    }

    /// Angle in degrees of the sample at `index` relative to the origin.
    #[must_use]
    pub fn angle_at(&self, index: usize) -> Option<f64> {
        self.history.get(index).map(|s| s.angle)
    }

    pub(crate) fn push(&mut self, position: Point, time_ms: u64) -> &Sample {
        let sample = Sample::relative_to(self.origin().position, position, time_ms);
        self.history.push(sample);
        self.latest()
    }

    pub(crate) fn release(&mut self, button: PointerButton) {
        self.buttons_down.retain(|b| *b != button);
    }
}

/// The live contacts of a gesture session, in arrival order.
///
/// Also remembers which contact is the primary one. Lookups are linear; a
/// session holds a handful of contacts at most.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactSet {
    contacts: Vec<Contact>,
    primary: Option<PointerId>,
}

impl ContactSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contacts: Vec::new(),
            primary: None,
        }
    }

    /// Number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` if there are no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns `true` if `id` is tracked.
    #[must_use]
    pub fn contains(&self, id: PointerId) -> bool {
        self.position_of(id).is_some()
    }

    /// Looks up a contact.
    #[must_use]
    pub fn get(&self, id: PointerId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Iterates contacts in arrival order.
    pub fn iter(&self) -> core::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Iterates contact ids in arrival order.
    pub fn ids(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.contacts.iter().map(|c| c.id)
    }

    /// Id of the primary contact, if designated.
    #[must_use]
    pub fn primary(&self) -> Option<PointerId> {
        self.primary
    }

    /// The primary contact, if designated.
    #[must_use]
    pub fn primary_contact(&self) -> Option<&Contact> {
        self.primary.and_then(|id| self.get(id))
    }

    /// Returns `true` if `id` is the primary contact.
    #[must_use]
    pub fn is_primary(&self, id: PointerId) -> bool {
        self.primary == Some(id)
    }

    /// Mean of the latest positions of all contacts.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        mean(self.contacts.iter().map(|c| Some(c.latest().position)))
    }

    /// Mean of the positions recorded at history `index`.
    ///
    /// Returns `None` if the set is empty or any contact has fewer samples.
    #[must_use]
    pub fn centroid_at(&self, index: usize) -> Option<Point> {
        mean(
            self.contacts
                .iter()
                .map(|c| c.history.get(index).map(|s| s.position)),
        )
    }

    pub(crate) fn insert(&mut self, contact: Contact) {
        debug_assert!(!self.contains(contact.id), "duplicate contact id");
        self.contacts.push(contact);
    }

    pub(crate) fn get_mut(&mut self, id: PointerId) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.id == id)
    }

    pub(crate) fn remove(&mut self, id: PointerId) -> Option<Contact> {
        let idx = self.position_of(id)?;
        if self.primary == Some(id) {
            self.primary = None;
        }
        Some(self.contacts.remove(idx))
    }

    /// Designates the contact at arrival position `index` as primary, unless
    /// a primary is already set.
    pub(crate) fn designate_primary(&mut self, index: usize) {
        if self.primary.is_none() {
            self.primary = self.contacts.get(index).map(|c| c.id);
        }
    }

    fn position_of(&self, id: PointerId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }
}

impl<'a> IntoIterator for &'a ContactSet {
    type Item = &'a Contact;
    type IntoIter = core::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn mean(points: impl Iterator<Item = Option<Point>>) -> Option<Point> {
    let mut sum = Vec2::ZERO;
    let mut n = 0_u32;
    for p in points {
        sum += p?.to_vec2();
        n += 1;
    }
    (n > 0).then(|| (sum / f64::from(n)).to_point())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: u64, x: f64, y: f64, t: u64) -> Contact {
        Contact::new(
            PointerId(id),
            PointerKind::Touch,
            PointerButton::MAIN,
            Point::new(x, y),
            t,
        )
    }

    #[test]
    fn origin_sample_has_zero_deltas() {
        let c = contact(1, 5.0, 7.0, 100);
        let origin = c.origin();
        assert_eq!(origin.delta, Vec2::ZERO);
        assert_eq!(origin.distance, 0.0);
        assert_eq!(origin.angle, 0.0);
        assert_eq!(c.history().len(), 1);
        assert_eq!(c.previous(), None);
        assert_eq!(c.step(), None);
        assert_eq!(c.elapsed_ms(), 0);
    }

    #[test]
    fn samples_measure_from_origin() {
        let mut c = contact(1, 10.0, 10.0, 0);
        c.push(Point::new(13.0, 14.0), 16);
        c.push(Point::new(16.0, 18.0), 32);

        let latest = c.latest();
        assert_eq!(latest.delta, Vec2::new(6.0, 8.0));
        assert_eq!(latest.distance, 10.0);
        assert_eq!(c.step(), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(c.elapsed_ms(), 32);
        assert_eq!(c.delta_at(1), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(c.delta_at(3), None);
        assert_eq!(c.angle_at(0), Some(0.0));
        assert_eq!(c.angle_at(7), None);
    }

    #[test]
    fn elapsed_saturates_on_clock_skew() {
        let mut c = contact(1, 0.0, 0.0, 500);
        c.push(Point::new(1.0, 0.0), 400);
        assert_eq!(c.elapsed_ms(), 0);
    }

    #[test]
    fn release_drops_button() {
        let mut c = contact(1, 0.0, 0.0, 0);
        assert!(c.is_held(PointerButton::MAIN));
        c.release(PointerButton::SECONDARY);
        assert!(c.is_held(PointerButton::MAIN));
        c.release(PointerButton::MAIN);
        assert!(c.buttons_down().is_empty());
    }

    #[test]
    fn primary_follows_arrival_position() {
        let mut set = ContactSet::new();
        set.insert(contact(7, 0.0, 0.0, 0));
        set.designate_primary(1);
        assert_eq!(set.primary(), None);

        set.insert(contact(9, 0.0, 0.0, 0));
        set.designate_primary(1);
        assert_eq!(set.primary(), Some(PointerId(9)));

        set.remove(PointerId(9));
        assert_eq!(set.primary(), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn centroid_of_latest_positions() {
        let mut set = ContactSet::new();
        set.insert(contact(1, 0.0, 0.0, 0));
        set.insert(contact(2, 10.0, 20.0, 0));
        assert_eq!(set.centroid(), Some(Point::new(5.0, 10.0)));

        set.get_mut(PointerId(1)).unwrap().push(Point::new(4.0, 0.0), 10);
        assert_eq!(set.centroid(), Some(Point::new(7.0, 10.0)));
        assert_eq!(set.centroid_at(0), Some(Point::new(5.0, 10.0)));
        // Contact 2 has no second sample.
        assert_eq!(set.centroid_at(1), None);
    }

    #[test]
    fn empty_set_has_no_centroid() {
        assert_eq!(ContactSet::new().centroid(), None);
    }
}
