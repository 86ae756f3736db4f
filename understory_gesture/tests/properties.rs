// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the recognizer lifecycle.

use kurbo::Point;
use proptest::prelude::*;
use understory_gesture::{
    GestureConfig, GestureRecognizer, PointerEvent, PointerId, PointerKind, Transition,
};

#[derive(Clone, Debug)]
enum Op {
    Down(u64),
    Move(u64, f64, f64),
    Up(u64),
    Leave(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0_u64..6).prop_map(Op::Down),
        (0_u64..6, -300.0..300.0_f64, -300.0..300.0_f64).prop_map(|(id, x, y)| Op::Move(id, x, y)),
        (0_u64..6).prop_map(Op::Up),
        (0_u64..6).prop_map(Op::Leave),
    ]
}

fn event(op: &Op, t: u64) -> PointerEvent {
    let touch = PointerKind::Touch;
    match *op {
        Op::Down(id) => PointerEvent::down(id, touch, Point::ORIGIN, t),
        Op::Move(id, x, y) => PointerEvent::moved(id, touch, Point::new(x, y), t),
        Op::Up(id) => PointerEvent::up(id, touch, Point::ORIGIN, t),
        Op::Leave(id) => PointerEvent::leave(id, touch, Point::ORIGIN, t),
    }
}

proptest! {
    #[test]
    fn start_fires_exactly_once_at_required_count(required in 1_usize..5, ids in proptest::collection::vec(0_u64..8, 1..12)) {
        let mut r = GestureRecognizer::new(GestureConfig::default().with_required_contacts(required as i64));
        let mut starts = 0;
        for (t, id) in ids.iter().enumerate() {
            let was = r.len();
            if let Some(Transition::Started) = r.handle(&PointerEvent::down(*id, PointerKind::Touch, Point::ORIGIN, t as u64)) {
                starts += 1;
                prop_assert_eq!(was + 1, required);
                prop_assert_eq!(r.len(), required);
            }
            prop_assert!(r.len() <= required);
        }
        let distinct = {
            let mut seen: Vec<u64> = ids.clone();
            seen.sort_unstable();
            seen.dedup();
            seen.len()
        };
        prop_assert_eq!(starts, usize::from(distinct >= required));
    }

    #[test]
    fn lifecycle_invariants_hold_for_any_stream(required in 1_usize..4, ops in proptest::collection::vec(op(), 0..64)) {
        let mut r = GestureRecognizer::new(GestureConfig::default().with_required_contacts(required as i64));
        for (t, op) in ops.iter().enumerate() {
            let transition = r.handle(&event(op, t as u64));
            if !r.is_active() {
                prop_assert!(r.len() <= required);
            } else {
                prop_assert_eq!(r.len(), required);
            }
            match transition {
                Some(Transition::Ended { contacts, by }) => {
                    prop_assert!(r.contacts().is_empty());
                    prop_assert!(!r.is_active());
                    prop_assert!(contacts.contains(by));
                }
                Some(Transition::Updated(id)) => {
                    prop_assert!(r.contacts().contains(id));
                }
                Some(Transition::Started) | None => {}
            }
            for contact in r.contacts() {
                let origin = contact.origin();
                prop_assert_eq!(origin.distance, 0.0);
                prop_assert_eq!(origin.delta, kurbo::Vec2::ZERO);
            }
        }
    }

    #[test]
    fn untracked_moves_never_change_state(moves in proptest::collection::vec((100_u64..200, -50.0..50.0_f64), 1..20)) {
        let mut r = GestureRecognizer::new(GestureConfig::default().with_required_contacts(2));
        r.handle(&PointerEvent::down(1, PointerKind::Touch, Point::ORIGIN, 0));
        let before = r.contacts().clone();
        for (t, (id, x)) in moves.iter().enumerate() {
            prop_assert_eq!(r.handle(&PointerEvent::moved(*id, PointerKind::Touch, Point::new(*x, 0.0), t as u64)), None);
        }
        prop_assert_eq!(r.contacts(), &before);
        prop_assert!(!r.contacts().contains(PointerId(100)));
    }
}
