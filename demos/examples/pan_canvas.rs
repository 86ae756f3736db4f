// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan canvas.
//!
//! Accumulate pan deltas into a canvas offset the way a scroll container or
//! drawing surface would, and show how the pan source affects two-finger pans.
//!
//! Run:
//! - `cargo run -p understory_gesture_demos --example pan_canvas`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Vec2};
use understory_gesture::pan::{PanClassifier, PanSource};
use understory_gesture::{GestureConfig, GestureEvent, GestureEventKind, GestureHost, UpdatePolicy};
use understory_gesture_demos::{Stroke, gesture, init_logging};

fn pan(label: &str, source: PanSource, strokes: &[Stroke]) {
    let config = GestureConfig::default()
        .with_required_contacts(strokes.len() as i64)
        .with_update_policy(UpdatePolicy::AnyContact);
    let mut host = GestureHost::new(config);
    host.add_classifier(Box::new(PanClassifier::new(source)));

    let offset = Rc::new(Cell::new(Vec2::ZERO));
    let pans = Rc::new(Cell::new(0_u32));
    let (sink, count) = (Rc::clone(&offset), Rc::clone(&pans));
    host.add_listener_for(GestureEventKind::Pan, move |e| {
        if let GestureEvent::Pan(pan) = e {
            sink.set(sink.get() + pan.delta);
            count.set(count.get() + 1);
        }
    });

    for event in gesture(strokes, 10) {
        host.handle(&event);
    }
    println!(
        "{label}: {} pan events, canvas offset {:?}",
        pans.get(),
        offset.get()
    );
}

fn main() {
    init_logging();

    let one = [Stroke::touch(1, Point::new(100.0, 100.0), Vec2::new(-60.0, 40.0), 300)];
    pan("one finger", PanSource::Primary, &one);

    let two = [
        Stroke::touch(1, Point::new(100.0, 100.0), Vec2::new(-60.0, 40.0), 300),
        Stroke::touch(2, Point::new(160.0, 100.0), Vec2::new(-60.0, 40.0), 300),
    ];
    pan("two fingers, primary only", PanSource::Primary, &two);
    pan("two fingers, every contact", PanSource::UpdatedContact, &two);
}
