// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe basics.
//!
//! Feed scripted one- and two-finger strokes through a host with a swipe
//! classifier and print what it recognizes.
//!
//! Run:
//! - `cargo run -p understory_gesture_demos --example swipe_basics`
//! - `RUST_LOG=trace cargo run -p understory_gesture_demos --example swipe_basics`

use kurbo::{Point, Rect, Vec2};
use understory_gesture::swipe::{Strictness, SwipeClassifier, SwipeConfig};
use understory_gesture::{GestureConfig, GestureEvent, GestureHost};
use understory_gesture_demos::{Stroke, gesture, init_logging};

fn run(label: &str, contacts: i64, strictness: Strictness, strokes: &[Stroke]) {
    let mut host = GestureHost::new(GestureConfig::default().with_required_contacts(contacts))
        .with_bounds(Rect::new(0.0, 0.0, 800.0, 600.0));
    host.add_classifier(Box::new(SwipeClassifier::new(
        SwipeConfig::default().with_strictness(strictness),
    )));
    host.add_listener(|e| match e {
        GestureEvent::Swipe(swipe) => println!(
            "  {} by {} ({} contact(s), {:?}, {} ms)",
            e.name(),
            swipe.id,
            swipe.contacts,
            swipe.delta,
            swipe.elapsed_ms
        ),
        GestureEvent::SwipeFailed(failure) => {
            println!("  {} [{}]: {failure}", e.name(), failure.reason.code());
        }
        GestureEvent::Start(_) | GestureEvent::End(_) => println!("  {}", e.name()),
        GestureEvent::Update(_) | GestureEvent::Pan(_) => {}
    });

    println!("{label}:");
    for event in gesture(strokes, 8) {
        host.handle(&event);
    }
}

fn main() {
    init_logging();

    let origin = Point::new(400.0, 300.0);
    run(
        "quick flick right",
        1,
        Strictness::Strict,
        &[Stroke::touch(1, origin, Vec2::new(180.0, 12.0), 150)],
    );
    run(
        "lazy drag",
        1,
        Strictness::Strict,
        &[Stroke::touch(1, origin, Vec2::new(180.0, 0.0), 1500)],
    );
    run(
        "nudge",
        1,
        Strictness::Strict,
        &[Stroke::touch(1, origin, Vec2::new(30.0, 0.0), 100)],
    );

    let split = [
        Stroke::touch(1, origin, Vec2::new(150.0, 0.0), 200),
        Stroke::touch(2, origin + Vec2::new(60.0, 0.0), Vec2::new(0.0, 150.0), 200),
    ];
    run("two fingers apart (strict)", 2, Strictness::Strict, &split);
    run("two fingers apart (flexible)", 2, Strictness::Flexible, &split);
}
