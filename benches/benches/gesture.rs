// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_gesture::pan::PanClassifier;
use understory_gesture::swipe::{SwipeClassifier, SwipeConfig, Strictness};
use understory_gesture::{GestureConfig, GestureHost, GestureRecognizer, PointerEvent, PointerKind};

/// A full gesture: `contacts` downs, `moves` moves per contact, then one lift.
fn stream(contacts: u64, moves: u64) -> Vec<PointerEvent> {
    let touch = PointerKind::Touch;
    let mut events = Vec::new();
    for id in 0..contacts {
        events.push(PointerEvent::down(id, touch, Point::new(id as f64 * 40.0, 0.0), 0));
    }
    for step in 1..=moves {
        for id in 0..contacts {
            let p = Point::new(id as f64 * 40.0 + step as f64 * 3.0, step as f64 * 0.5);
            events.push(PointerEvent::moved(id, touch, p, step * 4));
        }
    }
    let end = Point::new(moves as f64 * 3.0, moves as f64 * 0.5);
    events.push(PointerEvent::up(0, touch, end, moves * 4));
    events
}

fn bench_recognizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/recognizer");

    // History appends dominate; lookups are linear in the contact count.
    for contacts in [1_u64, 2, 5, 10] {
        let events = stream(contacts, 256);
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(contacts), &events, |b, events| {
            b.iter_batched(
                || {
                    GestureRecognizer::new(
                        GestureConfig::default().with_required_contacts(contacts as i64),
                    )
                },
                |mut recognizer| {
                    for event in events {
                        black_box(recognizer.handle(event));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_host(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/host");

    for contacts in [1_u64, 2, 5] {
        let events = stream(contacts, 256);
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(contacts), &events, |b, events| {
            b.iter_batched(
                || {
                    let mut host = GestureHost::new(
                        GestureConfig::default().with_required_contacts(contacts as i64),
                    );
                    host.add_classifier(Box::new(PanClassifier::default()));
                    host.add_classifier(Box::new(SwipeClassifier::new(
                        SwipeConfig::default().with_strictness(Strictness::Flexible),
                    )));
                    host.add_listener(|e| {
                        black_box(e);
                    });
                    host
                },
                |mut host| {
                    for event in events {
                        black_box(host.handle(event).len());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recognizer, bench_host);
criterion_main!(benches);
