// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic pointer streams for the gesture demos.
//!
//! Real hosts translate platform events into [`PointerEvent`]s; the demos
//! script them instead so they run headless.

use kurbo::{Point, Vec2};
use understory_gesture::{PointerEvent, PointerKind};

/// Installs a `tracing` subscriber honoring `RUST_LOG` (default `debug`).
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    // A second call in the same process is harmless.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// A straight stroke of one contact.
#[derive(Clone, Copy, Debug)]
pub struct Stroke {
    /// Pointer id.
    pub id: u64,
    /// Device type.
    pub kind: PointerKind,
    /// Start position.
    pub from: Point,
    /// Total displacement.
    pub travel: Vec2,
    /// Time of the pointer-down.
    pub start_ms: u64,
    /// Time of the final move and lift.
    pub end_ms: u64,
}

impl Stroke {
    /// A touch stroke starting at `t = 0`.
    #[must_use]
    pub fn touch(id: u64, from: Point, travel: Vec2, duration_ms: u64) -> Self {
        Self {
            id,
            kind: PointerKind::Touch,
            from,
            travel,
            start_ms: 0,
            end_ms: duration_ms,
        }
    }

    /// The pointer-down.
    #[must_use]
    pub fn down(&self) -> PointerEvent {
        PointerEvent::down(self.id, self.kind, self.from, self.start_ms)
    }

    /// `steps` evenly spaced moves ending at the stroke's end point.
    #[must_use]
    pub fn moves(&self, steps: u32) -> Vec<PointerEvent> {
        let steps = steps.max(1);
        let span = self.end_ms.saturating_sub(self.start_ms);
        (1..=steps)
            .map(|i| {
                let f = f64::from(i) / f64::from(steps);
                let t = self.start_ms + span * u64::from(i) / u64::from(steps);
                PointerEvent::moved(self.id, self.kind, self.from + self.travel * f, t)
            })
            .collect()
    }

    /// The pointer-up at the end point.
    #[must_use]
    pub fn up(&self) -> PointerEvent {
        PointerEvent::up(self.id, self.kind, self.from + self.travel, self.end_ms)
    }
}

/// Interleaves several strokes into one delivery-ordered stream: all downs,
/// then the moves step by step, then the first stroke's lift.
#[must_use]
pub fn gesture(strokes: &[Stroke], steps: u32) -> Vec<PointerEvent> {
    let mut events: Vec<PointerEvent> = strokes.iter().map(Stroke::down).collect();
    let moves: Vec<Vec<PointerEvent>> = strokes.iter().map(|s| s.moves(steps)).collect();
    for i in 0..steps.max(1) as usize {
        events.extend(moves.iter().filter_map(|m| m.get(i).copied()));
    }
    events.extend(strokes.first().map(Stroke::up));
    events
}
