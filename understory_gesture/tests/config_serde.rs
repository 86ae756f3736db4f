// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration loading through `serde`.

#![cfg(feature = "serde")]

use understory_gesture::pan::PanSource;
use understory_gesture::swipe::{Strictness, SwipeConfig};
use understory_gesture::{EndPolicy, GestureConfig, PointerButton, PointerKinds, UpdatePolicy};

#[test]
fn partial_options_fill_in_defaults() {
    let config: GestureConfig = serde_json::from_str(
        r#"{ "required_contacts": 2, "max_contacts": 3, "end_policy": "BelowRequired" }"#,
    )
    .unwrap();
    assert_eq!(config.required_contacts, 2);
    assert_eq!(config.max_contacts, 3);
    assert_eq!(config.end_policy, EndPolicy::BelowRequired);
    assert_eq!(config.update_policy, UpdatePolicy::AnyContact);
    assert_eq!(config.mouse_button, PointerButton::MAIN);
    assert_eq!(config.allowed_kinds, PointerKinds::all());
}

#[test]
fn swipe_options() {
    let config: SwipeConfig =
        serde_json::from_str(r#"{ "min_distance": 40.0, "strictness": "Flexible" }"#).unwrap();
    assert_eq!(config.min_distance, 40.0);
    assert_eq!(config.max_duration_ms, 1000);
    assert_eq!(config.strictness, Strictness::Flexible);
}

#[test]
fn allowed_kinds_round_trip_by_name() {
    let config = GestureConfig::default().with_allowed_kinds(PointerKinds::TOUCH | PointerKinds::PEN);
    let json = serde_json::to_string(&config).unwrap();
    let back: GestureConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let source: PanSource = serde_json::from_str(r#""UpdatedContact""#).unwrap();
    assert_eq!(source, PanSource::UpdatedContact);
}
