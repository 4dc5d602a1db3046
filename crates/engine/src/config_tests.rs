// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults_are_valid() {
    let behavior = BehaviorConfig::default();
    behavior.validate().unwrap();
    assert_eq!(behavior.min_wait(), Duration::from_secs(3));
    assert_eq!(behavior.max_wait(), Duration::from_secs(10));
    assert!((behavior.default_yaw() - 180.0).abs() < 1e-3);

    let reconciler = ReconcilerConfig::default();
    reconciler.validate().unwrap();
    assert_eq!(reconciler.poll_period(), Duration::from_millis(100));
    assert_eq!(reconciler.poll_timeout(), Duration::from_secs(2));
}

#[yare::parameterized(
    negative_min   = { BehaviorConfig { min_wait: -1.0, ..BehaviorConfig::default() }, "min_wait" },
    inverted_wait  = { BehaviorConfig { max_wait: 1.0, ..BehaviorConfig::default() }, "max_wait" },
    zero_speed     = { BehaviorConfig { move_speed: 0.0, ..BehaviorConfig::default() }, "move_speed" },
    zero_rotation  = { BehaviorConfig { rotation_speed: 0.0, ..BehaviorConfig::default() }, "rotation_speed" },
    zero_epsilon   = { BehaviorConfig { arrival_epsilon: 0.0, ..BehaviorConfig::default() }, "arrival_epsilon" },
    nan_tolerance  = { BehaviorConfig { angular_tolerance: f32::NAN, ..BehaviorConfig::default() }, "angular_tolerance" },
    zero_tick      = { BehaviorConfig { tick_rate: 0.0, ..BehaviorConfig::default() }, "tick_rate" },
    vanishing_tick = { BehaviorConfig { tick_rate: 1e10, ..BehaviorConfig::default() }, "tick_rate" },
    huge_wait      = { BehaviorConfig { max_wait: 1e30, ..BehaviorConfig::default() }, "max_wait" },
    zero_facing    = { BehaviorConfig { default_facing: Vec2::ZERO, ..BehaviorConfig::default() }, "default_facing" },
)]
fn invalid_behavior(config: BehaviorConfig, field: &str) {
    match config.validate() {
        Err(ConfigError::Invalid { field: f, .. }) => assert_eq!(f, field),
        other => panic!("expected invalid {}, got {:?}", field, other),
    }
}

#[test]
fn equal_wait_bounds_are_allowed() {
    let config = BehaviorConfig { min_wait: 2.0, max_wait: 2.0, ..BehaviorConfig::default() };
    config.validate().unwrap();
}

#[yare::parameterized(
    zero_period      = { ReconcilerConfig { poll_period: 0.0, ..ReconcilerConfig::default() }, "poll_period" },
    vanishing_period = { ReconcilerConfig { poll_period: 1e-10, ..ReconcilerConfig::default() }, "poll_period" },
    huge_period      = { ReconcilerConfig { poll_period: 1e30, ..ReconcilerConfig::default() }, "poll_period" },
    negative_timeout = { ReconcilerConfig { poll_timeout: -1.0, ..ReconcilerConfig::default() }, "poll_timeout" },
    vanishing_timeout = { ReconcilerConfig { poll_timeout: 1e-12, ..ReconcilerConfig::default() }, "poll_timeout" },
)]
fn invalid_reconciler(config: ReconcilerConfig, field: &str) {
    match config.validate() {
        Err(ConfigError::Invalid { field: f, .. }) => assert_eq!(f, field),
        other => panic!("expected invalid {}, got {:?}", field, other),
    }
}

#[test]
fn validated_intervals_are_nonzero() {
    let behavior = BehaviorConfig { tick_rate: 1e6, ..BehaviorConfig::default() };
    behavior.validate().unwrap();
    assert!(!behavior.tick().is_zero());

    let reconciler = ReconcilerConfig { poll_period: 1e-6, ..ReconcilerConfig::default() };
    reconciler.validate().unwrap();
    assert!(!reconciler.poll_period().is_zero());
}

#[test]
fn partial_json_fills_defaults() {
    let config: BehaviorConfig = serde_json::from_str(r#"{"move_speed": 4.0}"#).unwrap();
    assert_eq!(config.move_speed, 4.0);
    assert_eq!(config.max_wait, 10.0);
}
