// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

const DT: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn step_moves_at_scaled_speed() {
    let config = BehaviorConfig::default();
    let mut motion = Motion::new(Vec2::ZERO, 0.0);
    motion.begin_move(Vec2::new(0.0, 10.0));

    assert_eq!(motion.step_towards(&config, 0.5, 1.0), Step::Continue);
    assert!(approx(motion.position.z, 1.0));
    assert!(approx(motion.speed, 1.0));
    assert!(motion.is_moving);
    assert_eq!(motion.phase, Phase::Moving);
}

#[yare::parameterized(
    high   = { herd_core::LoadLevel::High },
    middle = { herd_core::LoadLevel::Middle },
    low    = { herd_core::LoadLevel::Low },
)]
fn distance_per_second_follows_speed_policy(level: herd_core::LoadLevel) {
    let config = BehaviorConfig::default();
    let mut motion = Motion::new(Vec2::ZERO, 0.0);
    motion.begin_move(Vec2::new(100.0, 0.0));
    motion.step_towards(&config, level.speed_factor(), 1.0);
    assert!(approx(motion.position.x, config.move_speed * level.speed_factor()));
}

#[test]
fn step_never_overshoots() {
    let config = BehaviorConfig::default();
    let mut motion = Motion::new(Vec2::ZERO, 0.0);
    motion.begin_move(Vec2::new(0.5, 0.0));

    assert_eq!(motion.step_towards(&config, 1.0, 10.0), Step::Continue);
    assert!(approx(motion.position.x, 0.5));
    assert_eq!(motion.step_towards(&config, 1.0, DT), Step::Arrived);
    assert_eq!(motion.destination, None);
    assert!(!motion.is_moving);
    assert_eq!(motion.speed, 0.0);
}

#[test]
fn within_epsilon_counts_as_arrived() {
    let config = BehaviorConfig::default();
    let mut motion = Motion::new(Vec2::ZERO, 0.0);
    motion.begin_move(Vec2::new(0.05, 0.0));
    assert_eq!(motion.step_towards(&config, 1.0, DT), Step::Arrived);
    assert_eq!(motion.position, Vec2::ZERO);
}

#[test]
fn no_destination_is_arrived() {
    let config = BehaviorConfig::default();
    let mut motion = Motion::new(Vec2::ZERO, 0.0);
    assert_eq!(motion.step_towards(&config, 1.0, DT), Step::Arrived);
}

#[test]
fn heading_turns_toward_travel() {
    let config = BehaviorConfig::default();
    let mut motion = Motion::new(Vec2::ZERO, 0.0);
    motion.begin_move(Vec2::new(100.0, 0.0));

    motion.step_towards(&config, 1.0, DT);
    assert!(motion.heading > 0.0 && motion.heading < 90.0);
    for _ in 0..600 {
        motion.step_towards(&config, 1.0, DT);
    }
    assert!(approx(motion.heading, 90.0));
}

#[test]
fn rotation_converges_and_snaps() {
    let config = BehaviorConfig::default();
    let target = config.default_yaw();
    let mut motion = Motion::new(Vec2::ZERO, 0.0);

    let mut ticks = 0;
    while !motion.step_rotation(target, &config, DT) {
        ticks += 1;
        assert!(ticks < 1_000, "rotation never converged");
    }
    assert_eq!(motion.heading, target);
    assert!(ticks > 1);
}

#[test]
fn rotation_already_aligned_finishes_immediately() {
    let config = BehaviorConfig::default();
    let mut motion = Motion::new(Vec2::ZERO, 45.05);
    assert!(motion.step_rotation(45.0, &config, DT));
    assert_eq!(motion.heading, 45.0);
}

#[test]
fn halt_clears_movement_signals() {
    let config = BehaviorConfig::default();
    let mut motion = Motion::new(Vec2::ZERO, 0.0);
    motion.begin_move(Vec2::new(5.0, 5.0));
    motion.step_towards(&config, 1.0, DT);
    let position = motion.position;

    motion.halt();

    assert_eq!(motion.destination, None);
    assert!(!motion.is_moving);
    assert_eq!(motion.speed, 0.0);
    assert_eq!(motion.position, position);
}
