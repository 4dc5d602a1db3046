// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use herd_adapters::FakeBounds;
use herd_core::Vec2;
use tokio::task::JoinHandle;

struct Rig {
    motion: Arc<Mutex<Motion>>,
    load_tx: watch::Sender<LoadLevel>,
    suspend_tx: watch::Sender<bool>,
    bounds: FakeBounds,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

/// One-second idle waits so phase timing is deterministic.
fn fixed_wait() -> BehaviorConfig {
    BehaviorConfig { min_wait: 1.0, max_wait: 1.0, ..BehaviorConfig::default() }
}

fn rig(config: BehaviorConfig, points: Vec<Vec2>, level: LoadLevel) -> Rig {
    let config = Arc::new(config);
    let motion = Arc::new(Mutex::new(Motion::new(Vec2::ZERO, config.default_yaw())));
    let (load_tx, load) = watch::channel(level);
    let (suspend_tx, suspended) = watch::channel(false);
    let bounds = FakeBounds::new(points);
    let cancel = CancellationToken::new();
    let behavior = Behavior {
        id: ResourceId::new("a"),
        config,
        bounds: Arc::new(bounds.clone()),
        motion: Arc::clone(&motion),
        load,
        suspended,
    };
    let task = tokio::spawn(behavior.run(cancel.clone()));
    Rig { motion, load_tx, suspend_tx, bounds, cancel, task }
}

async fn sleep_secs(secs: f64) {
    tokio::time::sleep(Duration::from_secs_f64(secs)).await;
}

#[tokio::test(start_paused = true)]
async fn idles_then_walks_then_faces_default() {
    let rig = rig(fixed_wait(), vec![Vec2::new(2.0, 0.0)], LoadLevel::Middle);

    sleep_secs(0.5).await;
    {
        let motion = *rig.motion.lock();
        assert_eq!(motion.phase, Phase::Idle);
        assert_eq!(motion.position, Vec2::ZERO);
        assert_eq!(rig.bounds.calls(), 0);
    }

    sleep_secs(1.0).await;
    {
        let motion = *rig.motion.lock();
        assert_eq!(motion.phase, Phase::Moving);
        assert!(motion.is_moving);
        assert_eq!(motion.destination, Some(Vec2::new(2.0, 0.0)));
        assert!(motion.position.x > 0.5 && motion.position.x < 1.5);
    }

    // 2 units at 2 u/s arrives near t=2s; the turn back takes under 2s.
    sleep_secs(2.5).await;
    let motion = *rig.motion.lock();
    assert_eq!(motion.phase, Phase::Idle);
    assert!((motion.position.x - 2.0).abs() < 0.1);
    assert_eq!(motion.destination, None);
    assert_eq!(motion.speed, 0.0);
    assert_eq!(motion.heading, BehaviorConfig::default().default_yaw());
    assert_eq!(rig.bounds.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn high_load_walks_slower() {
    let rig = rig(fixed_wait(), vec![Vec2::new(10.0, 0.0)], LoadLevel::High);

    sleep_secs(2.0).await;
    let x = rig.motion.lock().position.x;
    assert!((x - 1.0).abs() < 0.05, "x = {x}");
    assert_eq!(rig.motion.lock().speed, 1.0);

    rig.load_tx.send_replace(LoadLevel::Low);
    sleep_secs(0.5).await;
    assert!((rig.motion.lock().speed - 2.6).abs() < 1e-4);
}

#[tokio::test(start_paused = true)]
async fn suspend_halts_and_faces_default_until_resumed() {
    let rig = rig(fixed_wait(), vec![Vec2::new(10.0, 0.0)], LoadLevel::Middle);
    sleep_secs(1.5).await;
    assert_eq!(rig.motion.lock().phase, Phase::Moving);

    rig.suspend_tx.send_replace(true);
    sleep_secs(0.1).await;
    let frozen = {
        let motion = *rig.motion.lock();
        assert_eq!(motion.phase, Phase::Suspended);
        assert_eq!(motion.destination, None);
        assert!(!motion.is_moving);
        assert_eq!(motion.speed, 0.0);
        motion.position
    };

    // Idle timer does not run while suspended.
    sleep_secs(30.0).await;
    {
        let motion = *rig.motion.lock();
        assert_eq!(motion.position, frozen);
        assert_eq!(motion.heading, BehaviorConfig::default().default_yaw());
        assert_eq!(rig.bounds.calls(), 1);
    }

    rig.suspend_tx.send_replace(false);
    sleep_secs(0.5).await;
    assert_eq!(rig.motion.lock().phase, Phase::Idle);
    assert_eq!(rig.bounds.calls(), 1);

    sleep_secs(0.6).await;
    assert_eq!(rig.bounds.calls(), 2);
    assert_eq!(rig.motion.lock().phase, Phase::Moving);
}

#[tokio::test(start_paused = true)]
async fn suspend_during_idle_skips_destination() {
    let rig = rig(fixed_wait(), vec![Vec2::new(10.0, 0.0)], LoadLevel::Middle);
    sleep_secs(0.5).await;
    rig.suspend_tx.send_replace(true);

    sleep_secs(5.0).await;
    assert_eq!(rig.bounds.calls(), 0);
    assert_eq!(rig.motion.lock().phase, Phase::Suspended);
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_the_task() {
    let rig = rig(fixed_wait(), vec![Vec2::new(10.0, 0.0)], LoadLevel::Middle);
    sleep_secs(1.5).await;

    rig.cancel.cancel();
    rig.task.await.unwrap();

    let position = rig.motion.lock().position;
    sleep_secs(5.0).await;
    assert_eq!(rig.motion.lock().position, position);
}

#[tokio::test(start_paused = true)]
async fn dropped_control_channel_ends_the_task() {
    let Rig { suspend_tx, task, .. } = rig(fixed_wait(), vec![], LoadLevel::Middle);
    drop(suspend_tx);
    tokio::time::timeout(Duration::from_secs(60), task).await.unwrap().unwrap();
}

#[test]
fn draw_wait_stays_in_range() {
    let config = BehaviorConfig::default();
    for _ in 0..200 {
        let wait = draw_wait(&config);
        assert!(wait >= config.min_wait() && wait <= config.max_wait(), "{wait:?}");
    }
}

#[test]
fn draw_wait_with_equal_bounds_is_exact() {
    assert_eq!(draw_wait(&fixed_wait()), Duration::from_secs(1));
}
