// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::lifecycle::InventoryConfig;
use herd_adapters::inventory::{MOCK_ALB_ARN, MOCK_EC2_ARN, MOCK_RDB_ARN};
use herd_core::{LoadLevel, ResourceId, Vec2};
use std::time::Duration;

fn quick_config() -> Config {
    let mut config = Config::default();
    config.inventory.latency_ms = 0;
    config.chat.latency_ms = 0;
    config
}

#[tokio::test(start_paused = true)]
async fn mock_inventory_populates_agents() {
    let daemon = startup(&quick_config()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let mut expected: Vec<ResourceId> =
        [MOCK_EC2_ARN, MOCK_RDB_ARN, MOCK_ALB_ARN].into_iter().map(ResourceId::new).collect();
    expected.sort();
    assert_eq!(daemon.directory.ids(), expected);
    assert!(daemon.mock.is_some());

    let directory = daemon.directory.clone();
    daemon.shutdown().await;
    assert!(directory.is_empty());
}

#[tokio::test(start_paused = true)]
async fn mock_cycle_reaches_agent() {
    let daemon = startup(&quick_config()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let mock = daemon.mock.clone().unwrap();
    assert_eq!(mock.cycle(MOCK_EC2_ARN), Some(LoadLevel::High));
    tokio::time::sleep(Duration::from_millis(200)).await;

    let agent = daemon.directory.get(MOCK_EC2_ARN).unwrap();
    assert_eq!(agent.load_level(), LoadLevel::High);
    assert!(agent.visuals().tired);
    daemon.shutdown().await;
}

// Real time: file reads go through the blocking pool.
#[tokio::test]
async fn file_inventory_feeds_agents_and_chat() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("instances.json");
    std::fs::write(
        &path,
        r#"[{"type":"EC2","arn":"arn:i-1","name":"web","state":"HIGH","cost":1.5},
            {"type":"LAMBDA","arn":"arn:fn","name":"fn","state":"LOW","cost":0.1}]"#,
    )
    .unwrap();
    let mut config = quick_config();
    config.inventory = InventoryConfig { source: InventorySource::File, path: Some(path), latency_ms: 0 };
    config.bounds.waypoints = vec![Vec2::new(1.0, 1.0)];

    let daemon = startup(&config).await.unwrap();
    for _ in 0..50 {
        if !daemon.directory.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert_eq!(daemon.directory.ids(), vec![ResourceId::new("arn:i-1")]);
    assert!(daemon.mock.is_none());
    let greeting = daemon.session.select(&ResourceId::new("arn:i-1")).await.unwrap();
    assert_eq!(greeting.as_deref(), Some("EC2 load is high! Consider scaling out."));
    daemon.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn shutdown_resumes_talking_agent() {
    let daemon = startup(&quick_config()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    let id = ResourceId::new(MOCK_RDB_ARN);
    daemon.session.select(&id).await.unwrap();
    let handle = daemon.directory.get(&id).unwrap();
    assert!(handle.is_suspended());

    let session = Arc::clone(&daemon.session);
    daemon.shutdown().await;
    assert!(!session.is_active());
    assert!(!handle.is_suspended());
    assert!(!handle.is_alive());
}

#[test]
fn rect_bounds_rejects_empty_region() {
    let config = BoundsConfig { min: Vec2::ZERO, max: Vec2::ZERO, waypoints: vec![] };
    assert!(matches!(bounds(&config), Err(BoundsError::EmptyRegion(_))));
}
