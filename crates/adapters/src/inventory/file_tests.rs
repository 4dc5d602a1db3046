// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use herd_core::LoadLevel;

fn write(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("instances.json");
    std::fs::write(&path, body).unwrap();
    path
}

#[tokio::test]
async fn reads_file_on_every_call() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, r#"[{"type": "EC2", "arn": "a", "name": "a", "state": "low", "cost": 1}]"#);
    let inventory = FileInventory::new(&path);

    let first = inventory.list().await.unwrap();
    assert_eq!(first[0].load_level, LoadLevel::Low);

    write(&dir, r#"[{"type": "EC2", "arn": "a", "name": "a", "state": "high", "cost": 1}]"#);
    let state = inventory.get_state(&"a".into()).await.unwrap();
    assert_eq!(state.load_level, LoadLevel::High);
}

#[tokio::test]
async fn missing_file_is_transport_failure() {
    let dir = tempfile::tempdir().unwrap();
    let inventory = FileInventory::new(dir.path().join("absent.json"));
    assert!(matches!(inventory.list().await, Err(InventoryError::Transport(_))));
}

#[tokio::test]
async fn garbage_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let inventory = FileInventory::new(write(&dir, "{{{"));
    assert!(matches!(inventory.list().await, Err(InventoryError::Malformed(_))));
}

#[tokio::test]
async fn unknown_id_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let inventory = FileInventory::new(write(&dir, "[]"));
    let err = inventory.get_state(&"b".into()).await.unwrap_err();
    assert_eq!(err, InventoryError::UnknownIdentifier("b".into()));
}
