// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn configured_level_used_without_rust_log() {
    std::env::remove_var("RUST_LOG");
    let config = LogConfig { level: "herd_engine=debug,warn".to_string(), file: None };
    let filter = filter(&config).unwrap();
    assert!(filter.to_string().contains("herd_engine=debug"));
}

#[test]
#[serial]
fn rust_log_wins() {
    std::env::set_var("RUST_LOG", "trace");
    let filter = filter(&LogConfig::default()).unwrap();
    std::env::remove_var("RUST_LOG");
    assert_eq!(filter.to_string(), "trace");
}

#[test]
#[serial]
fn bad_level_is_rejected() {
    std::env::remove_var("RUST_LOG");
    let config = LogConfig { level: "herd=notalevel".to_string(), file: None };
    assert!(matches!(filter(&config), Err(LifecycleError::Logging(_))));
}
