// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use std::io::Write;

const FULL: &str = r#"
[inventory]
source = "file"
path = "/var/lib/herd/instances.json"

[chat]
latency_ms = 0

[reconciler]
poll_period = 0.5
poll_timeout = 1.5

[behavior]
min_wait = 1.0
max_wait = 2.0
default_facing = [1.0, 0.0]

[bounds]
waypoints = [[0.0, 0.0], [5.0, 5.0]]

[cost]
warning_threshold = 3.0

[log]
level = "debug"

[console]
thinking_text = "..."
"#;

fn clear_env() {
    for name in ["HERD_CONFIG", "HERD_POLL_PERIOD_MS", "HERD_POLL_TIMEOUT_MS", "HERD_LOG"] {
        std::env::remove_var(name);
    }
}

#[test]
fn defaults_are_valid() {
    let config = Config::default();
    config.validate().unwrap();
    assert_eq!(config.inventory.source, InventorySource::Mock);
    assert_eq!(config.inventory_latency(), Duration::from_millis(500));
    assert_eq!(config.console.thinking_text, "Thinking...");
    assert_eq!(config.log.level, "info");
}

#[test]
fn empty_file_is_all_defaults() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
}

#[test]
fn full_file_parses() {
    let config = Config::from_toml(FULL).unwrap();
    config.validate().unwrap();

    assert_eq!(config.inventory.source, InventorySource::File);
    assert_eq!(config.inventory.path, Some(PathBuf::from("/var/lib/herd/instances.json")));
    assert_eq!(config.chat_latency(), Duration::ZERO);
    assert_eq!(config.reconciler.poll_period(), Duration::from_millis(500));
    assert_eq!(config.behavior.max_wait(), Duration::from_secs(2));
    assert_eq!(config.behavior.default_facing, Vec2::new(1.0, 0.0));
    // Unset fields in a section keep their defaults.
    assert_eq!(config.behavior.move_speed, 2.0);
    assert_eq!(config.bounds.waypoints, vec![Vec2::ZERO, Vec2::new(5.0, 5.0)]);
    assert_eq!(config.cost.warning_threshold, 3.0);
    assert_eq!(config.cost.max_cost, 5.0);
    assert_eq!(config.console.thinking_text, "...");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = Config::from_toml("[inventory]\nsorce = \"mock\"\n").unwrap_err();
    assert!(matches!(err, LifecycleError::ParseConfig(..)));
}

#[yare::parameterized(
    inverted_wait   = { "[behavior]\nmin_wait = 5.0\nmax_wait = 1.0\n" },
    zero_speed      = { "[behavior]\nmove_speed = 0.0\n" },
    zero_facing     = { "[behavior]\ndefault_facing = [0.0, 0.0]\n" },
    zero_period     = { "[reconciler]\npoll_period = 0.0\n" },
    empty_rect      = { "[bounds]\nmin = [1.0, 1.0]\nmax = [1.0, 5.0]\n" },
    file_no_path    = { "[inventory]\nsource = \"file\"\n" },
    inverted_scale  = { "[cost]\nmin_scale = 2.0\nmax_scale = 1.0\n" },
)]
fn invalid_config_is_rejected(text: &str) {
    let config = Config::from_toml(text).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn waypoints_allow_degenerate_rect() {
    let config =
        Config::from_toml("[bounds]\nmin = [0.0, 0.0]\nmax = [0.0, 0.0]\nwaypoints = [[1.0, 1.0]]\n").unwrap();
    config.validate().unwrap();
}

#[test]
#[serial]
fn load_reads_explicit_path() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[chat]\nlatency_ms = 42\n").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.chat_latency(), Duration::from_millis(42));
}

#[test]
#[serial]
fn load_missing_explicit_path_fails() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = Config::load(Some(&missing)).unwrap_err();
    assert!(matches!(err, LifecycleError::ConfigNotFound(path) if path == missing));
}

#[test]
#[serial]
fn load_uses_herd_config_env() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[log]\nlevel = \"warn\"\n").unwrap();
    std::env::set_var("HERD_CONFIG", file.path());

    let config = Config::load(None).unwrap();
    clear_env();
    assert_eq!(config.log.level, "warn");
}

#[test]
#[serial]
fn load_falls_back_to_xdg_config_home() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("herd")).unwrap();
    std::fs::write(dir.path().join("herd/config.toml"), "[console]\nthinking_text = \"hmm\"\n").unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let config = Config::load(None);
    std::env::remove_var("XDG_CONFIG_HOME");

    if cfg!(target_os = "linux") {
        assert_eq!(config.unwrap().console.thinking_text, "hmm");
    }
}

#[test]
#[serial]
fn env_overrides_apply_after_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[reconciler]\npoll_period = 5.0\n[log]\nlevel = \"warn\"\n").unwrap();
    std::env::set_var("HERD_POLL_PERIOD_MS", "250");
    std::env::set_var("HERD_POLL_TIMEOUT_MS", "750");
    std::env::set_var("HERD_LOG", "trace");

    let config = Config::load(Some(file.path()));
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.reconciler.poll_period(), Duration::from_millis(250));
    assert_eq!(config.reconciler.poll_timeout(), Duration::from_millis(750));
    assert_eq!(config.log.level, "trace");
}

#[test]
#[serial]
fn malformed_file_reports_path() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[chat\n").unwrap();
    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(matches!(&err, LifecycleError::ParseConfig(path, _) if path == file.path()));
}
