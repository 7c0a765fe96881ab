//! Tests for environment accessor helpers.
//!
//! Only in-memory targets are exercised here; process-environment writes
//! are global state and are left to callers who opt into them.

use envsub::env::{var_or, EnvTarget};

#[test]
fn test_memory_target_set_and_get() {
    let mut target = EnvTarget::memory();
    assert!(!target.contains("KEY"));
    assert_eq!(target.get("KEY"), None);

    target.set("KEY", "value");
    assert!(target.contains("KEY"));
    assert_eq!(target.get("KEY"), Some("value".to_string()));
}

#[test]
fn test_default_target_is_memory() {
    let target = EnvTarget::default();
    assert!(target.as_memory().is_some());
}

#[test]
fn test_apply_writes_every_pair() {
    let vars = envsub::parse("A=1\nB=$A-2").unwrap();
    let mut target = EnvTarget::memory();

    let written = target.apply(&vars);

    assert_eq!(written, 2);
    assert_eq!(target.get("A"), Some("1".to_string()));
    assert_eq!(target.get("B"), Some("1-2".to_string()));
}

#[test]
fn test_apply_overwrites_existing_bindings() {
    let vars = envsub::parse("A=new").unwrap();
    let mut target = EnvTarget::memory();
    target.set("A", "old");

    target.apply(&vars);

    assert_eq!(target.get("A"), Some("new".to_string()));
}

#[test]
fn test_apply_if_absent_keeps_existing_bindings() {
    let vars = envsub::parse("A=from-file\nB=from-file").unwrap();
    let mut target = EnvTarget::memory();
    target.set("A", "preexisting");

    let report = target.apply_if_absent(&vars);

    assert_eq!(report.applied, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(target.get("A"), Some("preexisting".to_string()));
    assert_eq!(target.get("B"), Some("from-file".to_string()));
}

#[test]
fn test_as_memory_exposes_applied_map() {
    let vars = envsub::parse("ONLY=1").unwrap();
    let mut target = EnvTarget::memory();
    target.apply(&vars);

    let map = target.as_memory().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("ONLY"), Some(&"1".to_string()));
}

#[test]
fn test_var_or_falls_back_for_unset_names() {
    assert_eq!(
        var_or("ENVSUB_TEST_DEFINITELY_UNSET_VARIABLE", "fallback"),
        "fallback"
    );
}
