//! Integration Tests for the console session
//!
//! Drives full scripts through `Session::run` and checks the JSON output.

use memo_cache::{BoundedCache, CacheConfig, ManualClock, Session};
use serde_json::Value;

// == Helper Functions ==

fn create_test_session(config: CacheConfig) -> (Session<ManualClock>, ManualClock) {
    let clock = ManualClock::new(0);
    let cache = BoundedCache::with_clock(config, clock.clone()).unwrap();
    (Session::new(cache), clock)
}

fn run_script(session: &mut Session<ManualClock>, script: &str) -> Vec<Value> {
    let mut output = Vec::new();
    session.run(script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_eviction_script() {
    let (mut session, _) = create_test_session(CacheConfig::default().with_max_size(3));

    let out = run_script(
        &mut session,
        "set a 1\nset b 2\nset c 3\nset d 4\nkeys\nget a\nset e 5\nkeys\n",
    );

    assert_eq!(out.len(), 8);
    assert_eq!(out[4]["keys"], serde_json::json!(["b", "c", "d"]));
    assert_eq!(out[5]["found"], false);
    assert_eq!(out[7]["keys"], serde_json::json!(["c", "d", "e"]));
}

#[test]
fn test_null_versus_missing() {
    let (mut session, _) = create_test_session(CacheConfig::default());

    let out = run_script(&mut session, "set n null\nget n\nget missing\n");

    assert_eq!(out[1]["found"], true);
    assert!(out[1].get("value").is_some());
    assert!(out[1]["value"].is_null());

    assert_eq!(out[2]["found"], false);
    assert!(out[2].get("value").is_none());
}

#[test]
fn test_expiry_and_prune_script() {
    let (mut session, clock) = create_test_session(CacheConfig::default().with_ttl_ms(100));

    run_script(&mut session, "set k scan-result\n");
    clock.set(150);

    let out = run_script(&mut session, "get k\nhas k\nsize\nprune\nprune\nsize\n");
    assert_eq!(out[0]["found"], false);
    assert_eq!(out[1]["present"], false);
    assert_eq!(out[2]["size"], 1);
    assert_eq!(out[3]["removed"], 1);
    assert_eq!(out[4]["removed"], 0);
    assert_eq!(out[5]["size"], 0);
}

#[test]
fn test_admission_script() {
    let (mut session, _) = create_test_session(CacheConfig::default().with_max_value_size(10));

    let out = run_script(
        &mut session,
        "set k \"12345678901\"\nget k\nset k \"1234567890\"\nget k\nstats\n",
    );

    assert_eq!(out[0]["stored"], false);
    assert_eq!(out[1]["found"], false);
    assert_eq!(out[2]["stored"], true);
    assert_eq!(out[3]["value"], "1234567890");
    assert_eq!(out[4]["op"], "stats");
    assert_eq!(out[4]["maxValueSize"], 10);
    assert_eq!(out[4]["rejections"], 1);
}

#[test]
fn test_errors_do_not_stop_session() {
    let (mut session, _) = create_test_session(CacheConfig::default());

    let out = run_script(&mut session, "frobnicate\ndel\n# note\nset k v\ndel k\nclear\nsize\n");

    assert_eq!(out.len(), 6);
    assert_eq!(out[0]["op"], "error");
    assert_eq!(out[1]["op"], "error");
    assert_eq!(out[2]["stored"], true);
    assert_eq!(out[3]["removed"], true);
    assert_eq!(out[4]["op"], "clear");
    assert_eq!(out[5]["size"], 0);
}
