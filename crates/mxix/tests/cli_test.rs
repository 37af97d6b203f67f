//! Integration tests for the `mxix` CLI binary.
//!
//! Every test runs against its own temporary data and config directory,
//! so nothing touches the user's real content.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `mxix` binary with env isolation.
fn mxix_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mxix");
    cmd.env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("XDG_DATA_HOME", dir.path().join("share"))
        .env("MXIX_CONFIG", dir.path().join("config.toml"))
        .env("MXIX_DATA_DIR", dir.path().join("data"))
        .env("NO_COLOR", "1")
        .env_remove("MXIX_OUTPUT")
        .env_remove("MXIX_PASSWORD")
        .env_remove("MXIX_ADMIN_PASSWORD")
        .env_remove("MXIX_KEY_POLICY")
        .env_remove("RUST_LOG");
    cmd
}

/// Same as [`mxix_cmd`], authenticated with the default admin password.
fn admin_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = mxix_cmd(dir);
    cmd.args(["--password", "admin123"]);
    cmd
}

fn write_json(dir: &TempDir, name: &str, value: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn test_city() -> serde_json::Value {
    serde_json::json!({
        "id": "tst",
        "name": "Test City",
        "coordinates": [0, 0],
        "code": "TST",
        "region": "EUROPE",
        "asns": 0,
        "sites": 0,
        "asnList": [],
        "enabledSites": []
    })
}

fn json_stdout(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

fn slot_file(dir: &TempDir, key: &str) -> std::path::PathBuf {
    dir.path().join("data").join(format!("{key}.json"))
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let dir = TempDir::new().unwrap();
    let output = mxix_cmd(&dir).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let text = format!("{stdout}{stderr}");
    assert!(text.contains("Usage"), "no usage in:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    mxix_cmd(&dir).arg("--help").assert().success().stdout(
        predicate::str::contains("locations")
            .and(predicate::str::contains("services"))
            .and(predicate::str::contains("stats"))
            .and(predicate::str::contains("reset")),
    );
}

#[test]
fn test_completions_zsh() {
    let dir = TempDir::new().unwrap();
    mxix_cmd(&dir)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Reads ───────────────────────────────────────────────────────────

#[test]
fn test_locations_list_defaults() {
    let dir = TempDir::new().unwrap();
    let list = json_stdout(mxix_cmd(&dir).args(["-o", "json", "locations", "list"]));
    assert_eq!(list.as_array().unwrap().len(), 10);
    assert!(!slot_file(&dir, "mx-ix-locations").exists());
}

#[test]
fn test_locations_list_plain_by_region() {
    let dir = TempDir::new().unwrap();
    mxix_cmd(&dir)
        .args(["-o", "plain", "locations", "list", "--region", "europe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ams").and(predicate::str::contains("nyc").not()));
}

#[test]
fn test_show_missing_location_exits_not_found() {
    let dir = TempDir::new().unwrap();
    mxix_cmd(&dir)
        .args(["locations", "show", "zzz"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_stats_catalog_formats_values() {
    let dir = TempDir::new().unwrap();
    mxix_cmd(&dir)
        .args(["-o", "plain", "stats", "catalog", "--category", "network"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("total_peers\t4,921")
                .and(predicate::str::contains("total_traffic").not()),
        );
}

#[test]
fn test_stats_city_scales_catalog() {
    let dir = TempDir::new().unwrap();
    let city = json_stdout(mxix_cmd(&dir).args(["-o", "json", "stats", "city", "ams"]));
    assert_eq!(city["locationId"], "ams");
    assert_eq!(city["trafficData"].as_array().unwrap().len(), 24);
    let peers = city["stats"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == "total_peers")
        .unwrap();
    assert_eq!(peers["value"], 1525.0);
}

#[test]
fn test_stats_capacity_json() {
    let dir = TempDir::new().unwrap();
    let mut cmd = mxix_cmd(&dir);
    cmd.args(["-o", "json", "stats", "capacity", "--ticks", "3"]);
    let feed = json_stdout(&mut cmd);
    let bars = feed["bars"].as_array().unwrap();
    assert_eq!(bars.len(), 100);
    for bar in bars {
        let value = bar.as_f64().unwrap();
        assert!((20.0..=75.0).contains(&value), "{value}");
    }
}

// ── Admin gate ──────────────────────────────────────────────────────

#[test]
fn test_mutation_requires_admin() {
    let dir = TempDir::new().unwrap();
    let file = write_json(&dir, "tst.json", &test_city());
    mxix_cmd(&dir)
        .args(["locations", "add", "--from-file"])
        .arg(&file)
        .assert()
        .code(3);

    mxix_cmd(&dir)
        .args(["--password", "wrong", "locations", "add", "--from-file"])
        .arg(&file)
        .assert()
        .code(3);
    assert!(!slot_file(&dir, "mx-ix-locations").exists());
}

#[test]
fn test_login_session_persists_until_logout() {
    let dir = TempDir::new().unwrap();
    admin_cmd(&dir).args(["admin", "login"]).assert().success();
    mxix_cmd(&dir)
        .args(["-o", "plain", "admin", "status"])
        .assert()
        .success()
        .stdout("true\n");

    mxix_cmd(&dir)
        .args(["stats", "set-network", "--active-nodes", "5000"])
        .assert()
        .success();

    mxix_cmd(&dir).args(["admin", "logout"]).assert().success();
    mxix_cmd(&dir)
        .args(["stats", "set-network", "--throughput", "1"])
        .assert()
        .code(3);
}

#[test]
fn test_configured_password_env() {
    let dir = TempDir::new().unwrap();
    mxix_cmd(&dir)
        .env("MXIX_ADMIN_PASSWORD", "s3cret")
        .args(["--password", "s3cret", "admin", "login"])
        .assert()
        .success();
    mxix_cmd(&dir)
        .env("MXIX_ADMIN_PASSWORD", "s3cret")
        .args(["--password", "admin123", "reset", "-y"])
        .assert()
        .code(3);
}

// ── Mutations ───────────────────────────────────────────────────────

#[test]
fn test_add_persist_remove_scenario() {
    let dir = TempDir::new().unwrap();
    let file = write_json(&dir, "tst.json", &test_city());

    admin_cmd(&dir)
        .args(["locations", "add", "--from-file"])
        .arg(&file)
        .assert()
        .success();

    let raw = std::fs::read_to_string(slot_file(&dir, "mx-ix-locations")).unwrap();
    let persisted: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.as_array().unwrap().len(), 11);

    let shown = json_stdout(mxix_cmd(&dir).args(["-o", "json", "locations", "show", "tst"]));
    assert_eq!(shown["name"], "Test City");

    admin_cmd(&dir)
        .args(["-y", "locations", "remove", "tst"])
        .assert()
        .success();
    let list = json_stdout(mxix_cmd(&dir).args(["-o", "json", "locations", "list"]));
    assert_eq!(list.as_array().unwrap().len(), 10);
}

#[test]
fn test_remove_without_yes_is_refused_non_interactively() {
    let dir = TempDir::new().unwrap();
    admin_cmd(&dir)
        .args(["locations", "remove", "ams"])
        .assert()
        .code(2);
}

#[test]
fn test_unique_key_policy_conflict() {
    let dir = TempDir::new().unwrap();
    mxix_cmd(&dir)
        .args(["config", "set", "key_policy", "unique"])
        .assert()
        .success();

    let mut dup = test_city();
    dup["id"] = "ams".into();
    let file = write_json(&dir, "dup.json", &dup);
    admin_cmd(&dir)
        .args(["locations", "add", "--from-file"])
        .arg(&file)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_coordinates_rejected() {
    let dir = TempDir::new().unwrap();
    let mut bad = test_city();
    bad["coordinates"] = serde_json::json!([52.37, 190.0]);
    let file = write_json(&dir, "bad.json", &bad);
    admin_cmd(&dir)
        .args(["locations", "add", "--from-file"])
        .arg(&file)
        .assert()
        .code(2);
}

#[test]
fn test_services_import_and_show() {
    let dir = TempDir::new().unwrap();
    let file = write_json(
        &dir,
        "services.json",
        &serde_json::json!([{
            "id": "peering",
            "category": "Peering",
            "tagline": "Connect once, reach everyone",
            "description": "Public and private peering",
            "image": "/img/peering.jpg",
            "items": [{
                "name": "Public Peering",
                "icon": "network",
                "description": "Route server access",
                "benefits": ["Lower latency"],
                "features": ["BGP route servers"]
            }]
        }]),
    );

    admin_cmd(&dir)
        .args(["services", "import", "--from-file"])
        .arg(&file)
        .assert()
        .success();

    mxix_cmd(&dir)
        .args(["-o", "plain", "services", "items", "peering"])
        .assert()
        .success()
        .stdout("Public Peering\n");
}

#[test]
fn test_set_fabric_from_file_conflicts_with_field_flags() {
    let dir = TempDir::new().unwrap();
    admin_cmd(&dir)
        .args(["stats", "set-fabric", "-F", "fabric.json"])
        .args(["--avg-latency", "<4ms"])
        .assert()
        .code(2);
    assert!(!slot_file(&dir, "mx-ix-global-fabric-stats").exists());
}

#[test]
fn test_reset_clears_persisted_slots() {
    let dir = TempDir::new().unwrap();
    admin_cmd(&dir)
        .args(["stats", "set-fabric", "--total-capacity", "6 Tbps"])
        .assert()
        .success();
    assert!(slot_file(&dir, "mx-ix-global-fabric-stats").exists());

    admin_cmd(&dir).args(["-y", "reset"]).assert().success();
    assert!(!slot_file(&dir, "mx-ix-global-fabric-stats").exists());

    let shown = json_stdout(mxix_cmd(&dir).args(["-o", "json", "stats", "show"]));
    assert_eq!(shown["globalFabricStats"]["totalCapacity"], "5.2 Tbps");
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_set_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    mxix_cmd(&dir)
        .args(["config", "set", "profiles.home", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn test_config_default_output_applies() {
    let dir = TempDir::new().unwrap();
    mxix_cmd(&dir)
        .args(["config", "set", "defaults.output", "plain"])
        .assert()
        .success();
    mxix_cmd(&dir)
        .args(["admin", "status"])
        .assert()
        .success()
        .stdout("false\n");
}
