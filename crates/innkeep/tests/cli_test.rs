//! Integration tests for the `innkeep` CLI binary.
//!
//! Parsing, help, completions and config handling run offline; the
//! server-bound tests talk to a wiremock server.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `innkeep` binary with env isolation.
///
/// Clears all `INNKEEP_*` env vars and points config and data directories
/// at a nonexistent path so tests never touch the user's real files.
fn innkeep_cmd() -> assert_cmd::Command {
    isolated_cmd(Path::new("/tmp/innkeep-cli-test-nonexistent"))
}

/// Like [`innkeep_cmd`], but rooted at `home` so config writes land there.
fn isolated_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("innkeep");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("INNKEEP_PROFILE")
        .env_remove("INNKEEP_SERVER")
        .env_remove("INNKEEP_SURFACE")
        .env_remove("INNKEEP_OUTPUT")
        .env_remove("INNKEEP_INSECURE")
        .env_remove("INNKEEP_TIMEOUT")
        .env_remove("INNKEEP_SESSION_FILE")
        .env_remove("INNKEEP_IDENTITY")
        .env_remove("INNKEEP_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn read_session(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = innkeep_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    innkeep_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("hotel")
            .and(predicate::str::contains("rooms"))
            .and(predicate::str::contains("reservations"))
            .and(predicate::str::contains("frontdesk")),
    );
}

#[test]
fn test_version_flag() {
    innkeep_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("innkeep"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    innkeep_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    innkeep_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Argument errors ─────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = innkeep_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_guest_search_requires_a_criterion() {
    let output = innkeep_cmd().args(["guests", "search"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_bad_date_is_rejected_by_parser() {
    let output = innkeep_cmd()
        .args(["rooms", "available", "2025-13-01", "2025-13-03"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_available_checks_date_order() {
    let output = innkeep_cmd()
        .args(["rooms", "available", "2025-05-03", "2025-05-01"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("check_out"), "Expected field name:\n{text}");
}

#[test]
fn test_unknown_profile_fails() {
    let output = innkeep_cmd()
        .args(["--profile", "nowhere", "rooms", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(text.contains("nowhere"), "Expected profile name:\n{text}");
}

#[test]
fn test_reservations_mine_requires_login() {
    let dir = tempfile::tempdir().unwrap();
    let output = isolated_cmd(dir.path())
        .args(["reservations", "mine"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
    let text = combined_output(&output);
    assert!(text.contains("login"), "Expected login hint:\n{text}");
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_set_then_show() {
    let dir = tempfile::tempdir().unwrap();

    isolated_cmd(dir.path())
        .args(["config", "set", "server", "http://hotel.test:8081"])
        .assert()
        .success();
    isolated_cmd(dir.path())
        .args(["config", "set", "surface", "admin"])
        .assert()
        .success();
    isolated_cmd(dir.path())
        .args(["config", "set", "password", "hunter22"])
        .assert()
        .success();

    let output = isolated_cmd(dir.path())
        .args(["config", "show", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let shown: Value = serde_json::from_slice(&output.stdout).unwrap();
    let profile = &shown["profiles"]["default"];
    assert_eq!(profile["server"], "http://hotel.test:8081");
    assert_eq!(profile["surface"], "admin");
    assert_eq!(profile["password"], "****");
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let output = isolated_cmd(dir.path())
        .args(["config", "set", "colour", "blue"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("colour"));
}

#[test]
fn test_config_use_unknown_profile() {
    let dir = tempfile::tempdir().unwrap();
    let output = isolated_cmd(dir.path())
        .args(["config", "use", "frontdesk"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("frontdesk"));
}

// ── Against a mock server ───────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_rooms_list_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"id": 1, "roomNumber": "101", "roomType": "STANDARD", "price": 288.0},
                {"id": 2, "roomNumber": "102", "roomType": "DELUXE", "price": 388.0}
            ]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = isolated_cmd(dir.path())
        .args(["--server", &server.uri(), "rooms", "list", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let rooms: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rooms.as_array().unwrap().len(), 2);
    assert_eq!(rooms[1]["roomNumber"], "102");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rooms_list_plain_prints_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms/active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"id": 7}, {"id": 9}]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["-s", &server.uri(), "rooms", "list", "--active", "-o", "plain"])
        .assert()
        .success()
        .stdout("7\n9\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_guest_login_persists_session_and_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "li.lei@example.com",
            "password": "s3cret",
            "role": "GUEST"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"token": "guest-jwt"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reservations/me"))
        .and(header("authorization", "Bearer guest-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"id": 31, "status": "CONFIRMED"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");
    let session_arg = session_file.to_str().unwrap();

    isolated_cmd(dir.path())
        .args(["-s", &server.uri(), "--session-file", session_arg])
        .args(["login", "li.lei@example.com", "--password-stdin"])
        .write_stdin("s3cret\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Logged in as li.lei@example.com"));

    let session = read_session(&session_file);
    assert_eq!(session["token"], "guest-jwt");
    assert_eq!(session["userRole"], "GUEST");
    assert_eq!(session["userEmail"], "li.lei@example.com");

    isolated_cmd(dir.path())
        .args(["-s", &server.uri(), "--session-file", session_arg])
        .args(["reservations", "mine", "-o", "plain"])
        .assert()
        .success()
        .stdout("31\n");

    isolated_cmd(dir.path())
        .args(["--session-file", session_arg, "logout"])
        .assert()
        .success();
    let session = read_session(&session_file);
    assert!(session.get("token").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_login_reports_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = isolated_cmd(dir.path())
        .args(["-s", &server.uri(), "--surface", "admin"])
        .args(["login", "manager1", "--password-stdin"])
        .write_stdin("wrong\n")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(combined_output(&output).contains("Invalid credentials"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_login_over_existing_session_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "密码错误"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");
    std::fs::write(
        &session_file,
        r#"{"adminToken":"old-token","adminUsername":"someone"}"#,
    )
    .unwrap();

    let output = isolated_cmd(dir.path())
        .args(["-s", &server.uri(), "--surface", "admin"])
        .args(["--session-file", session_file.to_str().unwrap()])
        .args(["login", "manager1", "--password-stdin"])
        .write_stdin("wrong\n")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3), "{}", combined_output(&output));
    let text = combined_output(&output);
    assert!(text.contains("密码错误"), "Expected server message:\n{text}");
    assert!(!text.contains("Logged in"), "Unexpected success line:\n{text}");

    let session = read_session(&session_file);
    assert_eq!(session["adminToken"], "old-token");
    assert_eq!(session["adminUsername"], "someone");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_id_card_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/guests/search/id-card"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "未找到对应身份证号的宾客"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = isolated_cmd(dir.path())
        .args(["-s", &server.uri(), "guests", "search", "--id-card", "110101199001011234"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_message_is_shown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/guests"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "database unavailable"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = isolated_cmd(dir.path())
        .args(["-s", &server.uri(), "guests", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("database unavailable"));
}

#[test]
fn test_unreachable_server_is_a_connection_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = isolated_cmd(dir.path())
        .args(["-s", "http://127.0.0.1:1", "--timeout", "5", "rooms", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7), "{}", combined_output(&output));
}
