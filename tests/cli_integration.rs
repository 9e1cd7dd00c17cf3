//! Integration tests for the `pb` CLI.
//!
//! Each test runs `pb` as a subprocess in a temp directory and checks stdout.
//! Without a phaseboard.toml in that directory the built-in demo data is used.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Get the path to the built `pb` binary.
fn pb_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("pb");
    path
}

/// Run `pb` with the given args and stdin, returning (stdout, stderr, success).
fn run_pb_with_stdin(dir: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let mut child = Command::new(pb_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("PHASEBOARD_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run pb");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn run_pb(dir: &Path, args: &[&str]) -> (String, String, bool) {
    run_pb_with_stdin(dir, args, "")
}

/// Run `pb` expecting success, return stdout.
fn run_pb_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_pb(dir, args);
    if !success {
        panic!("pb {:?} failed:\nstdout: {}\nstderr: {}", args, stdout, stderr);
    }
    stdout
}

fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("phaseboard.toml"), content).unwrap();
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

#[test]
fn test_show_builtin_data() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(tmp.path(), &["show"]);
    assert!(out.contains("== Project Milestones (milestones) =="));
    assert!(out.contains("[x] T-002 Setup backend API"));
    assert!(out.contains("== Kanban Board (kanban) =="));
    assert!(out.contains("[>] task-3 API integration @Charlie !high #API #Integration"));
}

#[test]
fn test_show_one_board() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(tmp.path(), &["show", "kanban"]);
    assert!(out.contains("task-1"));
    assert!(!out.contains("T-001"));
}

#[test]
fn test_show_unknown_board_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_pb(tmp.path(), &["show", "roadmap"]);
    assert!(!success);
    assert!(stderr.contains("board not found: roadmap"));
}

#[test]
fn test_show_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(tmp.path(), &["show", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["version"], 0);
    assert_eq!(parsed["boards"][0]["id"], "milestones");
    assert_eq!(parsed["boards"][1]["groups"][0]["items"][0]["priority"], "high");
    assert_eq!(parsed["stats"]["total"], 8);
}

#[test]
fn test_stats_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(tmp.path(), &["stats", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["total"], 8);
    assert_eq!(parsed["pending"], 4);
    assert_eq!(parsed["in_progress"], 2);
    assert_eq!(parsed["done"], 2);
    assert_eq!(parsed["completion"], 25);
    assert_eq!(parsed["boards"].as_array().unwrap().len(), 2);
}

#[test]
fn test_stats_text() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(tmp.path(), &["stats"]);
    assert!(out.contains("Kanban Board (kanban)  2 pending, 1 in progress, 1 done  25%"));
    assert!(out.contains("total: 8 items, 25% done"));
}

#[test]
fn test_team_search() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(tmp.path(), &["team", "--search", "BOB"]);
    assert!(out.contains("[BS] Bob Smith (M-002)  Developer  Offline"));
    assert!(!out.contains("Alice"));

    let out = run_pb_ok(tmp.path(), &["team", "--search", "zed"]);
    assert!(out.contains("no team members found"));
}

#[test]
fn test_team_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(tmp.path(), &["team", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["name"], "Alice Johnson");
    assert_eq!(parsed[0]["initials"], "AJ");
    assert_eq!(parsed[0]["role"], "Admin");
}

#[test]
fn test_feed() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(tmp.path(), &["feed"]);
    assert!(out.contains("Notifications (1 unread)"));
    assert!(out.contains("Your password was updated  (about 1 hour ago)"));
    assert!(out.contains("Messages (1 unread)"));
    assert!(out.contains("Alice: Can you check the design spec?"));
}

#[test]
fn test_nav_roles() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(tmp.path(), &["nav"]);
    assert!(out.starts_with("not logged in"));
    assert!(out.contains("/login"));
    assert!(!out.contains("/kanban"));

    let out = run_pb_ok(tmp.path(), &["nav", "--name", "Ada", "--role", "team_member"]);
    assert!(out.contains("Ada (team_member)"));
    assert!(out.contains("/kanban"));
    assert!(!out.contains("/milestones"));
    assert!(!out.contains("/team"));

    let out = run_pb_ok(tmp.path(), &["nav", "--name", "Ada", "--role", "admin"]);
    assert!(out.contains("/milestones"));
    assert!(out.contains("/team"));
}

#[test]
fn test_nav_rejects_blank_name_and_bad_role() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_pb(tmp.path(), &["nav", "--name", "  "]);
    assert!(!success);
    assert!(stderr.contains("enter your name"));

    let (_, stderr, success) = run_pb(tmp.path(), &["nav", "--name", "Ada", "--role", "owner"]);
    assert!(!success);
    assert!(stderr.contains("unknown role: owner"));
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn test_init_then_show() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(tmp.path(), &["init"]);
    assert!(out.contains("Wrote phaseboard.toml"));
    assert!(tmp.path().join("phaseboard.toml").exists());

    let (_, stderr, success) = run_pb(tmp.path(), &["init"]);
    assert!(!success);
    assert!(stderr.contains("already exists"));

    run_pb_ok(tmp.path(), &["init", "--force"]);
    let out = run_pb_ok(tmp.path(), &["show", "milestones"]);
    assert!(out.contains("Launch MVP (launch-mvp) [2]"));
}

#[test]
fn test_local_config_is_used() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(
        tmp.path(),
        r#"
[[boards]]
id = "ops"
name = "Operations"

[[boards.groups]]
id = "queue"
name = "Queue"

[[boards.groups.items]]
name = "Rotate keys"
"#,
    );
    let out = run_pb_ok(tmp.path(), &["show"]);
    assert!(out.contains("== Operations (ops) =="));
    assert!(out.contains("[ ] T-001 Rotate keys"));
    assert!(!out.contains("Kanban"));
}

#[test]
fn test_explicit_config_flag() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("other.toml");
    fs::write(&path, "[[boards]]\nid = \"x\"\nname = \"Elsewhere\"\n").unwrap();
    let out = run_pb_ok(tmp.path(), &["show", "-c", path.to_str().unwrap()]);
    assert!(out.contains("Elsewhere"));
}

#[test]
fn test_check_reports_duplicates_and_warnings() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(
        tmp.path(),
        r#"
[[boards]]
id = "a"
name = "A"

[[boards.groups]]
id = "dup"
name = ""

[[boards]]
id = "dup"
name = "B"
"#,
    );
    let out = run_pb_ok(tmp.path(), &["check"]);
    assert!(out.contains("Errors:"));
    assert!(out.contains("dup is used by"));
    assert!(out.contains("Warnings:"));
    assert!(out.contains("board dup has no groups"));
    assert!(out.contains("✗ config has errors"));

    // Loading the same config for real refuses it
    let (_, stderr, success) = run_pb(tmp.path(), &["show"]);
    assert!(!success);
    assert!(stderr.contains("duplicate id dup"));
}

#[test]
fn test_check_builtin_is_valid() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(tmp.path(), &["check", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["valid"], true);
}

// ---------------------------------------------------------------------------
// Apply
// ---------------------------------------------------------------------------

#[test]
fn test_apply_script_from_stdin() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = r#"
# move the first card to Done
{"op":"move_item","board":"kanban","from_group":"todo","from_index":0,"to_group":"done","to_index":0}
{"op":"set_item_status","board":"kanban","group":"done","item":"task-1","status":"done"}
{"op":"add_group","board":"kanban","name":"Review"}
"#;
    let (out, stderr, success) = run_pb_with_stdin(tmp.path(), &["apply", "-", "--board", "kanban"], script);
    assert!(success, "stderr: {}", stderr);
    assert!(out.contains("To Do (todo) [1]"));
    assert!(out.contains("Done (done) [2]"));
    assert!(out.contains("[x] task-1 Design login page"));
    assert!(out.contains("Review (G-005) [0]"));
    assert!(!out.contains("T-001"));
}

#[test]
fn test_apply_skips_bad_lines() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = r#"{"op":"set_item_status","board":"kanban","group":"todo","item":"task-1","status":"archived"}
not json
{"op":"rename_group","board":"kanban","group":"todo","name":"   "}
"#;
    let (out, stderr, success) = run_pb_with_stdin(tmp.path(), &["apply", "-", "--board", "kanban"], script);
    assert!(success);
    assert!(stderr.contains("line 1: invalid status: archived"));
    assert!(stderr.contains("line 2: invalid JSON"));
    assert!(stderr.contains("2 line(s) skipped"));
    assert!(out.contains("Untitled Group (todo) [2]"));
    assert!(out.contains("[ ] task-1 Design login page"));
}

#[test]
fn test_apply_strict_stops() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = "{\"op\":\"nope\"}\n";
    let (_, stderr, success) = run_pb_with_stdin(tmp.path(), &["apply", "-", "--strict"], script);
    assert!(!success);
    assert!(stderr.contains("error: line 1: invalid action"));
}

#[test]
fn test_apply_watch_prints_versions() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = r#"{"op":"delete_item","board":"kanban","group":"todo","item":"task-2"}
{"op":"delete_item","board":"kanban","group":"todo","item":"task-2"}
{"board":"kanban","drag":{"source":{"group":"todo","index":0},"destination":null}}
{"op":"toggle_item_done","board":"milestones","group":"launch-mvp","item":"T-001"}
"#;
    let (out, stderr, success) = run_pb_with_stdin(tmp.path(), &["apply", "-", "--watch"], script);
    assert!(success, "stderr: {}", stderr);
    // The repeated delete and the drop outside every group change nothing
    assert!(out.contains("v1  7 items, 28% done"));
    assert!(out.contains("v2  7 items, 42% done"));
    assert!(!out.contains("v3"));
}

#[test]
fn test_apply_script_file_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("script.jsonl");
    fs::write(
        &path,
        "{\"op\":\"rename_board\",\"board\":\"kanban\",\"name\":\"Sprint 12\"}\n",
    )
    .unwrap();
    let out = run_pb_ok(tmp.path(), &["apply", path.to_str().unwrap(), "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["version"], 1);
    assert_eq!(parsed["boards"][1]["name"], "Sprint 12");
}

#[test]
fn test_apply_missing_script() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_pb(tmp.path(), &["apply", "nope.jsonl"]);
    assert!(!success);
    assert!(stderr.contains("could not read nope.jsonl"));
}

// ---------------------------------------------------------------------------
// Roster and feed edits
// ---------------------------------------------------------------------------

#[test]
fn test_team_add_and_remove() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(
        tmp.path(),
        &["team", "--add", "  Dana White ", "--role", "product-manager", "--remove", "M-002"],
    );
    assert!(out.contains("[DW] Dana White (M-005)  Product Manager  Active"));
    assert!(!out.contains("Bob Smith"));
    assert!(out.contains("Alice Johnson"));

    // Unknown IDs are ignored
    let out = run_pb_ok(tmp.path(), &["team", "--remove", "M-404"]);
    assert_eq!(out.lines().count(), 3);
}

#[test]
fn test_team_add_rejects_bad_input() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_pb(tmp.path(), &["team", "--add", "Eve", "--role", "owner"]);
    assert!(!success);
    assert!(stderr.contains("unknown team role: owner"));

    let (_, stderr, success) = run_pb(tmp.path(), &["team", "--add", "   "]);
    assert!(!success);
    assert!(stderr.contains("member name is blank"));
}

#[test]
fn test_feed_read_and_remove() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_pb_ok(
        tmp.path(),
        &["feed", "--read", "N-1", "--read", "DM-1", "--remove", "DM-2", "--remove", "X-9"],
    );
    assert!(out.contains("Notifications (0 unread)"));
    assert!(out.contains("Messages (0 unread)"));
    assert!(out.contains("DM-1"));
    assert!(!out.contains("DM-2"));

    let out = run_pb_ok(tmp.path(), &["feed", "--remove", "N-2", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["notifications"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["unread_notifications"], 1);
}

// ---------------------------------------------------------------------------
// Bad seed data
// ---------------------------------------------------------------------------

#[test]
fn test_out_of_range_seed_values_fail_cleanly() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(
        tmp.path(),
        "[[notifications]]\nid = \"N-1\"\ntext = \"t\"\nminutes_ago = 9223372036854775807\n",
    );
    let (_, stderr, success) = run_pb(tmp.path(), &["show"]);
    assert!(!success);
    assert!(stderr.contains("error: N-1: minutes_ago = 9223372036854775807 is out of range"));
    assert!(!stderr.contains("panicked"));

    write_config(
        tmp.path(),
        "[[boards]]\nid = \"b\"\nname = \"B\"\n\n[[boards.groups]]\nid = \"T-18446744073709551615\"\nname = \"G\"\n",
    );
    let (_, stderr, success) = run_pb(tmp.path(), &["show"]);
    assert!(!success);
    assert!(stderr.contains("error: id T-18446744073709551615 is too large"));
    assert!(!stderr.contains("panicked"));
}
