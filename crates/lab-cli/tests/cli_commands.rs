//! Integration tests for the `ailab` command line.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn ailab() -> Command {
    Command::cargo_bin("ailab").unwrap()
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_all_activities() {
    ailab()
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("AI Training Simulator")
                .and(predicate::str::contains("Neural Network Explorer"))
                .and(predicate::str::contains("Decision Tree Game"))
                .and(predicate::str::contains("Pattern Recognition Challenge"))
                .and(predicate::str::contains("5 activities")),
        );
}

#[test]
fn list_json() {
    let output = ailab().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(5));
    assert_eq!(value[2]["kind"], "decision-tree");
}

// ---------------------------------------------------------------------------
// tree
// ---------------------------------------------------------------------------

#[test]
fn tree_default_shows_root_question() {
    ailab()
        .arg("tree")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Is it a living thing?")
                .and(predicate::str::contains("1 nodes")),
        );
}

#[test]
fn tree_default_cannot_be_played() {
    ailab()
        .args(["tree", "--choices", "yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one branch"));
}

#[test]
fn tree_sample_playthrough_reaches_dog() {
    ailab()
        .args(["tree", "--sample", "--choices", "yes,yes"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Decision Path")
                .and(predicate::str::contains("-> YES"))
                .and(predicate::str::contains("Dog")),
        );
}

#[test]
fn tree_rejects_answers_after_result() {
    ailab()
        .args(["tree", "--sample", "-c", "yes,yes,no"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("playthrough is over"));
}

#[test]
fn tree_rejects_unknown_branch() {
    ailab()
        .args(["tree", "--sample", "-c", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch"));
}

#[test]
fn tree_json_has_snapshot_and_path() {
    let output = ailab()
        .args(["tree", "--sample", "--choices", "no,no", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tree"]["node_count"], 7);
    assert_eq!(value["path"].as_array().map(Vec::len), Some(2));
    assert!(value["result"]["text"].as_str().is_some());
}

// ---------------------------------------------------------------------------
// quiz
// ---------------------------------------------------------------------------

#[test]
fn quiz_without_answers_lists_scenarios() {
    ailab()
        .arg("quiz")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("cute puppy")
                .and(predicate::str::contains("Sorting 10,000 photos"))
                .and(predicate::str::contains("best answer")),
        );
}

#[test]
fn quiz_perfect_run() {
    ailab()
        .args(["quiz", "--answers", "human,ai,human,ai,human,human"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("120 / 120 (100%)")
                .and(predicate::str::contains("AI Expert")),
        );
}

#[test]
fn quiz_partial_run() {
    ailab()
        .args(["quiz", "-a", "ai,ai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 6 scenarios answered"));
}

#[test]
fn quiz_too_many_answers() {
    ailab()
        .args(["quiz", "-a", "ai,ai,ai,ai,ai,ai,ai"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only 6 scenarios"));
}

// ---------------------------------------------------------------------------
// network
// ---------------------------------------------------------------------------

#[test]
fn network_forward_pass() {
    ailab()
        .args(["network", "10", "0"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Layer")
                .and(predicate::str::contains("hidden 1"))
                .and(predicate::str::contains("5.00  0.00  5.00"))
                .and(predicate::str::contains("2.50  2.50"))
                .and(predicate::str::contains("2.50")),
        );
}

#[test]
fn network_clamps_inputs() {
    let output = ailab()
        .args(["network", "-3", "42", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["inputs"][0], 0.0);
    assert_eq!(value["inputs"][1], 10.0);
}

// ---------------------------------------------------------------------------
// pattern
// ---------------------------------------------------------------------------

#[test]
fn pattern_scores_perfect_rounds() {
    ailab()
        .args(["pattern", "--rounds", "3", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("round  3:")
                .and(predicate::str::contains("Score after 3 rounds:"))
                .and(predicate::str::contains("60")),
        );
}

#[test]
fn pattern_caps_rounds() {
    ailab()
        .args(["pattern", "--rounds", "4000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rounds"));
}

#[test]
fn pattern_needs_a_round() {
    ailab()
        .args(["pattern", "--rounds", "0"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// logging
// ---------------------------------------------------------------------------

#[test]
fn debug_flag_logs_to_stderr() {
    ailab()
        .args(["-dd", "tree", "--sample", "-c", "yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("playthrough started"));
}
