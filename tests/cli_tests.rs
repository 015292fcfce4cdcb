//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn notipost_bin() -> Command {
    Command::cargo_bin("notipost").expect("binary builds")
}

#[test]
fn no_arguments_prints_usage_and_exits_one() {
    notipost_bin()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: notipost"));
}

#[test]
fn subtitle_alone_is_not_a_valid_request() {
    notipost_bin()
        .args(["-subtitle", "release"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: notipost"));
}

#[test]
fn sound_and_group_without_text_exit_one() {
    notipost_bin()
        .args(["-sound", "Glass", "-group", "ci", "-contentImage", "/tmp/a.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: notipost"));
}

#[test]
fn unrecognized_tokens_alone_exit_one() {
    notipost_bin()
        .args(["--verbose", "stray", "-x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: notipost"));
}

#[test]
fn trailing_title_flag_without_value_exits_one() {
    // The valueless flag is ignored, leaving no displayable content.
    notipost_bin()
        .arg("-title")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: notipost"));
}

#[test]
fn valid_request_exits_zero_even_without_a_daemon() {
    // Delivery is best-effort: with a valid request, the process exits 0
    // whether or not a notification service accepted the submission.
    notipost_bin()
        .args(["-title", "Build", "-message", "Done"])
        .assert()
        .code(0);
}

#[test]
fn unknown_sound_reports_fallback_exactly_once_on_stderr() {
    notipost_bin()
        .args(["-title", "Build", "-message", "Done", "-sound", "unknown-sound-xyz"])
        .assert()
        .code(0)
        .stderr(
            predicate::str::contains("Sound \"unknown-sound-xyz.aiff\" not found").count(1),
        );
}

// Note: permission-denied and submission-callback behavior are covered by
// unit tests with fake ports; the real platform adapters cannot be driven
// into those states deterministically from an integration test.
