//! E2E tests for the `backlight` binary.
//!
//! None of these can reach a write: every invocation is rejected before the
//! commit stage, whether or not the gmux attribute exists on this machine.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, starts_with};

fn backlight_cmd() -> assert_cmd::Command {
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("backlight");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_flag_prints_build_info() {
    backlight_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(starts_with(format!("backlight {}", env!("CARGO_PKG_VERSION"))));
}

/// The reason depends on the host: without a gmux attribute the read fails
/// first. Numeric rejection itself is covered against in-memory attributes
/// in the library's pipeline tests.
#[test]
fn numeric_argument_fails_without_writing() {
    backlight_cmd()
        .arg("500")
        .assert()
        .code(1)
        .stdout("")
        .stderr(starts_with("Unable to set brightness:"));
}

#[test]
fn unknown_direction_fails_without_writing() {
    backlight_cmd()
        .arg("sideways")
        .assert()
        .code(1)
        .stderr(contains("Unable to set brightness:"));
}

#[test]
fn extra_arguments_are_a_usage_error() {
    backlight_cmd()
        .args(["up", "down"])
        .assert()
        .failure()
        .stderr(contains("Usage").and(contains("DIRECTION")));
}
