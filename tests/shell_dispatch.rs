//! End-to-end checks of the `adu-shell` binary's exit-code contract.

mod common;

use std::path::Path;

use common::TestContext;
use predicates::prelude::*;

const PVCONTROL_TYPE: &str = "microsoft/pantacor-pvcontrol";

#[test]
fn rollback_is_refused() {
    let ctx = TestContext::new();
    ctx.cli().args(["-t", PVCONTROL_TYPE, "-a", "rollback"]).assert().code(1);
}

#[test]
fn cancel_is_refused() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["--update-type", PVCONTROL_TYPE, "--update-action", "cancel"])
        .assert()
        .code(1);
}

#[test]
fn unknown_action_is_unsupported() {
    let ctx = TestContext::new();
    ctx.cli().args(["-t", PVCONTROL_TYPE, "-a", "format-disk", "-d", "r42"]).assert().code(3);
}

#[test]
fn unknown_update_type_is_unsupported() {
    let ctx = TestContext::new();
    ctx.cli().args(["-t", "microsoft/swupdate", "-a", "install", "-d", "/tmp/img"]).assert().code(3);
}

#[test]
fn common_type_refuses_everything_but_reboot() {
    let ctx = TestContext::new();
    ctx.cli().args(["-t", "common", "-a", "install", "-d", "/tmp/img"]).assert().code(3);
}

#[test]
fn install_without_target_data_fails() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["-t", PVCONTROL_TYPE, "-a", "install", "-l", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requires target data"));
}

#[test]
fn missing_pvcontrol_binary_is_exec_failure() {
    if Path::new("/usr/lib/adu/pvcontrol").exists() {
        return;
    }
    let ctx = TestContext::new();
    ctx.cli().args(["-t", PVCONTROL_TYPE, "-a", "get-status", "-d", "r42"]).assert().code(127);
}

#[test]
fn missing_required_arguments_is_usage_error() {
    let ctx = TestContext::new();
    ctx.cli().args(["-a", "install"]).assert().code(2);
    ctx.cli().args(["-t", PVCONTROL_TYPE]).assert().code(2);
}

#[test]
fn out_of_range_log_level_is_usage_error() {
    let ctx = TestContext::new();
    ctx.cli().args(["-t", PVCONTROL_TYPE, "-a", "cancel", "-l", "7"]).assert().code(2);
}

#[test]
fn version_flags_print_crate_version() {
    let ctx = TestContext::new();
    for flag in ["-v", "--version"] {
        ctx.cli()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
