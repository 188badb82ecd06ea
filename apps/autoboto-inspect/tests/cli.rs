//! End-to-end tests for the autoboto-inspect binary.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::process::Command;

fn inspect() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("autoboto-inspect"));
    cmd.env_remove("AUTOBOTO_OUTPUT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_should_list_bundled_services() {
    inspect()
        .arg("services")
        .assert()
        .success()
        .stdout(predicate::str::contains("mediaconvert"))
        .stdout(predicate::str::contains("restJson1"))
        .stdout(predicate::str::contains("awsJson1_1"))
        .stdout(predicate::str::contains("AWS WAF"));
}

#[test]
fn test_should_describe_shape_with_wire_names() {
    inspect()
        .args(["describe", "waf", "ByteMatchTuple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("waf.ByteMatchTuple (structure)"))
        .stdout(predicate::str::contains("TargetString (target_string): Bytes [required]"))
        .stdout(predicate::str::contains(
            "TextTransformation (text_transformation): TextTransformation",
        ));
}

#[test]
fn test_should_describe_camel_case_mediaconvert_fields() {
    let output = inspect()
        .args(["--format", "json", "describe", "mediaconvert", "CreateJobRequest"])
        .output()
        .expect("run autoboto-inspect");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["kind"], "input");
    let fields = json["fields"].as_array().expect("fields array");
    let role = fields
        .iter()
        .find(|f| f["wire_name"] == "role")
        .expect("role field");
    assert_eq!(role["required"], true);
    assert_eq!(role["type"], "String");
}

#[test]
fn test_should_honor_output_format_from_environment() {
    let output = inspect()
        .env("AUTOBOTO_OUTPUT", "json")
        .args(["enums", "waf", "ChangeAction"])
        .output()
        .expect("run autoboto-inspect");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["name"], "ChangeAction");
}

#[test]
fn test_should_reject_unsupported_output_format_from_environment() {
    inspect()
        .env("AUTOBOTO_OUTPUT", "yaml")
        .arg("services")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format"));
}

#[test]
fn test_should_list_operation_bindings() {
    inspect()
        .args(["operations", "mediaconvert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DELETE /2017-08-29/jobs/{Id} -> 202"));

    inspect()
        .args(["operations", "waf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X-Amz-Target: AWSWAF_20150824.UpdateWebACL"));
}

#[test]
fn test_should_pass_model_check() {
    inspect()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("mediaconvert: ok"))
        .stdout(predicate::str::contains("waf: ok"));
}

#[test]
fn test_should_fail_for_unknown_shape() {
    inspect()
        .args(["describe", "waf", "NoSuchShape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shape `NoSuchShape`"));
}

#[test]
fn test_should_reject_unknown_shape_kind() {
    inspect()
        .args(["shapes", "waf", "--kind", "exception"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shape kind"));
}
