//! # Binary Tests
//!
//! Runs the compiled `wikirand` binary against a mock summary endpoint.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::process::Command;
use wikirand_test_utils::{json_response, lorem_ipsum, mount_summary, url_template};
use wiremock::MockServer;

fn wikirand(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("wikirand").unwrap();
    cmd.arg("--api-url-template").arg(url_template(server));
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_prints_page_and_exits_zero() {
    let server = MockServer::start().await;
    mount_summary(&server, "en", json_response(lorem_ipsum())).await;

    wikirand(&server)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lorem Ipsum"))
        .stdout(predicate::str::contains("Lorem ipsum dolor sit amet"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_language_flag() {
    let server = MockServer::start().await;
    mount_summary(&server, "pl", json_response(lorem_ipsum())).await;

    wikirand(&server).arg("--language=pl").assert().success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_exits_one_on_validation_error() {
    let server = MockServer::start().await;
    mount_summary(&server, "en", json_response(Value::Null)).await;

    wikirand(&server)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: invalid page summary"));
}

#[test]
fn test_binary_version_flag() {
    Command::cargo_bin("wikirand")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_binary_help_hides_endpoint_override() {
    Command::cargo_bin("wikirand")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--language"))
        .stdout(predicate::str::contains("api-url-template").not());
}
